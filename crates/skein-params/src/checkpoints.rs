//! Hard-coded block checkpoints
//!
//! What makes a good checkpoint block: it is surrounded by blocks with
//! reasonable timestamps (none before it with a later time, none after it
//! with an earlier one) and it contains no strange transactions.

use crate::{Error, Result};
use bitcoin::BlockHash;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// A blockchain checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checkpoint {
    /// Block height
    pub height: u32,
    /// Expected block hash
    pub hash: BlockHash,
}

/// Checkpoints for one network, with chain statistics as of the newest one
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointStore {
    entries: BTreeMap<u32, BlockHash>,
    /// Timestamp (Unix epoch) of the newest checkpoint block
    pub last_checkpoint_time: i64,
    /// Transactions from genesis through the newest checkpoint
    pub last_checkpoint_tx_count: u64,
    /// Estimated transactions per day after the newest checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointStore {
    /// Create a store; heights must be unique and at least one entry given
    pub fn new(
        entries: impl IntoIterator<Item = (u32, BlockHash)>,
        last_checkpoint_time: i64,
        last_checkpoint_tx_count: u64,
        transactions_per_day: f64,
    ) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (height, hash) in entries {
            if map.insert(height, hash).is_some() {
                return Err(Error::DuplicateCheckpoint(height));
            }
        }
        if map.is_empty() {
            return Err(Error::EmptyCheckpoints);
        }
        Ok(Self {
            entries: map,
            last_checkpoint_time,
            last_checkpoint_tx_count,
            transactions_per_day,
        })
    }

    /// Build from a compiled-in table of hex hashes.
    ///
    /// Tables are audited literals; a malformed, duplicate or empty table
    /// is a broken build, not a runtime condition.
    pub(crate) fn from_table(
        table: &[(u32, &str)],
        last_checkpoint_time: i64,
        last_checkpoint_tx_count: u64,
        transactions_per_day: f64,
    ) -> Self {
        let store = table
            .iter()
            .map(|(height, hash)| parse_block_hash(hash).map(|hash| (*height, hash)))
            .collect::<Result<Vec<_>>>()
            .and_then(|entries| {
                Self::new(
                    entries,
                    last_checkpoint_time,
                    last_checkpoint_tx_count,
                    transactions_per_day,
                )
            });
        match store {
            Ok(store) => store,
            Err(err) => {
                tracing::error!("Compiled-in checkpoint table is invalid: {}", err);
                panic!("invalid compiled-in checkpoint table: {err}");
            }
        }
    }

    /// Mainnet checkpoints
    pub fn mainnet() -> Self {
        Self::from_table(
            MAINNET_CHECKPOINTS,
            1_412_925_146, // UNIX timestamp of last checkpoint block
            341_404,       // total transactions between genesis and last checkpoint
            720.0,         // estimated transactions per day after checkpoint
        )
    }

    /// Testnet checkpoints
    pub fn testnet() -> Self {
        Self::from_table(TESTNET_CHECKPOINTS, 1_382_385_267, 0, 720.0)
    }

    /// Regtest checkpoints
    pub fn regtest() -> Self {
        Self::from_table(REGTEST_CHECKPOINTS, 0, 0, 0.0)
    }

    /// Expected hash at `height`, if that height is checkpointed
    pub fn get(&self, height: u32) -> Option<&BlockHash> {
        self.entries.get(&height)
    }

    /// Newest checkpoint
    pub fn latest(&self) -> Option<Checkpoint> {
        self.entries
            .iter()
            .next_back()
            .map(|(height, hash)| Checkpoint { height: *height, hash: *hash })
    }

    /// Checkpoints from newest to oldest
    pub fn iter_newest_first(&self) -> impl Iterator<Item = Checkpoint> + '_ {
        self.entries
            .iter()
            .rev()
            .map(|(height, hash)| Checkpoint { height: *height, hash: *hash })
    }

    /// All checkpoints, oldest first
    pub fn checkpoints(&self) -> Vec<Checkpoint> {
        self.entries
            .iter()
            .map(|(height, hash)| Checkpoint { height: *height, hash: *hash })
            .collect()
    }

    /// Get checkpoint count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a block hash in display (big-endian) hex
pub(crate) fn parse_block_hash(hex: &str) -> Result<BlockHash> {
    BlockHash::from_str(hex).map_err(|e| Error::InvalidHash(format!("{}: {}", hex, e)))
}

const MAINNET_CHECKPOINTS: &[(u32, &str)] = &[
    (0, "0000046cebed69de151ada93a60cb8a5f9490a196399abe714bb83ad5b20f985"),
    (8_001, "0000000012ce3340428fdd525c7ae8ab62cbdc104409ccd9cc03042c5c2fa100"),
    (52_721, "00000000004781ede745a02508e2680343cb12d53ca466b6066d8d3b323a1b46"),
    (84_202, "00000000032f902c2da525c75217e9b4219eb3b1aaf56f2f5ca6fb65f9de4ab4"),
    (95_197, "000000000237a7236374b307d88f07be7fe61c974499c31bf547e68fe5d2f6c7"),
    (112_814, "0000000004fb21b45b3b30eb4f1a8db0899e7d8893c35fce0af5fd1ef7b1ec79"),
    (117_682, "00000000015918d209c230db8141fcf177c9431fcf153ddf563ff3e83fb6d847"),
    (139_538, "00000000017ef670edcab8e120efdd5a4d44972095aa538a1a505bb23424d72f"),
    (144_721, "0000000000f96c1c5e88bd5ee1819a42469ab0cbb463de66b36cdba75b90a538"),
    (220_450, "0000000003fe832596716f971f3acf2975b198ec2536c6ba23e3f3746ce6c666"),
    (304_170, "000000002122d751e98911571800e0c8f2143fc7b93cccd6d661e1398d3bbaa0"),
];

const TESTNET_CHECKPOINTS: &[(u32, &str)] =
    &[(0, "00000015f9fb4c1c9cc55ad08b6ec47fcce2b00bc482a2c48914ab6506daf439")];

const REGTEST_CHECKPOINTS: &[(u32, &str)] =
    &[(0, "6620ff0f4b001bb6c6999d85a61f406a3b213a4ed0364d1b10a46596fcb09785")];
