//! Checkpoint gate for block acceptance
//!
//! These checks run before full validation. A block that conflicts with a
//! checkpoint is rejected without touching scripts or signatures, so forged
//! alternate histories at pinned heights cost the node almost nothing.
//!
//! Callers pass snapshots of chain state; holding whatever lock guards the
//! block index while taking the snapshot is their job.

use crate::checkpoints::CheckpointStore;
use crate::{Error, Result};
use bitcoin::BlockHash;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Locally known blocks, keyed by hash
pub trait BlockIndex {
    /// Per-block entry owned by the chain-state engine
    type Entry;

    /// Entry for `hash`, if the block is known
    fn lookup(&self, hash: &BlockHash) -> Option<&Self::Entry>;
}

impl<V, S: BuildHasher> BlockIndex for HashMap<BlockHash, V, S> {
    type Entry = V;

    fn lookup(&self, hash: &BlockHash) -> Option<&V> {
        self.get(hash)
    }
}

impl<V> BlockIndex for BTreeMap<BlockHash, V> {
    type Entry = V;

    fn lookup(&self, hash: &BlockHash) -> Option<&V> {
        self.get(hash)
    }
}

/// Checkpoint checks against one network's store
#[derive(Debug, Clone, Copy)]
pub struct CheckpointValidator<'a> {
    store: &'a CheckpointStore,
    enabled: bool,
}

impl<'a> CheckpointValidator<'a> {
    /// Validator over `store`; when `enabled` is false every check passes
    pub fn new(store: &'a CheckpointStore, enabled: bool) -> Self {
        Self { store, enabled }
    }

    /// Accept unless `height` is checkpointed with a different hash
    pub fn check_block(&self, height: u32, hash: &BlockHash) -> bool {
        if !self.enabled {
            return true;
        }
        match self.store.get(height) {
            Some(expected) => expected == hash,
            None => true,
        }
    }

    /// Like [`check_block`](Self::check_block), but reports the conflict
    pub fn verify_block(&self, height: u32, hash: &BlockHash) -> Result<()> {
        let expected = match self.store.get(height) {
            Some(expected) if self.enabled && expected != hash => *expected,
            _ => return Ok(()),
        };
        tracing::warn!(
            "Block {} at height {} conflicts with checkpoint {}",
            hash,
            height,
            expected
        );
        Err(Error::CheckpointMismatch {
            height,
            expected,
            found: *hash,
        })
    }

    /// Newest checkpointed block present in `index`.
    ///
    /// Scans from the highest checkpoint down so the most recent known
    /// checkpoint wins.
    pub fn last_checkpoint_in_index<'i, I: BlockIndex>(&self, index: &'i I) -> Option<&'i I::Entry> {
        if !self.enabled {
            return None;
        }
        self.store
            .iter_newest_first()
            .find_map(|checkpoint| index.lookup(&checkpoint.hash))
    }

    /// Height of the newest checkpoint, or 0 when disabled
    pub fn total_blocks_estimate(&self) -> u32 {
        if !self.enabled {
            return 0;
        }
        self.store.latest().map_or(0, |checkpoint| checkpoint.height)
    }
}
