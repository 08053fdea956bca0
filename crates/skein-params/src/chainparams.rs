//! Per-network chain parameters
//!
//! Each profile is an independent value built from literals plus the shared
//! genesis builder. No profile is derived from another at runtime.

use crate::checkpoints::{parse_block_hash, CheckpointStore};
use crate::genesis::{block_hash, GenesisTemplate, COIN};
use crate::network::NetworkId;
use crate::seeds::{convert_seed6, DnsSeed, PeerAddress, SeedSpec6};
use crate::{Error, Result};
use bitcoin::{Amount, Block, BlockHash, Target, TxMerkleNode};
use chrono::Utc;
use hex_lit::hex;
use serde::Serialize;
use std::str::FromStr;

const GENESIS_MESSAGE: &str =
    "Guardian - 1 Nov 2013 - RBS places troublesome assets worth £38bn in internal 'bad bank'";

const GENESIS_OUTPUT_PUBKEY: [u8; 65] = hex!("04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f");

/// 0.0001 coin
const GENESIS_REWARD: Amount = Amount::from_sat(COIN / 10_000);

const GENESIS_MERKLE_ROOT: &str = "a4b385e3bc4907593d15be30d69cb28439684893f4dc2e637503cf3156b149a3";
const MAINNET_GENESIS_HASH: &str = "0000046cebed69de151ada93a60cb8a5f9490a196399abe714bb83ad5b20f985";
const TESTNET_GENESIS_HASH: &str = "00000015f9fb4c1c9cc55ad08b6ec47fcce2b00bc482a2c48914ab6506daf439";
const REGTEST_GENESIS_HASH: &str = "6620ff0f4b001bb6c6999d85a61f406a3b213a4ed0364d1b10a46596fcb09785";

/// `~0 >> 20`, the easiest target on the public networks
const POW_LIMIT: [u8; 32] = hex!("00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
/// `~0 >> 1`
const REGTEST_POW_LIMIT: [u8; 32] = hex!("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");

const MAINNET_ALERT_PUBKEY: &str = "04e41db2a8b8dc3981f819d46060875ce483bf303613b108e673d7bb636f7786bd0458e2ced6e8b337be32d024562f3e69776412b55a7210396ad7a9944812b445";
const TESTNET_ALERT_PUBKEY: &str = "0490ce131d0e51eacddb074906fc0be1990214ec9880c2da9bfc15d649236f211e3950670fee0c45f8ea00d425d84da61425778617ba73d64e1880abc4607de965";

const MAINNET_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::same("seed-a.skeincoin.net"),
    DnsSeed::same("seed-b.skeincoin.net"),
    DnsSeed::same("seed-c.skeincoin.net"),
    DnsSeed::same("seed-d.skeincoin.net"),
    DnsSeed::same("seed-e.skeincoin.net"),
    DnsSeed::same("seed-f.skeincoin.net"),
    DnsSeed::same("seed-g.skeincoin.net"),
    DnsSeed::same("seed-h.skeincoin.net"),
    DnsSeed::same("skein1.ignorelist.com"),
    DnsSeed::same("skein2.ignorelist.com"),
    DnsSeed::same("skein3.ignorelist.com"),
];

const MAINNET_FIXED_SEEDS: &[SeedSpec6] = &[];

const TESTNET_FIXED_SEEDS: &[SeedSpec6] = &[];

/// Base58 prefix kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address
    PubkeyAddress,
    /// Pay-to-script-hash address
    ScriptAddress,
    /// WIF private key
    SecretKey,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
}

/// Byte prefixes for base58 encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddressPrefixes {
    /// Pay-to-pubkey-hash address
    pub pubkey_address: &'static [u8],
    /// Pay-to-script-hash address
    pub script_address: &'static [u8],
    /// WIF private key
    pub secret_key: &'static [u8],
    /// BIP32 extended public key
    pub ext_public_key: &'static [u8],
    /// BIP32 extended private key
    pub ext_secret_key: &'static [u8],
}

impl AddressPrefixes {
    const MAINNET: Self = Self {
        pubkey_address: &[63],
        script_address: &[12],
        secret_key: &[226],
        ext_public_key: &[0x04, 0x88, 0xb2, 0x1e],
        ext_secret_key: &[0x04, 0x88, 0xad, 0xe4],
    };

    const TESTNET: Self = Self {
        pubkey_address: &[56],
        script_address: &[88],
        secret_key: &[237],
        ext_public_key: &[0x04, 0x35, 0x87, 0xcf],
        ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
    };

    /// Prefix for one encoding
    pub fn get(&self, kind: Base58Type) -> &'static [u8] {
        match kind {
            Base58Type::PubkeyAddress => self.pubkey_address,
            Base58Type::ScriptAddress => self.script_address,
            Base58Type::SecretKey => self.secret_key,
            Base58Type::ExtPublicKey => self.ext_public_key,
            Base58Type::ExtSecretKey => self.ext_secret_key,
        }
    }
}

/// Consensus constants and bootstrap data for one network
#[derive(Debug, Clone)]
pub struct ChainParams {
    /// Network identity
    pub network: NetworkId,
    /// Peer-wire magic; distinct per network
    pub message_start: [u8; 4],
    /// Alert signing key (hex)
    pub alert_pubkey: &'static str,
    /// P2P port
    pub default_port: u16,
    /// Height below which pruning never deletes blocks
    pub prune_after_height: u64,
    /// Tip age (seconds) after which the node considers itself behind
    pub max_tip_age: i64,
    /// Easiest allowed target
    pub pow_limit: Target,
    /// Block subsidy halving interval
    pub subsidy_halving_interval: u32,
    /// Upgraded blocks in the window needed to enforce new rules
    pub majority_enforce_block_upgrade: u32,
    /// Upgraded blocks in the window needed to reject old-version blocks
    pub majority_reject_block_outdated: u32,
    /// Block window examined by the majority checks
    pub majority_window: u32,
    /// Retarget timespan in seconds
    pub target_timespan: i64,
    /// Target block spacing in seconds
    pub target_spacing: i64,
    /// Default miner threads (0 = one per core)
    pub miner_threads: u32,
    /// Accept min-difficulty blocks after a long gap
    pub allow_min_difficulty_blocks: bool,
    /// Skip difficulty retargeting
    pub no_retargeting: bool,
    /// Only relay standard scripts
    pub require_standard: bool,
    /// Refuse to mine without peers
    pub mining_requires_peers: bool,
    /// RPC requires a password
    pub require_rpc_password: bool,
    /// Run expensive consistency checks by default
    pub default_consistency_checks: bool,
    /// Blocks are produced on RPC request
    pub mine_blocks_on_demand: bool,
    /// Skip proof-of-work validation
    pub skip_proof_of_work_check: bool,
    /// Report the deprecated `testnet` RPC field
    pub testnet_to_be_deprecated_field_rpc: bool,
    /// Base58 prefixes
    pub address_prefixes: AddressPrefixes,
    /// DNS seeds
    pub dns_seeds: &'static [DnsSeed],
    fixed_seeds: Vec<PeerAddress>,
    genesis: Block,
    genesis_hash: BlockHash,
    checkpoints: CheckpointStore,
}

fn genesis_template(time: u32, nonce: u32, bits: u32) -> GenesisTemplate {
    GenesisTemplate {
        time,
        nonce,
        bits,
        version: 1,
        reward: GENESIS_REWARD,
        message: GENESIS_MESSAGE,
        output_pubkey: &GENESIS_OUTPUT_PUBKEY,
    }
}

fn try_build_genesis(template: GenesisTemplate, expected_hash: &str) -> Result<(Block, BlockHash)> {
    let block = template.build()?;
    let expected_merkle = TxMerkleNode::from_str(GENESIS_MERKLE_ROOT)
        .map_err(|e| Error::InvalidHash(format!("{}: {}", GENESIS_MERKLE_ROOT, e)))?;
    if block.header.merkle_root != expected_merkle {
        return Err(Error::Genesis(format!(
            "merkle root {} does not match {}",
            block.header.merkle_root, expected_merkle
        )));
    }
    let expected = parse_block_hash(expected_hash)?;
    let hash = block_hash(&block.header);
    if hash != expected {
        return Err(Error::Genesis(format!("hash {} does not match {}", hash, expected)));
    }
    Ok((block, hash))
}

/// Build and check a genesis block.
///
/// A mismatch means the genesis literals or the builder were edited; the
/// process must not continue with a chain nobody else has.
fn build_genesis(
    network: NetworkId,
    template: GenesisTemplate,
    expected_hash: &str,
) -> (Block, BlockHash) {
    match try_build_genesis(template, expected_hash) {
        Ok((block, hash)) => {
            tracing::debug!("Verified {} genesis block {}", network, hash);
            (block, hash)
        }
        Err(err) => {
            tracing::error!("{} genesis block rejected: {}", network, err);
            panic!("{network} genesis block mismatch: {err}");
        }
    }
}

fn fixed_seeds(specs: &[SeedSpec6]) -> Vec<PeerAddress> {
    convert_seed6(specs, Utc::now(), &mut rand::thread_rng())
}

impl ChainParams {
    /// Get mainnet parameters
    pub fn mainnet() -> Self {
        let (genesis, genesis_hash) = build_genesis(
            NetworkId::Main,
            genesis_template(1_383_313_611, 2_094_010_698, 0x1e0f_ffff),
            MAINNET_GENESIS_HASH,
        );
        Self {
            network: NetworkId::Main,
            // Rarely used upper ASCII, not valid UTF-8, large 32-bit int at any alignment
            message_start: [0xf7, 0x26, 0xa1, 0xbf],
            alert_pubkey: MAINNET_ALERT_PUBKEY,
            default_port: 11230,
            prune_after_height: 100_000,
            max_tip_age: 24 * 60 * 60,
            pow_limit: Target::from_be_bytes(POW_LIMIT),
            subsidy_halving_interval: 262_800,
            majority_enforce_block_upgrade: 7_500,
            majority_reject_block_outdated: 9_500,
            majority_window: 10_000,
            target_timespan: 4 * 120, // 8 minutes
            target_spacing: 120,      // 2 minutes
            miner_threads: 0,
            allow_min_difficulty_blocks: false,
            no_retargeting: false,
            require_standard: true,
            mining_requires_peers: true,
            require_rpc_password: true,
            default_consistency_checks: false,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            address_prefixes: AddressPrefixes::MAINNET,
            dns_seeds: MAINNET_DNS_SEEDS,
            fixed_seeds: fixed_seeds(MAINNET_FIXED_SEEDS),
            genesis,
            genesis_hash,
            checkpoints: CheckpointStore::mainnet(),
        }
    }

    /// Get testnet parameters
    pub fn testnet() -> Self {
        let (genesis, genesis_hash) = build_genesis(
            NetworkId::Testnet,
            genesis_template(1_382_385_267, 416_003_859, 0x1e0f_ffff),
            TESTNET_GENESIS_HASH,
        );
        Self {
            network: NetworkId::Testnet,
            message_start: [0x07, 0xa0, 0x55, 0x03],
            alert_pubkey: TESTNET_ALERT_PUBKEY,
            default_port: 27711,
            prune_after_height: 1_000,
            max_tip_age: 0x7fff_ffff,
            pow_limit: Target::from_be_bytes(POW_LIMIT),
            subsidy_halving_interval: 262_800,
            majority_enforce_block_upgrade: 51,
            majority_reject_block_outdated: 75,
            majority_window: 100,
            target_timespan: 4 * 120,
            target_spacing: 120,
            miner_threads: 0,
            allow_min_difficulty_blocks: true,
            no_retargeting: false,
            require_standard: false,
            mining_requires_peers: true,
            require_rpc_password: true,
            default_consistency_checks: false,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: true,
            address_prefixes: AddressPrefixes::TESTNET,
            dns_seeds: &[],
            fixed_seeds: fixed_seeds(TESTNET_FIXED_SEEDS),
            genesis,
            genesis_hash,
            checkpoints: CheckpointStore::testnet(),
        }
    }

    /// Get regtest parameters
    pub fn regtest() -> Self {
        let (genesis, genesis_hash) = build_genesis(
            NetworkId::Regtest,
            genesis_template(1_296_688_602, 4, 0x207f_ffff),
            REGTEST_GENESIS_HASH,
        );
        Self {
            network: NetworkId::Regtest,
            message_start: [0xfa, 0x0f, 0xa5, 0x5a],
            alert_pubkey: TESTNET_ALERT_PUBKEY,
            default_port: 18444,
            prune_after_height: 1_000,
            max_tip_age: 24 * 60 * 60,
            pow_limit: Target::from_be_bytes(REGTEST_POW_LIMIT),
            subsidy_halving_interval: 150,
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1_000,
            target_timespan: 4 * 120,
            target_spacing: 120,
            miner_threads: 1,
            allow_min_difficulty_blocks: true,
            no_retargeting: false,
            require_standard: false,
            mining_requires_peers: false,
            require_rpc_password: false,
            default_consistency_checks: true,
            mine_blocks_on_demand: true,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            address_prefixes: AddressPrefixes::TESTNET,
            dns_seeds: &[],
            fixed_seeds: Vec::new(),
            genesis,
            genesis_hash,
            checkpoints: CheckpointStore::regtest(),
        }
    }

    /// Get unit-test parameters with no overrides
    pub fn unit_test() -> Self {
        UnitTestParamsBuilder::new().build()
    }

    /// Get parameters by network
    pub fn for_network(network: NetworkId) -> Self {
        match network {
            NetworkId::Main => Self::mainnet(),
            NetworkId::Testnet => Self::testnet(),
            NetworkId::Regtest => Self::regtest(),
            NetworkId::UnitTest => Self::unit_test(),
        }
    }

    /// Network token
    pub fn name(&self) -> &'static str {
        self.network.name()
    }

    /// Genesis block
    pub fn genesis(&self) -> &Block {
        &self.genesis
    }

    /// Genesis block hash
    pub fn genesis_hash(&self) -> BlockHash {
        self.genesis_hash
    }

    /// Checkpoint store
    pub fn checkpoints(&self) -> &CheckpointStore {
        &self.checkpoints
    }

    /// Fixed bootstrap peers
    pub fn fixed_seeds(&self) -> &[PeerAddress] {
        &self.fixed_seeds
    }

    /// Base58 prefix for one encoding
    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.address_prefixes.get(kind)
    }

    /// Decoded alert public key
    pub fn alert_pubkey_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(self.alert_pubkey).map_err(|e| crate::Error::Config(format!("alert key: {}", e)))
    }

    /// Serializable overview for operator tooling
    pub fn summary(&self) -> ParamsSummary {
        ParamsSummary {
            network: self.network,
            message_start: hex::encode(self.message_start),
            default_port: self.default_port,
            genesis_hash: self.genesis_hash,
            genesis_time: self.genesis.header.time,
            pow_limit: hex::encode(self.pow_limit.to_be_bytes()),
            pow_limit_bits: format!("{:08x}", self.pow_limit.to_compact_lossy().to_consensus()),
            subsidy_halving_interval: self.subsidy_halving_interval,
            majority_enforce_block_upgrade: self.majority_enforce_block_upgrade,
            majority_reject_block_outdated: self.majority_reject_block_outdated,
            majority_window: self.majority_window,
            target_timespan: self.target_timespan,
            target_spacing: self.target_spacing,
            address_prefixes: self.address_prefixes,
            dns_seeds: self.dns_seeds.iter().map(|seed| seed.host).collect(),
            fixed_seeds: self.fixed_seeds.iter().map(|peer| peer.addr.to_string()).collect(),
            checkpoint_count: self.checkpoints.len(),
            last_checkpoint_height: self.checkpoints.latest().map(|cp| cp.height),
        }
    }
}

/// Operator-facing snapshot of a profile
#[derive(Debug, Clone, Serialize)]
pub struct ParamsSummary {
    /// Network
    pub network: NetworkId,
    /// Peer-wire magic (hex)
    pub message_start: String,
    /// P2P port
    pub default_port: u16,
    /// Genesis hash
    pub genesis_hash: BlockHash,
    /// Genesis timestamp
    pub genesis_time: u32,
    /// Easiest target (big-endian hex)
    pub pow_limit: String,
    /// Easiest target, compact form
    pub pow_limit_bits: String,
    /// Halving interval
    pub subsidy_halving_interval: u32,
    /// Majority enforce threshold
    pub majority_enforce_block_upgrade: u32,
    /// Majority reject threshold
    pub majority_reject_block_outdated: u32,
    /// Majority window
    pub majority_window: u32,
    /// Retarget timespan
    pub target_timespan: i64,
    /// Block spacing
    pub target_spacing: i64,
    /// Base58 prefixes
    pub address_prefixes: AddressPrefixes,
    /// DNS seed hosts
    pub dns_seeds: Vec<&'static str>,
    /// Fixed seed addresses
    pub fixed_seeds: Vec<String>,
    /// Number of checkpoints
    pub checkpoint_count: usize,
    /// Height of the newest checkpoint
    pub last_checkpoint_height: Option<u32>,
}

/// Builder for the unit-test profile.
///
/// Starts from mainnet consensus values; tests override only what they need.
#[derive(Debug, Clone, Default)]
pub struct UnitTestParamsBuilder {
    subsidy_halving_interval: Option<u32>,
    majority_enforce_block_upgrade: Option<u32>,
    majority_reject_block_outdated: Option<u32>,
    majority_window: Option<u32>,
    default_consistency_checks: Option<bool>,
    allow_min_difficulty_blocks: Option<bool>,
    skip_proof_of_work_check: Option<bool>,
}

impl UnitTestParamsBuilder {
    /// Builder with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the halving interval
    pub fn subsidy_halving_interval(mut self, interval: u32) -> Self {
        self.subsidy_halving_interval = Some(interval);
        self
    }

    /// Override the enforce threshold
    pub fn majority_enforce_block_upgrade(mut self, threshold: u32) -> Self {
        self.majority_enforce_block_upgrade = Some(threshold);
        self
    }

    /// Override the reject threshold
    pub fn majority_reject_block_outdated(mut self, threshold: u32) -> Self {
        self.majority_reject_block_outdated = Some(threshold);
        self
    }

    /// Override the majority window
    pub fn majority_window(mut self, window: u32) -> Self {
        self.majority_window = Some(window);
        self
    }

    /// Override the consistency-check default
    pub fn default_consistency_checks(mut self, enabled: bool) -> Self {
        self.default_consistency_checks = Some(enabled);
        self
    }

    /// Override min-difficulty tolerance
    pub fn allow_min_difficulty_blocks(mut self, allow: bool) -> Self {
        self.allow_min_difficulty_blocks = Some(allow);
        self
    }

    /// Override proof-of-work checking
    pub fn skip_proof_of_work_check(mut self, skip: bool) -> Self {
        self.skip_proof_of_work_check = Some(skip);
        self
    }

    /// Build the profile
    pub fn build(self) -> ChainParams {
        let (genesis, genesis_hash) = build_genesis(
            NetworkId::UnitTest,
            genesis_template(1_383_313_611, 2_094_010_698, 0x1e0f_ffff),
            MAINNET_GENESIS_HASH,
        );
        ChainParams {
            network: NetworkId::UnitTest,
            message_start: [0xf7, 0x26, 0xa1, 0xbf],
            alert_pubkey: MAINNET_ALERT_PUBKEY,
            default_port: 18445,
            prune_after_height: 1_000,
            max_tip_age: 24 * 60 * 60,
            pow_limit: Target::from_be_bytes(POW_LIMIT),
            subsidy_halving_interval: self.subsidy_halving_interval.unwrap_or(262_800),
            majority_enforce_block_upgrade: self.majority_enforce_block_upgrade.unwrap_or(7_500),
            majority_reject_block_outdated: self.majority_reject_block_outdated.unwrap_or(9_500),
            majority_window: self.majority_window.unwrap_or(10_000),
            target_timespan: 4 * 120,
            target_spacing: 120,
            miner_threads: 0,
            allow_min_difficulty_blocks: self.allow_min_difficulty_blocks.unwrap_or(false),
            no_retargeting: false,
            require_standard: true,
            mining_requires_peers: false,
            require_rpc_password: false,
            default_consistency_checks: self.default_consistency_checks.unwrap_or(true),
            mine_blocks_on_demand: true,
            skip_proof_of_work_check: self.skip_proof_of_work_check.unwrap_or(false),
            testnet_to_be_deprecated_field_rpc: false,
            address_prefixes: AddressPrefixes::MAINNET,
            dns_seeds: &[],
            fixed_seeds: Vec::new(),
            genesis,
            genesis_hash,
            // Unit tests share the mainnet checkpoints
            checkpoints: CheckpointStore::mainnet(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_params() {
        let params = ChainParams::mainnet();
        assert_eq!(params.network, NetworkId::Main);
        assert_eq!(params.default_port, 11230);
        assert_eq!(params.genesis_hash().to_string(), MAINNET_GENESIS_HASH);
        assert_eq!(params.genesis().header.merkle_root.to_string(), GENESIS_MERKLE_ROOT);
        assert_eq!(params.pow_limit.to_compact_lossy(), params.genesis().header.bits);
        assert_eq!(params.dns_seeds.len(), 11);
        // No vetted fixed seed list is available; DNS seeds bootstrap mainnet.
        assert!(params.fixed_seeds().is_empty());
    }

    #[test]
    fn test_regtest_params() {
        let params = ChainParams::regtest();
        assert_eq!(params.genesis_hash().to_string(), REGTEST_GENESIS_HASH);
        assert_eq!(params.pow_limit.to_compact_lossy().to_consensus(), 0x207f_ffff);
        assert_eq!(params.pow_limit.to_compact_lossy(), params.genesis().header.bits);
        assert_eq!(params.subsidy_halving_interval, 150);
        assert!(params.fixed_seeds().is_empty());
        assert!(params.dns_seeds.is_empty());
        assert!(params.mine_blocks_on_demand);
    }

    #[test]
    fn test_testnet_params() {
        let params = ChainParams::testnet();
        assert_eq!(params.genesis_hash().to_string(), TESTNET_GENESIS_HASH);
        assert_eq!(params.majority_window, 100);
        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[56]);
        assert!(params.testnet_to_be_deprecated_field_rpc);
    }

    #[test]
    fn test_genesis_coinbase_pays_tenth_of_a_millicoin() {
        let params = ChainParams::mainnet();
        let coinbase = &params.genesis().txdata[0];
        assert!(coinbase.is_coinbase());
        assert_eq!(coinbase.output[0].value, Amount::from_sat(10_000));
    }

    #[test]
    fn test_unit_test_builder_overrides() {
        let params = UnitTestParamsBuilder::new()
            .subsidy_halving_interval(10)
            .majority_enforce_block_upgrade(1)
            .majority_reject_block_outdated(2)
            .majority_window(3)
            .default_consistency_checks(false)
            .allow_min_difficulty_blocks(true)
            .skip_proof_of_work_check(true)
            .build();
        assert_eq!(params.network, NetworkId::UnitTest);
        assert_eq!(params.subsidy_halving_interval, 10);
        assert_eq!(params.majority_enforce_block_upgrade, 1);
        assert_eq!(params.majority_reject_block_outdated, 2);
        assert_eq!(params.majority_window, 3);
        assert!(!params.default_consistency_checks);
        assert!(params.allow_min_difficulty_blocks);
        assert!(params.skip_proof_of_work_check);

        let defaults = ChainParams::unit_test();
        assert_eq!(defaults.subsidy_halving_interval, 262_800);
        assert!(defaults.default_consistency_checks);
        assert_eq!(defaults.checkpoints(), ChainParams::mainnet().checkpoints());
    }

    #[test]
    fn test_alert_keys_decode() {
        for network in NetworkId::ALL {
            let key = ChainParams::for_network(network).alert_pubkey_bytes().unwrap();
            assert_eq!(key.len(), 65);
            assert_eq!(key[0], 0x04);
        }
    }

    #[test]
    fn test_summary_serializes() {
        let json = serde_json::to_value(ChainParams::testnet().summary()).unwrap();
        assert_eq!(json["network"], "test");
        assert_eq!(json["message_start"], "07a05503");
        assert_eq!(json["pow_limit_bits"], "1e0fffff");
        assert_eq!(json["pow_limit"], hex::encode(POW_LIMIT));
        assert_eq!(json["genesis_hash"], TESTNET_GENESIS_HASH);
    }

    #[test]
    fn test_genesis_check_rejects_wrong_hash() {
        let template = genesis_template(1_383_313_611, 2_094_010_698, 0x1e0f_ffff);
        assert!(try_build_genesis(template, MAINNET_GENESIS_HASH).is_ok());
        assert!(matches!(
            try_build_genesis(template, TESTNET_GENESIS_HASH),
            Err(Error::Genesis(_))
        ));
        assert!(matches!(
            try_build_genesis(template, "not a hash"),
            Err(Error::InvalidHash(_))
        ));
    }
}
