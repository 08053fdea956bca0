//! Skeincoin network parameters and chain-integrity checks
//!
//! This crate provides the per-network consensus constants, genesis blocks,
//! checkpoint data, bootstrap seeds and the registry that binds a running
//! node to exactly one network profile. It also exposes the checkpoint gate
//! and the verification-progress heuristic consumed by the block engine.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chainparams;
pub mod checkpoints;
pub mod config;
pub mod genesis;
pub mod network;
pub mod progress;
pub mod registry;
pub mod seeds;
pub mod validator;

pub use chainparams::{AddressPrefixes, Base58Type, ChainParams, ParamsSummary, UnitTestParamsBuilder};
pub use checkpoints::{Checkpoint, CheckpointStore};
pub use config::ParamsConfig;
pub use genesis::{block_hash, GenesisTemplate, COIN};
pub use network::NetworkId;
pub use progress::{ChainTip, ProgressEstimator, SIGCHECK_VERIFICATION_FACTOR};
pub use registry::{global_context, params, select_params, ChainContext, ParamsModifier};
pub use seeds::{DnsSeed, PeerAddress, SeedSpec6};
pub use validator::{BlockIndex, CheckpointValidator};

pub use bitcoin;
pub use bitcoin::{Block, BlockHash, Target};

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid network specified
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// Block hash conflicts with a hard-coded checkpoint
    #[error("Block at height {height} rejected by checkpoint: expected {expected}, found {found}")]
    CheckpointMismatch {
        /// Checkpointed height
        height: u32,
        /// Hash recorded in the checkpoint table
        expected: BlockHash,
        /// Hash of the candidate block
        found: BlockHash,
    },

    /// Same height listed twice in a checkpoint table
    #[error("Duplicate checkpoint at height {0}")]
    DuplicateCheckpoint(u32),

    /// Checkpoint table without entries
    #[error("Checkpoint table is empty")]
    EmptyCheckpoints,

    /// Malformed 256-bit hex literal
    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    /// A different network was already selected for this process
    #[error("Network {current} already selected, refusing to switch to {requested}")]
    AlreadySelected {
        /// Network bound earlier
        current: NetworkId,
        /// Network asked for now
        requested: NetworkId,
    },

    /// Genesis block could not be assembled
    #[error("Genesis error: {0}")]
    Genesis(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
