//! Network parameter registry
//!
//! A [`ChainContext`] owns every profile and records which one the node is
//! bound to. Engines receive the context (or a reference to it) at
//! construction, so tests can run several profiles side by side. Hosts that
//! want a process-wide binding use [`select_params`] / [`params`], which
//! wrap a write-once context.

use crate::chainparams::ChainParams;
use crate::config::ParamsConfig;
use crate::network::NetworkId;
use crate::progress::{ChainTip, ProgressEstimator};
use crate::validator::{BlockIndex, CheckpointValidator};
use crate::{Error, Result};
use bitcoin::BlockHash;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};

/// Every network profile plus the current selection
#[derive(Debug)]
pub struct ChainContext {
    main: ChainParams,
    testnet: ChainParams,
    regtest: ChainParams,
    unit_test: ChainParams,
    current: Option<NetworkId>,
    checkpoints_enabled: AtomicBool,
    progress: ProgressEstimator,
}

impl Default for ChainContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainContext {
    /// Build all profiles, verifying each genesis block. Nothing is selected.
    pub fn new() -> Self {
        let context = Self {
            main: ChainParams::mainnet(),
            testnet: ChainParams::testnet(),
            regtest: ChainParams::regtest(),
            unit_test: ChainParams::unit_test(),
            current: None,
            checkpoints_enabled: AtomicBool::new(true),
            progress: ProgressEstimator::default(),
        };
        tracing::debug!("Built {} network profiles", NetworkId::ALL.len());
        context
    }

    /// Build all profiles and select `network`
    pub fn with_selected(network: NetworkId) -> Self {
        let mut context = Self::new();
        context.select(network);
        context
    }

    /// Build a selected context from operator configuration
    pub fn from_config(config: &ParamsConfig) -> Result<Self> {
        let network = config.network_id()?;
        let factor = config.verification_factor()?;
        let mut context = Self::with_selected(network);
        context.progress = ProgressEstimator::new(factor);
        context.set_checkpoints_enabled(config.checkpoints);
        Ok(context)
    }

    /// Bind the context to `network`.
    ///
    /// Switching requires `&mut self`, so no reader can still hold the
    /// previous profile.
    pub fn select(&mut self, network: NetworkId) {
        match self.current {
            Some(current) if current == network => {}
            Some(current) => {
                tracing::info!("Switching network parameters from {} to {}", current, network);
            }
            None => tracing::info!("Selected {} network parameters", network),
        }
        self.current = Some(network);
    }

    /// Selected network, if any
    pub fn selected(&self) -> Option<NetworkId> {
        self.current
    }

    /// Active parameters, if a network was selected
    pub fn try_current(&self) -> Option<&ChainParams> {
        self.current.map(|network| self.get(network))
    }

    /// Active parameters.
    ///
    /// # Panics
    ///
    /// Panics if no network was selected; reading parameters before
    /// selection is a bootstrap bug.
    pub fn current(&self) -> &ChainParams {
        match self.try_current() {
            Some(params) => params,
            None => {
                tracing::error!("Network parameters read before a network was selected");
                panic!("network parameters read before selection");
            }
        }
    }

    /// Parameters for an explicit network, regardless of selection
    pub fn get(&self, network: NetworkId) -> &ChainParams {
        match network {
            NetworkId::Main => &self.main,
            NetworkId::Testnet => &self.testnet,
            NetworkId::Regtest => &self.regtest,
            NetworkId::UnitTest => &self.unit_test,
        }
    }

    /// Mutation hooks for test fixtures.
    ///
    /// # Panics
    ///
    /// Panics unless the unit-test profile is selected.
    pub fn modifiable(&mut self) -> ParamsModifier<'_> {
        if self.current != Some(NetworkId::UnitTest) {
            tracing::error!(
                "Parameter mutation requested while {:?} is selected",
                self.current
            );
            panic!("parameters are only modifiable on the unittest network");
        }
        ParamsModifier {
            params: &mut self.unit_test,
        }
    }

    /// Whether checkpoints are enforced
    pub fn checkpoints_enabled(&self) -> bool {
        self.checkpoints_enabled.load(Ordering::Acquire)
    }

    /// Enable or bypass checkpoint enforcement
    pub fn set_checkpoints_enabled(&self, enabled: bool) {
        let previous = self.checkpoints_enabled.swap(enabled, Ordering::AcqRel);
        if previous != enabled {
            if enabled {
                tracing::info!("Checkpoint enforcement enabled");
            } else {
                tracing::warn!("Checkpoint enforcement disabled");
            }
        }
    }

    /// Checkpoint validator for the active network
    pub fn checkpoint_validator(&self) -> CheckpointValidator<'_> {
        CheckpointValidator::new(self.current().checkpoints(), self.checkpoints_enabled())
    }

    /// See [`CheckpointValidator::check_block`]
    pub fn check_block(&self, height: u32, hash: &BlockHash) -> bool {
        self.checkpoint_validator().check_block(height, hash)
    }

    /// See [`CheckpointValidator::verify_block`]
    pub fn verify_block(&self, height: u32, hash: &BlockHash) -> Result<()> {
        self.checkpoint_validator().verify_block(height, hash)
    }

    /// See [`CheckpointValidator::last_checkpoint_in_index`]
    pub fn last_checkpoint_in_index<'i, I: BlockIndex>(&self, index: &'i I) -> Option<&'i I::Entry> {
        self.checkpoint_validator().last_checkpoint_in_index(index)
    }

    /// See [`CheckpointValidator::total_blocks_estimate`]
    pub fn total_blocks_estimate(&self) -> u32 {
        self.checkpoint_validator().total_blocks_estimate()
    }

    /// Progress estimator in use
    pub fn progress_estimator(&self) -> ProgressEstimator {
        self.progress
    }

    /// Verification progress at `tip` on the active network
    pub fn estimate_progress(&self, tip: Option<&ChainTip>, now: i64) -> f64 {
        self.progress.estimate(self.current().checkpoints(), tip, now)
    }
}

/// Setters for the unit-test profile
#[derive(Debug)]
pub struct ParamsModifier<'a> {
    params: &'a mut ChainParams,
}

impl ParamsModifier<'_> {
    /// Set the halving interval
    pub fn set_subsidy_halving_interval(&mut self, interval: u32) -> &mut Self {
        self.params.subsidy_halving_interval = interval;
        self
    }

    /// Set the enforce threshold
    pub fn set_majority_enforce_block_upgrade(&mut self, threshold: u32) -> &mut Self {
        self.params.majority_enforce_block_upgrade = threshold;
        self
    }

    /// Set the reject threshold
    pub fn set_majority_reject_block_outdated(&mut self, threshold: u32) -> &mut Self {
        self.params.majority_reject_block_outdated = threshold;
        self
    }

    /// Set the majority window
    pub fn set_majority_window(&mut self, window: u32) -> &mut Self {
        self.params.majority_window = window;
        self
    }

    /// Set the consistency-check default
    pub fn set_default_consistency_checks(&mut self, enabled: bool) -> &mut Self {
        self.params.default_consistency_checks = enabled;
        self
    }

    /// Set min-difficulty tolerance
    pub fn set_allow_min_difficulty_blocks(&mut self, allow: bool) -> &mut Self {
        self.params.allow_min_difficulty_blocks = allow;
        self
    }

    /// Set proof-of-work skipping
    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) -> &mut Self {
        self.params.skip_proof_of_work_check = skip;
        self
    }
}

static GLOBAL_CONTEXT: OnceCell<ChainContext> = OnceCell::new();

/// Bind the process to `network`.
///
/// Call once during bootstrap, before worker threads start. Selecting the
/// same network again is a no-op; selecting a different one is refused.
pub fn select_params(network: NetworkId) -> Result<&'static ChainContext> {
    let context = GLOBAL_CONTEXT.get_or_init(|| ChainContext::with_selected(network));
    let current = context.current().network;
    if current != network {
        return Err(Error::AlreadySelected {
            current,
            requested: network,
        });
    }
    Ok(context)
}

/// Process-wide context, if [`select_params`] has run
pub fn global_context() -> Option<&'static ChainContext> {
    GLOBAL_CONTEXT.get()
}

/// Process-wide active parameters.
///
/// # Panics
///
/// Panics if [`select_params`] has not been called.
pub fn params() -> &'static ChainParams {
    match GLOBAL_CONTEXT.get() {
        Some(context) => context.current(),
        None => {
            tracing::error!("Global network parameters read before select_params");
            panic!("network parameters read before selection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::hashes::Hash;

    #[test]
    fn test_select_and_get() {
        let mut context = ChainContext::new();
        assert!(context.try_current().is_none());

        context.select(NetworkId::Testnet);
        assert_eq!(context.current().network, NetworkId::Testnet);
        assert_eq!(context.get(NetworkId::Main).network, NetworkId::Main);
        assert_eq!(context.get(NetworkId::Main).default_port, 11230);

        context.select(NetworkId::Testnet);
        assert_eq!(context.selected(), Some(NetworkId::Testnet));
    }

    #[test]
    #[should_panic(expected = "before selection")]
    fn test_current_before_select_panics() {
        ChainContext::new().current();
    }

    #[test]
    #[should_panic(expected = "only modifiable")]
    fn test_modifiable_requires_unit_test() {
        ChainContext::with_selected(NetworkId::Regtest).modifiable();
    }

    #[test]
    fn test_modifier_only_touches_unit_test_profile() {
        let mut context = ChainContext::with_selected(NetworkId::UnitTest);
        context
            .modifiable()
            .set_subsidy_halving_interval(10)
            .set_majority_enforce_block_upgrade(1)
            .set_majority_reject_block_outdated(2)
            .set_majority_window(3)
            .set_default_consistency_checks(false)
            .set_allow_min_difficulty_blocks(true)
            .set_skip_proof_of_work_check(true);

        let params = context.current();
        assert_eq!(params.subsidy_halving_interval, 10);
        assert_eq!(params.majority_window, 3);
        assert!(params.allow_min_difficulty_blocks);
        assert!(params.skip_proof_of_work_check);
        assert!(!params.default_consistency_checks);
        assert_eq!(context.get(NetworkId::Main).subsidy_halving_interval, 262_800);
    }

    #[test]
    fn test_checkpoint_toggle() {
        let context = ChainContext::with_selected(NetworkId::Main);
        let genesis = context.current().genesis_hash();
        let wrong = BlockHash::from_byte_array([1; 32]);

        assert!(context.check_block(0, &genesis));
        assert!(!context.check_block(0, &wrong));
        assert_eq!(context.total_blocks_estimate(), 304_170);

        context.set_checkpoints_enabled(false);
        assert!(context.check_block(0, &wrong));
        assert_eq!(context.total_blocks_estimate(), 0);

        context.set_checkpoints_enabled(true);
        assert!(matches!(
            context.verify_block(0, &wrong),
            Err(Error::CheckpointMismatch { height: 0, .. })
        ));
    }

    #[test]
    fn test_global_selection() {
        let context = select_params(NetworkId::Regtest).unwrap();
        assert_eq!(params().network, NetworkId::Regtest);
        assert!(std::ptr::eq(context, global_context().unwrap()));
        assert!(select_params(NetworkId::Regtest).is_ok());
        assert!(matches!(
            select_params(NetworkId::Main),
            Err(Error::AlreadySelected {
                current: NetworkId::Regtest,
                requested: NetworkId::Main
            })
        ));
    }
}
