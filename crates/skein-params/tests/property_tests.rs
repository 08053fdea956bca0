//! Property-based tests for skein-params
//!
//! Uses proptest to verify checkpoint and progress invariants across
//! randomized inputs

use proptest::prelude::*;
use skein_params::bitcoin::hashes::Hash;
use skein_params::{BlockHash, ChainTip, CheckpointStore, CheckpointValidator, ProgressEstimator};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Arbitrary 256-bit hash
fn hash_strategy() -> impl Strategy<Value = BlockHash> {
    any::<[u8; 32]>().prop_map(BlockHash::from_byte_array)
}

/// Checkpoint statistics: (time, tx count, tx per day)
fn stats_strategy() -> impl Strategy<Value = (i64, u64, f64)> {
    (
        1_300_000_000i64..1_700_000_000,
        0u64..10_000_000,
        0.0f64..100_000.0,
    )
}

// ============================================================================
// Checkpoint Properties
// ============================================================================

proptest! {
    /// Property: heights without a checkpoint accept any hash
    #[test]
    fn prop_unlisted_heights_accept_anything(
        height in 0u32..10_000_000,
        hash in hash_strategy()
    ) {
        let store = CheckpointStore::mainnet();
        prop_assume!(store.get(height).is_none());
        prop_assert!(CheckpointValidator::new(&store, true).check_block(height, &hash));
    }

    /// Property: a listed height accepts exactly its hash
    #[test]
    fn prop_listed_heights_reject_other_hashes(hash in hash_strategy()) {
        let store = CheckpointStore::mainnet();
        let validator = CheckpointValidator::new(&store, true);
        for checkpoint in store.checkpoints() {
            prop_assert_eq!(validator.check_block(checkpoint.height, &hash), hash == checkpoint.hash);
        }
    }

    /// Property: disabled validators accept everything
    #[test]
    fn prop_disabled_accepts_everything(
        height in any::<u32>(),
        hash in hash_strategy()
    ) {
        let store = CheckpointStore::mainnet();
        prop_assert!(CheckpointValidator::new(&store, false).check_block(height, &hash));
    }
}

// ============================================================================
// Progress Properties
// ============================================================================

proptest! {
    /// Property: progress is always a fraction
    #[test]
    fn prop_progress_in_unit_interval(
        (time, last_tx, per_day) in stats_strategy(),
        chain_tx in 0u64..20_000_000,
        tip_time in 1_200_000_000i64..1_800_000_000,
        now in 1_200_000_000i64..1_800_000_000,
        factor in 0.1f64..50.0
    ) {
        let store = CheckpointStore::new([(0, BlockHash::all_zeros())], time, last_tx, per_day).unwrap();
        let tip = ChainTip { chain_tx, time: tip_time };
        let progress = ProgressEstimator::new(factor).estimate(&store, Some(&tip), now);
        prop_assert!((0.0..=1.0).contains(&progress), "progress {}", progress);
    }

    /// Property: more transactions never means less progress
    #[test]
    fn prop_progress_monotonic_in_chain_tx(
        (time, last_tx, per_day) in stats_strategy(),
        chain_tx in 0u64..20_000_000,
        extra in 0u64..1_000_000,
        tip_offset in 0i64..100_000_000,
        now_offset in 0i64..100_000_000
    ) {
        let store = CheckpointStore::new([(0, BlockHash::all_zeros())], time, last_tx, per_day).unwrap();
        // The tip of a chain past the checkpoint is never older than it.
        let tip_time = time + tip_offset;
        let now = tip_time + now_offset;
        let estimator = ProgressEstimator::default();

        let lower = estimator.estimate(&store, Some(&ChainTip { chain_tx, time: tip_time }), now);
        let higher = estimator.estimate(
            &store,
            Some(&ChainTip { chain_tx: chain_tx + extra, time: tip_time }),
            now,
        );
        prop_assert!(higher + 1e-12 >= lower, "{} < {}", higher, lower);
    }
}
