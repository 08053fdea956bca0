//! Initial-sync verification progress estimate
//!
//! Work is counted as 1.0 per transaction before the newest checkpoint and
//! `factor` per transaction after it, where signatures are checked in full.

use crate::checkpoints::CheckpointStore;

/// How many times slower transactions after the last checkpoint are.
///
/// Reindexing from a fast disk on a slow CPU can reach 20; downloading over
/// a slow link on a fast multicore CPU stays near 1.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Snapshot of the active chain tip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainTip {
    /// Transactions from genesis through the tip
    pub chain_tx: u64,
    /// Tip block timestamp (Unix epoch)
    pub time: i64,
}

/// Verification progress heuristic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEstimator {
    factor: f64,
}

impl Default for ProgressEstimator {
    fn default() -> Self {
        Self {
            factor: SIGCHECK_VERIFICATION_FACTOR,
        }
    }
}

impl ProgressEstimator {
    /// Estimator with a custom post-checkpoint cost factor
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Post-checkpoint cost factor
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Fraction of verification work done at `tip`, in `[0, 1]`.
    ///
    /// `None` (no tip yet) yields 0.0.
    pub fn estimate(&self, store: &CheckpointStore, tip: Option<&ChainTip>, now: i64) -> f64 {
        let Some(tip) = tip else {
            return 0.0;
        };

        let expected_tx_since = |since: i64| -> f64 {
            let elapsed = now.saturating_sub(since).max(0) as f64;
            elapsed / SECONDS_PER_DAY * store.transactions_per_day
        };

        let last_tx = store.last_checkpoint_tx_count;
        let (work_before, work_after) = if tip.chain_tx <= last_tx {
            let cheap_before = tip.chain_tx as f64;
            let cheap_after = (last_tx - tip.chain_tx) as f64;
            let expensive_after = expected_tx_since(store.last_checkpoint_time);
            (cheap_before, cheap_after + expensive_after * self.factor)
        } else {
            let cheap_before = last_tx as f64;
            let expensive_before = (tip.chain_tx - last_tx) as f64;
            let expensive_after = expected_tx_since(tip.time);
            (
                cheap_before + expensive_before * self.factor,
                expensive_after * self.factor,
            )
        };

        let total = work_before + work_after;
        if total.is_nan() || total <= 0.0 {
            return 0.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}
