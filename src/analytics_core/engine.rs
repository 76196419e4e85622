//! Classification and emission: drives the tracker and store per transaction

use super::record::ValidatedTransaction;
use super::store::{BucketKey, BucketStats, ContributionStore};
use super::tracker::{Classification, DonorTracker};
use std::fmt;

/// One emitted output line, reflecting a bucket's statistics at the moment
/// a qualifying transaction was processed.
///
/// Emission is append-only: a later transaction touching the same bucket
/// produces a new snapshot, it never rewrites an earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRecord {
    pub committee_id: String,
    pub zip5: String,
    pub year: u16,
    pub percentile_amount: f64,
    pub running_total: i64,
    pub count: usize,
}

impl fmt::Display for SnapshotRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:.0}` renders ties to even, matching the historical output.
        write!(
            f,
            "{}|{}|{}|{:.0}|{}|{}",
            self.committee_id,
            self.zip5,
            self.year,
            self.percentile_amount,
            self.running_total,
            self.count
        )
    }
}

/// Per-run classification and emission engine.
///
/// Owns the donor state map and the bucket map; both live for exactly
/// one pipeline run and are never shared across passes, so no locking
/// is involved anywhere. Transactions must be fed strictly in input
/// order: classification depends on first-vs-second relative order and
/// bucket statistics reflect the stream prefix processed so far.
pub struct AnalyticsEngine {
    tracker: DonorTracker,
    store: ContributionStore,
}

impl AnalyticsEngine {
    pub fn new(percentile: f64) -> Self {
        Self {
            tracker: DonorTracker::new(),
            store: ContributionStore::new(percentile),
        }
    }

    /// Process one validated transaction, returning the zero, one, or two
    /// snapshot records it emits, in emission order.
    pub fn process(&mut self, tx: ValidatedTransaction) -> Vec<SnapshotRecord> {
        match self.tracker.classify(&tx) {
            Classification::FirstSeen => Vec::new(),
            Classification::AlreadyRepeat => vec![self.credit(&tx)],
            Classification::SecondSeen(prior) => self.resolve_transition(prior, tx),
        }
    }

    /// Record a transaction's amount into its own bucket and build the
    /// snapshot for it.
    fn credit(&mut self, tx: &ValidatedTransaction) -> SnapshotRecord {
        let key = BucketKey {
            committee_id: tx.committee_id.clone(),
            year: tx.year,
            zip5: tx.zip5.clone(),
        };
        let stats = self.store.record(key, tx.amount);
        snapshot(tx, stats)
    }

    /// Resolve the Pending -> Repeat transition. `first` is the held
    /// earlier transaction, `second` the one that just confirmed the
    /// donor as repeat.
    fn resolve_transition(
        &mut self,
        first: ValidatedTransaction,
        second: ValidatedTransaction,
    ) -> Vec<SnapshotRecord> {
        // A zero amount here means the source row was malformed. The donor
        // stays confirmed repeat, but this transition emits nothing.
        if first.amount == 0.0 || second.amount == 0.0 {
            log::warn!(
                "dropping zero-amount transition for donor key '{}'",
                second.donor_key
            );
            return Vec::new();
        }

        let same_recipient = first.committee_id == second.committee_id;
        let same_year = first.year == second.year;

        if !same_year {
            // Only the later-year transaction's bucket is credited; the
            // earlier-year one is not separately reported.
            let later = if first.year > second.year {
                &first
            } else {
                &second
            };
            return vec![self.credit(later)];
        }
        if same_recipient {
            // Shared bucket: only the confirming transaction's amount is
            // aggregated. The held first amount is intentionally left out
            // to preserve the historical output exactly, even though that
            // undercounts the bucket.
            return vec![self.credit(&second)];
        }
        // Same year, two recipients: both buckets become reportable at
        // this instant, the earlier transaction's bucket first.
        vec![self.credit(&first), self.credit(&second)]
    }
}

fn snapshot(tx: &ValidatedTransaction, stats: BucketStats) -> SnapshotRecord {
    SnapshotRecord {
        committee_id: tx.committee_id.clone(),
        zip5: tx.zip5.clone(),
        year: tx.year,
        percentile_amount: stats.percentile_amount,
        running_total: stats.running_total,
        count: stats.count,
    }
}
