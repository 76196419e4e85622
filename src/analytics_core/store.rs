//! Per-bucket running order statistics over contribution amounts

use std::collections::HashMap;

/// Aggregation unit: one (committee, year, zip5) cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub committee_id: String,
    pub year: u16,
    pub zip5: String,
}

/// A bucket's statistics immediately after one amount was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketStats {
    /// Amount at the nearest-rank percentile index of the sorted bucket.
    pub percentile_amount: f64,
    /// Round-half-up of the bucket's amount sum so far.
    pub running_total: i64,
    pub count: usize,
}

/// Sorted-amount store with nearest-rank percentile queries.
///
/// Buckets are created lazily on first contribution and grow
/// monotonically: amounts are only ever added, never removed or
/// corrected, so successive stats for one bucket form a growing history.
pub struct ContributionStore {
    percentile: f64,
    buckets: HashMap<BucketKey, Vec<f64>>,
}

impl ContributionStore {
    /// `percentile` is the process-wide percentile parameter in [0, 100],
    /// constant for the whole run.
    pub fn new(percentile: f64) -> Self {
        Self {
            percentile,
            buckets: HashMap::new(),
        }
    }

    /// Insert `amount` into the bucket (kept sorted ascending, duplicates
    /// allowed) and return the bucket's statistics as of this insertion.
    pub fn record(&mut self, key: BucketKey, amount: f64) -> BucketStats {
        let amounts = self.buckets.entry(key).or_default();
        let at = amounts.partition_point(|&a| a < amount);
        amounts.insert(at, amount);

        let count = amounts.len();
        let sum: f64 = amounts.iter().sum();
        // Nearest-rank index with ties rounded to even, reproducing
        // numpy's `interpolation='nearest'` selection.
        let rank = (self.percentile / 100.0 * (count as f64 - 1.0)).round_ties_even() as usize;

        BucketStats {
            percentile_amount: amounts[rank],
            running_total: round_half_up(sum),
            count,
        }
    }
}

/// Fractional parts >= 0.5 round up; everything else truncates toward
/// zero. Not banker's rounding: 2.5 rounds to 3 here.
fn round_half_up(value: f64) -> i64 {
    let truncated = value.trunc();
    if value - truncated >= 0.5 {
        truncated as i64 + 1
    } else {
        truncated as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(committee: &str) -> BucketKey {
        BucketKey {
            committee_id: committee.to_string(),
            year: 2024,
            zip5: "02895".to_string(),
        }
    }

    #[test]
    fn test_count_grows_by_one_per_record() {
        let mut store = ContributionStore::new(100.0);
        for expected in 1..=4usize {
            let stats = store.record(key("C00000001"), 25.0);
            assert_eq!(stats.count, expected);
        }
    }

    #[test]
    fn test_running_total_rounds_half_up() {
        let mut store = ContributionStore::new(100.0);
        store.record(key("C00000001"), 100.2);
        let stats = store.record(key("C00000001"), 100.3);
        // 200.5 rounds up, not to even.
        assert_eq!(stats.running_total, 201);

        let stats = store.record(key("C00000002"), 200.4);
        assert_eq!(stats.running_total, 200);
    }

    #[test]
    fn test_percentile_100_selects_max() {
        let mut store = ContributionStore::new(100.0);
        store.record(key("C00000001"), 200.0);
        let stats = store.record(key("C00000001"), 300.0);
        assert_eq!(stats.percentile_amount, 300.0);
        assert_eq!(stats.running_total, 500);
    }

    #[test]
    fn test_percentile_0_selects_min() {
        let mut store = ContributionStore::new(0.0);
        store.record(key("C00000001"), 300.0);
        let stats = store.record(key("C00000001"), 200.0);
        assert_eq!(stats.percentile_amount, 200.0);
    }

    #[test]
    fn test_percentile_rank_rounds_ties_to_even() {
        // Two amounts, P=50: rank = round_ties_even(0.5) = 0 -> the lower.
        let mut store = ContributionStore::new(50.0);
        store.record(key("C00000001"), 10.0);
        let stats = store.record(key("C00000001"), 20.0);
        assert_eq!(stats.percentile_amount, 10.0);

        // Four amounts, P=50: rank = round_ties_even(1.5) = 2 -> 30.
        let mut store = ContributionStore::new(50.0);
        store.record(key("C00000001"), 10.0);
        store.record(key("C00000001"), 20.0);
        store.record(key("C00000001"), 30.0);
        let stats = store.record(key("C00000001"), 40.0);
        assert_eq!(stats.percentile_amount, 30.0);
    }

    #[test]
    fn test_amounts_kept_sorted_with_duplicates() {
        let mut store = ContributionStore::new(0.0);
        store.record(key("C00000001"), 30.0);
        store.record(key("C00000001"), 10.0);
        store.record(key("C00000001"), 10.0);
        let stats = store.record(key("C00000001"), 5.0);
        assert_eq!(stats.percentile_amount, 5.0);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.running_total, 55);
    }

    #[test]
    fn test_buckets_are_independent() {
        let mut store = ContributionStore::new(100.0);
        store.record(key("C00000001"), 100.0);
        let stats = store.record(key("C00000002"), 50.0);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.running_total, 50);
    }

    #[test]
    fn test_negative_sum_truncates_toward_zero() {
        let mut store = ContributionStore::new(100.0);
        let stats = store.record(key("C00000001"), -1.5);
        assert_eq!(stats.running_total, -1);
    }
}
