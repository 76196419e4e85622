//! Donor identity state machine: Unseen -> Pending -> Repeat

use super::record::ValidatedTransaction;
use std::collections::{HashMap, HashSet};

/// Outcome of classifying one transaction against donor history.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// First valid transaction for this donor key; held, no output yet.
    FirstSeen,
    /// Second valid transaction; carries the held earlier transaction.
    SecondSeen(ValidatedTransaction),
    /// Donor already confirmed repeat.
    AlreadyRepeat,
}

/// Tracks each donor key through Unseen -> Pending -> Repeat.
///
/// Transitions are monotonic: once a key reaches `repeat` it never
/// leaves, and a key is never pending and repeat at the same time.
/// Repeat membership carries no payload; the held transaction moves out
/// with the `SecondSeen` classification.
#[derive(Default)]
pub struct DonorTracker {
    pending: HashMap<String, ValidatedTransaction>,
    repeat: HashSet<String>,
}

impl DonorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&mut self, tx: &ValidatedTransaction) -> Classification {
        if self.repeat.contains(&tx.donor_key) {
            return Classification::AlreadyRepeat;
        }
        if let Some(prior) = self.pending.remove(&tx.donor_key) {
            self.repeat.insert(tx.donor_key.clone());
            return Classification::SecondSeen(prior);
        }
        self.pending.insert(tx.donor_key.clone(), tx.clone());
        Classification::FirstSeen
    }
}
