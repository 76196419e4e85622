//! Analytics Core - Repeat-Donor Classification Engine
//!
//! Streaming classification and aggregation over individual campaign
//! contributions: decides which donors are repeat donors under the
//! date/recipient rule and emits a running percentile/total/count
//! snapshot for every contribution attributable to a repeat donor.
//!
//! # Architecture
//!
//! ```text
//! Pipe-delimited records → validator (structural gate)
//!     ↓
//! DonorTracker (Unseen → Pending → Repeat)
//!     ↓ FirstSeen | SecondSeen(prior) | AlreadyRepeat
//! AnalyticsEngine (transition resolution, 0/1/2 emissions)
//!     ↓
//! ContributionStore (sorted amounts, nearest-rank percentile)
//!     ↓
//! SnapshotRecord stream (append-only, input order)
//! ```

pub mod engine;
pub mod record;
pub mod store;
pub mod tracker;
pub mod validator;

pub use engine::{AnalyticsEngine, SnapshotRecord};
pub use record::{RawRecord, ValidatedTransaction};
pub use store::{BucketKey, BucketStats, ContributionStore};
pub use tracker::{Classification, DonorTracker};
pub use validator::validate;
