//! score-rebuilder - Weekly score recomputation
//!
//! The rebuilder is the only writer of `WeekScore` artifacts. It is a full,
//! deterministic recomputation: rerunning it for the same week with
//! unchanged rosters and stat lines stores byte-identical points and
//! breakdowns, so it is safe to trigger after every stats-ingestion pass or
//! admin correction.

pub mod error;
pub mod rebuilder;

pub use error::{RebuildError, Result};
pub use rebuilder::WeekScoreRebuilder;
