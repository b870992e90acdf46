//! Vega Summary
//!
//! Aggregates aligned event windows into per-event impact records and
//! pooled per-type impact summaries for downstream consumers.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// Summary computation entrypoints.
pub mod compute;
/// Impact record and summary types.
pub mod impact;
/// Output formatting helpers.
pub mod output;

pub use compute::{event_impacts, summarize};
pub use impact::{EventImpactRecord, ImpactSummary, TypeImpact};
pub use output::{round_summary, SummaryOutput};
