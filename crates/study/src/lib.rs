//! Vega Study
//!
//! Orchestrates return construction, estimator computation, event
//! alignment, and impact summarization into a single reproducible study
//! run.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

pub mod error;
pub mod result;
pub mod runner;

pub use error::StudyError;
pub use result::StudyResult;
pub use runner::{run_study, run_study_from_json, validate_config};
