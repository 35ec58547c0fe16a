//! Run traces.
//!
//! A trace records which rule decided each stage of a decomposition and how
//! long the run took. It is collected by `Decomposer::run_traced` and turned
//! into the public `Breakdown` by the API layer; the plain `run` path builds
//! the same data but discards it.

use crate::hmm::ParsedSyllable;
use std::time::Duration;

/// Name used when no rule in a stage fired.
pub(crate) const NO_RULE: &str = "none";

#[derive(Debug, Clone)]
pub struct RunTrace {
    /// Lower-cased syllable with tone marks removed.
    pub stripped: String,
    /// Rule that chose the initial class.
    pub initial_rule: &'static str,
    /// Glide rule that built a compound initial, if any.
    pub glide_rule: Option<&'static str>,
    /// Residual handed to the final matcher.
    pub residual: String,
    /// Rule that chose the final.
    pub final_rule: &'static str,
    /// Elapsed time for the whole run.
    pub total: Duration,
}

/// Decomposer output bundled with its trace.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub parsed: ParsedSyllable,
    pub trace: RunTrace,
}
