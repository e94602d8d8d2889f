//! Run metrics and stage traces.
//!
//! `Calculator::run` is the plain path and records nothing.
//! `Calculator::run_with_metrics` additionally records, per stage, how long it
//! took and what it produced, so a failing input can be inspected stage by
//! stage.
//!
//! Stages that never ran (an earlier one failed) have no `StageMetrics`
//! entry and leave their `RunTrace` fields empty.

use crate::error::Result;
use std::time::Duration;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Delimiter extraction.
    Extract,
    Tokenize,
    Parse,
    /// Dropping values above the threshold.
    Filter,
    /// Negative-number rejection.
    Validate,
    /// Overflow-checked summation.
    Reduce,
}

impl Stage {
    pub const ALL: [Stage; 6] =
        [Stage::Extract, Stage::Tokenize, Stage::Parse, Stage::Filter, Stage::Validate, Stage::Reduce];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::Tokenize => "tokenize",
            Stage::Parse => "parse",
            Stage::Filter => "filter",
            Stage::Validate => "validate",
            Stage::Reduce => "reduce",
        }
    }
}

/// Timing and output size for one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageMetrics {
    pub stage: Stage,
    pub duration: Duration,
    /// Number of items the stage produced (delimiters, tokens, values...).
    pub produced: usize,
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for `Calculator::run_with_metrics`.
    pub total: Duration,
    /// Stages that ran, in order.
    pub stages: Vec<StageMetrics>,
}

/// Intermediate values captured while the pipeline ran.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunTrace {
    pub delimiters: Vec<String>,
    pub custom: bool,
    pub payload: String,
    pub tokens: Vec<String>,
    pub parsed: Vec<i32>,
    pub dropped: Vec<i32>,
    pub negatives: Vec<i32>,
}

/// Calculator output bundled with its trace and timings.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub outcome: Result<i32>,
    /// Stage whose failure ended the run, if any.
    pub failed_stage: Option<Stage>,
    pub trace: RunTrace,
    pub metrics: RunMetrics,
}
