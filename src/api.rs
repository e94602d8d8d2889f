use crate::engine::{Calculator, RunResult, Stage, StageMetrics};
use crate::error::Result;
use std::time::Duration;

/// Timing and output size of one pipeline stage, as reported by [`add_verbose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSummary {
    pub stage: Stage,
    pub duration: Duration,
    /// Number of items the stage produced; `0` for the stage that failed.
    pub produced: usize,
}

/// Stage-by-stage details returned by [`add_verbose`].
///
/// Fields belonging to stages that did not run are left empty.
#[derive(Debug, Clone)]
pub struct AddDetails {
    /// Active delimiters, in header order for custom sets.
    pub delimiters: Vec<String>,
    /// Whether the delimiters came from a `//[...]` header.
    pub custom: bool,
    /// The part of the input holding the numbers.
    pub payload: String,
    pub tokens: Vec<String>,
    /// Parsed values, before filtering.
    pub parsed: Vec<i32>,
    /// Values ignored for being above [`crate::MAX_NUMBER`].
    pub dropped: Vec<i32>,
    /// Negative values that caused the run to fail.
    pub negatives: Vec<i32>,
    /// Stages that ran, in order.
    pub stages: Vec<StageSummary>,
    /// Stage whose failure ended the run.
    pub failed_stage: Option<Stage>,
}

/// Result from [`add_verbose`].
#[derive(Debug, Clone)]
pub struct AddReport {
    /// The input text.
    pub text: String,
    /// Same value [`add`] returns for this input.
    pub outcome: Result<i32>,
    /// Total elapsed time.
    pub elapsed: Duration,
    pub details: AddDetails,
}

/// Sum the numbers in `input`.
///
/// Numbers are separated by `,` or `\n`, or by the delimiters declared in a
/// leading `//[d1][d2]...\n` line. Values above [`crate::MAX_NUMBER`] are
/// ignored; negatives, malformed numbers and malformed headers are errors.
///
/// # Example
/// ```
/// use strcalc::{CalcError, add};
///
/// assert_eq!(add("1\n2,3"), Ok(6));
/// assert_eq!(add("//[**][%]\n1**2%3"), Ok(6));
/// assert_eq!(add("2,1001"), Ok(2));
/// assert_eq!(add("1,-2,-3"), Err(CalcError::NegativeNumbers { values: vec![-2, -3] }));
/// ```
pub fn add(input: &str) -> Result<i32> {
    Calculator::new(input).run()
}

/// Like [`add`], but also returns what each stage produced and how long it
/// took. Useful for explaining why an input failed.
pub fn add_verbose(input: &str) -> AddReport {
    let run = Calculator::new(input).run_with_metrics();
    run_to_report(input, run)
}

fn run_to_report(input: &str, run: RunResult) -> AddReport {
    let RunResult { outcome, failed_stage, trace, metrics } = run;

    let details = AddDetails {
        delimiters: trace.delimiters,
        custom: trace.custom,
        payload: trace.payload,
        tokens: trace.tokens,
        parsed: trace.parsed,
        dropped: trace.dropped,
        negatives: trace.negatives,
        stages: metrics.stages.iter().map(stage_to_summary).collect(),
        failed_stage,
    };

    AddReport { text: input.to_string(), outcome, elapsed: metrics.total, details }
}

fn stage_to_summary(metrics: &StageMetrics) -> StageSummary {
    StageSummary { stage: metrics.stage, duration: metrics.duration, produced: metrics.produced }
}
