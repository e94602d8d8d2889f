//! The calculator pipeline.
//!
//! Runs the stages strictly in order and stops at the first failure:
//!
//! ```text
//! input ── extract ──▶ Extraction { delimiters, payload }
//!            │
//!            └─ tokenize ──▶ Vec<&str>
//!                  │
//!                  └─ parse ──▶ Vec<i32>
//!                        │
//!                        └─ filter ──▶ Filtered { kept, dropped }
//!                              │
//!                              └─ validate (no negatives in kept)
//!                                    │
//!                                    └─ reduce ──▶ i32
//! ```
//!
//! Nothing is shared between runs; a `Calculator` only borrows its input.

use super::delimiters::extract;
use super::filter::{filter_above_max, reject_negatives};
use super::metrics::{RunMetrics, RunResult, RunTrace, Stage, StageMetrics};
use super::numbers::parse_tokens;
use super::reduce::checked_sum;
use super::tokenize::tokenize;
use crate::error::{CalcError, Result};
use std::time::Instant;
use tracing::{debug, debug_span};

/// Evaluates one input string.
///
/// Usage: `Calculator::new(input).run()`, or `run_with_metrics()` to also get
/// the per-stage trace.
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'a> {
    input: &'a str,
}

impl<'a> Calculator<'a> {
    pub fn new(input: &'a str) -> Self {
        Calculator { input }
    }

    /// Run the pipeline and return the sum.
    pub fn run(&self) -> Result<i32> {
        let _span = debug_span!("add", input_len = self.input.len()).entered();

        let outcome = self.evaluate();
        log_outcome(&outcome);
        outcome
    }

    /// Run the pipeline, recording timings and intermediate values.
    pub fn run_with_metrics(&self) -> RunResult {
        let _span = debug_span!("add_verbose", input_len = self.input.len()).entered();
        let start = Instant::now();

        let mut recorder = Recorder::default();
        let outcome = self.evaluate_recorded(&mut recorder);
        log_outcome(&outcome);

        if let Err(CalcError::NegativeNumbers { values }) = &outcome {
            recorder.trace.negatives = values.clone();
        }

        RunResult {
            outcome,
            failed_stage: recorder.failed,
            trace: recorder.trace,
            metrics: RunMetrics { total: start.elapsed(), stages: recorder.stages },
        }
    }

    fn evaluate(&self) -> Result<i32> {
        let extraction = extract(self.input)?;
        let tokens = tokenize(&extraction)?;
        let values = parse_tokens(&tokens)?;
        let filtered = filter_above_max(values);
        reject_negatives(&filtered.kept)?;
        checked_sum(&filtered.kept)
    }

    fn evaluate_recorded(&self, rec: &mut Recorder) -> Result<i32> {
        let extraction = rec.stage(Stage::Extract, || extract(self.input), |ex| ex.delimiters.len())?;
        rec.trace.delimiters = extraction.delimiters.iter().map(|d| d.to_string()).collect();
        rec.trace.custom = extraction.custom;
        rec.trace.payload = extraction.payload.to_string();

        let tokens = rec.stage(Stage::Tokenize, || tokenize(&extraction), |tokens| tokens.len())?;
        rec.trace.tokens = tokens.iter().map(|t| t.to_string()).collect();

        let values = rec.stage(Stage::Parse, || parse_tokens(&tokens), |values| values.len())?;
        rec.trace.parsed = values.clone();

        let filtered = rec.stage(Stage::Filter, || Ok(filter_above_max(values)), |f| f.kept.len())?;
        rec.trace.dropped = filtered.dropped.clone();

        rec.stage(Stage::Validate, || reject_negatives(&filtered.kept), |_| filtered.kept.len())?;
        rec.stage(Stage::Reduce, || checked_sum(&filtered.kept), |_| 1)
    }
}

fn log_outcome(outcome: &Result<i32>) {
    match outcome {
        Ok(sum) => debug!(sum, "calculation finished"),
        Err(err) => debug!(kind = err.kind().name(), %err, "calculation failed"),
    }
}

/// Collects per-stage metrics for `run_with_metrics`.
#[derive(Debug, Default)]
struct Recorder {
    stages: Vec<StageMetrics>,
    trace: RunTrace,
    failed: Option<Stage>,
}

impl Recorder {
    /// Time `run`, record the stage, and remember it if it failed.
    fn stage<T>(
        &mut self,
        stage: Stage,
        run: impl FnOnce() -> Result<T>,
        produced: impl FnOnce(&T) -> usize,
    ) -> Result<T> {
        let start = Instant::now();
        let result = run();
        let duration = start.elapsed();

        let produced = match &result {
            Ok(value) => produced(value),
            Err(_) => {
                self.failed = Some(stage);
                0
            }
        };
        self.stages.push(StageMetrics { stage, duration, produced });

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_sums_default_delimited_input() {
        assert_eq!(Calculator::new("1\n2,3,4\n5").run(), Ok(15));
    }

    #[test]
    fn metrics_cover_every_stage_on_success() {
        let res = Calculator::new("//[;]\n1;2000;3").run_with_metrics();

        assert_eq!(res.outcome, Ok(4));
        assert_eq!(res.failed_stage, None);

        let stages: Vec<Stage> = res.metrics.stages.iter().map(|m| m.stage).collect();
        assert_eq!(stages, Stage::ALL.to_vec());
        assert!(res.metrics.stages.iter().all(|m| m.duration <= res.metrics.total));

        assert_eq!(res.trace.delimiters, vec![";"]);
        assert!(res.trace.custom);
        assert_eq!(res.trace.payload, "1;2000;3");
        assert_eq!(res.trace.tokens, vec!["1", "2000", "3"]);
        assert_eq!(res.trace.parsed, vec![1, 2000, 3]);
        assert_eq!(res.trace.dropped, vec![2000]);
        assert!(res.trace.negatives.is_empty());
    }

    #[test]
    fn metrics_stop_at_failing_stage() {
        let res = Calculator::new("1,x,3").run_with_metrics();

        assert_eq!(res.outcome, Err(CalcError::NumberFormat { token: "x".to_string() }));
        assert_eq!(res.failed_stage, Some(Stage::Parse));

        let stages: Vec<Stage> = res.metrics.stages.iter().map(|m| m.stage).collect();
        assert_eq!(stages, vec![Stage::Extract, Stage::Tokenize, Stage::Parse]);
        assert_eq!(res.metrics.stages[2].produced, 0);
        assert_eq!(res.trace.tokens, vec!["1", "x", "3"]);
        assert!(res.trace.parsed.is_empty());
    }

    #[test]
    fn negatives_are_captured_in_trace() {
        let res = Calculator::new("1\n2,-3,4\n-4").run_with_metrics();

        assert_eq!(res.failed_stage, Some(Stage::Validate));
        assert_eq!(res.trace.negatives, vec![-3, -4]);
    }

    #[test]
    fn extract_failure_records_single_stage() {
        let res = Calculator::new("//[4]\n4").run_with_metrics();

        assert_eq!(res.outcome, Err(CalcError::DelimiterDefinition));
        assert_eq!(res.failed_stage, Some(Stage::Extract));
        assert_eq!(res.metrics.stages.len(), 1);
        assert!(res.trace.delimiters.is_empty());
    }
}
