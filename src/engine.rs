//! Calculation engine.
//!
//! The engine is a fixed, strictly sequential pipeline. Each stage lives in
//! its own submodule under `src/engine/` and is a plain function of the
//! previous stage's output:
//!
//! ```text
//! input
//!   │  extract           (delimiters.rs)  header → delimiter set + payload
//!   │  tokenize          (tokenize.rs)    payload → tokens
//!   │  parse_tokens      (numbers.rs)     tokens → i32 values
//!   │  filter_above_max  (filter.rs)      drop values > MAX_NUMBER
//!   │  reject_negatives  (filter.rs)      fail on any negative
//!   ▼  checked_sum       (reduce.rs)      overflow-checked sum
//! i32
//! ```
//!
//! `calculator.rs` wires the stages together (`Calculator::run`) and, when
//! asked, records per-stage timings and intermediate values
//! (`Calculator::run_with_metrics`, types in `metrics.rs`).
//!
//! ## Debugging
//!
//! Stages emit `tracing` events under the `strcalc::engine` target: `debug`
//! for stage summaries, `trace` for individual tokens.

#[path = "engine/calculator.rs"]
mod calculator;
#[path = "engine/delimiters.rs"]
mod delimiters;
#[path = "engine/filter.rs"]
mod filter;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/numbers.rs"]
mod numbers;
#[path = "engine/reduce.rs"]
mod reduce;
#[path = "engine/tokenize.rs"]
mod tokenize;

pub use calculator::Calculator;
pub use metrics::{RunResult, Stage, StageMetrics};
