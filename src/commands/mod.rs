//! Command handler layer.
//!
//! ## Files
//! - `run.rs` — the fixed seven-question analysis run.
//!
//! ## Principles
//! - Resolve CLI/config inputs here.
//! - Delegate load/validate/prepare/analyze logic to `services/*`.
//! - Keep the question order and output schema stable.

pub mod run;
