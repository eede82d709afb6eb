//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `scan.rs` — the batch driver: discover, analyze, report.
//! - `inspect.rs` — single-file check and event dump.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod inspect;
pub mod scan;

pub use inspect::{run_check, run_events};
pub use scan::run_scan;
