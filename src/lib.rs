//! Owner-swap log conformance scanner.
//!
//! Turns device diagnostic logs into PASS/FAIL verdicts by checking the
//! marker lines in each file against the owner hand-off protocol state
//! machine. The `commands` layer wires CLI input to the `services` layer,
//! which owns discovery, event extraction, the protocol state machine, and
//! report writing. `domain` holds the data-only model types.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;

pub use domain::models::{Analysis, Diagnostic, Event, FileVerdict, Status, SwapState};
