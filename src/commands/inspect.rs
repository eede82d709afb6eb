//! Single-file inspection commands for triaging a failing log.

use std::fs;

use anyhow::Context;

use crate::cli::{CheckArgs, EventsArgs};
use crate::domain::models::{EventHit, Status};
use crate::services::analyzer;
use crate::services::extract::EventExtractor;
use crate::services::output::{print_one, print_out};

/// Classify one file. Exit code mirrors the verdict so `check` can gate
/// scripts: 0 for PASSED, 1 for FAILED (including read failures).
pub fn run_check(args: &CheckArgs, json: bool) -> anyhow::Result<u8> {
    let extractor = EventExtractor::new()?;
    let verdict = analyzer::verdict_for(&args.file, analyzer::analyze_file(&extractor, &args.file));
    let code = match verdict.status {
        Status::Passed => 0,
        Status::Failed => 1,
    };

    print_one(json, verdict, |v| {
        format!("{}\t{}\t{}\t{}", v.file, v.status, v.final_state, v.detail)
    })?;
    Ok(code)
}

/// List the protocol events a file's lines map to, with line numbers. No
/// state machine involvement; shows exactly what the analyzer would see.
pub fn run_events(args: &EventsArgs, json: bool) -> anyhow::Result<u8> {
    let extractor = EventExtractor::new()?;
    let bytes = fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let hits: Vec<EventHit> = text
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            extractor.extract(line).map(|event| EventHit {
                line: idx + 1,
                event,
            })
        })
        .collect();

    print_out(json, &hits, |h| format!("{}\t{}", h.line, h.event))?;
    Ok(0)
}
