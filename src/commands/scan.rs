//! The batch driver.
//!
//! Enumerates `.log` files under the root, runs the analyzer once per file,
//! and appends each verdict to the CSV report in discovery order. Files are
//! independent units of work: a file that cannot be read becomes an
//! `EXCEPTION` row and the batch moves on. Only a report-sink failure stops
//! the run.

use crate::cli::{ScanArgs, DEFAULT_REPORT_NAME};
use crate::domain::models::{JsonOut, ScanSummary, Status};
use crate::services::extract::EventExtractor;
use crate::services::report::ReportSink;
use crate::services::{analyzer, discover};

pub fn run_scan(args: &ScanArgs, json: bool) -> anyhow::Result<u8> {
    let files = discover::find_log_files(&args.root);
    if files.is_empty() {
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&JsonOut {
                    ok: true,
                    data: "no log files found",
                })?
            );
        } else {
            println!(
                "No log files found under {}.",
                args.root.display()
            );
        }
        return Ok(0);
    }

    let report_path = args
        .report
        .clone()
        .unwrap_or_else(|| args.root.join(DEFAULT_REPORT_NAME));

    let extractor = EventExtractor::new()?;
    let mut sink = ReportSink::create(&report_path)?;
    let mut verdicts = Vec::with_capacity(files.len());

    for (i, file) in files.iter().enumerate() {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        if !json {
            println!("Analyzing {}/{}: {}", i + 1, files.len(), name);
        }

        let verdict = analyzer::verdict_for(file, analyzer::analyze_file(&extractor, file));
        tracing::debug!(
            file = %file.display(),
            status = %verdict.status,
            final_state = %verdict.final_state,
            "analyzed"
        );
        sink.append(&verdict)?;
        verdicts.push(verdict);
    }

    let passed = verdicts
        .iter()
        .filter(|v| v.status == Status::Passed)
        .count();
    let summary = ScanSummary {
        root: args.root.display().to_string(),
        report: report_path.display().to_string(),
        scanned: verdicts.len(),
        passed,
        failed: verdicts.len() - passed,
        verdicts,
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: summary,
            })?
        );
    } else {
        println!(
            "\nOwner swap analysis complete: {} passed, {} failed. Report: {}",
            summary.passed,
            summary.failed,
            report_path.display()
        );
    }

    Ok(0)
}
