//! CSV report sink.
//!
//! One report per run: header row, then one row per processed file in
//! discovery order. Any stale report at the destination is removed before
//! the header is written. Failures here are fatal to the run; the caller
//! does not retry.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::domain::models::FileVerdict;

const HEADER: &str = "file,status,final_state,result";

pub struct ReportSink {
    file: File,
}

impl ReportSink {
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("failed to remove stale report {}", path.display()))?;
        }
        let mut file = File::create(path)
            .with_context(|| format!("failed to create report {}", path.display()))?;
        writeln!(file, "{HEADER}")
            .with_context(|| format!("failed to write report header to {}", path.display()))?;
        Ok(Self { file })
    }

    pub fn append(&mut self, verdict: &FileVerdict) -> anyhow::Result<()> {
        writeln!(
            self.file,
            "{},{},{},{}",
            csv_field(&verdict.file),
            verdict.status,
            csv_field(&verdict.final_state),
            csv_field(&verdict.detail),
        )
        .context("failed to append report row")
    }
}

/// Quote a field when it contains a delimiter, quote, or line break. Error
/// texts are the only values that ever need this.
fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
