//! Per-file sequence validation.
//!
//! Drives one file's lines through the extractor and the transition table.
//! Scanning stops at the first non-OK diagnostic; later lines are never
//! evaluated, even if they could complete the sequence. A file with no
//! matching events at all scans cleanly but fails the verdict (it never
//! reached the terminal state).

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::models::{
    Analysis, Diagnostic, FileVerdict, Status, SwapState, EXCEPTION_STATE,
};
use crate::services::extract::EventExtractor;
use crate::services::protocol;

#[derive(thiserror::Error, Debug)]
pub enum AnalyzeError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validate an ordered stream of lines. Pure given the stream.
pub fn analyze_lines<'a, I>(extractor: &EventExtractor, lines: I) -> Analysis
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = SwapState::WaitingForOwnerPairing;
    let mut diagnostic = Diagnostic::Ok;
    let mut events_seen = 0;
    let mut stopped_at = None;

    for (idx, line) in lines.into_iter().enumerate() {
        let Some(event) = extractor.extract(line) else {
            continue;
        };
        events_seen += 1;
        let (next, diag) = protocol::step(state, event);
        state = next;
        diagnostic = diag;
        if !diagnostic.is_ok() {
            stopped_at = Some(idx + 1);
            break;
        }
    }

    Analysis {
        state,
        diagnostic,
        events_seen,
        stopped_at,
    }
}

/// Validate one log file. Content is decoded as UTF-8 with invalid byte
/// sequences replaced, so only the read itself can fail.
pub fn analyze_file(extractor: &EventExtractor, path: &Path) -> Result<Analysis, AnalyzeError> {
    let bytes = fs::read(path).map_err(|source| AnalyzeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(analyze_lines(extractor, text.lines()))
}

/// Fold an analysis outcome into the report row for `path`. Read failures
/// become a FAILED row with the `EXCEPTION` state so the batch can go on.
pub fn verdict_for(path: &Path, outcome: Result<Analysis, AnalyzeError>) -> FileVerdict {
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match outcome {
        Ok(analysis) => FileVerdict {
            file,
            status: if analysis.passed() {
                Status::Passed
            } else {
                Status::Failed
            },
            final_state: analysis.state.to_string(),
            detail: analysis.diagnostic.to_string(),
        },
        Err(e) => FileVerdict {
            file,
            status: Status::Failed,
            final_state: EXCEPTION_STATE.to_string(),
            detail: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PAIRING_STARTED: &str = "ble: Owner Pairing Started";
    const PAIRING_COMPLETED: &str = "ble: Owner Pairing Complete!";
    const OLD_OWNER_GONE: &str = "ble: Link Terminated Received, link 0x00";
    const NEW_OWNER_GONE: &str = "ble: Link Terminated Received, link 0x01";
    const BOND_DELETED: &str = "BLE Cloud Event: Bond Deletion - Deletion Type: 02 | Status: 00";
    const BOND_DELETE_FAILED: &str =
        "BLE Cloud Event: Bond Deletion - Deletion Type: 02 | Status: 03";

    fn extractor() -> EventExtractor {
        EventExtractor::new().expect("patterns compile")
    }

    fn full_swap() -> Vec<&'static str> {
        vec![
            PAIRING_STARTED,
            PAIRING_COMPLETED,
            PAIRING_STARTED,
            OLD_OWNER_GONE,
            PAIRING_COMPLETED,
            BOND_DELETED,
            NEW_OWNER_GONE,
        ]
    }

    #[test]
    fn full_swap_passes() {
        let analysis = analyze_lines(&extractor(), full_swap());
        assert_eq!(analysis.state, SwapState::OwnerSwapSuccess);
        assert_eq!(analysis.diagnostic, Diagnostic::Ok);
        assert_eq!(analysis.events_seen, 7);
        assert_eq!(analysis.stopped_at, None);
        assert!(analysis.passed());
    }

    #[test]
    fn noise_lines_between_markers_are_ignored() {
        let mut lines = Vec::new();
        for marker in full_swap() {
            lines.push("heartbeat: rssi -61");
            lines.push(marker);
        }
        let analysis = analyze_lines(&extractor(), lines);
        assert!(analysis.passed());
        assert_eq!(analysis.events_seen, 7);
    }

    #[test]
    fn stalled_sequence_fails_with_clean_diagnostic() {
        let analysis = analyze_lines(&extractor(), [PAIRING_STARTED]);
        assert_eq!(analysis.state, SwapState::OwnerPairingStarted);
        assert_eq!(analysis.diagnostic, Diagnostic::Ok);
        assert!(!analysis.passed());
    }

    #[test]
    fn out_of_order_completion_stops_at_the_first_line() {
        let analysis = analyze_lines(&extractor(), [PAIRING_COMPLETED, PAIRING_STARTED]);
        assert_eq!(analysis.state, SwapState::WaitingForOwnerPairing);
        assert_eq!(
            analysis.diagnostic,
            Diagnostic::Fail("Owner Pairing was not started")
        );
        assert_eq!(analysis.stopped_at, Some(1));
    }

    #[test]
    fn bond_deletion_failure_fails_the_file() {
        let lines = vec![
            PAIRING_STARTED,
            PAIRING_COMPLETED,
            PAIRING_STARTED,
            OLD_OWNER_GONE,
            PAIRING_COMPLETED,
            BOND_DELETE_FAILED,
        ];
        let analysis = analyze_lines(&extractor(), lines);
        assert_eq!(analysis.state, SwapState::OwnerSwapCompleted);
        assert_eq!(analysis.diagnostic, Diagnostic::Fail("Bond Deletion failed"));
        assert_eq!(analysis.stopped_at, Some(6));
    }

    #[test]
    fn empty_stream_keeps_the_defaults() {
        let analysis = analyze_lines(&extractor(), Vec::<&str>::new());
        assert_eq!(analysis.state, SwapState::WaitingForOwnerPairing);
        assert_eq!(analysis.diagnostic, Diagnostic::Ok);
        assert_eq!(analysis.events_seen, 0);
        assert!(!analysis.passed());
    }

    #[test]
    fn later_lines_cannot_recover_a_failed_scan() {
        // The tail after the violation is a complete valid swap; it must
        // never be read.
        let mut lines = vec![PAIRING_COMPLETED];
        lines.extend(full_swap());
        let analysis = analyze_lines(&extractor(), lines);
        assert_eq!(analysis.state, SwapState::WaitingForOwnerPairing);
        assert_eq!(analysis.stopped_at, Some(1));
        assert!(!analysis.passed());
    }

    #[test]
    fn rerunning_identical_content_yields_identical_analysis() {
        let ex = extractor();
        assert_eq!(analyze_lines(&ex, full_swap()), analyze_lines(&ex, full_swap()));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"\xff\xfe garbage\n").expect("write");
        for marker in full_swap() {
            writeln!(file, "{marker}").expect("write");
        }
        let analysis = analyze_file(&extractor(), file.path()).expect("lossy decode never fails");
        assert!(analysis.passed());
    }

    #[test]
    fn missing_file_becomes_an_exception_verdict() {
        let path = Path::new("no/such/file.log");
        let verdict = verdict_for(path, analyze_file(&extractor(), path));
        assert_eq!(verdict.status, Status::Failed);
        assert_eq!(verdict.final_state, EXCEPTION_STATE);
        assert_eq!(verdict.file, "file.log");
        assert!(verdict.detail.contains("no/such/file.log"));
    }

    #[test]
    fn passing_analysis_maps_to_a_passed_row() {
        let verdict = verdict_for(
            Path::new("logs/run1.log"),
            Ok(analyze_lines(&extractor(), full_swap())),
        );
        assert_eq!(verdict.status, Status::Passed);
        assert_eq!(verdict.file, "run1.log");
        assert_eq!(verdict.final_state, "OwnerSwapSuccess");
        assert_eq!(verdict.detail, "OK");
    }
}
