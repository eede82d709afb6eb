use serde::Serialize;
use std::fmt;

/// Final-state column value for files that could not be read.
pub const EXCEPTION_STATE: &str = "EXCEPTION";

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A discrete protocol signal derived from a single log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Event {
    PairingStarted,
    PairingCompleted,
    OldOwnerDisconnected,
    BondDeletion,
    BondDeletionFailed,
    NewOwnerDisconnected,
}

impl Event {
    pub const ALL: [Event; 6] = [
        Event::PairingStarted,
        Event::PairingCompleted,
        Event::OldOwnerDisconnected,
        Event::BondDeletion,
        Event::BondDeletionFailed,
        Event::NewOwnerDisconnected,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Event::PairingStarted => "PairingStarted",
            Event::PairingCompleted => "PairingCompleted",
            Event::OldOwnerDisconnected => "OldOwnerDisconnected",
            Event::BondDeletion => "BondDeletion",
            Event::BondDeletionFailed => "BondDeletionFailed",
            Event::NewOwnerDisconnected => "NewOwnerDisconnected",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase of the owner-swap hand-off. One is current at any point of a scan;
/// `OwnerSwapSuccess` is terminal and absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SwapState {
    WaitingForOwnerPairing,
    OwnerPairingStarted,
    OwnerPairingCompleted,
    OwnerSwapInitiated,
    OldOwnerDisconnected,
    OwnerSwapCompleted,
    BondDeletedStillConnected,
    NewOwnerDisconnectedBondStillExists,
    OwnerSwapSuccess,
}

impl SwapState {
    pub const ALL: [SwapState; 9] = [
        SwapState::WaitingForOwnerPairing,
        SwapState::OwnerPairingStarted,
        SwapState::OwnerPairingCompleted,
        SwapState::OwnerSwapInitiated,
        SwapState::OldOwnerDisconnected,
        SwapState::OwnerSwapCompleted,
        SwapState::BondDeletedStillConnected,
        SwapState::NewOwnerDisconnectedBondStillExists,
        SwapState::OwnerSwapSuccess,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SwapState::WaitingForOwnerPairing => "WaitingForOwnerPairing",
            SwapState::OwnerPairingStarted => "OwnerPairingStarted",
            SwapState::OwnerPairingCompleted => "OwnerPairingCompleted",
            SwapState::OwnerSwapInitiated => "OwnerSwapInitiated",
            SwapState::OldOwnerDisconnected => "OldOwnerDisconnected",
            SwapState::OwnerSwapCompleted => "OwnerSwapCompleted",
            SwapState::BondDeletedStillConnected => "BondDeletedStillConnected",
            SwapState::NewOwnerDisconnectedBondStillExists => "NewOwnerDisconnectedBondStillExists",
            SwapState::OwnerSwapSuccess => "OwnerSwapSuccess",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SwapState::OwnerSwapSuccess)
    }
}

impl fmt::Display for SwapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one transition: "OK" or the reason the expected step did not
/// happen. A value, not an error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    Ok,
    Fail(&'static str),
}

impl Diagnostic {
    pub fn is_ok(&self) -> bool {
        matches!(self, Diagnostic::Ok)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Ok => f.write_str("OK"),
            Diagnostic::Fail(reason) => f.write_str(reason),
        }
    }
}

/// Outcome of scanning one line stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub state: SwapState,
    pub diagnostic: Diagnostic,
    /// Number of lines that mapped to a protocol event.
    pub events_seen: usize,
    /// 1-based line number where scanning stopped early, if it did.
    pub stopped_at: Option<usize>,
}

impl Analysis {
    pub fn passed(&self) -> bool {
        self.state.is_terminal() && self.diagnostic.is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Passed,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Passed => f.write_str("PASSED"),
            Status::Failed => f.write_str("FAILED"),
        }
    }
}

/// One report row: the classification of a single log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileVerdict {
    pub file: String,
    pub status: Status,
    /// Final state name, or `EXCEPTION` when the file could not be read.
    pub final_state: String,
    /// Diagnostic text, or the read error.
    pub detail: String,
}

/// Batch result emitted by `scan --json`.
#[derive(Serialize)]
pub struct ScanSummary {
    pub root: String,
    pub report: String,
    pub scanned: usize,
    pub passed: usize,
    pub failed: usize,
    pub verdicts: Vec<FileVerdict>,
}

/// One extracted event, as listed by the `events` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventHit {
    /// 1-based line number the event was extracted from.
    pub line: usize,
    pub event: Event,
}
