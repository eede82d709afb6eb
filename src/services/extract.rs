//! Maps raw log lines to protocol events.
//!
//! Patterns are checked in priority order and the first match wins; in
//! particular the bond-deletion success marker (`Status: 00`) must be tried
//! before the generic status marker that catches every other outcome. Lines
//! matching no pattern carry no event and never touch the state machine.

use crate::domain::models::Event;
use regex::Regex;

const PATTERNS: [(&str, Event); 6] = [
    (r"Owner Pairing Started", Event::PairingStarted),
    (r"Owner Pairing Complete!", Event::PairingCompleted),
    (r"Link Terminated Received, link 0x00", Event::OldOwnerDisconnected),
    (
        r"BLE Cloud Event: Bond Deletion - Deletion Type: 02 \| Status: 00",
        Event::BondDeletion,
    ),
    (
        r"BLE Cloud Event: Bond Deletion - Deletion Type: 02 \| Status:",
        Event::BondDeletionFailed,
    ),
    (r"Link Terminated Received, link 0x01", Event::NewOwnerDisconnected),
];

pub struct EventExtractor {
    patterns: Vec<(Regex, Event)>,
}

impl EventExtractor {
    pub fn new() -> anyhow::Result<Self> {
        let patterns = PATTERNS
            .iter()
            .map(|(pattern, event)| Ok((Regex::new(pattern)?, *event)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Returns the event for this line, or `None` when no marker matches.
    /// Matching is independent per line; no cross-line buffering.
    pub fn extract(&self, line: &str) -> Option<Event> {
        self.patterns
            .iter()
            .find(|(re, _)| re.is_match(line))
            .map(|(_, event)| *event)
    }
}
