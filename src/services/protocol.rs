//! The owner-swap transition table.
//!
//! `step` is a pure, total function over (state, event): every pair yields a
//! defined next state and diagnostic, and a non-OK diagnostic always leaves
//! the state unchanged. After `OwnerSwapCompleted` the new-owner link may
//! drop either before or after bond deletion is observed; both orders pass
//! through their own branch state and converge on `OwnerSwapSuccess`, which
//! absorbs every further event.

use crate::domain::models::{Diagnostic, Event, SwapState};

pub fn step(state: SwapState, event: Event) -> (SwapState, Diagnostic) {
    use SwapState::*;

    match state {
        WaitingForOwnerPairing => match event {
            Event::PairingStarted => (OwnerPairingStarted, Diagnostic::Ok),
            _ => (state, Diagnostic::Fail("Owner Pairing was not started")),
        },
        OwnerPairingStarted => match event {
            Event::PairingCompleted => (OwnerPairingCompleted, Diagnostic::Ok),
            _ => (state, Diagnostic::Fail("Owner Pairing was not completed")),
        },
        OwnerPairingCompleted => match event {
            Event::PairingStarted => (OwnerSwapInitiated, Diagnostic::Ok),
            _ => (state, Diagnostic::Fail("Owner Swap was not initiated")),
        },
        OwnerSwapInitiated => match event {
            Event::OldOwnerDisconnected => (OldOwnerDisconnected, Diagnostic::Ok),
            _ => (state, Diagnostic::Fail("Old Owner did not disconnect")),
        },
        OldOwnerDisconnected => match event {
            Event::PairingCompleted => (OwnerSwapCompleted, Diagnostic::Ok),
            _ => (state, Diagnostic::Fail("Owner Swap was not completed")),
        },
        OwnerSwapCompleted => match event {
            Event::BondDeletion => (BondDeletedStillConnected, Diagnostic::Ok),
            Event::BondDeletionFailed => (state, Diagnostic::Fail("Bond Deletion failed")),
            Event::NewOwnerDisconnected => (NewOwnerDisconnectedBondStillExists, Diagnostic::Ok),
            _ => (
                state,
                Diagnostic::Fail("Bond Deletion did not occur before disconnecting"),
            ),
        },
        BondDeletedStillConnected => match event {
            Event::NewOwnerDisconnected => (OwnerSwapSuccess, Diagnostic::Ok),
            // A stray old-owner termination can still show up here; harmless.
            Event::OldOwnerDisconnected => (state, Diagnostic::Ok),
            _ => (state, Diagnostic::Fail("New Owner did not disconnect")),
        },
        NewOwnerDisconnectedBondStillExists => match event {
            Event::BondDeletion => (OwnerSwapSuccess, Diagnostic::Ok),
            Event::BondDeletionFailed => (state, Diagnostic::Fail("Bond Deletion failed")),
            Event::OldOwnerDisconnected => (state, Diagnostic::Ok),
            _ => (
                state,
                Diagnostic::Fail("Bond Deletion did not occur after disconnecting"),
            ),
        },
        OwnerSwapSuccess => (state, Diagnostic::Ok),
    }
}
