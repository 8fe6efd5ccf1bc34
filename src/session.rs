//! Single-slot session state machine.
//!
//! The design recognizes exactly two mutually exclusive long-running
//! operations; at most one may be active at a time. Acquiring the slot while
//! busy fails fast instead of racing two in-flight requests.

use std::sync::{Arc, Mutex};

use crate::error::VireoError;

/// Current activity of the session slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Optimizing,
    Generating,
}

/// Shared single-request slot.
#[derive(Debug, Clone, Default)]
pub struct SessionSlot {
    state: Arc<Mutex<SessionState>>,
}

impl SessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        *self.state.lock().unwrap()
    }

    /// Move from `Idle` into `next`, or fail with `Busy`.
    ///
    /// The returned guard restores `Idle` on drop, so the slot is released on
    /// completion, error, or cancellation of the request future.
    pub fn acquire(&self, next: SessionState) -> Result<SessionGuard, VireoError> {
        debug_assert_ne!(next, SessionState::Idle);
        let mut state = self.state.lock().unwrap();
        if *state != SessionState::Idle {
            return Err(VireoError::Busy);
        }
        *state = next;
        Ok(SessionGuard {
            state: Arc::clone(&self.state),
        })
    }
}

/// Releases the session slot when dropped.
#[derive(Debug)]
pub struct SessionGuard {
    state: Arc<Mutex<SessionState>>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        *self.state.lock().unwrap() = SessionState::Idle;
    }
}
