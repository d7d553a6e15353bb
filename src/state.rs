//! Drag state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (press on a mounted container)
//! Dragging -> Dragging   (press before release: previous session aborted)
//! Dragging -> Idle       (release - reports the final position)
//! Dragging -> Idle       (unmount - aborts without reporting)
//! ```

use crate::surface::EventSurface;
use crate::session::DragSession;

/// Interaction state of the tracker
pub enum DragState<S: EventSurface> {
    /// No gesture in progress
    Idle,
    /// Between press and release
    Dragging(DragSession<S>),
}

impl<S: EventSurface> Default for DragState<S> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<S: EventSurface> DragState<S> {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Get the in-progress session, if any
    pub fn session(&self) -> Option<&DragSession<S>> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Get the in-progress session mutably, if any
    pub fn session_mut(&mut self) -> Option<&mut DragSession<S>> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Start a new session, returning the one it replaced
    pub fn start(&mut self, session: DragSession<S>) -> Option<DragSession<S>> {
        match std::mem::replace(self, Self::Dragging(session)) {
            Self::Dragging(previous) => Some(previous),
            Self::Idle => None,
        }
    }

    /// Return to Idle, handing back the session that was in progress
    pub fn finish(&mut self) -> Option<DragSession<S>> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
