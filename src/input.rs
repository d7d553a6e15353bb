//! Input model selection and raw pointer events.
//!
//! The tracker speaks one of two input dialects for its whole lifetime:
//! touch-style events (coordinate arrays, `touchstart`/`touchmove`/`touchend`)
//! or pointer-style events (a single coordinate pair,
//! `mousedown`/`mousemove`/`mouseup`). The choice is made once at
//! construction.

use crate::constants::TOUCH_USER_AGENT_MARKERS;
use crate::geometry::PixelPoint;
use serde::{Deserialize, Serialize};

/// Which family of events drives the tracker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputModel {
    /// Touch screens: multi-point coordinate lists
    Touch,
    /// Mouse and pen: one coordinate pair
    #[default]
    Pointer,
}

impl InputModel {
    /// Select the input model from a user-agent string.
    ///
    /// Mobile agents (Android, webOS, iPhone, iPod, BlackBerry) get touch
    /// input, everything else pointer input.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let agent = user_agent.to_ascii_lowercase();
        if TOUCH_USER_AGENT_MARKERS.iter().any(|marker| agent.contains(marker)) {
            Self::Touch
        } else {
            Self::Pointer
        }
    }

    pub fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }

    /// Event name for a gesture phase in this model
    pub fn event_name(self, phase: Phase) -> &'static str {
        match (self, phase) {
            (Self::Touch, Phase::Press) => "touchstart",
            (Self::Touch, Phase::Move) => "touchmove",
            (Self::Touch, Phase::Release) => "touchend",
            (Self::Pointer, Phase::Press) => "mousedown",
            (Self::Pointer, Phase::Move) => "mousemove",
            (Self::Pointer, Phase::Release) => "mouseup",
        }
    }
}

/// Gesture phase of a raw event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Press,
    Move,
    Release,
}

/// One touch contact in screen coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Coordinates carried by a raw event
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Mouse/pen event with a single coordinate pair
    Pointer { client_x: f64, client_y: f64 },
    /// Touch event. `touches` lists contacts still on the surface,
    /// `changed_touches` those that changed in this event.
    Touch {
        touches: Vec<TouchPoint>,
        changed_touches: Vec<TouchPoint>,
    },
}

impl PointerEvent {
    pub fn pointer(client_x: f64, client_y: f64) -> Self {
        Self::Pointer { client_x, client_y }
    }

    /// Touch event where the same single contact is both active and changed
    pub fn touch(client_x: f64, client_y: f64) -> Self {
        let point = TouchPoint::new(client_x, client_y);
        Self::Touch {
            touches: vec![point],
            changed_touches: vec![point],
        }
    }

    /// Touch end: the lifted contact is only in the changed list
    pub fn touch_end(client_x: f64, client_y: f64) -> Self {
        Self::Touch {
            touches: Vec::new(),
            changed_touches: vec![TouchPoint::new(client_x, client_y)],
        }
    }

    /// Model this event belongs to
    pub fn model(&self) -> InputModel {
        match self {
            Self::Pointer { .. } => InputModel::Pointer,
            Self::Touch { .. } => InputModel::Touch,
        }
    }

    /// Coordinate of the primary active contact, used by press and move
    pub fn active_point(&self) -> Option<PixelPoint> {
        match self {
            Self::Pointer { client_x, client_y } => Some(PixelPoint::floor(*client_x, *client_y)),
            Self::Touch { touches, .. } => touches.first().map(|t| PixelPoint::floor(t.client_x, t.client_y)),
        }
    }

    /// Coordinate of the primary contact at release.
    ///
    /// Touch end carries no active touches, so the changed list is used.
    pub fn release_point(&self) -> Option<PixelPoint> {
        match self {
            Self::Pointer { .. } => self.active_point(),
            Self::Touch { changed_touches, .. } => changed_touches
                .first()
                .map(|t| PixelPoint::floor(t.client_x, t.client_y)),
        }
    }
}

/// A raw event as delivered by the host
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent {
    pub phase: Phase,
    pub pointer: PointerEvent,
}

impl InputEvent {
    pub fn new(phase: Phase, pointer: PointerEvent) -> Self {
        Self { phase, pointer }
    }

    /// Name the host platform would use for this event
    pub fn name(&self) -> &'static str {
        self.pointer.model().event_name(self.phase)
    }
}

/// What the host should do with an event after the tracker handled it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the platform default action (text selection and the like)
    pub prevent_default: bool,
    /// Keep ancestors from reacting to the same event
    pub stop_propagation: bool,
}

impl EventResponse {
    pub const IGNORED: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    pub fn prevent_default() -> Self {
        Self {
            prevent_default: true,
            ..Self::IGNORED
        }
    }

    pub fn stop_propagation() -> Self {
        Self {
            stop_propagation: true,
            ..Self::IGNORED
        }
    }
}
