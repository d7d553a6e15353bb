//! Typed render output for the container.
//!
//! The tracker never touches a rendering backend. It hands out a
//! `ContainerStyle` and the host maps it onto whatever it draws with.
//! `Display` renders CSS-like declarations for web-style hosts.

use crate::config::TransitionConfig;
use crate::geometry::Position;
use serde::Serialize;
use std::fmt;

/// One edge offset
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Offset {
    Px(f64),
    Percent(f64),
    Unset,
}

impl Offset {
    fn px(value: Option<f64>) -> Self {
        value.map_or(Self::Unset, Self::Px)
    }

    fn percent(value: Option<f64>) -> Self {
        value.map_or(Self::Unset, Self::Percent)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
            Self::Unset => f.write_str("unset"),
        }
    }
}

/// Transition applied to offset changes
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// Movement tracks the pointer 1:1
    None,
    /// Programmatic moves animate
    Eased { duration_ms: u64, easing: String },
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Eased { duration_ms, easing } => {
                write!(f, "all {}s {}", *duration_ms as f64 / 1000.0, easing)
            }
        }
    }
}

/// Everything a host needs to draw the container
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContainerStyle {
    pub left: Offset,
    pub top: Offset,
    pub right: Offset,
    pub bottom: Offset,
    pub transition: Transition,
    /// Drag-active marker
    pub dragging: bool,
}

impl ContainerStyle {
    pub fn new(position: Option<&Position>, dragging: bool, transition: &TransitionConfig) -> Self {
        let position = position.copied().unwrap_or_default();
        Self {
            left: Offset::px(position.left),
            top: Offset::percent(position.top),
            right: Offset::px(position.right),
            bottom: Offset::percent(position.bottom),
            transition: if dragging {
                Transition::None
            } else {
                Transition::Eased {
                    duration_ms: transition.duration_ms,
                    easing: transition.easing.clone(),
                }
            },
            dragging,
        }
    }
}

impl fmt::Display for ContainerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position: absolute; left: {}; top: {}; right: {}; bottom: {}; transition: {};",
            self.left, self.top, self.right, self.bottom, self.transition
        )
    }
}
