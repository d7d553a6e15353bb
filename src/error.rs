//! Error types for drag tracking
//!
//! Every failure the tracker can hit is recoverable: the offending event is
//! dropped and the tracker stays in a consistent state.

use thiserror::Error;

/// Errors that can occur while tracking a drag gesture
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DragError {
    /// The container has no parent to measure, so dragging stays disabled
    #[error("container has no parent element")]
    NoParent,

    /// The tracker was asked to handle input before `mount` succeeded
    #[error("tracker is not mounted")]
    NotMounted,

    /// Parent height cannot be used as a percentage base
    #[error("parent height {height} cannot be used to compute a top percentage")]
    DegenerateParent { height: u32 },

    /// A touch event arrived without any touch points
    #[error("touch event carried no touch points")]
    EmptyTouchList,

    /// The transform produced NaN or infinity on one axis
    #[error("non-finite {axis} offset")]
    NonFinite { axis: &'static str },

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for drag operations
pub type DragResult<T> = Result<T, DragError>;

impl From<serde_json::Error> for DragError {
    fn from(e: serde_json::Error) -> Self {
        DragError::Config(e.to_string())
    }
}
