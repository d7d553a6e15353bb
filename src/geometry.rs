//! Position and size types exchanged between the tracker and its host.

use serde::{Deserialize, Serialize};

/// Anchor offsets of the container relative to its parent.
///
/// Each edge is independent and optional; an unset edge places no
/// constraint on the container. Horizontal edges are pixels, vertical edges
/// are percentages of the parent height. No cross-field validation is done:
/// callers are responsible for supplying sane combinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Distance from the parent's left edge, in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// Distance from the parent's top edge, in percent of parent height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    /// Distance from the parent's right edge, in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    /// Distance from the parent's bottom edge, in percent of parent height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
}

impl Position {
    /// A left/top anchored position, the only shape a drag ever produces
    pub fn left_top(left: f64, top: f64) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
            ..Self::default()
        }
    }

    /// A right/bottom anchored position
    pub fn right_bottom(right: f64, bottom: f64) -> Self {
        Self {
            right: Some(right),
            bottom: Some(bottom),
            ..Self::default()
        }
    }

    /// Returns true if no edge is constrained
    pub fn is_unconstrained(&self) -> bool {
        self.left.is_none() && self.top.is_none() && self.right.is_none() && self.bottom.is_none()
    }
}

/// Parent container dimensions in pixels, measured once per drag start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentSize {
    /// Width
    pub x: u32,
    /// Height
    pub y: u32,
}

impl ParentSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { x: width, y: height }
    }

    pub fn width(&self) -> u32 {
        self.x
    }

    pub fn height(&self) -> u32 {
        self.y
    }
}

/// Whole-pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Floor raw coordinates to whole pixels. Non-finite values become 0.
    pub fn floor(x: f64, y: f64) -> Self {
        Self {
            x: floor_px(x),
            y: floor_px(y),
        }
    }

    /// Component-wise `self - origin`
    pub fn delta_from(self, origin: PixelPoint) -> PixelPoint {
        PixelPoint {
            x: self.x.saturating_sub(origin.x),
            y: self.y.saturating_sub(origin.y),
        }
    }
}

fn floor_px(value: f64) -> i32 {
    if value.is_finite() {
        // `as` saturates out-of-range floats
        value.floor() as i32
    } else {
        0
    }
}

/// Result of a completed drag, handed to the host exactly once per gesture.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePositionInfo {
    pub position: Position,
    pub parent_size: ParentSize,
}
