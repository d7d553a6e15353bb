//! Coordinate conversion from pointer samples to container positions.
//!
//! Horizontal movement is applied 1:1 in pixels. Vertical movement is
//! converted to a percentage of the parent height so the container keeps its
//! relative place when the parent is resized after the drag.

use crate::constants::PERCENT_SCALE;
use crate::error::{DragError, DragResult};
use crate::geometry::{ParentSize, PixelPoint, Position};

/// Start-of-drag values needed for conversion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformContext {
    /// Container offset within its parent at press time
    pub start_offset: PixelPoint,
    /// Pointer coordinate at press time
    pub start_pointer: PixelPoint,
    /// Parent dimensions at press time
    pub parent_size: ParentSize,
}

impl TransformContext {
    /// Create a new context, rejecting parents that cannot serve as a percentage base
    pub fn new(start_offset: PixelPoint, start_pointer: PixelPoint, parent_size: ParentSize) -> DragResult<Self> {
        if parent_size.height() == 0 {
            return Err(DragError::DegenerateParent {
                height: parent_size.height(),
            });
        }
        Ok(Self {
            start_offset,
            start_pointer,
            parent_size,
        })
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert the current pointer sample to a left/top anchored position
    pub fn pointer_to_position(pointer: PixelPoint, ctx: &TransformContext) -> DragResult<Position> {
        let delta = pointer.delta_from(ctx.start_pointer);

        let left = f64::from(ctx.start_offset.x) + f64::from(delta.x);
        let top = Self::px_to_percent(f64::from(ctx.start_offset.y) + f64::from(delta.y), ctx.parent_size.height());

        if !left.is_finite() {
            return Err(DragError::NonFinite { axis: "left" });
        }
        if !top.is_finite() {
            return Err(DragError::NonFinite { axis: "top" });
        }

        Ok(Position::left_top(left, top))
    }

    /// Convert a vertical pixel offset to percent of the parent height
    #[inline]
    pub fn px_to_percent(px: f64, parent_height: u32) -> f64 {
        px / f64::from(parent_height) * PERCENT_SCALE
    }

    /// Convert percent of the parent height back to pixels
    #[inline]
    pub fn percent_to_px(percent: f64, parent_height: u32) -> f64 {
        percent / PERCENT_SCALE * f64::from(parent_height)
    }
}
