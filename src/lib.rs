//! Headless drag-gesture tracking for absolutely positioned containers.
//!
//! A [`GestureTracker`] follows press → move → release on one container and
//! turns pointer deltas into a [`Position`]: pixels horizontally, percent of
//! the parent height vertically. The host injects the event surface and the
//! layout measurements, renders the [`ContainerStyle`] the tracker hands out,
//! and receives a [`ChangePositionInfo`] once per completed drag.
//!
//! ## Modules
//!
//! - `tracker` - the gesture state machine and its handlers
//! - `state` / `session` - drag state and per-gesture listener ownership
//! - `transform` - pointer delta to position conversion
//! - `surface` - event subscription capability and cancellation tokens
//! - `input` - input model selection and raw event types
//! - `style` - typed render output

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod perf;
pub mod session;
pub mod state;
pub mod style;
pub mod surface;
pub mod tracker;
pub mod transform;

pub use config::{TrackerConfig, TransitionConfig};
pub use error::{DragError, DragResult};
pub use geometry::{ChangePositionInfo, ParentSize, PixelPoint, Position};
pub use input::{EventResponse, InputEvent, InputModel, Phase, PointerEvent, TouchPoint};
pub use style::{ContainerStyle, Offset, Transition};
pub use surface::{CancellationToken, EventSurface, ListenOptions, ListenerRegistry, SubscriptionId};
pub use tracker::{ContainerLayout, FixedLayout, GestureTracker};
