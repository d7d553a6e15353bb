//! Gesture tracker - press, move and release handling for one container.
//!
//! ## Flow
//!
//! `mount` attaches a press listener on the event surface. A press captures
//! the container offset, the pointer position and the parent size into a
//! [`DragSession`] that arms its own move and release listeners. Every move
//! recomputes the live position; the release computes the final one, drops
//! the session (detaching its listeners) and reports to the host exactly once.
//!
//! Hosts either feed raw events through [`GestureTracker::dispatch`], which
//! consults the surface's listeners first, or call the phase handlers
//! directly.

use crate::config::{TrackerConfig, TransitionConfig};
use crate::error::{DragError, DragResult};
use crate::geometry::{ChangePositionInfo, ParentSize, PixelPoint, Position};
use crate::input::{EventResponse, InputEvent, InputModel, Phase, PointerEvent};
use crate::profile_scope;
use crate::session::{DragSession, SessionListeners};
use crate::state::DragState;
use crate::style::ContainerStyle;
use crate::surface::{EventSurface, ListenOptions, SubscriptionId};
use crate::transform::{CoordinateConverter, TransformContext};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Measures the container and its parent.
pub trait ContainerLayout {
    /// Rendered left/top offset of the container inside its parent, in pixels
    fn offset(&self) -> (f64, f64);

    /// Parent dimensions, or None when the container has no parent
    fn parent_size(&self) -> Option<ParentSize>;
}

/// Layout with fixed measurements
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedLayout {
    pub offset: (f64, f64),
    pub parent: Option<ParentSize>,
}

impl FixedLayout {
    pub fn new(offset: (f64, f64), parent: ParentSize) -> Self {
        Self {
            offset,
            parent: Some(parent),
        }
    }

    /// A container that is not attached to any parent
    pub fn detached() -> Self {
        Self::default()
    }
}

impl ContainerLayout for FixedLayout {
    fn offset(&self) -> (f64, f64) {
        self.offset
    }

    fn parent_size(&self) -> Option<ParentSize> {
        self.parent
    }
}

impl<L: ContainerLayout> ContainerLayout for Arc<Mutex<L>> {
    fn offset(&self) -> (f64, f64) {
        self.lock().offset()
    }

    fn parent_size(&self) -> Option<ParentSize> {
        self.lock().parent_size()
    }
}

/// Host callback receiving the result of each completed drag
pub type ChangeCallback = Box<dyn FnMut(ChangePositionInfo)>;

pub struct GestureTracker<S: EventSurface + Clone, L: ContainerLayout> {
    model: InputModel,
    transition: TransitionConfig,
    surface: S,
    layout: L,
    press_listener: Option<SubscriptionId>,
    state: DragState<S>,
    /// Live position: the host-supplied one while idle, the drag's while dragging
    position: Option<Position>,
    on_change: ChangeCallback,
}

impl<S: EventSurface + Clone, L: ContainerLayout> GestureTracker<S, L> {
    /// Build an unmounted tracker. The input model is resolved here, once.
    pub fn new(
        config: &TrackerConfig,
        surface: S,
        layout: L,
        position: Option<Position>,
        on_change: impl FnMut(ChangePositionInfo) + 'static,
    ) -> Self {
        let model = config.resolve_input_model();
        debug!(?model, "gesture tracker created");
        Self {
            model,
            transition: config.transition.clone(),
            surface,
            layout,
            press_listener: None,
            state: DragState::Idle,
            position,
            on_change: Box::new(on_change),
        }
    }

    pub fn input_model(&self) -> InputModel {
        self.model
    }

    pub fn is_mounted(&self) -> bool {
        self.press_listener.is_some()
    }

    /// True for exactly the interval between press and release
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Live position
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// In-progress session, if any
    pub fn session(&self) -> Option<&DragSession<S>> {
        self.state.session()
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Render output for the current state
    pub fn style(&self) -> ContainerStyle {
        ContainerStyle::new(self.position.as_ref(), self.is_dragging(), &self.transition)
    }

    /// Attach the press listener.
    ///
    /// Without a parent there is nothing to measure against, so dragging
    /// stays disabled and no listener is attached.
    pub fn mount(&mut self) -> DragResult<()> {
        if self.is_mounted() {
            return Ok(());
        }
        if self.layout.parent_size().is_none() {
            warn!("container has no parent, dragging disabled");
            return Err(DragError::NoParent);
        }

        let id = self.surface.listen(self.model.event_name(Phase::Press), ListenOptions::default());
        self.press_listener = Some(id);
        debug!(model = ?self.model, "tracker mounted");
        Ok(())
    }

    /// Detach every listener. An in-progress drag is aborted without reporting.
    pub fn unmount(&mut self) {
        if self.state.finish().is_some() {
            debug!("drag aborted by unmount");
        }
        if let Some(id) = self.press_listener.take() {
            self.surface.unlisten(id);
            debug!("tracker unmounted");
        }
    }

    /// Route a raw event to the matching phase handler.
    ///
    /// Events from the other input model, and events no live listener is
    /// subscribed to, are ignored.
    pub fn dispatch(&mut self, event: &InputEvent) -> EventResponse {
        if event.pointer.model() != self.model {
            trace!(event = event.name(), "event from inactive input model ignored");
            return EventResponse::IGNORED;
        }
        if !self.surface.deliver(self.model.event_name(event.phase)) {
            trace!(event = event.name(), "no listener for event");
            return EventResponse::IGNORED;
        }

        match event.phase {
            Phase::Press => {
                let Some(parent) = self.layout.parent_size() else {
                    warn!("press on a container without parent ignored");
                    return EventResponse::IGNORED;
                };
                self.on_press(&event.pointer, parent).unwrap_or_else(|e| {
                    warn!(error = %e, "press rejected");
                    EventResponse::IGNORED
                })
            }
            Phase::Move => self.on_move(&event.pointer),
            Phase::Release => self.on_release(&event.pointer),
        }
    }

    /// Start a drag session.
    ///
    /// A press while a session is still live replaces it; the old session's
    /// listeners are detached and it never reports.
    pub fn on_press(&mut self, event: &PointerEvent, parent: ParentSize) -> DragResult<EventResponse> {
        profile_scope!("on_press");

        if !self.is_mounted() {
            return Err(DragError::NotMounted);
        }
        let pointer = event.active_point().ok_or(DragError::EmptyTouchList)?;
        let (left, top) = self.layout.offset();
        let ctx = TransformContext::new(PixelPoint::floor(left, top), pointer, parent)?;

        let listeners = SessionListeners::arm(self.surface.clone(), self.model);
        let session = DragSession::new(ctx, self.model, listeners);
        if self.state.start(session).is_some() {
            debug!("previous drag aborted by new press");
        }

        debug!(
            start_offset = ?ctx.start_offset,
            start_pointer = ?ctx.start_pointer,
            parent = ?ctx.parent_size,
            "drag started"
        );

        Ok(if self.model.is_touch() {
            EventResponse::IGNORED
        } else {
            EventResponse::prevent_default()
        })
    }

    /// Update the live position from a move sample.
    pub fn on_move(&mut self, event: &PointerEvent) -> EventResponse {
        profile_scope!("on_move");

        let Some(session) = self.state.session_mut() else {
            return EventResponse::IGNORED;
        };
        if !self.model.is_touch() && !session.is_active() {
            trace!("move after release ignored");
            return EventResponse::IGNORED;
        }
        let Some(pointer) = event.active_point() else {
            warn!(error = %DragError::EmptyTouchList, "move skipped");
            return EventResponse::IGNORED;
        };

        match CoordinateConverter::pointer_to_position(pointer, session.context()) {
            Ok(position) => {
                session.record_pointer(pointer);
                trace!(?pointer, ?position, "drag moved");
                self.position = Some(position);
            }
            Err(e) => warn!(error = %e, "move skipped"),
        }
        EventResponse::IGNORED
    }

    /// Finish the drag and report the final position.
    pub fn on_release(&mut self, event: &PointerEvent) -> EventResponse {
        profile_scope!("on_release");

        let Some(mut session) = self.state.finish() else {
            return EventResponse::IGNORED;
        };
        session.cancel();
        if !self.model.is_touch() {
            session.deactivate();
        }

        let pointer = event.release_point().unwrap_or_else(|| {
            warn!(error = %DragError::EmptyTouchList, "release uses last move sample");
            session.last_pointer()
        });
        let position = CoordinateConverter::pointer_to_position(pointer, session.context())
            .or_else(|e| {
                warn!(error = %e, "release uses last move sample");
                CoordinateConverter::pointer_to_position(session.last_pointer(), session.context())
            })
            .unwrap_or_else(|_| start_position(session.context()));

        let info = ChangePositionInfo {
            position,
            parent_size: session.parent_size(),
        };
        drop(session);

        self.position = Some(position);
        debug!(?position, parent = ?info.parent_size, "drag finished");
        (self.on_change)(info);

        if self.model.is_touch() {
            EventResponse::IGNORED
        } else {
            EventResponse::stop_propagation()
        }
    }

    /// Replace the live position from the host.
    ///
    /// Applied immediately while idle. During a drag the session is
    /// authoritative and the value is dropped. Returns whether it was applied.
    pub fn set_position(&mut self, position: Option<Position>) -> bool {
        if self.is_dragging() {
            debug!(?position, "external position ignored during drag");
            return false;
        }
        self.position = position;
        true
    }
}

impl<S: EventSurface + Clone, L: ContainerLayout> Drop for GestureTracker<S, L> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Position the container had at press time
fn start_position(ctx: &TransformContext) -> Position {
    Position::left_top(
        f64::from(ctx.start_offset.x),
        CoordinateConverter::px_to_percent(f64::from(ctx.start_offset.y), ctx.parent_size.height()),
    )
}
