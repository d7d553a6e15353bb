//! Drag session - the immutable start state of one press→release gesture.
//!
//! A session owns its move and release subscriptions. Dropping the session
//! cancels the move listener's token and detaches both, so every way a
//! session can end (release, a second press, unmount, dropping the tracker)
//! leaves no listener behind.

use crate::geometry::{ParentSize, PixelPoint};
use crate::input::{InputModel, Phase};
use crate::surface::{CancellationToken, EventSurface, ListenOptions, SubscriptionId};
use crate::transform::TransformContext;

/// Move/release listeners armed for one session
pub struct SessionListeners<S: EventSurface> {
    surface: S,
    token: CancellationToken,
    move_id: SubscriptionId,
    release_id: SubscriptionId,
}

impl<S: EventSurface> SessionListeners<S> {
    /// Attach move (cancellable) and release (one-shot) listeners
    pub fn arm(surface: S, model: InputModel) -> Self {
        let token = CancellationToken::new();
        let move_id = surface.listen(model.event_name(Phase::Move), ListenOptions::with_signal(token.clone()));
        let release_id = surface.listen(model.event_name(Phase::Release), ListenOptions::once());
        Self {
            surface,
            token,
            move_id,
            release_id,
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl<S: EventSurface> Drop for SessionListeners<S> {
    fn drop(&mut self) {
        self.token.cancel();
        self.surface.unlisten(self.move_id);
        self.surface.unlisten(self.release_id);
    }
}

/// State of one in-progress drag
pub struct DragSession<S: EventSurface> {
    ctx: TransformContext,
    /// Most recent accepted pointer sample
    last_pointer: PixelPoint,
    /// Pointer input only: cleared at release so late moves are ignored
    active: bool,
    listeners: SessionListeners<S>,
}

impl<S: EventSurface> DragSession<S> {
    pub fn new(ctx: TransformContext, model: InputModel, listeners: SessionListeners<S>) -> Self {
        Self {
            last_pointer: ctx.start_pointer,
            active: !model.is_touch(),
            ctx,
            listeners,
        }
    }

    pub fn context(&self) -> &TransformContext {
        &self.ctx
    }

    pub fn start_offset(&self) -> PixelPoint {
        self.ctx.start_offset
    }

    pub fn start_pointer(&self) -> PixelPoint {
        self.ctx.start_pointer
    }

    pub fn parent_size(&self) -> ParentSize {
        self.ctx.parent_size
    }

    pub fn last_pointer(&self) -> PixelPoint {
        self.last_pointer
    }

    pub fn record_pointer(&mut self, pointer: PixelPoint) {
        self.last_pointer = pointer;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// True once the move listener has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.listeners.token().is_cancelled()
    }

    /// Cancel the move listener ahead of dropping the session
    pub fn cancel(&self) {
        self.listeners.token().cancel();
    }
}
