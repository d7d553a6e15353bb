//! Event surface: the thing that delivers press/move/release events.
//!
//! The tracker never captures closures over its own state. It subscribes by
//! event name and the host routes delivered events back through
//! [`GestureTracker::dispatch`](crate::tracker::GestureTracker::dispatch).
//! `ListenerRegistry` is the in-crate implementation hosts can embed.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Identifies one subscription on a surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// Shared cancel flag. Cloned into a subscription; cancelling it detaches
/// every subscription that holds a clone.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// How a listener should behave
#[derive(Clone, Debug, Default)]
pub struct ListenOptions {
    /// Detach after the first delivery
    pub once: bool,
    /// Detach when this token is cancelled
    pub signal: Option<CancellationToken>,
}

impl ListenOptions {
    pub fn once() -> Self {
        Self {
            once: true,
            signal: None,
        }
    }

    pub fn with_signal(signal: CancellationToken) -> Self {
        Self {
            once: false,
            signal: Some(signal),
        }
    }
}

/// Capability to subscribe to named events.
///
/// All methods take `&self`; implementations use interior mutability so the
/// surface can be shared between the host and the tracker.
pub trait EventSurface {
    /// Attach a listener for `event`
    fn listen(&self, event: &'static str, options: ListenOptions) -> SubscriptionId;

    /// Detach a listener. Unknown ids are ignored.
    fn unlisten(&self, id: SubscriptionId);

    /// Offer an event to the surface. Returns true if a live listener took it.
    /// One-shot listeners are consumed and cancelled ones pruned.
    fn deliver(&self, event: &'static str) -> bool;
}

impl<S: EventSurface + ?Sized> EventSurface for Arc<S> {
    fn listen(&self, event: &'static str, options: ListenOptions) -> SubscriptionId {
        (**self).listen(event, options)
    }

    fn unlisten(&self, id: SubscriptionId) {
        (**self).unlisten(id)
    }

    fn deliver(&self, event: &'static str) -> bool {
        (**self).deliver(event)
    }
}

#[derive(Debug)]
struct Listener {
    id: SubscriptionId,
    event: &'static str,
    options: ListenOptions,
}

impl Listener {
    fn is_live(&self) -> bool {
        !self.options.signal.as_ref().is_some_and(CancellationToken::is_cancelled)
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    listeners: Vec<Listener>,
    next_id: u64,
}

/// Listener bookkeeping for a single element
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    inner: Mutex<RegistryInner>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live listeners for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.inner
            .lock()
            .listeners
            .iter()
            .filter(|l| l.event == event && l.is_live())
            .count()
    }

    /// Number of live listeners across all events
    pub fn total_listeners(&self) -> usize {
        self.inner.lock().listeners.iter().filter(|l| l.is_live()).count()
    }
}

impl EventSurface for ListenerRegistry {
    fn listen(&self, event: &'static str, options: ListenOptions) -> SubscriptionId {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.listeners.push(Listener { id, event, options });
        tracing::trace!(event, id = id.0, "listener attached");
        id
    }

    fn unlisten(&self, id: SubscriptionId) {
        let mut inner = self.inner.lock();
        inner.listeners.retain(|l| l.id != id);
    }

    fn deliver(&self, event: &'static str) -> bool {
        let mut inner = self.inner.lock();
        inner.listeners.retain(Listener::is_live);

        let Some(index) = inner.listeners.iter().position(|l| l.event == event) else {
            return false;
        };
        if inner.listeners[index].options.once {
            inner.listeners.remove(index);
        }
        true
    }
}
