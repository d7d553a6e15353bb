//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestTrackerBuilder` - Builder for mounted trackers with a shared layout
//! - `Harness` - Sends raw events through the registry like a host would

use dragger::{
    ChangePositionInfo, EventResponse, FixedLayout, GestureTracker, InputEvent, InputModel, ListenerRegistry,
    ParentSize, Phase, PointerEvent, Position, TrackerConfig,
};
use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

pub type Registry = Arc<ListenerRegistry>;
pub type SharedLayout = Arc<Mutex<FixedLayout>>;

// ============================================================================
// TestTrackerBuilder
// ============================================================================

/// Builder for test trackers.
///
/// # Example
/// ```ignore
/// let mut h = TestTrackerBuilder::new()
///     .with_offset(10.0, 0.0)
///     .with_parent(400, 200)
///     .build();
/// h.press(100.0, 100.0);
/// ```
pub struct TestTrackerBuilder {
    config: TrackerConfig,
    offset: (f64, f64),
    parent: Option<ParentSize>,
    position: Option<Position>,
    mount: bool,
}

impl Default for TestTrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTrackerBuilder {
    /// Pointer input, container at (0, 0) in a 400x200 parent, mounted.
    pub fn new() -> Self {
        Self {
            config: TrackerConfig::with_input_model(InputModel::Pointer),
            offset: (0.0, 0.0),
            parent: Some(ParentSize::new(400, 200)),
            position: None,
            mount: true,
        }
    }

    pub fn touch(mut self) -> Self {
        self.config.input_model = Some(InputModel::Touch);
        self
    }

    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_offset(mut self, left: f64, top: f64) -> Self {
        self.offset = (left, top);
        self
    }

    pub fn with_parent(mut self, width: u32, height: u32) -> Self {
        self.parent = Some(ParentSize::new(width, height));
        self
    }

    pub fn detached(mut self) -> Self {
        self.parent = None;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn unmounted(mut self) -> Self {
        self.mount = false;
        self
    }

    pub fn build(self) -> Harness {
        dragger::logging::init_for_tests();

        let registry: Registry = Arc::new(ListenerRegistry::new());
        let layout: SharedLayout = Arc::new(Mutex::new(FixedLayout {
            offset: self.offset,
            parent: self.parent,
        }));
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();

        let mut tracker = GestureTracker::new(
            &self.config,
            registry.clone(),
            layout.clone(),
            self.position,
            move |info| sink.borrow_mut().push(info),
        );
        if self.mount {
            let _ = tracker.mount();
        }

        Harness {
            tracker,
            registry,
            layout,
            changes,
        }
    }
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub tracker: GestureTracker<Registry, SharedLayout>,
    pub registry: Registry,
    pub layout: SharedLayout,
    changes: Rc<RefCell<Vec<ChangePositionInfo>>>,
}

impl Harness {
    fn is_touch(&self) -> bool {
        self.tracker.input_model().is_touch()
    }

    pub fn press(&mut self, x: f64, y: f64) -> EventResponse {
        let pointer = if self.is_touch() {
            PointerEvent::touch(x, y)
        } else {
            PointerEvent::pointer(x, y)
        };
        self.tracker.dispatch(&InputEvent::new(Phase::Press, pointer))
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> EventResponse {
        let pointer = if self.is_touch() {
            PointerEvent::touch(x, y)
        } else {
            PointerEvent::pointer(x, y)
        };
        self.tracker.dispatch(&InputEvent::new(Phase::Move, pointer))
    }

    pub fn release(&mut self, x: f64, y: f64) -> EventResponse {
        let pointer = if self.is_touch() {
            PointerEvent::touch_end(x, y)
        } else {
            PointerEvent::pointer(x, y)
        };
        self.tracker.dispatch(&InputEvent::new(Phase::Release, pointer))
    }

    /// Move the container inside its parent, as a re-layout would
    pub fn set_offset(&self, left: f64, top: f64) {
        self.layout.lock().offset = (left, top);
    }

    pub fn live(&self) -> Option<Position> {
        self.tracker.position().copied()
    }

    /// Every `ChangePositionInfo` reported so far
    pub fn changes(&self) -> Vec<ChangePositionInfo> {
        self.changes.borrow().clone()
    }
}
