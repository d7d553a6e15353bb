//! Unit tests for the listener registry shared between host and tracker.

use dragger::{CancellationToken, EventSurface, ListenOptions, ListenerRegistry};
use std::sync::Arc;

#[test]
fn test_shared_registry_sees_same_listeners() {
    let registry = Arc::new(ListenerRegistry::new());
    let host_view = registry.clone();

    registry.listen("mousedown", ListenOptions::default());
    assert_eq!(host_view.listener_count("mousedown"), 1);
    assert!(host_view.deliver("mousedown"));
    // Persistent listeners survive delivery
    assert!(host_view.deliver("mousedown"));
}

#[test]
fn test_one_token_cancels_many_listeners() {
    let registry = ListenerRegistry::new();
    let token = CancellationToken::new();
    registry.listen("touchmove", ListenOptions::with_signal(token.clone()));
    registry.listen("touchmove", ListenOptions::with_signal(token.clone()));
    registry.listen("touchend", ListenOptions::once());

    token.cancel();
    assert_eq!(registry.listener_count("touchmove"), 0);
    assert_eq!(registry.total_listeners(), 1);
}

#[test]
fn test_subscription_ids_are_unique() {
    let registry = ListenerRegistry::new();
    let a = registry.listen("mouseup", ListenOptions::once());
    let b = registry.listen("mouseup", ListenOptions::once());
    assert_ne!(a, b);
}
