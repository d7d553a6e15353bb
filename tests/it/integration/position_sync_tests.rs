//! Host-driven position changes versus in-progress drags.

use crate::helpers::TestTrackerBuilder;
use dragger::Position;

#[test]
fn test_initial_position_is_rendered() {
    let h = TestTrackerBuilder::new().with_position(Position::right_bottom(16.0, 5.0)).build();
    assert_eq!(h.live(), Some(Position::right_bottom(16.0, 5.0)));
}

#[test]
fn test_idle_position_replaced_immediately() {
    let mut h = TestTrackerBuilder::new().with_position(Position::left_top(0.0, 0.0)).build();

    assert!(h.tracker.set_position(Some(Position::left_top(50.0, 50.0))));
    assert_eq!(h.live(), Some(Position::left_top(50.0, 50.0)));

    assert!(h.tracker.set_position(None));
    assert_eq!(h.live(), None);
}

#[test]
fn test_position_during_drag_does_not_interrupt() {
    let mut h = TestTrackerBuilder::new().with_offset(0.0, 0.0).with_parent(400, 200).build();

    h.press(0.0, 0.0);
    h.move_to(10.0, 20.0);
    assert!(!h.tracker.set_position(Some(Position::left_top(300.0, 90.0))));
    assert_eq!(h.live(), Some(Position::left_top(10.0, 10.0)));

    h.move_to(20.0, 40.0);
    assert_eq!(h.live(), Some(Position::left_top(20.0, 20.0)));

    h.release(20.0, 40.0);
    assert_eq!(h.changes()[0].position, Position::left_top(20.0, 20.0));
}

#[test]
fn test_snap_back_after_release() {
    let mut h = TestTrackerBuilder::new().with_position(Position::left_top(0.0, 0.0)).build();

    h.press(0.0, 0.0);
    h.release(100.0, 100.0);
    assert_eq!(h.live(), Some(Position::left_top(100.0, 50.0)));

    // Host rejects the move and snaps the container back
    assert!(h.tracker.set_position(Some(Position::left_top(0.0, 0.0))));
    assert_eq!(h.live(), Some(Position::left_top(0.0, 0.0)));
    assert!(!h.tracker.style().dragging);
}
