//! Lifecycle tests for Floem Columns.
//!
//! These tests cover `reset`, `detach`, `destroy` and dropping a layout:
//! which styles they clear and whether later viewport resizes still reach
//! the layout.

use floem_columns_test::prelude::*;

fn harness() -> HeadlessHarness {
    HeadlessHarness::new(800.0).with_children([(100.0, 10.0), (100.0, 20.0), (100.0, 30.0)])
}

fn sizes() -> [SizeConfig; 2] {
    [SizeConfig::new(1, 10.0), SizeConfig::new(2, 10.0).min(600.0)]
}

// =============================================================================
// reset
// =============================================================================

#[test]
fn test_reset_clears_layout_styles() {
    let harness = harness();
    let columns = Columns::new(harness.container(), sizes()).unwrap();
    columns.reset();

    assert!(harness.styles().iter().all(InlineStyle::is_empty));
    assert!(columns.is_attached());
}

#[test]
fn test_reset_twice_changes_nothing() {
    let harness = harness();
    let columns = Columns::new(harness.container(), sizes()).unwrap();
    columns.reset();
    let after_first = harness.styles();
    columns.reset();
    assert_eq!(harness.styles(), after_first);
}

#[test]
fn test_resize_after_reset_lays_out_again() {
    let harness = harness();
    let columns = Columns::new(harness.container(), sizes()).unwrap();
    columns.reset();

    harness.resize(500.0);
    assert_eq!(harness.container_height(), Some(80.0));
    assert!(harness.offsets().iter().all(Option::is_some));
    // positioning is only installed when the layout is created
    assert_eq!(harness.container().style().position, None);
}

#[test]
fn test_reset_leaves_other_elements_alone() {
    let harness = harness();
    let outside = document::create_element("div");
    document::root().append_child(outside);
    outside.set_top(Some(4.0));

    let columns = Columns::new(harness.container(), sizes()).unwrap();
    columns.reset();
    assert_eq!(outside.style().top, Some(4.0));
}

// =============================================================================
// detach / destroy
// =============================================================================

#[test]
fn test_detach_stops_following_resizes() {
    let harness = harness();
    let columns = Columns::new(harness.container(), sizes()).unwrap();
    let before = harness.styles();

    columns.detach();
    assert!(!columns.is_attached());

    let tracker = WriteTracker::new();
    harness.resize(400.0);
    assert!(!tracker.was_written());
    // detach on its own keeps the applied layout
    assert_eq!(harness.styles(), before);
}

#[test]
fn test_detach_twice_is_a_noop() {
    let harness = harness();
    let listeners = viewport::listener_count();
    let columns = Columns::new(harness.container(), sizes()).unwrap();
    assert_eq!(viewport::listener_count(), listeners + 1);

    columns.detach().detach();
    assert_eq!(viewport::listener_count(), listeners);
}

#[test]
fn test_destroy_resets_then_detaches() {
    let harness = harness();
    let columns = Columns::new(harness.container(), sizes()).unwrap();
    columns.destroy();

    assert!(harness.styles().iter().all(InlineStyle::is_empty));
    assert!(!columns.is_attached());

    let tracker = WriteTracker::new();
    harness.resize(1024.0);
    harness.resize(320.0);
    assert_eq!(tracker.writes(), 0);
}

#[test]
fn test_destroy_is_chainable_and_repeatable() {
    let harness = harness();
    let columns = Columns::new(harness.container(), sizes()).unwrap();
    columns.destroy().destroy().reset();
    assert!(harness.styles().iter().all(InlineStyle::is_empty));
}

#[test]
fn test_update_after_detach_still_lays_out() {
    let harness = harness();
    let columns = Columns::new(harness.container(), sizes()).unwrap();
    columns.detach();
    harness.resize(400.0);

    // the viewport is narrow now, a manual pass picks the single column config
    assert_eq!(columns.update(), 80.0);
}

#[test]
fn test_drop_detaches() {
    let harness = harness();
    let listeners = viewport::listener_count();
    {
        let _columns = Columns::new(harness.container(), sizes()).unwrap();
        assert_eq!(viewport::listener_count(), listeners + 1);
    }
    assert_eq!(viewport::listener_count(), listeners);

    let tracker = WriteTracker::new();
    harness.resize(400.0);
    assert!(!tracker.was_written());
}

#[test]
fn test_new_layout_after_destroy() {
    let harness = harness();
    let columns = Columns::new(harness.container(), sizes()).unwrap();
    columns.destroy();
    drop(columns);

    let again = Columns::new(harness.container(), sizes()).unwrap();
    assert!(again.is_attached());
    assert_eq!(harness.container_height(), Some(50.0));

    harness.resize(300.0);
    assert_eq!(harness.container_height(), Some(80.0));
}
