#![allow(clippy::float_cmp)]

use super::*;
use crate::storage::MemoryStore;

fn viewport() -> Viewport {
    Viewport::new(1280.0, 800.0)
}

fn controller(position: DockPosition) -> CameraDockController<MemoryStore> {
    CameraDockController::new(&DockConfig::default(), position, viewport(), MemoryStore::new(), false)
}

fn size_action(width: f64, height: f64) -> LayoutAction {
    LayoutAction::SetCameraDockSize {
        width,
        height,
        viewport_width: 1280.0,
        viewport_height: 800.0,
    }
}

fn stored(ctrl: &CameraDockController<MemoryStore>) -> PersistedSize {
    ctrl.store().get(WEBCAM_SIZE_KEY).unwrap_or_default()
}

// =============================================================
// Initialization protocol
// =============================================================

#[test]
fn empty_store_keeps_default_geometry() {
    let ctrl = controller(DockPosition::ContentRight);
    assert_eq!(ctrl.state().width, DockConfig::default().min_width);
    assert_eq!(ctrl.state().height, DockConfig::default().min_height);
}

#[test]
fn stored_width_restored_for_side_dock() {
    let mut store = MemoryStore::new();
    store.set(WEBCAM_SIZE_KEY, PersistedSize { width: 300.0, height: 0.0 });
    let ctrl = CameraDockController::new(
        &DockConfig::default(),
        DockPosition::ContentRight,
        viewport(),
        store,
        false,
    );
    assert_eq!(ctrl.state().width, 300.0);
}

#[test]
fn stored_height_restored_for_bottom_dock() {
    let mut store = MemoryStore::new();
    store.set(WEBCAM_SIZE_KEY, PersistedSize { width: 300.0, height: 420.0 });
    let ctrl = CameraDockController::new(
        &DockConfig::default(),
        DockPosition::ContentBottom,
        viewport(),
        store,
        false,
    );
    assert_eq!(ctrl.state().height, 420.0);
    // The cross-axis preference is not applied to a bottom dock's width.
    assert_eq!(ctrl.state().width, DockConfig::default().min_width);
}

#[test]
fn non_positive_stored_dimension_is_no_preference() {
    let mut store = MemoryStore::new();
    store.set(WEBCAM_SIZE_KEY, PersistedSize { width: 0.0, height: 0.0 });
    let ctrl = CameraDockController::new(
        &DockConfig::default(),
        DockPosition::ContentRight,
        viewport(),
        store,
        false,
    );
    assert_eq!(ctrl.state().width, DockConfig::default().min_width);
}

#[test]
fn persist_then_reinit_round_trips_the_axis_dimension() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.dispatch(size_action(300.0, 200.0));

    let reinit = CameraDockController::new(
        &DockConfig::default(),
        DockPosition::ContentRight,
        viewport(),
        ctrl.store().clone(),
        false,
    );
    assert_eq!(reinit.state().width, 300.0);
}

// =============================================================
// SET_CAMERA_DOCK_SIZE clamping
// =============================================================

#[test]
fn width_clamps_to_max() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.dispatch(size_action(9999.0, 200.0));
    assert_eq!(ctrl.state().width, DockConfig::default().max_width);
}

#[test]
fn width_clamps_to_min() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.dispatch(size_action(10.0, 200.0));
    assert_eq!(ctrl.state().width, DockConfig::default().min_width);
}

#[test]
fn size_clamps_to_viewport() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.dispatch(LayoutAction::SetCameraDockSize {
        width: 620.0,
        height: 700.0,
        viewport_width: 500.0,
        viewport_height: 400.0,
    });
    assert_eq!(ctrl.state().width, 500.0);
    assert_eq!(ctrl.state().height, 400.0);
}

#[test]
fn minimum_wins_over_a_tiny_viewport() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.dispatch(LayoutAction::SetCameraDockSize {
        width: 300.0,
        height: 300.0,
        viewport_width: 80.0,
        viewport_height: 60.0,
    });
    assert_eq!(ctrl.state().width, ctrl.state().min_width);
    assert_eq!(ctrl.state().height, ctrl.state().min_height);
}

#[test]
fn size_is_ignored_while_fullscreen() {
    let mut ctrl = controller(DockPosition::ContentRight);
    ctrl.on_fullscreen_change(&Fullscreen::of("cam-1", "webcams"));
    let before = ctrl.state().clone();
    let effects = ctrl.dispatch(size_action(400.0, 400.0));
    assert!(effects.is_empty());
    assert_eq!(*ctrl.state(), before);
}

#[test]
fn side_dock_persists_width_axis() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.dispatch(size_action(300.0, 400.0));
    assert_eq!(stored(&ctrl), PersistedSize { width: 300.0, height: 0.0 });
}

#[test]
fn bottom_dock_persists_height_axis() {
    let mut ctrl = controller(DockPosition::ContentBottom);
    let _ = ctrl.dispatch(size_action(300.0, 400.0));
    assert_eq!(stored(&ctrl), PersistedSize { width: 0.0, height: 400.0 });
}

// =============================================================
// SET_CAMERA_DOCK_POSITION
// =============================================================

#[test]
fn invalid_position_target_is_dropped_silently() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let before = ctrl.state().clone();
    let effects = ctrl.dispatch(LayoutAction::SetCameraDockPosition("garbage".to_owned()));
    assert!(effects.is_empty());
    assert_eq!(*ctrl.state(), before);
}

#[test]
fn valid_position_updates_edges() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.dispatch(LayoutAction::SetCameraDockPosition("contentTop".to_owned()));
    assert_eq!(ctrl.state().position, DockPosition::ContentTop);
    assert_eq!(ctrl.state().resizable_edge, DockPosition::ContentTop.resizable_edge());
}

#[test]
fn switching_position_and_back_preserves_the_untouched_axis() {
    let mut ctrl = controller(DockPosition::ContentRight);

    // Choose a width on the side dock, then a height on the bottom dock.
    let _ = ctrl.dispatch(size_action(300.0, 200.0));
    let _ = ctrl.dispatch(LayoutAction::SetCameraDockPosition("contentBottom".to_owned()));
    let _ = ctrl.dispatch(size_action(150.0, 420.0));
    assert_eq!(stored(&ctrl), PersistedSize { width: 300.0, height: 420.0 });

    // Returning to the side dock restores the width chosen earlier.
    let _ = ctrl.dispatch(LayoutAction::SetCameraDockPosition("contentRight".to_owned()));
    assert_eq!(ctrl.state().width, 300.0);
    assert_eq!(stored(&ctrl), PersistedSize { width: 300.0, height: 420.0 });
}

// =============================================================
// Sidebar actions (not consumed by the dock)
// =============================================================

#[test]
fn sidebar_actions_are_noops() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let before = ctrl.state().clone();
    assert!(ctrl.dispatch(LayoutAction::SetSidebarContentIsOpen(true)).is_empty());
    assert!(ctrl.dispatch(LayoutAction::SetSidebarContentPanel("chat".to_owned())).is_empty());
    assert_eq!(*ctrl.state(), before);
}

// =============================================================
// Presenter role changes
// =============================================================

fn presenter_config() -> DockConfig {
    DockConfig { max_width: 240.0, presenter_max_width: Some(480.0), ..DockConfig::default() }
}

#[test]
fn presenter_uses_presenter_max_width() {
    let ctrl = CameraDockController::new(
        &presenter_config(),
        DockPosition::ContentRight,
        viewport(),
        MemoryStore::new(),
        true,
    );
    assert_eq!(ctrl.effective_max_width(), 480.0);
}

#[test]
fn demotion_clamps_an_over_wide_side_dock_and_persists() {
    let mut ctrl = CameraDockController::new(
        &presenter_config(),
        DockPosition::ContentRight,
        viewport(),
        MemoryStore::new(),
        true,
    );
    let _ = ctrl.dispatch(size_action(320.0, 200.0));
    assert_eq!(ctrl.state().width, 320.0);

    let _ = ctrl.set_presenter(false);
    assert_eq!(ctrl.state().width, 240.0);
    assert_eq!(stored(&ctrl).width, 240.0);
}

#[test]
fn demotion_leaves_a_vertical_dock_width_alone() {
    let mut ctrl = CameraDockController::new(
        &presenter_config(),
        DockPosition::ContentBottom,
        viewport(),
        MemoryStore::new(),
        true,
    );
    let _ = ctrl.dispatch(size_action(320.0, 200.0));

    let _ = ctrl.set_presenter(false);
    assert_eq!(ctrl.state().width, 320.0);
}

#[test]
fn promotion_does_not_grow_the_dock() {
    let mut ctrl = CameraDockController::new(
        &presenter_config(),
        DockPosition::ContentRight,
        viewport(),
        MemoryStore::new(),
        false,
    );
    let _ = ctrl.dispatch(size_action(240.0, 200.0));

    let _ = ctrl.set_presenter(true);
    assert_eq!(ctrl.state().width, 240.0);
}

// =============================================================
// Drag gesture
// =============================================================

#[test]
fn drag_start_disables_page_scroll() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let effects = ctrl.drag_start();
    assert_eq!(effects, vec![LayoutEffect::SetPageScroll(false)]);
    assert!(ctrl.is_dragging());
}

#[test]
fn drag_stop_on_drop_zone_moves_the_dock() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.drag_start();
    let effects = ctrl.drag_stop("contentLeft");
    assert!(effects.contains(&LayoutEffect::SetPageScroll(true)));
    assert!(!ctrl.is_dragging());
    assert_eq!(ctrl.state().position, DockPosition::ContentLeft);
}

#[test]
fn drag_stop_outside_drop_zones_snaps_back() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.drag_start();
    let effects = ctrl.drag_stop("presentationArea");
    assert!(effects.contains(&LayoutEffect::SetPageScroll(true)));
    assert_eq!(ctrl.state().position, DockPosition::ContentRight);
}

#[test]
fn drag_stop_without_drag_is_noop() {
    let mut ctrl = controller(DockPosition::ContentRight);
    assert!(ctrl.drag_stop("contentLeft").is_empty());
    assert_eq!(ctrl.state().position, DockPosition::ContentRight);
}

#[test]
fn drag_refused_while_resizing() {
    let mut ctrl = controller(DockPosition::ContentRight);
    assert!(ctrl.resize_start(0.0));
    assert!(ctrl.drag_start().is_empty());
    assert!(!ctrl.is_dragging());
}

#[test]
fn drag_refused_while_fullscreen() {
    let mut ctrl = controller(DockPosition::ContentRight);
    ctrl.on_fullscreen_change(&Fullscreen::of("cam-1", "webcams"));
    assert!(ctrl.drag_start().is_empty());
}

// =============================================================
// Resize gesture
// =============================================================

#[test]
fn horizontal_resize_ignores_the_height_delta() {
    let mut ctrl = controller(DockPosition::ContentRight);
    assert!(ctrl.resize_start(0.0));
    let _ = ctrl.resize_delta(50.0, 999.0, viewport());
    assert_eq!(ctrl.state().width, 170.0);
    assert_eq!(ctrl.state().height, DockConfig::default().min_height);
}

#[test]
fn vertical_resize_ignores_the_width_delta() {
    let mut ctrl = controller(DockPosition::ContentBottom);
    assert!(ctrl.resize_start(0.0));
    let _ = ctrl.resize_delta(999.0, 80.0, viewport());
    assert_eq!(ctrl.state().height, 200.0);
    assert_eq!(ctrl.state().width, DockConfig::default().min_width);
}

#[test]
fn resize_deltas_apply_from_the_gesture_snapshot() {
    let mut ctrl = controller(DockPosition::ContentRight);
    assert!(ctrl.resize_start(0.0));
    let _ = ctrl.resize_delta(50.0, 0.0, viewport());
    let _ = ctrl.resize_delta(80.0, 0.0, viewport());
    assert_eq!(ctrl.state().width, DockConfig::default().min_width + 80.0);
}

#[test]
fn resize_never_exceeds_bounds_mid_gesture() {
    let mut ctrl = controller(DockPosition::ContentRight);
    assert!(ctrl.resize_start(0.0));
    let _ = ctrl.resize_delta(100_000.0, 0.0, viewport());
    assert_eq!(ctrl.state().width, DockConfig::default().max_width);
    let _ = ctrl.resize_delta(-100_000.0, 0.0, viewport());
    assert_eq!(ctrl.state().width, DockConfig::default().min_width);
}

#[test]
fn resize_delta_without_start_is_noop() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.resize_delta(50.0, 0.0, viewport());
    assert_eq!(ctrl.state().width, DockConfig::default().min_width);
}

#[test]
fn resize_stop_keeps_the_other_axis_preference() {
    let mut store = MemoryStore::new();
    store.set(WEBCAM_SIZE_KEY, PersistedSize { width: 0.0, height: 555.0 });
    let mut ctrl = CameraDockController::new(
        &DockConfig::default(),
        DockPosition::ContentRight,
        viewport(),
        store,
        false,
    );

    assert!(ctrl.resize_start(0.0));
    let _ = ctrl.resize_delta(60.0, 0.0, viewport());
    ctrl.resize_stop(100.0);
    assert_eq!(stored(&ctrl), PersistedSize { width: 180.0, height: 555.0 });
}

#[test]
fn zero_delta_gesture_still_persists_on_stop() {
    let mut ctrl = controller(DockPosition::ContentBottom);
    assert!(ctrl.resize_start(0.0));
    ctrl.resize_stop(100.0);
    assert_eq!(stored(&ctrl).height, DockConfig::default().min_height);
}

#[test]
fn resize_refused_inside_the_settle_window() {
    let mut ctrl = controller(DockPosition::ContentRight);
    assert!(ctrl.resize_start(0.0));
    ctrl.resize_stop(1000.0);

    assert!(!ctrl.resize_start(1200.0));
    assert!(ctrl.resize_start(1600.0));
}

#[test]
fn resize_refused_while_dragging_or_fullscreen() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.drag_start();
    assert!(!ctrl.resize_start(0.0));
    let _ = ctrl.drag_stop("contentRight");

    ctrl.on_fullscreen_change(&Fullscreen::of("cam-1", "webcams"));
    assert!(!ctrl.resize_start(0.0));
}

#[test]
fn resize_refused_in_swapped_layout() {
    let mut ctrl = controller(DockPosition::ContentRight);
    ctrl.set_swap_layout(true);
    assert!(!ctrl.resize_start(0.0));
}

// =============================================================
// Gesture affordances
// =============================================================

#[test]
fn enabled_edges_follow_the_position() {
    let ctrl = controller(DockPosition::ContentLeft);
    assert_eq!(ctrl.enabled_edges(), DockPosition::ContentLeft.resizable_edge());
}

#[test]
fn enabled_edges_masked_while_dragging_fullscreen_or_swapped() {
    let mut ctrl = controller(DockPosition::ContentLeft);

    let _ = ctrl.drag_start();
    assert_eq!(ctrl.enabled_edges(), ResizableEdge::NONE);
    let _ = ctrl.drag_stop("contentLeft");

    ctrl.on_fullscreen_change(&Fullscreen::of("cam-1", "webcams"));
    assert_eq!(ctrl.enabled_edges(), ResizableEdge::NONE);
    ctrl.on_fullscreen_change(&Fullscreen::none());

    ctrl.set_swap_layout(true);
    assert_eq!(ctrl.enabled_edges(), ResizableEdge::NONE);
}

// =============================================================
// Window resize and fullscreen context
// =============================================================

#[test]
fn window_resize_reclamps_geometry() {
    let mut ctrl = controller(DockPosition::ContentRight);
    let _ = ctrl.dispatch(size_action(640.0, 400.0));

    let _ = ctrl.on_window_resize(Viewport::new(400.0, 300.0));
    assert_eq!(ctrl.state().width, 400.0);
    assert_eq!(ctrl.state().height, 300.0);
}

#[test]
fn fullscreen_tracks_the_webcam_group_only() {
    let mut ctrl = controller(DockPosition::ContentRight);
    ctrl.on_fullscreen_change(&Fullscreen::of("slide", "presentation"));
    assert!(!ctrl.is_fullscreen());

    ctrl.on_fullscreen_change(&Fullscreen::of("cam-1", "webcams"));
    assert!(ctrl.is_fullscreen());

    ctrl.on_fullscreen_change(&Fullscreen::none());
    assert!(!ctrl.is_fullscreen());
}

// =============================================================
// Invariants over mixed action sequences
// =============================================================

#[test]
fn width_never_escapes_role_bounds_across_transitions() {
    let mut ctrl = CameraDockController::new(
        &presenter_config(),
        DockPosition::ContentRight,
        viewport(),
        MemoryStore::new(),
        true,
    );
    let actions = [
        size_action(9999.0, 9999.0),
        LayoutAction::SetCameraDockPosition("contentBottom".to_owned()),
        size_action(1.0, 1.0),
        LayoutAction::SetCameraDockPosition("contentRight".to_owned()),
        size_action(333.0, 333.0),
    ];
    for action in actions {
        let _ = ctrl.dispatch(action);
        assert!(ctrl.state().width <= ctrl.effective_max_width());
        assert!(ctrl.state().width >= ctrl.state().min_width);
        assert!(ctrl.state().height >= ctrl.state().min_height);
    }

    let _ = ctrl.set_presenter(false);
    assert!(ctrl.state().width <= ctrl.effective_max_width());
}
