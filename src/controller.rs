//! Camera dock controller: the reducer over layout actions.
//!
//! DESIGN
//! ======
//! Owns [`CameraDockState`] and is the only writer. External inputs (drag
//! stop, resize deltas, window resize, role changes, fullscreen toggles)
//! all funnel into [`CameraDockController::dispatch`]; min/max/viewport
//! constraints are applied there so no caller can leave the dock
//! over-sized. DOM side effects come back as [`LayoutEffect`] commands for
//! the host adapter; persistence goes through the injected [`LayoutStore`].

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::consts::{RESIZE_SETTLE_MS, WEBCAM_SIZE_KEY};
use crate::dock::{CameraDockState, DockConfig, DockPosition, ResizableEdge};
use crate::fullscreen::Fullscreen;
use crate::layout::{LayoutAction, LayoutEffect, Viewport};
use crate::storage::{LayoutStore, PersistedSize};

/// State machine for the camera dock's geometry and gesture affordances.
pub struct CameraDockController<S: LayoutStore> {
    state: CameraDockState,
    store: S,
    viewport: Viewport,
    is_presenter: bool,
    is_fullscreen: bool,
    is_dragging: bool,
    swap_layout: bool,
    /// `{width, height}` snapshot taken when a resize gesture begins.
    resize_start: Option<(f64, f64)>,
    /// No new resize gesture may start before this timestamp.
    resize_settle_until_ms: f64,
}

impl<S: LayoutStore> CameraDockController<S> {
    /// Build a controller and run the initialization protocol: if the
    /// store holds a positive dimension for the current axis, apply it;
    /// otherwise keep the configured default geometry.
    pub fn new(
        config: &DockConfig,
        position: DockPosition,
        viewport: Viewport,
        store: S,
        is_presenter: bool,
    ) -> Self {
        let mut controller = Self {
            state: CameraDockState::from_config(config, position),
            store,
            viewport,
            is_presenter,
            is_fullscreen: false,
            is_dragging: false,
            swap_layout: false,
            resize_start: None,
            resize_settle_until_ms: 0.0,
        };
        let _ = controller.apply_stored_preference();
        controller
    }

    // --- Queries ---

    /// Current dock geometry.
    #[must_use]
    pub fn state(&self) -> &CameraDockState {
        &self.state
    }

    /// The injected persistence store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.resize_start.is_some()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Upper width bound for the current role.
    #[must_use]
    pub fn effective_max_width(&self) -> f64 {
        match (self.is_presenter, self.state.presenter_max_width) {
            (true, Some(presenter_max)) => presenter_max,
            _ => self.state.max_width,
        }
    }

    /// Resize edges currently offered to the user: the position-derived
    /// edges, masked off entirely while fullscreen, dragging, or in
    /// swapped layout.
    #[must_use]
    pub fn enabled_edges(&self) -> ResizableEdge {
        if self.is_fullscreen || self.is_dragging || self.swap_layout {
            return ResizableEdge::NONE;
        }
        self.state.resizable_edge
    }

    // --- Action dispatch ---

    /// Apply one layout action; returns side-effect commands for the host.
    pub fn dispatch(&mut self, action: LayoutAction) -> Vec<LayoutEffect> {
        match action {
            LayoutAction::SetCameraDockSize { width, height, viewport_width, viewport_height } => {
                self.apply_size(width, height, Viewport::new(viewport_width, viewport_height))
            }
            LayoutAction::SetCameraDockPosition(target_id) => self.apply_position(&target_id),
            LayoutAction::SetCameraDockIsDragging(dragging) => {
                self.is_dragging = dragging;
                vec![LayoutEffect::SetPageScroll(!dragging)]
            }
            // Sidebar visibility rides the same channel but is consumed by
            // the out-of-scope panel components.
            LayoutAction::SetSidebarContentIsOpen(_) | LayoutAction::SetSidebarContentPanel(_) => {
                Vec::new()
            }
        }
    }

    fn apply_size(&mut self, width: f64, height: f64, viewport: Viewport) -> Vec<LayoutEffect> {
        if self.is_fullscreen {
            return Vec::new();
        }
        self.viewport = viewport;

        // min() then max(): minimums win when the viewport is smaller than
        // the configured minimum, and the range can never invert.
        let max_width = self.effective_max_width().min(viewport.width);
        self.state.width = width.min(max_width).max(self.state.min_width);
        self.state.height = height.min(viewport.height).max(self.state.min_height);

        self.persist_current_axis();
        Vec::new()
    }

    fn apply_position(&mut self, target_id: &str) -> Vec<LayoutEffect> {
        let Some(position) = DockPosition::from_drop_target(target_id) else {
            // Drops outside the four drop zones must not corrupt geometry.
            log::debug!("ignoring dock position target {target_id:?}");
            return Vec::new();
        };
        self.state.position = position;
        self.state.resizable_edge = position.resizable_edge();
        self.apply_stored_preference()
    }

    /// Re-read the store and re-apply the preference for the current axis.
    fn apply_stored_preference(&mut self) -> Vec<LayoutEffect> {
        let Some(last) = self.store.get(WEBCAM_SIZE_KEY) else {
            return Vec::new();
        };
        let (width, height) = if self.state.position.is_top_or_bottom() {
            if last.height <= 0.0 {
                return Vec::new();
            }
            (self.state.width, last.height)
        } else {
            if last.width <= 0.0 {
                return Vec::new();
            }
            (last.width, self.state.height)
        };
        self.dispatch(LayoutAction::SetCameraDockSize {
            width,
            height,
            viewport_width: self.viewport.width,
            viewport_height: self.viewport.height,
        })
    }

    /// Write through the axis the current position resizes, keeping the
    /// other axis at its last persisted value so switching dock position
    /// never loses the cross-axis preference.
    fn persist_current_axis(&mut self) {
        let last = self.store.get(WEBCAM_SIZE_KEY).unwrap_or_default();
        let size = if self.state.position.is_top_or_bottom() {
            PersistedSize { width: last.width, height: self.state.height }
        } else {
            PersistedSize { width: self.state.width, height: last.height }
        };
        self.store.set(WEBCAM_SIZE_KEY, size);
    }

    // --- Role / context changes ---

    /// Presenter promotion/demotion changes the effective max width; a dock
    /// that resizes horizontally is clamped down immediately so a demoted
    /// presenter never keeps an over-wide dock.
    pub fn set_presenter(&mut self, is_presenter: bool) -> Vec<LayoutEffect> {
        self.is_presenter = is_presenter;
        let max_width = self.effective_max_width();
        if self.state.position.is_left_or_right() && self.state.width > max_width {
            return self.dispatch(LayoutAction::SetCameraDockSize {
                width: max_width,
                height: self.state.height,
                viewport_width: self.viewport.width,
                viewport_height: self.viewport.height,
            });
        }
        Vec::new()
    }

    /// Track the browser's fullscreen element; the dock is fullscreen iff
    /// the webcam group holds it.
    pub fn on_fullscreen_change(&mut self, fullscreen: &Fullscreen) {
        self.is_fullscreen = fullscreen.is_webcams();
    }

    /// Re-clamp the current geometry against a new viewport.
    pub fn on_window_resize(&mut self, viewport: Viewport) -> Vec<LayoutEffect> {
        self.dispatch(LayoutAction::SetCameraDockSize {
            width: self.state.width,
            height: self.state.height,
            viewport_width: viewport.width,
            viewport_height: viewport.height,
        })
    }

    /// Content/webcam areas are swapped; resize affordances are hidden.
    pub fn set_swap_layout(&mut self, swap_layout: bool) {
        self.swap_layout = swap_layout;
    }

    // --- Resize gesture ---

    /// Begin a resize gesture, snapshotting `{width, height}`.
    ///
    /// Refused (returns `false`) while fullscreen, dragging, in swapped
    /// layout, or inside the settle window after the previous gesture.
    pub fn resize_start(&mut self, now_ms: f64) -> bool {
        if self.is_resizing() || !self.enabled_edges().any() || now_ms < self.resize_settle_until_ms
        {
            return false;
        }
        self.resize_start = Some((self.state.width, self.state.height));
        true
    }

    /// Apply an incremental resize delta along the active axis.
    ///
    /// Resize is strictly single-axis: the unaffected axis is held at its
    /// current dock value.
    pub fn resize_delta(
        &mut self,
        delta_width: f64,
        delta_height: f64,
        viewport: Viewport,
    ) -> Vec<LayoutEffect> {
        let Some((start_width, start_height)) = self.resize_start else {
            return Vec::new();
        };
        let edge = self.state.resizable_edge;
        let (width, height) = if edge.is_vertical() {
            (self.state.width, start_height + delta_height)
        } else if edge.is_horizontal() {
            (start_width + delta_width, self.state.height)
        } else {
            return Vec::new();
        };
        self.dispatch(LayoutAction::SetCameraDockSize {
            width,
            height,
            viewport_width: viewport.width,
            viewport_height: viewport.height,
        })
    }

    /// End the resize gesture: persist the resized axis (the other axis
    /// keeps its last persisted value) and open the settle window.
    pub fn resize_stop(&mut self, now_ms: f64) {
        if self.resize_start.take().is_none() {
            return;
        }
        self.persist_current_axis();
        self.resize_settle_until_ms = now_ms + RESIZE_SETTLE_MS;
    }

    // --- Drag gesture ---

    /// Begin a drag gesture. Drag, resize, and fullscreen are mutually
    /// exclusive; refusal returns no effects and leaves state untouched.
    pub fn drag_start(&mut self) -> Vec<LayoutEffect> {
        if !self.state.is_draggable || self.is_resizing() || self.is_fullscreen {
            return Vec::new();
        }
        self.dispatch(LayoutAction::SetCameraDockIsDragging(true))
    }

    /// End a drag gesture over `target_id`.
    ///
    /// A valid drop-zone id moves the dock; anything else leaves the
    /// position unchanged so the dock snaps back.
    pub fn drag_stop(&mut self, target_id: &str) -> Vec<LayoutEffect> {
        if !self.is_dragging {
            return Vec::new();
        }
        let mut effects = self.dispatch(LayoutAction::SetCameraDockIsDragging(false));
        effects.extend(self.dispatch(LayoutAction::SetCameraDockPosition(target_id.to_owned())));
        effects
    }
}
