//! Layout dispatch channel types.
//!
//! ARCHITECTURE
//! ============
//! Gesture code and render surfaces never mutate dock state directly; they
//! send a [`LayoutAction`] through the controller's dispatch entry point.
//! The controller answers with [`LayoutEffect`] commands for the host to
//! execute, keeping DOM side effects out of the state machine.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Browser viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the viewport is taller than it is wide.
    #[must_use]
    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }
}

/// An action on the layout dispatch channel.
///
/// The sidebar variants ride the same channel but are consumed by the
/// out-of-scope panel components; the dock reducer ignores them.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutAction {
    /// Request a dock size; the reducer clamps and persists.
    SetCameraDockSize {
        width: f64,
        height: f64,
        viewport_width: f64,
        viewport_height: f64,
    },
    /// Request a dock position by drop-target id. Unknown ids are dropped.
    SetCameraDockPosition(String),
    /// Toggle the drag-in-progress flag.
    SetCameraDockIsDragging(bool),
    /// Sidebar panel visibility; not consumed by the dock.
    SetSidebarContentIsOpen(bool),
    /// Sidebar panel selection; not consumed by the dock.
    SetSidebarContentPanel(String),
}

/// A named side effect the host adapter must execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutEffect {
    /// Enable (`true`) or disable (`false`) page scrolling while dragging.
    SetPageScroll(bool),
    /// The aggregate grid's optimal sizing may have changed; the host
    /// should trigger a layout recalculation (a synthetic window resize).
    LayoutRecalcNeeded,
}
