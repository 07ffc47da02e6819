//! Camera dock state types.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dock is the positioned, resizable container holding the video-tile
//! grid. Its geometry lives in [`CameraDockState`] and is mutated only by
//! the controller's action-dispatch protocol; everything here is plain
//! data plus the deterministic position-to-edges mapping.

#[cfg(test)]
#[path = "dock_test.rs"]
mod dock_test;

use serde::Deserialize;

use crate::consts::{DOCK_MAX_WIDTH, DOCK_MIN_HEIGHT, DOCK_MIN_WIDTH, DOCK_Z_INDEX};

/// Where the dock sits relative to the presentation content.
///
/// Determines the resize axis: top/bottom docks resize vertically,
/// left/right docks resize horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DockPosition {
    /// Above the content area.
    ContentTop,
    /// Below the content area.
    #[default]
    ContentBottom,
    /// Left of the content area.
    ContentLeft,
    /// Right of the content area.
    ContentRight,
}

impl DockPosition {
    /// Parse a drag-and-drop target id into a position.
    ///
    /// Drop targets outside the four drop zones return `None` so they can
    /// never corrupt geometry.
    #[must_use]
    pub fn from_drop_target(id: &str) -> Option<Self> {
        match id {
            "contentTop" => Some(Self::ContentTop),
            "contentBottom" => Some(Self::ContentBottom),
            "contentLeft" => Some(Self::ContentLeft),
            "contentRight" => Some(Self::ContentRight),
            _ => None,
        }
    }

    /// The drop-target id for this position.
    #[must_use]
    pub fn as_drop_target(self) -> &'static str {
        match self {
            Self::ContentTop => "contentTop",
            Self::ContentBottom => "contentBottom",
            Self::ContentLeft => "contentLeft",
            Self::ContentRight => "contentRight",
        }
    }

    /// Whether the dock sits above or below the content (vertical resize).
    #[must_use]
    pub fn is_top_or_bottom(self) -> bool {
        matches!(self, Self::ContentTop | Self::ContentBottom)
    }

    /// Whether the dock sits beside the content (horizontal resize).
    #[must_use]
    pub fn is_left_or_right(self) -> bool {
        matches!(self, Self::ContentLeft | Self::ContentRight)
    }

    /// The edges that may be dragged for this position.
    ///
    /// Exactly one axis is active: top/bottom docks expose both vertical
    /// edges, left/right docks both horizontal edges. The other two edges
    /// are always off.
    #[must_use]
    pub fn resizable_edge(self) -> ResizableEdge {
        match self {
            Self::ContentTop | Self::ContentBottom => {
                ResizableEdge { top: true, bottom: true, ..ResizableEdge::NONE }
            }
            Self::ContentLeft | Self::ContentRight => {
                ResizableEdge { left: true, right: true, ..ResizableEdge::NONE }
            }
        }
    }
}

/// Which dock edges may currently be dragged to resize.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizableEdge {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ResizableEdge {
    /// No edge enabled.
    pub const NONE: Self = Self { top: false, bottom: false, left: false, right: false };

    /// Whether any edge is enabled.
    #[must_use]
    pub fn any(self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    /// Whether the vertical (top/bottom) resize axis is active.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self.top || self.bottom
    }

    /// Whether the horizontal (left/right) resize axis is active.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.left || self.right
    }
}

/// Static dock configuration, read once at startup.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DockConfig {
    /// Smallest allowed dock width in CSS pixels.
    pub min_width: f64,
    /// Smallest allowed dock height in CSS pixels.
    pub min_height: f64,
    /// Largest allowed dock width for a non-presenter.
    pub max_width: f64,
    /// Largest allowed dock width while the user is presenter, if distinct.
    pub presenter_max_width: Option<f64>,
    /// Whether tiles expose the fullscreen affordance.
    pub allow_fullscreen: bool,
    /// Whether tiles with enough actions render a dropdown menu.
    pub enable_video_menu: bool,
    /// Render-order hint for the floating dock.
    pub z_index: i32,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            min_width: DOCK_MIN_WIDTH,
            min_height: DOCK_MIN_HEIGHT,
            max_width: DOCK_MAX_WIDTH,
            presenter_max_width: None,
            allow_fullscreen: true,
            enable_video_menu: false,
            z_index: DOCK_Z_INDEX,
        }
    }
}

/// Geometry and affordance state for the camera dock.
///
/// Owned exclusively by the dock controller; all mutation goes through its
/// dispatch protocol.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraDockState {
    /// Current dock position; determines the resize axis.
    pub position: DockPosition,
    /// Current width in CSS pixels. Never exceeds the role-aware max width.
    pub width: f64,
    /// Current height in CSS pixels.
    pub height: f64,
    /// Lower width bound.
    pub min_width: f64,
    /// Lower height bound.
    pub min_height: f64,
    /// Upper width bound for a non-presenter.
    pub max_width: f64,
    /// Upper width bound while presenting, if distinct from `max_width`.
    pub presenter_max_width: Option<f64>,
    /// Horizontal drag offset from the left.
    pub left: f64,
    /// Vertical drag offset from the top.
    pub top: f64,
    /// Horizontal drag offset from the right; subtracted from `left` so
    /// right-to-left layouts place the dock correctly.
    pub right: f64,
    /// Edges that may be dragged to resize, derived from `position`.
    pub resizable_edge: ResizableEdge,
    /// Whether the dock may be dragged at all, independent of resizing.
    pub is_draggable: bool,
    /// Render-order hint.
    pub z_index: i32,
}

impl CameraDockState {
    /// Build the initial dock state for `position` from configuration.
    #[must_use]
    pub fn from_config(config: &DockConfig, position: DockPosition) -> Self {
        Self {
            position,
            width: config.min_width,
            height: config.min_height,
            min_width: config.min_width,
            min_height: config.min_height,
            max_width: config.max_width,
            presenter_max_width: config.presenter_max_width,
            left: 0.0,
            top: 0.0,
            right: 0.0,
            resizable_edge: position.resizable_edge(),
            is_draggable: true,
            z_index: config.z_index,
        }
    }

    /// Horizontal placement of the dock: `left - right`.
    #[must_use]
    pub fn placement_x(&self) -> f64 {
        self.left - self.right
    }
}
