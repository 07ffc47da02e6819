//! Fullscreen-membership types shared by the dock and tiles.

#[cfg(test)]
#[path = "fullscreen_test.rs"]
mod fullscreen_test;

use crate::consts::WEBCAMS_GROUP;

/// Sentinel group meaning no element holds fullscreen.
pub const NO_GROUP: &str = "";

/// Snapshot of the browser's current fullscreen element, if any.
///
/// An empty `element` with [`NO_GROUP`] means nothing is fullscreen. The
/// external fullscreen-button collaborator owns the actual browser
/// transition; the engine only reacts to fresh snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fullscreen {
    /// Identifier of the fullscreen element (a camera id for tiles).
    pub element: String,
    /// Element group the fullscreen element belongs to.
    pub group: String,
}

impl Fullscreen {
    /// Nothing fullscreen.
    #[must_use]
    pub fn none() -> Self {
        Self { element: String::new(), group: NO_GROUP.to_owned() }
    }

    /// A fullscreen snapshot for one element of a group.
    #[must_use]
    pub fn of(element: impl Into<String>, group: impl Into<String>) -> Self {
        Self { element: element.into(), group: group.into() }
    }

    /// Whether the webcam group currently holds fullscreen.
    #[must_use]
    pub fn is_webcams(&self) -> bool {
        self.group == WEBCAMS_GROUP
    }
}

/// Props handed to the external fullscreen button for one tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullscreenAffordance {
    /// The tile's camera id.
    pub element_id: String,
    /// Always the webcam group.
    pub element_group: String,
    /// Whether this tile is currently fullscreen.
    pub is_fullscreen: bool,
}
