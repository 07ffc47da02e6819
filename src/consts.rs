//! Shared constants for the webcam dock and tile engines.

// ── Persistence ─────────────────────────────────────────────────

/// Session-storage key for the last user-chosen dock size.
pub const WEBCAM_SIZE_KEY: &str = "webcamSize";

// ── Dock geometry defaults ──────────────────────────────────────

/// Smallest width the dock may be resized to, in CSS pixels.
pub const DOCK_MIN_WIDTH: f64 = 120.0;

/// Smallest height the dock may be resized to, in CSS pixels.
pub const DOCK_MIN_HEIGHT: f64 = 120.0;

/// Largest width for a non-presenter dock, in CSS pixels.
pub const DOCK_MAX_WIDTH: f64 = 640.0;

/// Render-order hint for the floating dock container.
pub const DOCK_Z_INDEX: i32 = 2;

// ── Gestures ────────────────────────────────────────────────────

/// How long after a resize gesture ends before the next may start.
///
/// Guards against spurious resize-end/resize-start event ordering from the
/// underlying drag library.
pub const RESIZE_SETTLE_MS: f64 = 500.0;

// ── Fullscreen ──────────────────────────────────────────────────

/// Fullscreen element group shared by the dock and every tile.
pub const WEBCAMS_GROUP: &str = "webcams";

// ── Stream health ───────────────────────────────────────────────

/// Stream states the signaling contract classifies as unhealthy.
pub const UNHEALTHY_STREAM_STATES: [&str; 3] = ["failed", "closed", "disconnected"];

// ── Tile chrome ─────────────────────────────────────────────────

/// Minimum number of menu actions before a tile shows its dropdown menu.
pub const MENU_MIN_ACTIONS: usize = 3;
