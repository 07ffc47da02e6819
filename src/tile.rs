//! Per-tile video state machine.
//!
//! DESIGN
//! ======
//! One [`VideoTile`] exists per camera id for the lifetime of its tile.
//! Three orthogonal axes drive it: readiness (one-way, first frame), stream
//! health (bidirectional, monitor events), and fullscreen membership
//! (bidirectional). The render decision is a pure join of the axes.
//! [`MountedTile`] pairs a shared tile with its stream-health subscription
//! so mount/unmount is a scoped acquire/release.

#[cfg(test)]
#[path = "tile_test.rs"]
mod tile_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::consts::{MENU_MIN_ACTIONS, WEBCAMS_GROUP};
use crate::fullscreen::FullscreenAffordance;
use crate::health::{StreamHealthMonitor, StreamHealthSubscription, is_stream_state_unhealthy};

/// A playback-resume failure reported by the host video element.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// The browser rejected autoplay with a permission-denied
    /// classification (`NotAllowedError`).
    #[error("autoplay rejected by the browser")]
    NotAllowed,
    /// Any other resume failure; expected transiently during DOM moves.
    #[error("playback resume failed: {0}")]
    Other(String),
}

/// Signals a tile hands to higher-level collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileEffect {
    /// Tile readiness changed the grid's optimal sizing; trigger a layout
    /// recalculation (synthetic window resize).
    LayoutRecalcNeeded,
    /// This tile finished loading; the next queued camera device may
    /// begin initializing.
    ReleaseNextDevice,
    /// Autoplay was blocked; a higher-level prompt should ask the user to
    /// start playback.
    AutoplayBlocked,
}

/// Whether the tile's dropdown menu can be offered.
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuAvailability {
    /// Video menu enabled in configuration.
    pub enabled: bool,
    /// Number of actions available for this tile.
    pub action_count: usize,
}

/// What the tile should render, joined from the three state axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderDecision {
    /// No frame decoded yet: connecting overlay with the user's name.
    Connecting,
    /// Ready but the stream is unhealthy: video plus reconnecting banner.
    ReconnectingVideo,
    /// Healthy video, no menu.
    Video,
    /// Healthy video with the actions dropdown.
    VideoWithMenu,
}

/// State for one participant's video tile.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug)]
pub struct VideoTile {
    camera_id: String,
    video_is_ready: bool,
    is_stream_healthy: bool,
    is_fullscreen: bool,
    is_portrait: bool,
}

impl VideoTile {
    /// A fresh tile for `camera_id`: not ready, unhealthy, windowed.
    #[must_use]
    pub fn new(camera_id: impl Into<String>) -> Self {
        Self {
            camera_id: camera_id.into(),
            video_is_ready: false,
            is_stream_healthy: false,
            is_fullscreen: false,
            is_portrait: false,
        }
    }

    #[must_use]
    pub fn camera_id(&self) -> &str {
        &self.camera_id
    }

    #[must_use]
    pub fn video_is_ready(&self) -> bool {
        self.video_is_ready
    }

    #[must_use]
    pub fn is_stream_healthy(&self) -> bool {
        self.is_stream_healthy
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn is_portrait(&self) -> bool {
        self.is_portrait
    }

    /// Ready and unhealthy: show the reconnecting banner over the video.
    #[must_use]
    pub fn should_show_reconnect_banner(&self) -> bool {
        self.video_is_ready && !self.is_stream_healthy
    }

    /// Apply a raw stream-state event from the health monitor.
    ///
    /// Returns whether the healthy classification actually changed, so the
    /// render layer can suppress redundant work on repeated identical
    /// events.
    pub fn on_stream_state_change(&mut self, stream_state: &str) -> bool {
        let healthy = !is_stream_state_unhealthy(stream_state);
        if healthy == self.is_stream_healthy {
            return false;
        }
        self.is_stream_healthy = healthy;
        true
    }

    /// First-frame-decoded event from the video element.
    ///
    /// Readiness transitions false→true exactly once no matter how many
    /// events arrive. The layout-recalc signal fires on every event (tile
    /// readiness can change the grid's optimal sizing); the device hand-off
    /// fires only on the actual transition so the single-slot semantics
    /// stay exact under duplicate events.
    pub fn on_first_frame(&mut self) -> Vec<TileEffect> {
        let mut effects = vec![TileEffect::LayoutRecalcNeeded];
        if !self.video_is_ready {
            self.video_is_ready = true;
            effects.push(TileEffect::ReleaseNextDevice);
        }
        effects
    }

    /// Re-read fullscreen-element membership; updates on change only.
    pub fn on_fullscreen_change(&mut self, is_fullscreen: bool) -> bool {
        if is_fullscreen == self.is_fullscreen {
            return false;
        }
        self.is_fullscreen = is_fullscreen;
        true
    }

    /// Recompute orientation; driven by window-resize events.
    pub fn set_orientation(&mut self, is_portrait: bool) {
        self.is_portrait = is_portrait;
    }

    /// Autoplay recovery after the tile is (re)attached to the DOM.
    ///
    /// Permission denial surfaces as [`TileEffect::AutoplayBlocked`] for a
    /// higher-level prompt; any other failure is logged and swallowed since
    /// the next DOM/state event will retry naturally.
    pub fn on_attached(&self, play_result: Result<(), PlaybackError>) -> Option<TileEffect> {
        match play_result {
            Ok(()) => None,
            Err(PlaybackError::NotAllowed) => Some(TileEffect::AutoplayBlocked),
            Err(error) => {
                log::debug!("tile {}: transient playback error: {error}", self.camera_id);
                None
            }
        }
    }

    /// Pure join of the three state axes into a render decision.
    #[must_use]
    pub fn render_decision(&self, menu: MenuAvailability) -> RenderDecision {
        if !self.video_is_ready {
            return RenderDecision::Connecting;
        }
        if self.should_show_reconnect_banner() {
            return RenderDecision::ReconnectingVideo;
        }
        if menu.enabled && menu.action_count >= MENU_MIN_ACTIONS {
            return RenderDecision::VideoWithMenu;
        }
        RenderDecision::Video
    }

    /// Fullscreen-button props for this tile, once the video is ready.
    #[must_use]
    pub fn fullscreen_affordance(&self, allow_fullscreen: bool) -> Option<FullscreenAffordance> {
        if !allow_fullscreen || !self.video_is_ready {
            return None;
        }
        Some(FullscreenAffordance {
            element_id: self.camera_id.clone(),
            element_group: WEBCAMS_GROUP.to_owned(),
            is_fullscreen: self.is_fullscreen,
        })
    }
}

/// Shared handle to a tile, as held by the host and by the health
/// subscription callback.
pub type TileHandle = Rc<RefCell<VideoTile>>;

/// Shared handle to the monitor, as held by the host and mounted tiles.
pub type MonitorHandle = Rc<RefCell<StreamHealthMonitor>>;

/// A tile wired into the stream-health monitor for its lifetime.
///
/// Unmounting removes the subscription itself; stale health events for the
/// camera id then have no callback to reach. Dropping without an explicit
/// unmount releases the subscription too, so error paths cannot leak it.
/// The callback additionally holds only a weak tile reference, so even a
/// live subscription can never update a dropped tile.
pub struct MountedTile {
    tile: TileHandle,
    monitor: MonitorHandle,
    subscription: Option<StreamHealthSubscription>,
}

impl MountedTile {
    /// Subscribe `tile` to health events for its camera id.
    pub fn mount(tile: TileHandle, monitor: &MonitorHandle) -> Self {
        let camera_id = tile.borrow().camera_id.clone();
        let weak = Rc::downgrade(&tile);
        let subscription = monitor.borrow_mut().subscribe(
            &camera_id,
            Box::new(move |stream_state| {
                if let Some(tile) = weak.upgrade() {
                    tile.borrow_mut().on_stream_state_change(stream_state);
                }
            }),
        );
        Self { tile, monitor: Rc::clone(monitor), subscription: Some(subscription) }
    }

    /// The shared tile state.
    #[must_use]
    pub fn tile(&self) -> &TileHandle {
        &self.tile
    }

    /// Detach from the monitor. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.monitor.borrow_mut().unsubscribe(subscription);
        }
    }

    /// Whether the health subscription is still attached.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }
}

impl Drop for MountedTile {
    fn drop(&mut self) {
        self.unmount();
    }
}
