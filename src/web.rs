//! Browser glue for the engine (feature `hydrate`).
//!
//! TRADE-OFFS
//! ==========
//! Everything here is best-effort: a missing `window`, storage denial, or
//! a failed event construction degrades to a no-op so the state machines
//! never observe a browser error. Non-hydrate builds do not compile this
//! module at all.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::layout::LayoutEffect;
use crate::storage::{LayoutStore, PersistedSize};
use crate::tile::TileEffect;

/// Route the `log` facade to the browser console.
pub fn init_browser_logging() {
    let _ = console_log::init_with_level(log::Level::Debug);
}

fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
    let raw = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
        return;
    };
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    let _ = storage.set_item(key, &raw);
}

/// `sessionStorage`-backed layout store: the preference survives
/// fullscreen and breakout-room transitions within one browser session.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore;

impl LayoutStore for SessionStore {
    fn get(&self, key: &str) -> Option<PersistedSize> {
        load_json(key)
    }

    fn set(&mut self, key: &str, size: PersistedSize) {
        save_json(key, &size);
    }
}

/// Enable or disable page scrolling while the dock is dragged.
pub fn set_page_scroll(enabled: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", if enabled { "auto" } else { "hidden" });
    }
}

/// Fire a synthetic `resize` event so layout consumers recalculate.
pub fn dispatch_synthetic_resize() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(event) = web_sys::Event::new("resize") {
        let _ = window.dispatch_event(&event);
    }
}

/// Device-orientation query backing `VideoTile::set_orientation`.
#[must_use]
pub fn is_portrait() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(orientation: portrait)").ok().flatten())
        .map_or(false, |mq| mq.matches())
}

/// Execute one dock side-effect command.
pub fn apply_layout_effect(effect: LayoutEffect) {
    match effect {
        LayoutEffect::SetPageScroll(enabled) => set_page_scroll(enabled),
        LayoutEffect::LayoutRecalcNeeded => dispatch_synthetic_resize(),
    }
}

/// Execute the DOM-facing tile effects; the hand-off and autoplay signals
/// are for the device-enumeration and prompt collaborators, not the DOM.
pub fn apply_tile_effect(effect: TileEffect) {
    if effect == TileEffect::LayoutRecalcNeeded {
        dispatch_synthetic_resize();
    }
}
