//! Camera-dock layout and stream-health engine for a conferencing client.
//!
//! This crate is the headless core behind the webcam area of the client UI:
//! it owns the geometry of the floating video-tile dock (drag, resize,
//! fullscreen, persisted size preferences) and the per-tile readiness /
//! stream-health / autoplay-recovery state machines. The host layer is
//! responsible only for wiring DOM events into the controllers and
//! executing the side-effect commands they return; rendering is a pure
//! function of the state exposed here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Dock reducer: actions in, clamped geometry + effects out |
//! | [`dock`] | Dock position/edge/state types and configuration |
//! | [`layout`] | Layout action channel and side-effect command types |
//! | [`tile`] | Per-tile video state machine and mount/unmount lifecycle |
//! | [`health`] | Per-camera stream-health pub/sub and classification |
//! | [`device`] | Sequential camera reconnection after breakout return |
//! | [`fullscreen`] | Fullscreen membership snapshot and button affordance |
//! | [`storage`] | Persisted layout preference store |
//! | [`consts`] | Shared constants (storage key, bounds, health states) |
//! | `web` | Browser adapters (`hydrate` feature only) |

pub mod consts;
pub mod controller;
pub mod device;
pub mod dock;
pub mod fullscreen;
pub mod health;
pub mod layout;
pub mod storage;
pub mod tile;

#[cfg(feature = "hydrate")]
pub mod web;
