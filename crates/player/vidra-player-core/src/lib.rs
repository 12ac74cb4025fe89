//! Vidra Player Core (host-agnostic)
//!
//! Unified state and channel logic for the three playback modes — plain
//! video, timed image slideshow, and audio-narrated slideshow — behind one
//! state shape. This crate defines configuration validation and state
//! initiation, the dispatch-action vocabulary, the readiness state machine,
//! letterboxing geometry, and the video channel over a [`MediaHandle`] seam.
//! Adapters (wasm) own the native element and the dispatch sink.

pub mod actions;
pub mod channel;
pub mod config;
pub mod error;
pub mod geometry;
pub mod readiness;
pub mod state;

// Re-exports for consumers (adapters)
pub use actions::StoreAction;
pub use channel::{ChannelProps, MediaHandle, PlaybackRejected, VideoChannel};
pub use config::{MediaSource, PlayerConfig, PlayerOptions, PresentationDefaults, Slide};
pub use error::ConfigError;
pub use geometry::DisplayGeometry;
pub use readiness::{
    Capabilities, MediaEvent, PlaybackSnapshot, Readiness, ReadinessGate, FLOAT_IMPRECISION,
};
pub use state::{get_init_state, PlayerState};
