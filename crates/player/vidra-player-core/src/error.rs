//! Configuration errors raised while initiating player state.
//!
//! These are the only fatal failures in the crate: they abort player
//! construction and propagate to the caller. Runtime transport issues
//! (e.g. a rejected play command) are absorbed by the channel instead.

use serde::{Deserialize, Serialize};

/// Invalid player configuration supplied by the host.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ConfigError {
    /// No options were given to the player at all.
    #[error("no options given to the player")]
    MissingOptions,

    /// Neither a video nor a slideshow was supplied.
    #[error("neither a video nor a slideshow was supplied")]
    NoMediaSource,

    /// A video cannot carry a separate audio track.
    #[error("impossible combination: video with audio")]
    VideoWithAudio,

    /// A video cannot be combined with a slideshow.
    #[error("impossible combination: video with slideshow")]
    VideoWithSlideshow,

    /// Slideshow total duration must be derivable up front from the last
    /// slide's end time.
    #[error("no end time specified for the last slide of the slideshow")]
    MissingSlideshowDuration,
}
