//! Canonical player state and the state initiator.
//!
//! A [`PlayerState`] is created once per player mount from validated
//! configuration. It is then owned by the host's state container and mutated
//! through dispatched updates (duration discovery, fullscreen toggles,
//! play/pause, mute) while the player runs.

use serde::{Deserialize, Serialize};

use crate::config::{MediaSource, PlayerConfig, PlayerOptions, Slide};
use crate::error::ConfigError;

/// The canonical initial player state.
///
/// Exactly one primary-visual-track combination holds: video only,
/// slideshow only, or slideshow with audio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub has_video: bool,
    pub has_audio: bool,
    pub has_slideshow: bool,

    /// Total duration in seconds. Set from the last slide's end time in
    /// slideshow modes; `None` for plain video, where the duration is
    /// discovered asynchronously from the media element once loaded.
    pub time_length: Option<f64>,

    pub video: Option<String>,
    pub slideshow: Option<Vec<Slide>>,
    pub audio: Option<String>,

    pub thumbnail: Option<String>,
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    pub volume: f64,
    pub allow_full_frame: bool,

    pub is_loading: bool,
    pub is_initialized: bool,
}

impl PlayerState {
    /// Builds the initial state from an already validated configuration.
    ///
    /// Infallible: every invalid combination was rejected while the
    /// [`PlayerConfig`] was constructed.
    pub fn from_config(config: PlayerConfig) -> Self {
        let time_length = config.source.time_length();
        let (has_video, has_audio, has_slideshow, video, slideshow, audio) = match config.source {
            MediaSource::Video { url } => (true, false, false, Some(url), None, None),
            MediaSource::Slideshow { slides } => (false, false, true, None, Some(slides), None),
            MediaSource::AudioSlideshow { slides, audio } => {
                (false, true, true, None, Some(slides), Some(audio))
            }
        };

        Self {
            has_video,
            has_audio,
            has_slideshow,
            time_length,
            video,
            slideshow,
            audio,
            thumbnail: config.thumbnail,
            title: config.title,
            width: config.width,
            height: config.height,
            volume: config.volume,
            allow_full_frame: config.allow_full_frame,
            is_loading: false,
            is_initialized: false,
        }
    }
}

/// The state initiator: validates externally supplied options and normalizes
/// them into the canonical initial [`PlayerState`].
///
/// `None` covers the host handing over no configuration at all.
pub fn get_init_state(options: Option<PlayerOptions>) -> Result<PlayerState, ConfigError> {
    let options = options.ok_or(ConfigError::MissingOptions)?;
    Ok(PlayerState::from_config(options.into_config()?))
}
