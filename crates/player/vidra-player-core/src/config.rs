//! Player configuration: raw external options, the validated media source,
//! and the presentation defaults applied during normalization.
//!
//! Mode selection is decided once, at the boundary, by turning the raw
//! options into a [`MediaSource`] tagged union. Nothing downstream ever
//! checks field presence again.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One entry of a slideshow sequence. `end_time` marks when this slide's
/// display window ends, in seconds from playback start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Image reference, resolvable by the host (URL or asset key).
    pub image: String,
    /// Unset on intermediate slides is tolerated; only the last slide's
    /// `end_time` is required, since it defines the total duration.
    #[serde(default)]
    pub end_time: Option<f64>,
}

impl Slide {
    pub fn new(image: impl Into<String>, end_time: Option<f64>) -> Self {
        Self {
            image: image.into(),
            end_time,
        }
    }
}

/// Raw, externally supplied player options. Every field is optional; which
/// media fields are present decides the playback mode, and
/// [`PlayerOptions::into_config`] rejects the impossible combinations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerOptions {
    pub video: Option<String>,
    pub slideshow: Option<Vec<Slide>>,
    pub audio: Option<String>,
    pub thumbnail: Option<String>,
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub volume: Option<f64>,
    pub allow_full_frame: Option<bool>,
}

/// The primary media track, validated once at the boundary.
///
/// Video is exclusive: it never carries a separate audio track or a
/// slideshow. Audio only ever accompanies a slideshow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MediaSource {
    Video {
        url: String,
    },
    Slideshow {
        slides: Vec<Slide>,
    },
    AudioSlideshow {
        slides: Vec<Slide>,
        audio: String,
    },
}

impl MediaSource {
    /// Total playback duration, when it is derivable up front.
    ///
    /// Slideshow modes take the last slide's `end_time`; no consistency
    /// validation of earlier slides is performed. Video returns `None`:
    /// its duration is discovered from the media element once loaded.
    pub fn time_length(&self) -> Option<f64> {
        match self {
            MediaSource::Video { .. } => None,
            MediaSource::Slideshow { slides } | MediaSource::AudioSlideshow { slides, .. } => {
                slides.last().and_then(|slide| slide.end_time)
            }
        }
    }
}

/// Presentation defaults merged once during normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationDefaults {
    pub width: u32,
    pub height: u32,
    pub volume: f64,
    pub allow_full_frame: bool,
}

impl Default for PresentationDefaults {
    fn default() -> Self {
        Self {
            width: 560,
            height: 315,
            volume: 1.0,
            allow_full_frame: true,
        }
    }
}

/// Validated configuration: a tagged media source plus fully defaulted
/// presentation fields. Constructing one is the only place validation runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    pub source: MediaSource,
    pub thumbnail: Option<String>,
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    pub volume: f64,
    pub allow_full_frame: bool,
}

impl PlayerOptions {
    /// Validates the raw options and normalizes them into a [`PlayerConfig`].
    ///
    /// Each optional presentation field defaults independently from
    /// [`PresentationDefaults`]; there is no partial defaulting.
    pub fn into_config(self) -> Result<PlayerConfig, ConfigError> {
        let source = match (self.video, self.slideshow, self.audio) {
            (Some(_), _, Some(_)) => return Err(ConfigError::VideoWithAudio),
            (Some(_), Some(_), None) => return Err(ConfigError::VideoWithSlideshow),
            (Some(url), None, None) => MediaSource::Video { url },
            (None, Some(slides), audio) => {
                if slides.last().and_then(|slide| slide.end_time).is_none() {
                    return Err(ConfigError::MissingSlideshowDuration);
                }
                match audio {
                    Some(audio) => MediaSource::AudioSlideshow { slides, audio },
                    None => MediaSource::Slideshow { slides },
                }
            }
            (None, None, _) => return Err(ConfigError::NoMediaSource),
        };

        let defaults = PresentationDefaults::default();
        Ok(PlayerConfig {
            source,
            thumbnail: self.thumbnail,
            title: self.title,
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            volume: self.volume.unwrap_or(defaults.volume),
            allow_full_frame: self.allow_full_frame.unwrap_or(defaults.allow_full_frame),
        })
    }
}
