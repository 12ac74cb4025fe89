//! Action records pushed to the host's dispatch sink.
//!
//! The vocabulary is fixed: no other action types are emitted by this core.
//! Adapters serialize these as `{ type, payload? }` objects with the tag
//! strings the host store reduces on.

use serde::{Deserialize, Serialize};

/// One typed action record for the host store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum StoreAction {
    #[serde(rename = "VIDEO_IS_NOT_READY")]
    VideoIsNotReady,

    #[serde(rename = "VIDEO_IS_READY")]
    VideoIsReady,

    /// Total duration reported by the media element, in seconds.
    #[serde(rename = "UPDATE_DURATION")]
    UpdateDuration { duration: f64 },

    /// Intrinsic media width in pixels.
    #[serde(rename = "UPDATE_VIDEO_WIDTH")]
    UpdateVideoWidth {
        #[serde(rename = "videoWidth")]
        video_width: u32,
    },

    /// Intrinsic media height in pixels.
    #[serde(rename = "UPDATE_VIDEO_HEIGHT")]
    UpdateVideoHeight {
        #[serde(rename = "videoHeight")]
        video_height: u32,
    },
}
