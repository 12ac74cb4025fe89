//! The video channel: transport operations over one native media handle and
//! relays from its lifecycle events to typed store actions.
//!
//! The channel never talks to the DOM or the store directly. It drives a
//! [`MediaHandle`] implementation (the wasm adapter in production, a mock in
//! tests) and returns [`StoreAction`]s for the adapter to dispatch.

use serde::{Deserialize, Serialize};

use crate::actions::StoreAction;
use crate::geometry::DisplayGeometry;
use crate::readiness::{
    Capabilities, MediaEvent, PlaybackSnapshot, Readiness, ReadinessGate,
};

/// A play command the host refused to carry out (typically autoplay policy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackRejected(pub String);

/// Host-facing view of one native playable-media element.
///
/// One handle is exclusively owned by one channel instance; the handle
/// itself reconciles overlapping imperative commands.
pub trait MediaHandle {
    /// True when the element reports itself paused.
    fn is_paused(&self) -> bool;
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    /// Absolute seek. No bounds validation is applied anywhere.
    fn set_current_time(&mut self, time: f64);
    /// Total duration in seconds; NaN until metadata has loaded.
    fn duration(&self) -> f64;
    /// Intrinsic media width in pixels (0 until metadata has loaded).
    fn intrinsic_width(&self) -> u32;
    /// Intrinsic media height in pixels (0 until metadata has loaded).
    fn intrinsic_height(&self) -> u32;
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
    /// Issue a play command. The eventual outcome is fire-and-forget; a
    /// synchronously reported refusal comes back as [`PlaybackRejected`].
    fn request_play(&mut self) -> Result<(), PlaybackRejected>;
    fn pause(&mut self);
    /// Reset the element to its initial unloaded state so it re-resolves
    /// its source.
    fn reload(&mut self);
    /// Ordered buffered ranges as `(start, end)` pairs in seconds.
    fn buffered_ranges(&self) -> Vec<(f64, f64)>;
    /// Push a display size onto the element itself (imperative side-channel,
    /// separate from declarative layout).
    fn set_display_size(&mut self, width: u32, height: u32);
}

/// Store-derived snapshot consumed by the channel each render cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelProps {
    /// Configured display size.
    pub width: u32,
    pub height: u32,
    /// Whether fullscreen presentation is active, and at what size.
    pub fullscreen: bool,
    pub fullscreen_width: u32,
    pub fullscreen_height: u32,
    /// Intrinsic media dimensions as last reported to the store.
    pub video_width: u32,
    pub video_height: u32,
    /// Store-held total duration in seconds.
    pub duration: f64,
    pub muted: bool,
    /// Media source identity. A change between snapshots means the source
    /// was switched and the element must drop its buffered state.
    pub init_time: f64,
    /// Media reference currently mounted in the element.
    pub src: Option<String>,
}

impl Default for ChannelProps {
    fn default() -> Self {
        Self {
            width: 560,
            height: 315,
            fullscreen: false,
            fullscreen_width: 0,
            fullscreen_height: 0,
            video_width: 0,
            video_height: 0,
            duration: 0.0,
            muted: false,
            init_time: 0.0,
            src: None,
        }
    }
}

/// Stateful adapter between one media handle and the host store.
#[derive(Debug)]
pub struct VideoChannel<H: MediaHandle> {
    handle: H,
    gate: ReadinessGate,
    props: ChannelProps,
}

impl<H: MediaHandle> VideoChannel<H> {
    /// Mounts the channel over a handle. An initially muted snapshot mutes
    /// the element immediately.
    pub fn new(handle: H, capabilities: Capabilities, props: ChannelProps) -> Self {
        let mut channel = Self {
            handle,
            gate: ReadinessGate::new(capabilities),
            props,
        };
        if channel.props.muted {
            channel.handle.set_muted(true);
        }
        channel
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn props(&self) -> &ChannelProps {
        &self.props
    }

    pub fn readiness(&self) -> Readiness {
        self.gate.state()
    }

    /// Adopts a fresh store snapshot. A changed `init_time` marks a new
    /// media identity: the element is reset first so it re-resolves its
    /// source.
    pub fn sync_props(&mut self, next: ChannelProps) {
        if self.props.init_time != next.init_time {
            self.load();
        }
        self.props = next;
    }

    pub fn is_playing(&self) -> bool {
        !self.handle.is_paused()
    }

    pub fn current_time(&self) -> f64 {
        self.handle.current_time()
    }

    pub fn duration(&self) -> f64 {
        self.handle.duration()
    }

    /// Resets the element to its initial unloaded state.
    pub fn load(&mut self) {
        self.handle.reload();
    }

    /// Starts playback unless already playing. A refused play command is a
    /// no-op outcome, not an error.
    pub fn play(&mut self) {
        if self.is_playing() {
            return;
        }
        if let Err(PlaybackRejected(reason)) = self.handle.request_play() {
            log::debug!("play command rejected by host: {reason}");
        }
    }

    /// Pauses only if currently playing.
    pub fn pause(&mut self) {
        if self.is_playing() {
            self.handle.pause();
        }
    }

    /// Pauses if playing, then seeks to the store-held duration. Stopping
    /// means seeking to the end, not to zero; the host treats the end
    /// position as its "reading terminated" marker.
    pub fn stop(&mut self) {
        if self.is_playing() {
            self.handle.pause();
        }
        self.handle.set_current_time(self.props.duration);
    }

    /// Seeks to an absolute time, unvalidated.
    pub fn change_time(&mut self, time: f64) {
        self.handle.set_current_time(time);
    }

    /// End of the first buffered range containing `time`, else `time`
    /// unchanged (nothing is buffered past this point).
    pub fn time_range_buffered(&self, time: f64) -> f64 {
        for (start, end) in self.handle.buffered_ranges() {
            if time >= start && time <= end {
                return end;
            }
        }
        time
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.handle.set_volume(volume);
    }

    pub fn mute(&mut self) {
        self.handle.set_muted(true);
    }

    pub fn un_mute(&mut self) {
        self.handle.set_muted(false);
    }

    /// Pushes the current display size onto the element: the fullscreen
    /// dimensions when fullscreen is active, else the configured size.
    pub fn display_video(&mut self) {
        let (width, height) = if self.props.fullscreen {
            (self.props.fullscreen_width, self.props.fullscreen_height)
        } else {
            (self.props.width, self.props.height)
        };
        self.handle.set_display_size(width, height);
    }

    /// Geometry for the current render pass, from the store snapshot.
    pub fn display_geometry(&self) -> DisplayGeometry {
        if self.props.fullscreen {
            DisplayGeometry::fullscreen(
                f64::from(self.props.video_width),
                f64::from(self.props.video_height),
                f64::from(self.props.fullscreen_width),
                f64::from(self.props.fullscreen_height),
            )
        } else {
            DisplayGeometry::windowed(f64::from(self.props.width), f64::from(self.props.height))
        }
    }

    /// Relays one native media event, returning the actions to dispatch.
    ///
    /// Metadata arrival emits the duration and intrinsic-dimension updates
    /// first; any readiness signal from the gate follows.
    pub fn on_media_event(&mut self, event: MediaEvent) -> Vec<StoreAction> {
        let mut actions = Vec::new();

        if event == MediaEvent::LoadedMetadata {
            actions.push(StoreAction::UpdateDuration {
                duration: self.handle.duration(),
            });
            actions.push(StoreAction::UpdateVideoWidth {
                video_width: self.handle.intrinsic_width(),
            });
            actions.push(StoreAction::UpdateVideoHeight {
                video_height: self.handle.intrinsic_height(),
            });
        }

        let snapshot = PlaybackSnapshot {
            current_time: self.handle.current_time(),
            duration: self.handle.duration(),
        };
        if let Some(signal) = self.gate.observe(event, snapshot) {
            actions.push(match signal {
                Readiness::Ready => StoreAction::VideoIsReady,
                Readiness::NotReady => StoreAction::VideoIsNotReady,
            });
        }

        actions
    }
}
