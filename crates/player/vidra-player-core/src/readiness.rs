//! Readiness state machine driven by native media events.
//!
//! The channel owns an explicit two-state machine, NotReady ⇄ Ready, and the
//! event relays are pure transition functions over it. Which events carry a
//! readiness signal depends on the host runtime's event model, fixed at
//! construction through [`Capabilities`]: legacy engines misreport buffering
//! around seeks, so readiness is driven from seek and play events there
//! instead of `waiting`.

use serde::{Deserialize, Serialize};

/// Slack applied when comparing a playback position against the duration.
pub const FLOAT_IMPRECISION: f64 = 0.1;

/// Channel readiness as seen by the host store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readiness {
    #[default]
    NotReady,
    Ready,
}

impl Readiness {
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Lifecycle events fired by the native media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaEvent {
    /// Metadata (duration, intrinsic dimensions) became available.
    LoadedMetadata,
    /// Playback stalled waiting for data.
    Waiting,
    /// Enough data is buffered to play through without stalling.
    CanPlayThrough,
    /// A seek operation started.
    Seeking,
    /// A seek operation completed.
    Seeked,
    /// Playback started.
    PlayStarted,
}

/// Event-model capabilities of the host runtime, injected at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Capabilities {
    /// The runtime uses the legacy event model: `waiting` is unreliable and
    /// readiness is derived from `seeking`/`seeked`/`play` instead.
    pub legacy_event_model: bool,
}

/// Position and duration read from the media handle when an event fires.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackSnapshot {
    pub current_time: f64,
    pub duration: f64,
}

impl PlaybackSnapshot {
    /// More than [`FLOAT_IMPRECISION`] away from the end. False while the
    /// duration is still NaN (metadata not loaded), which keeps stall
    /// signals quiet until the element knows its length.
    pub fn before_end(self) -> bool {
        self.current_time < self.duration - FLOAT_IMPRECISION
    }

    /// Effectively at time zero, rounded to two decimal places.
    pub fn at_origin(self) -> bool {
        (self.current_time * 100.0).round() == 0.0
    }
}

impl Capabilities {
    /// Readiness signal implied by a media event, if any.
    ///
    /// Pure transition table; the caller decides what to do with the signal.
    pub fn readiness_signal(
        self,
        event: MediaEvent,
        snapshot: PlaybackSnapshot,
    ) -> Option<Readiness> {
        match event {
            MediaEvent::Waiting if !self.legacy_event_model && snapshot.before_end() => {
                Some(Readiness::NotReady)
            }
            MediaEvent::CanPlayThrough => Some(Readiness::Ready),
            MediaEvent::Seeking
                if self.legacy_event_model
                    && snapshot.before_end()
                    && !snapshot.at_origin() =>
            {
                Some(Readiness::NotReady)
            }
            MediaEvent::Seeked | MediaEvent::PlayStarted if self.legacy_event_model => {
                Some(Readiness::Ready)
            }
            _ => None,
        }
    }
}

/// Owns the current readiness and applies event signals to it.
///
/// Signals are returned even when the state does not change: the host store
/// receives every readiness notification the element implies, not only
/// edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadinessGate {
    state: Readiness,
    capabilities: Capabilities,
}

impl ReadinessGate {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            state: Readiness::NotReady,
            capabilities,
        }
    }

    pub fn state(&self) -> Readiness {
        self.state
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Applies one event and returns the signal to forward, if any.
    pub fn observe(&mut self, event: MediaEvent, snapshot: PlaybackSnapshot) -> Option<Readiness> {
        let signal = self.capabilities.readiness_signal(event, snapshot);
        if let Some(next) = signal {
            self.state = next;
        }
        signal
    }
}
