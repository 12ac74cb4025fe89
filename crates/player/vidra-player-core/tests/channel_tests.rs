use vidra_player_core::{
    Capabilities, ChannelProps, MediaEvent, MediaHandle, PlaybackRejected, Readiness, StoreAction,
    VideoChannel,
};

/// Recording mock over the media-handle seam.
#[derive(Debug, Default)]
struct MockHandle {
    paused: bool,
    current_time: f64,
    duration: f64,
    intrinsic: (u32, u32),
    volume: f64,
    muted: bool,
    buffered: Vec<(f64, f64)>,
    reject_play: bool,
    play_commands: u32,
    pause_commands: u32,
    reload_commands: u32,
    display_size: Option<(u32, u32)>,
}

impl MockHandle {
    fn paused_with(buffered: Vec<(f64, f64)>) -> Self {
        Self {
            paused: true,
            duration: f64::NAN,
            buffered,
            ..Self::default()
        }
    }
}

impl MediaHandle for MockHandle {
    fn is_paused(&self) -> bool {
        self.paused
    }
    fn current_time(&self) -> f64 {
        self.current_time
    }
    fn set_current_time(&mut self, time: f64) {
        self.current_time = time;
    }
    fn duration(&self) -> f64 {
        self.duration
    }
    fn intrinsic_width(&self) -> u32 {
        self.intrinsic.0
    }
    fn intrinsic_height(&self) -> u32 {
        self.intrinsic.1
    }
    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }
    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
    fn request_play(&mut self) -> Result<(), PlaybackRejected> {
        if self.reject_play {
            return Err(PlaybackRejected("autoplay blocked".into()));
        }
        self.play_commands += 1;
        self.paused = false;
        Ok(())
    }
    fn pause(&mut self) {
        self.pause_commands += 1;
        self.paused = true;
    }
    fn reload(&mut self) {
        self.reload_commands += 1;
        self.current_time = 0.0;
        self.paused = true;
    }
    fn buffered_ranges(&self) -> Vec<(f64, f64)> {
        self.buffered.clone()
    }
    fn set_display_size(&mut self, width: u32, height: u32) {
        self.display_size = Some((width, height));
    }
}

fn channel(handle: MockHandle, props: ChannelProps) -> VideoChannel<MockHandle> {
    VideoChannel::new(handle, Capabilities::default(), props)
}

/// it should scan buffered ranges for the end of the range containing t
#[test]
fn time_range_buffered_scan() {
    let ch = channel(
        MockHandle::paused_with(vec![(0.0, 5.0), (8.0, 10.0)]),
        ChannelProps::default(),
    );
    assert_eq!(ch.time_range_buffered(3.0), 5.0);
    // Nothing buffered past this point: the query comes back unchanged.
    assert_eq!(ch.time_range_buffered(6.0), 6.0);
    assert_eq!(ch.time_range_buffered(9.0), 10.0);
}

/// it should stop by pausing and seeking to the store-held duration
#[test]
fn stop_seeks_to_duration() {
    let props = ChannelProps {
        duration: 42.0,
        ..ChannelProps::default()
    };
    let mut ch = channel(MockHandle::default(), props);
    assert!(ch.is_playing());

    ch.stop();
    assert!(!ch.is_playing());
    assert_eq!(ch.handle().pause_commands, 1);
    // Stop means seek to the end, not to zero.
    assert_eq!(ch.current_time(), 42.0);

    // Stopping while already paused only reissues the seek.
    ch.stop();
    assert_eq!(ch.handle().pause_commands, 1);
}

/// it should not issue a duplicate play command while already playing
#[test]
fn play_is_idempotent_while_playing() {
    let mut ch = channel(MockHandle::paused_with(Vec::new()), ChannelProps::default());
    ch.play();
    ch.play();
    assert!(ch.is_playing());
    assert_eq!(ch.handle().play_commands, 1);
}

/// it should swallow a rejected play command
#[test]
fn rejected_play_is_a_no_op() {
    let handle = MockHandle {
        paused: true,
        reject_play: true,
        ..MockHandle::default()
    };
    let mut ch = channel(handle, ChannelProps::default());
    ch.play();
    // The channel stays in its prior state; no error surfaces.
    assert!(!ch.is_playing());
    assert_eq!(ch.handle().play_commands, 0);
}

/// it should pause only when playing
#[test]
fn pause_only_when_playing() {
    let mut ch = channel(MockHandle::paused_with(Vec::new()), ChannelProps::default());
    ch.pause();
    assert_eq!(ch.handle().pause_commands, 0);

    ch.play();
    ch.pause();
    assert_eq!(ch.handle().pause_commands, 1);
}

/// it should mute the element on mount when the snapshot says so
#[test]
fn mount_applies_muted() {
    let props = ChannelProps {
        muted: true,
        ..ChannelProps::default()
    };
    let ch = channel(MockHandle::default(), props);
    assert!(ch.handle().muted);

    let ch = channel(MockHandle::default(), ChannelProps::default());
    assert!(!ch.handle().muted);
}

/// it should reset the element when the media identity changes
#[test]
fn init_time_change_triggers_reload() {
    let mut ch = channel(MockHandle::default(), ChannelProps::default());

    let same = ChannelProps {
        width: 640,
        ..ChannelProps::default()
    };
    ch.sync_props(same);
    assert_eq!(ch.handle().reload_commands, 0);
    assert_eq!(ch.props().width, 640);

    let switched = ChannelProps {
        init_time: 17.0,
        src: Some("other.mp4".into()),
        ..ChannelProps::default()
    };
    ch.sync_props(switched);
    assert_eq!(ch.handle().reload_commands, 1);
    assert_eq!(ch.props().init_time, 17.0);
}

/// it should seek to absolute times without validation
#[test]
fn change_time_is_unvalidated() {
    let mut ch = channel(MockHandle::paused_with(Vec::new()), ChannelProps::default());
    ch.change_time(123.75);
    assert_eq!(ch.current_time(), 123.75);
    ch.change_time(-4.0);
    assert_eq!(ch.current_time(), -4.0);
}

/// it should pass volume and mute writes straight through
#[test]
fn volume_and_mute_passthrough() {
    let mut ch = channel(MockHandle::default(), ChannelProps::default());
    ch.set_volume(0.4);
    assert_eq!(ch.handle().volume, 0.4);
    ch.mute();
    assert!(ch.handle().muted);
    ch.un_mute();
    assert!(!ch.handle().muted);
}

/// it should push fullscreen or configured dimensions onto the element
#[test]
fn display_video_dimensions() {
    let props = ChannelProps {
        width: 560,
        height: 315,
        fullscreen: false,
        fullscreen_width: 1920,
        fullscreen_height: 1080,
        ..ChannelProps::default()
    };
    let mut ch = channel(MockHandle::default(), props.clone());
    ch.display_video();
    assert_eq!(ch.handle().display_size, Some((560, 315)));

    let mut ch = channel(
        MockHandle::default(),
        ChannelProps {
            fullscreen: true,
            ..props
        },
    );
    ch.display_video();
    assert_eq!(ch.handle().display_size, Some((1920, 1080)));
}

/// it should derive render geometry from the store snapshot
#[test]
fn display_geometry_follows_props() {
    let props = ChannelProps {
        width: 560,
        height: 315,
        fullscreen: true,
        fullscreen_width: 800,
        fullscreen_height: 800,
        video_width: 1920,
        video_height: 1080,
        ..ChannelProps::default()
    };
    let ch = channel(MockHandle::default(), props.clone());
    let geometry = ch.display_geometry();
    assert_eq!(geometry.width, 800.0);
    assert_eq!(geometry.height, 450.0);
    assert_eq!(geometry.margin_top, 175.0);

    let ch = channel(
        MockHandle::default(),
        ChannelProps {
            fullscreen: false,
            ..props
        },
    );
    let geometry = ch.display_geometry();
    assert_eq!(geometry.width, 560.0);
    assert_eq!(geometry.height, 315.0);
    assert_eq!(geometry.margin_top, 0.0);
}

/// it should relay metadata arrival as the three update actions
#[test]
fn loaded_metadata_relay() {
    let handle = MockHandle {
        paused: true,
        duration: 73.5,
        intrinsic: (1280, 720),
        ..MockHandle::default()
    };
    let mut ch = channel(handle, ChannelProps::default());
    let actions = ch.on_media_event(MediaEvent::LoadedMetadata);
    assert_eq!(
        actions,
        vec![
            StoreAction::UpdateDuration { duration: 73.5 },
            StoreAction::UpdateVideoWidth { video_width: 1280 },
            StoreAction::UpdateVideoHeight { video_height: 720 },
        ]
    );
    // Metadata arrival carries no readiness signal.
    assert_eq!(ch.readiness(), Readiness::NotReady);
}

/// it should relay readiness transitions from the gate
#[test]
fn readiness_relay() {
    let handle = MockHandle {
        paused: true,
        duration: 60.0,
        current_time: 5.0,
        ..MockHandle::default()
    };
    let mut ch = channel(handle, ChannelProps::default());

    assert_eq!(
        ch.on_media_event(MediaEvent::Waiting),
        vec![StoreAction::VideoIsNotReady]
    );
    assert_eq!(ch.readiness(), Readiness::NotReady);

    assert_eq!(
        ch.on_media_event(MediaEvent::CanPlayThrough),
        vec![StoreAction::VideoIsReady]
    );
    assert!(ch.readiness().is_ready());

    // Modern runtime: seek events carry no signal.
    assert_eq!(ch.on_media_event(MediaEvent::Seeking), Vec::new());
    assert_eq!(ch.on_media_event(MediaEvent::Seeked), Vec::new());
}

/// it should follow the legacy event model when so configured
#[test]
fn legacy_readiness_relay() {
    let handle = MockHandle {
        paused: true,
        duration: 60.0,
        current_time: 12.0,
        ..MockHandle::default()
    };
    let caps = Capabilities {
        legacy_event_model: true,
    };
    let mut ch = VideoChannel::new(handle, caps, ChannelProps::default());

    // Legacy runtimes ignore `waiting` entirely.
    assert_eq!(ch.on_media_event(MediaEvent::Waiting), Vec::new());
    assert_eq!(
        ch.on_media_event(MediaEvent::Seeking),
        vec![StoreAction::VideoIsNotReady]
    );
    assert_eq!(
        ch.on_media_event(MediaEvent::Seeked),
        vec![StoreAction::VideoIsReady]
    );
    assert_eq!(
        ch.on_media_event(MediaEvent::PlayStarted),
        vec![StoreAction::VideoIsReady]
    );
}

/// it should serialize actions in the host's {type, payload} shape
#[test]
fn action_wire_shape() {
    let json = serde_json::to_value(StoreAction::UpdateDuration { duration: 73.5 }).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "type": "UPDATE_DURATION", "payload": { "duration": 73.5 } })
    );

    let json = serde_json::to_value(StoreAction::UpdateVideoWidth { video_width: 1280 }).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "type": "UPDATE_VIDEO_WIDTH", "payload": { "videoWidth": 1280 } })
    );

    let json = serde_json::to_value(StoreAction::VideoIsReady).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "VIDEO_IS_READY" }));

    let json = serde_json::to_value(StoreAction::VideoIsNotReady).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "VIDEO_IS_NOT_READY" }));
}
