//! Browser adapter for the Vidra player core.
//!
//! Owns one `<video>` element, implements the core's [`MediaHandle`] seam
//! over it, wires the six lifecycle events through closures, and forwards
//! every resulting action record to a JavaScript dispatch function as a
//! `{ type, payload? }` object.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlVideoElement;

use vidra_player_core::{
    get_init_state as core_init_state, Capabilities, ChannelProps, MediaEvent, MediaHandle,
    PlaybackRejected, PlayerOptions, VideoChannel,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// The six native media events the channel relays, with their DOM names.
const RELAYED_EVENTS: [(&str, MediaEvent); 6] = [
    ("loadedmetadata", MediaEvent::LoadedMetadata),
    ("waiting", MediaEvent::Waiting),
    ("canplaythrough", MediaEvent::CanPlayThrough),
    ("seeking", MediaEvent::Seeking),
    ("seeked", MediaEvent::Seeked),
    ("play", MediaEvent::PlayStarted),
];

/// [`MediaHandle`] over a DOM `<video>` element.
pub struct DomVideoHandle {
    element: HtmlVideoElement,
}

impl DomVideoHandle {
    pub fn new(element: HtmlVideoElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlVideoElement {
        &self.element
    }
}

impl MediaHandle for DomVideoHandle {
    fn is_paused(&self) -> bool {
        self.element.paused()
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&mut self, time: f64) {
        self.element.set_current_time(time);
    }

    fn duration(&self) -> f64 {
        self.element.duration()
    }

    fn intrinsic_width(&self) -> u32 {
        self.element.video_width()
    }

    fn intrinsic_height(&self) -> u32 {
        self.element.video_height()
    }

    fn set_volume(&mut self, volume: f64) {
        self.element.set_volume(volume);
    }

    fn set_muted(&mut self, muted: bool) {
        self.element.set_muted(muted);
    }

    fn request_play(&mut self) -> Result<(), PlaybackRejected> {
        match self.element.play() {
            // The promise's eventual outcome is fire-and-forget; an autoplay
            // rejection resolves there and nowhere else.
            Ok(_promise) => Ok(()),
            Err(err) => Err(PlaybackRejected(format!("{err:?}"))),
        }
    }

    fn pause(&mut self) {
        self.element.pause().ok();
    }

    fn reload(&mut self) {
        self.element.load();
    }

    fn buffered_ranges(&self) -> Vec<(f64, f64)> {
        let ranges = self.element.buffered();
        let mut out = Vec::with_capacity(ranges.length() as usize);
        for i in 0..ranges.length() {
            if let (Ok(start), Ok(end)) = (ranges.start(i), ranges.end(i)) {
                out.push((start, end));
            }
        }
        out
    }

    fn set_display_size(&mut self, width: u32, height: u32) {
        self.element.set_width(width);
        self.element.set_height(height);
    }
}

/// One installed DOM listener, removed again on drop.
struct EventBinding {
    target: HtmlVideoElement,
    name: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.name, self.closure.as_ref().unchecked_ref());
    }
}

/// The video channel bound to one `<video>` element and one dispatch sink.
#[wasm_bindgen]
pub struct VidraVideoChannel {
    inner: Rc<RefCell<VideoChannel<DomVideoHandle>>>,
    _listeners: Vec<EventBinding>,
}

#[wasm_bindgen]
impl VidraVideoChannel {
    /// Mounts the channel over `video`. `props` is a store snapshot (JSON
    /// object or undefined/null for defaults), `capabilities` the runtime
    /// event-model flags (undefined/null for defaults), and `dispatch` a
    /// function receiving each `{ type, payload? }` action record.
    #[wasm_bindgen(constructor)]
    pub fn new(
        video: HtmlVideoElement,
        props: JsValue,
        capabilities: JsValue,
        dispatch: Function,
    ) -> Result<VidraVideoChannel, JsError> {
        console_error_panic_hook::set_once();

        let props: ChannelProps = if jsvalue_is_undefined_or_null(&props) {
            ChannelProps::default()
        } else {
            swb::from_value(props).map_err(|e| JsError::new(&format!("props error: {e}")))?
        };
        let capabilities: Capabilities = if jsvalue_is_undefined_or_null(&capabilities) {
            Capabilities::default()
        } else {
            swb::from_value(capabilities)
                .map_err(|e| JsError::new(&format!("capabilities error: {e}")))?
        };

        if let Some(src) = &props.src {
            video.set_src(src);
        }

        let inner = Rc::new(RefCell::new(VideoChannel::new(
            DomVideoHandle::new(video.clone()),
            capabilities,
            props,
        )));

        let mut listeners = Vec::with_capacity(RELAYED_EVENTS.len());
        for (name, event) in RELAYED_EVENTS {
            let channel = Rc::clone(&inner);
            let dispatch = dispatch.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let actions = channel.borrow_mut().on_media_event(event);
                for action in actions {
                    if let Ok(record) = swb::to_value(&action) {
                        let _ = dispatch.call1(&JsValue::UNDEFINED, &record);
                    }
                }
            });
            video
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
                .map_err(|e| JsError::new(&format!("listener error for {name}: {e:?}")))?;
            listeners.push(EventBinding {
                target: video.clone(),
                name,
                closure,
            });
        }

        Ok(VidraVideoChannel {
            inner,
            _listeners: listeners,
        })
    }

    /// Adopts a fresh store snapshot; a changed `initTime` resets the
    /// element so it re-resolves its source.
    #[wasm_bindgen(js_name = syncProps)]
    pub fn sync_props(&self, props: JsValue) -> Result<(), JsError> {
        let props: ChannelProps =
            swb::from_value(props).map_err(|e| JsError::new(&format!("props error: {e}")))?;
        let mut channel = self.inner.borrow_mut();
        let switched = channel.props().init_time != props.init_time;
        let src = props.src.clone();
        channel.sync_props(props);
        if switched {
            if let Some(src) = src {
                channel.handle().element().set_src(&src);
            }
        }
        Ok(())
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.borrow().is_playing()
    }

    #[wasm_bindgen(js_name = getCurrentTime)]
    pub fn current_time(&self) -> f64 {
        self.inner.borrow().current_time()
    }

    #[wasm_bindgen(js_name = getDuration)]
    pub fn duration(&self) -> f64 {
        self.inner.borrow().duration()
    }

    pub fn load(&self) {
        self.inner.borrow_mut().load();
    }

    pub fn play(&self) {
        self.inner.borrow_mut().play();
    }

    pub fn pause(&self) {
        self.inner.borrow_mut().pause();
    }

    pub fn stop(&self) {
        self.inner.borrow_mut().stop();
    }

    #[wasm_bindgen(js_name = changeTime)]
    pub fn change_time(&self, time: f64) {
        self.inner.borrow_mut().change_time(time);
    }

    #[wasm_bindgen(js_name = timeRangeBuffered)]
    pub fn time_range_buffered(&self, time: f64) -> f64 {
        self.inner.borrow().time_range_buffered(time)
    }

    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&self, volume: f64) {
        self.inner.borrow_mut().set_volume(volume);
    }

    pub fn mute(&self) {
        self.inner.borrow_mut().mute();
    }

    #[wasm_bindgen(js_name = unMute)]
    pub fn un_mute(&self) {
        self.inner.borrow_mut().un_mute();
    }

    /// Pushes the current display size onto the element itself.
    #[wasm_bindgen(js_name = displayVideo)]
    pub fn display_video(&self) {
        self.inner.borrow_mut().display_video();
    }

    /// Geometry for the current render pass, as
    /// `{ width, height, marginLeft, marginTop }`.
    #[wasm_bindgen(js_name = displayGeometry)]
    pub fn display_geometry(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.inner.borrow().display_geometry())
            .map_err(|e| JsError::new(&format!("geometry error: {e}")))
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.inner.borrow().readiness().is_ready()
    }
}

/// The state initiator: validates player options (JSON object) and returns
/// the canonical initial player state. undefined/null counts as an absent
/// configuration and fails like any other invalid one.
#[wasm_bindgen(js_name = getInitState)]
pub fn get_init_state(options: JsValue) -> Result<JsValue, JsError> {
    let options: Option<PlayerOptions> = if jsvalue_is_undefined_or_null(&options) {
        None
    } else {
        Some(swb::from_value(options).map_err(|e| JsError::new(&format!("options error: {e}")))?)
    };
    let state = core_init_state(options).map_err(|e| JsError::new(&e.to_string()))?;
    swb::to_value(&state).map_err(|e| JsError::new(&format!("state error: {e}")))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen(js_name = abiVersion)]
pub fn abi_version() -> u32 {
    1
}
