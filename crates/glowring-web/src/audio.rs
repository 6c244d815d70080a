use glowring_core::constants::FFT_SIZE;
use glowring_core::{ErrorKind, SpectrumFrame};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

enum SourceKind {
    Microphone {
        stream: web::MediaStream,
        node: web::MediaStreamAudioSourceNode,
    },
    Media {
        node: web::MediaElementAudioSourceNode,
    },
}

/// Owns the audio graph for one session: context -> source node -> analyser.
///
/// The bin count is fixed for the handle's lifetime; the particle field is
/// created against it so frame indices always map to the same bins.
pub struct SpectrumSource {
    context: web::AudioContext,
    analyser: web::AnalyserNode,
    kind: Option<SourceKind>,
    buffer: Vec<u8>,
    closed: bool,
}

impl SpectrumSource {
    /// Request the capture device and attach an analyser to it.
    pub async fn open_microphone() -> Result<Self, ErrorKind> {
        let window = web::window().ok_or(ErrorKind::DeviceUnavailable)?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|_| ErrorKind::DeviceUnavailable)?;
        let constraints = web::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(map_acquisition_err)?;
        let stream: web::MediaStream = JsFuture::from(promise)
            .await
            .map_err(map_acquisition_err)?
            .dyn_into()
            .map_err(|_| ErrorKind::DeviceUnavailable)?;

        let context = new_audio_context()?;
        let analyser = make_analyser(&context)?;
        let node = context
            .create_media_stream_source(&stream)
            .map_err(|_| ErrorKind::DeviceUnavailable)?;
        // capture input is analysed only, never routed to the speakers
        _ = node.connect_with_audio_node(&analyser);

        Ok(Self::from_parts(
            context,
            analyser,
            SourceKind::Microphone { stream, node },
        ))
    }

    /// Attach an analyser to a decoded media element and start playback.
    pub async fn open_media_element(element: &web::HtmlMediaElement) -> Result<Self, ErrorKind> {
        if element.error().is_some() {
            return Err(ErrorKind::DecodeError);
        }
        let context = new_audio_context()?;
        let analyser = make_analyser(&context)?;
        let node = context
            .create_media_element_source(element)
            .map_err(|_| ErrorKind::DecodeError)?;
        _ = node.connect_with_audio_node(&analyser);
        // keep the file audible while analysing
        _ = analyser.connect_with_audio_node(&context.destination());

        let play = element.play().map_err(map_playback_err)?;
        if let Err(err) = JsFuture::from(play).await {
            _ = context.close();
            return Err(map_playback_err(err));
        }

        Ok(Self::from_parts(context, analyser, SourceKind::Media { node }))
    }

    fn from_parts(
        context: web::AudioContext,
        analyser: web::AnalyserNode,
        kind: SourceKind,
    ) -> Self {
        let bins = analyser.frequency_bin_count() as usize;
        Self {
            context,
            analyser,
            kind: Some(kind),
            buffer: vec![0; bins],
            closed: false,
        }
    }

    /// Frequency bins per frame, fixed for the lifetime of the handle.
    pub fn bin_count(&self) -> usize {
        self.buffer.len()
    }

    /// Non-blocking magnitude snapshot. Repeated calls within one display
    /// frame return the same data, bounded by the analyser's window.
    pub fn snapshot(&mut self) -> SpectrumFrame<'_> {
        if !self.closed {
            self.analyser.get_byte_frequency_data(&mut self.buffer);
        }
        SpectrumFrame::new(&self.buffer)
    }

    /// Release the device/decoder. Safe to call more than once; everything
    /// after the first call is a no-op.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Some(kind) = self.kind.take() {
            match kind {
                SourceKind::Microphone { stream, node } => {
                    _ = node.disconnect();
                    for track in stream.get_tracks().iter() {
                        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
                            track.stop();
                        }
                    }
                }
                SourceKind::Media { node } => {
                    _ = node.disconnect();
                }
            }
        }
        _ = self.analyser.disconnect();
        _ = self.context.close();
        log::debug!("spectrum source closed");
    }
}

impl Drop for SpectrumSource {
    fn drop(&mut self) {
        self.close();
    }
}

fn new_audio_context() -> Result<web::AudioContext, ErrorKind> {
    let context = web::AudioContext::new().map_err(|_| ErrorKind::DeviceUnavailable)?;
    // contexts start suspended until a user gesture; start() is one
    _ = context.resume();
    Ok(context)
}

fn make_analyser(context: &web::AudioContext) -> Result<web::AnalyserNode, ErrorKind> {
    let analyser =
        web::AnalyserNode::new(context).map_err(|_| ErrorKind::DeviceUnavailable)?;
    analyser.set_fft_size(FFT_SIZE);
    Ok(analyser)
}

fn map_acquisition_err(err: JsValue) -> ErrorKind {
    if let Some(ex) = err.dyn_ref::<web::DomException>() {
        match ex.name().as_str() {
            "NotAllowedError" | "SecurityError" => ErrorKind::PermissionDenied,
            _ => ErrorKind::DeviceUnavailable,
        }
    } else {
        ErrorKind::DeviceUnavailable
    }
}

fn map_playback_err(err: JsValue) -> ErrorKind {
    if let Some(ex) = err.dyn_ref::<web::DomException>() {
        match ex.name().as_str() {
            "NotAllowedError" => ErrorKind::PermissionDenied,
            _ => ErrorKind::DecodeError,
        }
    } else {
        ErrorKind::DecodeError
    }
}
