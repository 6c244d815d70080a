use crate::audio::SpectrumSource;
use crate::dom;
use crate::frame::FrameScheduler;
use crate::surface::Canvas2dSurface;
use glowring_core::{
    responsive_particle_count, ErrorKind, ParticleField, PlaybackStateMachine, SilencePolicy,
    ViewportState, VisualizerOptions,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything one visualizer instance owns. Held behind a single
/// `Rc<RefCell>` so the tick closure, resize handler and JS-facing methods
/// all drive the same session; nothing lives in ambient globals.
struct EngineInner {
    machine: PlaybackStateMachine,
    options: VisualizerOptions,
    canvas: Option<web::HtmlCanvasElement>,
    context: Option<web::CanvasRenderingContext2d>,
    viewport: ViewportState,
    source: Option<SpectrumSource>,
    field: Option<ParticleField>,
    session_start: Option<Instant>,
    on_state_change: Option<js_sys::Function>,
}

/// Audio-reactive ring visualizer, exported to JS.
///
/// Lifecycle: `mount` a container, then `start` (microphone) or
/// `start_with_element` (decoded audio file), observe `state`, `stop`.
#[wasm_bindgen]
pub struct Visualizer {
    inner: Rc<RefCell<EngineInner>>,
    scheduler: FrameScheduler,
}

#[wasm_bindgen]
impl Visualizer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Visualizer {
        Visualizer {
            inner: Rc::new(RefCell::new(EngineInner {
                machine: PlaybackStateMachine::new(),
                options: VisualizerOptions::default(),
                canvas: None,
                context: None,
                viewport: ViewportState::measure(0.0, 0.0, 1.0),
                source: None,
                field: None,
                session_start: None,
                on_state_change: None,
            })),
            scheduler: FrameScheduler::new(),
        }
    }

    /// Pin the dot count; 0 restores the responsive width-derived count.
    pub fn set_particle_count(&self, count: u32) {
        self.inner.borrow_mut().options.particle_count = if count == 0 {
            None
        } else {
            Some(count as usize)
        };
    }

    /// Pin the particle randomness for reproducible fields.
    pub fn set_seed(&self, seed: u64) {
        self.inner.borrow_mut().options.seed = Some(seed);
    }

    /// When false, the dot pass is skipped on fully silent frames.
    pub fn set_render_during_silence(&self, keep: bool) {
        self.inner.borrow_mut().options.silence_policy = if keep {
            SilencePolicy::KeepRendering
        } else {
            SilencePolicy::RenderWhileAudible
        };
    }

    /// Create the canvas inside `container` and size it to fit; keeps the
    /// backing buffer in sync with CSS size and device pixel ratio from then
    /// on.
    pub fn mount(&self, container: web::HtmlElement) -> Result<(), JsValue> {
        self.mount_impl(container)
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Begin a live microphone session.
    pub fn start(&self) {
        if !self.inner.borrow_mut().machine.begin_start() {
            return;
        }
        notify_state(&self.inner);
        let inner = self.inner.clone();
        let scheduler = self.scheduler.clone();
        spawn_local(async move {
            let result = SpectrumSource::open_microphone().await;
            finish_acquisition(&inner, &scheduler, result);
        });
    }

    /// Begin a session over a decoded audio element; the session ends on its
    /// own when the element fires `ended`.
    pub fn start_with_element(&self, element: web::HtmlMediaElement) {
        if !self.inner.borrow_mut().machine.begin_start() {
            return;
        }
        notify_state(&self.inner);
        let inner = self.inner.clone();
        let scheduler = self.scheduler.clone();
        spawn_local(async move {
            let result = SpectrumSource::open_media_element(&element).await;
            if result.is_ok() {
                wire_ended(&inner, &scheduler, &element);
            }
            finish_acquisition(&inner, &scheduler, result);
        });
    }

    /// Stop rendering and release the source. Idempotent.
    pub fn stop(&self) {
        teardown(&self.inner, &self.scheduler);
    }

    pub fn state(&self) -> String {
        self.inner.borrow().machine.state().as_str().to_string()
    }

    pub fn last_error(&self) -> Option<String> {
        self.inner
            .borrow()
            .machine
            .last_error()
            .map(|k| k.as_str().to_string())
    }

    /// Callback invoked with the new state name on every transition.
    pub fn set_on_state_change(&self, callback: js_sys::Function) {
        self.inner.borrow_mut().on_state_change = Some(callback);
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer {
    fn mount_impl(&self, container: web::HtmlElement) -> anyhow::Result<()> {
        let (canvas, context) = dom::create_canvas(&container)?;
        let viewport = dom::measure_container(&container);
        dom::apply_viewport(&canvas, &context, &viewport);
        {
            let mut e = self.inner.borrow_mut();
            e.canvas = Some(canvas);
            e.context = Some(context);
            e.viewport = viewport;
        }
        self.wire_resize(container);
        log::info!(
            "mounted: {}x{} logical at dpr {}",
            viewport.logical_width,
            viewport.logical_height,
            viewport.device_pixel_ratio
        );
        Ok(())
    }

    fn wire_resize(&self, container: web::HtmlElement) {
        let inner = self.inner.clone();
        let scheduler = self.scheduler.clone();
        let closure = Closure::wrap(Box::new(move || {
            handle_resize(&inner, &scheduler, &container);
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

/// Resize: cancel the loop before the backing buffer changes so no frame is
/// drawn against a stale size, then restart if a session is live.
fn handle_resize(
    inner: &Rc<RefCell<EngineInner>>,
    scheduler: &FrameScheduler,
    container: &web::HtmlElement,
) {
    scheduler.stop();
    let restart = {
        let mut e = inner.borrow_mut();
        let viewport = dom::measure_container(container);
        if let (Some(canvas), Some(context)) = (&e.canvas, &e.context) {
            dom::apply_viewport(canvas, context, &viewport);
        }
        e.viewport = viewport;
        e.machine.is_active()
    };
    if restart {
        start_render_loop(inner, scheduler);
    }
}

fn finish_acquisition(
    inner: &Rc<RefCell<EngineInner>>,
    scheduler: &FrameScheduler,
    result: Result<SpectrumSource, ErrorKind>,
) {
    {
        let mut e = inner.borrow_mut();
        match result {
            Ok(mut source) => {
                if !e.machine.acquisition_succeeded() {
                    // the user stopped while the permission prompt was up
                    source.close();
                } else {
                    let count = e
                        .options
                        .particle_count
                        .unwrap_or_else(|| responsive_particle_count(&e.viewport));
                    let seed = e.options.seed.unwrap_or_else(rand::random);
                    log::info!("session started: {count} dots over {} bins", source.bin_count());
                    e.field = Some(ParticleField::create(count, source.bin_count(), seed));
                    e.source = Some(source);
                    e.session_start = Some(Instant::now());
                }
            }
            Err(kind) => {
                log::error!("acquisition failed: {kind}");
                e.machine.acquisition_failed(kind);
            }
        }
    }
    if inner.borrow().machine.is_active() {
        start_render_loop(inner, scheduler);
    }
    notify_state(inner);
}

fn start_render_loop(inner: &Rc<RefCell<EngineInner>>, scheduler: &FrameScheduler) {
    let tick_inner = inner.clone();
    scheduler.start(move || tick(&tick_inner));
}

/// One frame: snapshot strictly precedes render. Returning false stops the
/// loop; playback state is left alone (surface loss is not user-escalated).
fn tick(inner: &Rc<RefCell<EngineInner>>) -> bool {
    let mut e = inner.borrow_mut();
    let e = &mut *e;
    let (Some(source), Some(field), Some(context), Some(start)) = (
        e.source.as_mut(),
        e.field.as_ref(),
        e.context.as_ref(),
        e.session_start,
    ) else {
        return false;
    };

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let frame = source.snapshot();
    let mut surface = Canvas2dSurface::new(context);
    if e.options.silence_policy == SilencePolicy::RenderWhileAudible && frame.is_silent() {
        field.render_quiescent(&frame, &e.viewport, &mut surface);
    } else {
        field.render(&frame, elapsed_ms, &e.viewport, &mut surface);
    }
    if surface.failed() {
        log::error!("drawing surface lost; stalling render loop");
        return false;
    }
    true
}

/// Shared teardown for explicit stop and natural end-of-signal.
fn teardown(inner: &Rc<RefCell<EngineInner>>, scheduler: &FrameScheduler) {
    scheduler.stop();
    let changed = {
        let mut e = inner.borrow_mut();
        if e.machine.stop() {
            if let Some(mut source) = e.source.take() {
                source.close();
            }
            e.field = None;
            e.session_start = None;
            true
        } else {
            false
        }
    };
    if changed {
        notify_state(inner);
    }
}

fn wire_ended(
    inner: &Rc<RefCell<EngineInner>>,
    scheduler: &FrameScheduler,
    element: &web::HtmlMediaElement,
) {
    let inner = inner.clone();
    let scheduler = scheduler.clone();
    let closure = Closure::wrap(Box::new(move || {
        log::info!("audio ended; stopping session");
        teardown(&inner, &scheduler);
    }) as Box<dyn FnMut()>);
    _ = element.add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn notify_state(inner: &Rc<RefCell<EngineInner>>) {
    // callback cloned out first so re-entrant calls into the engine are safe
    let (callback, state) = {
        let e = inner.borrow();
        (e.on_state_change.clone(), e.machine.state())
    };
    if let Some(callback) = callback {
        _ = callback.call1(&JsValue::NULL, &JsValue::from_str(state.as_str()));
    }
}
