#![cfg(target_arch = "wasm32")]
//! Web bindings for the glowring visualizer.
//!
//! Exposes [`Visualizer`] to JS: mount a canvas into a container, start a
//! microphone or media-element session, stop it, observe playback state. All
//! rendering logic lives in `glowring-core`; this crate only adapts it to
//! AnalyserNode, canvas 2D and requestAnimationFrame.

use wasm_bindgen::prelude::*;

mod audio;
mod dom;
mod engine;
mod frame;
mod surface;

pub use engine::Visualizer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glowring-web loaded");
    Ok(())
}
