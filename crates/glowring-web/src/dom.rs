use glowring_core::{ErrorKind, ViewportState};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Measure the container's rendered CSS size and the device pixel ratio;
/// floors and backing math live in the core.
pub fn measure_container(container: &web::HtmlElement) -> ViewportState {
    let rect = container.get_bounding_client_rect();
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    ViewportState::measure(rect.width(), rect.height(), dpr)
}

/// Apply a freshly measured viewport: backing buffer in device pixels, CSS
/// size in logical pixels, and one scale transform so every draw call stays
/// in logical units. Replaces the backing buffer, so the frame loop must be
/// stopped around this.
pub fn apply_viewport(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    viewport: &ViewportState,
) {
    canvas.set_width(viewport.backing_width.max(1));
    canvas.set_height(viewport.backing_height.max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.logical_width));
    _ = style.set_property("height", &format!("{}px", viewport.logical_height));
    let dpr = viewport.device_pixel_ratio;
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

/// Create a canvas inside `container` and grab its 2D context.
pub fn create_canvas(
    container: &web::HtmlElement,
) -> Result<(web::HtmlCanvasElement, web::CanvasRenderingContext2d), ErrorKind> {
    let document = web::window()
        .and_then(|w| w.document())
        .ok_or(ErrorKind::SurfaceUnavailable)?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into().ok())
        .ok_or(ErrorKind::SurfaceUnavailable)?;
    container
        .append_child(&canvas)
        .map_err(|_| ErrorKind::SurfaceUnavailable)?;
    let ctx = get_context_2d(&canvas)?;
    Ok((canvas, ctx))
}

pub fn get_context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, ErrorKind> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(ErrorKind::SurfaceUnavailable)
}
