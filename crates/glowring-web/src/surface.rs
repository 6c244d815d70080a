use glam::Vec2;
use glowring_core::{Paint, Surface};
use std::f64::consts::TAU;
use web_sys as web;

// Background wash stops: near-transparent ink at the center, black at the edge.
const WASH_INNER: &str = "rgba(10, 10, 12, 0.18)";
const WASH_OUTER: &str = "rgba(0, 0, 0, 1)";

/// Executes core draw commands against a canvas 2D context.
///
/// The context already carries the device-pixel-ratio transform, so all
/// coordinates here are logical pixels. A rejected command marks the surface
/// failed; the frame loop treats that as transient surface loss and stops.
pub struct Canvas2dSurface<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
    failed: bool,
}

impl<'a> Canvas2dSurface<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d) -> Self {
        Self { ctx, failed: false }
    }

    pub fn failed(&self) -> bool {
        self.failed
    }
}

fn css_color(paint: &Paint) -> String {
    match paint {
        Paint::Hsl {
            hue,
            saturation,
            lightness,
        } => format!("hsl({hue:.1}, {saturation:.1}%, {lightness:.1}%)"),
        Paint::Rgba {
            red,
            green,
            blue,
            alpha,
        } => format!("rgba({red}, {green}, {blue}, {alpha:.3})"),
    }
}

impl Surface for Canvas2dSurface<'_> {
    fn vignette(&mut self, center: Vec2, inner_radius: f32, outer_radius: f32, size: Vec2) {
        let (cx, cy) = (center.x as f64, center.y as f64);
        match self.ctx.create_radial_gradient(
            cx,
            cy,
            inner_radius as f64,
            cx,
            cy,
            outer_radius as f64,
        ) {
            Ok(gradient) => {
                _ = gradient.add_color_stop(0.0, WASH_INNER);
                _ = gradient.add_color_stop(1.0, WASH_OUTER);
                self.ctx.set_shadow_blur(0.0);
                self.ctx.set_fill_style_canvas_gradient(&gradient);
                self.ctx
                    .fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
            }
            Err(_) => self.failed = true,
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint, glow_blur: f32) {
        let color = css_color(&paint);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            self.failed = true;
            return;
        }
        self.ctx.set_fill_style_str(&color);
        if glow_blur > 0.0 {
            self.ctx.set_shadow_blur(glow_blur as f64);
            self.ctx.set_shadow_color(&color);
        } else {
            self.ctx.set_shadow_blur(0.0);
        }
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, paint: Paint, line_width: f32) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            self.failed = true;
            return;
        }
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_stroke_style_str(&css_color(&paint));
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }
}
