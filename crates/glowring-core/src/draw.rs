use glam::Vec2;

/// Fill or stroke color. HSL components use CSS ranges (degrees, percent).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Hsl {
        hue: f32,
        saturation: f32,
        lightness: f32,
    },
    Rgba {
        red: u8,
        green: u8,
        blue: u8,
        alpha: f32,
    },
}

/// One drawing operation, in logical-pixel units.
///
/// The renderer emits these in a fixed order per frame, so two renders over
/// identical inputs produce identical sequences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCmd {
    /// Full-surface radial wash, dark at the edges. Painted first each frame
    /// so the previous frame never shows through.
    Vignette {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        size: Vec2,
    },
    /// Filled disc; `glow_blur > 0` asks for a soft shadow in the same color.
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
        glow_blur: f32,
    },
    /// Stroked ring, no glow.
    StrokeCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
        line_width: f32,
    },
}

/// Sink for draw commands. The web crate executes them against a 2D canvas;
/// tests capture them with [`DrawRecorder`].
pub trait Surface {
    fn vignette(&mut self, center: Vec2, inner_radius: f32, outer_radius: f32, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint, glow_blur: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, paint: Paint, line_width: f32);
}

/// Captures the command sequence of a frame for inspection.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    pub commands: Vec<DrawCmd>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for DrawRecorder {
    fn vignette(&mut self, center: Vec2, inner_radius: f32, outer_radius: f32, size: Vec2) {
        self.commands.push(DrawCmd::Vignette {
            center,
            inner_radius,
            outer_radius,
            size,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint, glow_blur: f32) {
        self.commands.push(DrawCmd::FillCircle {
            center,
            radius,
            paint,
            glow_blur,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, paint: Paint, line_width: f32) {
        self.commands.push(DrawCmd::StrokeCircle {
            center,
            radius,
            paint,
            line_width,
        });
    }
}
