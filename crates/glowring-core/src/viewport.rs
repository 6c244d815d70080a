use crate::constants::{MIN_LOGICAL_HEIGHT, MIN_LOGICAL_WIDTH};
use glam::Vec2;

/// Logical (CSS px) and backing (device px) dimensions of the drawing surface.
///
/// Always produced whole by [`ViewportState::measure`]; the backing dimensions
/// are the logical ones scaled by the device pixel ratio and floored, so the
/// two never disagree mid-resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub logical_width: f32,
    pub logical_height: f32,
    pub device_pixel_ratio: f64,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl ViewportState {
    /// Derive a viewport from a container's rendered CSS size.
    ///
    /// Floors of 300x150 avoid degenerate canvases while a layout is still
    /// settling; a non-finite or non-positive pixel ratio falls back to 1.
    pub fn measure(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let logical_width = (css_width as f32).max(MIN_LOGICAL_WIDTH);
        let logical_height = (css_height as f32).max(MIN_LOGICAL_HEIGHT);
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            logical_width,
            logical_height,
            device_pixel_ratio: dpr,
            backing_width: (logical_width as f64 * dpr).floor() as u32,
            backing_height: (logical_height as f64 * dpr).floor() as u32,
        }
    }

    /// Center of the surface in logical pixels; the particle ring's origin.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.logical_width / 2.0, self.logical_height / 2.0)
    }

    pub fn logical_size(&self) -> Vec2 {
        Vec2::new(self.logical_width, self.logical_height)
    }

    pub fn max_dimension(&self) -> f32 {
        self.logical_width.max(self.logical_height)
    }
}
