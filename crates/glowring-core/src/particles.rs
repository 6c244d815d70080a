use crate::constants::*;
use crate::draw::{Paint, Surface};
use crate::spectrum::SpectrumFrame;
use crate::viewport::ViewportState;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One dot on the ring. All fields are fixed at creation; the live position,
/// size and color are derived every frame and never stored.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Exact uniform spread: particle `i` of `n` sits at `i/n * 2π`.
    pub angle_offset: f32,
    /// Frequency bin this dot listens to, fixed from the source's bin count.
    pub bin_index: usize,
    pub base_radius: f32,
    pub size_base: f32,
    /// Resting hue in [0, 360); rotated further by amplitude per frame.
    pub hue: f32,
    /// Rotation speed multiplier.
    pub speed: f32,
    /// Per-particle time offset for the idle sine motion.
    pub phase: f32,
}

/// A fixed-count set of procedurally parameterized dots.
///
/// Created fresh (with fresh randomness) each time playback starts and
/// discarded when it stops. Rendering is a pure function of the field, the
/// spectrum frame, elapsed time and the viewport.
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Build `count` particles spread uniformly over the ring.
    ///
    /// `bin_count` is the source handle's fixed bin count, so frame indices
    /// map consistently to bins for the whole session. The seed pins all
    /// per-particle randomness, which keeps render output reproducible.
    pub fn create(count: usize, bin_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut particles = Vec::with_capacity(count);
        for i in 0..count {
            particles.push(Particle {
                angle_offset: i as f32 / count as f32 * TAU,
                bin_index: i * bin_count / count,
                base_radius: BASE_RADIUS_MIN + rng.gen::<f32>() * BASE_RADIUS_JITTER,
                size_base: SIZE_BASE_MIN + rng.gen::<f32>() * SIZE_BASE_JITTER,
                hue: i as f32 / count as f32 * 360.0,
                speed: SPEED_MIN + rng.gen::<f32>() * SPEED_JITTER,
                phase: rng.gen::<f32>() * TAU,
            });
        }
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Draw one full frame: wash, dots (glow plus bright core each), halo.
    pub fn render(
        &self,
        frame: &SpectrumFrame,
        elapsed_ms: f64,
        viewport: &ViewportState,
        surface: &mut impl Surface,
    ) {
        let center = viewport.center();
        self.wash(viewport, surface);

        let t = elapsed_ms as f32;
        for p in &self.particles {
            let amplitude = frame.amplitude(p.bin_index);

            // amplitude dominates the radial pulse; the sine term keeps the
            // ring breathing through silence
            let radius = p.base_radius
                * (1.0
                    + amplitude * AMPLITUDE_WEIGHT
                    + (t / IDLE_PERIOD_MS + p.phase).sin() * IDLE_WEIGHT);
            let angle = p.angle_offset + t * ANGULAR_SPEED_RAD_PER_MS * p.speed;
            let pos = center + radius * Vec2::new(angle.cos(), angle.sin());

            let paint = Paint::Hsl {
                hue: (p.hue + amplitude * HUE_SPREAD_DEG) % 360.0,
                saturation: SATURATION_PCT,
                lightness: LIGHTNESS_BASE_PCT + amplitude * LIGHTNESS_SPAN_PCT,
            };
            let size = (p.size_base + amplitude * SIZE_GAIN).max(SIZE_FLOOR);
            surface.fill_circle(pos, size, paint, GLOW_BLUR_BASE + amplitude * GLOW_BLUR_GAIN);

            // small brighter core on top of the glow
            surface.fill_circle(
                pos,
                (size * CORE_SIZE_FRACTION).max(CORE_RADIUS_MIN),
                Paint::Rgba {
                    red: 255,
                    green: 255,
                    blue: 255,
                    alpha: CORE_ALPHA_BASE + amplitude * CORE_ALPHA_GAIN,
                },
                0.0,
            );
        }

        self.halo(frame, viewport, surface);
    }

    /// Silent-policy frame: wash and halo only, no dot pass.
    pub fn render_quiescent(
        &self,
        frame: &SpectrumFrame,
        viewport: &ViewportState,
        surface: &mut impl Surface,
    ) {
        self.wash(viewport, surface);
        self.halo(frame, viewport, surface);
    }

    fn wash(&self, viewport: &ViewportState, surface: &mut impl Surface) {
        surface.vignette(
            viewport.center(),
            BASE_RADIUS_MIN * VIGNETTE_INNER_FRACTION,
            viewport.max_dimension(),
            viewport.logical_size(),
        );
    }

    fn halo(&self, frame: &SpectrumFrame, viewport: &ViewportState, surface: &mut impl Surface) {
        let avg = frame.average();
        surface.stroke_circle(
            viewport.center(),
            HALO_RADIUS_BASE + avg * HALO_RADIUS_GAIN,
            Paint::Rgba {
                red: HALO_RGB[0],
                green: HALO_RGB[1],
                blue: HALO_RGB[2],
                alpha: (HALO_ALPHA_BASE + avg * HALO_ALPHA_GAIN).min(1.0),
            },
            HALO_WIDTH_BASE + avg * HALO_WIDTH_GAIN,
        );
    }
}
