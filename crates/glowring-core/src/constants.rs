/// Viewport and particle-field tuning constants.
///
/// These express intended behavior (floors, weights, periods) and keep magic
/// numbers out of the render path.
// Logical-size floors (CSS px) so a collapsed container never yields a
// degenerate canvas
pub const MIN_LOGICAL_WIDTH: f32 = 300.0;
pub const MIN_LOGICAL_HEIGHT: f32 = 150.0;

// Spectrum analysis window; 256-sample transform yields 128 magnitude bins
pub const FFT_SIZE: u32 = 256;
pub const MAX_BIN_VALUE: f32 = 255.0;

// Dot count selection
pub const DEFAULT_PARTICLE_COUNT: usize = 24;
pub const RESPONSIVE_DOT_MIN: usize = 14;
pub const RESPONSIVE_DOT_DIVISOR: f32 = 18.0;

// Per-particle creation ranges (uniform jitter on top of the minimum)
pub const BASE_RADIUS_MIN: f32 = 50.0;
pub const BASE_RADIUS_JITTER: f32 = 40.0;
pub const SIZE_BASE_MIN: f32 = 3.0;
pub const SIZE_BASE_JITTER: f32 = 5.0;
pub const SPEED_MIN: f32 = 0.6;
pub const SPEED_JITTER: f32 = 1.0;

// Radial pulse weights: spectral energy dominates, the sine term keeps the
// ring moving through silence
pub const AMPLITUDE_WEIGHT: f32 = 0.9;
pub const IDLE_WEIGHT: f32 = 0.06;
pub const IDLE_PERIOD_MS: f32 = 600.0;

// Ring rotation (radians per millisecond, scaled by per-particle speed)
pub const ANGULAR_SPEED_RAD_PER_MS: f32 = 0.0005;

// Color mapping
pub const HUE_SPREAD_DEG: f32 = 120.0;
pub const SATURATION_PCT: f32 = 90.0;
pub const LIGHTNESS_BASE_PCT: f32 = 55.0;
pub const LIGHTNESS_SPAN_PCT: f32 = 10.0;

// Dot sizing and glow
pub const SIZE_GAIN: f32 = 18.0;
pub const SIZE_FLOOR: f32 = 4.0;
pub const GLOW_BLUR_BASE: f32 = 18.0;
pub const GLOW_BLUR_GAIN: f32 = 40.0;
pub const CORE_SIZE_FRACTION: f32 = 0.35;
pub const CORE_RADIUS_MIN: f32 = 1.0;
pub const CORE_ALPHA_BASE: f32 = 0.08;
pub const CORE_ALPHA_GAIN: f32 = 0.12;

// Center halo driven by average energy across all bins
pub const HALO_RADIUS_BASE: f32 = 50.0;
pub const HALO_RADIUS_GAIN: f32 = 60.0;
pub const HALO_ALPHA_BASE: f32 = 0.25;
pub const HALO_ALPHA_GAIN: f32 = 0.6;
pub const HALO_WIDTH_BASE: f32 = 2.0;
pub const HALO_WIDTH_GAIN: f32 = 7.0;
pub const HALO_RGB: [u8; 3] = [66, 133, 244];

// Background wash: inner radius as a fraction of the minimum base ring radius
pub const VIGNETTE_INNER_FRACTION: f32 = 0.3;
