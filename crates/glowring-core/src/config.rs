use crate::constants::{RESPONSIVE_DOT_DIVISOR, RESPONSIVE_DOT_MIN};
use crate::viewport::ViewportState;

/// What the dot pass does while a frame carries no spectral energy.
///
/// Source material disagrees on this, so it is an explicit knob rather than a
/// guess: one lineage keeps the ring breathing on its idle sine term whenever
/// a capture session is open, the other draws dots only while something is
/// audible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SilencePolicy {
    /// Keep animating from the idle sine term while the session is open.
    KeepRendering,
    /// Skip the dot pass on fully silent frames; wash and halo still paint.
    RenderWhileAudible,
}

/// Per-instance configuration, owned by the engine rather than ambient.
#[derive(Clone, Debug)]
pub struct VisualizerOptions {
    /// `None` picks a responsive count from the viewport at session start.
    pub particle_count: Option<usize>,
    /// `None` draws a fresh seed per session; pin it for reproducible fields.
    pub seed: Option<u64>,
    pub silence_policy: SilencePolicy,
}

impl Default for VisualizerOptions {
    fn default() -> Self {
        Self {
            particle_count: None,
            seed: None,
            silence_policy: SilencePolicy::KeepRendering,
        }
    }
}

/// Dot count scaled to viewport width, with a floor for narrow layouts.
pub fn responsive_particle_count(viewport: &ViewportState) -> usize {
    ((viewport.logical_width / RESPONSIVE_DOT_DIVISOR) as usize).max(RESPONSIVE_DOT_MIN)
}
