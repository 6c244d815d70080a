//! Platform-independent core of the glowring visualizer.
//!
//! Everything here compiles and tests on the host: the particle field and its
//! deterministic draw-command generation, viewport measurement, the playback
//! state machine and the frame-loop admission gate. The `glowring-web` crate
//! binds these to the web platform (AnalyserNode, canvas 2D,
//! requestAnimationFrame).

pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod particles;
pub mod sched;
pub mod spectrum;
pub mod state;
pub mod viewport;

pub use config::*;
pub use draw::*;
pub use error::*;
pub use particles::*;
pub use sched::*;
pub use spectrum::*;
pub use state::*;
pub use viewport::*;
