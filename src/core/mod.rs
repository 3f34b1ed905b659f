pub mod constants;
pub mod glyphs;
pub mod globe;
pub mod integrator;
pub mod marquee;
pub mod particles;
pub mod preloader;
pub mod scramble;
pub mod visibility;

pub use constants::*;
pub use glyphs::{sample_targets, AlphaRaster, GlyphSampling, GlyphSource};
pub use globe::{Globe, GlobeFrame, GlobeViewport};
pub use marquee::Marquee;
pub use particles::{ParticleParams, ParticlePhase, ParticleText, TextParticle};
pub use preloader::{Cue, PreloaderTimeline, PRELOADER_FLAG, PRELOADER_WORDS};
pub use scramble::Scrambler;
pub use visibility::in_view;
