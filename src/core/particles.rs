use super::constants::*;
use super::glyphs::GlyphSource;
use glam::Vec2;
use rand::prelude::*;

/// A dot that travels between word shapes.
///
/// `base` is the target offset from the text block's center; the absolute
/// target is recomputed against the canvas center every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub base: Vec2,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticlePhase {
    Assemble,
    Hold,
    Dissolve,
}

/// Per-tick rates and force constants for the word cycle.
#[derive(Clone, Copy, Debug)]
pub struct ParticleParams {
    pub assemble_rate: f32,
    pub hold_rate: f32,
    pub hold_span: f32,
    pub dissolve_rate: f32,
    pub spring: f32,
    pub assemble_damping: f32,
    pub fade_in: f32,
    pub hold_pull: f32,
    pub hold_damping: f32,
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub repel_impulse: f32,
    pub jitter: f32,
    pub jitter_scale: f32,
    pub dissolve_damping: f32,
    pub fade_out: f32,
    pub scatter_speed: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            assemble_rate: ASSEMBLE_RATE,
            hold_rate: HOLD_RATE,
            hold_span: HOLD_SPAN,
            dissolve_rate: DISSOLVE_RATE,
            spring: ASSEMBLE_SPRING,
            assemble_damping: ASSEMBLE_DAMPING,
            fade_in: ASSEMBLE_FADE_IN,
            hold_pull: HOLD_PULL,
            hold_damping: HOLD_DAMPING,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            repel_impulse: REPEL_IMPULSE,
            jitter: DISSOLVE_JITTER,
            jitter_scale: DISSOLVE_JITTER_SCALE,
            dissolve_damping: DISSOLVE_DAMPING,
            fade_out: DISSOLVE_FADE_OUT,
            scatter_speed: SCATTER_SPEED,
        }
    }
}

/// Assemble → Hold → Dissolve cycle over a fixed list of words.
///
/// Typical usage:
/// - Construct with `ParticleText::new(words, bounds, params, seed)`
/// - Call `start(&mut glyphs)` once to sample the first word
/// - Call `tick(&mut glyphs)` every animation frame; it returns the new word
///   index whenever the cycle moves on to the next word
/// - Feed pointer position with `set_pointer` for the hold-phase repulsion
pub struct ParticleText {
    pub particles: Vec<TextParticle>,
    pub params: ParticleParams,
    words: Vec<String>,
    word_index: usize,
    phase: ParticlePhase,
    progress: f32,
    bounds: Vec2,
    pointer: Option<Vec2>,
    rng: StdRng,
}

impl ParticleText {
    pub fn new(words: Vec<String>, bounds: Vec2, params: ParticleParams, seed: u64) -> Self {
        let words = if words.is_empty() {
            DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
        } else {
            words
        };
        Self {
            particles: Vec::new(),
            params,
            words,
            word_index: 0,
            phase: ParticlePhase::Assemble,
            progress: 0.0,
            bounds,
            pointer: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> ParticlePhase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.word_index]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn center(&self) -> Vec2 {
        self.bounds / 2.0
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// Sample the current word and enter Assemble.
    pub fn start<G: GlyphSource>(&mut self, glyphs: &mut G) {
        let targets = glyphs.targets_for(&self.words[self.word_index]);
        self.retarget(&targets);
    }

    /// Point the live set at new targets, growing or truncating it to match.
    /// Positions of surviving particles carry over; every velocity is zeroed.
    pub fn retarget(&mut self, targets: &[Vec2]) {
        let bounds = self.bounds;
        if self.particles.len() > targets.len() {
            self.particles.truncate(targets.len());
        }
        while self.particles.len() < targets.len() {
            let pos = Vec2::new(
                self.rng.gen::<f32>() * bounds.x,
                self.rng.gen::<f32>() * bounds.y,
            );
            self.particles.push(TextParticle {
                pos,
                ..TextParticle::default()
            });
        }
        for (p, base) in self.particles.iter_mut().zip(targets) {
            p.base = *base;
            p.vel = Vec2::ZERO;
        }
        self.phase = ParticlePhase::Assemble;
        self.progress = 0.0;
    }

    /// Advance one frame. Returns the new word index when the cycle wrapped
    /// into the next word.
    pub fn tick<G: GlyphSource>(&mut self, glyphs: &mut G) -> Option<usize> {
        match self.phase {
            ParticlePhase::Assemble => {
                self.progress = (self.progress + self.params.assemble_rate).min(1.0);
                self.assemble_step();
                if self.progress >= 1.0 - PHASE_EPSILON {
                    self.enter(ParticlePhase::Hold);
                }
                None
            }
            ParticlePhase::Hold => {
                self.progress += self.params.hold_rate;
                self.hold_step();
                if self.progress > self.params.hold_span - PHASE_EPSILON {
                    self.enter(ParticlePhase::Dissolve);
                }
                None
            }
            ParticlePhase::Dissolve => {
                self.progress += self.params.dissolve_rate;
                self.dissolve_step();
                if self.progress >= 1.0 - PHASE_EPSILON {
                    Some(self.next_word(glyphs))
                } else {
                    None
                }
            }
        }
    }

    fn enter(&mut self, phase: ParticlePhase) {
        self.phase = phase;
        self.progress = 0.0;
    }

    fn assemble_step(&mut self) {
        let center = self.center();
        let pull = self.params.spring * self.progress;
        let damping = self.params.assemble_damping;
        let fade_in = self.params.fade_in;
        for p in &mut self.particles {
            p.vel += (center + p.base - p.pos) * pull;
            p.vel *= damping;
            p.pos += p.vel;
            p.opacity = (p.opacity + fade_in).min(1.0);
        }
    }

    fn hold_step(&mut self) {
        let center = self.center();
        let pointer = self.pointer;
        let ParticleParams {
            hold_pull,
            hold_damping,
            repel_radius,
            repel_strength,
            repel_impulse,
            ..
        } = self.params;
        for p in &mut self.particles {
            p.pos += (center + p.base - p.pos) * hold_pull;
            // Repulsion lands before damping so it decays with the rest of
            // the velocity on the same tick.
            if let Some(m) = pointer {
                let away = p.pos - m;
                let dist = away.length();
                if dist < repel_radius {
                    let force = (repel_radius - dist) / repel_radius * repel_strength;
                    p.vel += away * force * repel_impulse;
                }
            }
            p.vel *= hold_damping;
            p.pos += p.vel;
        }
    }

    fn dissolve_step(&mut self) {
        let jitter = self.params.jitter;
        let scale = self.params.jitter_scale;
        let damping = self.params.dissolve_damping;
        let fade_out = self.params.fade_out;
        for p in &mut self.particles {
            let nudge = Vec2::new(
                self.rng.gen_range(-jitter..=jitter),
                self.rng.gen_range(-jitter..=jitter),
            );
            p.vel += nudge * scale;
            p.vel *= damping;
            p.pos += p.vel;
            p.opacity = (p.opacity - fade_out).max(0.0);
        }
    }

    fn next_word<G: GlyphSource>(&mut self, glyphs: &mut G) -> usize {
        self.word_index = (self.word_index + 1) % self.words.len();
        let s = self.params.scatter_speed;
        for p in &mut self.particles {
            // Scatter kick; the retarget below zeroes velocity, so it is
            // applied as a single displacement.
            p.vel = Vec2::new(self.rng.gen_range(-s..=s), self.rng.gen_range(-s..=s));
            p.pos += p.vel;
        }
        let targets = glyphs.targets_for(&self.words[self.word_index]);
        self.retarget(&targets);
        self.word_index
    }
}
