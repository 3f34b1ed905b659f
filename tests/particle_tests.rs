// Host-side tests for the particle text state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod glyphs {
        include!("../src/core/glyphs.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use crate::core::glyphs::GlyphSource;
use crate::core::particles::*;
use glam::Vec2;
use std::collections::HashMap;

/// Fixed target sets per word instead of rasterized text.
#[derive(Default)]
struct Shapes {
    by_word: HashMap<String, Vec<Vec2>>,
    requests: Vec<String>,
}

impl Shapes {
    fn with(mut self, word: &str, targets: Vec<Vec2>) -> Self {
        self.by_word.insert(word.to_string(), targets);
        self
    }
}

impl GlyphSource for Shapes {
    fn targets_for(&mut self, word: &str) -> Vec<Vec2> {
        self.requests.push(word.to_string());
        self.by_word.get(word).cloned().unwrap_or_default()
    }
}

fn line(n: usize) -> Vec<Vec2> {
    (0..n).map(|i| Vec2::new(i as f32 * 4.0 - 20.0, 0.0)).collect()
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn engine_ab() -> (ParticleText, Shapes) {
    let shapes = Shapes::default().with("A", line(3)).with("B", line(5));
    let engine = ParticleText::new(
        words(&["A", "B"]),
        Vec2::new(400.0, 200.0),
        ParticleParams::default(),
        42,
    );
    (engine, shapes)
}

#[test]
fn empty_word_list_falls_back_to_defaults() {
    let engine = ParticleText::new(Vec::new(), Vec2::splat(100.0), ParticleParams::default(), 1);
    assert_eq!(engine.words().len(), 5);
    assert_eq!(engine.current_word(), "BLOCKCHAIN");
}

#[test]
fn start_samples_first_word_and_enters_assemble() {
    let (mut engine, mut shapes) = engine_ab();
    engine.start(&mut shapes);
    assert_eq!(shapes.requests, vec!["A".to_string()]);
    assert_eq!(engine.particles.len(), 3);
    assert_eq!(engine.phase(), ParticlePhase::Assemble);
    for p in &engine.particles {
        assert_eq!(p.opacity, 0.0);
        assert_eq!(p.vel, Vec2::ZERO);
        assert!(p.pos.x >= 0.0 && p.pos.x <= 400.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 200.0);
    }
}

#[test]
fn phase_cycle_tick_counts() {
    let (mut engine, mut shapes) = engine_ab();
    engine.start(&mut shapes);

    for _ in 0..66 {
        assert_eq!(engine.tick(&mut shapes), None);
    }
    assert_eq!(engine.phase(), ParticlePhase::Assemble);
    engine.tick(&mut shapes);
    assert_eq!(engine.phase(), ParticlePhase::Hold);

    for _ in 0..399 {
        engine.tick(&mut shapes);
    }
    assert_eq!(engine.phase(), ParticlePhase::Hold);
    engine.tick(&mut shapes);
    assert_eq!(engine.phase(), ParticlePhase::Dissolve);

    for _ in 0..55 {
        assert_eq!(engine.tick(&mut shapes), None);
    }
    assert_eq!(engine.phase(), ParticlePhase::Dissolve);
    assert_eq!(engine.tick(&mut shapes), Some(1));
    assert_eq!(engine.phase(), ParticlePhase::Assemble);
    assert_eq!(engine.word_index(), 1);
    assert_eq!(engine.current_word(), "B");
    assert_eq!(engine.particles.len(), 5);
}

#[test]
fn word_index_wraps_around_list() {
    let (mut engine, mut shapes) = engine_ab();
    engine.start(&mut shapes);
    let mut changes = Vec::new();
    for _ in 0..(2 * (67 + 400 + 56)) {
        if let Some(i) = engine.tick(&mut shapes) {
            changes.push(i);
        }
    }
    assert_eq!(changes, vec![1, 0]);
    assert_eq!(engine.current_word(), "A");
    assert_eq!(shapes.requests, vec!["A", "B", "A"]);
}

#[test]
fn assemble_first_tick_matches_eased_spring() {
    let params = ParticleParams {
        assemble_rate: 0.5,
        ..ParticleParams::default()
    };
    let mut shapes = Shapes::default()
        .with("A", vec![Vec2::ZERO])
        .with("B", vec![Vec2::ZERO]);
    let mut engine = ParticleText::new(words(&["A", "B"]), Vec2::new(100.0, 100.0), params, 9);
    engine.start(&mut shapes);
    engine.particles[0].pos = Vec2::new(40.0, 50.0); // 10px left of center

    engine.tick(&mut shapes);
    let p = engine.particles[0];
    assert!((p.vel.x - 0.36).abs() < 1e-5, "vel {}", p.vel.x);
    assert!(p.vel.y.abs() < 1e-6);
    assert!((p.pos.x - 40.36).abs() < 1e-4, "pos {}", p.pos.x);
    assert!((p.opacity - 0.03).abs() < 1e-6);
}

#[test]
fn assemble_converges_particles_onto_targets() {
    let (mut engine, mut shapes) = engine_ab();
    engine.start(&mut shapes);
    for _ in 0..(67 + 300) {
        engine.tick(&mut shapes);
    }
    let center = engine.center();
    for p in &engine.particles {
        assert!((p.pos - (center + p.base)).length() < 1.0);
        assert_eq!(p.opacity, 1.0);
    }
}

fn holding_engine() -> (ParticleText, Shapes) {
    let params = ParticleParams {
        assemble_rate: 1.0,
        ..ParticleParams::default()
    };
    let mut shapes = Shapes::default().with("A", vec![Vec2::ZERO]);
    let mut engine = ParticleText::new(words(&["A"]), Vec2::new(200.0, 200.0), params, 5);
    engine.start(&mut shapes);
    engine.particles[0].pos = engine.center();
    engine.tick(&mut shapes);
    assert_eq!(engine.phase(), ParticlePhase::Hold);
    (engine, shapes)
}

#[test]
fn hold_pointer_repels_nearby_particles() {
    let (mut engine, mut shapes) = holding_engine();
    let center = engine.center();
    engine.set_pointer(Some(center - Vec2::new(10.0, 0.0)));
    engine.tick(&mut shapes);

    let p = engine.particles[0];
    let force = (150.0 - 10.0) / 150.0 * 0.3;
    let expected = 10.0 * force * 0.001 * 0.95;
    assert!((p.vel.x - expected).abs() < 1e-6, "vel {}", p.vel.x);
    assert!(p.pos.x > center.x);
}

#[test]
fn hold_ignores_distant_pointer() {
    let (mut engine, mut shapes) = holding_engine();
    let center = engine.center();
    engine.set_pointer(Some(center + Vec2::new(0.0, 150.0)));
    engine.tick(&mut shapes);
    assert_eq!(engine.particles[0].vel, Vec2::ZERO);
    assert_eq!(engine.particles[0].pos, center);
}

#[test]
fn hold_pulls_displaced_particle_back() {
    let (mut engine, mut shapes) = holding_engine();
    let center = engine.center();
    engine.particles[0].pos = center + Vec2::new(20.0, 0.0);
    engine.tick(&mut shapes);
    assert!((engine.particles[0].pos.x - (center.x + 18.0)).abs() < 1e-4);
}

#[test]
fn dissolve_fades_to_zero_and_never_below() {
    let (mut engine, mut shapes) = engine_ab();
    engine.start(&mut shapes);
    for _ in 0..(67 + 400) {
        engine.tick(&mut shapes);
    }
    assert_eq!(engine.phase(), ParticlePhase::Dissolve);
    for _ in 0..41 {
        engine.tick(&mut shapes);
    }
    for p in &engine.particles {
        assert_eq!(p.opacity, 0.0);
    }
}

#[test]
fn retarget_grows_with_fresh_invisible_particles() {
    let (mut engine, mut shapes) = engine_ab();
    engine.start(&mut shapes);
    for p in engine.particles.iter_mut() {
        p.vel = Vec2::new(3.0, -2.0);
        p.opacity = 0.8;
    }
    let old: Vec<Vec2> = engine.particles.iter().map(|p| p.pos).collect();

    engine.retarget(&line(7));
    assert_eq!(engine.particles.len(), 7);
    for (i, p) in engine.particles.iter().enumerate() {
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.base, line(7)[i]);
        if i < old.len() {
            assert_eq!(p.pos, old[i], "survivors keep their position");
            assert_eq!(p.opacity, 0.8);
        } else {
            assert_eq!(p.opacity, 0.0);
            assert!(p.pos.x >= 0.0 && p.pos.x <= 400.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 200.0);
        }
    }
    assert_eq!(engine.phase(), ParticlePhase::Assemble);
    assert_eq!(engine.progress(), 0.0);
}

#[test]
fn retarget_truncates_excess_particles() {
    let (mut engine, mut shapes) = engine_ab();
    engine.start(&mut shapes);
    engine.retarget(&line(9));
    for p in engine.particles.iter_mut() {
        p.vel = Vec2::ONE;
    }
    engine.retarget(&line(2));
    assert_eq!(engine.particles.len(), 2);
    assert!(engine.particles.iter().all(|p| p.vel == Vec2::ZERO));
}

#[test]
fn same_seed_gives_same_animation() {
    let run = || {
        let (mut engine, mut shapes) = engine_ab();
        engine.start(&mut shapes);
        for _ in 0..600 {
            engine.tick(&mut shapes);
        }
        engine.particles.clone()
    };
    assert_eq!(run(), run());
}
