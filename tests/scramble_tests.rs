// Host-side tests for the hyper-text scrambler.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scramble {
    include!("../src/core/scramble.rs");
}

use rand::prelude::*;
use scramble::*;

fn shown(s: &Scrambler) -> String {
    s.display().iter().collect()
}

#[test]
fn spaces_render_as_nbsp_and_never_scramble() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = Scrambler::new("AB CD", &mut rng);
    for _ in 0..MAX_SCRAMBLES {
        s.scramble(&mut rng);
        assert_eq!(s.display()[2], '\u{00A0}');
        assert!(s
            .display()
            .iter()
            .enumerate()
            .all(|(i, c)| i == 2 || c.is_ascii_uppercase()));
    }
}

#[test]
fn scrambling_stops_after_limit() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut s = Scrambler::new("HELLO WORLD", &mut rng);
    let rounds = std::iter::from_fn(|| s.scramble(&mut rng).then_some(())).count();
    assert_eq!(rounds as u32, MAX_SCRAMBLES);
}

#[test]
fn resolves_left_to_right_to_original() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = Scrambler::new("Go now", &mut rng);
    for i in 0..6 {
        assert!(!s.is_resolved());
        assert!(s.resolve_next());
        let prefix: String = shown(&s).chars().take(i + 1).collect();
        let expected: String = "Go\u{00A0}now".chars().take(i + 1).collect();
        assert_eq!(prefix, expected);
    }
    assert!(s.is_resolved());
    assert!(!s.resolve_next());
    assert_eq!(s.original(), "Go now");
}

#[test]
fn resolved_prefix_is_not_rescrambled() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut s = Scrambler::new("xyz", &mut rng);
    s.resolve_next();
    s.resolve_next();
    s.scramble(&mut rng);
    assert_eq!(&s.display()[..2], &['x', 'y']);
}

#[test]
fn start_delays_are_staggered() {
    assert_eq!(start_delay_ms(0, false), 800);
    assert_eq!(start_delay_ms(2, false), 1100);
    assert_eq!(start_delay_ms(1, true), 1350);
}
