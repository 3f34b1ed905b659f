// Host-side tests for the splash timeline.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod preloader {
    include!("../src/core/preloader.rs");
}

use preloader::*;

#[test]
fn two_word_timeline_in_order() {
    let steps: Vec<(u32, Cue)> = PreloaderTimeline::new(2).collect();
    assert_eq!(
        steps,
        vec![
            (0, Cue::SetWord(0)),
            (50, Cue::Reveal),
            (450, Cue::Conceal),
            (200, Cue::SetWord(1)),
            (50, Cue::Reveal),
            (800, Cue::BeginExit),
            (1000, Cue::Complete),
        ]
    );
}

#[test]
fn every_word_is_shown_once() {
    let shown: Vec<usize> = PreloaderTimeline::new(PRELOADER_WORDS.len())
        .filter_map(|(_, cue)| match cue {
            Cue::SetWord(i) => Some(i),
            _ => None,
        })
        .collect();
    assert_eq!(shown, vec![0, 1, 2, 3]);
}

#[test]
fn total_duration_for_default_words() {
    let timeline = PreloaderTimeline::new(PRELOADER_WORDS.len());
    assert_eq!(timeline.total_ms(), 3 * 700 + 850 + 1000);
    // total_ms does not consume the timeline
    assert_eq!(timeline.count(), 4 * 2 + 3 + 2);
}

#[test]
fn empty_word_list_goes_straight_to_exit() {
    let steps: Vec<Cue> = PreloaderTimeline::new(0).map(|(_, c)| c).collect();
    assert_eq!(steps, vec![Cue::BeginExit, Cue::Complete]);
}

#[test]
fn completion_is_final() {
    let mut t = PreloaderTimeline::new(1);
    let last = t.by_ref().last();
    assert_eq!(last, Some((1000, Cue::Complete)));
    assert_eq!(t.next(), None);
}
