use crate::constants::*;
use crate::core::{Cue, PreloaderTimeline, PRELOADER_FLAG, PRELOADER_WORDS};
use crate::dom::{self, SessionFlags};
use web_sys as web;

struct Splash {
    document: web::Document,
    root: web::Element,
    word: web::Element,
    flags: SessionFlags,
}

impl Splash {
    /// Apply one cue. Returns false when the sequence should stop.
    fn apply(&self, cue: Cue) -> bool {
        match cue {
            Cue::SetWord(i) => {
                if !self.word.is_connected() {
                    return false;
                }
                self.word
                    .set_text_content(PRELOADER_WORDS.get(i).copied());
                dom::set_class(&self.word, CLASS_VISIBLE, false);
            }
            Cue::Reveal => {
                if !self.word.is_connected() {
                    return false;
                }
                dom::set_class(&self.word, CLASS_VISIBLE, true);
            }
            Cue::Conceal => {
                if !self.word.is_connected() {
                    return false;
                }
                dom::set_class(&self.word, CLASS_VISIBLE, false);
            }
            Cue::BeginExit => {
                if !self.root.is_connected() {
                    return false;
                }
                dom::set_class(&self.root, CLASS_EXITING, true);
            }
            Cue::Complete => {
                self.flags.set(PRELOADER_FLAG, true);
                self.root.remove();
                dom::body_class(&self.document, CLASS_PRELOADER_ACTIVE, false);
                log::info!("[preloader] complete");
            }
        }
        true
    }
}

fn run(splash: Splash, mut timeline: PreloaderTimeline) {
    let Some((delay, cue)) = timeline.next() else {
        return;
    };
    let step = move || {
        if splash.apply(cue) {
            run(splash, timeline);
        } else {
            log::info!("[preloader] detached; sequence stopped");
        }
    };
    if delay == 0 {
        step();
    } else {
        dom::set_timeout(delay as i32, step);
    }
}

/// Play the splash once per browsing session.
pub fn init(document: &web::Document) {
    let (Some(root), Some(word)) = (
        document.get_element_by_id(PRELOADER_ID),
        document.get_element_by_id(PRELOADER_WORD_ID),
    ) else {
        dom::body_class(document, CLASS_PRELOADER_ACTIVE, false);
        return;
    };

    let flags = SessionFlags::open();
    if flags.get(PRELOADER_FLAG) == Some(true) {
        root.remove();
        dom::body_class(document, CLASS_PRELOADER_ACTIVE, false);
        return;
    }

    dom::body_class(document, CLASS_PRELOADER_ACTIVE, true);
    let timeline = PreloaderTimeline::new(PRELOADER_WORDS.len());
    log::info!("[preloader] playing for {} ms", timeline.total_ms());
    run(
        Splash {
            document: document.clone(),
            root,
            word,
            flags,
        },
        timeline,
    );
}
