pub const PRELOADER_WORDS: [&str; 4] = ["Hello", "Hola", "Ciao", "こんにちは"];
pub const PRELOADER_FLAG: &str = "preloader-complete";

// Timeline gaps in milliseconds
pub const REVEAL_DELAY_MS: u32 = 50;
pub const WORD_HOLD_MS: u32 = 450;
pub const WORD_GAP_MS: u32 = 200;
pub const EXIT_DELAY_MS: u32 = 350;
pub const EXIT_DURATION_MS: u32 = 1000;

/// One visible change in the splash sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Swap in the word at this index, hidden.
    SetWord(usize),
    /// Fade the current word in.
    Reveal,
    /// Fade the current word out.
    Conceal,
    /// Start the exit transition on the whole splash.
    BeginExit,
    /// Persist the session flag and remove the splash.
    Complete,
}

/// Timeline of the one-time splash. Yields `(delay_ms, cue)` where the delay
/// is measured from the previous cue.
#[derive(Clone, Debug)]
pub struct PreloaderTimeline {
    word_count: usize,
    word: usize,
    last: Option<Cue>,
}

impl PreloaderTimeline {
    pub fn new(word_count: usize) -> Self {
        Self {
            word_count,
            word: 0,
            last: None,
        }
    }

    /// Total duration from the first cue to completion.
    pub fn total_ms(&self) -> u32 {
        self.clone().map(|(delay, _)| delay).sum()
    }
}

impl Iterator for PreloaderTimeline {
    type Item = (u32, Cue);

    fn next(&mut self) -> Option<Self::Item> {
        let step = match self.last {
            None if self.word_count == 0 => (EXIT_DELAY_MS, Cue::BeginExit),
            None => (0, Cue::SetWord(0)),
            Some(Cue::SetWord(_)) => (REVEAL_DELAY_MS, Cue::Reveal),
            Some(Cue::Reveal) if self.word + 1 < self.word_count => (WORD_HOLD_MS, Cue::Conceal),
            Some(Cue::Reveal) => (WORD_HOLD_MS + EXIT_DELAY_MS, Cue::BeginExit),
            Some(Cue::Conceal) => {
                self.word += 1;
                (WORD_GAP_MS, Cue::SetWord(self.word))
            }
            Some(Cue::BeginExit) => (EXIT_DURATION_MS, Cue::Complete),
            Some(Cue::Complete) => return None,
        };
        self.last = Some(step.1);
        Some(step)
    }
}
