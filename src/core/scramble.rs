use rand::Rng;

pub const SCRAMBLE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SCRAMBLE_INTERVAL_MS: u32 = 40;
pub const RESOLVE_INTERVAL_MS: u32 = 60;
pub const MAX_SCRAMBLES: u32 = 8;
pub const SETTLE_DELAY_MS: u32 = 100;
pub const RESTORE_DELAY_MS: u32 = 600;
pub const HOVER_DELAY_MS: u32 = 300;
pub const HERO_START_DELAY_MS: u32 = 1200;
pub const START_DELAY_MS: u32 = 800;
pub const STAGGER_MS: u32 = 150;

const NBSP: char = '\u{00A0}';

/// Initial delay for the `index`-th scrambling element on the page.
pub fn start_delay_ms(index: usize, hero: bool) -> u32 {
    let base = if hero {
        HERO_START_DELAY_MS
    } else {
        START_DELAY_MS
    };
    base + index as u32 * STAGGER_MS
}

pub fn random_letter<R: Rng>(rng: &mut R) -> char {
    SCRAMBLE_ALPHABET[rng.gen_range(0..SCRAMBLE_ALPHABET.len())] as char
}

/// Text that flickers through random letters and resolves left to right.
#[derive(Clone, Debug)]
pub struct Scrambler {
    original: Vec<char>,
    display: Vec<char>,
    resolved: usize,
    scrambles: u32,
}

impl Scrambler {
    pub fn new<R: Rng>(text: &str, rng: &mut R) -> Self {
        let original: Vec<char> = text.chars().collect();
        let display = original
            .iter()
            .map(|&c| if c == ' ' { NBSP } else { random_letter(rng) })
            .collect();
        Self {
            original,
            display,
            resolved: 0,
            scrambles: 0,
        }
    }

    pub fn original(&self) -> String {
        self.original.iter().collect()
    }

    /// Characters as currently shown, spaces as non-breaking spaces.
    pub fn display(&self) -> &[char] {
        &self.display
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved >= self.original.len()
    }

    /// Re-roll every unresolved letter. Returns false once scrambling is over.
    pub fn scramble<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.is_resolved() || self.scrambles >= MAX_SCRAMBLES {
            return false;
        }
        for (shown, &c) in self.display[self.resolved..]
            .iter_mut()
            .zip(&self.original[self.resolved..])
        {
            if c != ' ' {
                *shown = random_letter(rng);
            }
        }
        self.scrambles += 1;
        true
    }

    /// Lock in the next character. Returns false once everything is resolved.
    pub fn resolve_next(&mut self) -> bool {
        let Some(&c) = self.original.get(self.resolved) else {
            return false;
        };
        self.display[self.resolved] = if c == ' ' { NBSP } else { c };
        self.resolved += 1;
        true
    }
}
