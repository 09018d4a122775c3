//! Background detector for the Konami sequence.
//!
//! Fed a read-only copy of every key press in the process, independent of
//! which widget has focus. It never consumes keys.

/// Toolkit-neutral key identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Other,
}

pub const KONAMI_SEQUENCE: [KeyInput; 10] = [
    KeyInput::Up,
    KeyInput::Up,
    KeyInput::Down,
    KeyInput::Down,
    KeyInput::Left,
    KeyInput::Right,
    KeyInput::Left,
    KeyInput::Right,
    KeyInput::Char('b'),
    KeyInput::Char('a'),
];

#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    progress: usize,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Advance on `key`; true exactly when the sequence just completed.
    ///
    /// A mismatch resets progress, then the same key is tried as step one.
    pub fn observe(&mut self, key: KeyInput) -> bool {
        if key == KONAMI_SEQUENCE[self.progress] {
            self.progress += 1;
            if self.progress == KONAMI_SEQUENCE.len() {
                self.progress = 0;
                return true;
            }
            return false;
        }

        self.progress = usize::from(key == KONAMI_SEQUENCE[0]);
        false
    }
}
