pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const PAUSE_DELAY_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

/// Typed-text buffer cycling through a list of strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    pub text_index: usize,
    pub current_text: String,
    pub phase: Phase,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self {
            text_index: 0,
            current_text: String::new(),
            phase: Phase::Typing,
        }
    }
}

impl Typewriter {
    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    /// How long to wait before the next `tick`.
    pub fn delay_ms(&self) -> u32 {
        match self.phase {
            Phase::Typing => TYPE_DELAY_MS,
            Phase::Pausing => PAUSE_DELAY_MS,
            Phase::Deleting => DELETE_DELAY_MS,
        }
    }

    pub fn tick(&self, texts: &[&str]) -> Self {
        if texts.is_empty() {
            return self.clone();
        }
        let index = self.text_index % texts.len();
        let full = texts[index];
        let typed = self.current_text.chars().count();

        match self.phase {
            Phase::Typing => {
                let current_text: String = full.chars().take(typed + 1).collect();
                let phase = if current_text == full {
                    Phase::Pausing
                } else {
                    Phase::Typing
                };
                Self {
                    text_index: index,
                    current_text,
                    phase,
                }
            }
            Phase::Pausing => Self {
                text_index: index,
                current_text: self.current_text.clone(),
                phase: Phase::Deleting,
            },
            Phase::Deleting => {
                let current_text: String =
                    full.chars().take(typed.saturating_sub(1)).collect();
                if current_text.is_empty() {
                    Self {
                        text_index: (index + 1) % texts.len(),
                        current_text,
                        phase: Phase::Typing,
                    }
                } else {
                    Self {
                        text_index: index,
                        current_text,
                        phase: Phase::Deleting,
                    }
                }
            }
        }
    }
}
