use crate::config::Config;
use crate::i18n::Dictionary;
use crate::patterns::Grid;

/// A pattern produced from submitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPattern {
    pub text: String,
    pub grid: Grid,
}

pub struct SharedState {
    pub config: Config,
    pub dictionary: Dictionary,
    /// Generated patterns, newest first
    pub history: Vec<GeneratedPattern>,
}

impl SharedState {
    pub fn new(config: Config, dictionary: Dictionary) -> Self {
        Self {
            config,
            dictionary,
            history: Vec::new(),
        }
    }

    /// The pattern on the canvas.
    pub fn current(&self) -> Option<&GeneratedPattern> {
        self.history.first()
    }

    /// Put a new pattern on the canvas, trimming the history to the
    /// configured limit.
    pub fn push_pattern(&mut self, pattern: GeneratedPattern) {
        self.history.insert(0, pattern);
        self.history.truncate(self.config.history_limit.max(1));
    }
}
