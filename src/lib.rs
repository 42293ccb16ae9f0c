// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod config;
pub mod drill;
pub mod language;
pub mod row;
pub mod runtime;
pub mod session;
pub mod summary;
pub mod ui;
pub mod word_generator;

use crate::drill::Drill;
use crate::language::Language;
use crate::session::SessionConfig;
use crate::word_generator::{WordGenConfig, WordGenerator, WordSource};

/// Interval between ticks driving the countdown and redraws.
pub const TICK_RATE_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Typing,
    Results,
}

/// Settings resolved from the config file with CLI overrides applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeSettings {
    pub number_of_words: usize,
    pub number_of_secs: f64,
    pub row_width: usize,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            number_of_words: 350,
            number_of_secs: 60.0,
            row_width: 60,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub settings: RuntimeSettings,
    pub language: Language,
    pub drill: Drill,
    pub state: AppState,
}

impl App {
    pub fn new(settings: RuntimeSettings, language: Language) -> Self {
        let drill = build_drill(&settings, &language);
        Self {
            settings,
            language,
            drill,
            state: AppState::Typing,
        }
    }

    /// Discards the current rows and counters, regenerates the word rows, and
    /// returns to an idle test with a full countdown.
    pub fn reset(&mut self) {
        self.drill = build_drill(&self.settings, &self.language);
        self.state = AppState::Typing;
    }
}

fn build_drill(settings: &RuntimeSettings, source: &dyn WordSource) -> Drill {
    let generator = WordGenerator::new(WordGenConfig {
        number_of_words: settings.number_of_words,
        row_width: settings.row_width,
    });
    Drill::new(
        generator.generate_rows(source),
        SessionConfig {
            number_of_secs: settings.number_of_secs,
        },
    )
}
