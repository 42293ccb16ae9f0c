use crate::drill::DrillPhase;
use crate::summary::TestSummary;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub number_of_secs: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            number_of_secs: 60.0,
        }
    }
}

/// Mutable per-test state owned by the drill. Starting a fresh drill resets
/// everything here.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub phase: DrillPhase,
    pub seconds_remaining: f64,
    // Cursor of the active token
    pub cursor_row: usize,
    pub cursor_word: usize,
    // What the user has typed for the active word so far
    pub buffer: String,
    // Counters
    pub correct_inputs: usize,
    pub incorrect_inputs: usize,
    pub correct_words: usize,
    pub incorrect_words: usize,
    pub correct_words_char_count: usize,
    // Result snapshot, taken once on the transition into `Finished`
    pub summary: Option<TestSummary>,
}

impl SessionState {
    pub fn new(number_of_secs: f64) -> Self {
        Self {
            phase: DrillPhase::Idle,
            seconds_remaining: number_of_secs,
            cursor_row: 0,
            cursor_word: 0,
            buffer: String::new(),
            correct_inputs: 0,
            incorrect_inputs: 0,
            correct_words: 0,
            incorrect_words: 0,
            correct_words_char_count: 0,
            summary: None,
        }
    }
}
