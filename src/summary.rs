use crate::session::SessionState;

/// Immutable snapshot of the counters at test end. Created once per
/// completion, read by the results view, discarded on restart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestSummary {
    pub correct_inputs: usize,
    pub incorrect_inputs: usize,
    pub correct_words: usize,
    pub incorrect_words: usize,
    pub correct_words_char_count: usize,
    pub duration_secs: f64,
}

impl TestSummary {
    pub fn snapshot(state: &SessionState, duration_secs: f64) -> Self {
        Self {
            correct_inputs: state.correct_inputs,
            incorrect_inputs: state.incorrect_inputs,
            correct_words: state.correct_words,
            incorrect_words: state.incorrect_words,
            correct_words_char_count: state.correct_words_char_count,
            duration_secs,
        }
    }

    pub fn total_inputs(&self) -> usize {
        self.correct_inputs + self.incorrect_inputs
    }

    /// Words per minute by the five-characters-per-word convention,
    /// normalized over the test duration. For a full 60-second test this is
    /// exactly `correct_words_char_count / 5`.
    pub fn wpm(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        (self.correct_words_char_count as f64 / 5.0) * (60.0 / self.duration_secs)
    }

    /// Share of recorded keystrokes that were correct, as a percentage.
    /// Defined as 0 when nothing was typed.
    pub fn accuracy(&self) -> f64 {
        let total = self.total_inputs();
        if total == 0 {
            return 0.0;
        }
        (self.correct_inputs as f64 / total as f64) * 100.0
    }
}
