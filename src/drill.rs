use crate::row::{Row, WordToken};
use crate::session::{SessionConfig, SessionState};
use crate::summary::TestSummary;
use crate::TICK_RATE_MS;

/// Lifecycle of a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillPhase {
    Idle,
    Running,
    Finished,
}

/// The typing test state machine: owns the generated rows, the cursor, the
/// live input buffer, the countdown, and the aggregate counters.
///
/// All mutation flows through the methods below in response to discrete
/// events. Ticks outside `Running` are ignored, so a stale tick delivered
/// after a finish or restart cannot touch state.
#[derive(Debug, Clone)]
pub struct Drill {
    pub rows: Vec<Row>,
    pub session_config: SessionConfig,
    pub session_state: SessionState,
}

impl Drill {
    pub fn new(rows: Vec<Row>, session_config: SessionConfig) -> Self {
        let session_state = SessionState::new(session_config.number_of_secs);
        Self {
            rows,
            session_config,
            session_state,
        }
    }

    pub fn phase(&self) -> DrillPhase {
        self.session_state.phase
    }

    pub fn has_started(&self) -> bool {
        self.session_state.phase != DrillPhase::Idle
    }

    pub fn has_finished(&self) -> bool {
        self.session_state.phase == DrillPhase::Finished
    }

    /// `(row, word)` position of the active token.
    pub fn cursor(&self) -> (usize, usize) {
        (
            self.session_state.cursor_row,
            self.session_state.cursor_word,
        )
    }

    /// The token the user is currently expected to type. `None` once the
    /// rows are exhausted, or when an empty source produced an empty row.
    pub fn active_word(&self) -> Option<&WordToken> {
        self.rows
            .get(self.session_state.cursor_row)
            .and_then(|row| row.words.get(self.session_state.cursor_word))
    }

    /// What the user has typed for the active word so far.
    pub fn buffer(&self) -> &str {
        &self.session_state.buffer
    }

    pub fn seconds_remaining(&self) -> f64 {
        self.session_state.seconds_remaining
    }

    pub fn summary(&self) -> Option<&TestSummary> {
        self.session_state.summary.as_ref()
    }

    /// Feeds one typed character into the test. The first keystroke starts
    /// the countdown; input after the test has finished is ignored.
    pub fn write(&mut self, c: char) {
        match self.session_state.phase {
            DrillPhase::Finished => return,
            DrillPhase::Idle => self.session_state.phase = DrillPhase::Running,
            DrillPhase::Running => {}
        }

        if c == ' ' {
            self.complete_word();
        } else {
            self.push_char(c);
        }
    }

    /// Removes the last buffered character and re-judges the active token
    /// against the shortened input. Keystroke counters never decrement.
    pub fn backspace(&mut self) {
        if self.session_state.phase != DrillPhase::Running {
            return;
        }
        if self.session_state.buffer.pop().is_none() {
            return;
        }
        let (row, word) = self.cursor();
        if let Some(token) = self
            .rows
            .get_mut(row)
            .and_then(|r| r.words.get_mut(word))
        {
            token.correct = token.value.starts_with(self.session_state.buffer.as_str());
        }
    }

    /// Advances the countdown by one tick; on reaching zero the test
    /// finishes. Ignored outside `Running`.
    pub fn on_tick(&mut self) {
        if self.session_state.phase != DrillPhase::Running {
            return;
        }
        self.session_state.seconds_remaining -= TICK_RATE_MS as f64 / 1000.0;
        if self.session_state.seconds_remaining <= 0.0 {
            self.session_state.seconds_remaining = 0.0;
            self.finish();
        }
    }

    /// Explicit transition into `Finished`: stops scoring input and snapshots
    /// the counters into the result record. Idempotent.
    pub fn finish(&mut self) {
        if self.session_state.phase == DrillPhase::Finished {
            return;
        }
        self.session_state.phase = DrillPhase::Finished;
        let elapsed = self.session_config.number_of_secs - self.session_state.seconds_remaining;
        self.session_state.summary = Some(TestSummary::snapshot(&self.session_state, elapsed));
    }

    fn push_char(&mut self, c: char) {
        if self.active_word().is_none() {
            // Nothing left to type against (empty row set).
            self.finish();
            return;
        }
        self.session_state.buffer.push(c);

        let (row, word) = self.cursor();
        let token = &mut self.rows[row].words[word];
        token.correct = token.value.starts_with(self.session_state.buffer.as_str());
        if token.correct {
            self.session_state.correct_inputs += 1;
        } else {
            self.session_state.incorrect_inputs += 1;
        }
    }

    fn complete_word(&mut self) {
        if self.active_word().is_none() {
            self.finish();
            return;
        }
        let (row, word) = self.cursor();
        let token = &mut self.rows[row].words[word];

        // A word counts when the buffered input matches it exactly at the
        // moment the space lands.
        let matched = self.session_state.buffer == token.value;
        token.correct = matched;
        let char_len = token.char_len();
        if matched {
            self.session_state.correct_words += 1;
            self.session_state.correct_words_char_count += char_len;
        } else {
            self.session_state.incorrect_words += 1;
        }
        self.session_state.buffer.clear();
        self.advance_cursor();
    }

    fn advance_cursor(&mut self) {
        let row_len = self
            .rows
            .get(self.session_state.cursor_row)
            .map_or(0, Row::len);
        if self.session_state.cursor_word + 1 < row_len {
            self.session_state.cursor_word += 1;
        } else {
            self.session_state.cursor_row += 1;
            self.session_state.cursor_word = 0;
            if self.session_state.cursor_row >= self.rows.len() {
                // Past the last generated row: the test is over.
                self.finish();
            }
        }
    }
}
