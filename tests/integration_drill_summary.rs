use rowtype::drill::Drill;
use rowtype::session::SessionConfig;
use rowtype::word_generator::{pack_rows, WordGenConfig, WordGenerator, WordSource};

/// Deterministic word source cycling a fixed list, standing in for the
/// random language sampler.
struct CycledSource(Vec<String>);

impl CycledSource {
    fn new(words: &[&str]) -> Self {
        Self(words.iter().map(|w| w.to_string()).collect())
    }
}

impl WordSource for CycledSource {
    fn words(&self, count: usize) -> Vec<String> {
        self.0.iter().cloned().cycle().take(count).collect()
    }
}

fn type_str(drill: &mut Drill, s: &str) {
    for c in s.chars() {
        drill.write(c);
    }
}

#[test]
fn cat_dog_worked_example() {
    // A 350-word batch of alternating "cat"/"dog" packs into rows that stay
    // under the 60-character budget until the word that would reach it.
    let generator = WordGenerator::new(WordGenConfig::default());
    let rows = generator.generate_rows(&CycledSource::new(&["cat", "dog"]));

    let total: usize = rows.iter().map(|r| r.len()).sum();
    assert_eq!(total, 350);
    for row in &rows {
        let before_last: usize = row
            .words
            .iter()
            .take(row.len().saturating_sub(1))
            .map(|t| t.char_len())
            .sum();
        assert!(before_last < 60);
    }

    let mut drill = Drill::new(rows, SessionConfig::default());

    // Typing "cat " against the active word "cat" scores the word and
    // advances to "dog".
    assert_eq!(drill.active_word().unwrap().value, "cat");
    type_str(&mut drill, "cat ");
    assert_eq!(drill.session_state.correct_words, 1);
    assert_eq!(drill.session_state.correct_words_char_count, 3);
    assert_eq!(drill.active_word().unwrap().value, "dog");

    // Typing "dxg " against "dog" advances without crediting characters.
    type_str(&mut drill, "dxg ");
    assert_eq!(drill.session_state.incorrect_words, 1);
    assert_eq!(drill.session_state.correct_words_char_count, 3);
    assert_eq!(drill.active_word().unwrap().value, "cat");
}

#[test]
fn summary_freezes_when_the_countdown_ends() {
    let words: Vec<String> = ["one", "two", "three"].iter().map(|w| w.to_string()).collect();
    let mut drill = Drill::new(pack_rows(&words, 60), SessionConfig { number_of_secs: 0.2 });

    type_str(&mut drill, "one t");
    for _ in 0..3 {
        drill.on_tick();
    }
    assert!(drill.has_finished());

    let frozen = *drill.summary().expect("summary at finish");
    assert_eq!(frozen.correct_inputs, drill.session_state.correct_inputs);
    assert_eq!(frozen.correct_words, 1);
    assert_eq!(frozen.correct_words_char_count, 3);

    // Nothing typed after the end may alter the record or the counters.
    type_str(&mut drill, "wo three ");
    drill.backspace();
    assert_eq!(*drill.summary().unwrap(), frozen);
    assert_eq!(drill.session_state.correct_inputs, frozen.correct_inputs);
    assert_eq!(drill.session_state.correct_words, frozen.correct_words);
}

#[test]
fn exactly_one_active_token_while_running() {
    let words: Vec<String> = ["alpha", "beta", "gamma", "delta"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let mut drill = Drill::new(pack_rows(&words, 12), SessionConfig::default());

    for c in "alpha bxta gamma ".chars() {
        drill.write(c);
        if drill.has_finished() {
            break;
        }
        // The cursor always resolves to exactly one token.
        let token = drill.active_word().expect("active token while running");
        let (row, word) = drill.cursor();
        assert_eq!(token.value, drill.rows[row].words[word].value);
    }
}

#[test]
fn zero_keystroke_run_has_defined_metrics() {
    // Space-only input never records a keystroke, only word judgments.
    let words: Vec<String> = ["cat", "dog"].iter().map(|w| w.to_string()).collect();
    let mut drill = Drill::new(pack_rows(&words, 60), SessionConfig::default());

    type_str(&mut drill, "  ");

    assert!(drill.has_finished());
    let summary = drill.summary().unwrap();
    assert_eq!(summary.total_inputs(), 0);
    assert_eq!(summary.incorrect_words, 2);
    assert!(!summary.accuracy().is_nan());
    assert_eq!(summary.accuracy(), 0.0);
    assert!(!summary.wpm().is_nan());
}

#[test]
fn empty_source_degrades_to_a_single_empty_row() {
    let generator = WordGenerator::new(WordGenConfig::default());
    let rows = generator.generate_rows(&CycledSource::new(&[]));

    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_empty());

    let mut drill = Drill::new(rows, SessionConfig::default());
    drill.write('a');
    assert!(drill.has_finished());
}
