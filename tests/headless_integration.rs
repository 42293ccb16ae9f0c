use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use rowtype::drill::Drill;
use rowtype::language::Language;
use rowtype::runtime::{DrillEvent, FixedTicker, Runner, TestEventSource};
use rowtype::session::SessionConfig;
use rowtype::word_generator::pack_rows;
use rowtype::{App, AppState, RuntimeSettings};

// Headless integration using the internal runtime + Drill without a TTY.

fn drill_from(words: &[&str], number_of_secs: f64) -> Drill {
    let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    Drill::new(pack_rows(&words, 60), SessionConfig { number_of_secs })
}

fn key(c: char) -> DrillEvent {
    DrillEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

#[test]
fn headless_typing_flow_completes() {
    let mut drill = drill_from(&["hi", "ok"], 60.0);

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    // Producer: the keystrokes for both words, spaces included
    for c in "hi ok ".chars() {
        tx.send(key(c)).unwrap();
    }

    // Drive a tiny event loop until finished (or bounded steps)
    for _ in 0..100u32 {
        match runner.step() {
            DrillEvent::Tick => drill.on_tick(),
            DrillEvent::Resize => {}
            DrillEvent::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    drill.write(c);
                    if drill.has_finished() {
                        break;
                    }
                }
            }
        }
    }

    assert!(drill.has_finished(), "drill should have finished typing");
    let summary = drill.summary().expect("summary at finish");
    assert_eq!(summary.correct_words, 2);
    assert_eq!(summary.incorrect_words, 0);
    assert_eq!(summary.correct_words_char_count, 4);
    assert_eq!(summary.correct_inputs, 4);
    assert_eq!(summary.incorrect_inputs, 0);
    assert_eq!(summary.accuracy(), 100.0);
}

#[test]
fn headless_timed_session_finishes_by_time() {
    // ~300ms countdown, driven purely by runner timeouts after one keystroke
    let mut drill = drill_from(&["hello"], 0.3);

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(10));
    let runner = Runner::new(es, ticker);

    tx.send(key('h')).unwrap();

    for _ in 0..50u32 {
        match runner.step() {
            DrillEvent::Tick => drill.on_tick(),
            DrillEvent::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    drill.write(c);
                }
            }
            DrillEvent::Resize => {}
        }
        if drill.has_finished() {
            break;
        }
    }

    assert!(drill.has_finished(), "timed session should finish by timeout");
    assert_eq!(drill.seconds_remaining(), 0.0);
    let summary = drill.summary().expect("summary at finish");
    assert_eq!(summary.correct_inputs, 1);
}

#[test]
fn headless_mistyped_words_still_advance() {
    let mut drill = drill_from(&["cat", "dog"], 60.0);

    for c in "cxt dog ".chars() {
        drill.write(c);
    }

    assert!(drill.has_finished());
    let summary = drill.summary().unwrap();
    assert_eq!(summary.correct_words, 1);
    assert_eq!(summary.incorrect_words, 1);
    assert_eq!(summary.correct_words_char_count, 3);
}

#[test]
fn app_reset_starts_a_fresh_idle_test() {
    let settings = RuntimeSettings {
        number_of_words: 10,
        number_of_secs: 60.0,
        row_width: 60,
    };
    let mut app = App::new(settings, Language::new("english").unwrap());

    app.drill.write('q');
    app.drill.on_tick();
    app.drill.finish();
    app.state = AppState::Results;

    app.reset();

    assert_eq!(app.state, AppState::Typing);
    assert!(!app.drill.has_started());
    assert_eq!(app.drill.seconds_remaining(), 60.0);
    assert_eq!(app.drill.session_state.correct_inputs, 0);
    assert_eq!(app.drill.session_state.incorrect_inputs, 0);
    assert!(app.drill.summary().is_none());
    assert!(app.drill.active_word().is_some());
}
