use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

use rowtype::config::{ConfigStore, FileConfigStore};
use rowtype::language::Language;
use rowtype::runtime::{CrosstermEventSource, DrillEvent, DrillEventSource, FixedTicker, Runner, Ticker};
use rowtype::{App, AppState, RuntimeSettings, TICK_RATE_MS};

/// terminal typing speed test over rows of random words
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal typing speed test: type through rows of random words against a countdown, then review words-per-minute, accuracy, and keystroke totals."
)]
pub struct Cli {
    /// number of words to pull into the test batch
    #[clap(short = 'w', long)]
    number_of_words: Option<usize>,

    /// number of seconds to run the test
    #[clap(short = 's', long)]
    number_of_secs: Option<u64>,

    /// character budget per display row
    #[clap(long)]
    row_width: Option<usize>,
}

/// Settings-file values with CLI overrides applied on top.
fn resolve_settings(cli: &Cli, store: &dyn ConfigStore) -> RuntimeSettings {
    let cfg = store.load();
    let mut settings = RuntimeSettings::from(&cfg);
    if let Some(words) = cli.number_of_words {
        settings.number_of_words = words;
    }
    if let Some(secs) = cli.number_of_secs {
        settings.number_of_secs = secs as f64;
    }
    if let Some(width) = cli.row_width {
        settings.row_width = width;
    }
    settings
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let settings = resolve_settings(&cli, &FileConfigStore::new());
    let language =
        Language::new("english").ok_or("embedded word list is missing or malformed")?;
    let mut app = App::new(settings, language);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let res = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

#[derive(Debug)]
enum ExitType {
    Restart,
    Quit,
}

fn start_tui<B: Backend, E: DrillEventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    loop {
        let mut exit_type = ExitType::Quit;
        terminal.draw(|f| ui(app, f))?;

        loop {
            match runner.step() {
                DrillEvent::Tick => {
                    if app.drill.has_started() && !app.drill.has_finished() {
                        app.drill.on_tick();
                        if app.drill.has_finished() {
                            app.state = AppState::Results;
                        }
                        terminal.draw(|f| ui(app, f))?;
                    }
                }
                DrillEvent::Resize => {
                    terminal.draw(|f| ui(app, f))?;
                }
                DrillEvent::Key(key) => {
                    match key.code {
                        KeyCode::Esc => {
                            break;
                        }
                        KeyCode::Backspace => {
                            if app.state == AppState::Typing {
                                app.drill.backspace();
                            }
                        }
                        KeyCode::Left => {
                            exit_type = ExitType::Restart;
                            break;
                        }
                        KeyCode::Char(c) => {
                            if key.modifiers.contains(KeyModifiers::CONTROL)
                                && key.code == KeyCode::Char('c')
                            // ctrl+c to quit
                            {
                                break;
                            }

                            match app.state {
                                AppState::Typing => {
                                    app.drill.write(c);
                                    if app.drill.has_finished() {
                                        app.state = AppState::Results;
                                    }
                                }
                                AppState::Results => {
                                    if key.code == KeyCode::Char('r') {
                                        exit_type = ExitType::Restart;
                                        break;
                                    }
                                }
                            }
                        }
                        _ => {}
                    }
                    terminal.draw(|f| ui(app, f))?;
                }
            }
        }

        match exit_type {
            ExitType::Restart => {
                app.reset();
            }
            ExitType::Quit => {
                break;
            }
        }
    }

    Ok(())
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
