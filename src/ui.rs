use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::drill::Drill;
use crate::row::Row;
use crate::{App, AppState};

const HORIZONTAL_MARGIN: u16 = 5;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Typing => render_typing(&self.drill, area, buf),
            AppState::Results => render_results(&self.drill, area, buf),
        }
    }
}

fn render_typing(drill: &Drill, area: Rect, buf: &mut Buffer) {
    let dim_bold = Style::default().add_modifier(Modifier::BOLD | Modifier::DIM);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Min(1),    // top padding
            Constraint::Length(2), // countdown
            Constraint::Length(1), // active row
            Constraint::Length(1), // reserve row
            Constraint::Length(2), // input buffer
            Constraint::Min(1),    // bottom padding
        ])
        .split(area);

    let timer = Paragraph::new(Span::styled(
        format!("{:.1}", drill.seconds_remaining()),
        dim_bold,
    ))
    .alignment(Alignment::Center);
    timer.render(chunks[1], buf);

    let (cursor_row, cursor_word) = drill.cursor();
    if let Some(row) = drill.rows.get(cursor_row) {
        Paragraph::new(row_line(row, Some(cursor_word)))
            .alignment(row_alignment(row, chunks[2]))
            .wrap(Wrap { trim: true })
            .render(chunks[2], buf);
    }
    if let Some(row) = drill.rows.get(cursor_row + 1) {
        Paragraph::new(row_line(row, None))
            .alignment(row_alignment(row, chunks[3]))
            .wrap(Wrap { trim: true })
            .render(chunks[3], buf);
    }

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", dim_bold),
        Span::styled(
            drill.buffer().to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    input.render(chunks[4], buf);
}

/// Styles one row of tokens: completed words green/red by judgment, the
/// active word underlined (red while the buffer has deviated), everything
/// ahead dimmed. A reserve row (no active index) renders fully dimmed.
fn row_line(row: &Row, active_word: Option<usize>) -> Line<'_> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let spans = row.words.iter().enumerate().map(move |(idx, token)| {
        let style = match active_word {
            Some(active) if idx == active => {
                let underlined = bold.add_modifier(Modifier::UNDERLINED);
                if token.correct {
                    underlined
                } else {
                    underlined.fg(Color::Red)
                }
            }
            Some(active) if idx < active => {
                if token.correct {
                    bold.fg(Color::Green)
                } else {
                    bold.fg(Color::Red)
                }
            }
            _ => bold.add_modifier(Modifier::DIM),
        };
        Span::styled(token.value.as_str(), style)
    });
    Line::from(Itertools::intersperse(spans, Span::raw(" ")).collect::<Vec<Span>>())
}

fn row_alignment(row: &Row, area: Rect) -> Alignment {
    let width: usize =
        row.words.iter().map(|t| t.value.width()).sum::<usize>() + row.len().saturating_sub(1);
    if width <= area.width as usize {
        // centering a row that fits gives a nice zen feeling
        Alignment::Center
    } else {
        Alignment::Left
    }
}

fn render_results(drill: &Drill, area: Rect, buf: &mut Buffer) {
    let Some(summary) = drill.summary() else {
        return;
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let green = Style::default().fg(Color::Green);
    let red = Style::default().fg(Color::Red);
    let italic = Style::default().add_modifier(Modifier::ITALIC);

    let lines = vec![
        Line::from(Span::styled(
            format!("{:.0} wpm   {:.0}% acc", summary.wpm(), summary.accuracy()),
            bold,
        )),
        Line::default(),
        Line::from(vec![
            Span::raw("keystrokes ( "),
            Span::styled(summary.correct_inputs.to_string(), green),
            Span::raw(" | "),
            Span::styled(summary.incorrect_inputs.to_string(), red),
            Span::raw(format!(" ) {}", summary.total_inputs())),
        ]),
        Line::from(vec![
            Span::raw("correct words "),
            Span::styled(summary.correct_words.to_string(), green),
        ]),
        Line::from(vec![
            Span::raw("wrong words "),
            Span::styled(summary.incorrect_words.to_string(), red),
        ]),
        Line::default(),
        Line::from(Span::styled("(r)etry / (esc)ape", italic)),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(lines.len() as u16),
            Constraint::Min(1),
        ])
        .split(area);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(chunks[1], buf);
}
