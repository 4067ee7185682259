//! TUI rendering with ratatui
//!
//! Layout for the hangman interface: counters, word mask, messages, input.

use super::app::{App, InputMode, MessageStyle};
use crate::game::Game;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Counters
            Constraint::Min(7),    // Word
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_counters(f, app, chunks[1]);
    render_word(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_input(f, app, chunks[4]);
    render_help(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn counter_box(title: &str, value: String, color: Color) -> Paragraph<'_> {
    Paragraph::new(value)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
}

fn render_counters(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25), // Score
            Constraint::Percentage(25), // Round
            Constraint::Percentage(50), // Wrong tries
        ])
        .split(area);

    let Some(game) = &app.game else {
        f.render_widget(
            counter_box("Score", "-".to_string(), Color::DarkGray),
            chunks[0],
        );
        f.render_widget(
            counter_box("Round", "-".to_string(), Color::DarkGray),
            chunks[1],
        );
        f.render_widget(
            counter_box("Wrong Tries", "-".to_string(), Color::DarkGray),
            chunks[2],
        );
        return;
    };
    let counters = game.counters();

    let score = if game.config().scoring {
        counters.score.to_string()
    } else {
        "off".to_string()
    };
    let score_color = if counters.score < 0 {
        Color::Red
    } else {
        Color::Green
    };
    f.render_widget(counter_box("Score", score, score_color), chunks[0]);
    f.render_widget(
        counter_box("Round", counters.round.to_string(), Color::Yellow),
        chunks[1],
    );

    render_wrong_tries(f, game, chunks[2]);
}

fn render_wrong_tries(f: &mut Frame, game: &Game, area: Rect) {
    let wrong_tries = game.counters().wrong_tries;

    let Some(limit) = game.config().failure_threshold else {
        f.render_widget(
            counter_box("Wrong Tries", wrong_tries.to_string(), Color::Magenta),
            area,
        );
        return;
    };

    let ratio = (f64::from(wrong_tries) / f64::from(limit)).min(1.0);
    let color = if ratio >= 0.7 { Color::Red } else { Color::Magenta };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Wrong Tries ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{wrong_tries}/{limit}"));

    f.render_widget(gauge, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match (&app.game, app.input_mode) {
        (_, InputMode::Loading) => ("Loading words...".to_string(), Color::DarkGray),
        (Some(game), mode) => match game.render_mask() {
            Some(mask) => {
                let color = match mode {
                    InputMode::GameOver => Color::Red,
                    _ if mask.is_revealed() => Color::Green,
                    _ => Color::White,
                };
                (mask.render_with('_', " "), color)
            }
            None => ("No word".to_string(), Color::DarkGray),
        },
        (None, _) => ("No word".to_string(), Color::DarkGray),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    if let (Some(game), InputMode::GameOver) = (&app.game, app.input_mode)
        && let Some(word) = game.current_word()
    {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("The word was {}", word.text().to_uppercase()),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Loading => (" Please wait ", "", Color::DarkGray),
        InputMode::Guess => (
            " Guess the Letter | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundComplete => (
            " 🎉 SUCCESS! | Press Enter for the next word ",
            "",
            Color::Green,
        ),
        InputMode::GameOver => (" 💀 GAME OVER | Ctrl-R to reset ", "", Color::Red),
        InputMode::OutOfWords => (" No words left | Ctrl-R to reset ", "", Color::Cyan),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let stats = format!(
        "Words solved: {} | Best score: {} | Esc: Quit | Ctrl-R: Reset",
        app.stats.rounds_won, app.stats.best_score
    );
    let help = Paragraph::new(stats)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
