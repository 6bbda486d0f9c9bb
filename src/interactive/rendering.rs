//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::WORD_LEN;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ASSISTANT")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Suggestions
            Constraint::Percentage(30), // Pool
            Constraint::Percentage(25), // History
        ])
        .split(area);

    render_suggestions(f, app, chunks[0]);
    render_pool(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let best = app.suggestions.first().map_or(0.0, |s| s.score);

    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .take(app.limit)
        .enumerate()
        .map(|(i, s)| {
            // Cast is safe: ratio is within [0, 1]
            let filled = if best > 0.0 {
                ((s.score / best) * 12.0) as usize
            } else {
                0
            };
            let bar = "█".repeat(filled.min(12)) + &"░".repeat(12 - filled.min(12));
            let style = if i == 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<6}", s.word.text().to_uppercase()), style),
                Span::styled(bar, Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {:.3}", s.score)),
            ]))
        })
        .collect();

    let title = if app.history.is_empty() {
        " Suggested First Words "
    } else {
        " Good Guesses "
    };
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_pool(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.pool().len();
    let mut words: Vec<String> = app
        .pool_view
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect();
    if total > app.pool_view.len() {
        words.push("...".to_string());
    }

    let paragraph = Paragraph::new(words.join(", "))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" Possible Words ({total}) "))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            ListItem::new(format!(
                "{}: {} | {} → {}",
                i + 1,
                entry.input,
                entry.before,
                entry.after
            ))
        })
        .collect();

    let history = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Pool gauge
            Constraint::Min(7),    // Constraints
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_pool_gauge(f, app, chunks[0]);
    render_constraints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_pool_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.total_words();
    let remaining = app.session.pool().len();
    let eliminated = crate::solver::reduction_percent(total, remaining);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((eliminated / 100.0).clamp(0.0, 1.0))
        .label(format!("{eliminated:.1}% | {remaining}/{total} remain"));

    f.render_widget(gauge, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = app.session.constraints();

    let green_spans: Vec<Span> = (0..WORD_LEN)
        .map(|i| match constraints.green().get(i) {
            Some(letter) => Span::styled(
                char::from(letter.to_ascii_uppercase()).to_string(),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("_", Style::default().fg(Color::DarkGray)),
        })
        .flat_map(|span| [span, Span::raw(" ")])
        .collect();

    let not_here: Vec<String> = constraints
        .yellow_exclusions()
        .iter()
        .enumerate()
        .filter(|(_, set)| !set.is_empty())
        .map(|(i, set)| format!("{}:{set}", i + 1))
        .collect();

    let caps: Vec<String> = constraints
        .caps()
        .iter()
        .map(|(letter, max)| format!("{}≤{max}", char::from(*letter)))
        .collect();

    let lines = vec![
        Line::from([vec![Span::raw("Greens:   ")], green_spans].concat()),
        Line::from(vec![
            Span::raw("Present:  "),
            Span::styled(
                constraints.required_letters().to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(format!("Not here: {}", not_here.join(" "))),
        Line::from(vec![
            Span::raw("Absent:   "),
            Span::styled(
                constraints.absent().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!("At most:  {}", caps.join(" "))),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Round {} ", app.session.round() + 1))
            .borders(Borders::ALL),
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
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Clues (GREEN, yellow, gray run; comma separated) | 1: new game  2: exit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = Paragraph::new(format!(
        "Solved: {} | Exhausted: {} | Abandoned: {}",
        app.stats.games_solved, app.stats.games_exhausted, app.stats.games_abandoned
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Ctrl+N: New Game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
