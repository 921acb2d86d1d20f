use super::widgets::{big_text, key_hints};
use super::*;
use crate::time_utils::format_hms;

const ORANGE: Color = Color::Rgb(255, 165, 0);

pub fn render_timer_view(frame: &mut Frame, app: &App, body: Rect, clock: OffsetDateTime) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5), // Totals
            Constraint::Length(3), // Toggle
            Constraint::Min(7),    // Live counter
            Constraint::Length(4), // Controls
        ])
        .split(body);

    render_totals(frame, chunks[0], app, clock);
    render_toggle(frame, chunks[1], app);
    if app.session.is_counting() {
        render_live_counter(frame, chunks[2], app.session.live_seconds(clock));
    }
    render_controls(frame, chunks[3], app);
}

fn render_totals(frame: &mut Frame, area: Rect, app: &App, clock: OffsetDateTime) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let track = app.track_name.as_deref().unwrap_or("");

    let lines = vec![
        Line::from(vec![
            Span::styled("Total:   ", label),
            Span::styled(format_hms(app.session.total_seconds(clock)), value),
        ]),
        Line::from(vec![
            Span::styled("Session: ", label),
            Span::styled(format_hms(app.session.unsynced_seconds(clock)), value),
        ]),
        Line::from(vec![
            Span::styled("Track:   ", label),
            Span::styled(track.to_string(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    let totals = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Time ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(totals, area);
}

fn render_toggle(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = if app.session.is_counting() {
        ("⏸ Stop counting", ORANGE)
    } else {
        ("⏵ Start counting", Color::Green)
    };

    let toggle = Paragraph::new(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(toggle, area);
}

fn render_live_counter(frame: &mut Frame, area: Rect, live_seconds: u64) {
    let lines: Vec<Line> = std::iter::once(Line::from(""))
        .chain(
            big_text(&format_hms(live_seconds))
                .into_iter()
                .map(|row| Line::from(Span::styled(row, Style::default().fg(ORANGE)))),
        )
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let line1 = key_hints(&[
        ("Space", "Start/Stop", true),
        ("s", "Sync", app.can_sync()),
        ("S / Ctrl+S", "Save", app.can_save()),
        ("r", "Reset", app.can_reset()),
    ]);
    let line2 = key_hints(&[("l", "Logout", true), ("q", "Quit", true)]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                )]))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(controls, area);
}
