use super::utils::centered_rect;
use super::widgets::{key_hints, with_cursor};
use super::*;

pub fn render_track_picker_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);

    render_track_list(frame, chunks[0], app);

    let idle = !app.is_call_pending();
    let has_selection = app.selected_track().is_some();
    let controls = Paragraph::new(key_hints(&[
        ("↑↓ / j/k", "Move", true),
        ("Enter", "Pick", idle && has_selection),
        ("n", "New track", true),
        ("d", "Delete", idle && has_selection),
        ("q", "Quit", true),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Controls ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(controls, chunks[1]);

    if app.new_track_input.is_some() {
        render_new_track_form(frame, app);
    }
}

fn render_track_list(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(" Tracks ({}) ", app.tracks.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1));

    if app.tracks.is_empty() {
        let text = if app.is_call_pending() {
            "Loading tracks..."
        } else {
            "No tracks yet. Press n to create one."
        };
        let placeholder = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            if i == app.selected_track_index {
                ListItem::new(format!("▸ {track}")).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {track}")).style(Style::default().fg(Color::White))
            }
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected_track_index));

    frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
}

fn render_new_track_form(frame: &mut Frame, app: &App) {
    let Some(input) = &app.new_track_input else {
        return;
    };
    let area = centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let (before, after) = input.split_at_cursor();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            with_cursor(before, after),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        key_hints(&[
            ("Enter", "Create", !input.value.trim().is_empty()),
            ("Esc", "Cancel", true),
        ]),
    ];

    let form = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(" New Track ", Style::default().fg(Color::Yellow)))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(form, area);
}
