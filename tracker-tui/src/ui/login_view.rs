use super::utils::centered_rect;
use super::widgets::{key_hints, with_cursor};
use super::*;
use crate::app::{LoginField, TextInput};

pub fn render_login_view(frame: &mut Frame, app: &App, body: Rect) {
    let area = centered_rect(56, 12, body);
    let ready = app.can_submit_login();

    let mut lines = vec![
        Line::from(""),
        field_line(
            "Username: ",
            &app.username_input,
            app.login_field == LoginField::Username,
            false,
        ),
        field_line(
            "Password: ",
            &app.password_input,
            app.login_field == LoginField::Password,
            true,
        ),
        Line::from(""),
        key_hints(&[
            ("Enter", "Login", ready),
            ("Ctrl+R", "Register", ready),
        ]),
        key_hints(&[("Tab", "Switch field", true), ("Esc", "Quit", true)]),
        Line::from(""),
    ];
    lines.push(Line::from(Span::styled(
        format!("Server: {}", app.server_url),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Time Tracker ")
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(paragraph, area);
}

fn field_line(label: &'static str, input: &TextInput, focused: bool, masked: bool) -> Line<'static> {
    let (before, after) = input.split_at_cursor();
    let (before, after) = if masked {
        (
            "•".repeat(before.chars().count()),
            "•".repeat(after.chars().count()),
        )
    } else {
        (before.to_string(), after.to_string())
    };

    let (label_style, value) = if focused {
        (Style::default().fg(Color::Yellow), with_cursor(&before, &after))
    } else {
        (Style::default().fg(Color::DarkGray), before + &after)
    };

    Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(format!("{value:<24}"), Style::default().fg(Color::White)),
    ])
}
