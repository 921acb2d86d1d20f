use super::utils::centered_rect;
use super::*;

/// Yes/No box asking whether to `verb` with possibly unsaved time.
pub fn render_confirm_dialog(frame: &mut Frame, verb: &str) {
    let area = centered_rect(44, 8, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("You sure you want to {verb}?"),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Your time may not be saved.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirmation ")
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
