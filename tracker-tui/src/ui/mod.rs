use crate::app::{App, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};
use time::OffsetDateTime;

mod confirm_dialog;
mod login_view;
mod timer_view;
mod track_picker_view;
pub(super) mod utils;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &mut App) {
    let clock = OffsetDateTime::now_utc();

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.screen() {
        Screen::Login => login_view::render_login_view(frame, app, body),
        Screen::TrackPicker => track_picker_view::render_track_picker_view(frame, app, body),
        Screen::Timer => timer_view::render_timer_view(frame, app, body, clock),
        Screen::CloseConfirm => {
            timer_view::render_timer_view(frame, app, body, clock);
            confirm_dialog::render_confirm_dialog(frame, "exit");
        }
        Screen::LogoutConfirm => {
            timer_view::render_timer_view(frame, app, body, clock);
            confirm_dialog::render_confirm_dialog(frame, "logout");
        }
    }

    render_message(frame, root[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let [throbber_area, title_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .areas(area);

    if app.is_call_pending() {
        let throbber = throbber_widgets_tui::Throbber::default()
            .style(Style::default().fg(Color::Yellow))
            .throbber_style(Style::default().fg(Color::Yellow))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);
        frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    }

    let title = Paragraph::new(Span::styled(
        app.window_title(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, title_area);
}

fn render_message(frame: &mut Frame, area: Rect, app: &App) {
    let Some(message) = app.visible_message() else {
        return;
    };
    let color = if message.is_success {
        Color::White
    } else {
        Color::Red
    };
    let line = Paragraph::new(Span::styled(
        message.text.as_str(),
        Style::default().fg(color),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(line, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AuthToken, AUTH_TOKEN_PLACEHOLDER};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn login_screen_shows_server_and_message() {
        let mut app = App::new("http://127.0.0.1:5540");
        app.set_message(false, "Login invalid.", Instant::now());

        let screen = draw(&mut app);

        assert!(screen.contains("Server: http://127.0.0.1:5540"));
        assert!(screen.contains("Login invalid."));
        assert!(screen.contains("Time Tracker: Log work time!"));
    }

    #[test]
    fn picker_lists_tracks() {
        let mut app = App::new("http://127.0.0.1:5540");
        app.auth = AuthToken {
            token: AUTH_TOKEN_PLACEHOLDER.to_string(),
            username: "alice".to_string(),
            user_id: 7,
            expiration: None,
        };
        app.tracks = vec!["Work".to_string(), "Guitar".to_string()];

        let screen = draw(&mut app);

        assert!(screen.contains("(alice) Time Tracker"));
        assert!(screen.contains("Guitar"));
    }

    #[test]
    fn picker_scrolls_to_selected_track() {
        let mut app = App::new("http://127.0.0.1:5540");
        app.auth.token = AUTH_TOKEN_PLACEHOLDER.to_string();
        app.tracks = (0..40).map(|i| format!("Track {i:02}")).collect();
        app.selected_track_index = 35;

        let screen = draw(&mut app);

        assert!(screen.contains("▸ Track 35"));
        assert!(!screen.contains("Track 00"));
    }

    #[test]
    fn close_dialog_overlays_timer() {
        let mut app = App::new("http://127.0.0.1:5540");
        app.auth.token = AUTH_TOKEN_PLACEHOLDER.to_string();
        app.track_name = Some("Work".to_string());
        app.session.session_seconds = 95;
        app.close_requested = true;

        let screen = draw(&mut app);

        assert!(screen.contains("You sure you want to exit?"));
        assert!(screen.contains("[y] Yes"));
    }
}
