use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{execute, terminal::SetTitle};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use time::OffsetDateTime;
use tracker_client::{Request, TrackerClient};

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &mut TrackerClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let mut shown_title = String::new();

    // Ask the server who it is; the answer only goes to the log.
    run_action(Action::Dispatch(Request::Version), app, client);

    loop {
        start_frame(app, client, Instant::now(), OffsetDateTime::now_utc());
        if !app.running {
            break;
        }

        let title = app.window_title();
        if title != shown_title {
            execute!(terminal.backend_mut(), SetTitle(&title))?;
            shown_title = title;
        }

        if app.is_call_pending() {
            app.throbber_state.calc_next();
        }

        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(FRAME_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}

/// Resolve the in-flight call, then start whatever the current screen needs
/// on entry. The entry call is tracked before any key of this frame is read.
fn start_frame(app: &mut App, client: &mut TrackerClient, now: Instant, clock: OffsetDateTime) {
    app.poll_pending(now);
    if let Some(request) = app.begin_frame(now, clock) {
        run_action(Action::Dispatch(request), app, client);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AuthToken, AUTH_TOKEN_PLACEHOLDER};

    fn picker_app() -> App {
        let mut app = App::new("http://127.0.0.1:9");
        app.auth = AuthToken {
            token: AUTH_TOKEN_PLACEHOLDER.to_string(),
            username: "alice".to_string(),
            user_id: 7,
            expiration: None,
        };
        app.tracks = vec!["A".to_string(), "X".to_string()];
        app
    }

    #[tokio::test]
    async fn entry_fetch_blocks_same_frame_actions() {
        let mut client =
            TrackerClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        let mut app = picker_app();

        start_frame(&mut app, &mut client, Instant::now(), OffsetDateTime::now_utc());

        assert!(app.is_call_pending());
        assert_eq!(app.pending.as_ref().map(|p| p.handle.path()), Some("/account"));

        assert_eq!(app.delete_selected_track(), None);
        assert_eq!(app.pick_selected_track(), None);
        assert_eq!(app.tracks.len(), 2);
    }

    #[tokio::test]
    async fn idle_screen_starts_nothing() {
        let mut client =
            TrackerClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        let mut app = App::new("http://127.0.0.1:9");

        start_frame(&mut app, &mut client, Instant::now(), OffsetDateTime::now_utc());

        assert!(!app.is_call_pending());
    }
}
