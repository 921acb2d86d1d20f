use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use time::OffsetDateTime;

use super::super::action_queue::ActionTx;
use super::enqueue_request;

pub(super) fn handle_timer_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => app.request_close(),
        KeyCode::Char(' ') => app.toggle_counting(OffsetDateTime::now_utc()),
        KeyCode::Char('s') if ctrl => enqueue_request(action_tx, app.save()),
        KeyCode::Char('S') => enqueue_request(action_tx, app.save()),
        KeyCode::Char('s') => enqueue_request(action_tx, app.sync()),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_session(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.request_logout(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_close(),
        _ => {}
    }
}
