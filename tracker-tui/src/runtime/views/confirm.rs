use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_close_confirm_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_close(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_close(),
        _ => {}
    }
}

pub(super) fn handle_logout_confirm_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.logout(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_logout(),
        _ => {}
    }
}
