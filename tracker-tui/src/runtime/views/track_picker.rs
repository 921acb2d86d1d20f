use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::ActionTx;
use super::enqueue_request;

pub(super) fn handle_track_picker_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.request_close();
        return;
    }

    if app.new_track_input.is_some() {
        handle_new_track_key(key, app, action_tx);
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_track(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_track(),
        KeyCode::Enter => enqueue_request(action_tx, app.pick_selected_track()),
        KeyCode::Char('n') | KeyCode::Char('N') => app.open_new_track_form(),
        KeyCode::Char('d') | KeyCode::Delete => {
            enqueue_request(action_tx, app.delete_selected_track())
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.request_close(),
        _ => {}
    }
}

fn handle_new_track_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Esc => app.cancel_new_track_form(),
        KeyCode::Enter => enqueue_request(action_tx, app.submit_new_track()),
        _ => {
            let Some(input) = app.new_track_input.as_mut() else {
                return;
            };
            match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.insert(c)
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.home(),
                KeyCode::End => input.end(),
                _ => {}
            }
        }
    }
}
