use crate::app::{App, Screen};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod confirm;
mod login;
mod timer;
mod track_picker;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

fn enqueue_request(action_tx: &ActionTx, request: Option<tracker_client::Request>) {
    if let Some(request) = request {
        enqueue_action(action_tx, Action::Dispatch(request));
    }
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.screen() {
        Screen::Login => login::handle_login_key(key, app, action_tx),
        Screen::TrackPicker => track_picker::handle_track_picker_key(key, app, action_tx),
        Screen::CloseConfirm => confirm::handle_close_confirm_key(key, app),
        Screen::LogoutConfirm => confirm::handle_logout_confirm_key(key, app),
        Screen::Timer => timer::handle_timer_key(key, app, action_tx),
    }
}
