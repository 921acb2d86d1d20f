use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::ActionTx;
use super::enqueue_request;

pub(super) fn handle_login_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.request_close(),
        KeyCode::Char('c') if ctrl => app.request_close(),
        KeyCode::Char('r') if ctrl => enqueue_request(action_tx, app.submit_login(true)),
        KeyCode::Enter => enqueue_request(action_tx, app.submit_login(false)),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.next_login_field(),
        KeyCode::Char(c) if !ctrl => app.focused_login_input().insert(c),
        KeyCode::Backspace => app.focused_login_input().backspace(),
        KeyCode::Left => app.focused_login_input().move_left(),
        KeyCode::Right => app.focused_login_input().move_right(),
        KeyCode::Home => app.focused_login_input().home(),
        KeyCode::End => app.focused_login_input().end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::action_queue::{channel, Action};
    use super::super::test_support::{ctrl, drain, key, type_text};
    use super::*;
    use crate::app::LoginField;
    use tracker_client::Request;

    #[test]
    fn enter_dispatches_login_and_clears_fields() {
        let (tx, mut rx) = channel();
        let mut app = App::new("http://127.0.0.1:5540");
        let handler = |k: KeyEvent, app: &mut App| handle_login_key(k, app, &tx);

        type_text(&mut app, "alice", handler);
        handle_login_key(key(KeyCode::Tab), &mut app, &tx);
        assert_eq!(app.login_field, LoginField::Password);
        type_text(&mut app, "s3cret", handler);
        handle_login_key(key(KeyCode::Enter), &mut app, &tx);

        assert_eq!(
            drain(&mut rx),
            vec![Action::Dispatch(Request::Login {
                username: "alice".to_string(),
                password: "s3cret".to_string(),
            })]
        );
        assert!(app.username_input.is_empty());
        assert!(app.password_input.is_empty());
    }

    #[test]
    fn ctrl_r_registers() {
        let (tx, mut rx) = channel();
        let mut app = App::new("http://127.0.0.1:5540");
        app.username_input.value = "bob".to_string();
        app.password_input.value = "pw".to_string();

        handle_login_key(ctrl('r'), &mut app, &tx);

        assert_eq!(
            drain(&mut rx),
            vec![Action::Dispatch(Request::Register {
                username: "bob".to_string(),
                password: "pw".to_string(),
            })]
        );
    }

    #[test]
    fn enter_with_empty_password_does_nothing() {
        let (tx, mut rx) = channel();
        let mut app = App::new("http://127.0.0.1:5540");
        type_text(&mut app, "alice", |k, app: &mut App| handle_login_key(k, app, &tx));
        handle_login_key(key(KeyCode::Enter), &mut app, &tx);

        assert!(drain(&mut rx).is_empty());
        assert_eq!(app.username_input.value, "alice");
    }

    #[test]
    fn escape_quits() {
        let (tx, _rx) = channel();
        let mut app = App::new("http://127.0.0.1:5540");
        handle_login_key(key(KeyCode::Esc), &mut app, &tx);
        assert!(!app.running);
    }
}
