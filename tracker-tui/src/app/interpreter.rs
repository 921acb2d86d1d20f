use std::time::Instant;

use tracker_client::{Behavior, CallResult, Identity, Reply};

use super::*;

pub const SYNCED_MESSAGE: &str = "Synced successfully!";
pub const BAD_AUTH_MESSAGE: &str = "Bad auth.";
pub const UNKNOWN_RESPONSE_MESSAGE: &str = "Unknown response. See the log for details.";

impl App {
    /// Check the in-flight call once without blocking and apply its result.
    pub fn poll_pending(&mut self, now: Instant) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match pending.handle.try_take() {
            Err(handle) => {
                self.pending = Some(PendingCall {
                    handle,
                    epoch: pending.epoch,
                });
            }
            Ok(result) if pending.epoch != self.session_epoch => {
                tracing::debug!(
                    ok = result.is_ok(),
                    "dropping result of a call made before the last logout"
                );
            }
            Ok(result) => self.apply_call_result(result, now),
        }
    }

    pub fn apply_call_result(&mut self, result: CallResult, now: Instant) {
        let body = match result {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "call failed");
                self.set_message(false, e.to_string(), now);
                return;
            }
        };

        match Reply::parse(&body) {
            Ok(reply) => self.apply_reply(reply, now),
            Err(e) => {
                tracing::warn!(error = %e, body = %body, "response is not JSON");
                self.set_message(false, e.to_string(), now);
            }
        }
    }

    pub fn apply_reply(&mut self, reply: Reply, now: Instant) {
        match reply {
            Reply::Error(text) => self.set_message(false, text, now),
            Reply::Message(text) => self.set_message(true, text, now),
            Reply::Unrecognized(root) => {
                tracing::warn!(body = %root, "unknown response");
                self.set_message(false, UNKNOWN_RESPONSE_MESSAGE, now);
            }
            Reply::Behavior { behavior, message } => {
                let (is_success, text) = self.apply_behavior(behavior, message.unwrap_or_default());
                self.set_message(is_success, text, now);
            }
        }
    }

    /// Mutate state for a tagged reply; returns the message to show.
    fn apply_behavior(&mut self, behavior: Behavior, message: String) -> (bool, String) {
        match behavior {
            Behavior::Version(info) => {
                tracing::info!(
                    server = info.name.as_deref().unwrap_or("?"),
                    description = info.description.as_deref().unwrap_or(""),
                    version = info.version.as_deref().unwrap_or("?"),
                    "server version"
                );
            }
            Behavior::Authentication(Some(identity)) => self.sign_in(identity),
            Behavior::Authentication(None) => return (false, BAD_AUTH_MESSAGE.to_string()),
            Behavior::Account { tracks } => {
                tracing::debug!(count = tracks.len(), tracks = ?tracks, "account tracks");
                self.replace_tracks(tracks);
            }
            Behavior::SaveAck => self.session.acknowledge_save(),
            Behavior::TrackInfo {
                seconds: Some(seconds),
                ..
            } => {
                self.session.saved_seconds = seconds;
                return (true, SYNCED_MESSAGE.to_string());
            }
            Behavior::TrackInfo { seconds: None, .. } => {}
            Behavior::Unrecognized(tag) => {
                tracing::debug!(behavior = %tag, "no handling for behavior");
            }
        }
        (true, message)
    }

    fn sign_in(&mut self, identity: Identity) {
        tracing::info!(username = %identity.username, uid = identity.uid, "signed in");
        self.auth = AuthToken {
            token: AUTH_TOKEN_PLACEHOLDER.to_string(),
            username: identity.username,
            user_id: identity.uid,
            expiration: None,
        };
        self.tracks_cached = false;
    }

    fn replace_tracks(&mut self, tracks: Vec<String>) {
        self.tracks = tracks;
        if self.selected_track_index >= self.tracks.len() {
            self.selected_track_index = self.tracks.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_client::{call_channel, CallError, RequestId};

    fn test_app() -> App {
        App::new("http://127.0.0.1:5540")
    }

    fn signed_in_app() -> App {
        let mut app = test_app();
        app.auth = AuthToken {
            token: AUTH_TOKEN_PLACEHOLDER.to_string(),
            username: "alice".to_string(),
            user_id: 7,
            expiration: None,
        };
        app.tracks = vec!["Work".to_string(), "Reading".to_string()];
        app
    }

    fn apply(app: &mut App, body: &str) {
        app.apply_call_result(Ok(body.to_string()), Instant::now());
    }

    fn message(app: &App) -> (bool, String) {
        let message = app.last_message.as_ref().expect("message should be set");
        (message.is_success, message.text.clone())
    }

    #[test]
    fn error_reply_sets_failure_and_leaves_state_alone() {
        let mut app = signed_in_app();
        let auth_before = app.auth.clone();
        let tracks_before = app.tracks.clone();

        apply(&mut app, r#"{"error":"Track not found."}"#);

        assert_eq!(message(&app), (false, "Track not found.".to_string()));
        assert_eq!(app.auth, auth_before);
        assert_eq!(app.tracks, tracks_before);
    }

    #[test]
    fn error_reply_does_not_sign_in() {
        let mut app = test_app();
        apply(
            &mut app,
            r#"{"error":"Login invalid.","behavior":"AUTHENTICATION","username":"alice","uid":7}"#,
        );
        assert!(app.auth.is_empty());
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn authentication_signs_in() {
        let mut app = test_app();
        apply(&mut app, r#"{"behavior":"AUTHENTICATION","username":"alice","uid":7}"#);

        assert!(!app.auth.is_empty());
        assert_eq!(app.auth.user_id, 7);
        assert_eq!(app.auth.username, "alice");
        assert_eq!(app.screen(), Screen::TrackPicker);
        assert_eq!(message(&app), (true, String::new()));
    }

    #[test]
    fn authentication_missing_fields_is_bad_auth() {
        let mut app = test_app();
        apply(&mut app, r#"{"behavior":"AUTHENTICATION","name":"alice","uid":7}"#);

        assert!(app.auth.is_empty());
        assert_eq!(message(&app), (false, BAD_AUTH_MESSAGE.to_string()));
    }

    #[test]
    fn account_replaces_track_list() {
        let mut app = signed_in_app();
        app.selected_track_index = 1;
        apply(
            &mut app,
            r#"{"behavior":"ACCOUNT","tracks":[{"track":"Guitar","seconds":60}]}"#,
        );

        assert_eq!(app.tracks, vec!["Guitar".to_string()]);
        assert_eq!(app.selected_track_index, 0);
    }

    #[test]
    fn saveack_moves_session_into_saved_once() {
        let mut app = signed_in_app();
        app.session.saved_seconds = 600;
        app.session.session_seconds = 95;

        apply(&mut app, r#"{"behavior":"SAVEACK"}"#);
        assert_eq!(app.session.saved_seconds, 695);
        assert_eq!(app.session.session_seconds, 0);
        assert_eq!(app.message_text(), "");

        apply(&mut app, r#"{"behavior":"SAVEACK"}"#);
        assert_eq!(app.session.saved_seconds, 695);
        assert_eq!(app.session.session_seconds, 0);
    }

    #[test]
    fn trackinfo_overwrites_saved_seconds() {
        let mut app = signed_in_app();
        app.session.saved_seconds = 9_999;

        apply(&mut app, r#"{"behavior":"TRACKINFO","track":"Work","seconds":120}"#);

        assert_eq!(app.session.saved_seconds, 120);
        assert_eq!(message(&app), (true, SYNCED_MESSAGE.to_string()));
    }

    #[test]
    fn trackinfo_without_seconds_keeps_saved() {
        let mut app = signed_in_app();
        app.session.saved_seconds = 42;
        apply(&mut app, r#"{"behavior":"TRACKINFO","message":"hm"}"#);
        assert_eq!(app.session.saved_seconds, 42);
        assert_eq!(message(&app), (true, "hm".to_string()));
    }

    #[test]
    fn plain_message_is_success() {
        let mut app = signed_in_app();
        apply(&mut app, r#"{"message":"Added track!"}"#);
        assert_eq!(message(&app), (true, "Added track!".to_string()));
    }

    #[test]
    fn unknown_shape_is_failure() {
        let mut app = signed_in_app();
        apply(&mut app, r#"{"ok":true}"#);
        assert_eq!(message(&app), (false, UNKNOWN_RESPONSE_MESSAGE.to_string()));
    }

    #[test]
    fn malformed_body_shows_parser_diagnostic() {
        let mut app = signed_in_app();
        apply(&mut app, "Bad Gateway");
        let (is_success, text) = message(&app);
        assert!(!is_success);
        assert!(text.contains("line 1"), "diagnostic was {text:?}");
    }

    #[test]
    fn transport_failure_shows_error_text() {
        let mut app = test_app();
        app.apply_call_result(
            Err(CallError::Transport("connection refused".to_string())),
            Instant::now(),
        );
        assert_eq!(message(&app), (false, "connection refused".to_string()));
    }

    #[test]
    fn poll_keeps_unresolved_call() {
        let mut app = test_app();
        let (_completer, handle) = call_channel(RequestId(1), "/login");
        app.track_call(handle);

        app.poll_pending(Instant::now());
        assert!(app.is_call_pending());
        assert!(app.last_message.is_none());
    }

    #[test]
    fn poll_applies_resolved_call_once() {
        let mut app = test_app();
        let (completer, handle) = call_channel(RequestId(1), "/register");
        app.track_call(handle);
        completer.complete(Ok(r#"{"message":"Try logging in now! :)"}"#.to_string()));

        app.poll_pending(Instant::now());
        assert!(!app.is_call_pending());
        assert_eq!(app.message_text(), "Try logging in now! :)");

        app.last_message = None;
        app.poll_pending(Instant::now());
        assert!(app.last_message.is_none());
    }

    #[test]
    fn result_from_before_logout_is_dropped() {
        let mut app = signed_in_app();
        app.track_name = Some("Work".to_string());
        app.session.session_seconds = 30;
        let (completer, handle) = call_channel(RequestId(4), "/update");
        app.track_call(handle);

        app.logout();
        completer.complete(Ok(r#"{"behavior":"SAVEACK","message":"Saved!"}"#.to_string()));
        app.poll_pending(Instant::now());

        assert!(!app.is_call_pending());
        assert!(app.last_message.is_none());
        assert_eq!(app.session, Session::default());
    }
}
