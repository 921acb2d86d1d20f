use std::time::Instant;

use time::OffsetDateTime;
use tracker_client::Request;

use super::*;

impl App {
    /// Which screen this frame shows, derived purely from state.
    pub fn screen(&self) -> Screen {
        if self.auth.is_empty() {
            Screen::Login
        } else if self.track_name.is_none() {
            Screen::TrackPicker
        } else if self.close_requested {
            Screen::CloseConfirm
        } else if self.logout_requested {
            Screen::LogoutConfirm
        } else {
            Screen::Timer
        }
    }

    /// Per-frame bookkeeping before drawing. Returns a request the current
    /// screen needs issued on entry, if any.
    pub fn begin_frame(&mut self, now: Instant, clock: OffsetDateTime) -> Option<Request> {
        self.expire_message(now);

        match self.screen() {
            Screen::TrackPicker => {
                if !self.tracks_cached && !self.is_call_pending() {
                    self.tracks_cached = true;
                    return Some(Request::Account {
                        uid: self.auth.user_id,
                    });
                }
            }
            Screen::LogoutConfirm => {
                self.tracks_cached = false;
                if self.session.unsynced_seconds(clock) == 0 {
                    self.logout();
                }
            }
            Screen::Login => {}
            Screen::CloseConfirm | Screen::Timer => self.tracks_cached = false,
        }
        None
    }

    // Login

    pub fn next_login_field(&mut self) {
        self.login_field = match self.login_field {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn focused_login_input(&mut self) -> &mut TextInput {
        match self.login_field {
            LoginField::Username => &mut self.username_input,
            LoginField::Password => &mut self.password_input,
        }
    }

    pub fn can_submit_login(&self) -> bool {
        !self.is_call_pending() && !self.username_input.is_empty() && !self.password_input.is_empty()
    }

    /// Consume both credential fields into a login or register request.
    pub fn submit_login(&mut self, register: bool) -> Option<Request> {
        if !self.can_submit_login() {
            return None;
        }
        let username = self.username_input.take();
        let password = self.password_input.take();
        self.login_field = LoginField::Username;

        Some(if register {
            Request::Register { username, password }
        } else {
            Request::Login { username, password }
        })
    }

    // Track picker

    pub fn select_next_track(&mut self) {
        if self.selected_track_index + 1 < self.tracks.len() {
            self.selected_track_index += 1;
        }
    }

    pub fn select_previous_track(&mut self) {
        self.selected_track_index = self.selected_track_index.saturating_sub(1);
    }

    pub fn pick_selected_track(&mut self) -> Option<Request> {
        if self.is_call_pending() {
            return None;
        }
        let track = self.selected_track()?.clone();
        tracing::info!(track = %track, "track picked");
        self.track_name = Some(track.clone());
        self.session = Session::default();
        Some(Request::Count {
            track,
            uid: self.auth.user_id,
        })
    }

    /// Remove the selected track locally and build the matching delete call.
    pub fn delete_selected_track(&mut self) -> Option<Request> {
        if self.is_call_pending() || self.selected_track_index >= self.tracks.len() {
            return None;
        }
        let track = self.tracks.remove(self.selected_track_index);
        if self.selected_track_index >= self.tracks.len() {
            self.selected_track_index = self.tracks.len().saturating_sub(1);
        }
        Some(Request::Delete {
            track,
            uid: self.auth.user_id,
        })
    }

    pub fn open_new_track_form(&mut self) {
        self.new_track_input = Some(TextInput::new());
    }

    pub fn cancel_new_track_form(&mut self) {
        self.new_track_input = None;
    }

    /// Blank names keep the form open.
    pub fn submit_new_track(&mut self) -> Option<Request> {
        if self.is_call_pending() {
            return None;
        }
        let track = self.new_track_input.as_ref()?.value.trim().to_string();
        if track.is_empty() {
            return None;
        }
        self.new_track_input = None;
        self.tracks_cached = false;
        Some(Request::NewTrack {
            track,
            uid: self.auth.user_id,
        })
    }

    // Timer

    pub fn toggle_counting(&mut self, clock: OffsetDateTime) {
        self.session.toggle(clock);
    }

    pub fn can_sync(&self) -> bool {
        !self.is_call_pending() && self.track_name.is_some()
    }

    pub fn sync(&mut self) -> Option<Request> {
        if !self.can_sync() {
            return None;
        }
        Some(Request::Count {
            track: self.track_name.clone()?,
            uid: self.auth.user_id,
        })
    }

    pub fn can_save(&self) -> bool {
        self.can_sync() && !self.session.is_counting() && self.session.session_seconds > 0
    }

    pub fn save(&mut self) -> Option<Request> {
        if !self.can_save() {
            return None;
        }
        Some(Request::Update {
            uid: self.auth.user_id,
            track: self.track_name.clone()?,
            seconds: self.session.session_seconds,
        })
    }

    pub fn can_reset(&self) -> bool {
        !self.session.is_counting() && self.session.session_seconds > 0
    }

    pub fn reset_session(&mut self) {
        if self.can_reset() {
            self.session.reset();
        }
    }

    // Dialogs

    /// Screens without unsaved time close at once; the timer asks first.
    pub fn request_close(&mut self) {
        match self.screen() {
            Screen::Login | Screen::TrackPicker => self.quit(),
            _ => self.close_requested = true,
        }
    }

    pub fn confirm_close(&mut self) {
        self.quit();
    }

    pub fn cancel_close(&mut self) {
        self.close_requested = false;
    }

    pub fn request_logout(&mut self) {
        self.logout_requested = true;
    }

    pub fn cancel_logout(&mut self) {
        self.logout_requested = false;
    }

    /// Forget the signed-in user and return to the login screen. A call still
    /// in flight stays tracked; its result is dropped by the epoch check.
    pub fn logout(&mut self) {
        tracing::info!(username = %self.auth.username, "logged out");
        self.auth = AuthToken::default();
        self.session_epoch += 1;
        self.track_name = None;
        self.tracks.clear();
        self.tracks_cached = false;
        self.selected_track_index = 0;
        self.new_track_input = None;
        self.session = Session::default();
        self.logout_requested = false;
        self.close_requested = false;
    }
}
