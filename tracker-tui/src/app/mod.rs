use std::time::Instant;

use tracker_client::CallHandle;

mod interpreter;
mod navigation;
mod session;
mod state;
pub use session::Session;
pub use state::{
    AuthToken, LastMessage, LoginField, Screen, TextInput, AUTH_TOKEN_PLACEHOLDER,
};

pub const DEFAULT_TITLE: &str = "Time Tracker: Log work time!";

/// The call currently being waited on, and the sign-in it was made under.
#[derive(Debug)]
pub struct PendingCall {
    pub handle: CallHandle,
    pub epoch: u64,
}

/// All client state. Owned by the event loop and handed to every screen.
pub struct App {
    pub running: bool,
    pub server_url: String,

    // Authentication
    pub auth: AuthToken,
    /// Bumped on logout so late results from the previous sign-in are dropped.
    pub session_epoch: u64,
    pub username_input: TextInput,
    pub password_input: TextInput,
    pub login_field: LoginField,

    // Track selection
    pub track_name: Option<String>,
    pub tracks: Vec<String>,
    pub tracks_cached: bool,
    pub selected_track_index: usize,
    pub new_track_input: Option<TextInput>, // Some(_) while the create form is open

    // Timer
    pub session: Session,

    // Dialog flags
    pub close_requested: bool,
    pub logout_requested: bool,

    // Network
    pub pending: Option<PendingCall>,
    pub last_message: Option<LastMessage>,

    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(server_url: &str) -> Self {
        Self {
            running: true,
            server_url: server_url.to_string(),
            auth: AuthToken::default(),
            session_epoch: 0,
            username_input: TextInput::new(),
            password_input: TextInput::new(),
            login_field: LoginField::Username,
            track_name: None,
            tracks: Vec::new(),
            tracks_cached: false,
            selected_track_index: 0,
            new_track_input: None,
            session: Session::default(),
            close_requested: false,
            logout_requested: false,
            pending: None,
            last_message: None,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn window_title(&self) -> String {
        if self.auth.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            format!("({}) Time Tracker", self.auth.username)
        }
    }

    pub fn is_call_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start waiting on `handle`. A call already being waited on is abandoned.
    pub fn track_call(&mut self, handle: CallHandle) {
        if let Some(previous) = self.pending.take() {
            tracing::debug!(
                request_id = %previous.handle.id(),
                path = previous.handle.path(),
                "abandoning unresolved call"
            );
        }
        self.pending = Some(PendingCall {
            handle,
            epoch: self.session_epoch,
        });
    }

    pub fn set_message(&mut self, is_success: bool, text: impl Into<String>, now: Instant) {
        self.last_message = Some(LastMessage {
            is_success,
            text: text.into(),
            shown_at: now,
        });
    }

    pub fn expire_message(&mut self, now: Instant) {
        if self
            .last_message
            .as_ref()
            .is_some_and(|message| message.is_expired(now))
        {
            self.last_message = None;
        }
    }

    /// The message to draw this frame, if any.
    pub fn visible_message(&self) -> Option<&LastMessage> {
        self.last_message
            .as_ref()
            .filter(|message| !message.text.is_empty())
    }

    #[cfg(test)]
    pub fn message_text(&self) -> &str {
        self.last_message
            .as_ref()
            .map(|message| message.text.as_str())
            .unwrap_or("")
    }

    pub fn selected_track(&self) -> Option<&String> {
        self.tracks.get(self.selected_track_index)
    }
}
