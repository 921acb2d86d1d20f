use time::OffsetDateTime;

use crate::time_utils::whole_seconds_between;

/// Time accumulated against the selected track.
///
/// `saved_seconds` is what the server last confirmed, `session_seconds` is
/// stopped-but-unsaved local time, and `counting_since` is set while the
/// timer runs. Live time is never folded in until the timer stops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub saved_seconds: u64,
    pub session_seconds: u64,
    pub counting_since: Option<OffsetDateTime>,
}

impl Session {
    pub fn is_counting(&self) -> bool {
        self.counting_since.is_some()
    }

    /// Start counting, or stop and add the elapsed whole seconds.
    pub fn toggle(&mut self, now: OffsetDateTime) {
        match self.counting_since.take() {
            Some(start) => self.session_seconds += whole_seconds_between(start, now),
            None => self.counting_since = Some(now),
        }
    }

    /// Seconds of the running stretch, computed fresh each frame.
    pub fn live_seconds(&self, now: OffsetDateTime) -> u64 {
        self.counting_since
            .map(|start| whole_seconds_between(start, now))
            .unwrap_or(0)
    }

    pub fn unsynced_seconds(&self, now: OffsetDateTime) -> u64 {
        self.session_seconds + self.live_seconds(now)
    }

    pub fn total_seconds(&self, now: OffsetDateTime) -> u64 {
        self.saved_seconds + self.unsynced_seconds(now)
    }

    /// The server stored the session: it now belongs to the saved total.
    pub fn acknowledge_save(&mut self) {
        self.saved_seconds += self.session_seconds;
        self.session_seconds = 0;
    }

    /// Drop stopped local time without touching the server.
    pub fn reset(&mut self) {
        self.session_seconds = 0;
    }
}
