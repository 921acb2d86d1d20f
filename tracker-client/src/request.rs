use reqwest::Method;

/// Every call the client makes against the time-tracking server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Server name and version; answered with a `VERSION` behavior.
    Version,
    Login { username: String, password: String },
    Register { username: String, password: String },
    /// Track list of an account; answered with an `ACCOUNT` behavior.
    Account { uid: u64 },
    NewTrack { track: String, uid: u64 },
    /// Stored seconds of a track; answered with a `TRACKINFO` behavior.
    Count { track: String, uid: u64 },
    /// Add `seconds` to a track; answered with a `SAVEACK` behavior.
    Update { uid: u64, track: String, seconds: u64 },
    Delete { track: String, uid: u64 },
}

impl Request {
    pub fn method(&self) -> Method {
        match self {
            Request::Version => Method::GET,
            _ => Method::POST,
        }
    }

    /// Path below the `/api` prefix.
    pub fn path(&self) -> &'static str {
        match self {
            Request::Version => "/version",
            Request::Login { .. } => "/login",
            Request::Register { .. } => "/register",
            Request::Account { .. } => "/account",
            Request::NewTrack { .. } => "/new",
            Request::Count { .. } => "/count",
            Request::Update { .. } => "/update",
            Request::Delete { .. } => "/delete",
        }
    }

    pub fn form(&self) -> FormBody {
        match self {
            Request::Version => FormBody::new(),
            Request::Login { username, password } | Request::Register { username, password } => {
                FormBody::new()
                    .field("username", username)
                    .field("password", password)
            }
            Request::Account { uid } => FormBody::new().field("uid", uid),
            Request::NewTrack { track, uid }
            | Request::Count { track, uid }
            | Request::Delete { track, uid } => {
                FormBody::new().field("track", track).field("uid", uid)
            }
            Request::Update {
                uid,
                track,
                seconds,
            } => FormBody::new()
                .field("uid", uid)
                .field("track", track)
                .field("seconds", seconds),
        }
    }
}

/// An `application/x-www-form-urlencoded` body, fields kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(&'static str, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &'static str, value: impl ToString) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names only, safe to log.
    pub fn keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(key, _)| *key).collect()
    }

    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
