use serde::Deserialize;
use serde_json::Value;

/// A server response body, classified by shape.
///
/// Precedence follows the server contract: an `error` key wins over a
/// `behavior` key, which wins over a bare `message`.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Error(String),
    Behavior {
        behavior: Behavior,
        message: Option<String>,
    },
    Message(String),
    Unrecognized(Value),
}

/// The closed set of response schemas announced through the `behavior` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
    Version(VersionInfo),
    /// `None` when the reply lacks the display name or the numeric user id.
    Authentication(Option<Identity>),
    Account { tracks: Vec<String> },
    SaveAck,
    TrackInfo {
        track: Option<String>,
        seconds: Option<u64>,
    },
    Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub uid: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VersionInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
}

impl Reply {
    /// Classify a raw body. Fails only when the body is not JSON at all.
    pub fn parse(body: &str) -> Result<Reply, serde_json::Error> {
        let root: Value = serde_json::from_str(body)?;
        Ok(Self::classify(root))
    }

    pub fn classify(root: Value) -> Reply {
        if let Some(error) = root.get("error") {
            return Reply::Error(value_text(error));
        }

        if let Some(tag) = root.get("behavior") {
            let message = root.get("message").map(value_text);
            let behavior = Behavior::from_tagged(&value_text(tag), &root);
            return Reply::Behavior { behavior, message };
        }

        match root.get("message") {
            Some(message) => Reply::Message(value_text(message)),
            None => Reply::Unrecognized(root),
        }
    }
}

impl Behavior {
    fn from_tagged(tag: &str, root: &Value) -> Behavior {
        match tag {
            "VERSION" => Behavior::Version(
                serde_json::from_value(root.clone()).unwrap_or_default(),
            ),
            "AUTHENTICATION" => {
                let username = root.get("username").and_then(Value::as_str);
                let uid = root.get("uid").and_then(Value::as_u64);
                Behavior::Authentication(match (username, uid) {
                    (Some(username), Some(uid)) => Some(Identity {
                        username: username.to_string(),
                        uid,
                    }),
                    _ => None,
                })
            }
            "ACCOUNT" => Behavior::Account {
                tracks: root
                    .get("tracks")
                    .and_then(Value::as_array)
                    .map(|entries| {
                        entries
                            .iter()
                            .filter_map(|entry| entry.get("track").map(value_text))
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            "SAVEACK" => Behavior::SaveAck,
            "TRACKINFO" => Behavior::TrackInfo {
                track: root.get("track").and_then(Value::as_str).map(str::to_string),
                seconds: root.get("seconds").and_then(Value::as_u64),
            },
            other => Behavior::Unrecognized(other.to_string()),
        }
    }
}

/// String fields are taken as-is; anything else is rendered as JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
