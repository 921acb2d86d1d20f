/// Base address of the time-tracking server, e.g. `http://127.0.0.1:5540`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl(String);

impl std::fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ApiUrl {
    pub fn new(base: &str) -> Self {
        Self(base.trim().trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// Full URL of an endpoint under the server's `/api` prefix.
    pub fn endpoint(&self, path: &str) -> Self {
        self.append_path("api").append_path(path)
    }
}
