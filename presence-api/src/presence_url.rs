use std::env;

#[derive(Debug, Clone)]
pub struct PresenceUrl(String);

impl AsRef<str> for PresenceUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PresenceUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Creates a new PresenceUrl from the environment variable `PRESENCE_API_URL`.
    pub fn from_env() -> Self {
        Self(env::var("PRESENCE_API_URL").expect("PRESENCE_API_URL must be set in env"))
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }
}
