//! Client configuration.
//!
//! # Design
//! Configuration is an explicit value passed to `NoteClient::new`, scoped to
//! the client instance instead of being read once into process-global state.
//! A missing token is logged as an error but is not fatal — requests go out
//! unauthenticated and the server rejects them as it sees fit.

/// Base URL of the public NoteHub API.
pub const DEFAULT_BASE_URL: &str = "https://notehub-public.goit.study/api";

/// Environment variable holding the bearer token for [`NoteClientConfig::from_env`].
pub const TOKEN_ENV_VAR: &str = "NOTEHUB_TOKEN";

/// Base URL and optional bearer token for a [`crate::NoteClient`].
#[derive(Debug, Clone)]
pub struct NoteClientConfig {
    base_url: String,
    token: Option<String>,
}

impl NoteClientConfig {
    /// Create a config with an explicit base URL (trailing slash stripped)
    /// and optional bearer token.
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Config for the public NoteHub API, with the token read from
    /// `NOTEHUB_TOKEN`. An unset or empty variable is logged as an error;
    /// the resulting client sends unauthenticated requests.
    pub fn from_env() -> Self {
        let token = match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => Some(token),
            _ => {
                log::error!("[NoteClient] {TOKEN_ENV_VAR} is not set; requests will be unauthenticated");
                None
            }
        };
        Self::new(DEFAULT_BASE_URL, token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
