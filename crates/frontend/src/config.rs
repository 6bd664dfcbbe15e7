//! Application configuration.

/// Demo identity used until real authentication lands in the backend.
const DEMO_USER_ID: &str = "user-demo-123";

/// Configuration shared by the API client and every page.
///
/// The backend address and the acting user identity have exactly one
/// source; components receive this through a context provider instead of
/// hard-coding either value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin, e.g. `https://jobs.example.com`. Empty means
    /// same-origin relative requests.
    pub backend_url: String,
    /// Identity all reads and commands act on behalf of.
    pub user_id: String,
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables.
    ///
    /// `BACKEND_URL` is injected by the build; without it the client
    /// falls back to same-origin paths, which is what the dev server
    /// setup expects.
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL").unwrap_or("").to_string(),
            user_id: option_env!("DASHBOARD_USER_ID")
                .unwrap_or(DEMO_USER_ID)
                .to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_a_user() {
        let config = AppConfig::default();
        assert!(!config.user_id.is_empty());
    }
}
