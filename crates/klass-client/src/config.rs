use std::time::Duration;

/// Production KLASS base URL.
const BASE_URL: &str = "https://data.ssb.no/api/klass/v1/";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("klass-client/", env!("CARGO_PKG_VERSION"));

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a [`KlassClient`](crate::KlassClient).
///
/// Passed explicitly to `KlassClient::new`; there is no global state.
/// The default points at the production KLASS instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT_VALUE.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Joins a relative endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
