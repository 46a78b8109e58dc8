//! Backend connection settings.

use std::env;
use std::time::Duration;

/// Where and how to reach the recharge backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Scheme and host of the backend, without the `/api` suffix.
    pub base_url: String,
    /// Per-request timeout. Only honoured by native builds; the browser
    /// owns timeouts on wasm. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl BackendConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://trcnfx.com";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: Some(Self::DEFAULT_TIMEOUT),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Creates a config from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `RECHARGE_API_BASE_URL`: read at runtime first, then at compile
    ///   time (wasm builds have no process environment).
    /// - `RECHARGE_API_TIMEOUT_SECS`: request timeout in seconds. `0`
    ///   disables the timeout. Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let base_url = env::var("RECHARGE_API_BASE_URL")
            .ok()
            .or_else(|| option_env!("RECHARGE_API_BASE_URL").map(str::to_string))
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let request_timeout = match env::var("RECHARGE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => Some(Self::DEFAULT_TIMEOUT),
        };

        Self {
            base_url,
            request_timeout,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global, so everything touching them lives in one test.
    #[test]
    fn from_env_reads_overrides_and_falls_back() {
        env::remove_var("RECHARGE_API_BASE_URL");
        env::remove_var("RECHARGE_API_TIMEOUT_SECS");
        let config = BackendConfig::from_env();
        if option_env!("RECHARGE_API_BASE_URL").is_none() {
            assert_eq!(config.base_url, BackendConfig::DEFAULT_BASE_URL);
        }
        assert_eq!(config.request_timeout, Some(BackendConfig::DEFAULT_TIMEOUT));

        env::set_var("RECHARGE_API_BASE_URL", " http://localhost:5000 ");
        env::set_var("RECHARGE_API_TIMEOUT_SECS", "5");
        let config = BackendConfig::from_env();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));

        env::set_var("RECHARGE_API_TIMEOUT_SECS", "0");
        assert_eq!(BackendConfig::from_env().request_timeout, None);

        env::set_var("RECHARGE_API_TIMEOUT_SECS", "soon");
        assert_eq!(
            BackendConfig::from_env().request_timeout,
            Some(BackendConfig::DEFAULT_TIMEOUT)
        );

        env::remove_var("RECHARGE_API_BASE_URL");
        env::remove_var("RECHARGE_API_TIMEOUT_SECS");
    }

    #[test]
    fn builder_sets_timeout() {
        let config = BackendConfig::new("http://127.0.0.1:1").with_timeout(None);
        assert_eq!(config.base_url, "http://127.0.0.1:1");
        assert_eq!(config.request_timeout, None);
    }
}
