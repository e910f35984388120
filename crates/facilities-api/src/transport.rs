// Shared transport configuration for building reqwest::Client instances.
//
// The HTTP source and any future endpoints share timeout and user-agent
// settings through this module.

use std::time::Duration;

use crate::error::Error;

const USER_AGENT: &str = concat!("facilities/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: USER_AGENT.into(),
        }
    }
}

impl TransportConfig {
    /// Config with a custom request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()?;
        Ok(client)
    }
}
