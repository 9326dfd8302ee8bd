//! Layered client configuration.
//!
//! [`ClientOptions::default`] holds the built-in values. Callers supply a
//! [`PartialClientOptions`] whose set fields replace the defaults one by one,
//! including inside the nested [`RequestDefaults`] group.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Root of the Addons FAQ service.
pub const BASE_URL: &str = "https://api.addons.prestashop.com/request/faq/";

/// Request timeout applied when the caller does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings applied to every request made by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDefaults {
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl RequestDefaults {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: None,
            user_agent: None,
        }
    }
}

/// Fully resolved transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    pub base_url: String,
    #[serde(default)]
    pub defaults: RequestDefaults,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            defaults: RequestDefaults::default(),
        }
    }
}

impl ClientOptions {
    /// Apply caller overrides on top of `self`. Unset fields keep their value.
    pub fn merge(mut self, overrides: PartialClientOptions) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        let defaults = overrides.defaults;
        if let Some(timeout_secs) = defaults.timeout_secs {
            self.defaults.timeout_secs = timeout_secs;
        }
        if let Some(connect_timeout_secs) = defaults.connect_timeout_secs {
            self.defaults.connect_timeout_secs = Some(connect_timeout_secs);
        }
        if let Some(user_agent) = defaults.user_agent {
            self.defaults.user_agent = Some(user_agent);
        }
        self
    }
}

/// Optional overrides for [`RequestDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialRequestDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Optional overrides for [`ClientOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialClientOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default)]
    pub defaults: PartialRequestDefaults,
}

impl PartialClientOptions {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.defaults.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn with_connect_timeout_secs(mut self, connect_timeout_secs: u64) -> Self {
        self.defaults.connect_timeout_secs = Some(connect_timeout_secs);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.defaults.user_agent = Some(user_agent.into());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read overrides from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
