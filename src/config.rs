//! Configuration types for image-dl

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

/// HTTP client configuration
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Overall request timeout in seconds (None = client default, no timeout)
    #[serde(default, with = "optional_duration_serde")]
    pub timeout: Option<Duration>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

/// How a trigger behaves while a request for the same item is outstanding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Issue another request (first success wins, later ones are discarded)
    #[default]
    Allow,
    /// Ignore the trigger until the outstanding request completes
    Suppress,
}

/// Fetch behavior configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FetchPolicyConfig {
    /// Behavior of a trigger while a request is outstanding
    #[serde(default)]
    pub duplicate_requests: DuplicatePolicy,
}

/// Main configuration for [`FetchCoordinator`](crate::FetchCoordinator)
///
/// # Example
///
/// ```
/// use image_dl::Config;
///
/// let config = Config::from_json(r#"{
///     "locators": ["https://example.com/a.png"],
///     "http": { "timeout": 10 }
/// }"#).unwrap();
/// assert_eq!(config.locators.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Ordered image locators; one item is created per entry
    #[serde(default)]
    pub locators: Vec<String>,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Fetch behavior
    #[serde(default)]
    pub fetch: FetchPolicyConfig,
}

impl Config {
    /// Build a config holding the given locators and default settings
    pub fn with_locators<I, S>(locators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locators: locators.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Parse a JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config file '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json(&contents)
    }

    /// Check settings that serde cannot express
    ///
    /// Locators are not validated here: an unparseable locator yields an
    /// item that never fetches.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(Error::Config {
                message: "user agent must not be empty".to_string(),
                key: Some("http.user_agent".to_string()),
            });
        }

        if self.http.timeout == Some(Duration::ZERO) {
            return Err(Error::Config {
                message: "timeout must be greater than zero".to_string(),
                key: Some("http.timeout".to_string()),
            });
        }

        Ok(())
    }
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

// Optional Duration serialization helper
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
