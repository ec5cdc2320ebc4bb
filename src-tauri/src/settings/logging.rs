//! Logging configuration and initialization.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,  // tracing filter directive, e.g. "info" or "bouquet_shop_lib=debug"
    pub format: String, // "pretty" or "json"
}

impl LoggingSettings {
    /// Install the global tracing subscriber. Later calls are ignored.
    ///
    /// An unparsable `level` is an error; nothing is installed in that case.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level)
            .with_context(|| format!("invalid logging level {:?}", self.level))?;

        let result = match self.format.as_str() {
            "json" => fmt().json().with_env_filter(filter).try_init(),
            _ => fmt().with_env_filter(filter).try_init(),
        };

        if result.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
        Ok(())
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_error() {
        let settings = LoggingSettings {
            level: "bouquet_shop_lib=loudest".to_string(),
            ..LoggingSettings::default()
        };

        let err = settings.init().unwrap_err();
        assert!(err.to_string().contains("invalid logging level"));
    }

    #[test]
    fn test_repeated_init_is_ok() {
        let settings = LoggingSettings::default();
        settings.init().unwrap();
        settings.init().unwrap();
    }
}
