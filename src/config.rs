use std::env;
use std::time::Duration;

use crate::constants::{DEFAULT_REQUEST_DELAY_SECS, REQUEST_DELAY_ENV, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScraperError};

#[derive(Debug, Clone)]
pub struct Config {
    /// Pause after every competitor, successful or not.
    pub request_delay: Duration,
    pub user_agent: &'static str,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_secs_f64(DEFAULT_REQUEST_DELAY_SECS),
            user_agent: USER_AGENT,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads the delay setting once from the environment (a `.env` file is honoured).
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        let raw = match env::var(REQUEST_DELAY_ENV) {
            Ok(v) => Some(v),
            Err(env::VarError::NotPresent) => None,
            Err(e) => {
                return Err(ScraperError::Config(format!(
                    "{REQUEST_DELAY_ENV} is not valid unicode: {e}"
                )))
            }
        };
        Self::from_delay_setting(raw.as_deref())
    }

    pub fn from_delay_setting(raw: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(config);
        };

        let secs: f64 = raw.parse().map_err(|e| {
            ScraperError::Config(format!("{REQUEST_DELAY_ENV}='{raw}' is not a number: {e}"))
        })?;
        config.request_delay = Duration::try_from_secs_f64(secs).map_err(|_| {
            ScraperError::Config(format!(
                "{REQUEST_DELAY_ENV}='{raw}' must be a non-negative number of seconds"
            ))
        })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_delay_uses_default() {
        let config = Config::from_delay_setting(None).unwrap();
        assert_eq!(config.request_delay, Duration::from_millis(1500));
        assert_eq!(config.timeout, Duration::from_secs(25));
    }

    #[test]
    fn test_blank_delay_uses_default() {
        let config = Config::from_delay_setting(Some("  ")).unwrap();
        assert_eq!(config.request_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_delay_override() {
        let config = Config::from_delay_setting(Some("3")).unwrap();
        assert_eq!(config.request_delay, Duration::from_secs(3));

        let config = Config::from_delay_setting(Some("0.25")).unwrap();
        assert_eq!(config.request_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_delay_is_rejected() {
        assert!(matches!(
            Config::from_delay_setting(Some("soon")),
            Err(ScraperError::Config(_))
        ));
        assert!(matches!(
            Config::from_delay_setting(Some("-1")),
            Err(ScraperError::Config(_))
        ));
    }
}
