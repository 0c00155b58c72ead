use crate::{env_required, ConfigError, FromEnv};
use std::env;

/// Cross-origin settings: the single browser origin allowed to call the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl CorsConfig {
    pub fn new(allowed_origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.into(),
        }
    }
}

impl FromEnv for CorsConfig {
    /// Reads `FRONTEND_URL`, falling back to the legacy `FROTEND_URL` spelling.
    fn from_env() -> Result<Self, ConfigError> {
        let allowed_origin = match env::var("FROTEND_URL") {
            Ok(legacy) if env::var("FRONTEND_URL").is_err() => legacy,
            _ => env_required("FRONTEND_URL")?,
        };

        let allowed_origin = allowed_origin.trim().trim_end_matches('/').to_string();
        if allowed_origin.is_empty() {
            return Err(ConfigError::ParseError {
                key: "FRONTEND_URL".to_string(),
                details: "origin cannot be empty".to_string(),
            });
        }

        Ok(Self { allowed_origin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_config_requires_frontend_url() {
        temp_env::with_vars_unset(["FRONTEND_URL", "FROTEND_URL"], || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("FRONTEND_URL"));
        });
    }

    #[test]
    fn test_cors_config_reads_frontend_url() {
        temp_env::with_vars(
            [
                ("FRONTEND_URL", Some("http://localhost:5173")),
                ("FROTEND_URL", None),
            ],
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(config.allowed_origin, "http://localhost:5173");
            },
        );
    }

    #[test]
    fn test_cors_config_accepts_legacy_variable() {
        temp_env::with_vars(
            [
                ("FRONTEND_URL", None),
                ("FROTEND_URL", Some("http://localhost:5173/")),
            ],
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(config.allowed_origin, "http://localhost:5173");
            },
        );
    }

    #[test]
    fn test_cors_config_prefers_frontend_url() {
        temp_env::with_vars(
            [
                ("FRONTEND_URL", Some("https://shop.example.com")),
                ("FROTEND_URL", Some("http://localhost:5173")),
            ],
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(config.allowed_origin, "https://shop.example.com");
            },
        );
    }

    #[test]
    fn test_cors_config_rejects_blank_origin() {
        temp_env::with_vars([("FRONTEND_URL", Some("  ")), ("FROTEND_URL", None)], || {
            assert!(matches!(
                CorsConfig::from_env(),
                Err(ConfigError::ParseError { .. })
            ));
        });
    }
}
