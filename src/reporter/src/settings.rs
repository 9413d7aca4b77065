use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::constants::SENTRY_ENV_PREFIX;

/// Reporter settings coming from the process environment.
///
/// Sources, lowest priority first: built-in defaults, then `SENTRY_*`
/// environment variables (`SENTRY_DSN`, `SENTRY_ENVIRONMENT`, `SENTRY_RELEASE`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReporterSettings {
    #[serde(default)]
    pub dsn: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub release: Option<String>,
}

impl ReporterSettings {
    pub fn load() -> Result<Self, ConfigError> {
        let settings: ReporterSettings = Config::builder()
            .set_default("environment", default_environment())?
            .add_source(Environment::with_prefix(SENTRY_ENV_PREFIX).ignore_empty(true))
            .build()?
            .try_deserialize()?;

        Ok(settings.normalized())
    }

    fn normalized(self) -> Self {
        Self {
            dsn: non_blank(self.dsn),
            environment: non_blank(self.environment),
            release: non_blank(self.release),
        }
    }
}

fn default_environment() -> &'static str {
    if cfg!(debug_assertions) {
        "dev"
    } else {
        "production"
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// An explicit DSN always wins over the one from the settings. A blank
/// explicit DSN disables reporting instead of falling back to `SENTRY_DSN`.
pub fn resolve_dsn(explicit: Option<&str>, settings: &ReporterSettings) -> Option<String> {
    match explicit {
        Some(dsn) => non_blank(Some(dsn.to_string())),
        None => settings.dsn.clone(),
    }
}
