/// Prefix of the environment variables read by [`crate::settings::ReporterSettings`].
pub const SENTRY_ENV_PREFIX: &str = "SENTRY";

/// Default DSN, consulted only when no DSN is passed to the initializer.
pub const SENTRY_DSN_ENV_VAR: &str = "SENTRY_DSN";
pub const SENTRY_ENVIRONMENT_ENV_VAR: &str = "SENTRY_ENVIRONMENT";
pub const SENTRY_RELEASE_ENV_VAR: &str = "SENTRY_RELEASE";

pub const REQUEST_ID_TAG: &str = "request_id";
