use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use reporter_auth::RequestContext;
use sentry::protocol::Event;
use sentry::types::{Dsn, Uuid};
use sentry::transports::DefaultTransportFactory;
use sentry::{ClientOptions, TransportFactory};
use tracing::{debug, warn};

use crate::constants::REQUEST_ID_TAG;
use crate::error::{IdentityError, ReporterError};
use crate::identity::{IdentityExtractor, NoExtractor, UserIdentity};
use crate::options::ReporterConfig;
use crate::settings::ReporterSettings;

/// A sentry client bound to one DSN, plus the extractor used to attach users
/// to its events.
pub struct ErrorReporter {
    client: sentry::Client,
    extractor: Arc<dyn IdentityExtractor>,
    tags: BTreeMap<String, String>,
}

impl ErrorReporter {
    /// Builds a reporter for `dsn`. Without a DSN every capture is dropped.
    pub fn new(
        dsn: Option<&str>,
        config: ReporterConfig,
        settings: &ReporterSettings,
    ) -> Result<Self, ReporterError> {
        let dsn = dsn
            .map(|dsn| {
                Dsn::from_str(dsn).map_err(|source| {
                    warn!("rejected sentry DSN: {}", source);
                    ReporterError::InitFailed {
                        dsn: dsn.to_string(),
                        source,
                    }
                })
            })
            .transpose()?;

        let release = config.release.or_else(|| settings.release.clone());
        let environment = config.environment.or_else(|| settings.environment.clone());

        // not sentry::apply_defaults: it reads SENTRY_DSN by itself
        let transport = config
            .transport
            .unwrap_or_else(|| Arc::new(DefaultTransportFactory) as Arc<dyn TransportFactory>);
        let options = ClientOptions {
            dsn,
            release: release.map(Into::into),
            environment: environment.map(Into::into),
            transport: Some(transport),
            ..Default::default()
        };

        Ok(Self {
            client: sentry::Client::from_config(options),
            extractor: config.extractor,
            tags: config.tags,
        })
    }

    /// A reporter with no DSN. Used until the first successful initialization.
    pub fn disabled() -> Self {
        Self {
            client: sentry::Client::from_config(ClientOptions::default()),
            extractor: Arc::new(NoExtractor),
            tags: BTreeMap::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_enabled()
    }

    /// URL events are submitted to, e.g. `https://host/api/{project}/store/`.
    pub fn store_url(&self) -> Option<String> {
        self.client
            .dsn()
            .map(|dsn| dsn.store_api_url().to_string())
    }

    pub fn user_identity(&self, ctx: &RequestContext) -> Result<UserIdentity, IdentityError> {
        self.extractor.extract(ctx)
    }

    /// Reports `err`, attaching the request's user when it can be determined.
    /// Returns the event id, nil when nothing was sent.
    pub fn capture_error<E>(&self, ctx: &RequestContext, err: &E) -> Uuid
    where
        E: Error + ?Sized,
    {
        self.capture_error_with_tags(ctx, err, &[])
    }

    pub fn capture_error_with_tags<E>(
        &self,
        ctx: &RequestContext,
        err: &E,
        tags: &[(&str, &str)],
    ) -> Uuid
    where
        E: Error + ?Sized,
    {
        self.capture_event(ctx, sentry::event_from_error(err), tags)
    }

    /// Keeps the anyhow backtrace when one was captured.
    pub fn capture_anyhow(&self, ctx: &RequestContext, err: &anyhow::Error) -> Uuid {
        self.capture_event(ctx, sentry::integrations::anyhow::event_from_error(err), &[])
    }

    /// Waits up to `timeout` for queued events to be sent.
    pub fn flush(&self, timeout: Duration) -> bool {
        self.client.flush(Some(timeout))
    }

    fn capture_event(
        &self,
        ctx: &RequestContext,
        mut event: Event<'static>,
        tags: &[(&str, &str)],
    ) -> Uuid {
        if !self.client.is_enabled() {
            return Uuid::nil();
        }

        match self.extractor.extract(ctx) {
            Ok(identity) => event.user = Some(identity.into()),
            Err(err) => debug!("reporting error without user: {}", err),
        }

        for (key, value) in &self.tags {
            event.tags.insert(key.clone(), value.clone());
        }
        if let Some(request_id) = ctx.request_id() {
            event
                .tags
                .insert(REQUEST_ID_TAG.to_string(), request_id.to_string());
        }
        for (key, value) in tags {
            event.tags.insert(key.to_string(), value.to_string());
        }

        self.client.capture_event(event, None)
    }
}

impl fmt::Debug for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorReporter")
            .field("store_url", &self.store_url())
            .field("enabled", &self.is_enabled())
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
