use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use reporter_auth::RequestContext;
use sentry::types::Uuid;
use tracing::info;

use crate::client::ErrorReporter;
use crate::error::ReporterError;
use crate::options::{ReporterConfig, ReporterOption};
use crate::settings::{resolve_dsn, ReporterSettings};

static REPORTER: Lazy<ArcSwap<ErrorReporter>> =
    Lazy::new(|| ArcSwap::from_pointee(ErrorReporter::disabled()));

/// Process-wide error reporter.
pub struct Sentry;

impl Sentry {
    /// Builds a reporter and makes it the process-wide one.
    ///
    /// `dsn` takes priority over `SENTRY_DSN`; with neither, the reporter is
    /// installed disabled. On error the current reporter stays in place.
    pub fn initialize<I>(
        dsn: Option<&str>,
        options: I,
    ) -> Result<Arc<ErrorReporter>, ReporterError>
    where
        I: IntoIterator<Item = ReporterOption>,
    {
        let settings = ReporterSettings::load()?;
        let dsn = resolve_dsn(dsn, &settings);
        let config = ReporterConfig::default().apply(options);

        let reporter = Arc::new(ErrorReporter::new(dsn.as_deref(), config, &settings)?);
        REPORTER.store(Arc::clone(&reporter));

        match reporter.store_url() {
            Some(url) => info!("error reporter initialized, sending to {}", url),
            None => info!("error reporter initialized without a DSN, events are dropped"),
        }
        Ok(reporter)
    }

    /// Snapshot of the current reporter. Never uninitialized.
    pub fn reporter() -> Arc<ErrorReporter> {
        REPORTER.load_full()
    }

    pub fn capture_error<E>(ctx: &RequestContext, err: &E) -> Uuid
    where
        E: Error + ?Sized,
    {
        Self::reporter().capture_error(ctx, err)
    }

    pub fn capture_anyhow(ctx: &RequestContext, err: &anyhow::Error) -> Uuid {
        Self::reporter().capture_anyhow(ctx, err)
    }

    pub fn flush(timeout: Duration) -> bool {
        Self::reporter().flush(timeout)
    }
}
