use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use sentry::TransportFactory;

use crate::identity::{IdentityExtractor, NoExtractor};

/// Everything the initializer needs besides the DSN.
pub struct ReporterConfig {
    pub(crate) extractor: Arc<dyn IdentityExtractor>,
    pub(crate) release: Option<String>,
    pub(crate) environment: Option<String>,
    pub(crate) tags: BTreeMap<String, String>,
    pub(crate) transport: Option<Arc<dyn TransportFactory>>,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            extractor: Arc::new(NoExtractor),
            release: None,
            environment: None,
            tags: BTreeMap::new(),
            transport: None,
        }
    }
}

impl ReporterConfig {
    pub(crate) fn apply<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = ReporterOption>,
    {
        for option in options {
            (option.0)(&mut self);
        }
        self
    }
}

impl fmt::Debug for ReporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterConfig")
            .field("release", &self.release)
            .field("environment", &self.environment)
            .field("tags", &self.tags)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

/// One change to a [`ReporterConfig`]. Options are applied in the order given.
pub struct ReporterOption(Box<dyn FnOnce(&mut ReporterConfig) + Send>);

/// Attaches the user returned by `extractor` to every captured event.
pub fn with_identity<E>(extractor: E) -> ReporterOption
where
    E: IdentityExtractor + 'static,
{
    ReporterOption(Box::new(move |config: &mut ReporterConfig| {
        config.extractor = Arc::new(extractor);
    }))
}

pub fn with_release(release: impl Into<String>) -> ReporterOption {
    let release = release.into();
    ReporterOption(Box::new(move |config: &mut ReporterConfig| {
        config.release = Some(release);
    }))
}

/// Overrides `SENTRY_ENVIRONMENT`.
pub fn with_environment(environment: impl Into<String>) -> ReporterOption {
    let environment = environment.into();
    ReporterOption(Box::new(move |config: &mut ReporterConfig| {
        config.environment = Some(environment);
    }))
}

/// Adds a tag to every event. A later tag with the same key wins.
pub fn with_tag(key: impl Into<String>, value: impl Into<String>) -> ReporterOption {
    let (key, value) = (key.into(), value.into());
    ReporterOption(Box::new(move |config: &mut ReporterConfig| {
        config.tags.insert(key, value);
    }))
}

/// Replaces the HTTP transport, e.g. with `sentry::test::TestTransport`.
pub fn with_transport<F>(factory: F) -> ReporterOption
where
    F: TransportFactory + 'static,
{
    ReporterOption(Box::new(move |config: &mut ReporterConfig| {
        config.transport = Some(Arc::new(factory));
    }))
}
