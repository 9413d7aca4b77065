//! Process-wide error reporting with the requesting user attached.
//!
//! ```no_run
//! use reporter::{with_identity, RequestContext, Sentry, TokenIdentityExtractor};
//!
//! Sentry::initialize(None, [with_identity(TokenIdentityExtractor)])?;
//!
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
//! Sentry::capture_error(&RequestContext::default(), &err);
//! # Ok::<(), reporter::ReporterError>(())
//! ```

pub mod client;
pub mod constants;
pub mod error;
pub mod global;
pub mod identity;
pub mod options;
pub mod settings;
#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod test_utils;

pub use client::ErrorReporter;
pub use error::{IdentityError, ReporterError};
pub use identity::{IdentityExtractor, NoExtractor, TokenIdentityExtractor, UserIdentity};
pub use options::{
    with_environment, with_identity, with_release, with_tag, with_transport, ReporterConfig,
    ReporterOption,
};
pub use reporter_auth::{RequestContext, TokenParser};
pub use global::Sentry;
pub use settings::ReporterSettings;
