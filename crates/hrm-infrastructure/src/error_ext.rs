//! Error context for host reads
//!
//! Library errors (`std::io`, `nix`, integer parsing, figment, regex) are
//! mapped onto the domain [`Error`] variant that matches what failed: a
//! pseudo-file or `statvfs` call becomes `Io`, a bad counter becomes `Parse`,
//! config loading becomes `Configuration`. The message names the path, meminfo
//! key or battery attribute involved.
//!
//! ```
//! use hrm_domain::Error;
//! use hrm_infrastructure::ErrorContext;
//!
//! let path = std::path::Path::new("/nonexistent/power_supply/BAT0/capacity");
//! let err = std::fs::read_to_string(path)
//!     .with_io_context(|| format!("failed to read {}", path.display()))
//!     .unwrap_err();
//! assert!(matches!(err, Error::Io { .. }));
//!
//! let err = "4x".parse::<u64>().parse_context("MemTotal value").unwrap_err();
//! assert!(err.to_string().contains("MemTotal value"));
//! ```

use hrm_domain::error::{Error, Result};
use std::fmt;

/// Attach a description of the failed read to a library error
pub trait ErrorContext<T> {
    /// Map to `Internal`; for failures that are bugs rather than host state
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Map to `Io`, keeping the source; `f` only runs on failure
    fn with_io_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Map to `Configuration`, keeping the source
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Map to `Parse`
    fn parse_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::internal(format!("{context}: {err}")))
    }

    fn with_io_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::io_with_source(format!("{}: {err}", f()), err))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn parse_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::parse(format!("{context}: {err}")))
    }
}
