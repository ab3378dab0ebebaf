//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for host metric collection
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error, including the path involved
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Content did not match the expected format
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse
        message: String,
    },

    /// Labeled value missing from pseudo-file text
    #[error("Not found: {resource}")]
    NotFound {
        /// The key or resource that was not found
        resource: String,
    },

    /// A quantity used as a divisor was zero
    #[error("Divide by zero: {quantity} is zero")]
    ZeroDivisor {
        /// The quantity that was zero (e.g. "total memory")
        quantity: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// A background component was read before it was started
    #[error("{component} has not been started")]
    NotStarted {
        /// The component that must be started first
        component: String,
    },

    /// Two CPU counter snapshots showed no elapsed time
    #[error("No CPU activity detected during the sample interval")]
    NoCpuActivity,

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create a parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a zero divisor error
    pub fn zero_divisor<S: Into<String>>(quantity: S) -> Self {
        Self::ZeroDivisor {
            quantity: quantity.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not started error
    pub fn not_started<S: Into<String>>(component: S) -> Self {
        Self::NotStarted {
            component: component.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// Whether retrying the same operation later may succeed.
    ///
    /// Only a sample window without CPU activity qualifies; the rolling
    /// sampler retries it on its next iteration.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::NoCpuActivity)
    }
}
