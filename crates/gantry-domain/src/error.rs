//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for registration and resolution failures
///
/// Every variant represents a structural configuration error: nothing in
/// this taxonomy is transient or retriable. Errors propagate to the
/// immediate caller and are never swallowed.
#[derive(Error, Debug)]
pub enum Error {
    /// A capability was resolved via single-resolve but has no registration
    #[error("no registration for capability: {capability}")]
    NotFound {
        /// Type name of the unregistered capability
        capability: &'static str,
    },

    /// A capability was resolved via single-resolve but has more than one
    /// registration; the caller should switch to resolve-all
    #[error("ambiguous registration: {capability} has {count} registrations")]
    AmbiguousRegistration {
        /// Type name of the ambiguous capability
        capability: &'static str,
        /// Number of registrations found
        count: usize,
    },

    /// No registration under the capability carries the requested key
    #[error("no registration for capability {capability} under key: {key}")]
    KeyNotFound {
        /// Type name of the capability
        capability: &'static str,
        /// The key that was requested
        key: String,
    },

    /// A handler module key is not present in the module catalog
    #[error("no handler module registered under key: {key}")]
    ModuleNotFound {
        /// The module key that was requested
        key: String,
    },

    /// Two registrations under one capability carry the same key,
    /// making keyed lookup ambiguous; rejected when the registry is built
    #[error("duplicate key for capability {capability}: {key}")]
    DuplicateKey {
        /// Type name of the capability
        capability: &'static str,
        /// The duplicated key
        key: String,
    },

    /// A stored instance did not match the capability type it was
    /// registered under
    #[error("stored instance does not match capability type: {capability}")]
    TypeMismatch {
        /// Type name of the capability
        capability: &'static str,
    },

    /// Startup sequencing failed; fatal, never deferred to first request
    #[error("bootstrap error: {message}")]
    Bootstrap {
        /// Description of the startup failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
    },
}

impl Error {
    /// Create a bootstrap error from a message
    pub fn bootstrap(message: impl Into<String>) -> Self {
        Error::Bootstrap {
            message: message.into(),
            source: None,
        }
    }

    /// Create a bootstrap error wrapping a source error
    pub fn bootstrap_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Bootstrap {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error from a message
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
