//! Error types for Solidafy Paginator
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for Solidafy Paginator
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Lookup Errors
    // ============================================================================
    #[error("Page {page} does not exist")]
    PageNotFound { page: i64 },

    #[error("Page {page} does not contain item number {item}")]
    ItemNotFound { page: i64, item: usize },

    #[error("Unknown scrolling style '{name}' (expected one of: all, sliding, elastic, jumping)")]
    InvalidStrategy { name: String },

    // ============================================================================
    // Collaborator Errors
    // ============================================================================
    #[error("Adapter error: {message}")]
    Adapter { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid strategy error
    pub fn invalid_strategy(name: impl Into<String>) -> Self {
        Self::InvalidStrategy { name: name.into() }
    }

    /// Create an adapter error
    pub fn adapter(message: impl Into<String>) -> Self {
        Self::Adapter {
            message: message.into(),
        }
    }

    /// Create a cache error
    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Check if this error reports a missing page or item
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::PageNotFound { .. } | Error::ItemNotFound { .. })
    }

    /// Check if this error originated in the cache store
    pub fn is_cache(&self) -> bool {
        matches!(self, Error::Cache { .. })
    }
}

/// Result type alias for Solidafy Paginator
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_config("adapter is required");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: adapter is required"
        );

        let err = Error::PageNotFound { page: 4 };
        assert_eq!(err.to_string(), "Page 4 does not exist");

        let err = Error::ItemNotFound { page: 3, item: 7 };
        assert_eq!(err.to_string(), "Page 3 does not contain item number 7");

        let err = Error::invalid_strategy("bouncy");
        assert!(err.to_string().contains("'bouncy'"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::PageNotFound { page: 1 }.is_not_found());
        assert!(Error::ItemNotFound { page: 1, item: 2 }.is_not_found());

        assert!(!Error::invalid_strategy("x").is_not_found());
        assert!(!Error::cache("down").is_not_found());
        assert!(!Error::invalid_config("x").is_not_found());
    }

    #[test]
    fn test_is_cache() {
        assert!(Error::cache("connection refused").is_cache());
        assert!(!Error::adapter("query failed").is_cache());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::invalid_config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Invalid configuration: inner"));
    }
}
