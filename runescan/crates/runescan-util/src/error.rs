//! Core error types for runescan
//!
//! This module defines the host-level errors of the engine. Scan errors
//! produced by a grammar are tokens, not values of these types.

use thiserror::Error;

/// Error type for engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Output channel capacity out of range
    #[error("Invalid channel capacity: {0}")]
    InvalidCapacity(String),

    /// Worker thread name unusable
    #[error("Invalid thread name: {0}")]
    InvalidThreadName(String),

    /// Worker stack size too small
    #[error("Invalid stack size: {0}")]
    InvalidStackSize(String),
}

/// Error type for starting and finishing a scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// The engine was built with an invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The OS refused to start the driver thread
    #[error("Failed to spawn driver for '{name}': {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A state function panicked inside the driver
    #[error("Driver for '{name}' panicked: {message}")]
    DriverPanicked { name: String, message: String },
}

/// Result type alias for engine operations
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Result type alias for configuration checks
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
