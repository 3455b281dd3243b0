//! Configuration Module - Engine Tuning Parameters
//!
//! Manages the parameters of a scan: how many tokens may be buffered
//! between the driver and the consumer, and how the driver thread is set up.

use crate::error::{ConfigError, ConfigResult};

/// Default capacity of the output channel, in tokens.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Upper bound for the output channel capacity.
pub const MAX_CHANNEL_CAPACITY: usize = 1 << 20;

/// Smallest stack size accepted for the driver thread.
pub const MIN_STACK_SIZE: usize = 64 * KB;

const KB: usize = 1024;

/// Main configuration for a scanning engine
///
/// Every field has a sensible default, so most callers never build one by
/// hand.
///
/// # Examples
///
/// ```rust
/// use runescan_util::ScanConfig;
///
/// // Use default configuration
/// let config = ScanConfig::default();
/// assert_eq!(config.channel_capacity, 100);
///
/// // Tight backpressure for a slow consumer
/// let config = ScanConfig {
///     channel_capacity: 4,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Number of tokens buffered between driver and consumer
    ///
    /// The driver blocks once this many tokens are waiting to be read.
    /// Must be at least 1; a rendezvous channel would serialize the two
    /// sides completely.
    ///
    /// Default: 100
    pub channel_capacity: usize,

    /// Prefix of the driver thread name
    ///
    /// The thread is named `{prefix}:{engine name}`.
    ///
    /// Default: "runescan"
    pub thread_name_prefix: String,

    /// Stack size of the driver thread in bytes
    ///
    /// Deeply recursive grammars may need more than the platform default.
    /// If None, the platform default is used.
    ///
    /// Default: None
    pub stack_size: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            thread_name_prefix: "runescan".to_string(),
            stack_size: None,
        }
    }
}

impl ScanConfig {
    /// Returns the configuration with a different channel capacity.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// Returns the configuration with a different thread name prefix.
    pub fn with_thread_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Returns the configuration with an explicit driver stack size.
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::InvalidCapacity(
                "channel_capacity must be > 0".to_string(),
            ));
        }

        if self.channel_capacity > MAX_CHANNEL_CAPACITY {
            return Err(ConfigError::InvalidCapacity(format!(
                "channel_capacity must be <= {}",
                MAX_CHANNEL_CAPACITY
            )));
        }

        if self.thread_name_prefix.is_empty() {
            return Err(ConfigError::InvalidThreadName(
                "thread_name_prefix must not be empty".to_string(),
            ));
        }

        // Thread names are C strings on most platforms.
        if self.thread_name_prefix.contains('\0') {
            return Err(ConfigError::InvalidThreadName(
                "thread_name_prefix must not contain NUL".to_string(),
            ));
        }

        if let Some(size) = self.stack_size {
            if size < MIN_STACK_SIZE {
                return Err(ConfigError::InvalidStackSize(format!(
                    "stack_size must be at least {} bytes",
                    MIN_STACK_SIZE
                )));
            }
        }

        Ok(())
    }

    /// Builds the driver thread name for an engine.
    pub fn thread_name(&self, engine_name: &str) -> String {
        // Interior NULs in the engine name would make spawning fail.
        let name: String = engine_name.chars().filter(|&c| c != '\0').collect();
        format!("{}:{}", self.thread_name_prefix, name)
    }
}
