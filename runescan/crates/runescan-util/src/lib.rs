//! runescan-util - Foundation Types for the runescan Engine
//!
//! This crate holds the pieces shared by every runescan crate and by
//! embedders that configure an engine without pulling in the scanner
//! itself:
//!
//! - [`config`] - `ScanConfig`, the engine tuning parameters
//! - [`error`] - host-level error types and `Result` aliases
//! - [`span`] - byte ranges into the scanned input
//!
//! Grammar-level failures never show up here. They travel to the consumer
//! as error tokens; the types in this crate only describe failures of the
//! host (bad configuration, thread spawn failure, a panicking driver).

pub mod config;
pub mod error;
pub mod span;

pub use config::ScanConfig;
pub use error::{ConfigError, ScanError, ScanResult};
pub use span::Span;
