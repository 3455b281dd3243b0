//! Lexer module.
//!
//! This module organizes the engine into smaller, focused components:
//! - `core` - the `Lexer` handed to state functions, and its navigation
//! - `emit` - turning the pending window into tokens
//! - `state` - the `Scan` capability and boxed `State`s
//! - `driver` - the worker thread, `Engine` and `TokenStream`
//! - `cancel` - the shared stop flag

mod cancel;
mod core;
mod driver;
mod emit;
mod state;

pub use self::cancel::CancelToken;
pub use self::core::Lexer;
pub use self::driver::{tokenize, Engine, TokenStream};
pub use self::state::{Next, Scan, State};
