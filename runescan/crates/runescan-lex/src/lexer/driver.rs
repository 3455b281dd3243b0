//! State-machine driver.
//!
//! [`Engine::run`] moves the lexer onto a dedicated thread that runs state
//! functions until one returns `None`, and hands back the consumer end of a
//! bounded channel as a [`TokenStream`]. The two sides share nothing but
//! that channel and a cancel flag.

use std::any::Any;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver};
use log::debug;
use runescan_util::{ScanConfig, ScanError, ScanResult};

use crate::cursor::Cursor;
use crate::token::Token;

use super::cancel::CancelToken;
use super::core::Lexer;
use super::state::{Scan, State};

/// A scan that has been set up but not started.
///
/// # Example
///
/// ```
/// use runescan_lex::{Engine, Lexer, Next, TokenKind};
///
/// fn start(lx: &mut Lexer<()>) -> Next<()> {
///     lx.skip_whitespace();
///     None
/// }
///
/// let stream = Engine::new("blank", "   ", start).run().unwrap();
/// let token = stream.next_token().unwrap();
/// assert_eq!(*token.kind(), TokenKind::EndOfInput);
/// assert!(stream.next_token().is_none());
/// ```
pub struct Engine<K, V = String> {
    name: Arc<str>,
    input: Arc<str>,
    initial: State<K, V>,
    config: ScanConfig,
}

impl<K, V> Engine<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
{
    /// Sets up a scan of `input` starting in `initial`.
    ///
    /// `name` is only used for diagnostics: the driver thread name and log
    /// lines.
    pub fn new<S>(name: impl Into<Arc<str>>, input: impl Into<Arc<str>>, initial: S) -> Self
    where
        S: Scan<K, V> + 'static,
    {
        Self {
            name: name.into(),
            input: input.into(),
            initial: State::new(initial),
            config: ScanConfig::default(),
        }
    }

    /// Replaces the default configuration.
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Diagnostic name of the scan.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration the scan will run with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Starts the driver thread.
    ///
    /// Consumes the engine, so a scan cannot be started twice.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or the thread cannot be
    /// spawned. Grammar errors are never reported here; they arrive as
    /// error tokens on the stream.
    pub fn run(self) -> ScanResult<TokenStream<K, V>> {
        self.config.validate()?;

        let (sender, receiver) = channel::bounded(self.config.channel_capacity);
        let cancel = CancelToken::new();
        let lexer = Lexer::new(
            self.name.clone(),
            Cursor::new(self.input.clone()),
            sender,
            cancel.clone(),
        );

        let mut builder = thread::Builder::new().name(self.config.thread_name(&self.name));
        if let Some(size) = self.config.stack_size {
            builder = builder.stack_size(size);
        }

        let initial = self.initial;
        let handle = builder
            .spawn(move || drive(lexer, initial))
            .map_err(|source| ScanError::Spawn {
                name: self.name.to_string(),
                source,
            })?;

        Ok(TokenStream {
            name: self.name,
            input: self.input,
            receiver,
            cancel,
            handle: Some(handle),
        })
    }
}

/// Runs states until one returns `None`, the consumer cancels, or the
/// consumer hangs up. Returns the number of tokens delivered.
///
/// Dropping `lexer` on return closes the stream; it is the only sender.
fn drive<K, V>(mut lexer: Lexer<K, V>, initial: State<K, V>) -> usize {
    debug!(
        "{}: scan started ({} bytes)",
        lexer.name(),
        lexer.input().len()
    );

    let mut state = Some(initial);
    let mut transitions = 0usize;
    while let Some(current) = state {
        if lexer.should_stop() {
            debug!(
                "{}: stopping after {} transitions (cancelled: {})",
                lexer.name(),
                transitions,
                lexer.is_cancelled()
            );
            break;
        }
        state = current.run(&mut lexer);
        transitions += 1;
    }

    debug!(
        "{}: scan finished, {} tokens in {} transitions",
        lexer.name(),
        lexer.emitted(),
        transitions
    );
    lexer.emitted()
}

/// The consumer end of a running scan.
///
/// Tokens arrive in emission order. Once the driver is done the stream is
/// closed, and every further read returns `None` without blocking.
pub struct TokenStream<K, V = String> {
    name: Arc<str>,
    input: Arc<str>,
    receiver: Receiver<Token<K, V>>,
    cancel: CancelToken,
    handle: Option<JoinHandle<usize>>,
}

impl<K, V> TokenStream<K, V> {
    /// Blocks until the next token arrives, or returns `None` once the
    /// stream is closed.
    pub fn next_token(&self) -> Option<Token<K, V>> {
        self.receiver.recv().ok()
    }

    /// Returns a token if one is already queued, without blocking.
    pub fn try_next_token(&self) -> Option<Token<K, V>> {
        self.receiver.try_recv().ok()
    }

    /// Asks the driver to stop before its next state transition.
    ///
    /// Tokens already queued stay readable.
    pub fn cancel(&self) {
        debug!("{}: cancellation requested", self.name);
        self.cancel.cancel();
    }

    /// A handle that can cancel this scan from another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Diagnostic name of the scan.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The input being scanned.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Waits for the driver to exit and returns how many tokens it
    /// delivered.
    ///
    /// Tokens not yet read are discarded: the stream is cancelled and
    /// disconnected first, so a driver blocked on a full channel is
    /// released.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::DriverPanicked`] if a state function panicked.
    pub fn finish(mut self) -> ScanResult<usize> {
        self.cancel.cancel();
        drop(std::mem::replace(&mut self.receiver, channel::never()));

        match self.handle.take() {
            Some(handle) => handle.join().map_err(|payload| ScanError::DriverPanicked {
                name: self.name.to_string(),
                message: panic_message(payload.as_ref()),
            }),
            None => Ok(0),
        }
    }
}

impl<K, V> Iterator for TokenStream<K, V> {
    type Item = Token<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<K, V> Drop for TokenStream<K, V> {
    fn drop(&mut self) {
        // The receiver drops right after this, which unblocks the driver.
        self.cancel.cancel();
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Runs a scan to completion and collects every token.
///
/// # Errors
///
/// Same as [`Engine::run`] and [`TokenStream::finish`].
pub fn tokenize<K, V, S>(
    name: impl Into<Arc<str>>,
    input: impl Into<Arc<str>>,
    initial: S,
) -> ScanResult<Vec<Token<K, V>>>
where
    K: Send + 'static,
    V: Send + 'static,
    S: Scan<K, V> + 'static,
{
    let mut stream = Engine::new(name, input, initial).run()?;
    let tokens: Vec<_> = stream.by_ref().collect();
    stream.finish()?;
    Ok(tokens)
}
