//! Error types for PTY spawning

use std::ffi::NulError;

use thiserror::Error;

/// Spawn error type
#[derive(Error, Debug)]
pub enum Error {
    /// The program path or an argument contained an interior NUL byte.
    ///
    /// Raised while building the request, before any OS call is made.
    #[error("argument contains an interior NUL byte: {0}")]
    InvalidArgument(#[from] NulError),

    /// The combined PTY-allocate-and-fork step failed.
    ///
    /// No child process and no descriptor exist when this is returned. The
    /// source carries the OS errno (EAGAIN, ENOMEM, PTY exhaustion, ...).
    #[error("failed to fork PTY: {0}")]
    Forkpty(#[source] nix::Error),
}

/// Result type for spawn operations
pub type Result<T> = std::result::Result<T, Error>;
