//! pty-spawn - spawn a child process attached to a pseudo-terminal
//!
//! This crate provides a single primitive: allocate a PTY master/slave pair,
//! fork, and exec a program in the child with the slave as its controlling
//! terminal. The caller gets back the master file descriptor and the child's
//! pid, and owns both from that point on.
//!
//! What this crate does:
//! - Atomic PTY allocation + fork via `forkpty(3)`
//! - Initial terminal attributes and window size applied before the child runs
//! - Explicit errors carrying the OS errno
//!
//! What it deliberately does not do: read or write the PTY stream, resize
//! after spawn, forward signals, or reap the child. Those belong to the
//! caller (a terminal emulator, a remote-shell server, a test harness).
//!
//! Note that a successful return means a process exists, not that the target
//! program is running: if exec fails in the child (missing binary, bad
//! permissions), the child exits immediately with the errno as its status,
//! and the caller observes that through `waitpid(2)`, not through [`spawn`].
//!
//! [`spawn`]: SpawnRequest::spawn
//!
//! Reference: https://www.man7.org/linux/man-pages/man3/forkpty.3.html

mod error;
mod size;
mod spawn;

pub use error::{Error, Result};
pub use size::WindowSize;
pub use spawn::{PtyChild, SpawnRequest};

pub use nix::sys::termios::Termios;
pub use nix::unistd::Pid;
