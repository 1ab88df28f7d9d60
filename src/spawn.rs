//! Spawning a child process attached to a PTY
//!
//! The allocate-and-fork step is `forkpty(3)`: one OS call that creates the
//! master/slave pair, forks, and makes the slave the child's controlling
//! terminal with the requested attributes and size already applied. Doing
//! this as separate openpt/fork steps would leave a window where the child
//! has no controlling terminal, or where attribute setup races against the
//! program's own startup reads.

use std::ffi::{CStr, CString, OsStr};
use std::os::fd::{AsFd, AsRawFd, BorrowedFd, OwnedFd, RawFd};
use std::os::unix::ffi::OsStrExt;

use nix::pty::{forkpty, ForkptyResult};
use nix::sys::termios::Termios;
use nix::unistd::{execv, Pid};

use crate::error::{Error, Result};
use crate::size::WindowSize;

/// A request to run a program under a freshly allocated PTY.
///
/// `argv[0]` is the executable path; it is seeded by [`SpawnRequest::new`]
/// and passed to the child verbatim, so the path must be absolute or
/// resolvable by the OS. The child inherits the caller's environment.
pub struct SpawnRequest {
    argv: Vec<CString>,
    termios: Option<Termios>,
    size: Option<WindowSize>,
}

impl SpawnRequest {
    /// Create a request for the given program. The program path becomes
    /// `argv[0]`.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Result<Self> {
        let program = CString::new(program.as_ref().as_bytes())?;
        Ok(SpawnRequest {
            argv: vec![program],
            termios: None,
            size: None,
        })
    }

    /// Append an argument.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Result<Self> {
        let arg = CString::new(arg.as_ref().as_bytes())?;
        self.argv.push(arg);
        Ok(self)
    }

    /// Append multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self = self.arg(arg)?;
        }
        Ok(self)
    }

    /// Set the initial terminal attributes, applied to the slave side before
    /// the child's program starts. When omitted, the PTY gets the host OS
    /// defaults for a newly allocated terminal.
    pub fn termios(mut self, termios: Termios) -> Self {
        self.termios = Some(termios);
        self
    }

    /// Set the initial window size, applied before the child's program
    /// starts, so its first size query already reflects this geometry.
    pub fn window_size(mut self, size: WindowSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Spawn the child.
    ///
    /// Returns as soon as the fork completes; it never blocks on the child's
    /// progress through exec. A successful return means a process and a
    /// master descriptor now exist as a matched pair, not that the target
    /// program is running: if exec fails in the child (missing binary, bad
    /// permissions), the child exits immediately with the errno value as its
    /// status, observable through `waitpid(2)` on the returned pid.
    ///
    /// [`Error::Forkpty`] is returned only when the allocate-and-fork step
    /// itself fails; in that case no process and no descriptor were created.
    pub fn spawn(self) -> Result<PtyChild> {
        let winsize = self.size.map(|s| s.to_winsize());
        let argv: Vec<&CStr> = self.argv.iter().map(|a| a.as_c_str()).collect();

        match unsafe { forkpty(winsize.as_ref(), self.termios.as_ref()) }
            .map_err(Error::Forkpty)?
        {
            ForkptyResult::Parent { child, master } => {
                log::debug!(
                    "spawned {:?} as pid {} on master fd {}",
                    self.argv[0],
                    child,
                    master.as_raw_fd()
                );
                Ok(PtyChild { master, pid: child })
            }
            ForkptyResult::Child => {
                // The PTY slave is already our controlling terminal and wired
                // to stdin/stdout/stderr. Replace the process image; execv
                // only returns on failure, and then the only safe move is to
                // exit with the errno so the parent can tell exec failures
                // apart when it reaps us. No unwinding, no further I/O.
                let err = match execv(&self.argv[0], &argv) {
                    Err(err) => err,
                    Ok(infallible) => match infallible {},
                };
                unsafe { libc::_exit(err as i32) }
            }
        }
    }
}

/// A child process attached to a PTY, as handed back by
/// [`SpawnRequest::spawn`].
///
/// The caller exclusively owns both halves: the master descriptor closes
/// when this (or the fd extracted from it) is dropped, and the pid must
/// eventually be passed to `waitpid(2)` to avoid leaving a zombie. Dropping
/// this struct does not signal, kill, or reap the child.
pub struct PtyChild {
    master: OwnedFd,
    pid: Pid,
}

impl PtyChild {
    /// The child's process id.
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// The PTY master descriptor.
    pub fn master(&self) -> BorrowedFd<'_> {
        self.master.as_fd()
    }

    /// Consume the handle, keeping only the master descriptor.
    pub fn into_master(self) -> OwnedFd {
        self.master
    }

    /// Consume the handle into its parts.
    pub fn into_parts(self) -> (OwnedFd, Pid) {
        (self.master, self.pid)
    }
}

impl AsFd for PtyChild {
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.master.as_fd()
    }
}

impl AsRawFd for PtyChild {
    fn as_raw_fd(&self) -> RawFd {
        self.master.as_raw_fd()
    }
}
