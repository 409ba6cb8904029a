use std::io;
use std::mem::MaybeUninit;
use std::os::unix::io::RawFd;

use libc::{pid_t, termios};

/// Access to a controlling terminal's mode attributes.
pub trait TerminalControl {
    type Modes: Clone;

    fn is_terminal(&self) -> bool;

    fn process_group(&self) -> pid_t;

    fn get_modes(&self) -> io::Result<Self::Modes>;

    fn set_modes(&mut self, modes: &Self::Modes) -> io::Result<()>;

    /// Modes the shell runs with while it owns the terminal.
    fn working_modes(&self, saved: &Self::Modes) -> Self::Modes {
        saved.clone()
    }
}

/// The terminal behind a file descriptor, normally standard input.
#[derive(Debug, Clone, Copy)]
pub struct Tty {
    fd: RawFd,
}

impl Tty {
    pub fn stdin() -> Self {
        Self {
            fd: libc::STDIN_FILENO,
        }
    }
}

impl TerminalControl for Tty {
    type Modes = termios;

    fn is_terminal(&self) -> bool {
        unsafe { libc::isatty(self.fd) == 1 }
    }

    fn process_group(&self) -> pid_t {
        unsafe { libc::getpgrp() }
    }

    fn get_modes(&self) -> io::Result<termios> {
        let mut modes = MaybeUninit::<termios>::uninit();
        if unsafe { libc::tcgetattr(self.fd, modes.as_mut_ptr()) } == -1 {
            return Err(io::Error::last_os_error());
        }
        // tcgetattr filled the struct
        Ok(unsafe { modes.assume_init() })
    }

    fn set_modes(&mut self, modes: &termios) -> io::Result<()> {
        if unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, modes) } == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}
