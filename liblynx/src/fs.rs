//! Typed file operations.

use alloc::vec::Vec;

use lynx_abi::{OpenFlags, Whence};

use crate::error::{check, check_unit, Result};
use crate::gateway::Gateway;
use crate::sys;

/// An open file descriptor.
///
/// Closes the descriptor on drop; use [`File::close`] to observe the
/// close status instead of discarding it.
pub struct File<'g, G: Gateway> {
    gw: &'g G,
    fd: usize,
}

impl<'g, G: Gateway> File<'g, G> {
    /// Open a file by path.
    pub fn open(gw: &'g G, path: &str, flags: OpenFlags) -> Result<Self> {
        // The kernel reads the path as a NUL-terminated string while the
        // caller is suspended, so hand it a terminated copy.
        let mut bytes = Vec::with_capacity(path.len() + 1);
        bytes.extend_from_slice(path.as_bytes());
        bytes.push(0);
        let fd = check(sys::fs::open(gw, bytes.as_ptr(), flags))?;
        Ok(Self {
            gw,
            fd: fd as usize,
        })
    }

    /// The raw descriptor.
    pub fn fd(&self) -> usize {
        self.fd
    }

    /// Read into `buf`, returning the number of bytes read.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        check(sys::fs::read(self.gw, self.fd, buf)).map(|n| n as usize)
    }

    /// Write `buf`, returning the number of bytes written.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize> {
        check(sys::fs::write(self.gw, self.fd, buf)).map(|n| n as usize)
    }

    /// Reposition the descriptor, returning the new offset.
    pub fn seek(&mut self, offset: isize, whence: Whence) -> Result<usize> {
        check(sys::fs::lseek(self.gw, self.fd, offset, whence)).map(|n| n as usize)
    }

    /// Whether this descriptor refers to a terminal.
    pub fn is_terminal(&self) -> Result<bool> {
        check(sys::fs::isatty(self.gw, self.fd)).map(|v| v > 0)
    }

    /// Close the descriptor, reporting the close status.
    pub fn close(self) -> Result<()> {
        let status = sys::fs::close(self.gw, self.fd);
        core::mem::forget(self);
        check_unit(status)
    }
}

impl<G: Gateway> Drop for File<'_, G> {
    fn drop(&mut self) {
        let _ = sys::fs::close(self.gw, self.fd);
    }
}

/// Whether a raw descriptor refers to a terminal.
pub fn is_terminal<G: Gateway>(gw: &G, fd: usize) -> Result<bool> {
    check(sys::fs::isatty(gw, fd)).map(|v| v > 0)
}
