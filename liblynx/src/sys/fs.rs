//! Low-level file operations.

use lynx_abi::{OpenFlags, Syscall, Whence};

use crate::gateway::Gateway;

/// Read up to `buf.len()` bytes from a descriptor.
///
/// Returns bytes read, or a negative error code.
#[inline(always)]
pub fn read<G: Gateway>(gw: &G, fd: usize, buf: &mut [u8]) -> isize {
    gw.trap(Syscall::Read, [fd, buf.as_mut_ptr() as usize, buf.len(), 0])
}

/// Write `buf` to a descriptor.
///
/// Returns bytes written, or a negative error code.
#[inline(always)]
pub fn write<G: Gateway>(gw: &G, fd: usize, buf: &[u8]) -> isize {
    gw.trap(Syscall::Write, [fd, buf.as_ptr() as usize, buf.len(), 0])
}

/// Open a file by NUL-terminated path.
///
/// `path` must stay valid for the duration of the trap; the kernel reads
/// it while the caller is suspended. Returns a new descriptor, or a
/// negative error code.
#[inline(always)]
pub fn open<G: Gateway>(gw: &G, path: *const u8, flags: OpenFlags) -> isize {
    gw.trap(Syscall::Open, [path as usize, flags.bits(), 0, 0])
}

/// Close a descriptor.
///
/// Returns 0, or a negative error code.
#[inline(always)]
pub fn close<G: Gateway>(gw: &G, fd: usize) -> isize {
    gw.trap(Syscall::Close, [fd, 0, 0, 0])
}

/// Reposition a descriptor.
///
/// Returns the new offset, or a negative error code.
#[inline(always)]
pub fn lseek<G: Gateway>(gw: &G, fd: usize, offset: isize, whence: Whence) -> isize {
    gw.trap(Syscall::Lseek, [fd, offset as usize, whence as usize, 0])
}

/// Whether a descriptor refers to a terminal.
///
/// Returns boolean-as-int, or a negative error code for a bad descriptor.
#[inline(always)]
pub fn isatty<G: Gateway>(gw: &G, fd: usize) -> isize {
    gw.trap(Syscall::Isatty, [fd, 0, 0, 0])
}
