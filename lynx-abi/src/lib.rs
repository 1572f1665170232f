//! Shared ABI definitions between kernel and userspace.
//!
//! This crate is the single place where the two sides of the trap
//! boundary agree on numbers: the syscall table, the protocol version,
//! and the repr(C) structures the kernel reads or hands back. Userland
//! code must never spell an operation id as a literal; it names a
//! [`Syscall`] variant instead, so kernel and userland cannot drift
//! apart one call site at a time.

#![no_std]

pub mod message;
pub mod window;

pub use message::{MessageKind, Pid, RawMessage};
pub use window::{Event, EventFlags, RawWindowSpec, COMMAND_LINE_CAPACITY, SCANCODE_ENTER};

// =============================================================================
// Protocol version
// =============================================================================

/// Version of the trap protocol described by this crate.
///
/// The kernel reports its own version through [`Syscall::ProtocolVersion`];
/// processes compare it against this constant at startup and refuse to run
/// against a kernel speaking a different revision. Bump this whenever the
/// syscall table or any repr(C) structure below changes shape.
pub const PROTOCOL_VERSION: u32 = 2;

// =============================================================================
// Syscall numbers
// =============================================================================

/// The canonical syscall numbering table.
///
/// Historical note: ids 0–3, 8–9, 19, 56, 350 and 351 are frozen as the
/// deployed kernel dispatches them (including the 8/9 split between page
/// allocation and lseek). The message and window operations were renumbered
/// more than once before this table existed, so they occupy fresh blocks at
/// 352+ and 360+ and are covered by the version check above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Syscall {
    /// Read from a descriptor: (fd, buf_ptr, buf_len) -> bytes read
    Read = 0,
    /// Write to a descriptor: (fd, buf_ptr, buf_len) -> bytes written
    Write = 1,
    /// Open a file: (path_ptr, flags) -> new fd
    Open = 2,
    /// Close a descriptor: (fd) -> 0
    Close = 3,
    /// Allocate page frames: (count) -> base address
    AllocatePages = 8,
    /// Reposition a descriptor: (fd, offset, whence) -> new offset
    Lseek = 9,
    /// Release page frames: (base address, count) -> 0
    FreePages = 19,
    /// Terminate the calling process: () -> does not return
    Exit = 56,
    /// Process id of the caller: () -> pid, never fails
    Getpid = 350,
    /// Whether a descriptor is a terminal: (fd) -> 1 or negative
    Isatty = 351,
    /// Enqueue a message: (RawMessage ptr) -> 0
    SendMessage = 352,
    /// Dequeue a pending message: () -> RawMessage ptr, or 0 when empty
    ReceiveMessage = 353,
    /// Create a window: (RawWindowSpec ptr, repaint flag) -> wid
    CreateWindow = 360,
    /// Poll input state: () -> Event ptr, never null
    GetEvent = 361,
    /// Paint text into a window: (text ptr, wid, x, y) -> 0
    PaintString = 362,
    /// Blit a full pixel buffer into a window: (wid, pixel ptr, pixel count) -> 0
    CopyToWinBuffer = 363,
    /// Protocol revision spoken by the kernel: () -> version
    ProtocolVersion = 365,
}

// =============================================================================
// File constants
// =============================================================================

/// Descriptor for standard input.
pub const FD_STDIN: usize = 0;
/// Descriptor for standard output.
pub const FD_STDOUT: usize = 1;
/// Descriptor for standard error.
pub const FD_STDERR: usize = 2;

/// `whence` argument to [`Syscall::Lseek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Whence {
    /// Offset is absolute.
    Set = 0,
    /// Offset is relative to the current position.
    Current = 1,
    /// Offset is relative to the end of the file.
    End = 2,
}

bitflags::bitflags! {
    /// Flags accepted by [`Syscall::Open`].
    ///
    /// Matches the kernel's open-flag bit assignments.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: usize {
        const READ_ONLY  = 0x000;
        const WRITE_ONLY = 0x001;
        const READ_WRITE = 0x002;
        const CREATE     = 0x040;
        const EXCLUSIVE  = 0x080;
        const TRUNCATE   = 0x200;
        const APPEND     = 0x400;
    }
}
