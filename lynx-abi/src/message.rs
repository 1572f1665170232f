//! Wire format for inter-process messages.
//!
//! A [`RawMessage`] is what actually crosses the trap boundary: the sender
//! builds one on its own stack and passes its address to
//! [`Syscall::SendMessage`](crate::Syscall::SendMessage). The payload is a
//! non-owning view — the sender must keep the buffer alive until the trap
//! returns, at which point the kernel has copied or queued it.

/// Process identifier, as the kernel's process table numbers them.
pub type Pid = u64;

/// Classification of a message, carried as a word on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum MessageKind {
    /// Free-form text.
    Text = 0,
    /// A command for the receiver to execute.
    Command = 1,
    /// A status report.
    Status = 2,
    /// An error report.
    Error = 3,
    /// Control traffic between processes.
    Control = 4,
}

impl MessageKind {
    /// Decode a kind from its wire word. Unknown discriminants come back as
    /// `None`; the protocol reserves them for future revisions.
    pub fn from_raw(raw: u64) -> Option<Self> {
        match raw {
            0 => Some(MessageKind::Text),
            1 => Some(MessageKind::Command),
            2 => Some(MessageKind::Status),
            3 => Some(MessageKind::Error),
            4 => Some(MessageKind::Control),
            _ => None,
        }
    }
}

/// In-memory layout of a message as the kernel reads and writes it.
///
/// `sender_pid` is stamped by the kernel on send; whatever the sender puts
/// there is ignored. On receive the kernel hands back a pointer to one of
/// these with `data` pointing at a kernel-allocated copy of the payload.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct RawMessage {
    pub sender_pid: u64,
    pub receiver_pid: u64,
    pub data: *const u8,
    pub length: u64,
    pub kind: u64,
}
