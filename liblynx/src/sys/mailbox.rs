//! Low-level mailbox operations.
//!
//! These functions provide direct syscall access for message passing.
//! For the typed abstraction, use `crate::mailbox::Mailbox`.

use lynx_abi::{RawMessage, Syscall};

use crate::gateway::Gateway;

/// Enqueue a message on the receiver's inbound queue.
///
/// `msg` and the payload it points at must stay valid for the duration of
/// the trap; the kernel copies what it needs before returning. Returns 0,
/// or a negative error code (mailbox full or invalid receiver).
#[inline(always)]
pub fn send<G: Gateway>(gw: &G, msg: *const RawMessage) -> isize {
    gw.trap(Syscall::SendMessage, [msg as usize, 0, 0, 0])
}

/// Dequeue the next pending message for the calling process.
///
/// Returns a pointer to a kernel-allocated [`RawMessage`], or 0 when the
/// queue is empty. The empty case is a sentinel, not an error.
#[inline(always)]
pub fn receive<G: Gateway>(gw: &G) -> isize {
    gw.trap(Syscall::ReceiveMessage, [0, 0, 0, 0])
}
