//! Point-to-point message passing.
//!
//! Every process owns exactly one inbound FIFO queue, created implicitly
//! by the kernel on first use and torn down with the process. Sends are
//! fire-and-forget; receives are non-blocking polls. Messages from one
//! sender arrive in send order; nothing is guaranteed across senders, and
//! delivery is at-most-once with no acknowledgement — reliability beyond
//! that is the caller's problem.

use alloc::vec::Vec;

use lynx_abi::{MessageKind, Pid, RawMessage};

use crate::error::{check_unit, Result};
use crate::gateway::Gateway;
use crate::sys;

/// Handle to the calling process's inbound queue.
pub struct Mailbox<'g, G: Gateway> {
    gw: &'g G,
}

impl<'g, G: Gateway> Mailbox<'g, G> {
    /// Attach to the current process's mailbox.
    ///
    /// There is nothing to create: the kernel materialises the queue on
    /// first use.
    pub fn attach(gw: &'g G) -> Self {
        Self { gw }
    }

    /// Send `payload` to `receiver`.
    ///
    /// Enqueues kernel-side and returns immediately; the receiver consuming
    /// the message is not awaited. The payload is borrowed only for the
    /// duration of the trap. The kernel stamps the sender pid itself —
    /// whatever the wire struct carries there is ignored. A negative status
    /// means the receiver is unknown or its queue is full; the protocol
    /// does not say which.
    pub fn send(&self, receiver: Pid, kind: MessageKind, payload: &[u8]) -> Result<()> {
        let raw = RawMessage {
            sender_pid: 0,
            receiver_pid: receiver,
            data: payload.as_ptr(),
            length: payload.len() as u64,
            kind: kind as u64,
        };
        check_unit(sys::mailbox::send(self.gw, &raw))
    }

    /// Poll for the next pending message.
    ///
    /// Returns `None` when the queue is empty — a sentinel, not a failure.
    /// The kernel hands back a block it allocated for this delivery and
    /// never reclaims; the payload is copied out immediately so the caller
    /// owns plain bytes.
    pub fn receive(&self) -> Option<Received> {
        let ptr = sys::mailbox::receive(self.gw);
        if ptr == 0 {
            return None;
        }

        // Safety: a non-zero result is the address of a RawMessage the
        // kernel just allocated for this process, with `data` pointing at
        // `length` payload bytes alive at least until the next trap.
        let raw = unsafe { core::ptr::read(ptr as *const RawMessage) };
        let payload = if raw.data.is_null() || raw.length == 0 {
            Vec::new()
        } else {
            unsafe { core::slice::from_raw_parts(raw.data, raw.length as usize) }.to_vec()
        };

        let Some(kind) = MessageKind::from_raw(raw.kind) else {
            log::warn!("dropping message with unknown kind {}", raw.kind);
            return None;
        };

        Some(Received {
            sender: raw.sender_pid,
            receiver: raw.receiver_pid,
            kind,
            payload,
        })
    }
}

/// A message copied out of the inbound queue.
///
/// Unlike the wire struct, this owns its payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Received {
    pub sender: Pid,
    pub receiver: Pid,
    pub kind: MessageKind,
    pub payload: Vec<u8>,
}
