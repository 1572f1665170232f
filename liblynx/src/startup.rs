//! Process startup checks.
//!
//! The syscall numbering drifted between kernel revisions before the table
//! in `lynx-abi` became canonical, so every process verifies at startup
//! that the kernel speaks the same revision before issuing anything else.

use core::fmt;

use lynx_abi::PROTOCOL_VERSION;

use crate::gateway::Gateway;
use crate::sys;

/// The kernel speaks a different trap protocol revision than this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolMismatch {
    /// Revision this library was built against.
    pub expected: u32,
    /// What the kernel reported; negative when the kernel predates the
    /// version operation entirely.
    pub reported: isize,
}

impl fmt::Display for ProtocolMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kernel protocol revision {} does not match expected {}",
            self.reported, self.expected
        )
    }
}

/// Assert that the kernel and this library agree on the trap protocol.
///
/// Call once at process start, before any other operation. A kernel that
/// predates the version operation returns a negative status, which fails
/// the check the same way a wrong revision does.
pub fn assert_protocol<G: Gateway>(gw: &G) -> core::result::Result<(), ProtocolMismatch> {
    let reported = sys::proc::protocol_version(gw);
    if reported == PROTOCOL_VERSION as isize {
        Ok(())
    } else {
        Err(ProtocolMismatch {
            expected: PROTOCOL_VERSION,
            reported,
        })
    }
}
