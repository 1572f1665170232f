//! Process-level operations.

use lynx_abi::Pid;

use crate::gateway::Gateway;
use crate::sys;

/// Process id of the caller.
///
/// The operation never fails; the kernel always knows who is trapping.
pub fn id<G: Gateway>(gw: &G) -> Pid {
    sys::proc::getpid(gw) as Pid
}

/// Terminate the calling process.
///
/// Against the real kernel the trap does not return; the loop behind it
/// only exists so the signature can promise divergence.
pub fn exit<G: Gateway>(gw: &G) -> ! {
    let _ = sys::proc::exit(gw);
    loop {
        core::hint::spin_loop();
    }
}
