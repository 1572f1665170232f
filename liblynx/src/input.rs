//! Input event polling.
//!
//! Events are pulled, never pushed: each call to [`poll_event`] asks the
//! kernel for its current input state and gets one [`Event`] back. An
//! event with no flag bits set means nothing happened since the last poll
//! and must simply be discarded.

use lynx_abi::Event;

use crate::gateway::Gateway;
use crate::sys;

/// Poll the kernel for one input event.
///
/// Never blocks and never fails: when nothing is pending the returned
/// event has no flag bits set.
pub fn poll_event<G: Gateway>(gw: &G) -> Event {
    let ptr = sys::window::get_event(gw);
    if ptr == 0 {
        // The contract says never null; tolerate a nonconforming kernel by
        // treating it as an empty poll, which clients discard anyway.
        return Event::EMPTY;
    }
    // Safety: a non-zero result is the address of the kernel-owned event
    // slot, valid until the next poll overwrites it; copy it out now.
    unsafe { core::ptr::read(ptr as *const Event) }
}

/// Poll until a keyboard event arrives.
///
/// The protocol has no blocking wait, so this spins, with a CPU relax hint
/// between polls to be slightly less antisocial about it.
pub fn next_key<G: Gateway>(gw: &G) -> Event {
    loop {
        let event = poll_event(gw);
        if event.is_keyboard() {
            return event;
        }
        core::hint::spin_loop();
    }
}
