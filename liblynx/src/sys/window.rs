//! Low-level window and event operations.
//!
//! These functions provide direct syscall access to the window subsystem.
//! For the typed abstractions, use `crate::window` and `crate::input`.

use lynx_abi::{RawWindowSpec, Syscall};

use crate::gateway::Gateway;

/// Create a window from a creation request.
///
/// `spec` (and the window name it points at) must stay valid for the
/// duration of the trap. Returns the new window id, or a negative error
/// code (no window slots or invalid geometry).
#[inline(always)]
pub fn create<G: Gateway>(gw: &G, spec: *const RawWindowSpec, repaint: bool) -> isize {
    gw.trap(Syscall::CreateWindow, [spec as usize, repaint as usize, 0, 0])
}

/// Poll current input state.
///
/// Returns a pointer to the kernel-owned event slot; never null.
#[inline(always)]
pub fn get_event<G: Gateway>(gw: &G) -> isize {
    gw.trap(Syscall::GetEvent, [0, 0, 0, 0])
}

/// Paint NUL-terminated text into a window.
///
/// Returns 0, or a negative error code (invalid wid or out of bounds).
#[inline(always)]
pub fn paint_string<G: Gateway>(gw: &G, text: *const u8, wid: usize, x: usize, y: usize) -> isize {
    gw.trap(Syscall::PaintString, [text as usize, wid, x, y])
}

/// Blit a full pixel buffer into a window's surface.
///
/// `count` is in pixels and must match the window's width times height.
/// Returns 0, or a negative error code (invalid wid or size mismatch).
#[inline(always)]
pub fn copy_to_win_buffer<G: Gateway>(gw: &G, wid: usize, pixels: *const u32, count: usize) -> isize {
    gw.trap(Syscall::CopyToWinBuffer, [wid, pixels as usize, count, 0])
}
