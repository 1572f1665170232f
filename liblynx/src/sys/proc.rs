//! Low-level process operations.

use lynx_abi::Syscall;

use crate::gateway::Gateway;

/// Process id of the caller. Never fails.
#[inline(always)]
pub fn getpid<G: Gateway>(gw: &G) -> isize {
    gw.trap(Syscall::Getpid, [0, 0, 0, 0])
}

/// Terminate the calling process. The kernel does not return to the
/// caller; the scalar result only exists for gateway doubles.
#[inline(always)]
pub fn exit<G: Gateway>(gw: &G) -> isize {
    gw.trap(Syscall::Exit, [0, 0, 0, 0])
}

/// Allocate `count` contiguous page frames.
///
/// Returns the base address of the region, or a negative error code.
#[inline(always)]
pub fn allocate_pages<G: Gateway>(gw: &G, count: usize) -> isize {
    gw.trap(Syscall::AllocatePages, [count, 0, 0, 0])
}

/// Release `count` page frames starting at `base`.
///
/// Returns 0, or a negative error code.
#[inline(always)]
pub fn free_pages<G: Gateway>(gw: &G, base: usize, count: usize) -> isize {
    gw.trap(Syscall::FreePages, [base, count, 0, 0])
}

/// Protocol revision spoken by the kernel.
///
/// Returns the version, or a negative error code from a kernel that
/// predates the operation.
#[inline(always)]
pub fn protocol_version<G: Gateway>(gw: &G) -> isize {
    gw.trap(Syscall::ProtocolVersion, [0, 0, 0, 0])
}
