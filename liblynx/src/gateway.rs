//! The trap gateway: the single crossing point into the kernel.
//!
//! A trap is synchronous and blocking — the caller's thread is suspended
//! until the kernel returns, and that suspension is the only one in this
//! whole layer. The gateway itself cannot fail; it reports exactly the
//! scalar word the kernel produced, and mapping negative words into typed
//! errors is the job of the wrappers built on top.

use lynx_abi::Syscall;

/// One trap into the kernel.
///
/// Implementations fix *how* the boundary is crossed, nothing else:
/// [`KernelGateway`] issues the real software interrupt, while tests
/// substitute an in-memory double. Pointer arguments must reference memory
/// owned by the calling process and valid for the whole call — the kernel
/// reads some of them (window names, painted text) while the caller is
/// suspended rather than copying eagerly.
pub trait Gateway {
    /// Issue one syscall and return the raw result word.
    ///
    /// Negative values mean the operation failed; the encoding of the
    /// failure reason is operation-specific and not interpreted here.
    fn trap(&self, op: Syscall, args: [usize; 4]) -> isize;
}

#[cfg(all(feature = "os", target_arch = "x86_64"))]
mod kernel {
    use core::arch::asm;

    use lynx_abi::Syscall;

    use super::Gateway;

    /// Gateway backed by the real `int 0x80` trap.
    ///
    /// Register convention: rax carries the operation id and returns the
    /// result; rbx, rcx, rdx and rsi carry arguments 0 through 3.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct KernelGateway;

    impl Gateway for KernelGateway {
        #[inline(always)]
        fn trap(&self, op: Syscall, args: [usize; 4]) -> isize {
            let result: isize;
            // rbx is reserved by LLVM, so argument 0 is staged through a
            // scratch register and swapped in around the interrupt.
            unsafe {
                asm!(
                    "xchg rbx, {a0}",
                    "int 0x80",
                    "xchg rbx, {a0}",
                    a0 = inout(reg) args[0] => _,
                    inout("rax") op as usize => result,
                    inout("rcx") args[1] => _,
                    inout("rdx") args[2] => _,
                    inout("rsi") args[3] => _,
                );
            }
            result
        }
    }
}

#[cfg(all(feature = "os", target_arch = "x86_64"))]
pub use kernel::KernelGateway;
