//! Userland support library for lynx.
//!
//! Everything a program needs to live on the far side of the trap
//! boundary: the gateway that crosses it, typed wrappers for each
//! operation, the per-process mailbox, the window/event protocol, and
//! the console line editor the text clients are built on.
//!
//! The whole typed layer is generic over [`gateway::Gateway`], so the same
//! code runs against the real kernel (via `gateway::KernelGateway`, feature
//! `os`) or against an in-memory stand-in in tests.

#![no_std]

extern crate alloc;

pub mod console;
pub mod error;
pub mod fs;
pub mod gateway;
pub mod input;
pub mod mailbox;
pub mod process;
pub mod startup;
pub mod sys;
pub mod window;

#[cfg(feature = "os")]
pub mod heap;
#[cfg(feature = "os")]
pub mod logger;
#[cfg(feature = "os")]
pub mod print;

// Re-export alloc types for convenience
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

pub use error::{Result, SysError};
pub use gateway::Gateway;
#[cfg(all(feature = "os", target_arch = "x86_64"))]
pub use gateway::KernelGateway;

/// Entry point macro for userland programs.
///
/// Provides the `_start` symbol and a panic handler, asserts protocol
/// compatibility with the kernel before running the body, and exits when
/// the body returns.
///
/// # Example
/// ```ignore
/// liblynx::main! {
///     liblynx::println!("hello from userland");
/// }
/// ```
#[cfg(feature = "os")]
#[macro_export]
macro_rules! main {
    ($($body:tt)*) => {
        #[no_mangle]
        extern "C" fn _start() -> ! {
            let gateway = $crate::gateway::KernelGateway;
            if let Err(mismatch) = $crate::startup::assert_protocol(&gateway) {
                $crate::println!("{}", mismatch);
                $crate::process::exit(&gateway);
            }
            (|| { $($body)* })();
            $crate::process::exit(&gateway)
        }

        #[panic_handler]
        fn panic(info: &core::panic::PanicInfo) -> ! {
            $crate::println!("PANIC: {}", info);
            $crate::process::exit(&$crate::gateway::KernelGateway)
        }
    };
}
