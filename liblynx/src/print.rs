//! Print macros for userspace programs.
//!
//! Provides `print!` and `println!` macros that write to standard output
//! through the kernel write trap.

use core::fmt::{self, Write};

use lynx_abi::FD_STDOUT;

use crate::gateway::KernelGateway;
use crate::sys;

/// Buffer size for print output. Longer messages flush in pieces.
const PRINT_BUFFER_SIZE: usize = 256;

/// A writer that buffers formatted output and flushes it to a descriptor.
pub(crate) struct FdWriter {
    fd: usize,
    buffer: [u8; PRINT_BUFFER_SIZE],
    pos: usize,
}

impl FdWriter {
    pub(crate) const fn new(fd: usize) -> Self {
        Self {
            fd,
            buffer: [0; PRINT_BUFFER_SIZE],
            pos: 0,
        }
    }

    pub(crate) fn flush(&mut self) {
        if self.pos > 0 {
            sys::fs::write(&KernelGateway, self.fd, &self.buffer[..self.pos]);
            self.pos = 0;
        }
    }
}

impl Write for FdWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for chunk in s.as_bytes().chunks(PRINT_BUFFER_SIZE) {
            if self.pos + chunk.len() > PRINT_BUFFER_SIZE {
                self.flush();
            }
            self.buffer[self.pos..self.pos + chunk.len()].copy_from_slice(chunk);
            self.pos += chunk.len();
        }
        Ok(())
    }
}

/// Internal function used by print macros.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    let mut writer = FdWriter::new(FD_STDOUT);
    let _ = writer.write_fmt(args);
    writer.flush();
}

/// Prints to standard output.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::print::_print(format_args!($($arg)*))
    };
}

/// Prints to standard output, with a newline.
#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n")
    };
    ($($arg:tt)*) => {
        $crate::print!("{}\n", format_args!($($arg)*))
    };
}
