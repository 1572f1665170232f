//! `log` facade backend for userspace programs.
//!
//! Records go to standard error through the kernel write trap, one line
//! per record, prefixed with the level and target.

use core::fmt::Write;

use log::{LevelFilter, Log, Metadata, Record};
use lynx_abi::FD_STDERR;

use crate::print::FdWriter;

struct TrapLogger;

static LOGGER: TrapLogger = TrapLogger;

impl Log for TrapLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut writer = FdWriter::new(FD_STDERR);
        let _ = writeln!(
            writer,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
        writer.flush();
    }

    fn flush(&self) {}
}

/// Install the trap-backed logger at the given level.
///
/// A second call is a no-op; the first installation wins.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
