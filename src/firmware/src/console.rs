use core::fmt;

use log::{Log, Metadata, Record, SetLoggerError};
use riscv::interrupt::free;
use ticker::TransmitChannel;

use crate::memlayout::UART_BASE_ADDR;
use crate::param::LOG_LEVEL;
use crate::uart::Uart;

/// The board's only UART. The console, the logger and both message sources share its lock.
pub static CONSOLE: TransmitChannel<Uart> = TransmitChannel::new(Uart::new(UART_BASE_ADDR));

#[macro_export]
macro_rules! cprint {
    ($($arg:tt)*) => ($crate::console::_print(format_args!($($arg)*)));
}

#[macro_export]
macro_rules! cprintln {
    () => ($crate::cprint!("\n"));
    ($($arg:tt)*) => ($crate::cprint!("{}\n", format_args!($($arg)*)));
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    // A timer interrupt must not preempt us while we hold the console lock.
    free(|| {
        let _ = CONSOLE.write_fmt(args);
    });
}

/// Writes `[LEVEL] target: message` lines to the console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= LOG_LEVEL
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            _print(format_args!(
                "[{}] {}: {}\n",
                record.level(),
                record.target(),
                record.args()
            ));
        }
    }

    fn flush(&self) {}
}

pub fn init_logger() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(LOG_LEVEL);
    Ok(())
}

/// Console writer that skips the lock, for the panic path only.
pub struct PanicWriter;

impl fmt::Write for PanicWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // SAFETY: the panic handler halts the hart afterwards, the lock holder never resumes.
        unsafe { CONSOLE.write_unlocked(s.as_bytes()) };
        Ok(())
    }
}
