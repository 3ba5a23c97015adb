use crate::timer::Ticks;

/// Ticks per second of the 32.768 kHz real-time clock.
pub const RTC_FREQ: Ticks = 32_768;

/// One timer period per second.
pub const DEFAULT_PERIOD: Ticks = RTC_FREQ;

pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// `wfi` rounds between two main-context messages.
pub const DEFAULT_IDLE_WAITS: usize = 3;

pub const MAIN_MESSAGE: &str = "Main Uart0.\n";
pub const IRQ_MESSAGE: &str = "IRQ Handler - Uart0.\n";

/// UART index the messages go out on.
pub const SERIAL_INDEX: usize = 0;

/// CPU-level line that gates every machine interrupt.
pub const CPU_INTERRUPT_LINE: usize = 0;
