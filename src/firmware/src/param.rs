use ticker::Ticks;

pub const PAGE_SIZE: usize = 4096;

pub const PAGES_PER_STACK: usize = 4;

pub const STACK_SIZE: usize = PAGE_SIZE * PAGES_PER_STACK;

/// Harts that can run the ticker, every other hart parks at entry.
pub const NCPU: usize = 1;

/// Frequency of the CLINT `mtime` counter on qemu-virt.
pub const MTIME_HZ: Ticks = 10_000_000;

/// One timer interrupt per second.
pub const TIMER_PERIOD: Ticks = MTIME_HZ;

/// Causes the vector table has room for, enough for every standard machine interrupt.
pub const NVECTORS: usize = 16;

#[cfg(not(feature = "trace-ticks"))]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
#[cfg(feature = "trace-ticks")]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Trace;
