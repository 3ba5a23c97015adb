//! Two execution contexts, one UART.
//!
//! A main loop and a periodic timer interrupt each send their own message over the same
//! serial line on a single core. A lock word shared by both contexts keeps every message
//! whole on the wire; the timer handler masks its own source around the critical section
//! and the main loop defers interrupts around its own, so neither can spin on a lock held
//! by the context it preempted.
#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod channel;
pub mod config;
pub mod context;
pub mod cpu;
pub mod interrupt;
pub mod isr;
pub mod main_loop;
pub mod param;
pub mod serial;
pub mod spinlock;
pub mod startup;
pub mod timer;

#[cfg(test)]
pub(crate) mod sim;

pub use board::{Board, InterruptController, TimerController};
pub use channel::{Message, TransmitChannel};
pub use config::Config;
pub use context::{IsrState, Ticker};
pub use cpu::Cpu;
pub use interrupt::{EnableError, InterruptHandler, InterruptId, InterruptTable, RegisterError};
pub use serial::{send_message, Serial, SerialWriter};
pub use spinlock::{RawSpinLock, SpinLock, SpinLockGuard};
pub use startup::{bring_up, StartupError};
pub use timer::{PeriodicTimer, Ticks, Timer};
