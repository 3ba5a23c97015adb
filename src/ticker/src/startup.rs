use log::debug;
use spin::Once;
use thiserror::Error;

use crate::board::{Board, InterruptController, TimerController};
use crate::config::Config;
use crate::context::Ticker;
use crate::interrupt::{EnableError, RegisterError};
use crate::param::{CPU_INTERRUPT_LINE, SERIAL_INDEX};
use crate::timer::PeriodicTimer;

/// A capability the ticker cannot run without is missing. None of these are retried:
/// hardware does not appear at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StartupError {
    #[error("CPU for hart {0} is not present")]
    CpuAbsent(usize),
    #[error("CPU interrupt controller is not present")]
    InterruptControllerAbsent,
    #[error("timer interrupt controller is not present")]
    TimerControllerAbsent,
    #[error("timer interrupt handler registration failed: {0}")]
    HandlerRegistration(#[from] RegisterError),
    #[error("CPU interrupt enable failed: {0}")]
    CpuInterruptEnable(#[from] EnableError),
}

impl StartupError {
    /// Exit status reported for this failure.
    pub const fn exit_code(&self) -> u32 {
        match self {
            StartupError::CpuAbsent(_) => 2,
            StartupError::InterruptControllerAbsent => 3,
            StartupError::TimerControllerAbsent => 4,
            StartupError::HandlerRegistration(_) => 5,
            StartupError::CpuInterruptEnable(_) => 6,
        }
    }
}

/// Discover the devices, build the shared context into `slot` and hook the timer
/// interrupt up to it.
///
/// The UART comes up first so every later failure can be reported on it. The timer is
/// left unarmed; [`Ticker::start`] does that.
pub fn bring_up<B: Board>(
    board: &B,
    slot: &'static Once<Ticker<B>>,
    config: Config,
) -> Result<&'static Ticker<B>, StartupError> {
    let channel = board.serial(SERIAL_INDEX);
    channel.init(config.baud_rate);

    let hart = board.current_hart();
    let cpu = board.cpu(hart).ok_or(StartupError::CpuAbsent(hart))?;
    let intc = board
        .cpu_interrupt_controller(&cpu)
        .ok_or(StartupError::InterruptControllerAbsent)?;
    intc.init();

    let timer = board
        .timer_controller(&cpu)
        .ok_or(StartupError::TimerControllerAbsent)?;
    timer.init();
    let timer_id = timer.interrupt_id();

    let ticker = slot.call_once(|| {
        Ticker::new(channel, PeriodicTimer::new(timer, config.period), cpu, config)
    });
    ticker.timer().timer().register_handler(timer_id, ticker)?;
    debug!("timer handler registered on interrupt {timer_id}");

    intc.enable(CPU_INTERRUPT_LINE)?;
    debug!("CPU interrupt line {CPU_INTERRUPT_LINE} enabled");

    Ok(ticker)
}
