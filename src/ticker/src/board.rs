//! Device discovery as the ticker needs it. A board implements these once; the rest of the
//! crate only talks to the traits.

use crate::channel::TransmitChannel;
use crate::cpu::Cpu;
use crate::interrupt::{EnableError, InterruptHandler, InterruptId, RegisterError};
use crate::serial::Serial;
use crate::timer::Timer;

/// The core-local interrupt controller.
pub trait InterruptController {
    fn init(&self);

    /// Let interrupts on `line` reach the core.
    fn enable(&self, line: usize) -> Result<(), EnableError>;
}

/// The timer block, which routes its own expiry interrupt.
pub trait TimerController: Timer {
    fn init(&self);

    fn interrupt_id(&self) -> InterruptId;

    fn register_handler(
        &self,
        id: InterruptId,
        handler: &'static dyn InterruptHandler,
    ) -> Result<(), RegisterError>;
}

pub trait Board: Sync + 'static {
    type Cpu: Cpu + Send + Sync;
    type InterruptController: InterruptController;
    type Timer: TimerController + Send + Sync;
    type Serial: Serial + Send + 'static;

    fn current_hart(&self) -> usize;

    fn cpu(&self, hart: usize) -> Option<Self::Cpu>;

    fn cpu_interrupt_controller(&self, cpu: &Self::Cpu) -> Option<&Self::InterruptController>;

    fn timer_controller(&self, cpu: &Self::Cpu) -> Option<Self::Timer>;

    /// The UART at `index`, already wrapped in its lock.
    fn serial(&self, index: usize) -> &'static TransmitChannel<Self::Serial>;
}
