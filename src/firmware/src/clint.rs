use riscv::register::mie;
use ticker::{InterruptHandler, InterruptId, RegisterError, Ticks, Timer, TimerController};

use crate::arch::registers::mmapped::{Mtime, Mtimecmp};
use crate::arch::registers::{ReadFrom, WriteInto};
use crate::trap::VECTORS;

/// `mcause` code of the machine timer interrupt.
pub const MACHINE_TIMER_INTERRUPT: InterruptId = 7;

/// The CLINT compare timer of one hart, gated by `mie.MTIE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MachineTimer {
    hart_id: usize,
}

impl MachineTimer {
    pub const fn new(hart_id: usize) -> Self {
        MachineTimer { hart_id }
    }

    fn mtimecmp(&self) -> Mtimecmp {
        Mtimecmp {
            hart_id: self.hart_id,
        }
    }
}

impl Timer for MachineTimer {
    fn disable(&self) {
        unsafe { mie::clear_mtimer() }
    }

    fn enable(&self) {
        unsafe { mie::set_mtimer() }
    }

    fn now(&self) -> Ticks {
        unsafe { Mtime.read() }
    }

    fn arm(&self, deadline: Ticks) {
        unsafe { self.mtimecmp().write(deadline) }
    }
}

impl TimerController for MachineTimer {
    fn init(&self) {
        self.disable();
        // Nothing pending until the first real deadline is armed.
        self.arm(Ticks::MAX);
    }

    fn interrupt_id(&self) -> InterruptId {
        MACHINE_TIMER_INTERRUPT
    }

    fn register_handler(
        &self,
        id: InterruptId,
        handler: &'static dyn InterruptHandler,
    ) -> Result<(), RegisterError> {
        VECTORS.register(id, handler)
    }
}
