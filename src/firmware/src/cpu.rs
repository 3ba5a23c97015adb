use core::arch::asm;

use riscv::register::{mie, mstatus};
use ticker::param::CPU_INTERRUPT_LINE;
use ticker::{Cpu, EnableError, InterruptController};

/// A hart running in machine mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hart {
    id: usize,
}

impl Hart {
    pub const fn new(id: usize) -> Self {
        Hart { id }
    }

    pub fn id(&self) -> usize {
        self.id
    }
}

impl Cpu for Hart {
    fn without_interrupts<R>(&self, f: impl FnOnce() -> R) -> R {
        riscv::interrupt::free(f)
    }

    fn wait_for_interrupt(&self) {
        unsafe { asm!("wfi") }
    }
}

/// The hart's own interrupt gate. Line 0 is `mstatus.MIE`, the only line it has.
pub struct CpuInterruptController;

impl InterruptController for CpuInterruptController {
    fn init(&self) {
        unsafe {
            mstatus::clear_mie();
            mie::clear_mtimer();
            mie::clear_msoft();
            mie::clear_mext();
        }
    }

    fn enable(&self, line: usize) -> Result<(), EnableError> {
        match line {
            CPU_INTERRUPT_LINE => {
                unsafe { mstatus::set_mie() };
                Ok(())
            }
            line => Err(EnableError::UnsupportedLine(line)),
        }
    }
}
