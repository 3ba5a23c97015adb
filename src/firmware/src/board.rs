use riscv::register::mhartid;
use spin::Once;
use ticker::{Board, Ticker, TransmitChannel};

use crate::clint::MachineTimer;
use crate::console::CONSOLE;
use crate::cpu::{CpuInterruptController, Hart};
use crate::param::NCPU;
use crate::uart::Uart;

/// The qemu `virt` machine in machine mode.
pub struct QemuVirt;

/// Shared by the main loop and the timer interrupt handler once bring-up is done.
pub static TICKER: Once<Ticker<QemuVirt>> = Once::new();

static CPU_INTC: CpuInterruptController = CpuInterruptController;

impl Board for QemuVirt {
    type Cpu = Hart;
    type InterruptController = CpuInterruptController;
    type Timer = MachineTimer;
    type Serial = Uart;

    fn current_hart(&self) -> usize {
        mhartid::read()
    }

    fn cpu(&self, hart: usize) -> Option<Hart> {
        (hart < NCPU).then(|| Hart::new(hart))
    }

    fn cpu_interrupt_controller(&self, _cpu: &Hart) -> Option<&CpuInterruptController> {
        Some(&CPU_INTC)
    }

    fn timer_controller(&self, cpu: &Hart) -> Option<MachineTimer> {
        Some(MachineTimer::new(cpu.id()))
    }

    fn serial(&self, index: usize) -> &'static TransmitChannel<Uart> {
        match index {
            0 => &CONSOLE,
            _ => panic!("qemu-virt has a single UART, there is no UART {index}"),
        }
    }
}
