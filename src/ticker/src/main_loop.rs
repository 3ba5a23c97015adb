use log::info;

use crate::board::Board;
use crate::context::Ticker;
use crate::cpu::Cpu;
use crate::timer::Ticks;

impl<B: Board> Ticker<B> {
    /// Arm the first deadline and unmask the timer interrupt.
    pub fn start(&self) -> Ticks {
        let deadline = self.timer.start();
        info!(
            "timer running: period {} ticks, first deadline {}",
            self.timer.period(),
            deadline
        );
        deadline
    }

    /// Send the main message as one critical section.
    ///
    /// Interrupts stay deferred while the lock is held: a timer firing in that window would
    /// otherwise spin on a lock whose holder can no longer run. It is taken right after.
    pub fn transmit_main(&self) {
        self.cpu
            .without_interrupts(|| self.channel.send(&self.config.main_message));
    }

    /// One main-loop iteration: transmit, then idle for the configured number of interrupts.
    pub fn step(&self) {
        self.transmit_main();
        for _ in 0..self.config.idle_waits {
            self.cpu.wait_for_interrupt();
        }
    }

    pub fn run(&self) -> ! {
        loop {
            self.step();
        }
    }
}
