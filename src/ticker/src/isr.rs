use log::trace;

use crate::board::Board;
use crate::context::{IsrState, Ticker};
use crate::interrupt::{InterruptHandler, InterruptId};
use crate::serial::send_message;

impl<B: Board> Ticker<B> {
    /// Timer expiry handler.
    ///
    /// The timer source is masked before the lock is taken and unmasked only after the lock
    /// is released and the next deadline is armed, so this handler never runs nested inside
    /// itself while holding the lock.
    pub fn on_timer(&self) {
        self.timer.disable();
        self.set_isr_state(IsrState::Masked);

        {
            let mut serial = self.channel.lock();
            self.set_isr_state(IsrState::InCriticalSection);
            send_message(&mut *serial, self.config.irq_message.as_bytes());
        }
        self.set_isr_state(IsrState::Masked);

        let deadline = self.timer.rearm();
        let firings = self.count_firing();
        self.timer.enable();
        self.set_isr_state(IsrState::Idle);

        trace!("tick {firings}: next deadline {deadline}");
    }
}

impl<B: Board> InterruptHandler for Ticker<B> {
    fn handle(&self, _id: InterruptId) {
        self.on_timer();
    }
}
