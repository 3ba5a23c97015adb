use crate::channel::Message;
use crate::param::{
    DEFAULT_BAUD_RATE, DEFAULT_IDLE_WAITS, DEFAULT_PERIOD, IRQ_MESSAGE, MAIN_MESSAGE,
};
use crate::timer::Ticks;

/// Everything the ticker needs to know that is not a device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub period: Ticks,
    pub baud_rate: u32,
    pub idle_waits: usize,
    pub main_message: Message,
    pub irq_message: Message,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            baud_rate: DEFAULT_BAUD_RATE,
            idle_waits: DEFAULT_IDLE_WAITS,
            main_message: Message::from_text(MAIN_MESSAGE),
            irq_message: Message::from_text(IRQ_MESSAGE),
        }
    }

    pub const fn with_period(mut self, period: Ticks) -> Self {
        self.period = period;
        self
    }

    pub const fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub const fn with_idle_waits(mut self, idle_waits: usize) -> Self {
        self.idle_waits = idle_waits;
        self
    }

    pub const fn with_messages(mut self, main: Message, irq: Message) -> Self {
        self.main_message = main;
        self.irq_message = irq;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
