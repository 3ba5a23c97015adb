use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use crate::board::Board;
use crate::channel::TransmitChannel;
use crate::config::Config;
use crate::timer::PeriodicTimer;

/// Where the timer interrupt handler currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum IsrState {
    Idle = 0,
    /// Timer delivery is disabled, the lock is not held.
    Masked = 1,
    InCriticalSection = 2,
}

impl IsrState {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => IsrState::Masked,
            2 => IsrState::InCriticalSection,
            _ => IsrState::Idle,
        }
    }
}

/// State shared by the main loop and the timer interrupt handler.
pub struct Ticker<B: Board> {
    pub(crate) channel: &'static TransmitChannel<B::Serial>,
    pub(crate) timer: PeriodicTimer<B::Timer>,
    pub(crate) cpu: B::Cpu,
    pub(crate) config: Config,
    isr_state: AtomicU8,
    firings: AtomicUsize,
}

impl<B: Board> Ticker<B> {
    pub fn new(
        channel: &'static TransmitChannel<B::Serial>,
        timer: PeriodicTimer<B::Timer>,
        cpu: B::Cpu,
        config: Config,
    ) -> Self {
        Self {
            channel,
            timer,
            cpu,
            config,
            isr_state: AtomicU8::new(IsrState::Idle as u8),
            firings: AtomicUsize::new(0),
        }
    }

    pub fn channel(&self) -> &'static TransmitChannel<B::Serial> {
        self.channel
    }

    pub fn timer(&self) -> &PeriodicTimer<B::Timer> {
        &self.timer
    }

    pub fn cpu(&self) -> &B::Cpu {
        &self.cpu
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn isr_state(&self) -> IsrState {
        IsrState::from_u8(self.isr_state.load(Ordering::Relaxed))
    }

    /// Completed timer interrupts since boot.
    pub fn firings(&self) -> usize {
        self.firings.load(Ordering::Relaxed)
    }

    pub(crate) fn set_isr_state(&self, state: IsrState) {
        self.isr_state.store(state as u8, Ordering::Relaxed);
    }

    pub(crate) fn count_firing(&self) -> usize {
        self.firings.fetch_add(1, Ordering::Relaxed) + 1
    }
}
