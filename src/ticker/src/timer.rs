/// Hardware tick count.
pub type Ticks = u64;

/// A one-shot compare timer: fires once the tick counter reaches the armed deadline.
pub trait Timer {
    /// Stop delivering expiry notifications to the core.
    fn disable(&self);

    /// Resume delivering expiry notifications.
    fn enable(&self);

    fn now(&self) -> Ticks;

    /// Raise the event no earlier than `deadline`.
    fn arm(&self, deadline: Ticks);
}

/// Turns a one-shot [`Timer`] into a recurring event.
///
/// Each deadline is computed from a fresh read of the counter, so the period holds relative
/// to the moment of re-arming. Handler latency adds to the gap between firings but never
/// makes a deadline land before the previous one.
pub struct PeriodicTimer<T> {
    timer: T,
    period: Ticks,
}

impl<T: Timer> PeriodicTimer<T> {
    pub const fn new(timer: T, period: Ticks) -> Self {
        Self { timer, period }
    }

    pub fn period(&self) -> Ticks {
        self.period
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Arm the first deadline and let the timer fire.
    pub fn start(&self) -> Ticks {
        let deadline = self.rearm();
        self.timer.enable();
        deadline
    }

    /// Arm `now + period` and return it. Delivery stays as it was.
    ///
    /// If the counter passes the returned deadline before the write lands, the timer fires
    /// as soon as it is enabled again.
    pub fn rearm(&self) -> Ticks {
        let next = self.timer.now().saturating_add(self.period);
        self.timer.arm(next);
        next
    }

    pub fn disable(&self) {
        self.timer.disable()
    }

    pub fn enable(&self) {
        self.timer.enable()
    }
}
