/// The executing hart, seen from the main context.
pub trait Cpu {
    /// Run `f` with interrupt delivery deferred. An interrupt that becomes pending meanwhile
    /// is taken as soon as the previous enable state is restored.
    fn without_interrupts<R>(&self, f: impl FnOnce() -> R) -> R;

    /// Suspend until an interrupt of any kind is pending.
    fn wait_for_interrupt(&self);
}
