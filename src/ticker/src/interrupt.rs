use spin::Mutex;
use thiserror::Error;

/// Cause number of an interrupt as reported by the core.
pub type InterruptId = usize;

/// Something the trap path can call when its interrupt is taken.
///
/// The handler object doubles as the context pointer: whatever it needs at interrupt time
/// lives inside it.
pub trait InterruptHandler: Sync {
    fn handle(&self, id: InterruptId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("interrupt {0} is outside the vector table")]
    OutOfRange(InterruptId),
    #[error("interrupt {0} already has a handler")]
    AlreadyRegistered(InterruptId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EnableError {
    #[error("interrupt line {0} cannot be enabled on this controller")]
    UnsupportedLine(usize),
}

/// Handlers indexed by interrupt cause.
pub struct InterruptTable<const N: usize> {
    handlers: Mutex<[Option<&'static dyn InterruptHandler>; N]>,
}

impl<const N: usize> InterruptTable<N> {
    pub const fn new() -> Self {
        Self {
            handlers: Mutex::new([None; N]),
        }
    }

    pub fn register(
        &self,
        id: InterruptId,
        handler: &'static dyn InterruptHandler,
    ) -> Result<(), RegisterError> {
        let mut handlers = self.handlers.lock();
        let slot = handlers.get_mut(id).ok_or(RegisterError::OutOfRange(id))?;
        if slot.is_some() {
            return Err(RegisterError::AlreadyRegistered(id));
        }
        *slot = Some(handler);
        Ok(())
    }

    pub fn is_registered(&self, id: InterruptId) -> bool {
        matches!(self.handlers.lock().get(id), Some(Some(_)))
    }

    /// Run the handler for `id`. Returns `false` if nothing is registered for it.
    pub fn dispatch(&self, id: InterruptId) -> bool {
        // Copy the handler out so the table is not locked while it runs.
        let handler = self.handlers.lock().get(id).copied().flatten();
        match handler {
            Some(handler) => {
                handler.handle(id);
                true
            }
            None => false,
        }
    }
}

impl<const N: usize> Default for InterruptTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
