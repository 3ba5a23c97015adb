use core::cell::UnsafeCell;
use core::hint;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{AtomicU32, Ordering};

const FREE: u32 = 0;
const HELD: u32 = 1;

/// A single lock word shared by the interrupt and the main context.
///
/// No owner is recorded and the lock is not reentrant: acquiring it twice from the
/// same context without a release in between never returns.
#[repr(transparent)]
pub struct RawSpinLock {
    state: AtomicU32,
}

impl RawSpinLock {
    pub const fn new() -> Self {
        Self {
            state: AtomicU32::new(FREE),
        }
    }

    /// Busy-wait until this context moves the word from FREE to HELD.
    pub fn acquire(&self) {
        loop {
            // Poll with plain loads so the exchange is only attempted once the word looks free.
            while self.state.load(Ordering::Relaxed) != FREE {
                hint::spin_loop();
            }
            if self.state.swap(HELD, Ordering::Acquire) == FREE {
                return;
            }
        }
    }

    /// A single exchange attempt, `true` if the lock is now held by the caller.
    pub fn try_acquire(&self) -> bool {
        self.state.swap(HELD, Ordering::Acquire) == FREE
    }

    /// Writes FREE. Releasing a free lock leaves it free.
    pub fn release(&self) {
        self.state.store(FREE, Ordering::Release);
    }

    pub fn is_held(&self) -> bool {
        self.state.load(Ordering::Relaxed) != FREE
    }
}

impl Default for RawSpinLock {
    fn default() -> Self {
        Self::new()
    }
}

/// Data that can only be reached while holding a [`RawSpinLock`].
pub struct SpinLock<T> {
    raw: RawSpinLock,
    data: UnsafeCell<T>,
}

// SAFETY: access to `data` is serialized by `raw`.
unsafe impl<T: Send> Sync for SpinLock<T> {}
unsafe impl<T: Send> Send for SpinLock<T> {}

impl<T> SpinLock<T> {
    pub const fn new(data: T) -> Self {
        Self {
            raw: RawSpinLock::new(),
            data: UnsafeCell::new(data),
        }
    }

    pub fn lock(&self) -> SpinLockGuard<'_, T> {
        self.raw.acquire();
        SpinLockGuard { lock: self }
    }

    pub fn try_lock(&self) -> Option<SpinLockGuard<'_, T>> {
        self.raw.try_acquire().then(|| SpinLockGuard { lock: self })
    }

    /// The lock word itself.
    pub fn raw(&self) -> &RawSpinLock {
        &self.raw
    }

    /// Reach the data without taking the lock.
    ///
    /// # Safety
    /// The caller must guarantee that no other context touches the data for the lifetime
    /// of the returned reference, for example because every other context is halted.
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn force_get(&self) -> &mut T {
        unsafe { &mut *self.data.get() }
    }
}

pub struct SpinLockGuard<'a, T> {
    lock: &'a SpinLock<T>,
}

impl<T> Deref for SpinLockGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: the guard exists only while the lock is held.
        unsafe { &*self.lock.data.get() }
    }
}

impl<T> DerefMut for SpinLockGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: the guard exists only while the lock is held.
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<T> Drop for SpinLockGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.raw.release();
    }
}
