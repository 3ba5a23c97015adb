use core::fmt;

use crate::serial::{send_message, Serial, SerialWriter};
use crate::spinlock::{RawSpinLock, SpinLock, SpinLockGuard};

/// An immutable byte string sent as one unit on the channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message {
    bytes: &'static [u8],
}

impl Message {
    pub const fn new(bytes: &'static [u8]) -> Self {
        Self { bytes }
    }

    pub const fn from_text(text: &'static str) -> Self {
        Self::new(text.as_bytes())
    }

    pub const fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The one UART every context writes to, behind the shared lock word.
pub struct TransmitChannel<S> {
    serial: SpinLock<S>,
}

impl<S: Serial> TransmitChannel<S> {
    pub const fn new(serial: S) -> Self {
        Self {
            serial: SpinLock::new(serial),
        }
    }

    pub fn init(&self, baud_rate: u32) {
        self.serial.lock().init(baud_rate);
    }

    /// Take the lock and hold it until the guard drops.
    pub fn lock(&self) -> SpinLockGuard<'_, S> {
        self.serial.lock()
    }

    /// Transmit `msg` in full while holding the lock.
    pub fn send(&self, msg: &Message) {
        let mut serial = self.serial.lock();
        send_message(&mut *serial, msg.as_bytes());
    }

    /// Format into the channel as one critical section.
    pub fn write_fmt(&self, args: fmt::Arguments) -> fmt::Result {
        let mut serial = self.serial.lock();
        fmt::Write::write_fmt(&mut SerialWriter(&mut *serial), args)
    }

    pub fn lock_word(&self) -> &RawSpinLock {
        self.serial.raw()
    }

    /// Write without taking the lock.
    ///
    /// # Safety
    /// Only for paths that never return to the holder of the lock, such as a panic
    /// handler that halts the core afterwards.
    pub unsafe fn write_unlocked(&self, bytes: &[u8]) {
        send_message(unsafe { self.serial.force_get() }, bytes);
    }
}
