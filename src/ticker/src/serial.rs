use core::fmt;

/// Byte-level access to a UART transmitter.
pub trait Serial {
    fn init(&mut self, baud_rate: u32);

    /// Push one byte into the transmit holding register.
    fn put_byte(&mut self, byte: u8);

    /// `true` once the transmitter can accept the next byte.
    fn transmit_ready(&self) -> bool;
}

/// Write every byte of `msg`, waiting for the transmitter after each one.
pub fn send_message<S: Serial + ?Sized>(serial: &mut S, msg: &[u8]) {
    for &byte in msg {
        serial.put_byte(byte);
        while !serial.transmit_ready() {
            core::hint::spin_loop();
        }
    }
}

/// Adapts a [`Serial`] to [`fmt::Write`] for console and log output.
pub struct SerialWriter<'a, S: ?Sized>(pub &'a mut S);

impl<S: Serial + ?Sized> fmt::Write for SerialWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        send_message(self.0, s.as_bytes());
        Ok(())
    }
}
