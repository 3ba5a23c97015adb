use bitflags::bitflags;
use ticker::Serial;

use crate::memlayout::UART_CLOCK_HZ;

/// Uart 16550, transmit side only, polled.
/// Implementation based off [`this reference`](https://www.lammertbies.nl/comm/info/serial-uart#DLX)
pub struct Uart {
    base_addr: usize,
}

/// Uart THR register, only available when DLAB is off
const THR: u8 = 0;
/// Uart IER register, only available when DLAB is off
const IER: u8 = 1;
/// Uart DLL register, only avaliable when dlab is set
const DLL: u8 = 0;
/// Uart DLM register, only avaliable when dlab is set
const DLM: u8 = 1;
/// Uart FCR register, write-only
const FCR: u8 = 2;
/// Uart LCR register
const LCR: u8 = 3;
/// Uart LSR register for line status
const LSR: u8 = 5;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct LineControl: u8 {
        const WORD_LEN_8 = 0b11;
        const DLAB = 1 << 7;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct FifoControl: u8 {
        const ENABLE = 1 << 0;
        const CLEAR_RX = 1 << 1;
        const CLEAR_TX = 1 << 2;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct LineStatus: u8 {
        const THR_EMPTY = 1 << 5;
    }
}

/// Divisor latch value for `baud_rate`, never zero.
const fn divisor(baud_rate: u32) -> u16 {
    let clocks_per_bit = match baud_rate.saturating_mul(16) {
        0 => 1,
        n => n,
    };
    match UART_CLOCK_HZ / clocks_per_bit {
        0 => 1,
        d if d > u16::MAX as u32 => u16::MAX,
        d => d as u16,
    }
}

impl Uart {
    pub const fn new(base_addr: usize) -> Self {
        Uart { base_addr }
    }

    unsafe fn write_to_register<const REG: u8>(&mut self, val: u8) {
        unsafe { ((self.base_addr + REG as usize) as *mut u8).write_volatile(val) }
    }

    unsafe fn read_register<const REG: u8>(&self) -> u8 {
        unsafe { ((self.base_addr + REG as usize) as *const u8).read_volatile() }
    }

    fn line_status(&self) -> LineStatus {
        LineStatus::from_bits_truncate(unsafe { self.read_register::<LSR>() })
    }
}

impl Serial for Uart {
    fn init(&mut self, baud_rate: u32) {
        let [dll, dlm] = divisor(baud_rate).to_le_bytes();
        unsafe {
            // Polled, no interrupts
            self.write_to_register::<IER>(0x00);
            // Enable DLAB so we can access DLL and DLM
            self.write_to_register::<LCR>(LineControl::DLAB.bits());
            self.write_to_register::<DLL>(dll);
            self.write_to_register::<DLM>(dlm);
            // Disable DLAB, 8 data bits, no parity, one stop bit
            self.write_to_register::<LCR>(LineControl::WORD_LEN_8.bits());
            self.write_to_register::<FCR>(
                (FifoControl::ENABLE | FifoControl::CLEAR_RX | FifoControl::CLEAR_TX).bits(),
            );
        }
    }

    fn put_byte(&mut self, byte: u8) {
        unsafe { self.write_to_register::<THR>(byte) }
    }

    fn transmit_ready(&self) -> bool {
        self.line_status().contains(LineStatus::THR_EMPTY)
    }
}
