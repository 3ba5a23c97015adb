//! This firmware is built to run on qemu-system-riscv64 -machine virt.
//! Addresses follow the [`qemu source code`](https://github.com/qemu/qemu/blob/master/hw/riscv/virt.c)
//! and the [`qemu 'virt' docs`](https://www.qemu.org/docs/master/system/riscv/virt.html).

// CLINT

/// Qemu-virt emulates the [`SiFive CLINT`](https://sifive.cdn.prismic.io/sifive%2Fc89f6e5a-cf9e-44c3-a3db-04420702dcc1_sifive+e31+manual+v19.08.pdf)
pub const CLINT_BASE_ADDR: usize = 0x0200_0000;
/// The offset that the `mtimecmp` registers are stored at. For the `mtimecmp` register that corresponds to hart i, add `i * 8` to this offset.
pub const MTIMECMPS_OFFSET: usize = 0x0000_4000;
/// The offset that the `mtime` register is stored at in the clint.
pub const MTIME_OFFSET: usize = 0x0000_bff8;
/// The physical memory address of the `mtime` register.
pub const MTIME_ADDR: usize = CLINT_BASE_ADDR + MTIME_OFFSET;
/// The physical memory address of the `mtimecmp` registers.
pub const MTIMECMP_ADDR: usize = CLINT_BASE_ADDR + MTIMECMPS_OFFSET;

// UART

/// Qemu-virt emulates a single NS16550 compatible UART
pub const UART_BASE_ADDR: usize = 0x1000_0000;
/// Input clock of the emulated 16550.
pub const UART_CLOCK_HZ: u32 = 1_843_200;

// TEST FINISHER

/// SiFive test device, writing to it powers the machine off with a status.
pub const TEST_FINISHER_ADDR: usize = 0x0010_0000;
pub const FINISHER_PASS: u32 = 0x5555;
pub const FINISHER_FAIL: u32 = 0x3333;
