use crate::memlayout::{MTIMECMP_ADDR, MTIME_ADDR, TEST_FINISHER_ADDR};

use super::{AddressOf, ReadFrom, WriteInto};

/// Memory mapped register (part of the CLINT), keeps track how many ticks have passed since boot.
/// __Section 3.2.1 in *The RISC-V Instruction Set Manual: Volume II*__
pub struct Mtime;

impl ReadFrom for Mtime {
    type Out = u64;

    unsafe fn read(&self) -> Self::Out {
        unsafe { (MTIME_ADDR as *const u64).read_volatile() }
    }
}

/// Memory mapped register (part of the CLINT), unique to each hart. While [`Mtime`] >= [`Mtimecmp`]
/// the machine timer interrupt is pending.
/// __Section 3.2.1 in *The RISC-V Instruction Set Manual: Volume II*__
pub struct Mtimecmp {
    pub hart_id: usize,
}

impl WriteInto for Mtimecmp {
    type In = u64;

    unsafe fn write(&self, val: Self::In) {
        unsafe { (self.addr_of() as *mut u64).write_volatile(val) };
    }
}

impl AddressOf for Mtimecmp {
    fn addr_of(&self) -> usize {
        MTIMECMP_ADDR + 8 * self.hart_id
    }
}

/// The SiFive test device. Any write of a recognised status word powers the machine off.
pub struct TestFinisher;

impl WriteInto for TestFinisher {
    type In = u32;

    unsafe fn write(&self, val: Self::In) {
        unsafe { (self.addr_of() as *mut u32).write_volatile(val) };
    }
}

impl AddressOf for TestFinisher {
    fn addr_of(&self) -> usize {
        TEST_FINISHER_ADDR
    }
}
