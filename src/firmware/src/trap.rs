use core::arch::global_asm;

use riscv::register::{mcause, mepc, mtval};
use ticker::InterruptTable;

use crate::param::NVECTORS;

/// Machine interrupt handlers, indexed by `mcause` code.
pub static VECTORS: InterruptTable<NVECTORS> = InterruptTable::new();

// Machine trap entry. Only caller-saved registers need saving, `machine_trap` preserves the rest.
global_asm!(
    r#"
    .section .text
    .align 4
    .global trapvec
trapvec:
    addi sp, sp, -128
    sd ra, 0(sp)
    sd t0, 8(sp)
    sd t1, 16(sp)
    sd t2, 24(sp)
    sd t3, 32(sp)
    sd t4, 40(sp)
    sd t5, 48(sp)
    sd t6, 56(sp)
    sd a0, 64(sp)
    sd a1, 72(sp)
    sd a2, 80(sp)
    sd a3, 88(sp)
    sd a4, 96(sp)
    sd a5, 104(sp)
    sd a6, 112(sp)
    sd a7, 120(sp)

    call machine_trap

    ld ra, 0(sp)
    ld t0, 8(sp)
    ld t1, 16(sp)
    ld t2, 24(sp)
    ld t3, 32(sp)
    ld t4, 40(sp)
    ld t5, 48(sp)
    ld t6, 56(sp)
    ld a0, 64(sp)
    ld a1, 72(sp)
    ld a2, 80(sp)
    ld a3, 88(sp)
    ld a4, 96(sp)
    ld a5, 104(sp)
    ld a6, 112(sp)
    ld a7, 120(sp)
    addi sp, sp, 128
    mret
"#
);

extern "C" {
    pub fn trapvec();
}

#[no_mangle]
pub extern "C" fn machine_trap() {
    let mcause = mcause::read();

    if !mcause.is_interrupt() {
        panic!(
            "Unexpected Exception in Machine Mode: \n\tMcause={:#x}\n\tMepc={:#x}\n\tMtval={:#x}",
            mcause.bits(),
            mepc::read(),
            mtval::read(),
        );
    }

    let id = mcause.code();
    if !VECTORS.dispatch(id) {
        panic!("Unrecognized interrupt: {id}");
    }
}
