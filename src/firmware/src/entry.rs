use core::arch::global_asm;

use riscv::register::mtvec::{self, TrapMode};

use crate::param::{NCPU, STACK_SIZE};
use crate::trap::trapvec;

/// The stacks of all the harts combined.
/// Each hart will use a part of the global stack.
#[repr(C, align(16))]
struct GlobalStack([u8; STACK_SIZE * NCPU]);

/// Init the global stack, dont mangle the name so we can use it from asm.
#[no_mangle]
static mut GLOBAL_STACK: GlobalStack = GlobalStack([0; STACK_SIZE * NCPU]);

// Every hart starts here. Harts beyond NCPU park for good, the rest clear .bss,
// take their slice of GLOBAL_STACK and call `start`.
global_asm!(
    r#"
    .section .text.entry
    .global _entry
_entry:
    csrr t0, mhartid
    li t1, {ncpu}
    bgeu t0, t1, 3f

    la t1, _bss_start
    la t2, _bss_end
1:
    bgeu t1, t2, 2f
    sd zero, 0(t1)
    addi t1, t1, 8
    j 1b
2:
    la sp, GLOBAL_STACK
    li t1, {stack_size}
    addi t0, t0, 1
    mul t1, t1, t0
    add sp, sp, t1
    call start
3:
    wfi
    j 3b
"#,
    ncpu = const NCPU,
    stack_size = const STACK_SIZE,
);

#[allow(unsafe_op_in_unsafe_fn)]
#[no_mangle]
pub unsafe extern "C" fn start() -> ! {
    // Every machine trap goes to `trapvec`
    mtvec::write(trapvec as usize, TrapMode::Direct);

    // The function `main` is defined in main.rs, but we don't have access to it so we can't reference it directly.
    // Fortunately, it must be #[no_mangle], so we can act as though it's defined here.
    extern "C" {
        fn main() -> !;
    }

    main()
}
