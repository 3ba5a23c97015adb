//! Board support for running the ticker on qemu `virt` in machine mode.
#![no_std]

pub mod arch;
pub mod board;
pub mod clint;
pub mod console;
pub mod cpu;
pub mod entry;
pub mod exit;
pub mod memlayout;
pub mod param;
pub mod trap;
pub mod uart;
