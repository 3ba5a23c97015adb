//! A deterministic single-core machine for running the ticker on the host.
//!
//! Time only moves when the firmware does something: every transmitted byte costs a fixed
//! number of ticks, and `wfi` jumps straight to the armed deadline. After every tick
//! advance the machine checks for a pending timer interrupt and, if the core accepts it,
//! runs the registered handler right there, which is how preemption at any byte boundary
//! is modelled. Trap entry clears the global enable and `mret` restores it, as on RISC-V.

use std::boxed::Box;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::vec::Vec;

use spin::Once;

use crate::board::{Board, InterruptController, TimerController};
use crate::channel::TransmitChannel;
use crate::config::Config;
use crate::context::Ticker;
use crate::cpu::Cpu;
use crate::interrupt::{
    EnableError, InterruptHandler, InterruptId, InterruptTable, RegisterError,
};
use crate::param::{CPU_INTERRUPT_LINE, IRQ_MESSAGE, MAIN_MESSAGE};
use crate::serial::Serial;
use crate::spinlock::RawSpinLock;
use crate::startup::bring_up;
use crate::timer::{Ticks, Timer};

pub const TIMER_INTERRUPT: InterruptId = 7;

pub const MAIN: &[u8] = MAIN_MESSAGE.as_bytes();
pub const IRQ: &[u8] = IRQ_MESSAGE.as_bytes();

fn leak<T>(value: T) -> &'static T {
    Box::leak(Box::new(value))
}

pub struct Machine {
    mtime: AtomicU64,
    mtimecmp: AtomicU64,
    /// `mie.MTIE`
    timer_enabled: AtomicBool,
    /// `mstatus.MIE`
    global_enabled: AtomicBool,
    trap_depth: AtomicUsize,
    byte_ticks: Ticks,
    arm_stall: AtomicU64,
    baud_rate: AtomicU32,
    vectors: InterruptTable<16>,
    watched_lock: Once<&'static RawSpinLock>,
    wire: Mutex<Vec<u8>>,
    deadlines: Mutex<Vec<Ticks>>,
    firings: Mutex<Vec<Ticks>>,
    unmasked_trap_bytes: AtomicUsize,
    unlocked_bytes: AtomicUsize,
}

impl Machine {
    pub fn new(byte_ticks: Ticks) -> &'static Self {
        leak(Self {
            mtime: AtomicU64::new(0),
            mtimecmp: AtomicU64::new(Ticks::MAX),
            timer_enabled: AtomicBool::new(false),
            global_enabled: AtomicBool::new(false),
            trap_depth: AtomicUsize::new(0),
            byte_ticks,
            arm_stall: AtomicU64::new(0),
            baud_rate: AtomicU32::new(0),
            vectors: InterruptTable::new(),
            watched_lock: Once::new(),
            wire: Mutex::new(Vec::new()),
            deadlines: Mutex::new(Vec::new()),
            firings: Mutex::new(Vec::new()),
            unmasked_trap_bytes: AtomicUsize::new(0),
            unlocked_bytes: AtomicUsize::new(0),
        })
    }

    /// Check every trap and every byte against this lock.
    pub fn watch_lock(&self, lock: &'static RawSpinLock) {
        self.watched_lock.call_once(|| lock);
    }

    pub fn now(&self) -> Ticks {
        self.mtime.load(Ordering::SeqCst)
    }

    pub fn advance(&self, ticks: Ticks) {
        self.mtime.fetch_add(ticks, Ordering::SeqCst);
        self.poll();
    }

    pub fn advance_to(&self, tick: Ticks) {
        self.mtime.fetch_max(tick, Ordering::SeqCst);
        self.poll();
    }

    /// The next `arm` lands this many ticks after the counter was read.
    pub fn stall_next_arm(&self, ticks: Ticks) {
        self.arm_stall.store(ticks, Ordering::SeqCst);
    }

    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled.load(Ordering::SeqCst)
    }

    pub fn interrupts_enabled(&self) -> bool {
        self.global_enabled.load(Ordering::SeqCst)
    }

    pub fn baud_rate(&self) -> Option<u32> {
        match self.baud_rate.load(Ordering::SeqCst) {
            0 => None,
            baud => Some(baud),
        }
    }

    pub fn wire(&self) -> Vec<u8> {
        self.wire.lock().unwrap().clone()
    }

    /// Every compare value written, in order.
    pub fn deadlines(&self) -> Vec<Ticks> {
        self.deadlines.lock().unwrap().clone()
    }

    /// Counter value at each timer trap entry.
    pub fn firings(&self) -> Vec<Ticks> {
        self.firings.lock().unwrap().clone()
    }

    pub fn bytes_sent_with_timer_unmasked_in_trap(&self) -> usize {
        self.unmasked_trap_bytes.load(Ordering::SeqCst)
    }

    pub fn bytes_sent_unlocked(&self) -> usize {
        self.unlocked_bytes.load(Ordering::SeqCst)
    }

    fn timer_pending(&self) -> bool {
        self.now() >= self.mtimecmp.load(Ordering::SeqCst)
    }

    /// Take the timer interrupt for as long as it is pending and accepted.
    fn poll(&self) {
        while self.interrupts_enabled() && self.timer_enabled() && self.timer_pending() {
            self.trap(TIMER_INTERRUPT);
        }
    }

    fn trap(&self, id: InterruptId) {
        if let Some(lock) = self.watched_lock.get() {
            assert!(
                !lock.is_held(),
                "interrupt taken while the transmit lock is held: the handler would spin forever"
            );
        }
        self.firings.lock().unwrap().push(self.now());

        self.global_enabled.store(false, Ordering::SeqCst);
        self.trap_depth.fetch_add(1, Ordering::SeqCst);
        let handled = self.vectors.dispatch(id);
        self.trap_depth.fetch_sub(1, Ordering::SeqCst);
        self.global_enabled.store(true, Ordering::SeqCst);

        assert!(handled, "no handler registered for interrupt {id}");
    }

    fn transmit(&self, byte: u8) {
        if self.trap_depth.load(Ordering::SeqCst) > 0 && self.timer_enabled() {
            self.unmasked_trap_bytes.fetch_add(1, Ordering::SeqCst);
        }
        if let Some(lock) = self.watched_lock.get() {
            if !lock.is_held() {
                self.unlocked_bytes.fetch_add(1, Ordering::SeqCst);
            }
        }
        self.wire.lock().unwrap().push(byte);
        self.advance(self.byte_ticks);
    }

    fn wait_for_interrupt(&self) {
        if self.timer_enabled() {
            self.mtime
                .fetch_max(self.mtimecmp.load(Ordering::SeqCst), Ordering::SeqCst);
        }
        self.poll();
    }
}

pub struct SimSerial {
    machine: &'static Machine,
}

impl Serial for SimSerial {
    fn init(&mut self, baud_rate: u32) {
        self.machine.baud_rate.store(baud_rate, Ordering::SeqCst);
    }

    fn put_byte(&mut self, byte: u8) {
        self.machine.transmit(byte);
    }

    fn transmit_ready(&self) -> bool {
        true
    }
}

pub struct SimCpu {
    machine: &'static Machine,
}

impl Cpu for SimCpu {
    fn without_interrupts<R>(&self, f: impl FnOnce() -> R) -> R {
        let was_enabled = self.machine.global_enabled.swap(false, Ordering::SeqCst);
        let ret = f();
        self.machine
            .global_enabled
            .store(was_enabled, Ordering::SeqCst);
        self.machine.poll();
        ret
    }

    fn wait_for_interrupt(&self) {
        self.machine.wait_for_interrupt();
    }
}

pub struct SimTimer {
    machine: &'static Machine,
}

impl Timer for SimTimer {
    fn disable(&self) {
        self.machine.timer_enabled.store(false, Ordering::SeqCst);
    }

    fn enable(&self) {
        self.machine.timer_enabled.store(true, Ordering::SeqCst);
        self.machine.poll();
    }

    fn now(&self) -> Ticks {
        self.machine.now()
    }

    fn arm(&self, deadline: Ticks) {
        let stall = self.machine.arm_stall.swap(0, Ordering::SeqCst);
        self.machine.mtime.fetch_add(stall, Ordering::SeqCst);
        self.machine.mtimecmp.store(deadline, Ordering::SeqCst);
        self.machine.deadlines.lock().unwrap().push(deadline);
    }
}

impl TimerController for SimTimer {
    fn init(&self) {
        self.machine.mtimecmp.store(Ticks::MAX, Ordering::SeqCst);
    }

    fn interrupt_id(&self) -> InterruptId {
        TIMER_INTERRUPT
    }

    fn register_handler(
        &self,
        id: InterruptId,
        handler: &'static dyn InterruptHandler,
    ) -> Result<(), RegisterError> {
        self.machine.vectors.register(id, handler)
    }
}

pub struct SimInterruptController {
    machine: &'static Machine,
    accepts_cpu_line: bool,
}

impl InterruptController for SimInterruptController {
    fn init(&self) {
        self.machine.global_enabled.store(false, Ordering::SeqCst);
    }

    fn enable(&self, line: usize) -> Result<(), EnableError> {
        if line != CPU_INTERRUPT_LINE || !self.accepts_cpu_line {
            return Err(EnableError::UnsupportedLine(line));
        }
        self.machine.global_enabled.store(true, Ordering::SeqCst);
        self.machine.poll();
        Ok(())
    }
}

/// Which capabilities the simulated board offers.
#[derive(Clone, Copy, Debug)]
pub struct Presence {
    pub cpu: bool,
    pub interrupt_controller: bool,
    pub timer: bool,
    pub free_timer_vector: bool,
    pub cpu_line: bool,
}

impl Presence {
    pub const ALL: Presence = Presence {
        cpu: true,
        interrupt_controller: true,
        timer: true,
        free_timer_vector: true,
        cpu_line: true,
    };
}

struct Squatter;

impl InterruptHandler for Squatter {
    fn handle(&self, _id: InterruptId) {}
}

pub struct SimBoard {
    machine: &'static Machine,
    channel: &'static TransmitChannel<SimSerial>,
    intc: SimInterruptController,
    presence: Presence,
}

impl SimBoard {
    pub fn machine(&self) -> &'static Machine {
        self.machine
    }
}

impl Board for SimBoard {
    type Cpu = SimCpu;
    type InterruptController = SimInterruptController;
    type Timer = SimTimer;
    type Serial = SimSerial;

    fn current_hart(&self) -> usize {
        0
    }

    fn cpu(&self, _hart: usize) -> Option<SimCpu> {
        self.presence.cpu.then(|| SimCpu {
            machine: self.machine,
        })
    }

    fn cpu_interrupt_controller(&self, _cpu: &SimCpu) -> Option<&SimInterruptController> {
        self.presence.interrupt_controller.then_some(&self.intc)
    }

    fn timer_controller(&self, _cpu: &SimCpu) -> Option<SimTimer> {
        self.presence.timer.then(|| SimTimer {
            machine: self.machine,
        })
    }

    fn serial(&self, _index: usize) -> &'static TransmitChannel<SimSerial> {
        self.channel
    }
}

pub fn board(byte_ticks: Ticks, presence: Presence) -> &'static SimBoard {
    let machine = Machine::new(byte_ticks);
    let channel = leak(TransmitChannel::new(SimSerial { machine }));
    machine.watch_lock(channel.lock_word());
    if !presence.free_timer_vector {
        machine
            .vectors
            .register(TIMER_INTERRUPT, leak(Squatter))
            .unwrap();
    }
    leak(SimBoard {
        machine,
        channel,
        intc: SimInterruptController {
            machine,
            accepts_cpu_line: presence.cpu_line,
        },
        presence,
    })
}

pub fn slot() -> &'static Once<Ticker<SimBoard>> {
    leak(Once::new())
}

/// A fully brought-up ticker with the timer not yet started.
pub fn boot(config: Config, byte_ticks: Ticks) -> (&'static Machine, &'static Ticker<SimBoard>) {
    let board = board(byte_ticks, Presence::ALL);
    let ticker = bring_up(board, slot(), config).unwrap();
    (board.machine(), ticker)
}

/// Split `wire` into the known messages, `None` if any byte falls outside a whole message.
pub fn split_messages<'a>(mut wire: &[u8], known: &[&'a [u8]]) -> Option<Vec<&'a [u8]>> {
    let mut messages = Vec::new();
    while !wire.is_empty() {
        let msg = known.iter().find(|msg| wire.starts_with(msg))?;
        messages.push(*msg);
        wire = &wire[msg.len()..];
    }
    Some(messages)
}
