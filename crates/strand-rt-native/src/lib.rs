#![allow(non_camel_case_types)]
#![allow(clippy::missing_safety_doc)]

use std::cell::Cell;
use std::ffi::c_void;

use strand_rt_core::{OutputSink, Scheduler};

/// Deferred-task action: a compiled function plus the opaque state it was
/// bound to at enqueue time. The runtime never inspects `state`.
pub type sr_task_fn = unsafe extern "C-unwind" fn(state: *mut c_void);

/// Compiled entry function. Receives the caller waker it must invoke
/// exactly once when its work, including any scheduled continuations, is
/// complete.
pub type sr_exec_fn = unsafe extern "C-unwind" fn(waker_fn: sr_task_fn, waker_state: *mut c_void);

extern "C" {
    // Provided by the embedding host (or the emitted main shim).
    fn sr_output_string(ptr: *const u8, len: i32);
}

extern "C-unwind" {
    // Must not return to the runtime; may unwind in test harnesses.
    fn sr_trap(code: i32) -> !;
}

pub const SR_TRAP_SCHED_NULL_TASK: i32 = 9900;
pub const SR_TRAP_EXEC_EARLY_WAKE: i32 = 9901;
pub const SR_TRAP_EXEC_NO_WAKE: i32 = 9902;

fn trap(code: i32) -> ! {
    unsafe { sr_trap(code) }
}

thread_local! {
    static SCHED: Scheduler = Scheduler::new();
    static EXECUTING: Cell<bool> = const { Cell::new(false) };
}

struct HostSink;

impl OutputSink for HostSink {
    fn output_string(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(i32::MAX as usize) as i32;
        unsafe { sr_output_string(bytes.as_ptr(), len) }
    }
}

unsafe fn str_as_slice<'a>(ptr: *const u8, len: i32) -> &'a [u8] {
    if ptr.is_null() || len <= 0 {
        return &[];
    }
    std::slice::from_raw_parts(ptr, len as usize)
}

// -------------------------
// Scheduler (trampoline)
// -------------------------

/// Registers one deferred task. FIFO across the whole drain: a task
/// enqueued while the queue is draining runs after everything already
/// queued, before anything enqueued later.
#[no_mangle]
pub extern "C-unwind" fn strand_rt_sched_enqueue_v1(func: Option<sr_task_fn>, state: *mut c_void) {
    let Some(func) = func else {
        trap(SR_TRAP_SCHED_NULL_TASK);
    };
    SCHED.with(|sched| sched.enqueue(move || unsafe { func(state) }));
}

/// Runs pending tasks until the queue is empty at the moment of the
/// check. Tasks may re-enter `strand_rt_sched_enqueue_v1`; the same
/// drain visits them.
#[no_mangle]
pub extern "C-unwind" fn strand_rt_sched_run_all_v1() {
    SCHED.with(|sched| sched.drain_all());
}

unsafe extern "C-unwind" fn top_level_waker(_state: *mut c_void) {
    EXECUTING.with(|flag| flag.set(false));
}

/// Invokes a compiled entry function with the runtime's top-level waker,
/// then drains the queue. Traps if the waker fires while tasks are still
/// queued, or if the queue empties before the waker fired; either means
/// the emitted scheduling code is inconsistent.
#[no_mangle]
pub extern "C-unwind" fn strand_rt_exec_v1(entry: Option<sr_exec_fn>) {
    let Some(entry) = entry else {
        trap(SR_TRAP_SCHED_NULL_TASK);
    };
    EXECUTING.with(|flag| flag.set(true));
    unsafe { entry(top_level_waker, std::ptr::null_mut()) };
    SCHED.with(|sched| {
        while !sched.is_empty() {
            if !EXECUTING.with(Cell::get) {
                trap(SR_TRAP_EXEC_EARLY_WAKE);
            }
            sched.run_next();
        }
    });
    if EXECUTING.with(Cell::get) {
        trap(SR_TRAP_EXEC_NO_WAKE);
    }
}

// -------------------------
// Output
// -------------------------

#[no_mangle]
pub extern "C-unwind" fn strand_rt_output_bool_v1(value: bool) {
    strand_rt_core::output_bool(&mut HostSink, value);
}

#[no_mangle]
pub extern "C-unwind" fn strand_rt_output_i8_v1(value: i8) {
    strand_rt_core::output_i8(&mut HostSink, value);
}

#[no_mangle]
pub extern "C-unwind" fn strand_rt_output_u8_v1(value: u8) {
    strand_rt_core::output_u8(&mut HostSink, value);
}

#[no_mangle]
pub extern "C-unwind" fn strand_rt_output_i16_v1(value: i16) {
    strand_rt_core::output_i16(&mut HostSink, value);
}

#[no_mangle]
pub extern "C-unwind" fn strand_rt_output_u16_v1(value: u16) {
    strand_rt_core::output_u16(&mut HostSink, value);
}

#[no_mangle]
pub extern "C-unwind" fn strand_rt_output_i32_v1(value: i32) {
    strand_rt_core::output_i32(&mut HostSink, value);
}

#[no_mangle]
pub extern "C-unwind" fn strand_rt_output_u32_v1(value: u32) {
    strand_rt_core::output_u32(&mut HostSink, value);
}

#[no_mangle]
pub extern "C-unwind" fn strand_rt_output_i64_v1(value: i64) {
    strand_rt_core::output_i64(&mut HostSink, value);
}

#[no_mangle]
pub extern "C-unwind" fn strand_rt_output_u64_v1(value: u64) {
    strand_rt_core::output_u64(&mut HostSink, value);
}

#[no_mangle]
pub extern "C-unwind" fn strand_rt_output_str_v1(ptr: *const u8, len: i32) {
    let bytes = unsafe { str_as_slice(ptr, len) };
    strand_rt_core::output_str(&mut HostSink, bytes);
}
