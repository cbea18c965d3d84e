#![no_main]

use std::cell::RefCell;
use std::rc::Rc;

use libfuzzer_sys::fuzz_target;
use strand_rt_core::Scheduler;

// Random enqueue/run_next interleavings must preserve the count invariant
// and strict FIFO order.
fuzz_target!(|data: &[u8]| {
    let data = if data.len() > 4096 { &data[..4096] } else { data };

    let sched = Scheduler::new();
    let log: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));

    let mut enqueued: u32 = 0;
    let mut pending: usize = 0;

    for &op in data {
        if op % 4 != 3 {
            let seq = enqueued;
            enqueued += 1;
            pending += 1;
            let log = log.clone();
            sched.enqueue(move || log.borrow_mut().push(seq));
        } else if sched.run_next() {
            pending -= 1;
        }
        assert_eq!(sched.len(), pending);
    }

    sched.drain_all();
    assert!(sched.is_empty());

    let log = log.borrow();
    assert_eq!(log.len() as u32, enqueued);
    assert!(log.windows(2).all(|w| w[0] < w[1]));
});
