use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

type Task = Box<dyn FnOnce() + 'static>;

/// FIFO queue of deferred tasks, drained by a trampoline loop.
///
/// A task is a single-shot closure, bound to its data when enqueued and
/// invoked with no arguments when its turn comes. Cloning a `Scheduler`
/// is cheap and yields another handle to the same queue, so a task may
/// capture a handle and enqueue continuations while a drain is in
/// progress; [`Scheduler::drain_all`] visits those before it returns.
///
/// Handles are not `Send`: one logical thread of control owns a queue
/// for its whole life. Tasks still pending when the last handle drops
/// are released without being run.
#[derive(Clone, Default)]
pub struct Scheduler {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    tasks: RefCell<VecDeque<Task>>,
    draining: Cell<bool>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one deferred task at the tail of the queue.
    ///
    /// Callable from inside a running task; the internal borrow is held
    /// only for the push itself.
    pub fn enqueue(&self, f: impl FnOnce() + 'static) {
        self.inner.tasks.borrow_mut().push_back(Box::new(f));
    }

    /// Dequeues and invokes the oldest pending task. Returns `false` if
    /// the queue was empty at the moment of the check.
    ///
    /// The task is removed and the queue released before the invocation,
    /// so the task may enqueue without re-entering the borrow.
    pub fn run_next(&self) -> bool {
        match self.dequeue() {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Runs pending tasks in arrival order until the queue is empty at
    /// the moment of the check.
    ///
    /// Tasks enqueued mid-drain run in the same drain: a task enqueued
    /// during execution of task N runs after everything already queued
    /// ahead of it and before anything enqueued after it. Termination is
    /// the caller's responsibility; a task that unconditionally
    /// re-enqueues itself keeps the loop running forever.
    ///
    /// Calling `drain_all` from inside a task on the same queue is
    /// unsupported; debug builds assert.
    pub fn drain_all(&self) {
        debug_assert!(
            !self.inner.draining.get(),
            "drain_all re-entered from a running task"
        );
        self.inner.draining.set(true);
        while self.run_next() {}
        self.inner.draining.set(false);
    }

    pub fn len(&self) -> usize {
        self.inner.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.tasks.borrow().is_empty()
    }

    fn dequeue(&self) -> Option<Task> {
        self.inner.tasks.borrow_mut().pop_front()
    }
}
