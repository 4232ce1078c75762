use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
    time::Duration,
};

/// Owns a pending timer or a registered listener. Dropping the handle cancels it.
pub struct CancelHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl CancelHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel, e.g. when arming the timer failed.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

pub trait Scheduler {
    /// Runs `task` once after `delay`, unless the returned handle is cancelled or dropped first.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> CancelHandle;
}

struct PendingTask {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct VirtualQueue {
    now: Duration,
    next_id: u64,
    tasks: Vec<PendingTask>,
}

impl VirtualQueue {
    fn pop_due(&mut self, until: Duration) -> Option<PendingTask> {
        let (pos, _) = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))?;
        Some(self.tasks.remove(pos))
    }
}

/// Deterministic scheduler driven by [`VirtualScheduler::advance`] instead of wall-clock time.
/// Clones share the same queue.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    queue: Rc<RefCell<VirtualQueue>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Moves virtual time forward, running every task that comes due, in due order.
    /// Tasks scheduled by running tasks also run if they come due inside the window.
    pub fn advance(&self, by: Duration) {
        let until = self.now() + by;
        loop {
            let next = self.queue.borrow_mut().pop_due(until);
            let Some(PendingTask { due, task, .. }) = next else {
                break;
            };
            self.queue.borrow_mut().now = due;
            task();
        }
        self.queue.borrow_mut().now = until;
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> CancelHandle {
        let id = {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + delay;
            queue.tasks.push(PendingTask { id, due, task });
            id
        };
        let queue: Weak<RefCell<VirtualQueue>> = Rc::downgrade(&self.queue);
        CancelHandle::new(move || {
            if let Some(queue) = queue.upgrade() {
                queue.borrow_mut().tasks.retain(|t| t.id != id);
            }
        })
    }
}

/// Arms real `setTimeout` timers in the browser.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> CancelHandle {
        match leptos::prelude::set_timeout_with_handle(task, delay) {
            Ok(handle) => CancelHandle::new(move || handle.clear()),
            Err(err) => {
                log::error!("couldn't arm timer: {err:?}");
                CancelHandle::noop()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<usize>>, impl Fn() -> Box<dyn FnOnce()>) {
        let count = Rc::new(Cell::new(0));
        let make = {
            let count = count.clone();
            move || {
                let count = count.clone();
                Box::new(move || count.set(count.get() + 1)) as Box<dyn FnOnce()>
            }
        };
        (count, make)
    }

    #[test]
    fn test_task_runs_only_once_due() {
        let scheduler = VirtualScheduler::new();
        let (count, task) = counter();
        let _handle = scheduler.schedule(Duration::from_millis(100), task());

        scheduler.advance(Duration::from_millis(99));
        assert_eq!(count.get(), 0);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), Duration::from_millis(100));

        scheduler.advance(Duration::from_secs(10));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_cancel_and_drop_prevent_execution() {
        let scheduler = VirtualScheduler::new();
        let (count, task) = counter();

        let cancelled = scheduler.schedule(Duration::from_millis(10), task());
        cancelled.cancel();
        {
            let _dropped = scheduler.schedule(Duration::from_millis(10), task());
        }
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(Duration::from_millis(50));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let scheduler = VirtualScheduler::new();
        let (count, task) = counter();
        let handle = scheduler.schedule(Duration::from_millis(5), task());
        let _other = scheduler.schedule(Duration::from_millis(50), task());

        scheduler.advance(Duration::from_millis(5));
        handle.cancel();

        // The second task is untouched by cancelling the first one late
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(Duration::from_millis(45));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_tasks_run_in_due_order_and_can_reschedule() {
        let scheduler = VirtualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let handles = Rc::new(RefCell::new(Vec::new()));

        for (name, delay) in [("late", 30), ("early", 10), ("tie", 30)] {
            let order = order.clone();
            handles.borrow_mut().push(scheduler.schedule(
                Duration::from_millis(delay),
                Box::new(move || order.borrow_mut().push(name)),
            ));
        }
        {
            let order = order.clone();
            let inner = scheduler.clone();
            let handles_inner = handles.clone();
            handles.borrow_mut().push(scheduler.schedule(
                Duration::from_millis(15),
                Box::new(move || {
                    order.borrow_mut().push("chained");
                    let order = order.clone();
                    handles_inner.borrow_mut().push(inner.schedule(
                        Duration::from_millis(5),
                        Box::new(move || order.borrow_mut().push("rescheduled")),
                    ));
                }),
            ));
        }

        scheduler.advance(Duration::from_millis(40));
        assert_eq!(
            *order.borrow(),
            vec!["early", "chained", "rescheduled", "late", "tie"]
        );
    }
}
