use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use super::{Typewriter, TypewriterPhase, TypewriterState};
use crate::schedule::{CancelHandle, Scheduler};

type Observer = Box<dyn Fn(&TypewriterState)>;

struct Inner {
    machine: RefCell<Typewriter>,
    scheduler: Rc<dyn Scheduler>,
    observer: Observer,
    pending: RefCell<Option<CancelHandle>>,
    running: Cell<bool>,
}

/// Drives a [`Typewriter`] from a [`Scheduler`], notifying an observer after every tick.
///
/// Holds at most one pending timer. Stopping or dropping the loop cancels it.
pub struct TypewriterLoop {
    inner: Rc<Inner>,
}

impl TypewriterLoop {
    pub fn new(
        machine: Typewriter,
        scheduler: Rc<dyn Scheduler>,
        observer: impl Fn(&TypewriterState) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                machine: RefCell::new(machine),
                scheduler,
                observer: Box::new(observer),
                pending: RefCell::new(None),
                running: Cell::new(false),
            }),
        }
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        let (state, delay) = {
            let machine = self.inner.machine.borrow();
            (machine.state().clone(), machine.next_delay())
        };
        (self.inner.observer)(&state);
        // the observer may have stopped the loop
        if self.inner.running.get() {
            arm(&self.inner, delay);
        }
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(pending) = self.inner.pending.borrow_mut().take() {
            pending.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    pub fn state(&self) -> TypewriterState {
        self.inner.machine.borrow().state().clone()
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.inner.machine.borrow().phase()
    }
}

impl Drop for TypewriterLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn arm(inner: &Rc<Inner>, delay: Duration) {
    if let Some(previous) = inner.pending.borrow_mut().take() {
        previous.cancel();
    }
    let weak = Rc::downgrade(inner);
    let handle = inner.scheduler.schedule(
        delay,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                fire(&inner);
            }
        }),
    );
    *inner.pending.borrow_mut() = Some(handle);
}

fn fire(inner: &Rc<Inner>) {
    if !inner.running.get() {
        return;
    }
    let (state, delay) = {
        let mut machine = inner.machine.borrow_mut();
        let delay = machine.tick();
        (machine.state().clone(), delay)
    };
    (inner.observer)(&state);
    if inner.running.get() {
        arm(inner, delay);
    }
}
