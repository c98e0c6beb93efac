use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::config;

/// A one-shot timer that is cancelled when dropped.
pub trait Deferred: Sized {
    fn defer(millis: u32, callback: Box<dyn FnOnce()>) -> Self;
}

impl Deferred for Timeout {
    fn defer(millis: u32, callback: Box<dyn FnOnce()>) -> Self {
        Timeout::new(millis, callback)
    }
}

/// Collapses bursts of calls into one. Each `call` replaces the pending one;
/// the last closure runs once `wait` ms pass without another call.
///
/// With `leading`, the first call of a burst runs right away and the rest of
/// the burst is dropped.
///
/// The pending call lives inside the debouncer, so dropping it cancels the
/// call.
pub struct Debouncer<T: Deferred = Timeout> {
    wait: u32,
    immediate: bool,
    waiting: Rc<Cell<bool>>,
    pending: RefCell<Option<T>>,
}

impl<T: Deferred> Debouncer<T> {
    pub fn new(wait: u32) -> Self {
        Self {
            wait,
            immediate: false,
            waiting: Rc::new(Cell::new(false)),
            pending: RefCell::new(None),
        }
    }

    pub fn leading(wait: u32) -> Self {
        Self { immediate: true, ..Self::new(wait) }
    }

    pub fn wait(&self) -> u32 {
        self.wait
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting.get()
    }

    pub fn call<F: FnOnce() + 'static>(&self, f: F) {
        let call_now = self.immediate && !self.waiting.get();
        let (now, later) = if self.immediate { (call_now.then_some(f), None) } else { (None, Some(f)) };

        let waiting = Rc::clone(&self.waiting);
        waiting.set(true);
        let timer = T::defer(
            self.wait,
            Box::new(move || {
                waiting.set(false);
                if let Some(f) = later {
                    f();
                }
            }),
        );
        // Replacing the old timer drops it, which cancels it.
        *self.pending.borrow_mut() = Some(timer);

        if let Some(f) = now {
            f();
        }
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
        self.waiting.set(false);
    }
}

impl Default for Debouncer<Timeout> {
    fn default() -> Self {
        Self::new(config::DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::Deferred;

    struct Scheduled {
        id: u64,
        millis: u32,
        callback: Box<dyn FnOnce()>,
    }

    thread_local! {
        static NEXT_ID: RefCell<u64> = RefCell::new(0);
        static QUEUE: RefCell<VecDeque<Scheduled>> = RefCell::new(VecDeque::new());
    }

    /// Timer that only fires when the test says so.
    pub struct FakeTimer {
        id: u64,
    }

    impl Deferred for FakeTimer {
        fn defer(millis: u32, callback: Box<dyn FnOnce()>) -> Self {
            let id = NEXT_ID.with(|next| {
                let mut next = next.borrow_mut();
                *next += 1;
                *next
            });
            QUEUE.with(|queue| queue.borrow_mut().push_back(Scheduled { id, millis, callback }));
            FakeTimer { id }
        }
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            let id = self.id;
            QUEUE.with(|queue| queue.borrow_mut().retain(|scheduled| scheduled.id != id));
        }
    }

    pub fn scheduled_delays() -> Vec<u32> {
        QUEUE.with(|queue| queue.borrow().iter().map(|s| s.millis).collect())
    }

    /// Runs every live timer. Returns how many fired.
    pub fn fire_all() -> usize {
        let mut fired = 0;
        loop {
            let next = QUEUE.with(|queue| queue.borrow_mut().pop_front());
            match next {
                Some(scheduled) => {
                    (scheduled.callback)();
                    fired += 1;
                }
                None => return fired,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::fake::{fire_all, scheduled_delays, FakeTimer};
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) -> Box<dyn FnOnce()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |n: u32| {
            let sink = Rc::clone(&sink);
            Box::new(move || sink.borrow_mut().push(n)) as Box<dyn FnOnce()>
        };
        (log, make)
    }

    #[test]
    fn test_trailing_edge_runs_only_the_last_call() {
        let (log, make) = recorder();
        let debouncer: Debouncer<FakeTimer> = Debouncer::new(250);

        debouncer.call(make(1));
        debouncer.call(make(2));
        debouncer.call(make(3));

        assert!(log.borrow().is_empty());
        assert_eq!(scheduled_delays(), vec![250]);
        assert_eq!(fire_all(), 1);
        assert_eq!(*log.borrow(), vec![3]);
        assert!(!debouncer.is_waiting());
    }

    #[test]
    fn test_leading_edge_runs_first_call_and_drops_the_rest() {
        let (log, make) = recorder();
        let debouncer: Debouncer<FakeTimer> = Debouncer::leading(16);

        debouncer.call(make(1));
        debouncer.call(make(2));
        assert_eq!(*log.borrow(), vec![1]);
        assert!(debouncer.is_waiting());

        fire_all();
        assert_eq!(*log.borrow(), vec![1]);

        debouncer.call(make(3));
        assert_eq!(*log.borrow(), vec![1, 3]);
        fire_all();
    }

    #[test]
    fn test_dropping_cancels_pending_call() {
        let (log, make) = recorder();
        let debouncer: Debouncer<FakeTimer> = Debouncer::new(250);
        debouncer.call(make(1));
        drop(debouncer);

        assert_eq!(fire_all(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_cancel_clears_waiting_state() {
        let (log, make) = recorder();
        let debouncer: Debouncer<FakeTimer> = Debouncer::new(100);
        debouncer.call(make(1));
        debouncer.cancel();

        assert!(!debouncer.is_waiting());
        assert_eq!(fire_all(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_default_wait() {
        assert_eq!(Debouncer::default().wait(), config::DEFAULT_DEBOUNCE_MS);
    }
}
