//! Trailing-edge throttle for high-frequency DOM events.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Outcome of a call arriving at the throttle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Decision {
    /// The window is open; run the callback now.
    RunNow,
    /// Inside the window; run after `wait_ms` unless a later call supersedes.
    Defer { wait_ms: f64 },
}

/// Pure window bookkeeping. The browser timer plumbing lives in [`Throttle`].
pub(crate) struct ThrottleState {
    delay_ms: f64,
    last_run_ms: f64,
}

impl ThrottleState {
    pub(crate) fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms: delay_ms as f64,
            last_run_ms: f64::NEG_INFINITY,
        }
    }

    /// Decide what to do with a call arriving at `now_ms`.
    pub(crate) fn on_call(&mut self, now_ms: f64) -> Decision {
        let elapsed = now_ms - self.last_run_ms;
        if elapsed >= self.delay_ms {
            self.last_run_ms = now_ms;
            Decision::RunNow
        } else {
            Decision::Defer {
                wait_ms: self.delay_ms - elapsed,
            }
        }
    }

    /// Record a deferred run that fired at `now_ms`.
    pub(crate) fn on_deferred_run(&mut self, now_ms: f64) {
        self.last_run_ms = now_ms;
    }
}

/// Runs the wrapped callback at most once per `delay_ms`, with a trailing run
/// for the last call of a burst. Dropping the throttle cancels any pending
/// trailing run, so the callback never fires after its owner is gone.
pub struct Throttle {
    inner: Rc<Inner>,
}

struct Inner {
    state: RefCell<ThrottleState>,
    pending: RefCell<Option<Timeout>>,
    callback: Box<dyn Fn()>,
}

impl Throttle {
    pub fn new(delay_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(ThrottleState::new(delay_ms)),
                pending: RefCell::new(None),
                callback: Box::new(callback),
            }),
        }
    }

    pub fn call(&self) {
        let decision = self.inner.state.borrow_mut().on_call(js_sys::Date::now());
        match decision {
            Decision::RunNow => {
                // A superseded trailing run is dropped, not fired
                self.inner.pending.borrow_mut().take();
                (self.inner.callback)();
            }
            Decision::Defer { wait_ms } => {
                let weak = Rc::downgrade(&self.inner);
                let timeout = Timeout::new(wait_ms.ceil() as u32, move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.pending.borrow_mut().take();
                        inner
                            .state
                            .borrow_mut()
                            .on_deferred_run(js_sys::Date::now());
                        (inner.callback)();
                    }
                });
                // Replacing the slot cancels the previously scheduled run
                *self.inner.pending.borrow_mut() = Some(timeout);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Decision, ThrottleState};

    #[test]
    fn first_call_runs_immediately() {
        let mut state = ThrottleState::new(16);
        assert_eq!(state.on_call(0.0), Decision::RunNow);
    }

    #[test]
    fn calls_inside_the_window_defer_for_the_remainder() {
        let mut state = ThrottleState::new(16);
        state.on_call(0.0);
        assert_eq!(state.on_call(6.0), Decision::Defer { wait_ms: 10.0 });
    }

    #[test]
    fn burst_collapses_to_one_trailing_run() {
        let mut state = ThrottleState::new(16);
        assert_eq!(state.on_call(0.0), Decision::RunNow);
        let mut last_wait = 0.0;
        for t in [1.0, 2.0, 3.0, 4.0] {
            match state.on_call(t) {
                Decision::Defer { wait_ms } => last_wait = wait_ms,
                other => panic!("expected defer, got {other:?}"),
            }
        }
        // The surviving trailing run lands one full window after the
        // immediate run
        assert_eq!(4.0 + last_wait, 16.0);
        state.on_deferred_run(16.0);
        // The window restarts from the trailing run
        assert_eq!(state.on_call(17.0), Decision::Defer { wait_ms: 15.0 });
    }

    #[test]
    fn spaced_calls_all_run_immediately() {
        let mut state = ThrottleState::new(16);
        for t in [0.0, 20.0, 40.0, 80.0] {
            assert_eq!(state.on_call(t), Decision::RunNow, "call at {t}");
        }
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let mut state = ThrottleState::new(16);
        state.on_call(0.0);
        assert_eq!(state.on_call(16.0), Decision::RunNow);
    }
}
