//! Script module - build linear routines from actions and waits
//!
//! Most gameplay routines are straight-line sequences ("flash, wait half a
//! second, spawn, wait until the wave is cleared"). [`Script`] queues those
//! operations so routine authors do not hand-write a state machine for them.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use frame_coro_core::{Scheduler, Script};
//!
//! let hits = Rc::new(Cell::new(0));
//! let h = hits.clone();
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.start(
//!     Script::new()
//!         .wait_seconds(0.5)
//!         .then(move || h.set(h.get() + 1)),
//! );
//!
//! scheduler.update(0.25);
//! assert_eq!(hits.get(), 0);
//! scheduler.update(0.25);
//! assert_eq!(hits.get(), 1);
//! assert!(scheduler.is_empty());
//! ```

use std::collections::VecDeque;

use crate::routine::{Routine, Step};
use crate::wait::Wait;

enum Op {
    Run(Box<dyn FnOnce()>),
    Wait(Wait),
    Yield,
}

/// A queue of actions and waits, consumed front to back.
#[derive(Default)]
pub struct Script {
    ops: VecDeque<Op>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run an action. Consecutive actions run in the same step.
    pub fn then<F>(mut self, action: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.ops.push_back(Op::Run(Box::new(action)));
        self
    }

    /// Park on an arbitrary wait.
    pub fn wait(mut self, wait: Wait) -> Self {
        self.ops.push_back(Op::Wait(wait));
        self
    }

    pub fn wait_seconds(self, seconds: f32) -> Self {
        self.wait(Wait::seconds(seconds))
    }

    pub fn next_frame(self) -> Self {
        self.wait(Wait::next_frame())
    }

    pub fn wait_until<F>(self, predicate: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        self.wait(Wait::until(predicate))
    }

    pub fn wait_while<F>(self, predicate: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        self.wait(Wait::while_(predicate))
    }

    /// Give up the rest of the tick; the script continues on the next one.
    pub fn yield_frame(mut self) -> Self {
        self.ops.push_back(Op::Yield);
        self
    }

    /// Remaining queued operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Routine for Script {
    fn step(&mut self) -> Step {
        while let Some(op) = self.ops.pop_front() {
            match op {
                Op::Run(action) => action(),
                Op::Wait(wait) => return Step::Wait(wait),
                Op::Yield => return Step::Next,
            }
        }
        Step::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn actions_run_until_first_wait() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (log.clone(), log.clone(), log.clone());
        let mut script = Script::new()
            .then(move || a.borrow_mut().push("a"))
            .then(move || b.borrow_mut().push("b"))
            .next_frame()
            .then(move || c.borrow_mut().push("c"));

        assert!(matches!(script.step(), Step::Wait(Wait::NextFrame { .. })));
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert!(script.step().is_done());
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn yield_frame_returns_next() {
        let mut script = Script::new().yield_frame();
        assert_eq!(script.len(), 1);
        assert!(matches!(script.step(), Step::Next));
        assert!(script.is_empty());
        assert!(script.step().is_done());
    }

    #[test]
    fn empty_script_is_done() {
        let mut script = Script::new();
        assert!(script.step().is_done());
    }
}
