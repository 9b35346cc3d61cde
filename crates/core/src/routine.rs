//! Routine module - the author-owned state object a coroutine drives
//!
//! A routine is advanced by an explicit [`Routine::step`] call. Each step
//! reports whether the routine wants to continue next tick, park on a
//! [`Wait`], or has completed.

use crate::wait::Wait;

/// Outcome of one routine step.
#[derive(Debug)]
pub enum Step {
    /// Plain progress marker; step again on the next tick.
    Next,
    /// Park until the wait is satisfied.
    Wait(Wait),
    /// The routine has completed.
    Done,
}

impl Step {
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }
}

impl From<Wait> for Step {
    fn from(wait: Wait) -> Self {
        Step::Wait(wait)
    }
}

/// A resumable body of work advanced one step per tick.
pub trait Routine {
    fn step(&mut self) -> Step;
}

impl<F> Routine for F
where
    F: FnMut() -> Step,
{
    fn step(&mut self) -> Step {
        self()
    }
}
