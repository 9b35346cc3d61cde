//! Coroutine module - drives one routine forward one step per tick
//!
//! A [`Coroutine`] owns a routine and the [`Wait`] it last yielded. Each call
//! to [`Coroutine::update`] either leaves the routine parked (the wait is not
//! yet satisfied) or steps it exactly once.
//!
//! # Lifecycle
//!
//! ```text
//!            pause()            stop() / Step::Done
//! Running  ---------->  Paused  ------------------->  Finished
//!          <----------
//!            resume()
//! ```
//!
//! `Finished` is terminal; `resume()` does not revive a finished coroutine.

use log::{debug, trace};

use crate::routine::{Routine, Step};
use crate::types::{FrameTime, RoutineState, WaitKind};
use crate::wait::Wait;

pub struct Coroutine {
    routine: Box<dyn Routine>,
    /// Wait yielded by the most recent step, if any.
    current: Option<Wait>,
    finished: bool,
    paused: bool,
    /// Index of the last frame this coroutine was advanced on.
    last_frame: Option<u64>,
}

impl Coroutine {
    /// Wrap a routine and run it up to its first suspension point.
    ///
    /// A routine that completes on its first step yields an already finished
    /// coroutine.
    pub fn new<R>(routine: R) -> Self
    where
        R: Routine + 'static,
    {
        Self::from_boxed(Box::new(routine))
    }

    pub fn from_boxed(routine: Box<dyn Routine>) -> Self {
        let mut coroutine = Self {
            routine,
            current: None,
            finished: false,
            paused: false,
            last_frame: None,
        };
        coroutine.advance();
        coroutine
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        !self.finished && !self.paused
    }

    pub fn state(&self) -> RoutineState {
        if self.finished {
            RoutineState::Finished
        } else if self.paused {
            RoutineState::Paused
        } else {
            RoutineState::Running
        }
    }

    /// Kind of wait the coroutine is parked on.
    pub fn waiting_on(&self) -> Option<WaitKind> {
        if self.finished {
            return None;
        }
        self.current.as_ref().map(Wait::kind)
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Finish immediately, whatever the routine is waiting on.
    ///
    /// The routine is not stepped again; no cleanup hook runs.
    pub fn stop(&mut self) {
        self.finished = true;
        self.current = None;
    }

    /// Advance by at most one step.
    ///
    /// Returns whether the owner should keep tracking this coroutine, i.e.
    /// `false` once it has finished. Each call counts as a new frame; call it
    /// exactly once per tick.
    pub fn update(&mut self, elapsed: f32) -> bool {
        let index = self.last_frame.map_or(0, |f| f.wrapping_add(1));
        self.update_frame(FrameTime::new(index, elapsed))
    }

    /// Advance by at most one step for the given frame.
    ///
    /// A repeated call for the frame index that was last processed is a
    /// no-op, so the current wait is evaluated at most once per frame.
    pub fn update_frame(&mut self, frame: FrameTime) -> bool {
        if self.finished || self.paused {
            return !self.finished;
        }

        if self.last_frame == Some(frame.index) {
            return true;
        }
        self.last_frame = Some(frame.index);

        if let Some(wait) = self.current.as_mut() {
            if !wait.is_done(frame.delta) {
                return true;
            }
        }

        self.advance();
        !self.finished
    }

    fn advance(&mut self) {
        match self.routine.step() {
            Step::Next => {
                trace!("routine yielded");
                self.current = None;
            }
            Step::Wait(wait) => {
                trace!("routine parked on {}", wait.kind().as_str());
                self.current = Some(wait);
            }
            Step::Done => {
                debug!("routine completed");
                self.current = None;
                self.finished = true;
            }
        }
    }
}

impl std::fmt::Debug for Coroutine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coroutine")
            .field("current", &self.current)
            .field("finished", &self.finished)
            .field("paused", &self.paused)
            .field("last_frame", &self.last_frame)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Routine that counts its steps and completes after `len` of them.
    fn counting(len: u32, steps: Rc<Cell<u32>>) -> impl FnMut() -> Step {
        move || {
            steps.set(steps.get() + 1);
            if steps.get() > len {
                Step::Done
            } else {
                Step::Next
            }
        }
    }

    #[test]
    fn new_runs_to_first_suspension() {
        let steps = Rc::new(Cell::new(0));
        let co = Coroutine::new(counting(3, steps.clone()));
        assert_eq!(steps.get(), 1);
        assert!(co.is_running());
        assert_eq!(co.state(), RoutineState::Running);
    }

    #[test]
    fn routine_that_completes_immediately_is_finished() {
        let mut co = Coroutine::new(|| Step::Done);
        assert!(co.is_finished());
        assert!(!co.update(0.016));
    }

    #[test]
    fn plain_yields_step_once_per_update() {
        let steps = Rc::new(Cell::new(0));
        let mut co = Coroutine::new(counting(2, steps.clone()));
        assert!(co.update(0.016));
        assert_eq!(steps.get(), 2);
        assert!(!co.update(0.016));
        assert_eq!(steps.get(), 3);
        assert!(co.is_finished());
    }

    #[test]
    fn repeated_frame_index_is_ignored() {
        let mut yielded = false;
        let mut co = Coroutine::new(move || {
            if yielded {
                Step::Done
            } else {
                yielded = true;
                Step::Wait(Wait::seconds(1.0))
            }
        });

        let frame = FrameTime::new(0, 0.75);
        assert!(co.update_frame(frame));
        assert!(co.update_frame(frame));
        assert!(co.update_frame(frame));
        assert!(!co.is_finished());

        assert!(!co.update_frame(FrameTime::new(1, 0.75)));
    }

    #[test]
    fn waiting_on_tracks_current_wait() {
        let mut parked = false;
        let mut co = Coroutine::new(move || {
            if parked {
                Step::Done
            } else {
                parked = true;
                Step::Wait(Wait::next_frame())
            }
        });
        assert_eq!(co.waiting_on(), Some(WaitKind::NextFrame));
        co.stop();
        assert_eq!(co.waiting_on(), None);
    }

    #[test]
    fn stop_is_idempotent() {
        let steps = Rc::new(Cell::new(0));
        let mut co = Coroutine::new(counting(10, steps.clone()));
        co.stop();
        co.stop();
        assert!(co.is_finished());
        assert!(!co.update(0.016));
        assert_eq!(steps.get(), 1);
    }
}
