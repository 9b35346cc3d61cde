//! Wait module - suspension conditions a routine can park on
//!
//! A [`Wait`] answers one question per tick: "is this condition satisfied,
//! given the time elapsed since the last check?". The coroutine driving a
//! routine never needs to know which kind of wait it holds.

use std::fmt;
use std::time::Duration;

use crate::types::WaitKind;

/// Predicate polled by [`Wait::Until`] and [`Wait::While`].
pub type Predicate = Box<dyn FnMut() -> bool>;

/// Relative slack when comparing accumulated time against a duration.
///
/// Per-frame deltas such as `1.0 / 60.0` are not exact in binary; without the
/// slack a wait can land a hair short of its duration and cost an extra frame.
const SECONDS_TOLERANCE: f64 = 1e-6;

/// Suspension condition yielded by a routine step.
pub enum Wait {
    /// Satisfied once the accumulated elapsed time reaches the duration.
    Seconds { duration: f64, elapsed: f64 },
    /// Satisfied on the second check, never the first.
    NextFrame { checked: bool },
    /// Satisfied when the predicate returns true.
    Until(Predicate),
    /// Satisfied when the predicate returns false.
    While(Predicate),
}

impl Wait {
    /// Timed wait. Negative and NaN durations are clamped to zero.
    pub fn seconds(seconds: f32) -> Self {
        // `max` returns the non-NaN operand.
        Wait::Seconds {
            duration: f64::from(seconds.max(0.0)),
            elapsed: 0.0,
        }
    }

    pub fn duration(duration: Duration) -> Self {
        Wait::seconds(duration.as_secs_f32())
    }

    pub fn next_frame() -> Self {
        Wait::NextFrame { checked: false }
    }

    pub fn until<F>(predicate: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        Wait::Until(Box::new(predicate))
    }

    pub fn while_<F>(predicate: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        Wait::While(Box::new(predicate))
    }

    pub fn kind(&self) -> WaitKind {
        match self {
            Wait::Seconds { .. } => WaitKind::Seconds,
            Wait::NextFrame { .. } => WaitKind::NextFrame,
            Wait::Until(_) => WaitKind::Until,
            Wait::While(_) => WaitKind::While,
        }
    }

    /// Check the condition against the time elapsed since the last check.
    ///
    /// Every call counts as a check: a timed wait consumes `elapsed` from its
    /// budget and a next-frame wait flips to satisfied. Predicates are
    /// re-evaluated on every call with no memoization.
    ///
    /// Negative and non-finite `elapsed` values count as zero.
    pub fn is_done(&mut self, elapsed: f32) -> bool {
        let delta = if elapsed.is_finite() && elapsed > 0.0 {
            f64::from(elapsed)
        } else {
            0.0
        };

        match self {
            Wait::Seconds { duration, elapsed } => {
                *elapsed += delta;
                *elapsed + *duration * SECONDS_TOLERANCE >= *duration
            }
            Wait::NextFrame { checked } => {
                if *checked {
                    true
                } else {
                    *checked = true;
                    false
                }
            }
            Wait::Until(predicate) => predicate(),
            Wait::While(predicate) => !predicate(),
        }
    }
}

impl fmt::Debug for Wait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wait::Seconds { duration, elapsed } => f
                .debug_struct("Seconds")
                .field("duration", duration)
                .field("elapsed", elapsed)
                .finish(),
            Wait::NextFrame { checked } => f
                .debug_struct("NextFrame")
                .field("checked", checked)
                .finish(),
            Wait::Until(_) => f.write_str("Until(..)"),
            Wait::While(_) => f.write_str("While(..)"),
        }
    }
}
