//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used across the workspace.
//! Nothing here drives a routine; these are the ids, states and timing values
//! that the scheduler, the snapshot layer and the terminal view all agree on.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval used by the demo loop (~60 FPS) |
//! | `TICK_SECONDS` | 0.016 | The same interval in seconds |
//!
//! # Examples
//!
//! ```
//! use frame_coro_types::{CoroutineId, FrameTime, RoutineState, WaitKind};
//!
//! let id = CoroutineId::new(7);
//! assert_eq!(id.get(), 7);
//!
//! let state = RoutineState::from_str("paused").unwrap();
//! assert_eq!(state, RoutineState::Paused);
//! assert!(!state.is_running());
//!
//! assert_eq!(WaitKind::NextFrame.as_str(), "next_frame");
//!
//! let frame = FrameTime::new(3, 0.5);
//! assert_eq!(frame.index, 3);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fixed timestep interval in seconds
pub const TICK_SECONDS: f32 = TICK_MS as f32 / 1000.0;

/// Handle to a coroutine owned by a scheduler.
///
/// Ids are issued in increasing order and never reused by the scheduler that
/// issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoroutineId(u64);

impl CoroutineId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CoroutineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of a coroutine.
///
/// `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineState {
    Running,
    Paused,
    Finished,
}

impl RoutineState {
    /// Parse state from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "running" => Some(RoutineState::Running),
            "paused" => Some(RoutineState::Paused),
            "finished" => Some(RoutineState::Finished),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutineState::Running => "running",
            RoutineState::Paused => "paused",
            RoutineState::Finished => "finished",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, RoutineState::Running)
    }
}

/// Kind of suspension a coroutine is parked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitKind {
    Seconds,
    NextFrame,
    Until,
    While,
}

impl WaitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitKind::Seconds => "seconds",
            WaitKind::NextFrame => "next_frame",
            WaitKind::Until => "until",
            WaitKind::While => "while",
        }
    }
}

/// One tick of the external update loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Monotonic frame counter.
    pub index: u64,
    /// Elapsed time since the previous frame, in seconds.
    pub delta: f32,
}

impl FrameTime {
    pub const fn new(index: u64, delta: f32) -> Self {
        Self { index, delta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routine_state_round_trips_through_str() {
        for state in [
            RoutineState::Running,
            RoutineState::Paused,
            RoutineState::Finished,
        ] {
            assert_eq!(RoutineState::from_str(state.as_str()), Some(state));
        }
        assert_eq!(RoutineState::from_str("RUNNING"), Some(RoutineState::Running));
        assert_eq!(RoutineState::from_str("sleeping"), None);
    }

    #[test]
    fn only_running_state_is_running() {
        assert!(RoutineState::Running.is_running());
        assert!(!RoutineState::Paused.is_running());
        assert!(!RoutineState::Finished.is_running());
    }

    #[test]
    fn coroutine_id_display() {
        assert_eq!(CoroutineId::new(42).to_string(), "#42");
    }

    #[test]
    fn tick_seconds_matches_tick_ms() {
        assert!((TICK_SECONDS - 0.016).abs() < f32::EPSILON);
    }
}
