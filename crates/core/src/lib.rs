//! Core coroutine module - frame-driven, deterministic, and testable
//!
//! This crate contains the cooperative coroutine machinery a game loop drives
//! once per frame. It has no dependency on rendering, input or timing sources:
//! callers pass the elapsed frame time in explicitly, which keeps every
//! routine reproducible under test.
//!
//! # Module Structure
//!
//! - [`wait`]: suspension conditions (timed, next frame, until, while)
//! - [`routine`]: the [`Routine`] trait and the [`Step`] a routine reports
//! - [`coroutine`]: drives one routine, honouring its current wait
//! - [`scheduler`]: owns live coroutines and advances them every tick
//! - [`script`]: builder for linear routines made of actions and waits
//! - [`snapshot`]: serializable view of scheduler state
//! - [`config`]: time scale and delta clamping
//!
//! # Example
//!
//! ```
//! use frame_coro_core::{Scheduler, Step, Wait};
//!
//! let mut scheduler = Scheduler::new();
//!
//! let mut waited = false;
//! let id = scheduler.start(move || {
//!     if waited {
//!         Step::Done
//!     } else {
//!         waited = true;
//!         Step::Wait(Wait::seconds(2.0))
//!     }
//! });
//!
//! for _ in 0..3 {
//!     scheduler.update(0.5);
//!     assert!(scheduler.is_running(id));
//! }
//! scheduler.update(0.5);
//! assert!(!scheduler.contains(id));
//! ```
//!
//! # Timing
//!
//! Starting a routine runs it up to its first suspension point. After that,
//! each [`Scheduler::update`] evaluates the current wait once and steps the
//! routine only when the wait is satisfied.

pub mod config;
pub mod coroutine;
pub mod error;
pub mod routine;
pub mod scheduler;
pub mod script;
pub mod snapshot;
pub mod wait;

pub use frame_coro_types as types;

// Re-export commonly used types for convenience
pub use config::SchedulerConfig;
pub use coroutine::Coroutine;
pub use error::{SchedulerError, SchedulerResult};
pub use routine::{Routine, Step};
pub use scheduler::Scheduler;
pub use script::Script;
pub use snapshot::{CoroutineSnapshot, SchedulerSnapshot};
pub use wait::{Predicate, Wait};
