//! Demo routines and command-line parsing for the `frame-coro` binary.
//!
//! The demo world is three shared counters poked by three routines:
//!
//! - `countdown`: ticks a counter down once per second, then completes
//! - `blinker`: toggles a flag every quarter second until stopped
//! - `spawner`: waits for the countdown, then spawns on a timed schedule,
//!   holding its last spawn until the blinker stops

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{anyhow, Result};

use crate::core::{Routine, Scheduler, Script, Step, Wait};
use crate::types::{CoroutineId, TICK_MS};

pub const DEFAULT_HEADLESS_FRAMES: u64 = 300;
pub const COUNTDOWN_FROM: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoArgs {
    pub headless: bool,
    /// Frames to run before exiting. `None` runs until quit.
    pub frames: Option<u64>,
    pub tick_ms: u32,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            headless: false,
            frames: None,
            tick_ms: TICK_MS,
        }
    }
}

impl DemoArgs {
    pub fn tick_seconds(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }

    /// Frame budget for this run; headless runs always terminate.
    pub fn frame_limit(&self) -> Option<u64> {
        match (self.frames, self.headless) {
            (Some(n), _) => Some(n),
            (None, true) => Some(DEFAULT_HEADLESS_FRAMES),
            (None, false) => None,
        }
    }
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<DemoArgs> {
    let mut parsed = DemoArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--headless" => parsed.headless = true,
            "--frames" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --frames"))?;
                parsed.frames = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --frames value: {}", v))?,
                );
            }
            "--tick-ms" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --tick-ms"))?;
                let tick_ms = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --tick-ms value: {}", v))?;
                if tick_ms == 0 {
                    return Err(anyhow!("--tick-ms must be greater than zero"));
                }
                parsed.tick_ms = tick_ms;
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(parsed)
}

/// Shared state the demo routines read and write.
#[derive(Debug, Clone, Default)]
pub struct DemoWorld {
    pub countdown: Rc<Cell<u32>>,
    pub blink_on: Rc<Cell<bool>>,
    pub blinks: Rc<Cell<u32>>,
    pub spawned: Rc<Cell<u32>>,
}

impl DemoWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_line(&self) -> String {
        format!(
            "countdown {}  blink {}  spawned {}",
            self.countdown.get(),
            if self.blink_on.get() { "on" } else { "off" },
            self.spawned.get()
        )
    }
}

/// Counts `world.countdown` down to zero, one step per second.
pub struct Countdown {
    world: DemoWorld,
    waited: bool,
}

impl Countdown {
    pub fn new(world: DemoWorld, from: u32) -> Self {
        world.countdown.set(from);
        Self {
            world,
            waited: false,
        }
    }
}

impl Routine for Countdown {
    fn step(&mut self) -> Step {
        let mut left = self.world.countdown.get();
        if self.waited && left > 0 {
            left -= 1;
            self.world.countdown.set(left);
        }
        if left == 0 {
            return Step::Done;
        }
        self.waited = true;
        Step::Wait(Wait::seconds(1.0))
    }
}

pub fn blinker(world: DemoWorld) -> impl FnMut() -> Step {
    move || {
        world.blink_on.set(!world.blink_on.get());
        world.blinks.set(world.blinks.get() + 1);
        Step::Wait(Wait::seconds(0.25))
    }
}

pub fn spawner(world: DemoWorld) -> Script {
    let countdown = world.countdown.clone();
    let blink_on = world.blink_on.clone();
    let spawn = |spawned: Rc<Cell<u32>>| move || spawned.set(spawned.get() + 1);

    Script::new()
        .wait_until(move || countdown.get() == 0)
        .then(spawn(world.spawned.clone()))
        .wait_seconds(0.5)
        .then(spawn(world.spawned.clone()))
        .next_frame()
        .then(spawn(world.spawned.clone()))
        .wait_while(move || blink_on.get())
        .then(spawn(world.spawned.clone()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoHandles {
    pub countdown: CoroutineId,
    pub blinker: CoroutineId,
    pub spawner: CoroutineId,
}

/// Start the three demo routines on `scheduler`.
pub fn start_demo(scheduler: &mut Scheduler, world: &DemoWorld) -> DemoHandles {
    DemoHandles {
        countdown: scheduler.start_labeled(
            "countdown",
            Countdown::new(world.clone(), COUNTDOWN_FROM),
        ),
        blinker: scheduler.start_labeled("blinker", blinker(world.clone())),
        spawner: scheduler.start_labeled("spawner", spawner(world.clone())),
    }
}
