//! Scheduler module - owns the live coroutines and advances them per tick
//!
//! Coroutines are advanced in insertion order, once per [`Scheduler::update`].
//! A coroutine that reports finished during an update pass is removed in the
//! same pass; one stopped from outside between ticks is removed on the next
//! pass.

use log::debug;

use crate::config::SchedulerConfig;
use crate::coroutine::Coroutine;
use crate::error::{SchedulerError, SchedulerResult};
use crate::routine::Routine;
use crate::snapshot::{CoroutineSnapshot, SchedulerSnapshot};
use crate::types::{CoroutineId, FrameTime, RoutineState};

struct Entry {
    id: CoroutineId,
    label: Option<String>,
    coroutine: Coroutine,
}

pub struct Scheduler {
    config: SchedulerConfig,
    entries: Vec<Entry>,
    next_id: u64,
    frame: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default())
    }

    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            next_id: 1,
            frame: 0,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SchedulerConfig) {
        self.config = config;
    }

    /// Number of update passes run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start a routine, running it up to its first suspension point.
    ///
    /// A routine that completes during start is never tracked; its id is
    /// still issued so callers can treat every start uniformly.
    pub fn start<R>(&mut self, routine: R) -> CoroutineId
    where
        R: Routine + 'static,
    {
        self.insert(None, Coroutine::new(routine))
    }

    pub fn start_labeled<R>(&mut self, label: impl Into<String>, routine: R) -> CoroutineId
    where
        R: Routine + 'static,
    {
        self.insert(Some(label.into()), Coroutine::new(routine))
    }

    fn insert(&mut self, label: Option<String>, coroutine: Coroutine) -> CoroutineId {
        let id = CoroutineId::new(self.next_id);
        self.next_id += 1;

        if coroutine.is_finished() {
            debug!("coroutine {} completed on start", id);
            return id;
        }

        debug!(
            "coroutine {} started{}",
            id,
            label.as_deref().map(|l| format!(" ({})", l)).unwrap_or_default()
        );
        self.entries.push(Entry {
            id,
            label,
            coroutine,
        });
        id
    }

    /// Advance every live coroutine once and drop the finished ones.
    pub fn update(&mut self, elapsed: f32) {
        self.frame = self.frame.wrapping_add(1);
        let frame = FrameTime::new(self.frame, self.config.effective_delta(elapsed));

        self.entries.retain_mut(|entry| {
            let keep = entry.coroutine.update_frame(frame);
            if !keep {
                debug!("coroutine {} finished at frame {}", entry.id, frame.index);
            }
            keep
        });
    }

    pub fn pause(&mut self, id: CoroutineId) -> SchedulerResult<()> {
        self.get_mut(id)?.pause();
        Ok(())
    }

    pub fn resume(&mut self, id: CoroutineId) -> SchedulerResult<()> {
        self.get_mut(id)?.resume();
        Ok(())
    }

    /// Stop a coroutine. It stays visible as finished until the next update.
    pub fn stop(&mut self, id: CoroutineId) -> SchedulerResult<()> {
        self.get_mut(id)?.stop();
        debug!("coroutine {} stopped", id);
        Ok(())
    }

    pub fn pause_all(&mut self) {
        for entry in &mut self.entries {
            entry.coroutine.pause();
        }
    }

    pub fn resume_all(&mut self) {
        for entry in &mut self.entries {
            entry.coroutine.resume();
        }
    }

    /// Stop and drop every coroutine.
    pub fn stop_all(&mut self) {
        for entry in &mut self.entries {
            entry.coroutine.stop();
        }
        debug!("stopped {} coroutines", self.entries.len());
        self.entries.clear();
    }

    pub fn contains(&self, id: CoroutineId) -> bool {
        self.get(id).is_some()
    }

    pub fn state(&self, id: CoroutineId) -> Option<RoutineState> {
        self.get(id).map(Coroutine::state)
    }

    pub fn is_running(&self, id: CoroutineId) -> bool {
        self.get(id).is_some_and(Coroutine::is_running)
    }

    pub fn label(&self, id: CoroutineId) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .and_then(|e| e.label.as_deref())
    }

    /// Ids of the live coroutines, in update order.
    pub fn ids(&self) -> impl Iterator<Item = CoroutineId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn snapshot_into(&self, out: &mut SchedulerSnapshot) {
        out.clear();
        out.frame = self.frame;
        out.coroutines.extend(self.entries.iter().map(|e| CoroutineSnapshot {
            id: e.id,
            label: e.label.clone(),
            state: e.coroutine.state(),
            waiting_on: e.coroutine.waiting_on(),
        }));
    }

    pub fn snapshot(&self) -> SchedulerSnapshot {
        let mut s = SchedulerSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn get(&self, id: CoroutineId) -> Option<&Coroutine> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.coroutine)
    }

    fn get_mut(&mut self, id: CoroutineId) -> SchedulerResult<&mut Coroutine> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.coroutine)
            .ok_or(SchedulerError::UnknownCoroutine(id))
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("config", &self.config)
            .field("live", &self.entries.len())
            .field("next_id", &self.next_id)
            .field("frame", &self.frame)
            .finish()
    }
}
