use serde::{Deserialize, Serialize};

use crate::types::{CoroutineId, RoutineState, WaitKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoroutineSnapshot {
    pub id: CoroutineId,
    pub label: Option<String>,
    pub state: RoutineState,
    pub waiting_on: Option<WaitKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerSnapshot {
    pub frame: u64,
    pub coroutines: Vec<CoroutineSnapshot>,
}

impl SchedulerSnapshot {
    /// Reset to an empty snapshot, keeping the row allocation.
    pub fn clear(&mut self) {
        self.frame = 0;
        self.coroutines.clear();
    }

    pub fn count(&self, state: RoutineState) -> usize {
        self.coroutines.iter().filter(|c| c.state == state).count()
    }

    pub fn get(&self, id: CoroutineId) -> Option<&CoroutineSnapshot> {
        self.coroutines.iter().find(|c| c.id == id)
    }
}
