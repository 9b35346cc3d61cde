//! Error types for scheduler handle operations.

use thiserror::Error;

use crate::types::CoroutineId;

/// Result alias for scheduler operations addressed by handle.
pub type SchedulerResult<T> = Result<T, SchedulerError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// The id was never issued by this scheduler, or its coroutine has
    /// already been removed from the live set.
    #[error("unknown coroutine {0}")]
    UnknownCoroutine(CoroutineId),
}

impl SchedulerError {
    pub fn code(self) -> &'static str {
        match self {
            SchedulerError::UnknownCoroutine(_) => "unknown_coroutine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_coroutine_message_names_the_id() {
        let err = SchedulerError::UnknownCoroutine(CoroutineId::new(9));
        assert_eq!(err.to_string(), "unknown coroutine #9");
        assert_eq!(err.code(), "unknown_coroutine");
    }
}
