//! Scheduler configuration.

use log::warn;

/// Environment variable holding the time scale multiplier.
pub const ENV_TIME_SCALE: &str = "FRAME_CORO_TIME_SCALE";

/// Environment variable holding the per-frame delta cap, in seconds.
pub const ENV_MAX_DELTA: &str = "FRAME_CORO_MAX_DELTA";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulerConfig {
    /// Multiplier applied to every elapsed time before it reaches a wait.
    pub time_scale: f32,
    /// Upper bound on the scaled elapsed time of a single frame.
    pub max_delta: Option<f32>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_delta: None,
        }
    }
}

impl SchedulerConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    ///
    /// Missing, unparsable, negative or non-finite values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(scale) = parse_non_negative(ENV_TIME_SCALE, lookup(ENV_TIME_SCALE)) {
            config.time_scale = scale;
        }
        config.max_delta = parse_non_negative(ENV_MAX_DELTA, lookup(ENV_MAX_DELTA));

        config
    }

    /// Scale and clamp a raw elapsed time.
    ///
    /// Negative and NaN results become zero.
    pub fn effective_delta(&self, elapsed: f32) -> f32 {
        let scaled = elapsed * self.time_scale;
        let scaled = if scaled.is_nan() { 0.0 } else { scaled.max(0.0) };
        match self.max_delta {
            Some(max) => scaled.min(max),
            None => scaled,
        }
    }
}

fn parse_non_negative(key: &str, raw: Option<String>) -> Option<f32> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => {
            warn!("ignoring {}={:?}: expected a non-negative number", key, raw);
            None
        }
    }
}
