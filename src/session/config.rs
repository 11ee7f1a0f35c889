//! Session configuration owned by the driving loop.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_MAX_TURNS;

/// Knobs for one game session.
///
/// The rule engine itself has no configuration; these values belong to
/// the driving loop — how long a game may run, how long an agent may
/// think, and how long the presentation layer should hold a frame.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Total moves before the game is forced to a score comparison.
    pub max_turns: u32,

    /// Deadline for one agent response. Checked after the blocking call
    /// returns; an over-deadline answer is discarded and the agent is
    /// deactivated with no partial move applied.
    pub move_deadline: Duration,

    /// Hint for how long the presentation layer holds one frame.
    /// The engine never reads it.
    pub frame_duration: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            move_deadline: Duration::from_millis(100),
            frame_duration: Duration::from_millis(2000),
        }
    }
}

impl SessionConfig {
    /// Override the turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Override the agent response deadline.
    #[must_use]
    pub fn with_move_deadline(mut self, deadline: Duration) -> Self {
        self.move_deadline = deadline;
        self
    }

    /// Override the frame duration hint.
    #[must_use]
    pub fn with_frame_duration(mut self, frame: Duration) -> Self {
        self.frame_duration = frame;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.max_turns, 100);
        assert_eq!(config.move_deadline, Duration::from_millis(100));
        assert_eq!(config.frame_duration, Duration::from_millis(2000));
    }

    #[test]
    fn test_builders() {
        let config = SessionConfig::default()
            .with_max_turns(10)
            .with_move_deadline(Duration::from_secs(1));
        assert_eq!(config.max_turns, 10);
        assert_eq!(config.move_deadline, Duration::from_secs(1));
    }
}
