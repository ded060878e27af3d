// Game timing constants and storage keys.

/// Full length of a round.
pub const INITIAL_COUNTDOWN_MS: u32 = 15_000;
/// Tick cadence of the countdown.
pub const COUNTDOWN_INTERVAL_MS: u32 = 1_000;
/// How long the game-over toast stays up (long toast).
pub const TOAST_DURATION_MS: u32 = 3_500;

/// sessionStorage key holding the teardown snapshot.
pub const SNAPSHOT_KEY: &str = "tf_snapshot";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub initial_countdown_ms: u32,
    pub countdown_interval_ms: u32,
}

impl GameConfig {
    /// Seconds shown on the label for a fresh round.
    pub fn initial_time_left_secs(&self) -> u32 {
        self.initial_countdown_ms / 1000
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_countdown_ms: INITIAL_COUNTDOWN_MS,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,
        }
    }
}
