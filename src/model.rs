//! Core game state for Time Fighter.
//! `GameState` owns the score, the remaining time and the plan for the
//! countdown; the view layer turns the plan into a live timer.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::{Callback, Reducible};

use crate::config::GameConfig;

/// The two integers kept across a page teardown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u32,
    pub time_left: u32,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Countdown armed, waiting for the first tap.
    Fresh,
    /// Started by a tap.
    Running,
    /// Rebuilt from a snapshot; countdown started without a tap.
    Restored,
}

/// What the view should do with the countdown. A new `generation` means the
/// previous timer is discarded and a new one built from `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownPlan {
    pub generation: u32,
    pub duration_ms: u32,
    pub running: bool,
}

/// Shown once a round ends. `round` distinguishes consecutive games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub final_score: u32,
    pub round: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub config: GameConfig,
    pub score: u32,
    pub time_left_secs: u32,
    pub started: bool,
    pub phase: Phase,
    pub countdown: CountdownPlan,
    /// Last finished game, until its toast is dismissed.
    pub game_over: Option<GameOver>,
    rounds_finished: u32,
}

impl GameState {
    /// Fresh or restored state depending on whether a snapshot survived teardown.
    pub fn initialize(config: GameConfig, saved: Option<Snapshot>) -> Self {
        let mut state = Self {
            config,
            score: 0,
            time_left_secs: config.initial_time_left_secs(),
            started: false,
            phase: Phase::Fresh,
            countdown: CountdownPlan {
                generation: 0,
                duration_ms: config.initial_countdown_ms,
                running: false,
            },
            game_over: None,
            rounds_finished: 0,
        };
        match saved {
            Some(snapshot) => state.restore(snapshot),
            None => state.reset(),
        }
        state
    }

    pub fn on_tap(&mut self) {
        if !self.started {
            self.start();
        } else if !self.countdown.running {
            self.resume(None);
        }
        self.score = self.score.saturating_add(1);
    }

    pub fn on_tick(&mut self, remaining_ms: u32) {
        self.time_left_secs = remaining_ms / 1000;
    }

    /// Ends the round and loops back to a fresh one.
    pub fn on_finish(&mut self) -> GameOver {
        self.rounds_finished = self.rounds_finished.wrapping_add(1);
        let over = GameOver {
            final_score: self.score,
            round: self.rounds_finished,
        };
        log::info!("Game over, final score {}", over.final_score);
        self.game_over = Some(over);
        self.reset();
        over
    }

    /// Snapshot for the persistence boundary. The countdown stops here; a page
    /// being torn down must not see another tick.
    pub fn capture_state(&mut self) -> Snapshot {
        self.countdown.running = false;
        let snapshot = self.snapshot();
        log::debug!(
            "Saving score {} & time left {}",
            snapshot.score,
            snapshot.time_left
        );
        snapshot
    }

    /// Brings a suspended game back. A snapshot from storage wins; without one
    /// the game continues from its own values. A game that is not suspended
    /// only changes when a snapshot is given.
    pub fn resume(&mut self, saved: Option<Snapshot>) {
        match saved {
            Some(snapshot) => self.restore(snapshot),
            None if self.started && !self.countdown.running => self.restore(self.snapshot()),
            None => {}
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            time_left: self.time_left_secs,
        }
    }

    fn reset(&mut self) {
        self.score = 0;
        self.time_left_secs = self.config.initial_time_left_secs();
        self.started = false;
        self.phase = Phase::Fresh;
        self.replace_countdown(self.config.initial_countdown_ms, false);
    }

    fn restore(&mut self, snapshot: Snapshot) {
        log::debug!(
            "Restoring score {} & time left {}",
            snapshot.score,
            snapshot.time_left
        );
        // Stored values are editable by the page's user.
        let time_left = snapshot.time_left.min(self.config.initial_time_left_secs());
        self.score = snapshot.score;
        self.time_left_secs = time_left;
        self.started = true;
        self.phase = Phase::Restored;
        self.replace_countdown(time_left.saturating_mul(1000), true);
    }

    fn start(&mut self) {
        self.started = true;
        self.phase = Phase::Running;
        self.countdown.running = true;
    }

    fn replace_countdown(&mut self, duration_ms: u32, running: bool) {
        self.countdown = CountdownPlan {
            generation: self.countdown.generation.wrapping_add(1),
            duration_ms,
            running,
        };
    }
}

pub enum GameAction {
    Tap,
    Tick { remaining_ms: u32 },
    Finish,
    /// Page hidden: stop the countdown, keep the values and hand the snapshot
    /// to `save`.
    Suspend { save: Callback<Snapshot> },
    /// Page shown again from the back/forward cache, with the stored snapshot
    /// if one could be read.
    Resume { saved: Option<Snapshot> },
    DismissGameOver { round: u32 },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Tap => new.on_tap(),
            Tick { remaining_ms } => {
                // Late tick from a timer that was already stopped.
                if !new.countdown.running {
                    return self;
                }
                new.on_tick(remaining_ms);
            }
            Finish => {
                if !new.countdown.running {
                    return self;
                }
                new.on_finish();
            }
            Suspend { save } => {
                let snapshot = new.capture_state();
                save.emit(snapshot);
            }
            Resume { saved } => {
                let plan = new.countdown;
                new.resume(saved);
                if new.countdown == plan {
                    return self;
                }
            }
            DismissGameOver { round } => match new.game_over {
                Some(over) if over.round == round => new.game_over = None,
                _ => return self,
            },
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> GameState {
        GameState::initialize(GameConfig::default(), None)
    }

    fn restored(score: u32, time_left: u32) -> GameState {
        GameState::initialize(GameConfig::default(), Some(Snapshot { score, time_left }))
    }

    fn suspend(state: Rc<GameState>) -> (Rc<GameState>, Option<Snapshot>) {
        let saved = Rc::new(std::cell::Cell::new(None));
        let save = {
            let saved = saved.clone();
            Callback::from(move |snapshot: Snapshot| saved.set(Some(snapshot)))
        };
        let state = state.reduce(GameAction::Suspend { save });
        (state, saved.get())
    }

    #[test]
    fn test_initialize_without_snapshot_is_fresh() {
        let state = fresh();
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left_secs, 15);
        assert!(!state.started);
        assert_eq!(state.phase, Phase::Fresh);
        assert_eq!(state.countdown.duration_ms, 15_000);
        assert!(!state.countdown.running);
    }

    #[test]
    fn test_first_tap_starts_countdown() {
        let mut state = fresh();
        let armed = state.countdown.generation;
        state.on_tap();
        assert_eq!(state.score, 1);
        assert!(state.started);
        assert_eq!(state.phase, Phase::Running);
        assert!(state.countdown.running);
        // Starting uses the armed countdown instead of building a new one.
        assert_eq!(state.countdown.generation, armed);
    }

    #[test]
    fn test_taps_are_counted() {
        let mut state = fresh();
        for _ in 0..42 {
            state.on_tap();
        }
        assert_eq!(state.score, 42);
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_score_saturates() {
        let mut state = GameState::initialize(
            GameConfig::default(),
            Some(Snapshot {
                score: u32::MAX,
                time_left: 3,
            }),
        );
        state.on_tap();
        assert_eq!(state.score, u32::MAX);
    }

    #[test]
    fn test_tick_floors_to_seconds() {
        let mut state = fresh();
        state.on_tap();
        state.on_tick(5000);
        assert_eq!(state.time_left_secs, 5);
        state.on_tick(4999);
        assert_eq!(state.time_left_secs, 4);
        for ms in (0..=15_000).step_by(250) {
            state.on_tick(ms);
            assert_eq!(state.time_left_secs, ms / 1000);
        }
    }

    #[test]
    fn test_finish_reports_score_and_resets() {
        let mut state = fresh();
        for _ in 0..7 {
            state.on_tap();
        }
        state.on_tick(2000);
        let before = state.countdown.generation;
        let over = state.on_finish();
        assert_eq!(over.final_score, 7);
        assert_eq!(state.game_over, Some(over));
        assert_eq!((state.score, state.time_left_secs, state.started), (0, 15, false));
        assert_eq!(state.phase, Phase::Fresh);
        assert_ne!(state.countdown.generation, before);
        assert!(!state.countdown.running);
        assert_eq!(state.countdown.duration_ms, 15_000);
    }

    #[test]
    fn test_capture_then_initialize_restores_running_game() {
        let mut state = fresh();
        for _ in 0..3 {
            state.on_tap();
        }
        state.on_tick(9400);
        let snapshot = state.capture_state();
        assert_eq!(snapshot, Snapshot { score: 3, time_left: 9 });
        assert!(!state.countdown.running);

        let restored = GameState::initialize(GameConfig::default(), Some(snapshot));
        assert_eq!(restored.score, 3);
        assert_eq!(restored.time_left_secs, 9);
        assert!(restored.started);
        assert_eq!(restored.phase, Phase::Restored);
        assert!(restored.countdown.running);
        assert_eq!(restored.countdown.duration_ms, 9000);
    }

    #[test]
    fn test_tap_after_restore_only_scores() {
        let mut state = GameState::initialize(
            GameConfig::default(),
            Some(Snapshot { score: 3, time_left: 9 }),
        );
        let generation = state.countdown.generation;
        state.on_tap();
        assert_eq!(state.score, 4);
        assert_eq!(state.phase, Phase::Restored);
        assert_eq!(state.countdown.generation, generation);
    }

    #[test]
    fn test_reducer_ignores_ticks_after_suspend() {
        let state = Rc::new(fresh());
        let state = state.reduce(GameAction::Tap);
        let state = state.reduce(GameAction::Tick { remaining_ms: 12_000 });
        assert_eq!(state.time_left_secs, 12);
        let (state, saved) = suspend(state);
        assert_eq!(saved, Some(Snapshot { score: 1, time_left: 12 }));
        let state = state.reduce(GameAction::Tick { remaining_ms: 3_000 });
        assert_eq!(state.time_left_secs, 12);
        let state = state.reduce(GameAction::Finish);
        assert_eq!(state.score, 1);
        assert!(state.game_over.is_none());
    }

    #[test]
    fn test_reducer_restore_restarts_countdown() {
        let state = Rc::new(fresh()).reduce(GameAction::Tap);
        let (state, _) = suspend(state);
        let generation = state.countdown.generation;
        let state = state.reduce(GameAction::Resume {
            saved: Some(Snapshot { score: 1, time_left: 14 }),
        });
        assert!(state.countdown.running);
        assert_ne!(state.countdown.generation, generation);
        assert_eq!(state.countdown.duration_ms, 14_000);
    }

    #[test]
    fn test_resume_without_stored_snapshot_continues_from_memory() {
        let state = Rc::new(fresh()).reduce(GameAction::Tap).reduce(GameAction::Tap);
        let state = state.reduce(GameAction::Tick { remaining_ms: 11_200 });
        let (state, _) = suspend(state);
        assert!(!state.countdown.running);

        let state = state.reduce(GameAction::Resume { saved: None });
        assert!(state.countdown.running);
        assert_eq!(state.phase, Phase::Restored);
        assert_eq!((state.score, state.time_left_secs), (2, 11));
        assert_eq!(state.countdown.duration_ms, 11_000);

        let state = state.reduce(GameAction::Finish);
        assert_eq!(state.game_over.map(|o| o.final_score), Some(2));
        assert_eq!((state.score, state.time_left_secs, state.started), (0, 15, false));
    }

    #[test]
    fn test_resume_without_snapshot_leaves_live_game_alone() {
        let state = Rc::new(fresh()).reduce(GameAction::Tap);
        let generation = state.countdown.generation;
        let state = state.reduce(GameAction::Resume { saved: None });
        assert_eq!(state.countdown.generation, generation);
        assert_eq!(state.phase, Phase::Running);

        let idle = Rc::new(fresh()).reduce(GameAction::Resume { saved: None });
        assert!(!idle.started);
        assert!(!idle.countdown.running);
    }

    #[test]
    fn test_tap_on_suspended_game_restarts_countdown() {
        let state = Rc::new(fresh()).reduce(GameAction::Tap);
        let (state, _) = suspend(state);
        let state = state.reduce(GameAction::Tap).reduce(GameAction::Tap);
        assert_eq!(state.score, 3);
        assert!(state.countdown.running);

        let state = state.reduce(GameAction::Finish);
        assert_eq!(state.game_over.map(|o| o.final_score), Some(3));
        assert_eq!(state.phase, Phase::Fresh);
    }

    #[test]
    fn test_restored_game_finishes_into_fresh() {
        let mut state = restored(3, 9);
        for _ in 0..5 {
            state.on_tap();
        }
        assert_eq!(state.score, 8);
        let before = state.countdown.generation;
        let over = state.on_finish();
        assert_eq!(over.final_score, 8);
        assert_eq!(state.game_over.map(|o| o.final_score), Some(8));
        assert_eq!((state.score, state.time_left_secs, state.started), (0, 15, false));
        assert_eq!(state.phase, Phase::Fresh);
        assert_ne!(state.countdown.generation, before);
        assert!(!state.countdown.running);
        assert_eq!(state.countdown.duration_ms, 15_000);
    }

    #[test]
    fn test_restore_with_no_time_left_finishes_on_first_event() {
        let state = restored(4, 0);
        assert!(state.countdown.running);
        assert_eq!(state.countdown.duration_ms, 0);
        assert_eq!(state.time_left_secs, 0);

        let state = Rc::new(state).reduce(GameAction::Finish);
        assert_eq!(state.game_over.map(|o| o.final_score), Some(4));
        assert_eq!((state.score, state.time_left_secs, state.started), (0, 15, false));
        assert_eq!(state.phase, Phase::Fresh);
    }

    #[test]
    fn test_taps_on_restored_game_add_to_saved_score() {
        let mut state = restored(17, 6);
        for n in 1..=25 {
            state.on_tap();
            assert_eq!(state.score, 17 + n);
        }
        assert_eq!(state.phase, Phase::Restored);
        assert!(state.countdown.running);
    }

    #[test]
    fn test_restore_clamps_time_left_to_round_length() {
        let state = restored(2, 4_000_000);
        assert_eq!(state.time_left_secs, 15);
        assert_eq!(state.countdown.duration_ms, 15_000);

        let state = Rc::new(fresh()).reduce(GameAction::Resume {
            saved: Some(Snapshot { score: 2, time_left: u32::MAX }),
        });
        assert_eq!(state.time_left_secs, 15);
        assert_eq!(state.countdown.duration_ms, 15_000);
    }

    #[test]
    fn test_dismiss_only_clears_matching_round() {
        let state = Rc::new(fresh()).reduce(GameAction::Tap);
        let state = state.reduce(GameAction::Finish);
        let first = state.game_over.map(|o| o.round);
        let state = state.reduce(GameAction::Tap).reduce(GameAction::Tap);
        let state = state.reduce(GameAction::Finish);
        assert_eq!(state.game_over.map(|o| o.final_score), Some(2));
        let state = state.reduce(GameAction::DismissGameOver {
            round: first.unwrap(),
        });
        assert!(state.game_over.is_some());
        let current = state.game_over.unwrap().round;
        let state = state.reduce(GameAction::DismissGameOver { round: current });
        assert!(state.game_over.is_none());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = Snapshot { score: 3, time_left: 9 }.to_json().unwrap();
        assert_eq!(json, r#"{"score":3,"time_left":9}"#);
        assert!(Snapshot::from_json("{\"score\":-1}").is_err());
    }
}
