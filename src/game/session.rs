//! Session state and lifecycle: start, pause, resume, end, and the tick
//! that drives spawning and motion.

use rand::Rng;

use crate::constants::{INITIAL_SPEED, SPEED_INCREASE_PER_MINUTE, STARTING_LIVES};
use crate::game::types::{ItemMode, PlayArea, TrashCategory, TrashItem};
use crate::game::{motion, spawner};

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh session; the start screen is up.
    NotStarted,
    Playing,
    /// Suspended by the info overlay or an explicit pause; state frozen.
    Paused,
    GameOver,
}

/// How a finished session ended, for the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverKind {
    /// The score did not beat the stored record.
    Normal,
    /// The score beat the record; the new value needs persisting.
    NewRecord,
}

/// What happened during one tick, for the presentation layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    /// A new item entered the belt.
    pub spawned: bool,
    /// Items lost off the right edge this tick.
    pub belt_misses: u32,
    /// Items that hit the floor this tick.
    pub floor_misses: u32,
    /// Set when this tick ended the session.
    pub game_over: Option<GameOverKind>,
}

/// One game session. Owns every live item; nothing here touches the
/// terminal, the clock, or the filesystem.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub lives: u32,
    pub base_speed: f64,
    pub start_ms: u64,
    pub last_spawn_ms: u64,
    pub items: Vec<TrashItem>,
    pub area: PlayArea,
    next_item_id: u64,
}

impl GameSession {
    pub fn new(area: PlayArea) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            score: 0,
            high_score: 0,
            lives: STARTING_LIVES,
            base_speed: INITIAL_SPEED,
            start_ms: 0,
            last_spawn_ms: 0,
            items: Vec::new(),
            area,
            next_item_id: 0,
        }
    }

    /// Begin (or restart) a session. `high_score` is the freshly loaded
    /// record; the caller owns the store.
    pub fn start(&mut self, now_ms: u64, high_score: u32) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.base_speed = INITIAL_SPEED;
        self.start_ms = now_ms;
        self.last_spawn_ms = now_ms;
        self.high_score = high_score;
        self.items.clear();
    }

    /// Suspend play. Does nothing in any phase but Playing, so repeated
    /// pauses are harmless.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
        }
    }

    /// Return from a pause. Resets the spawn clock so time spent paused
    /// cannot produce a catch-up burst of items. Illegal resumes (no
    /// lives left, never started) are silent no-ops.
    pub fn resume(&mut self, now_ms: u64) {
        if self.phase == GamePhase::Paused && self.lives > 0 {
            self.phase = GamePhase::Playing;
            self.last_spawn_ms = now_ms;
        }
    }

    /// Terminate the session and settle the record. The returned kind
    /// tells the caller whether the new high score needs persisting.
    pub fn end(&mut self) -> GameOverKind {
        self.phase = GamePhase::GameOver;
        if self.score > self.high_score && self.score > 0 {
            self.high_score = self.score;
            GameOverKind::NewRecord
        } else {
            GameOverKind::Normal
        }
    }

    /// Lives-exhausted check shared by the tick and the drop resolver.
    /// Guarded so a session can never be ended twice.
    pub(crate) fn check_game_over(&mut self) -> Option<GameOverKind> {
        if self.lives == 0 && self.phase != GamePhase::GameOver {
            Some(self.end())
        } else {
            None
        }
    }

    /// Advance one frame: spawn, move, then check for game over.
    ///
    /// `now_ms` must be monotonic. It only feeds the spawn interval and
    /// the speed ramp; per-tick motion is fixed, so the call cadence sets
    /// the belt's pace.
    pub fn tick<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> TickEvents {
        let mut events = TickEvents::default();
        if self.phase != GamePhase::Playing {
            return events;
        }

        events.spawned = spawner::maybe_spawn(self, now_ms, rng);

        let moved = motion::advance(self, now_ms);
        events.belt_misses = moved.belt_misses;
        events.floor_misses = moved.floor_misses;

        events.game_over = self.check_game_over();
        events
    }

    /// Minutes since `start()`, from the caller's clock.
    pub fn elapsed_minutes(&self, now_ms: u64) -> f64 {
        now_ms.saturating_sub(self.start_ms) as f64 / 60_000.0
    }

    /// Belt speed ramps linearly with session age and never decreases
    /// until the next `start()`.
    pub fn current_speed(&self, now_ms: u64) -> f64 {
        self.base_speed + self.elapsed_minutes(now_ms) * SPEED_INCREASE_PER_MINUTE
    }

    /// Append a freshly spawned item at the belt entry point.
    pub fn spawn_item(&mut self, category: TrashCategory, icon: usize) -> u64 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        let (x, y) = self.area.spawn_point();
        self.items.push(TrashItem {
            id,
            category,
            icon,
            x,
            y,
            mode: ItemMode::Conveyor,
        });
        id
    }

    pub fn item(&self, id: u64) -> Option<&TrashItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: u64) -> Option<&mut TrashItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new(PlayArea::default());
        assert_eq!(session.phase, GamePhase::NotStarted);
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, STARTING_LIVES);
        assert!(session.items.is_empty());
    }

    #[test]
    fn test_start_resets_everything() {
        let mut session = GameSession::new(PlayArea::default());
        session.start(1_000, 50);
        session.score = 70;
        session.lives = 1;
        session.spawn_item(TrashCategory::Paper, 0);

        session.start(9_000, 120);

        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, STARTING_LIVES);
        assert_eq!(session.high_score, 120);
        assert_eq!(session.start_ms, 9_000);
        assert_eq!(session.last_spawn_ms, 9_000);
        assert!(session.items.is_empty());
    }

    #[test]
    fn test_pause_only_from_playing() {
        let mut session = GameSession::new(PlayArea::default());
        session.pause();
        assert_eq!(session.phase, GamePhase::NotStarted);

        session.start(0, 0);
        session.pause();
        assert_eq!(session.phase, GamePhase::Paused);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut session = GameSession::new(PlayArea::default());
        session.start(0, 0);
        session.score = 30;
        session.pause();
        let after_one = session.clone();
        session.pause();

        assert_eq!(session.phase, after_one.phase);
        assert_eq!(session.score, after_one.score);
        assert_eq!(session.lives, after_one.lives);
        assert_eq!(session.last_spawn_ms, after_one.last_spawn_ms);
    }

    #[test]
    fn test_resume_resets_spawn_clock() {
        let mut session = GameSession::new(PlayArea::default());
        session.start(0, 0);
        session.pause();
        session.resume(30_000);
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.last_spawn_ms, 30_000);
    }

    #[test]
    fn test_resume_with_no_lives_is_noop() {
        let mut session = GameSession::new(PlayArea::default());
        session.start(0, 0);
        session.pause();
        session.lives = 0;
        session.resume(5_000);
        assert_eq!(session.phase, GamePhase::Paused);
    }

    #[test]
    fn test_resume_before_start_is_noop() {
        let mut session = GameSession::new(PlayArea::default());
        session.resume(5_000);
        assert_eq!(session.phase, GamePhase::NotStarted);
    }

    #[test]
    fn test_end_normal_when_record_stands() {
        let mut session = GameSession::new(PlayArea::default());
        session.start(0, 100);
        session.score = 80;
        assert_eq!(session.end(), GameOverKind::Normal);
        assert_eq!(session.high_score, 100);
        assert_eq!(session.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_end_new_record_when_beaten() {
        let mut session = GameSession::new(PlayArea::default());
        session.start(0, 100);
        session.score = 120;
        assert_eq!(session.end(), GameOverKind::NewRecord);
        assert_eq!(session.high_score, 120);
    }

    #[test]
    fn test_end_zero_score_never_records() {
        let mut session = GameSession::new(PlayArea::default());
        session.start(0, 0);
        assert_eq!(session.end(), GameOverKind::Normal);
        assert_eq!(session.high_score, 0);
    }

    #[test]
    fn test_check_game_over_fires_once() {
        let mut session = GameSession::new(PlayArea::default());
        session.start(0, 0);
        session.lives = 0;
        assert!(session.check_game_over().is_some());
        assert!(session.check_game_over().is_none());
        assert_eq!(session.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_tick_is_noop_unless_playing() {
        let mut session = GameSession::new(PlayArea::default());
        let mut rng = thread_rng();
        let events = session.tick(10_000, &mut rng);
        assert!(!events.spawned);
        assert!(session.items.is_empty());

        session.start(0, 0);
        session.pause();
        session.spawn_item(TrashCategory::Organic, 0);
        let x_before = session.items[0].x;
        session.tick(10_000, &mut rng);
        assert_eq!(session.items[0].x, x_before);
    }

    #[test]
    fn test_tick_ends_session_when_lives_run_out() {
        let mut session = GameSession::new(PlayArea::default());
        let mut rng = thread_rng();
        session.start(0, 0);
        session.lives = 1;
        // Park one item at the right edge so the next advance loses it.
        let id = session.spawn_item(TrashCategory::General, 0);
        session.item_mut(id).unwrap().x = session.area.width;

        let events = session.tick(1, &mut rng);

        assert_eq!(events.belt_misses, 1);
        assert_eq!(events.game_over, Some(GameOverKind::Normal));
        assert_eq!(session.phase, GamePhase::GameOver);
        assert_eq!(session.lives, 0);
    }

    #[test]
    fn test_current_speed_monotonic_and_reset_by_start() {
        let mut session = GameSession::new(PlayArea::default());
        session.start(0, 0);
        let base = session.current_speed(0);
        let mut last = base;
        for minutes in 1..=10 {
            let speed = session.current_speed(minutes * 60_000);
            assert!(speed >= last);
            last = speed;
        }
        assert!(last > base);

        session.start(600_000, 0);
        assert!((session.current_speed(600_000) - base).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spawn_item_enters_on_belt() {
        let mut session = GameSession::new(PlayArea::default());
        session.start(0, 0);
        let id = session.spawn_item(TrashCategory::Plastic, 3);
        let item = session.item(id).unwrap();
        assert_eq!(item.mode, ItemMode::Conveyor);
        assert!(item.x < 0.0);
        assert!((item.y - session.area.belt_y()).abs() < f64::EPSILON);
        assert_eq!(item.icon, 3);
    }

    #[test]
    fn test_item_ids_are_unique() {
        let mut session = GameSession::new(PlayArea::default());
        session.start(0, 0);
        let a = session.spawn_item(TrashCategory::Paper, 0);
        let b = session.spawn_item(TrashCategory::Paper, 0);
        assert_ne!(a, b);
    }
}
