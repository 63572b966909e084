// Frame timing constants
pub const TICK_INTERVAL_MS: u64 = 16;

// Conveyor tuning
pub const INITIAL_SPEED: f64 = 2.0; // units per tick
pub const SPEED_INCREASE_PER_MINUTE: f64 = 0.1;
pub const FALL_SPEED: f64 = 15.0; // units per tick once dropped

// Spawn pacing
pub const SPAWN_INTERVAL_MS: f64 = 4000.0;
pub const SPAWN_RAMP_PER_MINUTE: f64 = 0.5;

// Scoring constants
pub const SCORE_PER_SORT: u32 = 10;
pub const STARTING_LIVES: u32 = 3;

// Logical play-area geometry
pub const PLAY_WIDTH: f64 = 800.0;
pub const PLAY_HEIGHT: f64 = 450.0;
pub const BELT_Y_FRACTION: f64 = 0.12;
pub const ITEM_WIDTH: f64 = 48.0;
pub const ITEM_HEIGHT: f64 = 48.0;
pub const BIN_WIDTH: f64 = 150.0;
pub const BIN_HEIGHT: f64 = 100.0;

// UI timing
pub const BIN_FLASH_MS: u64 = 200;
