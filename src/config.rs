//! Compiled-in game tunables.  There is no config file or CLI surface;
//! everything is adjusted at build time.

/// Logical play-field size, in game pixels.  The terminal renderer scales
/// this onto whatever cell grid is available.
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Side of the player and alien squares.
pub const TILE_SIZE: f32 = 20.0;

pub const PLAYER_SPEED: f32 = 5.0;
/// Vertical speed of a player bullet (applied upward).
pub const BULLET_SPEED: f32 = 7.0;
/// Vertical speed of an alien bullet (applied downward).
pub const ALIEN_BULLET_SPEED: f32 = 4.0;

pub const BULLET_WIDTH: f32 = 5.0;
pub const BULLET_HEIGHT: f32 = 10.0;

pub const ALIEN_ROWS: usize = 5;
pub const ALIEN_COLS: usize = 11;
pub const ALIEN_SPACING_X: f32 = TILE_SIZE * 1.8;
pub const ALIEN_SPACING_Y: f32 = TILE_SIZE * 1.5;
pub const ALIEN_START_Y: f32 = 50.0;
pub const ALIEN_DROP_DISTANCE: f32 = TILE_SIZE / 2.0;

/// Horizontal formation speed at the start of a fresh game.
pub const INITIAL_ALIEN_SPEED: f32 = 0.5;
/// Speed multiplier applied each time the formation bounces off an edge.
pub const BOUNCE_SPEED_FACTOR: f32 = 1.02;

/// Formation move cadence: near `BASE` while the grid is mostly intact,
/// ramping quadratically down to `MIN` as the wave thins.
pub const BASE_MOVE_INTERVAL_MS: f64 = 1000.0;
pub const MIN_MOVE_INTERVAL_MS: f64 = 100.0;

/// Mean time between alien shots on a fresh game; re-randomized after every
/// shot to `SHOOT_JITTER_BASE_MS + rand * SHOOT_JITTER_SPREAD_MS`.
pub const INITIAL_SHOOT_INTERVAL_MS: f64 = 1000.0;
pub const SHOOT_JITTER_BASE_MS: f64 = 800.0;
pub const SHOOT_JITTER_SPREAD_MS: f64 = 500.0;

/// Per-wave escalation, compounding until a full restart.
pub const WAVE_SPEED_FACTOR: f32 = 1.1;
pub const WAVE_SHOOT_FACTOR: f64 = 0.9;

/// Minimum time between consecutive player shots.
pub const PLAYER_COOLDOWN_MS: f64 = 500.0;
/// Pause between clearing a wave and the next one spawning.
pub const WAVE_CLEAR_DELAY_MS: f64 = 1000.0;

pub const STARTING_LIVES: u32 = 3;
pub const KILL_SCORE: u32 = 10;
