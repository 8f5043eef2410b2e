//! The alien formation: one grid sharing a direction and a horizontal speed.
//!
//! The grid steps on a timer rather than every frame.  The interval shrinks
//! quadratically as the wave thins, which is what produces the classic
//! speed-up as the last few aliens scatter.

use crate::config::{
    ALIEN_COLS, ALIEN_DROP_DISTANCE, ALIEN_ROWS, ALIEN_SPACING_X, ALIEN_SPACING_Y,
    ALIEN_START_Y, BASE_MOVE_INTERVAL_MS, BOUNCE_SPEED_FACTOR, MIN_MOVE_INTERVAL_MS,
    SCREEN_WIDTH, TILE_SIZE,
};
use crate::entities::{Alien, Tint};

/// Number of `Cue::Move` variants cycled through, one per step.
pub const MOVE_CUE_VARIANTS: u8 = 4;

/// Outcome of one formation tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FormationTick {
    /// Set when the grid performed a step this tick; carries the round-robin
    /// move-cue variant to play.
    pub move_cue: Option<u8>,
    /// The step carried a living alien's bottom edge to the player's row.
    pub reached_player: bool,
}

#[derive(Clone, Debug)]
pub struct Formation {
    /// Full rows x cols grid, never resized.  Dead aliens stay in place with
    /// `alive = false` so column targeting stays index-stable.
    pub aliens: Vec<Alien>,
    /// +1 moving right, -1 moving left.
    pub direction: f32,
    pub speed: f32,
    pub last_move_ms: f64,
    move_cue: u8,
}

impl Formation {
    /// Build a fresh, fully-alive grid centered horizontally, moving right.
    pub fn new(speed: f32, now_ms: f64) -> Self {
        let grid_width = ALIEN_COLS as f32 * ALIEN_SPACING_X - (ALIEN_SPACING_X - TILE_SIZE);
        let start_x = (SCREEN_WIDTH - grid_width) / 2.0;

        let mut aliens = Vec::with_capacity(ALIEN_ROWS * ALIEN_COLS);
        for row in 0..ALIEN_ROWS {
            let tint = if row < 2 {
                Tint::Pink
            } else if row < 4 {
                Tint::Cyan
            } else {
                Tint::LightCoral
            };
            for col in 0..ALIEN_COLS {
                aliens.push(Alien {
                    x: start_x + col as f32 * ALIEN_SPACING_X,
                    y: ALIEN_START_Y + row as f32 * ALIEN_SPACING_Y,
                    alive: true,
                    tint,
                });
            }
        }

        Formation {
            aliens,
            direction: 1.0,
            speed,
            last_move_ms: now_ms,
            move_cue: 0,
        }
    }

    pub fn living(&self) -> usize {
        self.aliens.iter().filter(|a| a.alive).count()
    }

    pub fn all_dead(&self) -> bool {
        self.aliens.iter().all(|a| !a.alive)
    }

    /// Time between formation steps, recomputed every tick from the fraction
    /// of the grid still alive: near the base interval above ~90% alive, then
    /// a quadratic ramp down to the minimum.
    pub fn move_interval_ms(&self) -> f64 {
        let total = (ALIEN_ROWS * ALIEN_COLS) as f64;
        let fraction = self.living() as f64 / total;
        let f = (fraction - 0.1).max(0.0);
        MIN_MOVE_INTERVAL_MS + (BASE_MOVE_INTERVAL_MS - MIN_MOVE_INTERVAL_MS) * f * f
    }

    /// Advance the formation if its move interval has elapsed.
    ///
    /// A step moves every living alien by `speed * direction`.  If that
    /// carries any living alien to a screen edge, the whole grid reverses,
    /// speeds up by the bounce factor, drops down, and nudges horizontally in
    /// the new direction so it cannot stick to the edge.  After the step the
    /// lowest living bottom edge is compared against `player_y`.
    pub fn tick(&mut self, now_ms: f64, player_y: f32) -> FormationTick {
        if now_ms - self.last_move_ms <= self.move_interval_ms() {
            return FormationTick::default();
        }
        self.last_move_ms = now_ms;

        let cue = self.move_cue;
        self.move_cue = (self.move_cue + 1) % MOVE_CUE_VARIANTS;

        let mut hit_edge = false;
        let mut lowest = 0.0f32;
        for alien in self.aliens.iter_mut().filter(|a| a.alive) {
            alien.x += self.speed * self.direction;
            if alien.x <= 0.0 || alien.x + TILE_SIZE >= SCREEN_WIDTH {
                hit_edge = true;
            }
            lowest = lowest.max(alien.y + TILE_SIZE);
        }

        if hit_edge {
            self.direction = -self.direction;
            self.speed *= BOUNCE_SPEED_FACTOR;
            for alien in self.aliens.iter_mut().filter(|a| a.alive) {
                alien.y += ALIEN_DROP_DISTANCE;
                alien.x += self.speed * self.direction;
            }
            lowest += ALIEN_DROP_DISTANCE;
        }

        FormationTick {
            move_cue: Some(cue),
            reached_player: self.living() > 0 && lowest >= player_y,
        }
    }
}
