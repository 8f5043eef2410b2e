//! Game entity types - pure data, no logic.

use crate::config::{BULLET_HEIGHT, BULLET_WIDTH, TILE_SIZE};
use crate::geometry::Rect;

/// Render-only color tag.  Has no effect on game semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    LimeGreen,
    Yellow,
    Red,
    Pink,
    Cyan,
    LightCoral,
}

// ── Player ────────────────────────────────────────────────────────────────────

/// The player ship.  One instance per session, recreated on (re)start.
#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// False while the fire cooldown is pending.
    pub can_shoot: bool,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, TILE_SIZE, TILE_SIZE)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A projectile.  `speed_y` is negative for player bullets (upward) and
/// positive for alien bullets (downward); ownership is implied by which
/// collection holds the bullet.
#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub speed_y: f32,
    pub tint: Tint,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, BULLET_WIDTH, BULLET_HEIGHT)
    }
}

// ── Aliens ────────────────────────────────────────────────────────────────────

/// One grid invader.  Dead aliens stay in the grid with `alive = false` so
/// column indices remain stable for targeting.
#[derive(Clone, Debug)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
    pub tint: Tint,
}

impl Alien {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, TILE_SIZE, TILE_SIZE)
    }
}
