//! Alien return fire: column-based targeting on a jittered timer.

use std::collections::BTreeMap;

use rand::Rng;

use crate::config::{
    ALIEN_BULLET_SPEED, ALIEN_SPACING_X, BULLET_WIDTH, INITIAL_SHOOT_INTERVAL_MS,
    SHOOT_JITTER_BASE_MS, SHOOT_JITTER_SPREAD_MS,
};
use crate::entities::{Bullet, Tint};
use crate::formation::Formation;

/// Fires at most one alien bullet per elapsed interval.  The interval is
/// re-randomized after every shot and scaled by the session's per-wave
/// factor, so later waves shoot more often.
#[derive(Clone, Debug)]
pub struct AlienGunnery {
    pub last_shot_ms: f64,
    pub interval_ms: f64,
}

impl AlienGunnery {
    pub fn new(now_ms: f64, wave_scale: f64) -> Self {
        AlienGunnery {
            last_shot_ms: now_ms,
            interval_ms: INITIAL_SHOOT_INTERVAL_MS * wave_scale,
        }
    }

    /// Fire if the interval has elapsed and any alien is alive.  The shooter
    /// is chosen uniformly among the lowest living alien of each column; the
    /// bullet spawns centered just below its bottom edge.
    pub fn tick(
        &mut self,
        now_ms: f64,
        formation: &Formation,
        wave_scale: f64,
        rng: &mut impl Rng,
    ) -> Option<Bullet> {
        if now_ms - self.last_shot_ms <= self.interval_ms {
            return None;
        }

        let candidates = column_candidates(formation);
        if candidates.is_empty() {
            return None;
        }
        self.last_shot_ms = now_ms;
        self.interval_ms =
            (SHOOT_JITTER_BASE_MS + rng.gen::<f64>() * SHOOT_JITTER_SPREAD_MS) * wave_scale;

        let shooter = &formation.aliens[candidates[rng.gen_range(0..candidates.len())]];
        Some(Bullet {
            x: shooter.rect().center_x() - BULLET_WIDTH / 2.0,
            y: shooter.rect().bottom(),
            speed_y: ALIEN_BULLET_SPEED,
            tint: Tint::Red,
        })
    }
}

/// Indices of the lowest (largest y) living alien in each grid column.
/// Columns are keyed by rounding x over the column spacing; the map is
/// rebuilt from scratch on every targeting tick so dead aliens can never be
/// picked and ordering is deterministic.
pub fn column_candidates(formation: &Formation) -> Vec<usize> {
    let mut lowest: BTreeMap<i32, usize> = BTreeMap::new();
    for (i, alien) in formation.aliens.iter().enumerate() {
        if !alien.alive {
            continue;
        }
        let col = (alien.x / ALIEN_SPACING_X).round() as i32;
        match lowest.get(&col) {
            Some(&j) if formation.aliens[j].y >= alien.y => {}
            _ => {
                lowest.insert(col, i);
            }
        }
    }
    lowest.into_values().collect()
}
