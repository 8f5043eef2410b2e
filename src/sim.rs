//! Per-frame simulation step.
//!
//! `tick` takes the current session by reference plus the sampled input and a
//! monotonic ms timestamp, and returns a new session together with the events
//! the frontend should dispatch.  All randomness flows through the injected
//! RNG.
//!
//! Order within a tick is load-bearing: timers, then input, then bullet
//! movement, then the formation, then alien fire, then collisions, then
//! terminal conditions.

use rand::Rng;

use crate::audio::Cue;
use crate::config::{
    BULLET_SPEED, BULLET_WIDTH, PLAYER_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE,
};
use crate::entities::{Bullet, Tint};
use crate::events::GameEvent;
use crate::geometry::overlaps;
use crate::session::{Phase, Session};

/// Currently-held logical actions, sampled once per tick.  Holding fire is
/// legal; only the cooldown gates fire rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Advance the world by one frame.
pub fn tick(
    state: &Session,
    input: &Input,
    now_ms: f64,
    rng: &mut impl Rng,
) -> (Session, Vec<GameEvent>) {
    let mut s = state.clone();
    let mut events = Vec::new();

    // Deferred timers run even while frozen; WaveCleared resumes through one.
    s.fire_due_timers(now_ms, &mut events);

    if s.phase != Phase::Running {
        return (s, events);
    }

    apply_input(&mut s, input, now_ms, &mut events);
    advance_bullets(&mut s);

    let step = s.formation.tick(now_ms, s.player.y);
    if let Some(variant) = step.move_cue {
        events.push(GameEvent::Cue(Cue::Move(variant)));
    }
    if step.reached_player {
        s.trigger_game_over(&mut events);
        return (s, events);
    }

    if let Some(bullet) = s.gunnery.tick(now_ms, &s.formation, s.shoot_scale, rng) {
        s.alien_bullets.push(bullet);
    }

    resolve_collisions(&mut s, &mut events);
    if s.phase != Phase::Running {
        return (s, events);
    }

    if s.formation.all_dead() {
        s.on_wave_cleared(now_ms, &mut events);
    }

    (s, events)
}

/// Move the player within screen bounds and attempt a shot if fire is held.
fn apply_input(s: &mut Session, input: &Input, now_ms: f64, events: &mut Vec<GameEvent>) {
    if input.left {
        s.player.x = (s.player.x - PLAYER_SPEED).max(0.0);
    }
    if input.right {
        s.player.x = (s.player.x + PLAYER_SPEED).min(SCREEN_WIDTH - TILE_SIZE);
    }
    if input.fire && s.player.can_shoot {
        s.bullets.push(Bullet {
            x: s.player.rect().center_x() - BULLET_WIDTH / 2.0,
            y: s.player.y,
            speed_y: -BULLET_SPEED,
            tint: Tint::Yellow,
        });
        events.push(GameEvent::Cue(Cue::Shoot));
        s.start_cooldown(now_ms);
    }
}

/// Advance every bullet and drop the ones that left the vertical bounds.
/// Retain passes, never index-based removal mid-iteration.
fn advance_bullets(s: &mut Session) {
    s.bullets.retain_mut(|b| {
        b.y += b.speed_y;
        b.rect().bottom() >= 0.0
    });
    s.alien_bullets.retain_mut(|b| {
        b.y += b.speed_y;
        b.y <= SCREEN_HEIGHT
    });
}

/// Collision resolution:
/// player bullets vs aliens, alien bullets vs player, aliens vs player.
fn resolve_collisions(s: &mut Session, events: &mut Vec<GameEvent>) {
    // Player bullets vs aliens.  First live alien hit wins and consumes the
    // bullet; a bullet can kill at most one alien per tick.
    let bullets = std::mem::take(&mut s.bullets);
    let mut surviving = Vec::with_capacity(bullets.len());
    for bullet in bullets {
        let rect = bullet.rect();
        let hit = s
            .formation
            .aliens
            .iter_mut()
            .find(|a| a.alive && overlaps(&rect, &a.rect()));
        match hit {
            Some(alien) => {
                alien.alive = false;
                s.award_kill(events);
            }
            None => surviving.push(bullet),
        }
    }
    s.bullets = surviving;

    // Alien bullets vs player.  Each hit consumes the bullet and applies the
    // hit effect; once the session leaves Running no further effects apply.
    let player_rect = s.player.rect();
    let mut hits = 0u32;
    s.alien_bullets.retain(|b| {
        if overlaps(&b.rect(), &player_rect) {
            hits += 1;
            false
        } else {
            true
        }
    });
    for _ in 0..hits {
        s.player_hit(events);
    }
    if s.phase != Phase::Running {
        return;
    }

    // Direct alien-player overlap is an immediate terminal loss regardless of
    // lives remaining.
    if s.formation
        .aliens
        .iter()
        .any(|a| a.alive && overlaps(&a.rect(), &player_rect))
    {
        s.trigger_game_over(events);
    }
}
