//! Session lifecycle: phase state machine, score/lives bookkeeping, the
//! per-wave difficulty baselines, and the deferred-timer queue.
//!
//! The two deferred actions (player-cooldown expiry and the wave-clear
//! transition) are scheduled against a monotonic ms clock and tagged with the
//! session generation they were created under.  A timer that comes due after
//! a restart carries a stale generation and is dropped, so it can never
//! corrupt a freshly-initialized session.

use crate::audio::Cue;
use crate::config::{
    INITIAL_ALIEN_SPEED, KILL_SCORE, PLAYER_COOLDOWN_MS, SCREEN_HEIGHT, SCREEN_WIDTH,
    STARTING_LIVES, TILE_SIZE, WAVE_CLEAR_DELAY_MS, WAVE_SHOOT_FACTOR, WAVE_SPEED_FACTOR,
};
use crate::entities::{Bullet, Player};
use crate::events::GameEvent;
use crate::formation::Formation;
use crate::shooting::AlienGunnery;

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Before the first start action; start prompt showing.
    NotStarted,
    /// Simulation stepping every frame.
    Running,
    /// All aliens dead; frozen until the transition timer fires.
    WaveCleared,
    /// Terminal; only an explicit restart leaves this state.
    GameOver,
}

/// What a deferred timer does when it comes due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Re-arm the player's fire.
    CooldownOver,
    /// Leave `WaveCleared` and spawn the next, harder wave.
    NextWave,
}

/// A fire-once timer.  `generation` is the session generation it was
/// scheduled under; mismatched timers are dropped when due.
#[derive(Clone, Copy, Debug)]
pub struct Deferred {
    pub fire_at_ms: f64,
    pub generation: u64,
    pub action: TimerAction,
}

/// The whole game world.  Cloneable so the pure tick can return a new copy
/// without mutating its input.
#[derive(Clone, Debug)]
pub struct Session {
    pub phase: Phase,
    pub score: u32,
    pub lives: u32,
    /// Bumped on every full (re)start; guards deferred timers.
    pub generation: u64,
    /// Formation speed a fresh wave starts at; compounds x1.1 per clear.
    pub base_speed: f32,
    /// Multiplier on the alien shoot interval; compounds x0.9 per clear.
    pub shoot_scale: f64,
    pub player: Player,
    /// Upward player bullets, insertion order.
    pub bullets: Vec<Bullet>,
    /// Downward alien bullets, insertion order.
    pub alien_bullets: Vec<Bullet>,
    pub formation: Formation,
    pub gunnery: AlienGunnery,
    pub timers: Vec<Deferred>,
}

impl Session {
    /// A session showing the start prompt; nothing moves until `start`.
    pub fn new() -> Self {
        Session {
            phase: Phase::NotStarted,
            score: 0,
            lives: STARTING_LIVES,
            generation: 0,
            base_speed: INITIAL_ALIEN_SPEED,
            shoot_scale: 1.0,
            player: spawn_player(),
            bullets: Vec::new(),
            alien_bullets: Vec::new(),
            formation: Formation::new(INITIAL_ALIEN_SPEED, 0.0),
            gunnery: AlienGunnery::new(0.0, 1.0),
            timers: Vec::new(),
        }
    }

    /// Full (re)start: score, lives, and both difficulty baselines return to
    /// defaults, a fresh grid spawns, and the generation advances so any
    /// still-pending timer from the previous game is orphaned.
    pub fn start(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        self.generation += 1;
        self.phase = Phase::Running;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.base_speed = INITIAL_ALIEN_SPEED;
        self.shoot_scale = 1.0;
        self.player = spawn_player();
        self.bullets.clear();
        self.alien_bullets.clear();
        self.formation = Formation::new(self.base_speed, now_ms);
        self.gunnery = AlienGunnery::new(now_ms, self.shoot_scale);
        events.push(GameEvent::ScoreChanged(self.score));
        events.push(GameEvent::LivesChanged(self.lives));
        events.push(GameEvent::WaveStarted);
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, action: TimerAction) {
        self.timers.push(Deferred {
            fire_at_ms: now_ms + delay_ms,
            generation: self.generation,
            action,
        });
    }

    /// Pop and apply every due timer.  Runs even while the simulation is
    /// frozen (`WaveCleared` relies on it to resume).
    pub fn fire_due_timers(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        let (due, pending): (Vec<Deferred>, Vec<Deferred>) = self
            .timers
            .drain(..)
            .partition(|t| t.fire_at_ms <= now_ms);
        self.timers = pending;

        for timer in due {
            if timer.generation != self.generation {
                log::debug!(
                    "dropping stale {:?} timer (gen {} != {})",
                    timer.action,
                    timer.generation,
                    self.generation
                );
                continue;
            }
            match timer.action {
                TimerAction::CooldownOver => self.player.can_shoot = true,
                TimerAction::NextWave => {
                    if self.phase == Phase::WaveCleared {
                        self.begin_next_wave(now_ms, events);
                    }
                }
            }
        }
    }

    /// Award a kill.  Score only ever goes up.
    pub fn award_kill(&mut self, events: &mut Vec<GameEvent>) {
        self.score += KILL_SCORE;
        events.push(GameEvent::Cue(Cue::InvaderKilled));
        events.push(GameEvent::ScoreChanged(self.score));
    }

    /// Non-terminal or terminal player hit from an alien bullet.  No
    /// invulnerability window and no repositioning on survival.
    pub fn player_hit(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != Phase::Running {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        events.push(GameEvent::Cue(Cue::Explosion));
        events.push(GameEvent::LivesChanged(self.lives));
        if self.lives == 0 {
            self.trigger_game_over(events);
        }
    }

    /// Terminal loss.  Idempotent: re-entering `GameOver` is a no-op.
    pub fn trigger_game_over(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase == Phase::GameOver {
            return;
        }
        self.phase = Phase::GameOver;
        events.push(GameEvent::Cue(Cue::Explosion));
        events.push(GameEvent::GameOver {
            final_score: self.score,
        });
    }

    /// All aliens dead: freeze and schedule the next wave.  Score and lives
    /// carry over.
    pub fn on_wave_cleared(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        self.phase = Phase::WaveCleared;
        events.push(GameEvent::WaveCleared);
        self.schedule(now_ms, WAVE_CLEAR_DELAY_MS, TimerAction::NextWave);
    }

    /// Escalate the baselines, respawn the grid, re-center the player, and
    /// resume.  Both bullet collections start empty.
    pub fn begin_next_wave(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        self.base_speed *= WAVE_SPEED_FACTOR;
        self.shoot_scale *= WAVE_SHOOT_FACTOR;
        self.formation = Formation::new(self.base_speed, now_ms);
        self.gunnery = AlienGunnery::new(now_ms, self.shoot_scale);
        self.bullets.clear();
        self.alien_bullets.clear();
        self.player.x = SCREEN_WIDTH / 2.0 - TILE_SIZE / 2.0;
        self.phase = Phase::Running;
        events.push(GameEvent::WaveStarted);
    }

    /// Arm the player-fire cooldown.
    pub fn start_cooldown(&mut self, now_ms: f64) {
        self.player.can_shoot = false;
        self.schedule(now_ms, PLAYER_COOLDOWN_MS, TimerAction::CooldownOver);
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

fn spawn_player() -> Player {
    Player {
        x: SCREEN_WIDTH / 2.0 - TILE_SIZE / 2.0,
        y: SCREEN_HEIGHT - TILE_SIZE * 2.0,
        can_shoot: true,
    }
}
