//! Events pushed from the simulation to the frontend.

use crate::audio::Cue;

/// One frontend-visible effect of a tick.  The simulation never talks to the
/// renderer, audio sink, or HUD directly; it emits these and the frontend
/// dispatches them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Play a sound cue.
    Cue(Cue),
    /// Score changed; new total.
    ScoreChanged(u32),
    /// Lives changed; new count.
    LivesChanged(u32),
    /// All aliens dead; the next wave spawns after the transition delay.
    WaveCleared,
    /// A fresh grid is live (first wave or after a clear).
    WaveStarted,
    /// Terminal loss; final score is frozen.
    GameOver { final_score: u32 },
}
