//! Sound-cue dispatch.
//!
//! The core never touches an audio device; it names cues and hands them to an
//! [`AudioSink`].  Playback problems are environmental and never surface to
//! the simulation, so the shipped sink just logs each request.

/// A named sound cue.  `Move` cycles through four variants in round-robin
/// order for variety only; the variant has no gameplay effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Shoot,
    InvaderKilled,
    Explosion,
    Move(u8),
}

impl Cue {
    /// Stable cue name, matching the classic sample set.
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Shoot => "shoot",
            Cue::InvaderKilled => "invaderkilled",
            Cue::Explosion => "explosion",
            Cue::Move(0) => "fastinvader1",
            Cue::Move(1) => "fastinvader2",
            Cue::Move(2) => "fastinvader3",
            Cue::Move(_) => "fastinvader4",
        }
    }
}

/// Fire-and-forget playback target.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Sink for builds without an audio device: every cue is logged and dropped.
#[derive(Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: Cue) {
        log::debug!("audio cue: {}", cue.name());
    }
}
