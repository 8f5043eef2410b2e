//! Core simulation for a single-screen fixed-shooter: a player ship fires
//! upward at a descending grid of aliens that return fire.
//!
//! The library is frontend-agnostic.  All state lives in a [`session::Session`]
//! and is advanced by the pure [`sim::tick`] function, which returns a new
//! session plus the [`events::GameEvent`]s (sound cues, score/lives pushes,
//! phase changes) the frontend should act on.  Randomness is injected as an
//! `impl Rng`, so tests run deterministically with a seeded RNG.

pub mod audio;
pub mod config;
pub mod entities;
pub mod events;
pub mod formation;
pub mod geometry;
pub mod session;
pub mod shooting;
pub mod sim;
