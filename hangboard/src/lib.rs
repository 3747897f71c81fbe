//! Hang-board interval training: protocols, the phase timer and session history.

pub mod catalog;
mod cue;
mod engine;
mod error;
pub mod history;
mod metronome;
mod protocol;
pub mod store;

pub use cue::*;
pub use engine::*;
pub use error::*;
pub use metronome::*;
pub use protocol::*;
