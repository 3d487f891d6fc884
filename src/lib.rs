//! utter - command-line text to speech
//!
//! Converts text to speech through one of two external engines:
//! an online cloud endpoint (MP3) or the local platform synthesizer (WAV).
//! Speak text aloud, save it to an audio file, run the demo suite, or
//! read lines interactively.

pub mod audio;
pub mod cli;
pub mod config;
pub mod demos;
pub mod error;
pub mod repl;
pub mod speech;

pub use error::{Result, UtterError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "utter";
