//! Speech synthesis system

pub mod backends;
pub mod synth;
pub mod text;

pub use synth::{create_synth, Engine, Synth, TextToSpeech};
