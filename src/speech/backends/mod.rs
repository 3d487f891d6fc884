//! Speech engine backends

// Online cloud TTS endpoint (MP3)
pub mod cloud;

// Local platform TTS via the tts crate
pub mod native;

// espeak-ng subprocess, used as fallback and for WAV file output
pub mod espeak;
