//! Audio file playback
//!
//! Plays synthesized audio (MP3 or WAV) through the default output device
//! using rodio. Playback is blocking; the call returns once the file has
//! been played to the end.

use crate::{Result, UtterError};
use log::debug;
use rodio::{Decoder, OutputStream, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Play an audio file to the end on the default output device
pub fn play_file(path: &Path) -> Result<()> {
    debug!("Playing audio file {:?}", path);

    let (_stream, handle) = OutputStream::try_default()
        .map_err(|e| UtterError::Audio(format!("No audio output device: {}", e)))?;
    let sink = Sink::try_new(&handle)
        .map_err(|e| UtterError::Audio(format!("Failed to open audio sink: {}", e)))?;

    let file = File::open(path)?;
    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| UtterError::Audio(format!("Failed to decode {:?}: {}", path, e)))?;

    sink.append(source);
    sink.sleep_until_end();

    debug!("Playback finished");
    Ok(())
}
