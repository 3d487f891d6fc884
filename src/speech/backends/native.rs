//! Native TTS backend using the tts crate
//!
//! This backend uses the `tts` crate which provides a unified interface to:
//! - Speech Dispatcher on Linux (via native bindings)
//! - AVFoundation on macOS/iOS (via native bindings)
//! - WinRT speech on Windows
//!
//! Platform synthesizers speak but do not write audio files, so
//! `synthesize_to` delegates to the espeak-ng subprocess backend.

use crate::speech::backends::espeak::EspeakSynth;
use crate::speech::synth::{MAX_WPM, MIN_WPM};
use crate::speech::Synth;
use crate::{Result, UtterError};
use log::{debug, warn};
use std::path::Path;
use std::time::Duration;
use tts::Tts as TtsCrate;

/// Native TTS backend using the tts crate
pub struct NativeSynth {
    /// The tts crate's TTS instance
    tts: TtsCrate,

    /// Language code, used when delegating file output to espeak-ng
    language: String,

    /// Current rate in words per minute
    wpm: u16,
}

impl NativeSynth {
    /// Create a new native TTS synthesizer
    ///
    /// Initializes the platform-appropriate TTS backend
    pub fn new(language: &str) -> Result<Self> {
        debug!("Creating native TTS backend");

        let tts = TtsCrate::default()
            .map_err(|e| UtterError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        debug!("Native TTS backend created successfully");

        Ok(Self {
            tts,
            language: language.to_string(),
            wpm: 175,
        })
    }

    /// Map words per minute onto the platform's rate range
    ///
    /// The tts crate exposes platform-specific minimum and maximum rates;
    /// 80 wpm maps to the minimum, 450 wpm to the maximum.
    fn convert_rate(wpm: u16, min_rate: f32, max_rate: f32) -> f32 {
        let wpm = wpm.clamp(MIN_WPM, MAX_WPM);
        let fraction = f32::from(wpm - MIN_WPM) / f32::from(MAX_WPM - MIN_WPM);
        min_rate + fraction * (max_rate - min_rate)
    }

    /// Block until the current utterance finishes
    ///
    /// Platform speak calls return immediately; a CLI that exits right away
    /// would cut the utterance off. Polls is_speaking where the platform
    /// supports it, otherwise sleeps for a duration estimated from the
    /// word count and rate.
    fn wait_until_done(&mut self, text: &str) -> Result<()> {
        if self.tts.supported_features().is_speaking {
            loop {
                let speaking = self.tts.is_speaking().map_err(|e| {
                    UtterError::Speech(format!("Failed to query speech state: {}", e))
                })?;
                if !speaking {
                    break;
                }
                std::thread::sleep(Duration::from_millis(50));
            }
        } else {
            let words = text.split_whitespace().count() as u64;
            let secs = words * 60 / u64::from(self.wpm.max(1)) + 1;
            debug!("is_speaking unsupported, sleeping {}s estimate", secs);
            std::thread::sleep(Duration::from_secs(secs));
        }
        Ok(())
    }
}

impl Synth for NativeSynth {
    fn speak(&mut self, text: &str) -> Result<()> {
        debug!("Speaking via native TTS: {}", text);
        self.tts
            .speak(text, false)
            .map_err(|e| UtterError::Speech(format!("Speak failed: {}", e)))?;
        self.wait_until_done(text)
    }

    fn synthesize_to(&mut self, text: &str, path: &Path) -> Result<()> {
        // File output goes through espeak-ng
        let mut espeak = EspeakSynth::new(&self.language)?;
        espeak.set_rate(self.wpm)?;
        espeak.synthesize_to(text, path)
    }

    fn set_rate(&mut self, wpm: u16) -> Result<()> {
        debug!("Setting rate to {} wpm", wpm);
        self.wpm = wpm;

        let features = self.tts.supported_features();
        if !features.rate {
            warn!("Rate control not supported on this platform");
            return Ok(());
        }

        let converted = Self::convert_rate(wpm, self.tts.min_rate(), self.tts.max_rate());
        self.tts
            .set_rate(converted)
            .map_err(|e| UtterError::Speech(format!("Failed to set rate: {}", e)))?;

        Ok(())
    }

    fn set_voice(&mut self, name: &str) -> Result<()> {
        debug!("Setting voice to {}", name);

        let voices = self
            .tts
            .voices()
            .map_err(|e| UtterError::Speech(format!("Failed to get voices: {}", e)))?;

        match voices
            .iter()
            .find(|v| v.name().eq_ignore_ascii_case(name) || v.id() == name)
        {
            Some(voice) => {
                debug!("Selecting voice: {:?}", voice);
                self.tts
                    .set_voice(voice)
                    .map_err(|e| UtterError::Speech(format!("Failed to set voice: {}", e)))?;
            }
            None => {
                warn!("No voice named '{}' (have {} voices)", name, voices.len());
            }
        }

        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "wav"
    }
}

/// List the voices the platform synthesizer offers
///
/// Returns one display line per voice: name, identifier and language.
pub fn list_voices() -> Result<Vec<String>> {
    let tts = TtsCrate::default()
        .map_err(|e| UtterError::Speech(format!("Failed to initialize TTS: {}", e)))?;

    let voices = tts
        .voices()
        .map_err(|e| UtterError::Speech(format!("Failed to get voices: {}", e)))?;

    Ok(voices
        .iter()
        .map(|v| format!("{} ({}, {})", v.name(), v.id(), v.language()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_conversion_endpoints() {
        assert_eq!(NativeSynth::convert_rate(80, 0.0, 100.0), 0.0);
        assert_eq!(NativeSynth::convert_rate(450, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_rate_conversion_midpoint() {
        // 265 wpm is halfway between 80 and 450
        let rate = NativeSynth::convert_rate(265, 0.0, 100.0);
        assert!((rate - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_rate_conversion_clamps_out_of_range() {
        assert_eq!(NativeSynth::convert_rate(0, 0.0, 100.0), 0.0);
        assert_eq!(NativeSynth::convert_rate(1000, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_create_native_synth() {
        // May fail in CI without speech-dispatcher or audio
        match NativeSynth::new("en") {
            Ok(_) => println!("✓ Native TTS backend initialized successfully"),
            Err(e) => println!("⚠ TTS initialization failed (may be expected in CI): {}", e),
        }
    }
}
