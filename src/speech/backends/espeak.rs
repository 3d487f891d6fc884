//! espeak-ng subprocess backend
//!
//! Offline synthesis by shelling out to espeak-ng. Serves two roles:
//! fallback when the platform TTS cannot be initialized, and WAV file
//! output for the native engine (platform synthesizers play audio but
//! do not write files).
//!
//! Dependencies:
//! - espeak-ng (install with: sudo apt install espeak-ng)

use crate::speech::Synth;
use crate::{Result, UtterError};
use log::{debug, error};
use std::path::Path;
use std::process::{Command, Stdio};

/// espeak-ng subprocess backend
pub struct EspeakSynth {
    /// Path to espeak-ng
    espeak_path: String,

    /// Language code passed to -v
    language: String,

    /// Speech rate in words per minute, passed to -s
    wpm: u16,

    /// Explicit voice name, overrides the language for -v
    voice: Option<String>,
}

impl EspeakSynth {
    /// Create a new espeak-ng synthesizer
    ///
    /// Verifies espeak-ng is installed and runnable
    pub fn new(language: &str) -> Result<Self> {
        debug!("Creating espeak-ng backend");

        let espeak_path = Self::find_espeak()?;
        debug!("Found espeak-ng at: {}", espeak_path);

        Ok(Self {
            espeak_path,
            language: language.to_string(),
            wpm: 175,
            voice: None,
        })
    }

    /// Find espeak-ng executable
    fn find_espeak() -> Result<String> {
        let paths = vec!["espeak-ng", "/usr/bin/espeak-ng"];

        for path in paths {
            if let Ok(status) = Command::new(path)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
            {
                if status.success() {
                    return Ok(path.to_string());
                }
            }
        }

        Err(UtterError::Speech(
            "espeak-ng not found. Install with: sudo apt install espeak-ng".to_string(),
        ))
    }

    /// Voice argument for -v: explicit voice name if set, else the language
    fn voice_arg(&self) -> &str {
        self.voice.as_deref().unwrap_or(&self.language)
    }

    /// Run espeak-ng to completion, optionally writing a WAV file
    fn run(&self, text: &str, wav_out: Option<&Path>) -> Result<()> {
        let mut cmd = Command::new(&self.espeak_path);
        cmd.arg("-v").arg(self.voice_arg());
        cmd.arg("-s").arg(self.wpm.to_string());
        if let Some(path) = wav_out {
            cmd.arg("-w").arg(path);
        }
        cmd.arg(text);
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        // Blocking by design: the CLI waits for the utterance to finish
        let status = cmd.status().map_err(|e| {
            error!("Failed to spawn espeak-ng: {}", e);
            UtterError::Speech(format!("Failed to start espeak-ng: {}", e))
        })?;

        if !status.success() {
            return Err(UtterError::Speech(format!(
                "espeak-ng exited with {} (voice '{}' may be unknown)",
                status,
                self.voice_arg()
            )));
        }

        Ok(())
    }
}

impl Synth for EspeakSynth {
    fn speak(&mut self, text: &str) -> Result<()> {
        debug!("Speaking via espeak-ng: {}", text);
        self.run(text, None)
    }

    fn synthesize_to(&mut self, text: &str, path: &Path) -> Result<()> {
        debug!("Writing WAV via espeak-ng to {:?}", path);
        self.run(text, Some(path))
    }

    fn set_rate(&mut self, wpm: u16) -> Result<()> {
        debug!("Setting espeak-ng rate to {} wpm", wpm);
        self.wpm = wpm;
        Ok(())
    }

    fn set_voice(&mut self, name: &str) -> Result<()> {
        debug!("Setting espeak-ng voice to {}", name);
        self.voice = Some(name.to_string());
        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "wav"
    }
}
