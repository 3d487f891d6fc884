//! Cloud TTS backend
//!
//! Synthesizes speech through the Google Translate text-to-speech endpoint
//! (the same one the gTTS tooling uses) and returns MP3 audio. Long input
//! is split into request-sized chunks and the MP3 segments are played or
//! written back to back.
//!
//! The endpoint contract is not ours: the request is a plain GET with the
//! language and text as query parameters, the response body is raw MP3.

use crate::speech::text::{split_into_chunks, MAX_CHUNK_CHARS};
use crate::speech::Synth;
use crate::{audio, Result, UtterError};
use log::{debug, warn};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Cloud TTS backend
pub struct CloudSynth {
    /// Blocking HTTP client with the configured timeout
    client: reqwest::blocking::Client,

    /// Host serving the translate_tts endpoint
    host: String,

    /// Language code passed as the tl query parameter
    language: String,
}

impl CloudSynth {
    /// Create a new cloud synthesizer
    pub fn new(language: &str, host: String, timeout: Duration) -> Result<Self> {
        debug!("Creating cloud backend for host {}", host);

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            host,
            language: language.to_string(),
        })
    }

    /// Fetch MP3 audio for one chunk of text
    fn fetch_chunk(&self, chunk: &str) -> Result<Vec<u8>> {
        let url = format!("{}/translate_tts", self.host);
        debug!("Requesting {} chars from {}", chunk.chars().count(), url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.language.as_str()),
                ("q", chunk),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(UtterError::Speech(format!(
                "Cloud TTS returned HTTP {} (language '{}' may be unsupported)",
                status, self.language
            )));
        }

        Ok(response.bytes()?.to_vec())
    }

    /// Synthesize text to MP3 bytes
    ///
    /// Chunks are fetched in order and concatenated; MP3 frames are
    /// self-contained so the segments join cleanly.
    pub fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let chunks = split_into_chunks(text, MAX_CHUNK_CHARS);
        debug!("Synthesizing {} chunk(s)", chunks.len());

        let mut mp3 = Vec::new();
        for chunk in &chunks {
            mp3.extend_from_slice(&self.fetch_chunk(chunk)?);
        }
        Ok(mp3)
    }
}

impl Synth for CloudSynth {
    fn speak(&mut self, text: &str) -> Result<()> {
        let mp3 = self.synthesize(text)?;

        // Scoped temporary file: written before playback, deleted when
        // the guard drops
        let mut tmp = tempfile::Builder::new()
            .prefix("utter-")
            .suffix(".mp3")
            .tempfile()?;
        tmp.write_all(&mp3)?;
        tmp.flush()?;

        audio::play_file(tmp.path())
    }

    fn synthesize_to(&mut self, text: &str, path: &Path) -> Result<()> {
        let mp3 = self.synthesize(text)?;
        std::fs::write(path, &mp3)?;
        debug!("Wrote {} bytes to {:?}", mp3.len(), path);
        Ok(())
    }

    fn set_rate(&mut self, _wpm: u16) -> Result<()> {
        // Not part of the endpoint contract
        warn!("The gtts engine does not support rate control, ignoring");
        Ok(())
    }

    fn set_voice(&mut self, _name: &str) -> Result<()> {
        warn!("The gtts engine selects its voice from the language, ignoring");
        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "mp3"
    }
}
