//! Speech synthesizer abstraction
//!
//! A unified interface over the two speech engines. The `TextToSpeech`
//! facade validates input, resolves output paths, and forwards everything
//! else to whichever backend was selected at construction time.

use crate::config::Config;
use crate::{Result, UtterError};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Slowest supported speech rate in words per minute
pub const MIN_WPM: u16 = 80;

/// Fastest supported speech rate in words per minute
pub const MAX_WPM: u16 = 450;

/// Which external speech engine to delegate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Engine {
    /// Online cloud endpoint, produces MP3 (requires network)
    Gtts,
    /// Offline platform synthesizer, produces WAV files
    Native,
}

impl FromStr for Engine {
    type Err = UtterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gtts" => Ok(Engine::Gtts),
            "native" => Ok(Engine::Native),
            other => Err(UtterError::InvalidEngine(other.to_string())),
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Engine::Gtts => write!(f, "gtts"),
            Engine::Native => write!(f, "native"),
        }
    }
}

/// Speech synthesizer trait
///
/// Both engines implement this. All calls are synchronous and blocking;
/// `speak` returns once the utterance has finished playing.
pub trait Synth: Send {
    /// Speak text aloud
    fn speak(&mut self, text: &str) -> Result<()>;

    /// Synthesize text into an audio file at `path`
    fn synthesize_to(&mut self, text: &str, path: &Path) -> Result<()>;

    /// Set speech rate in words per minute (engines that cannot honor
    /// it log a warning and ignore it)
    fn set_rate(&mut self, wpm: u16) -> Result<()>;

    /// Select a voice by name (engine-specific; ignored where unsupported)
    fn set_voice(&mut self, name: &str) -> Result<()>;

    /// Extension of the audio format this engine produces ("mp3" or "wav")
    fn file_extension(&self) -> &'static str;
}

/// Create the backend for the chosen engine
///
/// The native engine follows a fallback chain: the platform synthesizer
/// via the tts crate first, then the espeak-ng subprocess. Both failures
/// are reported together when neither is available.
pub fn create_synth(engine: Engine, language: &str, config: &Config) -> Result<Box<dyn Synth>> {
    match engine {
        Engine::Gtts => {
            info!("Using cloud engine (language '{}')", language);
            use super::backends::cloud::CloudSynth;

            let synth = CloudSynth::new(
                language,
                config.gtts_host(),
                Duration::from_secs(config.gtts_timeout_secs()),
            )?;
            Ok(Box::new(synth))
        }
        Engine::Native => {
            info!("Using native engine (language '{}')", language);

            info!("Trying platform TTS backend...");
            use super::backends::native::NativeSynth;

            let native_err = match NativeSynth::new(language) {
                Ok(synth) => {
                    info!("✓ Successfully initialized platform TTS backend");
                    return Ok(Box::new(synth));
                }
                Err(e) => {
                    info!("✗ Platform TTS unavailable: {}", e);
                    e
                }
            };

            info!("Trying espeak-ng backend...");
            use super::backends::espeak::EspeakSynth;

            match EspeakSynth::new(language) {
                Ok(synth) => {
                    info!("✓ Successfully initialized espeak-ng backend");
                    Ok(Box::new(synth))
                }
                Err(e) => Err(UtterError::Speech(format!(
                    "No offline speech backend available. Tried:\n\
                     1. Platform TTS ({})\n\
                     2. espeak-ng ({})",
                    native_err, e
                ))),
            }
        }
    }
}

/// Append the engine's extension when the path has none
///
/// `out` becomes `out.mp3` (or `out.wav`); a path that already carries an
/// extension is left untouched.
pub fn resolve_output_path(path: &str, extension: &str) -> PathBuf {
    if Path::new(path).extension().is_some() {
        PathBuf::from(path)
    } else {
        PathBuf::from(format!("{}.{}", path, extension))
    }
}

/// The facade wrapping the selected engine
///
/// Holds the engine choice, the language, and the backend; exposes the
/// speak and save-to-file operations the CLI, demos and REPL call.
pub struct TextToSpeech {
    engine: Engine,
    language: String,
    synth: Box<dyn Synth>,
}

impl TextToSpeech {
    /// Construct a facade for the given engine and language
    pub fn new(engine: Engine, language: &str, config: &Config) -> Result<Self> {
        let synth = create_synth(engine, language, config)?;
        Ok(Self {
            engine,
            language: language.to_string(),
            synth,
        })
    }

    /// Construct a facade around an existing backend (used by tests)
    pub fn with_synth(engine: Engine, language: &str, synth: Box<dyn Synth>) -> Self {
        Self {
            engine,
            language: language.to_string(),
            synth,
        }
    }

    /// Engine this facade delegates to
    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Language code passed through to the engine
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Set speech rate, clamped to the supported range
    pub fn set_rate(&mut self, wpm: u16) -> Result<()> {
        let clamped = wpm.clamp(MIN_WPM, MAX_WPM);
        if clamped != wpm {
            warn!("Rate {} wpm out of range, clamped to {}", wpm, clamped);
        }
        self.synth.set_rate(clamped)
    }

    /// Select a voice by name
    pub fn set_voice(&mut self, name: &str) -> Result<()> {
        self.synth.set_voice(name)
    }

    /// Speak text aloud, blocking until the utterance finishes
    ///
    /// Empty or whitespace-only text is rejected before any backend call.
    pub fn speak(&mut self, text: &str) -> Result<()> {
        Self::validate_text(text)?;
        debug!("Speaking {} chars via {}", text.chars().count(), self.engine);
        self.synth.speak(text.trim())
    }

    /// Save text as an audio file, returning the resolved path
    ///
    /// The engine's extension is appended when the filename has none.
    pub fn save_to_file(&mut self, text: &str, path: &str) -> Result<PathBuf> {
        Self::validate_text(text)?;

        let resolved = resolve_output_path(path, self.synth.file_extension());
        self.synth.synthesize_to(text.trim(), &resolved)?;
        info!("Saved audio to {:?}", resolved);
        Ok(resolved)
    }

    /// Reject empty input before it reaches a backend
    fn validate_text(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(UtterError::EmptyText);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records calls instead of making noise
    struct RecordingSynth {
        calls: Arc<Mutex<Vec<String>>>,
        extension: &'static str,
    }

    impl Synth for RecordingSynth {
        fn speak(&mut self, text: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("speak:{}", text));
            Ok(())
        }

        fn synthesize_to(&mut self, text: &str, path: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("save:{}:{}", text, path.display()));
            Ok(())
        }

        fn set_rate(&mut self, wpm: u16) -> Result<()> {
            self.calls.lock().unwrap().push(format!("rate:{}", wpm));
            Ok(())
        }

        fn set_voice(&mut self, name: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("voice:{}", name));
            Ok(())
        }

        fn file_extension(&self) -> &'static str {
            self.extension
        }
    }

    fn recording_facade(extension: &'static str) -> (TextToSpeech, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let synth = RecordingSynth {
            calls: calls.clone(),
            extension,
        };
        let tts = TextToSpeech::with_synth(Engine::Gtts, "en", Box::new(synth));
        (tts, calls)
    }

    #[test]
    fn test_engine_from_str() {
        assert_eq!("gtts".parse::<Engine>().unwrap(), Engine::Gtts);
        assert_eq!("native".parse::<Engine>().unwrap(), Engine::Native);
        assert_eq!("GTTS".parse::<Engine>().unwrap(), Engine::Gtts);
    }

    #[test]
    fn test_invalid_engine_rejected() {
        let err = "pyttsx3".parse::<Engine>().unwrap_err();
        assert!(matches!(err, UtterError::InvalidEngine(ref name) if name == "pyttsx3"));
        assert!("".parse::<Engine>().is_err());
    }

    #[test]
    fn test_engine_display_round_trips() {
        for engine in [Engine::Gtts, Engine::Native] {
            assert_eq!(engine.to_string().parse::<Engine>().unwrap(), engine);
        }
    }

    #[test]
    fn test_resolve_output_path_appends_extension() {
        assert_eq!(resolve_output_path("out", "mp3"), PathBuf::from("out.mp3"));
        assert_eq!(
            resolve_output_path("speech/out", "wav"),
            PathBuf::from("speech/out.wav")
        );
    }

    #[test]
    fn test_resolve_output_path_keeps_existing_extension() {
        assert_eq!(
            resolve_output_path("out.mp3", "mp3"),
            PathBuf::from("out.mp3")
        );
        // Even a mismatched extension is the user's choice
        assert_eq!(
            resolve_output_path("out.ogg", "mp3"),
            PathBuf::from("out.ogg")
        );
    }

    #[test]
    fn test_empty_text_rejected_before_backend_call() {
        let (mut tts, calls) = recording_facade("mp3");

        assert!(matches!(tts.speak(""), Err(UtterError::EmptyText)));
        assert!(matches!(tts.speak("   \n\t"), Err(UtterError::EmptyText)));
        assert!(matches!(
            tts.save_to_file("", "out"),
            Err(UtterError::EmptyText)
        ));

        assert!(calls.lock().unwrap().is_empty(), "backend must not be called");
    }

    #[test]
    fn test_speak_forwards_trimmed_text() {
        let (mut tts, calls) = recording_facade("mp3");
        tts.speak("  hello  ").unwrap();
        assert_eq!(calls.lock().unwrap().as_slice(), ["speak:hello"]);
    }

    #[test]
    fn test_save_appends_engine_extension() {
        let (mut tts, calls) = recording_facade("mp3");
        let path = tts.save_to_file("hello", "greeting").unwrap();
        assert_eq!(path, PathBuf::from("greeting.mp3"));
        assert_eq!(
            calls.lock().unwrap().as_slice(),
            ["save:hello:greeting.mp3"]
        );
    }

    #[test]
    fn test_rate_clamped_to_supported_range() {
        let (mut tts, calls) = recording_facade("wav");
        tts.set_rate(10).unwrap();
        tts.set_rate(175).unwrap();
        tts.set_rate(9000).unwrap();
        assert_eq!(
            calls.lock().unwrap().as_slice(),
            ["rate:80", "rate:175", "rate:450"]
        );
    }
}
