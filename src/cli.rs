//! Command line interface definition

use crate::speech::Engine;
use clap::Parser;

/// Speak text aloud or save it as an audio file
///
/// Delegates synthesis to one of two engines: `gtts` (online, MP3) or
/// `native` (offline platform TTS, WAV files). Defaults for the engine,
/// language, rate and voice come from ~/.utter.cfg.
#[derive(Parser, Debug)]
#[command(name = "utter")]
#[command(about = "Speak text aloud or save it as an audio file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Text to speak or save
    pub text: Option<String>,

    /// Speech engine to use
    #[arg(long, short, value_enum)]
    pub engine: Option<Engine>,

    /// Language code passed through to the engine (e.g. en, tr, fr)
    #[arg(long, short)]
    pub lang: Option<String>,

    /// Save to this file instead of speaking (extension added if missing)
    #[arg(long, short)]
    pub output: Option<String>,

    /// Speech rate in words per minute (80-450, native engine only)
    #[arg(long, short)]
    pub rate: Option<u16>,

    /// Voice name (native engine only)
    #[arg(long)]
    pub voice: Option<String>,

    /// List the voices the native engine offers and exit
    #[arg(long)]
    pub list_voices: bool,

    /// Interactive mode: read lines from stdin and speak each one
    #[arg(long, short)]
    pub interactive: bool,

    /// Run a usage demo (1-7, or "all")
    #[arg(long, value_name = "CHOICE")]
    pub demo: Option<String>,

    /// Write debug logs to utter.log
    #[arg(long, short)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["utter", "hello world"]).unwrap();
        assert_eq!(cli.text.as_deref(), Some("hello world"));
        assert_eq!(cli.engine, None);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "utter", "hello", "--engine", "native", "--lang", "tr", "--output", "out",
            "--rate", "200", "--voice", "en-gb",
        ])
        .unwrap();
        assert_eq!(cli.engine, Some(Engine::Native));
        assert_eq!(cli.lang.as_deref(), Some("tr"));
        assert_eq!(cli.output.as_deref(), Some("out"));
        assert_eq!(cli.rate, Some(200));
        assert_eq!(cli.voice.as_deref(), Some("en-gb"));
    }

    #[test]
    fn test_invalid_engine_rejected() {
        assert!(Cli::try_parse_from(["utter", "hi", "--engine", "pyttsx3"]).is_err());
    }

    #[test]
    fn test_demo_takes_choice() {
        let cli = Cli::try_parse_from(["utter", "--demo", "all"]).unwrap();
        assert_eq!(cli.demo.as_deref(), Some("all"));
        assert_eq!(cli.text, None);
    }
}
