//! Usage demos
//!
//! A set of canned scenarios demonstrating the facade, runnable one at a
//! time or all together via `--demo`. Each demo catches errors from the
//! facade and prints them instead of aborting the run, so a missing
//! network connection or speech engine only fails the demos that need it.

use crate::config::Config;
use crate::speech::{Engine, TextToSpeech};
use crate::{Result, UtterError};

/// One demo entry: menu number, title, runner
type Demo = (&'static str, &'static str, fn(&Config) -> Result<()>);

const DEMOS: &[Demo] = &[
    ("1", "Basic speech (gtts)", demo_basic_speech),
    ("2", "Save speech to a file", demo_save_to_file),
    ("3", "Offline engine (native)", demo_offline_engine),
    ("4", "Rate control", demo_rate_control),
    ("5", "Second language", demo_second_language),
    ("6", "Long text to file", demo_long_text),
    ("7", "Engine comparison", demo_compare_engines),
];

/// Run one demo by menu number, or all of them
///
/// Demo failures are printed, not propagated; only an unknown choice is
/// an error.
pub fn run(choice: &str, config: &Config) -> Result<()> {
    if choice.eq_ignore_ascii_case("all") {
        for (_, title, demo) in DEMOS {
            run_one(title, *demo, config);
        }
        println!("\n✓ All demos finished");
        return Ok(());
    }

    match DEMOS.iter().find(|(num, _, _)| *num == choice) {
        Some((_, title, demo)) => {
            run_one(title, *demo, config);
            Ok(())
        }
        None => {
            println!("Available demos:");
            for (num, title, _) in DEMOS {
                println!("  {}. {}", num, title);
            }
            Err(UtterError::Other(format!(
                "Invalid demo choice '{}' (use 1-{} or 'all')",
                choice,
                DEMOS.len()
            )))
        }
    }
}

/// Print the banner, run the demo, translate errors to a message
fn run_one(title: &str, demo: fn(&Config) -> Result<()>, config: &Config) {
    println!("\n{}", "=".repeat(50));
    println!("Demo: {}", title);
    println!("{}", "=".repeat(50));

    if let Err(e) = demo(config) {
        println!("Error: {}", e);
    }
}

fn demo_basic_speech(config: &Config) -> Result<()> {
    let mut tts = TextToSpeech::new(Engine::Gtts, "en", config)?;
    tts.speak("Hello! I am a text to speech program.")
}

fn demo_save_to_file(config: &Config) -> Result<()> {
    let mut tts = TextToSpeech::new(Engine::Gtts, "en", config)?;
    let saved = tts.save_to_file("This text will be saved as an MP3 file.", "output")?;
    println!("Saved: {}", saved.display());
    Ok(())
}

fn demo_offline_engine(config: &Config) -> Result<()> {
    let mut tts = TextToSpeech::new(Engine::Native, "en", config)?;
    tts.speak("I work without an internet connection!")
}

fn demo_rate_control(config: &Config) -> Result<()> {
    let mut tts = TextToSpeech::new(Engine::Native, "en", config)?;

    println!("\nSlow speech (100 words per minute):");
    tts.set_rate(100)?;
    tts.speak("I am speaking slowly.")?;

    println!("\nNormal speech (175 words per minute):");
    tts.set_rate(175)?;
    tts.speak("I am speaking at a normal pace.")?;

    println!("\nFast speech (250 words per minute):");
    tts.set_rate(250)?;
    tts.speak("I am speaking quickly.")
}

fn demo_second_language(config: &Config) -> Result<()> {
    let mut tts = TextToSpeech::new(Engine::Gtts, "tr", config)?;
    tts.speak("Merhaba! Ben bir metin okuma programıyım.")
}

fn demo_long_text(config: &Config) -> Result<()> {
    let long_text = "Turkey is a country located between the continents of Asia \
                     and Europe. Its capital is Ankara. Its most populous city is \
                     Istanbul. The population of Turkey is around 85 million.";

    let mut tts = TextToSpeech::new(Engine::Gtts, "en", config)?;
    let saved = tts.save_to_file(long_text, "long_text")?;
    println!("Saved: {}", saved.display());
    Ok(())
}

fn demo_compare_engines(config: &Config) -> Result<()> {
    let text = "This text is spoken by both engines.";

    println!("\n1. gtts (online, high quality):");
    let mut cloud = TextToSpeech::new(Engine::Gtts, "en", config)?;
    cloud.speak(text)?;

    println!("\n2. native (offline, fast):");
    let mut native = TextToSpeech::new(Engine::Native, "en", config)?;
    native.speak(text)
}
