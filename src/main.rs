//! utter main entry point
//!
//! Parses the command line, loads configuration, and runs exactly one
//! mode per invocation: list voices, a demo, the interactive loop, or a
//! single speak/save operation.

use clap::Parser;
use log::{debug, error, info};
use std::process;
use utter::cli::Cli;
use utter::config::Config;
use utter::speech::{backends::native, Engine, TextToSpeech};
use utter::{demos, repl, Result, UtterError};

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    if cli.debug {
        // Debug mode: write to utter.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("utter.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open utter.log for debug logging: {}", e);
                eprintln!("Continuing without file logging...");
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "utter version {} starting (debug mode, logging to utter.log)",
            utter::VERSION
        );
    } else {
        // Normal mode: minimal logging to stderr, only errors
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    if let Err(e) = run(cli) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    debug!("Configuration loaded from {:?}", config.path());

    // Command line flags override config defaults
    let engine = match cli.engine {
        Some(engine) => engine,
        None => config.engine()?,
    };
    let language = cli.lang.unwrap_or_else(|| config.language());
    let voice = cli.voice.or_else(|| config.voice());

    if cli.list_voices {
        let voices = native::list_voices()?;
        if voices.is_empty() {
            println!("No voices available");
        } else {
            for line in &voices {
                println!("{}", line);
            }
        }
        return Ok(());
    }

    if let Some(choice) = cli.demo {
        return demos::run(&choice, &config);
    }

    let mut tts = TextToSpeech::new(engine, &language, &config)?;

    // Rate is only meaningful to the native engine; an explicit --rate is
    // still forwarded so the engine can say it ignores it
    if let Some(wpm) = cli.rate {
        tts.set_rate(wpm)?;
    } else if engine == Engine::Native {
        tts.set_rate(config.rate())?;
    }

    if let Some(name) = voice {
        tts.set_voice(&name)?;
    }

    if cli.interactive {
        return repl::run(&mut tts);
    }

    let text = cli.text.ok_or_else(|| {
        UtterError::Other(
            "No text given. Pass TEXT, or use --interactive or --demo (see --help).".to_string(),
        )
    })?;

    match cli.output {
        Some(path) => {
            let saved = tts.save_to_file(&text, &path)?;
            println!("Saved: {}", saved.display());
        }
        None => {
            info!("Speaking via {} engine", engine);
            tts.speak(&text)?;
        }
    }

    Ok(())
}
