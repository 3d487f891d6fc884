//! Interactive mode
//!
//! Reads lines from stdin and speaks each one through the facade until
//! the user quits. Speech errors are printed per line and do not end
//! the loop.

use crate::speech::TextToSpeech;
use crate::Result;
use std::io::{self, BufRead, Write};

/// Run the interactive loop until 'q' or end of input
pub fn run(tts: &mut TextToSpeech) -> Result<()> {
    println!("Interactive mode ({} engine, language '{}')", tts.engine(), tts.language());
    println!("Type text to speak it, 'q' to quit");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let text = line.trim();
        if text.eq_ignore_ascii_case("q") {
            println!("Exiting.");
            break;
        }
        if text.is_empty() {
            println!("Please enter some text.");
            continue;
        }

        if let Err(e) = tts.speak(text) {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}
