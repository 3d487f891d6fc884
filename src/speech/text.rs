//! Text chunking for the cloud endpoint
//!
//! The translate_tts endpoint rejects long queries, so text is split into
//! request-sized pieces before synthesis. Splits prefer sentence boundaries,
//! then whitespace; a single word longer than the limit is hard-split on
//! character boundaries.

/// Maximum characters per cloud request
///
/// The endpoint starts refusing queries around 200 characters; stay under it.
pub const MAX_CHUNK_CHARS: usize = 180;

/// Split text into chunks of at most `max_chars` characters
///
/// Never yields an empty chunk and never splits inside a UTF-8 character.
/// Whitespace runs are collapsed to single spaces within a chunk.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    debug_assert!(max_chars > 0);

    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for sentence in text.split_inclusive(['.', '!', '?', '\n']) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }

        let sentence_chars = sentence.chars().count();

        // Whole sentence fits into the current chunk
        if sentence_chars <= max_chars {
            let needed = if current.is_empty() {
                sentence_chars
            } else {
                current_chars + 1 + sentence_chars
            };
            if needed <= max_chars {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(sentence);
                current_chars = needed;
            } else {
                chunks.push(std::mem::take(&mut current));
                current.push_str(sentence);
                current_chars = sentence_chars;
            }
            continue;
        }

        // Sentence is too long on its own - pack word by word
        for word in sentence.split_whitespace() {
            let word_chars = word.chars().count();

            if word_chars > max_chars {
                // Single oversized word - hard split on character boundaries
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                    current_chars = 0;
                }
                for ch in word.chars() {
                    if current_chars == max_chars {
                        chunks.push(std::mem::take(&mut current));
                        current_chars = 0;
                    }
                    current.push(ch);
                    current_chars += 1;
                }
                continue;
            }

            let needed = if current.is_empty() {
                word_chars
            } else {
                current_chars + 1 + word_chars
            };
            if needed <= max_chars {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_chars = needed;
            } else {
                chunks.push(std::mem::take(&mut current));
                current.push_str(word);
                current_chars = word_chars;
            }
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
