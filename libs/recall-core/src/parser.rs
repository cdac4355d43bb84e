//! Parser for pasted word lists.
//!
//! # Format
//! ```text
//! AA a rough, cindery lava
//! AB an abdominal muscle
//! ZA
//! ```
//!
//! Each non-blank line is `WORD` or `WORD definition text...`. The word is everything
//! before the first space and is upper-cased. The definition is the trimmed remainder,
//! kept verbatim, and is absent when there is no space or nothing follows it.

use crate::error::{Result, ValidationError};
use crate::types::WordEntry;

/// Parse pasted text into word entries, preserving input order.
///
/// Repeated words are kept as separate entries.
pub fn parse(content: &str) -> Result<Vec<WordEntry>> {
    let entries: Vec<WordEntry> = content
        .lines()
        .map(trim_blank)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect();

    if entries.is_empty() {
        return Err(ValidationError::NoWords);
    }

    Ok(entries)
}

/// Parse a single trimmed, non-empty line.
fn parse_line(line: &str) -> WordEntry {
    match line.split_once(' ') {
        None => WordEntry {
            word: line.to_uppercase(),
            definition: None,
        },
        Some((word, rest)) => {
            let definition = trim_blank(rest);
            WordEntry {
                word: word.to_uppercase(),
                definition: (!definition.is_empty()).then(|| definition.to_string()),
            }
        }
    }
}

/// Trim whitespace and byte order marks from both ends, as pasted text may carry a BOM.
pub(crate) fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Render entries back into the text format accepted by [`parse`].
pub fn to_text(entries: &[WordEntry]) -> String {
    entries
        .iter()
        .map(|entry| match &entry.definition {
            Some(definition) => format!("{} {}", entry.word, definition),
            None => entry.word.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
