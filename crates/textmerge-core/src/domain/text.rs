//! Text model and line splitting
//!
//! Raw text is split into lines while remembering the detected line-ending
//! style, so the original input can be reconstructed byte-for-byte from the
//! line list alone.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::LineEnding;

/// A text split into lines, plus its detected line-ending style
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Lines with no trailing separator characters
    pub lines: Vec<String>,
    /// Separator style detected from its first occurrence in the input
    pub line_ending: LineEnding,
}

impl Text {
    /// Rejoins the lines with the detected separator.
    ///
    /// For any input with a recognized line ending this reproduces the
    /// original text exactly. With [`LineEnding::None`] the line list is
    /// empty and the result is the empty string.
    pub fn join(&self) -> String {
        self.lines.join(self.line_ending.separator())
    }
}

/// Splits `text` into lines, detecting the separator from its first occurrence.
///
/// A lone `\r` is upgraded to `\r\n` when immediately followed by `\n`.
/// Splitting is exact substring segmentation: a trailing separator yields a
/// final empty line, so [`Text::join`] always restores the input.
///
/// Empty input yields an empty [`Text`]. Non-empty input containing no
/// separator at all cannot be split safely; it also yields an empty
/// [`Text`] with [`LineEnding::None`], and the condition is logged as a
/// warning rather than raised as an error.
pub fn split_lines(text: &str) -> Text {
    if text.is_empty() {
        return Text::default();
    }

    let line_ending = detect_line_ending(text);
    if line_ending == LineEnding::None {
        warn!(len = text.len(), "unable to detect line ending");
        return Text::default();
    }

    let lines = text
        .split(line_ending.separator())
        .map(str::to_owned)
        .collect();

    Text { lines, line_ending }
}

/// Finds the first `\r`, `\n` or `\r\n` in the text
fn detect_line_ending(text: &str) -> LineEnding {
    let bytes = text.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    return LineEnding::CrLf;
                }
                return LineEnding::Cr;
            }
            b'\n' => return LineEnding::Lf,
            _ => {}
        }
    }
    LineEnding::None
}
