//! Copy to clipboard via OSC 52
//!
//! The terminal forwards the payload to the system clipboard, which also
//! works over SSH. Terminals without OSC 52 support ignore the sequence.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Write;

/// OSC 52 "set clipboard" sequence for `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Write `text` to the clipboard through the terminal
pub fn copy_to_clipboard<W: Write>(writer: &mut W, text: &str) -> std::io::Result<()> {
    writer.write_all(osc52_sequence(text).as_bytes())?;
    writer.flush()
}
