//! Format bytes for trace logging.

use alloc::{format, string::String};
use core::str;

/// Format an optional byte (`none` means eof).
pub fn format_byte_opt(byte: Option<u8>) -> String {
    match byte {
        None => "end of file".into(),
        Some(byte) => format!("byte {}", format_byte(byte)),
    }
}

/// Format a byte (`u8`).
pub fn format_byte(byte: u8) -> String {
    let representation = format!("U+{:>04X}", byte);
    let printable = match byte {
        b'`' => Some("`` ` ``".into()),
        b'!'..=b'~' => Some(format!("`{}`", str::from_utf8(&[byte]).unwrap())),
        _ => None,
    };

    if let Some(char) = printable {
        format!("{} ({})", char, representation)
    } else {
        representation
    }
}
