//! Status-line formatting.
//!
//! The status line has a fixed byte-level shape: `", "` and `": "` separators,
//! with every non-ASCII character escaped as `\uXXXX` (surrogate pairs above
//! the BMP), so stdout is always plain ASCII on one line.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

/// Single-line formatter with spaced separators and ASCII-only output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
  fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
  where
    W: ?Sized + Write,
  {
    if first {
      Ok(())
    } else {
      writer.write_all(b", ")
    }
  }

  fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
  where
    W: ?Sized + Write,
  {
    if first {
      Ok(())
    } else {
      writer.write_all(b", ")
    }
  }

  fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
  where
    W: ?Sized + Write,
  {
    writer.write_all(b": ")
  }

  fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
  where
    W: ?Sized + Write,
  {
    let mut start = 0;
    for (i, ch) in fragment.char_indices() {
      if ch.is_ascii() {
        continue;
      }
      writer.write_all(&fragment.as_bytes()[start..i])?;
      let mut units = [0u16; 2];
      for unit in ch.encode_utf16(&mut units) {
        write!(writer, "\\u{:04x}", unit)?;
      }
      start = i + ch.len_utf8();
    }
    writer.write_all(&fragment.as_bytes()[start..])
  }
}

/// Serialize `value` as one status line (no trailing newline).
pub fn to_status_line<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
  let mut buf = Vec::new();
  let mut ser = Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
  value.serialize(&mut ser)?;
  // Formatter only emits ASCII.
  Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serialize `value` the way the response file is written: two-space indent,
/// non-ASCII left literal.
pub fn to_pretty_bytes<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
  serde_json::to_vec_pretty(value)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn status_line_uses_spaced_separators() {
    let line = to_status_line(&json!({"success": true, "message": "API call successful"})).unwrap();
    assert_eq!(line, r#"{"success": true, "message": "API call successful"}"#);
  }

  #[test]
  fn status_line_escapes_non_ascii() {
    let line = to_status_line(&json!({"details": "模型 é 😀", "list": [1, 2]})).unwrap();
    assert_eq!(
      line,
      r#"{"details": "\u6a21\u578b \u00e9 \ud83d\ude00", "list": [1, 2]}"#
    );
  }

  #[test]
  fn status_line_keeps_standard_escapes() {
    let line = to_status_line(&json!({"details": "a \"b\"\nc"})).unwrap();
    assert_eq!(line, r#"{"details": "a \"b\"\nc"}"#);
  }

  #[test]
  fn pretty_output_indents_two_spaces_and_keeps_unicode() {
    let bytes = to_pretty_bytes(&json!({"reply": "你好", "n": [1]})).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text, "{\n  \"reply\": \"你好\",\n  \"n\": [\n    1\n  ]\n}");
  }
}
