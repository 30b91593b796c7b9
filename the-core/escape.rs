//! Backslash escaping for whitespace and special characters.
//!
//! Escaped strings can be embedded in whitespace separated command lines
//! without being split, see [`crate::token::tokenize`].

use crate::chars::char_is_escapable;

/// Prefixes whitespace, `\`, `;` and `#` with a backslash.
pub fn escape(s: &str) -> String {
  let mut buf = String::with_capacity(s.len());
  for ch in s.chars() {
    if char_is_escapable(ch) {
      buf.push('\\');
    }
    buf.push(ch);
  }
  buf
}

/// Removes the backslashes that [`escape`] adds.
///
/// A backslash in front of a character that is not escapable is kept as is, so
/// `\n` stays a two character string. A lone backslash at the end of the input
/// is kept as well.
pub fn unescape(s: &str) -> String {
  let mut buf = String::with_capacity(s.len());
  let mut escaped = false;
  for ch in s.chars() {
    if escaped {
      if !char_is_escapable(ch) {
        buf.push('\\');
      }
      buf.push(ch);
      escaped = false;
      continue;
    }
    if ch == '\\' {
      escaped = true;
      continue;
    }
    buf.push(ch);
  }
  if escaped {
    buf.push('\\');
  }
  buf
}
