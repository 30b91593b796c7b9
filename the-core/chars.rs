#[derive(Debug, Eq, PartialEq)]
pub enum CharCategory {
  Whitespace,
  Digit,
  Special,
  Other,
}

pub fn categorize_char(ch: char) -> CharCategory {
  match ch {
    c if char_is_space(c) => CharCategory::Whitespace,
    c if char_is_digit(c) => CharCategory::Digit,
    c if char_is_special(c) => CharCategory::Special,
    _ => CharCategory::Other,
  }
}

/// Unicode `White_Space`. This is what every splitter in the crate treats as a
/// separator.
#[inline]
pub fn char_is_space(ch: char) -> bool {
  ch.is_whitespace()
}

/// Characters with a meaning of their own in command and config lines: the
/// escape character, the command separator and the comment marker.
#[inline]
pub fn char_is_special(ch: char) -> bool {
  matches!(ch, '\\' | ';' | '#')
}

/// Whether `ch` gets a backslash in front of it when escaped.
#[inline]
pub fn char_is_escapable(ch: char) -> bool {
  char_is_space(ch) || char_is_special(ch)
}

/// ASCII digits only. Other numeric scripts sort lexically.
#[inline]
pub fn char_is_digit(ch: char) -> bool {
  ch.is_ascii_digit()
}
