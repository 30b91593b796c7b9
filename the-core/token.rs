//! Whitespace splitting for single command lines.
//!
//! Tokens are borrowed from the input verbatim. Escape backslashes are kept in
//! the token, use [`crate::escape::unescape`] to remove them.

use crate::chars::char_is_space;

/// Splits `s` at every whitespace character that is not escaped by a
/// backslash.
///
/// Each separator closes exactly one token, so runs of whitespace produce
/// empty tokens and the last token is always pushed, even when it is empty.
/// The result is never empty.
///
/// ```
/// use the_core::token::tokenize;
///
/// assert_eq!(tokenize(r"cd foo\ bar"), [r"cd", r"foo\ bar"]);
/// assert_eq!(tokenize("a  b"), ["a", "", "b"]);
/// assert_eq!(tokenize(""), [""]);
/// ```
pub fn tokenize(s: &str) -> Vec<&str> {
  let mut tokens = Vec::new();
  let mut start = 0;
  let mut escaped = false;
  for (idx, ch) in s.char_indices() {
    if escaped {
      escaped = false;
      continue;
    }
    if ch == '\\' {
      escaped = true;
      continue;
    }
    if char_is_space(ch) {
      tokens.push(&s[start..idx]);
      start = idx + ch.len_utf8();
    }
  }
  tokens.push(&s[start..]);
  tokens
}

/// Splits off the first whitespace delimited word of `s`.
///
/// Leading whitespace is trimmed from both the word and the rest. This allows
/// consuming a line one word at a time without tokenizing the remainder.
pub fn split_word(s: &str) -> (&str, &str) {
  let s = s.trim_start_matches(char_is_space);
  match s.char_indices().find(|&(_, ch)| char_is_space(ch)) {
    Some((idx, _)) => (&s[..idx], s[idx..].trim_start_matches(char_is_space)),
    None => (s, ""),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[track_caller]
  fn assert_tokens(input: &str, expected: &[&str]) {
    assert_eq!(tokenize(input).as_slice(), expected);
  }

  #[test]
  fn tokenize_unquoted() {
    assert_tokens("", &[""]);
    assert_tokens("hello", &["hello"]);
    assert_tokens("hello world", &["hello", "world"]);
    assert_tokens("hello\tworld", &["hello", "world"]);
  }

  #[test]
  fn tokenize_whitespace_runs() {
    assert_tokens("a  b", &["a", "", "b"]);
    assert_tokens(" a", &["", "a"]);
    assert_tokens("a ", &["a", ""]);
    assert_tokens(" ", &["", ""]);
    assert_tokens("a \t b", &["a", "", "", "b"]);
  }

  #[test]
  fn tokenize_backslash() {
    assert_tokens(r"hello\ world", &[r"hello\ world"]);
    assert_tokens(r"one\ two three", &[r"one\ two", "three"]);
    assert_tokens(r"\n", &[r"\n"]);
    // Trailing backslash stays in the last token.
    assert_tokens(r"hello\", &[r"hello\"]);
    assert_tokens(r"a b\", &["a", r"b\"]);
  }

  #[test]
  fn tokenize_backslash_parity() {
    // An escaped backslash does not escape the following space.
    assert_tokens(r"a\\ b", &[r"a\\", "b"]);
    assert_tokens(r"a\\\ b", &[r"a\\\ b"]);
  }

  #[test]
  fn tokenize_multibyte() {
    assert_tokens("日本 語", &["日本", "語"]);
    assert_tokens("日本\u{3000}語", &["日本", "語"]);
    assert_tokens("日本\\\u{3000}語", &["日本\\\u{3000}語"]);
  }

  #[test]
  fn test_split_word() {
    assert_eq!(split_word(""), ("", ""));
    assert_eq!(split_word("   "), ("", ""));
    assert_eq!(split_word("map"), ("map", ""));
    assert_eq!(split_word("  map  "), ("map", ""));
    assert_eq!(split_word("map x  :quit"), ("map", "x  :quit"));
    assert_eq!(split_word("\tset  hidden true "), ("set", "hidden true "));
  }

  #[test]
  fn split_word_consumes_one_word_at_a_time() {
    let mut rest = "  push  :cd<space> ";
    let mut words = Vec::new();
    while !rest.is_empty() {
      let (word, next) = split_word(rest);
      words.push(word);
      rest = next;
    }
    assert_eq!(words, ["push", ":cd<space>"]);
  }
}
