//! Reading whitespace separated fields from configuration files.
//!
//! Every non-empty line becomes one row of fields. Single or double quotes
//! protect whitespace, `#` outside of quotes starts a comment that runs to the
//! end of the line.
//!
//! ```text
//! # mime type      program
//! text/plain       nvim
//! image/png        'feh --scale-down'
//! ```
//!
//! Parsing happens in two passes with their own quote state. The first pass
//! finds field boundaries on the whole line, the second one removes the quote
//! characters from each field separately. A quote of one kind inside a quote of
//! the other kind is kept literally.

use std::{
  borrow::Cow,
  fmt,
  io::{
    self,
    BufRead,
  },
};

use the_core::chars::char_is_space;
use thiserror::Error;

/// The accepted number of fields per row, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBound {
  pub min: usize,
  pub max: usize,
}

impl ColumnBound {
  pub const fn new(min: usize, max: usize) -> Self {
    Self { min, max }
  }

  pub const fn exactly(cols: usize) -> Self {
    Self::new(cols, cols)
  }

  pub fn contains(&self, cols: usize) -> bool {
    self.min <= cols && cols <= self.max
  }
}

impl fmt::Display for ColumnBound {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.min == self.max {
      write!(f, "{}", self.min)
    } else {
      write!(f, "{}~{}", self.min, self.max)
    }
  }
}

#[derive(Debug, Error)]
pub enum ReadError {
  /// A row has too few or too many fields. `line` is the line as written,
  /// comment included.
  #[error("expected {expected} columns but found: {line}")]
  MalformedRow {
    expected:    ColumnBound,
    line:        String,
    /// 1-based.
    line_number: usize,
  },
  #[error(transparent)]
  Io(#[from] io::Error),
}

/// Single and double quote state. A quote kind only toggles while the other
/// kind is inactive.
#[derive(Debug, Default, Clone, Copy)]
struct Quotes {
  single: bool,
  double: bool,
}

impl Quotes {
  /// Feeds `ch` through the state, returns whether it toggled a quote.
  fn toggle(&mut self, ch: char) -> bool {
    match ch {
      '\'' if !self.double => {
        self.single = !self.single;
        true
      },
      '"' if !self.single => {
        self.double = !self.double;
        true
      },
      _ => false,
    }
  }

  fn active(&self) -> bool {
    self.single || self.double
  }
}

fn strip_comment(line: &str) -> &str {
  let mut quotes = Quotes::default();
  for (idx, ch) in line.char_indices() {
    quotes.toggle(ch);
    if ch == '#' && !quotes.active() {
      return &line[..idx];
    }
  }
  line
}

/// Splits at whitespace outside of quotes. Quote characters stay in the
/// fields and empty fields are never produced.
fn split_fields(line: &str) -> Vec<&str> {
  let mut quotes = Quotes::default();
  let mut fields = Vec::new();
  let mut start = None;
  for (idx, ch) in line.char_indices() {
    quotes.toggle(ch);
    let separator = !quotes.active() && char_is_space(ch);
    match (separator, start) {
      (true, Some(field_start)) => {
        fields.push(&line[field_start..idx]);
        start = None;
      },
      (false, None) => start = Some(idx),
      _ => {},
    }
  }
  if let Some(field_start) = start {
    fields.push(&line[field_start..]);
  }
  fields
}

/// Drops every quote character that toggles the quote state of `field`.
fn strip_quotes(field: &str) -> String {
  let mut quotes = Quotes::default();
  field.chars().filter(|&ch| !quotes.toggle(ch)).collect()
}

fn decode_line(mut bytes: &[u8]) -> Cow<'_, str> {
  if let [rest @ .., b'\r'] = bytes {
    bytes = rest;
  }
  String::from_utf8_lossy(bytes)
}

/// Reads rows of fields from `reader`, one row per non-empty line.
///
/// Each row must have between `min_cols` and `max_cols` fields. The first line
/// that does not fails the whole read with [`ReadError::MalformedRow`].
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_arrays<R: BufRead>(
  reader: R,
  min_cols: usize,
  max_cols: usize,
) -> Result<Vec<Vec<String>>, ReadError> {
  let expected = ColumnBound::new(min_cols, max_cols);
  let mut arrays = Vec::new();

  for (idx, bytes) in reader.split(b'\n').enumerate() {
    let bytes = bytes?;
    let line = decode_line(&bytes);

    let content = strip_comment(&line).trim();
    if content.is_empty() {
      continue;
    }

    let fields = split_fields(content);
    if !expected.contains(fields.len()) {
      let line_number = idx + 1;
      log::warn!(
        "line {line_number}: expected {expected} columns, found {}",
        fields.len()
      );
      return Err(ReadError::MalformedRow {
        expected,
        line: line.into_owned(),
        line_number,
      });
    }

    arrays.push(fields.into_iter().map(strip_quotes).collect());
  }

  Ok(arrays)
}

/// Reads `key value` rows, see [`read_arrays`].
pub fn read_pairs<R: BufRead>(reader: R) -> Result<Vec<Vec<String>>, ReadError> {
  read_arrays(reader, 2, 2)
}
