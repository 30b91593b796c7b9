//! Measuring and slicing text by terminal columns.
//!
//! A column position and a char index are different things: a char takes 0, 1
//! or 2 terminal cells. The functions here take and return sub-slices of a
//! `&[char]` so that callers can slice without copying.

use unicode_width::UnicodeWidthChar;

/// Number of terminal cells `ch` occupies.
///
/// Combining marks, zero width characters and control characters take no
/// space, East Asian wide and fullwidth characters take two cells.
#[must_use]
#[inline]
pub fn char_width(ch: char) -> usize {
  if ch.is_ascii() {
    // Fast-path: printable ASCII is one cell, ASCII control characters none.
    return usize::from(!ch.is_ascii_control());
  }
  UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Total width of a string using [`char_width`] for each char.
#[must_use]
pub fn str_width(s: &str) -> usize {
  s.chars().map(char_width).sum()
}

/// Total width of `rs`.
#[must_use]
pub fn rune_slice_width(rs: &[char]) -> usize {
  rs.iter().copied().map(char_width).sum()
}

/// Returns the chars covering the columns `beg..end`.
///
/// The range starts at the first char whose starting column is at least `beg`
/// and stops before the first char that starts at `end` or would end past it.
/// A wide char straddling either boundary is left out rather than split.
/// Zero width chars trailing the text at column `end` stay in the range, so
/// the range over the full width of `rs` is `rs` itself. `beg == end` always
/// yields an empty slice, as does a `beg` past the end of the text.
#[must_use]
pub fn rune_slice_width_range(rs: &[char], beg: usize, end: usize) -> &[char] {
  if beg == end {
    return &[];
  }

  let mut curr = 0;
  let mut start = None;
  for (i, &ch) in rs.iter().enumerate() {
    let w = char_width(ch);
    if start.is_none() && curr >= beg {
      start = Some(i);
    }
    if curr == end && rs[i..].iter().all(|&ch| char_width(ch) == 0) {
      return start.map_or(&[], |start| &rs[start..]);
    }
    if curr == end || curr + w > end {
      return start.map_or(&[], |start| &rs[start..i]);
    }
    curr += w;
  }

  start.map_or(&[], |start| &rs[start..])
}

/// Returns the longest suffix of `rs` that fits into `max_width` columns.
#[must_use]
pub fn rune_slice_width_last_range(rs: &[char], max_width: usize) -> &[char] {
  let mut last_width = 0;
  for (i, &ch) in rs.iter().enumerate().rev() {
    let w = char_width(ch);
    if last_width + w > max_width {
      return &rs[i + 1..];
    }
    last_width += w;
  }
  rs
}
