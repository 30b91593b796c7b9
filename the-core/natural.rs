//! Natural ordering of strings.
//!
//! Strings are compared as alternating runs of ASCII digits and non-digits.
//! Digit runs compare by their numeric value, everything else compares
//! byte-wise, so `img2` sorts before `img10`.

use std::cmp::Ordering;

/// Returns the end of the maximal run that starts at `start` and shares the
/// digit class of `s[start]`.
#[inline]
fn run_end(s: &[u8], start: usize) -> usize {
  let digit = s[start].is_ascii_digit();
  start
    + s[start..]
      .iter()
      .take_while(|b| b.is_ascii_digit() == digit)
      .count()
}

/// Parses a digit run, `None` if it does not fit into an `i64`.
fn parse_run(run: &[u8]) -> Option<i64> {
  run.iter().try_fold(0i64, |acc, &b| {
    acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
  })
}

/// Compares two digit runs by value, for any length.
fn cmp_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
  fn significant(run: &[u8]) -> &[u8] {
    let zeros = run.iter().take_while(|&&b| b == b'0').count();
    &run[zeros..]
  }

  let (a, b) = (significant(a), significant(b));
  a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Returns `true` if `s1` sorts before `s2` in natural order.
///
/// Both strings are walked run by run. Identical runs are skipped. At the first
/// pair of differing runs the result is decided: two digit runs compare by
/// value, any other pair (or a digit run larger than `i64::MAX`) compares
/// byte-wise. A string that runs out first sorts first.
///
/// Digit runs with the same value but different spelling, like `007` and `7`,
/// decide the comparison as equal: neither string is less than the other. Use
/// [`natural_cmp`] when a total order is needed.
///
/// ```
/// use the_core::natural::natural_less;
///
/// assert!(natural_less("foo2bar", "foo10bar"));
/// assert!(natural_less("bar2bar", "foo10bar"));
/// assert!(!natural_less("img10", "img2"));
/// ```
pub fn natural_less(s1: &str, s2: &str) -> bool {
  let (s1, s2) = (s1.as_bytes(), s2.as_bytes());
  let (mut hi1, mut hi2) = (0, 0);

  loop {
    if hi1 >= s1.len() {
      return hi2 != s2.len();
    }
    if hi2 >= s2.len() {
      return false;
    }

    let (lo1, lo2) = (hi1, hi2);
    hi1 = run_end(s1, lo1);
    hi2 = run_end(s2, lo2);

    let (run1, run2) = (&s1[lo1..hi1], &s2[lo2..hi2]);
    if run1 == run2 {
      continue;
    }

    if run1[0].is_ascii_digit()
      && run2[0].is_ascii_digit()
      && let (Some(num1), Some(num2)) = (parse_run(run1), parse_run(run2))
    {
      return num1 < num2;
    }

    return run1 < run2;
  }
}

/// Total natural order.
///
/// Agrees with [`natural_less`] whenever that returns `true` and the deciding
/// runs fit into an `i64`. Two cases differ:
///
/// - Digit runs of the same value keep the walk going and only the first
///   difference in their spelling breaks a tie at the very end, so
///   `a07b < a7c` and `a07 < a7`. [`natural_less`] calls these equal.
/// - Digit runs of any length compare by value. The byte-wise fallback of
///   [`natural_less`] for huge numbers is not transitive (`20 < 100`,
///   `100 < 150000000000000000000` and `150000000000000000000 < 20`), so no
///   total order can follow it.
///
/// `Equal` is only returned for identical strings.
pub fn natural_cmp(s1: &str, s2: &str) -> Ordering {
  let (s1, s2) = (s1.as_bytes(), s2.as_bytes());
  let (mut pos1, mut pos2) = (0, 0);
  let mut tie = Ordering::Equal;

  loop {
    match (pos1 >= s1.len(), pos2 >= s2.len()) {
      (true, true) => return tie,
      (true, false) => return Ordering::Less,
      (false, true) => return Ordering::Greater,
      (false, false) => {},
    }

    let (end1, end2) = (run_end(s1, pos1), run_end(s2, pos2));
    let (run1, run2) = (&s1[pos1..end1], &s2[pos2..end2]);
    pos1 = end1;
    pos2 = end2;

    if run1 == run2 {
      continue;
    }

    if run1[0].is_ascii_digit() && run2[0].is_ascii_digit() {
      match cmp_digit_runs(run1, run2) {
        Ordering::Equal => {
          if tie == Ordering::Equal {
            tie = run1.cmp(run2);
          }
          continue;
        },
        ord => return ord,
      }
    }

    return run1.cmp(run2);
  }
}
