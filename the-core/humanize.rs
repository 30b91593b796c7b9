const SUFFIXES: [&str; 8] = [
  "K", // kilo
  "M", // mega
  "G", // giga
  "T", // tera
  "P", // peta
  "E", // exa
  "Z", // zetta
  "Y", // yotta
];

/// Formats a byte count with a metric suffix (`1K = 1000`).
///
/// Below 10 units one decimal is shown, above that none. Values are always
/// rounded down so a size is never displayed larger than it is.
pub fn humanize(size: u64) -> String {
  if size < 1000 {
    return format!("{size}B");
  }

  let mut curr = size as f64 / 1000.0;
  for suffix in SUFFIXES {
    if curr < 10.0 {
      // Bias below the rounding point so `{:.1}` truncates.
      return format!("{:.1}{suffix}", curr - 0.0499);
    } else if curr < 1000.0 {
      return format!("{}{suffix}", curr as u64);
    }
    curr /= 1000.0;
  }

  String::new()
}
