//! Reading configuration: whitespace separated config files and the sort
//! settings that decide how names are ordered.

pub mod lines;
pub mod locale;
pub mod sort;

pub use lines::{
  ColumnBound,
  ReadError,
  read_arrays,
  read_pairs,
};
pub use sort::SortConfig;
