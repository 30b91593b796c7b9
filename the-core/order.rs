//! Pluggable string orderings for sorting names before display.
//!
//! Which ordering is used is decided once by configuration, callers only hold
//! a `dyn StringOrder`.

use std::cmp::Ordering;

use crate::natural::natural_cmp;

/// Given two strings, return their order.
pub trait StringOrder: Send + Sync {
  fn compare(&self, a: &str, b: &str) -> Ordering;

  fn less(&self, a: &str, b: &str) -> bool {
    self.compare(a, b) == Ordering::Less
  }

  /// Sorts `items` in place. The sort is stable.
  fn sort<S: AsRef<str>>(&self, items: &mut [S])
  where
    Self: Sized,
  {
    items.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
  }
}

/// Digit runs compare by value, see [`crate::natural`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl StringOrder for NaturalOrder {
  fn compare(&self, a: &str, b: &str) -> Ordering {
    natural_cmp(a, b)
  }
}

/// Plain byte-wise order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LexicalOrder;

impl StringOrder for LexicalOrder {
  fn compare(&self, a: &str, b: &str) -> Ordering {
    a.cmp(b)
  }
}

/// Compares lowercased strings with the wrapped order. Strings that only
/// differ in case fall back to the wrapped order on the originals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreCase<O>(pub O);

impl<O: StringOrder> StringOrder for IgnoreCase<O> {
  fn compare(&self, a: &str, b: &str) -> Ordering {
    self
      .0
      .compare(&a.to_lowercase(), &b.to_lowercase())
      .then_with(|| self.0.compare(a, b))
  }
}

impl<T: StringOrder + ?Sized> StringOrder for Box<T> {
  fn compare(&self, a: &str, b: &str) -> Ordering {
    (**self).compare(a, b)
  }
}

impl<T: StringOrder + ?Sized> StringOrder for &T {
  fn compare(&self, a: &str, b: &str) -> Ordering {
    (**self).compare(a, b)
  }
}

/// Sorts `items` with any ordering, including trait objects.
pub fn sort_by_order<S: AsRef<str>>(order: &dyn StringOrder, items: &mut [S]) {
  items.sort_by(|a, b| order.compare(a.as_ref(), b.as_ref()));
}

/// Sorts `items` in natural order.
pub fn sort_natural<S: AsRef<str>>(items: &mut [S]) {
  NaturalOrder.sort(items);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn natural_and_lexical_disagree_on_numbers() {
    assert!(NaturalOrder.less("file2", "file10"));
    assert!(LexicalOrder.less("file10", "file2"));
  }

  #[test]
  fn ignore_case_wraps_any_order() {
    let mut items = ["b", "A", "a10", "a2"];
    IgnoreCase(NaturalOrder).sort(&mut items);
    assert_eq!(items, ["A", "a2", "a10", "b"]);

    let mut items = ["b", "A", "a10", "a2"];
    IgnoreCase(LexicalOrder).sort(&mut items);
    assert_eq!(items, ["A", "a10", "a2", "b"]);

    assert_eq!(IgnoreCase(LexicalOrder).compare("A", "a"), Ordering::Less);
  }

  #[test]
  fn test_sort_natural() {
    let mut names = vec![
      "track10.ogg".to_string(),
      "track9.ogg".to_string(),
      "track1.ogg".to_string(),
    ];
    sort_natural(&mut names);
    assert_eq!(names, ["track1.ogg", "track9.ogg", "track10.ogg"]);
  }

  #[test]
  fn sort_through_trait_object() {
    let orders: [Box<dyn StringOrder>; 2] = [Box::new(NaturalOrder), Box::new(LexicalOrder)];
    let expected: [&[&str]; 2] = [&["a2", "a10", "b"], &["a10", "a2", "b"]];

    for (order, expected) in orders.iter().zip(expected) {
      let mut items = ["b", "a10", "a2"];
      sort_by_order(order.as_ref(), &mut items);
      assert_eq!(items, expected);
    }
  }

  #[test]
  fn boxed_order_sorts() {
    let order: Box<dyn StringOrder> = Box::new(NaturalOrder);
    let mut items = ["x10", "x1", "x3"];
    order.sort(&mut items);
    assert_eq!(items, ["x1", "x3", "x10"]);
  }
}
