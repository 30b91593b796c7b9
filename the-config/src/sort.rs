//! Configuration of how names are ordered for display.
//!
//! ```toml
//! locale = "*"
//! natural = true
//! ignore-case = true
//! ```

use eyre::{
  Result,
  WrapErr,
};
use serde::Deserialize;
use the_core::order::{
  IgnoreCase,
  LexicalOrder,
  NaturalOrder,
  StringOrder,
};

use crate::locale::{
  CollationOptions,
  LocaleError,
  LocaleSetting,
  make_collator_with,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SortConfig {
  /// Locale for collation, see [`crate::locale`]. Empty by default, which
  /// sorts independently of any locale.
  pub locale:      String,
  /// Compare digit runs by value.
  pub natural:     bool,
  pub ignore_case: bool,
}

impl Default for SortConfig {
  fn default() -> Self {
    Self {
      locale:      String::new(),
      natural:     true,
      ignore_case: false,
    }
  }
}

impl SortConfig {
  pub fn from_toml(config: &str) -> Result<Self> {
    toml::from_str(config).wrap_err("failed to parse sort configuration")
  }

  /// Builds the ordering this configuration describes.
  pub fn order(&self) -> Result<Box<dyn StringOrder>, LocaleError> {
    self.order_with(the_stdx::env::detect_locale)
  }

  /// Like [`SortConfig::order`], with `detect` standing in for the
  /// environment.
  pub fn order_with(
    &self,
    detect: impl FnOnce() -> Option<String>,
  ) -> Result<Box<dyn StringOrder>, LocaleError> {
    if LocaleSetting::from(self.locale.as_str()) != LocaleSetting::Disabled {
      let options = CollationOptions {
        ignore_case: self.ignore_case,
        numeric:     self.natural,
      };
      let collator = make_collator_with(&self.locale, options, detect)?;
      return Ok(Box::new(collator));
    }

    let order: Box<dyn StringOrder> = match (self.natural, self.ignore_case) {
      (true, false) => Box::new(NaturalOrder),
      (true, true) => Box::new(IgnoreCase(NaturalOrder)),
      (false, false) => Box::new(LexicalOrder),
      (false, true) => Box::new(IgnoreCase(LexicalOrder)),
    };
    Ok(order)
  }
}
