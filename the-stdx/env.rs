//! Functions for working with the host environment.
//!
//! Process wide values are read here and only here. Everything else in the
//! workspace takes them as parameters.

use std::{
  ffi::OsString,
  path::PathBuf,
};

use eyre::{
  Result,
  WrapErr,
};

/// Environment variables consulted for the collation locale, highest priority
/// first.
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_COLLATE", "LANG"];

/// Get the home directory of the invoking user.
pub fn home_dir() -> Result<PathBuf> {
  etcetera::home_dir().wrap_err("failed to determine the home directory")
}

/// Reads the collation locale from the process environment.
///
/// See [`detect_locale_with`].
pub fn detect_locale() -> Option<String> {
  detect_locale_with(|var| std::env::var_os(var))
}

/// Reads the collation locale through `resolve`.
///
/// The first of [`LOCALE_VARS`] with a non-empty value wins. POSIX locale names
/// are turned into language tags: `en_US.UTF-8` becomes `en-US` and
/// `de_DE@euro` becomes `de-DE`. The `C` and `POSIX` locales have no language,
/// they yield `None`.
pub fn detect_locale_with(mut resolve: impl FnMut(&str) -> Option<OsString>) -> Option<String> {
  for var in LOCALE_VARS {
    let Some(value) = resolve(var) else {
      continue;
    };
    let value = value.to_string_lossy();
    if value.is_empty() {
      continue;
    }

    let tag = posix_locale_to_tag(&value);
    log::debug!("collation locale {value:?} read from ${var}, resolved to {tag:?}");
    return tag;
  }

  log::debug!("no collation locale set in the environment");
  None
}

fn posix_locale_to_tag(locale: &str) -> Option<String> {
  let name = locale
    .split(['.', '@'])
    .next()
    .unwrap_or_default();

  match name {
    "" | "C" | "POSIX" => None,
    name => Some(name.replace('_', "-")),
  }
}
