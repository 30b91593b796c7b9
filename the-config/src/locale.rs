//! Locale aware collation.
//!
//! A locale setting is a string: empty disables locale aware sorting, `*`
//! reads the locale from the environment and anything else is a BCP 47
//! language tag such as `sv-SE`.

use std::{
  cmp::Ordering,
  fmt,
};

use icu_collator::{
  Collator,
  CollatorOptions,
  Numeric,
  Strength,
};
use icu_locid::Locale;
use icu_provider::DataLocale;
use the_core::order::StringOrder;
use thiserror::Error;

/// Disables locale aware ordering.
pub const LOCALE_DISABLE: &str = "";
/// Reads the locale from the environment.
pub const LOCALE_SYSTEM: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleSetting<'a> {
  Disabled,
  System,
  Tag(&'a str),
}

impl<'a> From<&'a str> for LocaleSetting<'a> {
  fn from(value: &'a str) -> Self {
    match value {
      LOCALE_DISABLE => Self::Disabled,
      LOCALE_SYSTEM => Self::System,
      tag => Self::Tag(tag),
    }
  }
}

#[derive(Debug, Error)]
pub enum LocaleError {
  #[error("locale is disabled by the setting \"\"")]
  Disabled,
  #[error("no locale set in the environment")]
  NotDetected,
  #[error("invalid locale {locale:?}: {reason}")]
  Invalid { locale: String, reason: String },
  #[error("no collation available for locale {locale:?}: {reason}")]
  Collator { locale: String, reason: String },
}

/// Parses a locale setting into a language tag.
///
/// `*` reads the locale from the environment, see
/// [`the_stdx::env::detect_locale`].
pub fn locale_tag(locale: &str) -> Result<Locale, LocaleError> {
  locale_tag_with(locale, the_stdx::env::detect_locale)
}

/// Like [`locale_tag`], with `detect` standing in for the environment.
pub fn locale_tag_with(
  locale: &str,
  detect: impl FnOnce() -> Option<String>,
) -> Result<Locale, LocaleError> {
  match LocaleSetting::from(locale) {
    LocaleSetting::System => {
      let detected = detect().ok_or(LocaleError::NotDetected)?;
      parse_tag(&detected)
    },
    LocaleSetting::Disabled | LocaleSetting::Tag(_) => parse_tag(locale),
  }
}

fn parse_tag(locale: &str) -> Result<Locale, LocaleError> {
  locale.parse::<Locale>().map_err(|err| {
    LocaleError::Invalid {
      locale: locale.to_string(),
      reason: err.to_string(),
    }
  })
}

/// Tailoring applied on top of the locale's collation rules.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollationOptions {
  /// Compare letters of different case as equal.
  pub ignore_case: bool,
  /// Compare digit sequences by their numeric value.
  pub numeric:     bool,
}

impl CollationOptions {
  fn to_icu(self) -> CollatorOptions {
    let mut options = CollatorOptions::new();
    if self.ignore_case {
      options.strength = Some(Strength::Secondary);
    }
    if self.numeric {
      options.numeric = Some(Numeric::On);
    }
    options
  }
}

/// A [`StringOrder`] following the collation rules of a locale.
pub struct LocaleCollator {
  locale:   Locale,
  collator: Collator,
}

impl LocaleCollator {
  pub fn new(locale: Locale, options: CollationOptions) -> Result<Self, LocaleError> {
    let collator =
      Collator::try_new(&DataLocale::from(&locale), options.to_icu()).map_err(|err| {
        LocaleError::Collator {
          locale: locale.to_string(),
          reason: err.to_string(),
        }
      })?;
    Ok(Self { locale, collator })
  }

  pub fn locale(&self) -> &Locale {
    &self.locale
  }
}

impl fmt::Debug for LocaleCollator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LocaleCollator")
      .field("locale", &self.locale.to_string())
      .finish_non_exhaustive()
  }
}

impl StringOrder for LocaleCollator {
  fn compare(&self, a: &str, b: &str) -> Ordering {
    self.collator.compare(a, b)
  }
}

/// Creates a collator for a locale setting.
///
/// Fails with [`LocaleError::Disabled`] for the empty setting, the caller is
/// expected to pick a locale independent order in that case.
pub fn make_collator(
  locale: &str,
  options: CollationOptions,
) -> Result<LocaleCollator, LocaleError> {
  make_collator_with(locale, options, the_stdx::env::detect_locale)
}

/// Like [`make_collator`], with `detect` standing in for the environment.
pub fn make_collator_with(
  locale: &str,
  options: CollationOptions,
  detect: impl FnOnce() -> Option<String>,
) -> Result<LocaleCollator, LocaleError> {
  if LocaleSetting::from(locale) == LocaleSetting::Disabled {
    return Err(LocaleError::Disabled);
  }

  let tag = locale_tag_with(locale, detect)?;
  log::debug!("creating collator for locale {tag}");
  LocaleCollator::new(tag, options)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn no_env() -> Option<String> {
    None
  }

  #[test]
  fn test_locale_setting() {
    assert_eq!(LocaleSetting::from(""), LocaleSetting::Disabled);
    assert_eq!(LocaleSetting::from("*"), LocaleSetting::System);
    assert_eq!(LocaleSetting::from("de-DE"), LocaleSetting::Tag("de-DE"));
  }

  #[test]
  fn test_locale_tag() {
    let tag = locale_tag_with("sv-SE", no_env).unwrap();
    assert_eq!(tag.to_string(), "sv-SE");

    let tag = locale_tag_with("*", || Some("tr-TR".to_string())).unwrap();
    assert_eq!(tag.to_string(), "tr-TR");
  }

  #[test]
  fn locale_tag_errors() {
    assert!(matches!(
      locale_tag_with("*", no_env),
      Err(LocaleError::NotDetected)
    ));

    let err = locale_tag_with("not a locale", no_env).unwrap_err();
    assert!(matches!(err, LocaleError::Invalid { .. }));
    assert!(
      err.to_string().starts_with(r#"invalid locale "not a locale": "#),
      "{err}"
    );
  }

  #[test]
  fn make_collator_disabled() {
    let err = make_collator_with("", CollationOptions::default(), no_env).unwrap_err();
    assert!(matches!(err, LocaleError::Disabled));
    assert_eq!(err.to_string(), r#"locale is disabled by the setting """#);
  }

  #[test]
  fn swedish_sorts_a_umlaut_after_z() {
    let root = make_collator_with("en", CollationOptions::default(), no_env).unwrap();
    assert_eq!(root.compare("ä", "z"), Ordering::Less);

    let swedish = make_collator_with("sv", CollationOptions::default(), no_env).unwrap();
    assert_eq!(swedish.compare("ä", "z"), Ordering::Greater);
  }

  #[test]
  fn collation_options() {
    let plain = make_collator_with("en", CollationOptions::default(), no_env).unwrap();
    assert_ne!(plain.compare("a", "A"), Ordering::Equal);
    assert_eq!(plain.compare("a10", "a2"), Ordering::Less);

    let options = CollationOptions {
      ignore_case: true,
      numeric:     true,
    };
    let tailored = make_collator_with("en", options, no_env).unwrap();
    assert_eq!(tailored.compare("a", "A"), Ordering::Equal);
    assert_eq!(tailored.compare("a10", "a2"), Ordering::Greater);
  }

  #[test]
  fn collator_from_environment() {
    let collator =
      make_collator_with("*", CollationOptions::default(), || Some("de".into())).unwrap();
    assert_eq!(collator.locale().to_string(), "de");
  }
}
