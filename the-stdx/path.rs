//! Helpers for paths and file names.

use std::{
  borrow::Cow,
  path::Path,
};

/// Replaces a leading `~` with `home`.
///
/// Only the first character is considered: `~/notes` and `~` are expanded,
/// `a/~` is not. There is no `~user` syntax, `~foo` simply becomes
/// `<home>foo`.
pub fn replace_tilde<'a>(s: &'a str, home: &Path) -> Cow<'a, str> {
  match s.strip_prefix('~') {
    Some(rest) => Cow::Owned(format!("{}{rest}", home.to_string_lossy())),
    None => Cow::Borrowed(s),
  }
}

/// Whether `path` is a filesystem root such as `/` or `C:\`.
pub fn is_root(path: &Path) -> bool {
  path.has_root() && path.parent().is_none()
}

/// Returns the extension of a file name including the leading dot.
///
/// Directories, names without a dot and hidden files whose only dot is the
/// leading one (`.bashrc`) have no extension and yield `""`.
pub fn file_extension(name: &str, is_dir: bool) -> &str {
  if is_dir {
    return "";
  }
  match name.rfind('.') {
    Some(0) | None => "",
    Some(idx) => &name[idx..],
  }
}
