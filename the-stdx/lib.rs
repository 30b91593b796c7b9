//! Extensions to the standard library for the host environment.

pub mod env;
pub mod path;
