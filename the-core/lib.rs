//! Text primitives for parsing configuration and laying out terminal text.

pub mod chars;
pub mod escape;
pub mod humanize;
pub mod natural;
pub mod order;
pub mod token;
pub mod width;
