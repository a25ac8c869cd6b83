//! Small presentation helpers shared across panels.

pub mod clipboard;
pub mod format;
