//! Shared helpers for generated output.

pub mod minify;
pub mod xml;
