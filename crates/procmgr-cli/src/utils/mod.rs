//! CLI utilities.

pub mod input;
