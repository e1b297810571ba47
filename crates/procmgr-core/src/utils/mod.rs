//! Shared helpers with no infrastructure dependencies.

pub mod validation;
