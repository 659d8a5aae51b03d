//! Command implementations.

pub mod derive;
pub mod generate;
pub mod json_output;
