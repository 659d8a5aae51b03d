//! SIGNAL LOST texture CLI library.
//!
//! Command implementations live here so they can be tested without spawning
//! the binary.

pub mod commands;
