//! Core utilities shared by every subsystem.

#[macro_use]
pub mod utils;
