//! Environment-driven configuration, loaded once at process start.

pub mod db;
pub mod game;
pub mod words;
