//! Long-lived data shared by the demos.
//!
//! Overview
//! - `animationstore` – animation durations keyed by name
//! - `gameconfig` – INI-backed demo configuration
//! - `gunstore` – gun model catalog
//! - `transcript` – ordered narration sink
pub mod animationstore;
pub mod gameconfig;
pub mod gunstore;
pub mod transcript;
