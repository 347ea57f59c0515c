//! gunfx library.
//!
//! Weapon-handling simulations that route gun events to sound, visual and
//! animation effect handlers, exposed for the binary and integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
