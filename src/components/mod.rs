//! Components taking part in the weapon-handling simulations.
//!
//! The gun is the only stateful component; the three effect handlers are
//! stateless sinks that narrate a cue and hand back a completion event.
//!
//! Submodules overview:
//! - [`animation`] – animation cue handler
//! - [`gun`] – ammo/aim state and the jam coin flip, emits gun events
//! - [`sfx`] – sound cue handler
//! - [`vfx`] – visual effect cue handler

pub mod animation;
pub mod gun;
pub mod sfx;
pub mod vfx;
