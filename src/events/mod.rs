//! Event types exchanged between the gun, the effect handlers and the
//! dispatchers that connect them.
//!
//! Events are closed enums, one per sending component, so a dispatcher
//! matching on them gets exhaustiveness checking instead of silently
//! ignoring a misspelled name.
//!
//! Submodules:
//! - [`effects`] – sound/visual/animation cues and their completion events
//! - [`gun`] – events emitted by the gun component
//! - [`input`] – input keys mapped to gun actions
pub mod effects;
pub mod gun;
pub mod input;

use std::fmt;

use crate::events::effects::{AnimEvent, SfxEvent, VfxEvent};
use crate::events::gun::GunEvent;

/// A `(sender, event)` pair delivered to a
/// [`Mediator`](crate::systems::mediator::Mediator).
///
/// The variant identifies the sender, the payload is what it reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    Gun(GunEvent),
    Sfx(SfxEvent),
    Vfx(VfxEvent),
    Anim(AnimEvent),
}

impl From<GunEvent> for Notification {
    fn from(event: GunEvent) -> Self {
        Notification::Gun(event)
    }
}

impl From<SfxEvent> for Notification {
    fn from(event: SfxEvent) -> Self {
        Notification::Sfx(event)
    }
}

impl From<VfxEvent> for Notification {
    fn from(event: VfxEvent) -> Self {
        Notification::Vfx(event)
    }
}

impl From<AnimEvent> for Notification {
    fn from(event: AnimEvent) -> Self {
        Notification::Anim(event)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Gun(e) => write!(f, "gun: {}", e),
            Notification::Sfx(e) => write!(f, "sfx: {}", e),
            Notification::Vfx(e) => write!(f, "vfx: {}", e),
            Notification::Anim(e) => write!(f, "anim: {}", e),
        }
    }
}
