//! Events emitted by the gun component.

use std::fmt;

/// Something that happened to the gun.
///
/// Emitted by [`GunComponent`](crate::components::gun::GunComponent) through
/// the [`Mediator`](crate::systems::mediator::Mediator) it is handed on each
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GunEvent {
    /// A round was fired.
    Fire,
    /// The trigger was pulled with an empty magazine.
    EmptyFire,
    /// The gun jammed right after firing. Cosmetic only.
    Jammed,
    /// A reload was requested.
    Reload,
    /// The gun was raised to aim.
    Aim,
    /// The gun was lowered.
    Lower,
}

impl GunEvent {
    pub fn name(self) -> &'static str {
        match self {
            GunEvent::Fire => "Gun_Fire",
            GunEvent::EmptyFire => "Gun_Empty_Fire",
            GunEvent::Jammed => "Gun_Jammed",
            GunEvent::Reload => "Gun_Reload",
            GunEvent::Aim => "Gun_Aim",
            GunEvent::Lower => "Gun_Lower",
        }
    }
}

impl fmt::Display for GunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
