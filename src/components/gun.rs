//! Gun component for the mediator demo.
//!
//! The gun owns its ammo count and aim flag and reports every state-changing
//! action as a [`GunEvent`]. It holds no reference to any effect handler or
//! to the mediator that owns it: each action takes the dispatch capability as
//! an argument, so ownership stays one-way (mediator owns gun).

use log::debug;

use crate::events::gun::GunEvent;
use crate::systems::mediator::Mediator;

/// Default probability that a successful shot jams.
pub const DEFAULT_JAM_CHANCE: f32 = 0.5;

/// Ammo and aim state plus the jam coin flip.
#[derive(Debug, Clone)]
pub struct GunComponent {
    ammo: u32,
    aiming: bool,
    jam_chance: f32,
    rng: fastrand::Rng,
}

impl Default for GunComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GunComponent {
    /// Empty, lowered gun with a fair jam coin.
    pub fn new() -> Self {
        Self {
            ammo: 0,
            aiming: false,
            jam_chance: DEFAULT_JAM_CHANCE,
            rng: fastrand::Rng::new(),
        }
    }

    /// Builder: set the jam probability, clamped to `[0, 1]`.
    pub fn with_jam_chance(mut self, chance: f32) -> Self {
        self.jam_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Builder: use a specific random source for the jam coin.
    pub fn with_rng(mut self, rng: fastrand::Rng) -> Self {
        self.rng = rng;
        self
    }

    /// Builder: start with `ammo` rounds.
    pub fn with_ammo(mut self, ammo: u32) -> Self {
        self.ammo = ammo;
        self
    }

    pub fn set_ammo(&mut self, ammo: u32) {
        self.ammo = ammo;
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    pub fn jam_chance(&self) -> f32 {
        self.jam_chance
    }

    /// Pull the trigger.
    ///
    /// With an empty magazine only [`GunEvent::EmptyFire`] is emitted and no
    /// state changes. Otherwise one round is spent, [`GunEvent::Fire`] is
    /// emitted, and [`GunEvent::Jammed`] may follow.
    pub fn fire(&mut self, mediator: &mut dyn Mediator) {
        if self.ammo == 0 {
            mediator.notify(GunEvent::EmptyFire.into());
            return;
        }

        self.ammo -= 1;
        debug!("Gun fired, {} round(s) left", self.ammo);
        mediator.notify(GunEvent::Fire.into());

        if self.roll_jam() {
            mediator.notify(GunEvent::Jammed.into());
        }
    }

    /// Request a reload.
    ///
    /// Only emits [`GunEvent::Reload`]; the ammo count is left as is.
    pub fn reload(&mut self, mediator: &mut dyn Mediator) {
        mediator.notify(GunEvent::Reload.into());
    }

    /// Raise or lower the gun.
    pub fn toggle_aim(&mut self, mediator: &mut dyn Mediator) {
        self.aiming = !self.aiming;
        if self.aiming {
            mediator.notify(GunEvent::Aim.into());
        } else {
            mediator.notify(GunEvent::Lower.into());
        }
    }

    fn roll_jam(&mut self) -> bool {
        self.rng.f32() < self.jam_chance
    }
}
