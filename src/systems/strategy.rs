//! Interchangeable weapon behaviors.
//!
//! [`WeaponContext`] holds whichever [`Weapon`] is equipped and forwards
//! attacks to it; swapping the weapon swaps the behavior without the
//! context knowing the concrete type.

use log::debug;

use crate::resources::transcript::Transcript;

/// Attack behavior of an equippable weapon.
pub trait Weapon {
    fn name(&self) -> &str;
    fn attack(&mut self, out: &mut Transcript);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MeleeWeapon;

impl Weapon for MeleeWeapon {
    fn name(&self) -> &str {
        "melee"
    }

    fn attack(&mut self, out: &mut Transcript) {
        out.note("Attacking with Melee...");
    }
}

/// A gun used as a strategy. Attacking reports the magazine but does not
/// spend rounds.
#[derive(Debug, Clone, Copy)]
pub struct Firearm {
    bullets: u32,
}

impl Firearm {
    pub fn new(bullets: u32) -> Self {
        Self { bullets }
    }

    pub fn bullets(&self) -> u32 {
        self.bullets
    }
}

impl Weapon for Firearm {
    fn name(&self) -> &str {
        "firearm"
    }

    fn attack(&mut self, out: &mut Transcript) {
        if self.bullets == 0 {
            out.note("Cannot fire, magazine empty");
            return;
        }
        out.note("Shooting gun...");
        out.note(format!("Bullets left: {}", self.bullets));
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Grenade {
    range: u32,
}

impl Grenade {
    pub fn new(range: u32) -> Self {
        Self { range }
    }

    pub fn range(&self) -> u32 {
        self.range
    }
}

impl Weapon for Grenade {
    fn name(&self) -> &str {
        "grenade"
    }

    fn attack(&mut self, out: &mut Transcript) {
        out.note("Throwing grenade...");
    }
}

/// Holder of the currently equipped weapon.
#[derive(Default)]
pub struct WeaponContext {
    weapon: Option<Box<dyn Weapon>>,
}

impl WeaponContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the equipped weapon.
    pub fn equip(&mut self, weapon: Box<dyn Weapon>, out: &mut Transcript) {
        debug!("Equipping {}", weapon.name());
        out.note("Equipping new weapon...");
        self.weapon = Some(weapon);
    }

    pub fn equipped(&self) -> Option<&str> {
        self.weapon.as_deref().map(|w| w.name())
    }

    /// Attack with the equipped weapon, if any.
    pub fn attack(&mut self, out: &mut Transcript) {
        match self.weapon.as_mut() {
            Some(weapon) => weapon.attack(out),
            None => out.note("No weapon equipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapping_weapons_changes_attack() {
        let mut ctx = WeaponContext::new();
        let mut out = Transcript::new();
        ctx.equip(Box::new(Firearm::new(30)), &mut out);
        ctx.attack(&mut out);
        ctx.equip(Box::new(MeleeWeapon), &mut out);
        ctx.attack(&mut out);
        ctx.equip(Box::new(Grenade::new(70)), &mut out);
        ctx.attack(&mut out);
        assert_eq!(
            out.texts(),
            vec![
                "Equipping new weapon...",
                "Shooting gun...",
                "Bullets left: 30",
                "Equipping new weapon...",
                "Attacking with Melee...",
                "Equipping new weapon...",
                "Throwing grenade...",
            ]
        );
        assert_eq!(ctx.equipped(), Some("grenade"));
    }

    #[test]
    fn test_empty_firearm_refuses() {
        let mut gun = Firearm::new(0);
        let mut out = Transcript::new();
        gun.attack(&mut out);
        assert_eq!(out.texts(), vec!["Cannot fire, magazine empty"]);
    }

    #[test]
    fn test_firearm_attack_keeps_bullets() {
        let mut gun = Firearm::new(3);
        let mut out = Transcript::new();
        gun.attack(&mut out);
        gun.attack(&mut out);
        assert_eq!(gun.bullets(), 3);
    }

    #[test]
    fn test_attack_without_weapon() {
        let mut ctx = WeaponContext::new();
        let mut out = Transcript::new();
        ctx.attack(&mut out);
        assert_eq!(ctx.equipped(), None);
        assert_eq!(out.texts(), vec!["No weapon equipped"]);
    }
}
