//! Facade over the gun subsystems.
//!
//! [`GunFacade`] hides the effect handlers and catalogs behind two calls:
//! [`GunFacade::equip_gun`] and [`GunFacade::process_input`]. Input keys map
//! to fire/aim/reload routines, and the [`Player`] state machine decides
//! which of them are allowed:
//!
//! - firing is refused while `Reloading`
//! - reloading is refused while `Shooting`
//! - aiming toggles `Idle` <-> `Aiming` and does nothing in other states
//!
//! Fire and reload enter `Shooting`/`Reloading` for the duration of the call
//! and restore the previous state on the way out.

use log::{debug, warn};

use crate::components::animation::AnimationComponent;
use crate::components::sfx::SfxComponent;
use crate::components::vfx::VfxComponent;
use crate::events::effects::{AnimCue, SfxCue, VfxCue};
use crate::events::input::InputKey;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gunstore::{GunStats, GunStore};
use crate::resources::transcript::Transcript;

/// A concrete gun with a magazine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gun {
    model: String,
    stats: GunStats,
    bullets: u32,
}

impl Gun {
    /// New gun with a full magazine.
    pub fn new(model: impl Into<String>, stats: GunStats) -> Self {
        Self {
            model: model.into(),
            stats,
            bullets: stats.magazine,
        }
    }

    pub fn can_fire(&self) -> bool {
        self.bullets > 0
    }

    /// Spend one round. No-op on an empty magazine.
    pub fn consume_bullet(&mut self) {
        self.bullets = self.bullets.saturating_sub(1);
    }

    /// Refill to magazine size.
    pub fn reload(&mut self) {
        self.bullets = self.stats.magazine;
    }

    pub fn bullets(&self) -> u32 {
        self.bullets
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn stats(&self) -> GunStats {
        self.stats
    }
}

/// Discrete player states relevant to weapon handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Aiming,
    Shooting,
    Reloading,
}

/// Authoritative player state.
#[derive(Debug, Clone, Default)]
pub struct Player {
    state: PlayerState,
}

impl Player {
    /// Create a player in [`PlayerState::Idle`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn set_state(&mut self, state: PlayerState) {
        self.state = state;
    }
}

/// Single entry point to equipping and operating a gun.
#[derive(Debug, Clone, Default)]
pub struct GunFacade {
    sfx: SfxComponent,
    vfx: VfxComponent,
    anim: AnimationComponent,
    animations: AnimationStore,
    guns: GunStore,
}

impl GunFacade {
    pub fn new(animations: AnimationStore, guns: GunStore) -> Self {
        Self {
            sfx: SfxComponent::new(),
            vfx: VfxComponent::new(),
            anim: AnimationComponent::new(),
            animations,
            guns,
        }
    }

    /// Build `model` from the catalog and run the equip sequence.
    ///
    /// Unknown models still produce a gun, with an empty magazine that can
    /// never be refilled.
    pub fn equip_gun(&self, model: &str, out: &mut Transcript) -> Gun {
        let gun = self.create_gun(model, out);

        out.gap();
        out.note("Equipping gun...");

        let sequence = [AnimCue::GunEquip, AnimCue::GunLoadMag, AnimCue::GunLoadChamber];
        self.anim.play(AnimCue::GunEquip, out);
        self.anim.play(AnimCue::GunLoadMag, out);
        self.sfx.play(SfxCue::GunLoadMag, out);
        self.anim.play(AnimCue::GunLoadChamber, out);
        self.sfx.play(SfxCue::GunLoadChamber, out);

        let total: f32 = sequence
            .iter()
            .map(|cue| self.animations.cue_duration(*cue, out))
            .sum();
        out.note(format!("Equipped gun ({:.1}s)", total));
        gun
    }

    fn create_gun(&self, model: &str, out: &mut Transcript) -> Gun {
        let gun = Gun::new(model, self.guns.stats(model));
        out.note("Creating Gun");
        out.note("Generating mesh...");
        out.note("Generating textures...");
        gun
    }

    /// Route one input to its action.
    pub fn process_input(
        &self,
        key: InputKey,
        gun: &mut Gun,
        player: &mut Player,
        out: &mut Transcript,
    ) {
        out.gap();
        out.note(format!("Received Input : {}", key));
        out.gap();
        match key {
            InputKey::MouseL => self.fire_gun(gun, player, out),
            InputKey::MouseR => self.aim_gun(player, out),
            InputKey::R => self.reload_gun(gun, player, out),
        }
        debug!("After {}: state={:?} bullets={}", key, player.state(), gun.bullets());
    }

    /// Like [`process_input`](Self::process_input) for a raw key name.
    /// Unrecognized names are announced and otherwise ignored.
    pub fn process_raw_input(
        &self,
        key: &str,
        gun: &mut Gun,
        player: &mut Player,
        out: &mut Transcript,
    ) {
        match key.parse::<InputKey>() {
            Ok(key) => self.process_input(key, gun, player, out),
            Err(e) => {
                warn!("{}", e);
                out.gap();
                out.note(format!("Received Input : {}", key));
                out.gap();
            }
        }
    }

    fn fire_gun(&self, gun: &mut Gun, player: &mut Player, out: &mut Transcript) {
        if !gun.can_fire() {
            out.note("Cannot fire, reload gun!");
            return;
        }
        if player.state() == PlayerState::Reloading {
            out.note("Cannot fire while reloading!");
            return;
        }

        let prev = player.state();
        player.set_state(PlayerState::Shooting);
        gun.consume_bullet();

        self.vfx.show(VfxCue::MuzzleFlash, out);
        self.sfx.play(SfxCue::Gunshot, out);
        self.anim.play(AnimCue::GunRecoil, out);

        player.set_state(prev);

        self.sfx.play(SfxCue::CasingDrop, out);
    }

    fn aim_gun(&self, player: &mut Player, out: &mut Transcript) {
        match player.state() {
            PlayerState::Aiming => {
                player.set_state(PlayerState::Idle);
                self.anim.play(AnimCue::GunLower, out);
            }
            PlayerState::Idle => {
                player.set_state(PlayerState::Aiming);
                self.anim.play(AnimCue::GunAim, out);
            }
            PlayerState::Shooting | PlayerState::Reloading => {}
        }
    }

    fn reload_gun(&self, gun: &mut Gun, player: &mut Player, out: &mut Transcript) {
        if player.state() == PlayerState::Shooting {
            out.note("Can't reload while shooting!");
            return;
        }

        let prev = player.state();
        player.set_state(PlayerState::Reloading);
        out.note("Reloading Gun...");

        self.anim.play(AnimCue::GunUnloadMag, out);
        self.sfx.play(SfxCue::GunUnloadMag, out);
        self.anim.play(AnimCue::GunLoadMag, out);
        self.sfx.play(SfxCue::GunLoadMag, out);
        self.anim.play(AnimCue::GunLoadChamber, out);
        self.sfx.play(SfxCue::GunLoadChamber, out);

        gun.reload();

        player.set_state(prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facade() -> GunFacade {
        GunFacade::new(AnimationStore::new(), GunStore::new())
    }

    fn small_gun(magazine: u32) -> Gun {
        Gun::new(
            "Test",
            GunStats {
                recoil: 1,
                magazine,
            },
        )
    }

    #[test]
    fn test_equip_known_model_fills_magazine() {
        let mut out = Transcript::new();
        let gun = facade().equip_gun("M4A1", &mut out);
        assert_eq!(gun.model(), "M4A1");
        assert_eq!(gun.bullets(), 30);
        let texts = out.texts();
        assert_eq!(texts[0], "Creating Gun");
        assert_eq!(texts[3], "Equipping gun...");
        assert_eq!(*texts.last().unwrap(), "Equipped gun (7.3s)");
    }

    #[test]
    fn test_equip_unknown_model_cannot_fire() {
        let f = facade();
        let mut out = Transcript::new();
        let mut gun = f.equip_gun("Musket", &mut out);
        let mut player = Player::new();
        assert!(!gun.can_fire());
        out.clear();
        f.process_input(InputKey::MouseL, &mut gun, &mut player, &mut out);
        assert_eq!(
            out.texts(),
            vec!["Received Input : MouseL", "Cannot fire, reload gun!"]
        );
        f.process_input(InputKey::R, &mut gun, &mut player, &mut out);
        assert_eq!(gun.bullets(), 0);
    }

    #[test]
    fn test_fire_consumes_and_restores_state() {
        let f = facade();
        let mut gun = small_gun(2);
        let mut player = Player::new();
        player.set_state(PlayerState::Aiming);
        let mut out = Transcript::new();
        f.process_input(InputKey::MouseL, &mut gun, &mut player, &mut out);
        assert_eq!(gun.bullets(), 1);
        assert_eq!(player.state(), PlayerState::Aiming);
        assert_eq!(
            out.texts()[1..],
            [
                "Showing Effect: VFX_Muzzle_Flash",
                "Playing Sound: SFX_Gunshot",
                "Playing Animation: ANIM_Gun_Recoil",
                "Playing Sound: SFX_Casing_Drop",
            ]
        );
    }

    #[test]
    fn test_cannot_fire_while_reloading() {
        let f = facade();
        let mut gun = small_gun(2);
        let mut player = Player::new();
        player.set_state(PlayerState::Reloading);
        let mut out = Transcript::new();
        f.process_input(InputKey::MouseL, &mut gun, &mut player, &mut out);
        assert_eq!(gun.bullets(), 2);
        assert_eq!(out.texts()[1], "Cannot fire while reloading!");
    }

    #[test]
    fn test_empty_check_wins_over_reloading_check() {
        let f = facade();
        let mut gun = small_gun(0);
        let mut player = Player::new();
        player.set_state(PlayerState::Reloading);
        let mut out = Transcript::new();
        f.process_input(InputKey::MouseL, &mut gun, &mut player, &mut out);
        assert_eq!(out.texts()[1], "Cannot fire, reload gun!");
    }

    #[test]
    fn test_cannot_reload_while_shooting() {
        let f = facade();
        let mut gun = small_gun(3);
        gun.consume_bullet();
        let mut player = Player::new();
        player.set_state(PlayerState::Shooting);
        let mut out = Transcript::new();
        f.process_input(InputKey::R, &mut gun, &mut player, &mut out);
        assert_eq!(gun.bullets(), 2);
        assert_eq!(out.texts()[1], "Can't reload while shooting!");
    }

    #[test]
    fn test_reload_refills_and_restores_state() {
        let f = facade();
        let mut gun = small_gun(3);
        gun.consume_bullet();
        gun.consume_bullet();
        let mut player = Player::new();
        let mut out = Transcript::new();
        f.process_input(InputKey::R, &mut gun, &mut player, &mut out);
        assert_eq!(gun.bullets(), 3);
        assert_eq!(player.state(), PlayerState::Idle);
        assert_eq!(out.texts().len(), 8);
    }

    #[test]
    fn test_aim_toggles_idle_and_aiming() {
        let f = facade();
        let mut gun = small_gun(1);
        let mut player = Player::new();
        let mut out = Transcript::new();
        f.process_input(InputKey::MouseR, &mut gun, &mut player, &mut out);
        assert_eq!(player.state(), PlayerState::Aiming);
        f.process_input(InputKey::MouseR, &mut gun, &mut player, &mut out);
        assert_eq!(player.state(), PlayerState::Idle);
        assert_eq!(
            out.texts(),
            vec![
                "Received Input : MouseR",
                "Playing Animation: ANIM_Gun_Aim",
                "Received Input : MouseR",
                "Playing Animation: ANIM_Gun_Lower",
            ]
        );
    }

    #[test]
    fn test_aim_ignored_while_reloading() {
        let f = facade();
        let mut gun = small_gun(1);
        let mut player = Player::new();
        player.set_state(PlayerState::Reloading);
        let mut out = Transcript::new();
        f.process_input(InputKey::MouseR, &mut gun, &mut player, &mut out);
        assert_eq!(player.state(), PlayerState::Reloading);
        assert_eq!(out.texts(), vec!["Received Input : MouseR"]);
    }

    #[test]
    fn test_raw_unknown_input_is_ignored() {
        let f = facade();
        let mut gun = small_gun(1);
        let mut player = Player::new();
        let mut out = Transcript::new();
        f.process_raw_input("Space", &mut gun, &mut player, &mut out);
        assert_eq!(gun.bullets(), 1);
        assert_eq!(out.texts(), vec!["Received Input : Space"]);
    }
}
