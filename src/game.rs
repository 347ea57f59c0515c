//! Demo scripts.
//!
//! Each demo builds its own components from the [`DemoConfig`], plays a fixed
//! sequence of actions and narrates into the shared [`Transcript`].
//! [`run_demos`] runs a selection of them under banners, in the order given.

use log::info;

use crate::components::animation::AnimationComponent;
use crate::components::gun::GunComponent;
use crate::components::sfx::SfxComponent;
use crate::components::vfx::VfxComponent;
use crate::events::input::InputKey;
use crate::resources::gameconfig::DemoConfig;
use crate::resources::gunstore::GunStore;
use crate::resources::transcript::Transcript;
use crate::systems::facade::{GunFacade, Player};
use crate::systems::mediator::GunMediator;
use crate::systems::observer::{AnimationObserver, GunSubject, SfxObserver, VfxObserver};
use crate::systems::strategy::{Firearm, Grenade, MeleeWeapon, WeaponContext};

/// The available demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    Mediator,
    Observer,
    Facade,
    Strategy,
}

impl Demo {
    /// Every demo, in the order the binary runs them.
    pub const ALL: [Demo; 4] = [Demo::Mediator, Demo::Observer, Demo::Facade, Demo::Strategy];

    pub fn title(self) -> &'static str {
        match self {
            Demo::Mediator => "Mediator",
            Demo::Observer => "Observer",
            Demo::Facade => "Facade",
            Demo::Strategy => "Strategy",
        }
    }

    pub fn run(self, config: &DemoConfig, out: &mut Transcript) {
        match self {
            Demo::Mediator => mediator_demo(config, out),
            Demo::Observer => observer_demo(out),
            Demo::Facade => facade_demo(config, out),
            Demo::Strategy => strategy_demo(out),
        }
    }
}

/// Inputs fed to the observer demo.
const OBSERVER_INPUTS: [InputKey; 4] = [InputKey::MouseL, InputKey::MouseR, InputKey::R, InputKey::MouseR];

/// Inputs fed to the facade demo after equipping.
const FACADE_INPUTS: [InputKey; 6] = [
    InputKey::MouseL,
    InputKey::MouseR,
    InputKey::MouseL,
    InputKey::R,
    InputKey::MouseL,
    InputKey::MouseR,
];

/// Aim, fire three times, reload, lower.
///
/// With the default two rounds the third shot finds an empty magazine, and
/// the reload does not refill it.
pub fn mediator_demo(config: &DemoConfig, out: &mut Transcript) {
    let gun = GunComponent::new()
        .with_ammo(config.ammo)
        .with_jam_chance(config.jam_chance)
        .with_rng(config.rng());
    let mut mediator = GunMediator::new(gun, std::mem::take(out));

    mediator.toggle_aim_gun();
    mediator.transcript_mut().gap();
    mediator.fire_gun();
    mediator.transcript_mut().gap();
    mediator.fire_gun();
    mediator.transcript_mut().gap();
    mediator.fire_gun();
    mediator.transcript_mut().gap();
    mediator.reload_gun();
    mediator.transcript_mut().gap();
    mediator.toggle_aim_gun();

    info!("Mediator demo finished with {} round(s)", mediator.gun().ammo());
    *out = mediator.into_transcript();
}

/// Sound, visual and animation observers on one subject, driven by inputs.
pub fn observer_demo(out: &mut Transcript) {
    let mut subject = GunSubject::new();
    subject.add_observer(Box::new(SfxObserver::new(SfxComponent::new())));
    subject.add_observer(Box::new(VfxObserver::new(VfxComponent::new())));
    subject.add_observer(Box::new(AnimationObserver::new(AnimationComponent::new())));

    let mut aiming = false;
    for (i, key) in OBSERVER_INPUTS.iter().enumerate() {
        if i > 0 {
            out.gap();
        }
        match key {
            InputKey::MouseL => subject.notify_fire(out),
            InputKey::MouseR => {
                aiming = !aiming;
                subject.notify_aim(aiming, out);
            }
            InputKey::R => subject.notify_reload(out),
        }
    }
}

/// Equip the configured model, then play a fixed input sequence.
pub fn facade_demo(config: &DemoConfig, out: &mut Transcript) {
    let facade = GunFacade::new(config.animation_store(), GunStore::new());
    let mut player = Player::new();
    let mut gun = facade.equip_gun(&config.model, out);
    for key in FACADE_INPUTS {
        facade.process_input(key, &mut gun, &mut player, out);
    }
}

/// Attack with a gun, a knife and a grenade through one context.
pub fn strategy_demo(out: &mut Transcript) {
    let mut context = WeaponContext::new();
    context.equip(Box::new(Firearm::new(30)), out);
    context.attack(out);
    context.equip(Box::new(MeleeWeapon), out);
    context.attack(out);
    context.equip(Box::new(Grenade::new(70)), out);
    context.attack(out);
}

/// Run `demos` in order, each under a banner.
pub fn run_demos(demos: &[Demo], config: &DemoConfig, out: &mut Transcript) {
    for (i, demo) in demos.iter().enumerate() {
        info!("Running {} demo", demo.title());
        if i > 0 {
            out.gap();
        }
        out.note(format!("--------------{} Demo--------------:", demo.title()));
        out.gap();
        demo.run(config, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> DemoConfig {
        let mut config = DemoConfig::new();
        config.jam_chance = 0.0;
        config
    }

    #[test]
    fn test_mediator_demo_sequence_without_jams() {
        let mut out = Transcript::new();
        mediator_demo(&quiet_config(), &mut out);
        let texts = out.texts();
        // aim (2) + fire (6) + fire (6) + empty (1) + reload (4) + lower (1)
        assert_eq!(texts.len(), 20);
        assert_eq!(texts[0], "Playing Animation: ANIM_Gun_Aim");
        assert_eq!(texts[14], "Playing Sound: SFX_Empty_Click");
        assert_eq!(texts[19], "Playing Animation: ANIM_Gun_Lower");
    }

    #[test]
    fn test_observer_demo_toggles_aim() {
        let mut out = Transcript::new();
        observer_demo(&mut out);
        let texts = out.texts();
        assert!(texts.contains(&"Playing Animation: ANIM_Gun_Aim"));
        assert_eq!(*texts.last().unwrap(), "Playing Animation: ANIM_Gun_Lower");
    }

    #[test]
    fn test_run_demos_prints_banners_in_order() {
        let mut out = Transcript::new();
        run_demos(&Demo::ALL, &quiet_config(), &mut out);
        let banners: Vec<&str> = out
            .texts()
            .into_iter()
            .filter(|t| t.starts_with("--------------"))
            .collect();
        assert_eq!(
            banners,
            vec![
                "--------------Mediator Demo--------------:",
                "--------------Observer Demo--------------:",
                "--------------Facade Demo--------------:",
                "--------------Strategy Demo--------------:",
            ]
        );
    }
}
