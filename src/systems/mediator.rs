//! Mediator-based event hub.
//!
//! [`GunMediator`] owns the gun and the three effect handlers and is the only
//! place that knows how one component's events turn into another component's
//! work. Components never reference each other or the mediator: the gun gets
//! a `&mut dyn Mediator` for the duration of each action, and effect handlers
//! return their completion events to the hub that called them.
//!
//! Dispatch
//! - [`Mediator::notify`] looks at the sender (the [`Notification`] variant)
//!   and consults the matching reaction routine: [`react_on_gun`],
//!   [`react_on_sfx`], [`react_on_vfx`] or [`react_on_anim`].
//! - Each reaction is performed in order. A handler's completion event is fed
//!   straight back into `notify` before the next reaction runs, so a chain is
//!   resolved depth-first and fully before the top-level call returns.
//! - A `(sender, event)` pair with no listed reaction does nothing. That is a
//!   normal terminal state, not an error, and is what ends every chain.
//!
//! Reaction table
//!
//! | Notification                     | Reactions                                         |
//! |----------------------------------|---------------------------------------------------|
//! | `Gun_Fire`                       | SFX_Gunshot, SFX_Casing_Drop, VFX_Muzzle_Flash, ANIM_Gun_Recoil |
//! | `Gun_Empty_Fire`                 | SFX_Empty_Click                                   |
//! | `Gun_Reload`                     | ANIM_Gun_Reload, SFX_Gun_Reload                   |
//! | `Gun_Aim`                        | ANIM_Gun_Aim                                      |
//! | `Gun_Lower`                      | ANIM_Gun_Lower                                    |
//! | `Gun_Jammed`                     | SFX_Jammed_Gun, ANIM_Gun_Unjam                    |
//! | `SFX_Played_Casing_Drop`         | VFX_Casing_Hit_Ground                             |
//! | `SFX_Played_Gun_Reload`          | VFX_Small_Shake                                   |
//! | `VFX_Played_Muzzle_Flash`        | VFX_Camera_Bloom                                  |
//! | `Animation_Finished_Gun_Reload`  | VFX_Mag_Drop                                      |
//! | `Animation_Finished_Gun_Aim`     | "Camera sway reduced."                            |

use log::{debug, trace};
use smallvec::{SmallVec, smallvec};

use crate::components::animation::AnimationComponent;
use crate::components::gun::GunComponent;
use crate::components::sfx::SfxComponent;
use crate::components::vfx::VfxComponent;
use crate::events::Notification;
use crate::events::effects::{AnimCue, AnimEvent, SfxCue, SfxEvent, VfxCue, VfxEvent};
use crate::events::gun::GunEvent;
use crate::resources::transcript::Transcript;

/// Dispatch capability handed to components that report events.
pub trait Mediator {
    fn notify(&mut self, notification: Notification);
}

/// One step of a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Sfx(SfxCue),
    Vfx(VfxCue),
    Anim(AnimCue),
    /// Narration with no handler behind it.
    Note(&'static str),
}

/// Reactions to a single notification, in execution order.
pub type Reactions = SmallVec<[Reaction; 4]>;

/// Reactions to events from the gun.
pub fn react_on_gun(event: GunEvent) -> Reactions {
    match event {
        GunEvent::Fire => smallvec![
            Reaction::Sfx(SfxCue::Gunshot),
            Reaction::Sfx(SfxCue::CasingDrop),
            Reaction::Vfx(VfxCue::MuzzleFlash),
            Reaction::Anim(AnimCue::GunRecoil),
        ],
        GunEvent::EmptyFire => smallvec![Reaction::Sfx(SfxCue::EmptyClick)],
        GunEvent::Reload => smallvec![
            Reaction::Anim(AnimCue::GunReload),
            Reaction::Sfx(SfxCue::GunReload),
        ],
        GunEvent::Aim => smallvec![Reaction::Anim(AnimCue::GunAim)],
        GunEvent::Lower => smallvec![Reaction::Anim(AnimCue::GunLower)],
        GunEvent::Jammed => smallvec![
            Reaction::Sfx(SfxCue::JammedGun),
            Reaction::Anim(AnimCue::GunUnjam),
        ],
    }
}

/// Reactions to sounds that finished playing.
pub fn react_on_sfx(event: SfxEvent) -> Reactions {
    match event {
        SfxEvent::Played(SfxCue::CasingDrop) => smallvec![Reaction::Vfx(VfxCue::CasingHitGround)],
        SfxEvent::Played(SfxCue::GunReload) => smallvec![Reaction::Vfx(VfxCue::SmallShake)],
        SfxEvent::Played(_) => SmallVec::new(),
    }
}

/// Reactions to visual effects that finished showing.
pub fn react_on_vfx(event: VfxEvent) -> Reactions {
    match event {
        VfxEvent::Played(VfxCue::MuzzleFlash) => smallvec![Reaction::Vfx(VfxCue::CameraBloom)],
        VfxEvent::Played(_) => SmallVec::new(),
    }
}

/// Reactions to animations that finished.
pub fn react_on_anim(event: AnimEvent) -> Reactions {
    match event {
        AnimEvent::Finished(AnimCue::GunReload) => smallvec![Reaction::Vfx(VfxCue::MagDrop)],
        AnimEvent::Finished(AnimCue::GunAim) => smallvec![Reaction::Note("Camera sway reduced.")],
        AnimEvent::Finished(_) => SmallVec::new(),
    }
}

/// Look up the reactions for `notification` by sender.
pub fn reactions_for(notification: Notification) -> Reactions {
    match notification {
        Notification::Gun(e) => react_on_gun(e),
        Notification::Sfx(e) => react_on_sfx(e),
        Notification::Vfx(e) => react_on_vfx(e),
        Notification::Anim(e) => react_on_anim(e),
    }
}

/// The effect handlers plus the transcript they narrate into.
///
/// Split from [`GunMediator`] so the gun can borrow the hub mutably as its
/// dispatcher while the mediator holds the gun.
#[derive(Debug, Default)]
struct EffectHub {
    sfx: SfxComponent,
    vfx: VfxComponent,
    anim: AnimationComponent,
    out: Transcript,
}

impl EffectHub {
    fn perform(&mut self, reaction: Reaction) {
        match reaction {
            Reaction::Sfx(cue) => {
                let done = self.sfx.play(cue, &mut self.out);
                self.notify(done.into());
            }
            Reaction::Vfx(cue) => {
                let done = self.vfx.show(cue, &mut self.out);
                self.notify(done.into());
            }
            Reaction::Anim(cue) => {
                let done = self.anim.play(cue, &mut self.out);
                self.notify(done.into());
            }
            Reaction::Note(text) => self.out.note(text),
        }
    }
}

impl Mediator for EffectHub {
    fn notify(&mut self, notification: Notification) {
        let reactions = reactions_for(notification);
        if reactions.is_empty() {
            trace!("No reaction for {}", notification);
            return;
        }
        debug!("{} -> {} reaction(s)", notification, reactions.len());
        for reaction in reactions {
            self.perform(reaction);
        }
    }
}

/// Central dispatcher owning the gun and all effect handlers.
#[derive(Debug)]
pub struct GunMediator {
    gun: GunComponent,
    hub: EffectHub,
}

impl GunMediator {
    /// Take ownership of `gun` and narrate into `out`.
    pub fn new(gun: GunComponent, out: Transcript) -> Self {
        Self {
            gun,
            hub: EffectHub {
                out,
                ..EffectHub::default()
            },
        }
    }

    pub fn fire_gun(&mut self) {
        self.gun.fire(&mut self.hub);
    }

    pub fn reload_gun(&mut self) {
        self.gun.reload(&mut self.hub);
    }

    pub fn toggle_aim_gun(&mut self) {
        self.gun.toggle_aim(&mut self.hub);
    }

    pub fn gun(&self) -> &GunComponent {
        &self.gun
    }

    pub fn gun_mut(&mut self) -> &mut GunComponent {
        &mut self.gun
    }

    pub fn transcript(&self) -> &Transcript {
        &self.hub.out
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.hub.out
    }

    /// Consume the mediator and keep only what it narrated.
    pub fn into_transcript(self) -> Transcript {
        self.hub.out
    }
}

impl Mediator for GunMediator {
    fn notify(&mut self, notification: Notification) {
        self.hub.notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mediator(ammo: u32, jam_chance: f32) -> GunMediator {
        let gun = GunComponent::new()
            .with_ammo(ammo)
            .with_jam_chance(jam_chance);
        GunMediator::new(gun, Transcript::new())
    }

    #[test]
    fn test_fire_chain_is_depth_first() {
        let mut m = mediator(1, 0.0);
        m.fire_gun();
        assert_eq!(
            m.transcript().texts(),
            vec![
                "Playing Sound: SFX_Gunshot",
                "Playing Sound: SFX_Casing_Drop",
                "Showing Effect: VFX_Casing_Hit_Ground",
                "Showing Effect: VFX_Muzzle_Flash",
                "Showing Effect: VFX_Camera_Bloom",
                "Playing Animation: ANIM_Gun_Recoil",
            ]
        );
    }

    #[test]
    fn test_jam_adds_unjam_reactions_after_fire_chain() {
        let mut m = mediator(1, 1.0);
        m.fire_gun();
        let texts = m.transcript().texts();
        assert_eq!(texts.len(), 8);
        assert_eq!(
            &texts[6..],
            &["Playing Sound: SFX_Jammed_Gun", "Playing Animation: ANIM_Gun_Unjam"]
        );
    }

    #[test]
    fn test_empty_fire_only_clicks() {
        let mut m = mediator(0, 1.0);
        m.fire_gun();
        assert_eq!(m.transcript().texts(), vec!["Playing Sound: SFX_Empty_Click"]);
        assert_eq!(m.gun().ammo(), 0);
    }

    #[test]
    fn test_reload_chain() {
        let mut m = mediator(0, 0.0);
        m.reload_gun();
        assert_eq!(
            m.transcript().texts(),
            vec![
                "Playing Animation: ANIM_Gun_Reload",
                "Showing Effect: VFX_Mag_Drop",
                "Playing Sound: SFX_Gun_Reload",
                "Showing Effect: VFX_Small_Shake",
            ]
        );
    }

    #[test]
    fn test_aim_then_lower() {
        let mut m = mediator(0, 0.0);
        m.toggle_aim_gun();
        m.toggle_aim_gun();
        assert_eq!(
            m.transcript().texts(),
            vec![
                "Playing Animation: ANIM_Gun_Aim",
                "Camera sway reduced.",
                "Playing Animation: ANIM_Gun_Lower",
            ]
        );
    }

    #[test]
    fn test_unmatched_notifications_are_ignored() {
        let mut m = mediator(0, 0.0);
        m.notify(SfxEvent::Played(SfxCue::Gunshot).into());
        m.notify(VfxEvent::Played(VfxCue::CameraBloom).into());
        m.notify(AnimEvent::Finished(AnimCue::GunLower).into());
        assert!(m.transcript().is_empty());
    }

    #[test]
    fn test_notify_from_outside_runs_reactions() {
        let mut m = mediator(3, 0.0);
        m.notify(GunEvent::Aim.into());
        assert_eq!(m.transcript().len(), 2);
        assert!(!m.gun().is_aiming());
    }

    #[test]
    fn test_reaction_table_lookup() {
        assert_eq!(
            reactions_for(Notification::Gun(GunEvent::EmptyFire)).as_slice(),
            &[Reaction::Sfx(SfxCue::EmptyClick)]
        );
        assert!(reactions_for(Notification::Sfx(SfxEvent::Played(SfxCue::EmptyClick))).is_empty());
    }
}
