//! Observer-based notification fan-out.
//!
//! The alternative to the mediator: [`GunSubject`] keeps an ordered list of
//! [`GunObserver`]s and calls a fixed hook on each of them directly. There
//! is no event-name indirection and no secondary events; one notification is
//! one flat pass over the list, in registration order.
//!
//! Every hook defaults to doing nothing. An observer overrides only the hooks
//! it cares about, so a missing override means "not interested" by
//! construction.

use log::debug;

use crate::components::animation::AnimationComponent;
use crate::components::sfx::SfxComponent;
use crate::components::vfx::VfxComponent;
use crate::events::effects::{AnimCue, SfxCue, VfxCue};
use crate::resources::transcript::Transcript;

/// Capability set of a gun observer.
pub trait GunObserver {
    /// The gun fired.
    fn on_fire(&mut self, _out: &mut Transcript) {}

    /// The gun was reloaded.
    fn on_reload(&mut self, _out: &mut Transcript) {}

    /// The gun was raised (`aiming == true`) or lowered.
    fn on_aim(&mut self, _aiming: bool, _out: &mut Transcript) {}
}

/// Plays the firing and reload sounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SfxObserver {
    sfx: SfxComponent,
}

impl SfxObserver {
    pub fn new(sfx: SfxComponent) -> Self {
        Self { sfx }
    }
}

impl GunObserver for SfxObserver {
    fn on_fire(&mut self, out: &mut Transcript) {
        self.sfx.play(SfxCue::Gunshot, out);
        self.sfx.play(SfxCue::CasingDrop, out);
    }

    fn on_reload(&mut self, out: &mut Transcript) {
        self.sfx.play(SfxCue::GunReload, out);
    }
}

/// Shows the muzzle flash. Ignores reload and aim.
#[derive(Debug, Clone, Copy, Default)]
pub struct VfxObserver {
    vfx: VfxComponent,
}

impl VfxObserver {
    pub fn new(vfx: VfxComponent) -> Self {
        Self { vfx }
    }
}

impl GunObserver for VfxObserver {
    fn on_fire(&mut self, out: &mut Transcript) {
        self.vfx.show(VfxCue::MuzzleFlash, out);
    }
}

/// Plays recoil, reload and aim/lower animations.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationObserver {
    anim: AnimationComponent,
}

impl AnimationObserver {
    pub fn new(anim: AnimationComponent) -> Self {
        Self { anim }
    }
}

impl GunObserver for AnimationObserver {
    fn on_fire(&mut self, out: &mut Transcript) {
        self.anim.play(AnimCue::GunRecoil, out);
    }

    fn on_reload(&mut self, out: &mut Transcript) {
        self.anim.play(AnimCue::GunReload, out);
    }

    fn on_aim(&mut self, aiming: bool, out: &mut Transcript) {
        let cue = if aiming {
            AnimCue::GunAim
        } else {
            AnimCue::GunLower
        };
        self.anim.play(cue, out);
    }
}

/// The observed gun: an append-only, ordered list of observers.
#[derive(Default)]
pub struct GunSubject {
    observers: Vec<Box<dyn GunObserver>>,
}

impl GunSubject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer` after all existing ones.
    ///
    /// The same kind of observer may be added more than once; each copy is
    /// notified.
    pub fn add_observer(&mut self, observer: Box<dyn GunObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn notify_fire(&mut self, out: &mut Transcript) {
        debug!("notify_fire -> {} observer(s)", self.observers.len());
        for observer in self.observers.iter_mut() {
            observer.on_fire(out);
        }
    }

    pub fn notify_reload(&mut self, out: &mut Transcript) {
        debug!("notify_reload -> {} observer(s)", self.observers.len());
        for observer in self.observers.iter_mut() {
            observer.on_reload(out);
        }
    }

    pub fn notify_aim(&mut self, aiming: bool, out: &mut Transcript) {
        debug!(
            "notify_aim({}) -> {} observer(s)",
            aiming,
            self.observers.len()
        );
        for observer in self.observers.iter_mut() {
            observer.on_aim(aiming, out);
        }
    }
}
