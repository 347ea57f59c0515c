//! Effect cues and their completion events.
//!
//! A cue names one effect to render: a sound, a visual effect or an
//! animation. When a handler finishes rendering a cue it hands back a
//! completion event carrying the same cue, so reactions can be keyed on
//! "which effect just completed" without any string surgery.
//!
//! Cues display under their canonical asset names (`SFX_Gunshot`,
//! `VFX_Muzzle_Flash`, `ANIM_Gun_Recoil`). Completion events display as
//! `SFX_Played_<stem>`, `VFX_Played_<stem>` and `Animation_Finished_<stem>`,
//! where the stem is the cue name without its kind prefix.

use std::fmt;

/// Sound cues understood by [`SfxComponent`](crate::components::sfx::SfxComponent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfxCue {
    Gunshot,
    CasingDrop,
    EmptyClick,
    GunReload,
    JammedGun,
    GunUnloadMag,
    GunLoadMag,
    GunLoadChamber,
}

impl SfxCue {
    /// Canonical asset name, e.g. `SFX_Gunshot`.
    pub fn name(self) -> &'static str {
        match self {
            SfxCue::Gunshot => "SFX_Gunshot",
            SfxCue::CasingDrop => "SFX_Casing_Drop",
            SfxCue::EmptyClick => "SFX_Empty_Click",
            SfxCue::GunReload => "SFX_Gun_Reload",
            SfxCue::JammedGun => "SFX_Jammed_Gun",
            SfxCue::GunUnloadMag => "SFX_Gun_Unload_Mag",
            SfxCue::GunLoadMag => "SFX_Gun_Load_Mag",
            SfxCue::GunLoadChamber => "SFX_Gun_Load_Chamber",
        }
    }

    /// Name without the `SFX_` prefix.
    pub fn stem(self) -> &'static str {
        &self.name()["SFX_".len()..]
    }
}

/// Visual effect cues understood by [`VfxComponent`](crate::components::vfx::VfxComponent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VfxCue {
    MuzzleFlash,
    CasingHitGround,
    CameraBloom,
    MagDrop,
    SmallShake,
}

impl VfxCue {
    /// Canonical asset name, e.g. `VFX_Muzzle_Flash`.
    pub fn name(self) -> &'static str {
        match self {
            VfxCue::MuzzleFlash => "VFX_Muzzle_Flash",
            VfxCue::CasingHitGround => "VFX_Casing_Hit_Ground",
            VfxCue::CameraBloom => "VFX_Camera_Bloom",
            VfxCue::MagDrop => "VFX_Mag_Drop",
            VfxCue::SmallShake => "VFX_Small_Shake",
        }
    }

    /// Name without the `VFX_` prefix.
    pub fn stem(self) -> &'static str {
        &self.name()["VFX_".len()..]
    }
}

/// Animation cues understood by
/// [`AnimationComponent`](crate::components::animation::AnimationComponent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimCue {
    GunRecoil,
    GunReload,
    GunAim,
    GunLower,
    GunUnjam,
    GunEquip,
    GunUnloadMag,
    GunLoadMag,
    GunLoadChamber,
}

impl AnimCue {
    /// Canonical asset name, e.g. `ANIM_Gun_Recoil`.
    ///
    /// This is also the key used by
    /// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
    pub fn name(self) -> &'static str {
        match self {
            AnimCue::GunRecoil => "ANIM_Gun_Recoil",
            AnimCue::GunReload => "ANIM_Gun_Reload",
            AnimCue::GunAim => "ANIM_Gun_Aim",
            AnimCue::GunLower => "ANIM_Gun_Lower",
            AnimCue::GunUnjam => "ANIM_Gun_Unjam",
            AnimCue::GunEquip => "ANIM_Gun_Equip",
            AnimCue::GunUnloadMag => "ANIM_Gun_Unload_Mag",
            AnimCue::GunLoadMag => "ANIM_Gun_Load_Mag",
            AnimCue::GunLoadChamber => "ANIM_Gun_Load_Chamber",
        }
    }

    /// Name without the `ANIM_` prefix.
    pub fn stem(self) -> &'static str {
        &self.name()["ANIM_".len()..]
    }
}

impl fmt::Display for SfxCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for VfxCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for AnimCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reported by the sound handler once a cue has been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfxEvent {
    Played(SfxCue),
}

/// Reported by the visual effect handler once a cue has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VfxEvent {
    Played(VfxCue),
}

/// Reported by the animation handler once a cue has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimEvent {
    Finished(AnimCue),
}

impl fmt::Display for SfxEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SfxEvent::Played(cue) => write!(f, "SFX_Played_{}", cue.stem()),
        }
    }
}

impl fmt::Display for VfxEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfxEvent::Played(cue) => write!(f, "VFX_Played_{}", cue.stem()),
        }
    }
}

impl fmt::Display for AnimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimEvent::Finished(cue) => write!(f, "Animation_Finished_{}", cue.stem()),
        }
    }
}
