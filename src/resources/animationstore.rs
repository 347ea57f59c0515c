//! Animation duration registry.
//!
//! A minimal store mapping animation names to their playback length in
//! seconds. The facade uses it to report how long an equip sequence takes;
//! the mediator and observer demos never consult it.
//!
//! Keys are plain names rather than [`AnimCue`]s so entries can come from a
//! config file, and so a lookup for a name the store does not know about is
//! a recoverable miss instead of a type error.

use log::warn;
use rustc_hash::FxHashMap;

use crate::events::effects::AnimCue;
use crate::resources::transcript::Transcript;

/// Built-in durations, in seconds.
const DEFAULT_DURATIONS: &[(&str, f32)] = &[
    ("ANIM_Gun_Equip", 3.6),
    ("ANIM_Gun_Load_Mag", 2.7),
    ("ANIM_Gun_Unload_Mag", 1.8),
    ("ANIM_Gun_Load_Chamber", 1.0),
    ("ANIM_Weapon_Recoil", 0.2),
    ("ANIM_Gun_Aim", 2.4),
    ("ANIM_Gun_Lower", 2.0),
];

/// Central registry of animation durations keyed by name.
#[derive(Debug, Clone)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, f32>,
}

impl Default for AnimationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationStore {
    /// Create a store preloaded with the built-in durations.
    pub fn new() -> Self {
        let animations = DEFAULT_DURATIONS
            .iter()
            .map(|(name, secs)| (name.to_string(), *secs))
            .collect();
        Self { animations }
    }

    /// Create a store with no entries.
    pub fn empty() -> Self {
        Self {
            animations: FxHashMap::default(),
        }
    }

    /// Add or replace a duration.
    pub fn insert(&mut self, name: impl Into<String>, seconds: f32) {
        self.animations.insert(name.into(), seconds);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Duration of `name` in seconds.
    ///
    /// Unknown names are narrated as `Animation not found: <name>` and
    /// yield `0.0`.
    pub fn duration(&self, name: &str, out: &mut Transcript) -> f32 {
        match self.animations.get(name) {
            Some(secs) => *secs,
            None => {
                warn!("Animation '{}' has no registered duration", name);
                out.note(format!("Animation not found: {}", name));
                0.0
            }
        }
    }

    /// Shorthand for [`duration`](Self::duration) keyed by a cue.
    pub fn cue_duration(&self, cue: AnimCue, out: &mut Transcript) -> f32 {
        self.duration(cue.name(), out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default_store_has_builtin_durations() {
        let store = AnimationStore::new();
        let mut out = Transcript::new();
        assert!(approx_eq(store.duration("ANIM_Gun_Equip", &mut out), 3.6));
        assert!(approx_eq(store.duration("ANIM_Gun_Lower", &mut out), 2.0));
        assert!(approx_eq(
            store.cue_duration(AnimCue::GunLoadChamber, &mut out),
            1.0
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_unknown_animation_reports_not_found_and_zero() {
        let store = AnimationStore::new();
        let mut out = Transcript::new();
        let secs = store.duration("ANIM_Dance", &mut out);
        assert!(approx_eq(secs, 0.0));
        assert_eq!(out.texts(), vec!["Animation not found: ANIM_Dance"]);
    }

    #[test]
    fn test_recoil_cue_is_not_in_builtin_table() {
        // The table lists the weapon recoil, not the gun recoil cue.
        let store = AnimationStore::new();
        let mut out = Transcript::new();
        assert!(approx_eq(store.cue_duration(AnimCue::GunRecoil, &mut out), 0.0));
        assert!(store.contains("ANIM_Weapon_Recoil"));
    }

    #[test]
    fn test_insert_overrides_duration() {
        let mut store = AnimationStore::empty();
        store.insert("ANIM_Gun_Aim", 1.25);
        let mut out = Transcript::new();
        assert!(approx_eq(store.duration("ANIM_Gun_Aim", &mut out), 1.25));
    }
}
