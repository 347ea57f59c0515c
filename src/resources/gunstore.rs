//! Catalog of gun models and their stats.

use log::warn;
use rustc_hash::FxHashMap;

/// Immutable per-model numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GunStats {
    pub recoil: u32,
    /// Rounds per magazine. A fresh or reloaded gun holds this many.
    pub magazine: u32,
}

/// Registry of gun stats keyed by model name.
#[derive(Debug, Clone)]
pub struct GunStore {
    pub guns: FxHashMap<String, GunStats>,
}

impl Default for GunStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GunStore {
    /// Create a store with the built-in models.
    pub fn new() -> Self {
        let mut guns = FxHashMap::default();
        guns.insert(
            "M4A1".to_string(),
            GunStats {
                recoil: 46,
                magazine: 30,
            },
        );
        guns.insert(
            "AK-12".to_string(),
            GunStats {
                recoil: 70,
                magazine: 30,
            },
        );
        Self { guns }
    }

    pub fn insert(&mut self, model: impl Into<String>, stats: GunStats) {
        self.guns.insert(model.into(), stats);
    }

    /// Stats for `model`, or all-zero stats if the model is unknown.
    ///
    /// A zero-magazine gun can never fire; that is the only consequence.
    pub fn stats(&self, model: &str) -> GunStats {
        match self.guns.get(model) {
            Some(stats) => *stats,
            None => {
                warn!("Unknown gun model '{}', using empty stats", model);
                GunStats::default()
            }
        }
    }
}
