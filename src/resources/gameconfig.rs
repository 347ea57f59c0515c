//! Demo configuration.
//!
//! Settings loaded from an INI file, with safe defaults so the demos run
//! unchanged when no file is present. Keys are case-sensitive so animation
//! names can be used verbatim.
//!
//! # Configuration File Format
//!
//! ```ini
//! [gun]
//! ammo = 2
//! jam_chance = 0.5
//! model = M4A1
//!
//! [rng]
//! seed = 42
//!
//! [animations]
//! ANIM_Gun_Equip = 3.6
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::animationstore::AnimationStore;

/// Default safe values for startup
const DEFAULT_AMMO: u32 = 2;
const DEFAULT_JAM_CHANCE: f32 = 0.5;
const DEFAULT_MODEL: &str = "M4A1";
const DEFAULT_CONFIG_PATH: &str = "./gunfx.ini";

/// Demo configuration.
///
/// Holds the starting state of the mediator's gun, the facade's gun model,
/// an optional RNG seed and any animation duration overrides.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Rounds loaded into the mediator demo's gun.
    pub ammo: u32,
    /// Probability in `[0, 1]` that a shot jams.
    pub jam_chance: f32,
    /// Gun model equipped by the facade demo.
    pub model: String,
    /// Fixed seed for the jam coin flip; `None` seeds from the process.
    pub seed: Option<u64>,
    /// Animation durations that replace or extend the built-in table.
    pub animations: Vec<(String, f32)>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            ammo: DEFAULT_AMMO,
            jam_chance: DEFAULT_JAM_CHANCE,
            model: DEFAULT_MODEL.to_string(),
            seed: None,
            animations: Vec::new(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Whether the configured file exists on disk.
    pub fn file_exists(&self) -> bool {
        self.config_path.is_file()
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new_cs();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new_cs();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        // [gun] section
        if let Some(ammo) = config.getuint("gun", "ammo")? {
            self.ammo = u32::try_from(ammo).map_err(|_| format!("ammo out of range: {}", ammo))?;
        }
        if let Some(chance) = config.getfloat("gun", "jam_chance")? {
            if !(0.0..=1.0).contains(&chance) {
                return Err(format!("jam_chance must be within [0, 1], got {}", chance));
            }
            self.jam_chance = chance as f32;
        }
        if let Some(model) = config.get("gun", "model") {
            self.model = model;
        }

        // [rng] section
        if let Some(seed) = config.getuint("rng", "seed")? {
            self.seed = Some(seed);
        }

        // [animations] section
        if let Some(section) = config.get_map_ref().get("animations") {
            for (name, value) in section {
                let Some(value) = value else { continue };
                let secs: f32 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid duration for {}: {}", name, value))?;
                self.animations.push((name.clone(), secs));
            }
            self.animations.sort_by(|a, b| a.0.cmp(&b.0));
        }

        info!(
            "Loaded config: ammo={}, jam_chance={}, model={}, seed={:?}, {} animation override(s)",
            self.ammo,
            self.jam_chance,
            self.model,
            self.seed,
            self.animations.len()
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new_cs();

        // [gun] section
        config.set("gun", "ammo", Some(self.ammo.to_string()));
        config.set("gun", "jam_chance", Some(self.jam_chance.to_string()));
        config.set("gun", "model", Some(self.model.clone()));

        // [rng] section
        if let Some(seed) = self.seed {
            config.set("rng", "seed", Some(seed.to_string()));
        }

        // [animations] section
        for (name, secs) in &self.animations {
            config.set("animations", name, Some(secs.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Build the animation store: built-in durations plus overrides.
    pub fn animation_store(&self) -> AnimationStore {
        let mut store = AnimationStore::new();
        for (name, secs) in &self.animations {
            store.insert(name.clone(), *secs);
        }
        store
    }

    /// Random source for the jam coin flip.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}
