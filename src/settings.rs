//! Game tunables.
//!
//! [`BaseSettings`] is loaded once at startup from `alien_invasion.toml`
//! (or the file named by `ALIEN_INVASION_CONFIG`). Every key is optional:
//! missing keys keep the compiled defaults, so a file can override just the
//! values you care about. [`DynamicSettings`] holds the speeds that ramp up
//! between waves and are reset from the base values at the start of every
//! game.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_ENV_VAR: &str = "ALIEN_INVASION_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "alien_invasion.toml";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Vertical distance between fleet rows.
///
/// `EnemyWidth` advances each row by twice the enemy *width*, which is what
/// the classic layout does. `EnemyHeight` uses the height instead; the two
/// only differ for non-square enemy sprites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPitch {
    #[default]
    EnemyWidth,
    EnemyHeight,
}

/// Shared horizontal direction of the whole fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Left,
    Right,
}

impl FleetDirection {
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Left => -1.0,
            FleetDirection::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Left => FleetDirection::Right,
            FleetDirection::Right => FleetDirection::Left,
        }
    }
}

/// Static configuration. Never mutated after startup.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BaseSettings {
    // ── Playfield ────────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,
    pub bg_color: Rgb,

    // ── Ship ─────────────────────────────────────────────────────────────────
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_speed: f32,
    pub ship_color: Rgb,
    /// Lives granted at the start of every game.
    pub ship_limit: u32,

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_speed: f32,
    pub projectile_color: Rgb,
    pub projectiles_allowed: usize,

    // ── Enemies ──────────────────────────────────────────────────────────────
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_speed: f32,
    pub enemy_color: Rgb,
    pub fleet_drop_speed: f32,
    pub fleet_row_pitch: RowPitch,

    // ── Difficulty / pacing ──────────────────────────────────────────────────
    /// Multiplier applied to every dynamic speed when a wave is cleared.
    pub speedup_scale: f32,
    pub life_lost_pause_ms: u64,

    // ── Play button ──────────────────────────────────────────────────────────
    pub button_width: f32,
    pub button_height: f32,
    pub button_color: Rgb,
    pub button_text_color: Rgb,
}

impl Default for BaseSettings {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,
            bg_color: Rgb(230, 230, 230),

            ship_width: 60.0,
            ship_height: 48.0,
            ship_speed: 1.5,
            ship_color: Rgb(40, 40, 200),
            ship_limit: 3,

            projectile_width: 3.0,
            projectile_height: 15.0,
            projectile_speed: 2.5,
            projectile_color: Rgb(60, 60, 60),
            projectiles_allowed: 3,

            enemy_width: 40.0,
            enemy_height: 40.0,
            enemy_speed: 1.0,
            enemy_color: Rgb(0, 160, 0),
            fleet_drop_speed: 10.0,
            fleet_row_pitch: RowPitch::EnemyWidth,

            speedup_scale: 1.1,
            life_lost_pause_ms: 500,

            button_width: 200.0,
            button_height: 50.0,
            button_color: Rgb(0, 135, 0),
            button_text_color: Rgb(255, 255, 255),
        }
    }
}

impl BaseSettings {
    /// Path of the config file: `$ALIEN_INVASION_CONFIG` or
    /// `./alien_invasion.toml`.
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load and validate settings from `path`.
    ///
    /// A missing file is not an error: the compiled defaults are used.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings = match std::fs::read_to_string(path) {
            Ok(contents) => {
                let settings = Self::parse(path, &contents)?;
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No {} found; using compiled defaults", path.display());
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from an in-memory TOML document and validate them.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let settings = Self::parse(Path::new("<inline>"), contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would make the simulation degenerate.
    ///
    /// The fleet layout loops until it runs out of room, so the playfield
    /// must be large enough for at least one enemy; otherwise every tick
    /// would "clear" an empty wave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive: [(&'static str, f32); 11] = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("ship_speed", self.ship_speed),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("projectile_speed", self.projectile_speed),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("enemy_speed", self.enemy_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be a positive number, got {value}")));
            }
        }

        if !(self.fleet_drop_speed.is_finite() && self.fleet_drop_speed >= 0.0) {
            return Err(invalid("fleet_drop_speed", "must be zero or positive".into()));
        }
        if !(self.speedup_scale.is_finite() && self.speedup_scale > 1.0) {
            return Err(invalid(
                "speedup_scale",
                format!("must be greater than 1.0, got {}", self.speedup_scale),
            ));
        }
        if self.projectiles_allowed == 0 {
            return Err(invalid("projectiles_allowed", "must be at least 1".into()));
        }
        if self.ship_limit == 0 {
            return Err(invalid("ship_limit", "must be at least 1".into()));
        }
        if self.ship_width > self.screen_width {
            return Err(invalid("ship_width", "wider than the playfield".into()));
        }
        if self.ship_height > self.screen_height {
            return Err(invalid("ship_height", "taller than the playfield".into()));
        }
        if self.enemy_width >= self.screen_width - 2.0 * self.enemy_width {
            return Err(invalid(
                "screen_width",
                format!("too narrow for a {}-wide enemy fleet", self.enemy_width),
            ));
        }
        if self.enemy_height >= self.screen_height - 3.0 * self.enemy_height {
            return Err(invalid(
                "screen_height",
                format!("too short for a {}-tall enemy fleet", self.enemy_height),
            ));
        }
        Ok(())
    }

    pub fn life_lost_pause(&self) -> Duration {
        Duration::from_millis(self.life_lost_pause_ms)
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

/// Speeds that ramp up as waves are cleared.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicSettings {
    pub ship_speed: f32,
    pub projectile_speed: f32,
    pub enemy_speed: f32,
    pub fleet_direction: FleetDirection,
}

impl DynamicSettings {
    pub fn from_base(base: &BaseSettings) -> Self {
        Self {
            ship_speed: base.ship_speed,
            projectile_speed: base.projectile_speed,
            enemy_speed: base.enemy_speed,
            fleet_direction: FleetDirection::Right,
        }
    }
}

/// Base configuration plus the current dynamic scalars.
#[derive(Clone, Debug)]
pub struct Settings {
    pub base: BaseSettings,
    pub dynamic: DynamicSettings,
}

impl Settings {
    pub fn new(base: BaseSettings) -> Self {
        let dynamic = DynamicSettings::from_base(&base);
        Settings { base, dynamic }
    }

    /// Reset every dynamic value to its base.
    pub fn initialize_dynamic_settings(&mut self) {
        self.dynamic = DynamicSettings::from_base(&self.base);
    }

    /// Scale every dynamic speed by `speedup_scale`.
    pub fn increase_speed(&mut self) {
        let scale = self.base.speedup_scale;
        self.dynamic.ship_speed *= scale;
        self.dynamic.projectile_speed *= scale;
        self.dynamic.enemy_speed *= scale;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(BaseSettings::default())
    }
}
