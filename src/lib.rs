//! Alien Invasion: a fixed-timestep arcade shooter core.
//!
//! - `settings`: base tunables (TOML) and the dynamic speeds that ramp per wave
//! - `entities`: ship, projectiles, enemies and the store that owns them
//! - `movement`, `formation`, `collision`: the per-kind tick rules
//! - `compute`: one simulation tick
//! - `session`: menu / active / life-lost pause / game-over
//! - `input`, `render`: the boundaries a front end plugs into

pub mod collision;
pub mod compute;
pub mod entities;
pub mod error;
pub mod formation;
pub mod geometry;
pub mod input;
pub mod movement;
pub mod render;
pub mod session;
pub mod settings;

pub use error::ConfigError;
pub use session::{Game, SessionSignal, SessionState};
pub use settings::{BaseSettings, Settings};

/// Target simulation rate.
pub const TICKS_PER_SECOND: u32 = 60;
