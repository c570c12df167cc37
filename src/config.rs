//! Tunable constants: physics, play band, bullets and key bindings.
//!
//! A [`GameConfig`] is either taken from `Default` or read from a RON file,
//! and is validated once at setup.  Nothing in here is consulted from global
//! state; the values are handed to the entities and the intent layer when a
//! session starts.

use std::fs;
use std::path::Path;

use ron::Options;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::intent::{Action, Controls};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("speed unit must be positive, got {0}")]
    SpeedUnit(f32),

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("play band is empty: left {left} is not below right {right}")]
    PlayBand { left: f32, right: f32 },

    #[error("key {key} is bound to both {first:?} and {second:?}")]
    ConflictingBinding {
        key: String,
        first: Action,
        second: Action,
    },

    #[error("action {0:?} has no key bound")]
    Unbound(Action),

    #[error("key {0} is reserved for quit/restart and cannot be bound")]
    ReservedKey(String),

    #[error("key {0} can never be pressed; bind the lowercase letter")]
    UppercaseKey(String),
}

/// What happens to vertical velocity when a falling entity reaches a floor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    /// Clamp to the floor and zero the vertical velocity.
    #[default]
    Stop,
    /// Reflect the vertical velocity scaled by `elasticity`.
    Bounce,
}

/// Per-entity physics constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Horizontal run speed, and the base of the jump impulse.
    pub speed_unit: f32,
    pub mass: f32,
    /// Gravity pull per unit of mass, added to `v_y` every tick.
    pub gravity: f32,
    /// Factor applied to `v_x` on each deceleration step.
    pub drag: f32,
    /// Velocities below this magnitude snap to zero after drag or a bounce.
    pub zero: f32,
    pub elasticity: f32,
    /// Jump impulse in multiples of `speed_unit`.
    pub leap_force: f32,
    pub landing: Landing,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            speed_unit: 1.0,
            mass: 4.0,
            gravity: 0.0,
            drag: 0.9,
            zero: 0.01,
            elasticity: 0.8,
            leap_force: 5.0,
            landing: Landing::Stop,
        }
    }
}

/// Horizontal band inside which an entity is not crashed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayBand {
    pub left: f32,
    pub right: f32,
}

impl Default for PlayBand {
    fn default() -> Self {
        Self { left: 50.0, right: 600.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletSpec {
    /// Distance a bullet travels upward per tick.
    pub speed: f32,
    /// Bullet width; the height is one and a half times this.
    pub width: f32,
}

impl Default for BulletSpec {
    fn default() -> Self {
        Self { speed: 10.0, width: 5.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: Physics,
    pub play_band: PlayBand,
    pub bullet: BulletSpec,
    pub controls: Controls,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: Physics {
                gravity: 0.05,
                ..Physics::default()
            },
            play_band: PlayBand::default(),
            bullet: BulletSpec::default(),
            controls: Controls::default(),
        }
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

impl GameConfig {
    /// Parse and validate a RON document.
    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron_options().from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            file: path.display().to_string(),
            source,
        })?;
        let config = Self::from_ron_str(&contents)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        let numbers = [
            ("speed_unit", p.speed_unit),
            ("mass", p.mass),
            ("gravity", p.gravity),
            ("drag", p.drag),
            ("zero", p.zero),
            ("elasticity", p.elasticity),
            ("leap_force", p.leap_force),
            ("play_band.left", self.play_band.left),
            ("play_band.right", self.play_band.right),
            ("bullet.speed", self.bullet.speed),
            ("bullet.width", self.bullet.width),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if p.speed_unit <= 0.0 {
            return Err(ConfigError::SpeedUnit(p.speed_unit));
        }
        for (field, value) in [
            ("mass", p.mass),
            ("gravity", p.gravity),
            ("zero", p.zero),
            ("leap_force", p.leap_force),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        for (field, value) in [("drag", p.drag), ("elasticity", p.elasticity)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { field, value });
            }
        }
        for (field, value) in [
            ("bullet.speed", self.bullet.speed),
            ("bullet.width", self.bullet.width),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.play_band.left >= self.play_band.right {
            return Err(ConfigError::PlayBand {
                left: self.play_band.left,
                right: self.play_band.right,
            });
        }

        self.controls.validate()
    }
}
