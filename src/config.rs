//! Configuration types for Explodiemoji.
//!
//! Every tunable constant of the physics and burst factory lives here, with
//! defaults that reproduce the classic behaviour. Configurations serialize
//! to JSON and can be passed to the binary with `--config`.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Range;
use std::path::Path;

/// Per-tick physics constants. Units are pixels and ticks.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration added to `vy` each tick while gravity is on.
    pub gravity: f32,
    /// Velocity multiplier applied on every reflection.
    pub restitution: f32,
    /// Distance from each viewport edge at which particles collide.
    pub wall_margin: f32,
    /// Number of damped floor bounces before a particle settles.
    pub bounce_cap: u32,
    /// Horizontal velocity multiplier while resting on the floor.
    pub floor_friction: f32,
    /// Speed below which both velocity components count as "stopped".
    pub rest_threshold: f32,
    /// Opacity lost per tick by a settled particle.
    pub fast_fade: f32,
    /// Opacity lost per tick otherwise.
    pub slow_fade: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            restitution: 0.6,
            wall_margin: 20.0,
            bounce_cap: 3,
            floor_friction: 0.9,
            rest_threshold: 0.1,
            fast_fade: 0.05,
            slow_fade: 0.002,
        }
    }
}

/// Parameters of the particle factory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BurstConfig {
    /// Particles per burst.
    pub count: u32,
    /// Inset from each viewport edge for the random burst origin.
    pub padding: f32,
    /// Maximum distance of a particle's spawn point from the origin.
    pub spawn_radius: f32,
    /// Half-width of the random perturbation added to each direction (radians).
    pub angle_jitter: f32,
    /// Base launch speed range.
    pub base_speed: Range<f32>,
    /// Range of the random multiplier applied to the base speed.
    pub speed_multiplier: Range<f32>,
    /// Range of the extra vertical velocity added to every particle (negative is up).
    pub vertical_boost: Range<f32>,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: 25,
            padding: 60.0,
            spawn_radius: 10.0,
            angle_jitter: 0.25,
            base_speed: 8.0..14.0,
            speed_multiplier: 0.7..1.3,
            vertical_boost: -8.0..-5.0,
        }
    }
}

/// Window settings for the desktop host.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Explodiemoji".into(),
            width: 1280,
            height: 800,
        }
    }
}

fn default_picker() -> Vec<String> {
    [
        "😀", "😂", "😍", "😎", "🤯", "🥳", "😱", "🤖", "👻", "💩", "🎉", "🎈", "🔥", "✨",
        "⭐", "💖", "💥", "🌈", "🍕", "🍩", "🍓", "🐸", "🐱", "🦄", "🚀", "⚽", "🎸", "💎",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Complete application configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub burst: BurstConfig,
    /// Emojis preconfigured on the button grid (a "+" slot is always added after them).
    pub palette: Vec<String>,
    /// Candidates offered by the emoji picker.
    pub picker: Vec<String>,
    /// Initial state of the gravity toggle.
    pub gravity_enabled: bool,
    /// Milliseconds between physics ticks.
    pub tick_interval_ms: u64,
    /// Upper bound on ticks replayed after a stalled frame.
    pub max_catch_up_ticks: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            physics: PhysicsConfig::default(),
            burst: BurstConfig::default(),
            palette: Vec::new(),
            picker: default_picker(),
            gravity_enabled: true,
            tick_interval_ms: 16,
            max_catch_up_ticks: 4,
        }
    }
}

impl AppConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check that every value is usable by the simulator and host.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        let b = &self.burst;

        let finite = [
            ("physics.gravity", p.gravity),
            ("physics.wall_margin", p.wall_margin),
            ("physics.floor_friction", p.floor_friction),
            ("physics.rest_threshold", p.rest_threshold),
            ("physics.fast_fade", p.fast_fade),
            ("physics.slow_fade", p.slow_fade),
            ("burst.padding", b.padding),
            ("burst.spawn_radius", b.spawn_radius),
            ("burst.angle_jitter", b.angle_jitter),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite")));
        }

        if !(0.0..=1.0).contains(&p.restitution) {
            return Err(invalid(format!(
                "physics.restitution must be within [0, 1], got {}",
                p.restitution
            )));
        }
        if p.fast_fade <= 0.0 || p.slow_fade <= 0.0 {
            return Err(invalid("fade rates must be positive, or particles never retire"));
        }
        if b.count == 0 {
            return Err(invalid("burst.count must be at least 1"));
        }
        for (name, range) in [
            ("burst.base_speed", &b.base_speed),
            ("burst.speed_multiplier", &b.speed_multiplier),
            ("burst.vertical_boost", &b.vertical_boost),
        ] {
            if !range.start.is_finite() || !range.end.is_finite() || range.start > range.end {
                return Err(invalid(format!(
                    "{name} must be an ordered finite range, got {}..{}",
                    range.start, range.end
                )));
            }
        }
        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms must be at least 1"));
        }
        if self.max_catch_up_ticks == 0 {
            return Err(invalid("max_catch_up_ticks must be at least 1"));
        }
        if self.palette.iter().chain(&self.picker).any(|e| e.is_empty()) {
            return Err(invalid("palette and picker entries must not be empty"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_constants() {
        let config = AppConfig::default();
        assert_eq!(config.physics.gravity, 0.3);
        assert_eq!(config.physics.bounce_cap, 3);
        assert_eq!(config.burst.count, 25);
        assert_eq!(config.burst.padding, 60.0);
        assert_eq!(config.tick_interval_ms, 16);
        assert!(config.gravity_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "gravity_enabled": false, "physics": { "gravity": 0.5 } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(!config.gravity_enabled);
        assert_eq!(config.physics.gravity, 0.5);
        assert_eq!(config.physics.restitution, 0.6);
        assert_eq!(config.burst, BurstConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_burst() {
        let mut config = AppConfig::default();
        config.burst.count = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut config = AppConfig::default();
        config.burst.base_speed = 14.0..8.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("burst.base_speed"));
    }

    #[test]
    fn test_validate_rejects_bad_restitution_and_interval() {
        let mut config = AppConfig::default();
        config.physics.restitution = 1.5;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut config = AppConfig::default();
        config.physics.gravity = f32::NAN;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("physics.gravity"));
    }
}
