//! Run settings shared by every test.
//!
//! Settings come from [`Settings::default`], optionally overlaid by a TOML file.
//! Missing keys keep their defaults, so a file only needs the values it changes:
//!
//! ```toml
//! hz = 120.0
//! gravity = [0.0, -9.81]
//! pause = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::constants::{DEFAULT_GRAVITY, DEFAULT_HZ};
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Simulation frequency. `0` freezes the world.
    pub hz: f32,
    /// World gravity (m/s²).
    pub gravity: [f32; 2],
    /// While set, only `single_step` advances the world.
    pub pause: bool,
    /// One-shot request to advance a paused world by a single step.
    pub single_step: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hz: DEFAULT_HZ,
            gravity: DEFAULT_GRAVITY,
            pause: false,
            single_step: false,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text and validate them.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // A subnormal hz would turn into an infinite time step.
        let infinite_step = self.hz > 0.0 && !(1.0 / self.hz).is_finite();
        if !self.hz.is_finite() || self.hz < 0.0 || infinite_step {
            return Err(ConfigError::InvalidHz(self.hz));
        }
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        Ok(())
    }

    /// Time step for the next world step, `0` when the world should not advance.
    ///
    /// Consumes a pending `single_step` request.
    pub fn next_time_step(&mut self) -> f32 {
        let dt = if self.hz > 0.0 { 1.0 / self.hz } else { 0.0 };
        if self.pause {
            if self.single_step {
                self.single_step = false;
                return dt;
            }
            return 0.0;
        }
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let s = Settings::from_toml_str("hz = 120.0\n").unwrap();
        assert_eq!(s.hz, 120.0);
        assert_eq!(s.gravity, DEFAULT_GRAVITY);
        assert!(!s.pause);
        assert!(!s.single_step);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn rejects_negative_hz() {
        let err = Settings::from_toml_str("hz = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHz(h) if h == -1.0));
    }

    #[test]
    fn rejects_hz_with_infinite_time_step() {
        let s = Settings {
            hz: 1.0e-39,
            ..Settings::default()
        };
        assert!(matches!(s.validate(), Err(ConfigError::InvalidHz(_))));

        let err = Settings::from_toml_str("hz = 1e-39").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHz(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Settings::from_toml_str("velocity_iterations = 8").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn rejects_non_finite_gravity() {
        let s = Settings {
            gravity: [0.0, f32::NAN],
            ..Settings::default()
        };
        assert!(matches!(s.validate(), Err(ConfigError::InvalidGravity(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here/settings.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn paused_world_only_advances_on_single_step() {
        let mut s = Settings {
            pause: true,
            ..Settings::default()
        };
        assert_eq!(s.next_time_step(), 0.0);

        s.single_step = true;
        assert!((s.next_time_step() - 1.0 / DEFAULT_HZ).abs() < 1.0e-9);
        assert!(!s.single_step);
        assert_eq!(s.next_time_step(), 0.0);
    }

    #[test]
    fn zero_hz_never_advances() {
        let mut s = Settings {
            hz: 0.0,
            ..Settings::default()
        };
        assert_eq!(s.next_time_step(), 0.0);
    }
}
