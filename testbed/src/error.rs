use rapier2d::prelude::{ImpulseJointHandle, RigidBodyHandle};
use thiserror::Error;

/// Top-level error type for the testbed.
#[derive(Debug, Error)]
pub enum TestbedError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Body not found: {0:?}")]
    UnknownBody(RigidBodyHandle),

    #[error("Joint not found: {0:?}")]
    UnknownJoint(ImpulseJointHandle),

    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("No test named {0:?} is registered")]
    UnknownTest(String),
}

/// Settings loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid hz: {0} (must be 0 or a positive value with a finite time step)")]
    InvalidHz(f32),

    #[error("Invalid gravity: {0:?} (components must be finite)")]
    InvalidGravity([f32; 2]),
}

pub type Result<T, E = TestbedError> = std::result::Result<T, E>;
