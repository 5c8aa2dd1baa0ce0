/// Default world gravity (m/s²), pointing down the Y axis.
pub const DEFAULT_GRAVITY: [f32; 2] = [0.0, -10.0];

/// Default simulation frequency. One call to `Test::step` advances `1 / hz` seconds.
pub const DEFAULT_HZ: f32 = 60.0;

/// Default Coulomb friction for a fixture.
pub const DEFAULT_FRICTION: f32 = 0.2;

/// Pendulum mass budget (kg) used to derive the fixture densities.
pub const PENDULUM_MASS: f32 = 1.0;

/// Radius of the pendulum head (meters).
pub const PENDULUM_HEAD_RADIUS: f32 = 2.0;

/// Shaft dimensions `(x, y)`, passed straight through as box half-widths.
pub const PENDULUM_SHAFT_DIM: [f32; 2] = [0.2, 10.0];

/// World position of the pendulum body origin.
pub const PENDULUM_WORLD_POS: [f32; 2] = [0.0, 20.0];

/// Scale applied to `PENDULUM_MASS` to get the shaft density.
///
/// Keeps the shaft nearly massless so the head dominates the dynamics.
pub const PENDULUM_SHAFT_DENSITY_SCALE: f32 = 0.00001;
