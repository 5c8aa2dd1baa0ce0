pub mod constants;
pub mod error;
pub mod harness;
pub mod joint;
pub mod registry;
pub mod scenes;
pub mod settings;
pub mod shapes;
pub mod world;

pub use error::{ConfigError, Result, TestbedError};
pub use harness::{Test, TestBase};
pub use joint::RevoluteJointDef;
pub use registry::{TESTS, TestEntry};
pub use scenes::Pendulum;
pub use settings::Settings;
pub use shapes::{BodyDef, BodyKind, FixtureDef, ShapeDef, collider_from_fixture};
pub use world::{SimWorld, rapier2d};
