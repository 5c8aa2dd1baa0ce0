pub mod pendulum;

pub use pendulum::Pendulum;
