use rapier2d::prelude::vector;

use crate::constants::DEFAULT_GRAVITY;
use crate::settings::Settings;
use crate::world::SimWorld;

/// State shared by every test: the world it populates and a step counter.
pub struct TestBase {
    pub world: SimWorld,
    /// Number of steps that actually advanced the world.
    pub step_count: u64,
}

impl Default for TestBase {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBase {
    pub fn new() -> Self {
        Self {
            world: SimWorld::new(vector![DEFAULT_GRAVITY[0], DEFAULT_GRAVITY[1]]),
            step_count: 0,
        }
    }

    /// Advance the world once according to `settings`.
    ///
    /// Paused or zero-hz settings leave the world and `step_count` untouched,
    /// except that a pending `single_step` is consumed and taken.
    pub fn step(&mut self, settings: &mut Settings) {
        let dt = settings.next_time_step();
        if dt <= 0.0 {
            return;
        }
        self.world
            .set_gravity(vector![settings.gravity[0], settings.gravity[1]]);
        self.world.step(dt);
        self.step_count += 1;
    }
}

/// A selectable testbed scene.
pub trait Test {
    /// Display name, matching the registry entry.
    fn name(&self) -> &'static str;

    fn base(&self) -> &TestBase;

    fn base_mut(&mut self) -> &mut TestBase;

    fn step(&mut self, settings: &mut Settings) {
        self.base_mut().step(settings);
    }

    fn world(&self) -> &SimWorld {
        &self.base().world
    }

    fn step_count(&self) -> u64 {
        self.base().step_count
    }

    /// Human-readable status lines for the host to print.
    fn status(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{BodyDef, FixtureDef, ShapeDef};

    struct Falling {
        base: TestBase,
    }

    impl Test for Falling {
        fn name(&self) -> &'static str {
            "Falling"
        }

        fn base(&self) -> &TestBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut TestBase {
            &mut self.base
        }
    }

    fn falling() -> (Falling, rapier2d::prelude::RigidBodyHandle) {
        let mut base = TestBase::new();
        let body = base.world.create_body(&BodyDef::dynamic(vector![0.0, 10.0]));
        base.world
            .create_fixture(body, &FixtureDef::new(ShapeDef::circle(0.5), 1.0))
            .unwrap();
        (Falling { base }, body)
    }

    #[test]
    fn running_settings_advance_and_count() {
        let (mut t, body) = falling();
        let mut settings = Settings::default();
        for _ in 0..3 {
            t.step(&mut settings);
        }
        assert_eq!(t.step_count(), 3);
        assert!(t.world().body(body).unwrap().translation().y < 10.0);
    }

    #[test]
    fn paused_test_waits_for_single_step() {
        let (mut t, body) = falling();
        let mut settings = Settings {
            pause: true,
            ..Settings::default()
        };

        t.step(&mut settings);
        assert_eq!(t.step_count(), 0);
        assert!((t.world().body(body).unwrap().translation().y - 10.0).abs() < 1.0e-6);

        settings.single_step = true;
        t.step(&mut settings);
        t.step(&mut settings);
        assert_eq!(t.step_count(), 1);
        assert!(!settings.single_step);
    }

    #[test]
    fn settings_gravity_is_applied() {
        let (mut t, body) = falling();
        let mut settings = Settings {
            gravity: [0.0, 10.0],
            ..Settings::default()
        };
        t.step(&mut settings);
        assert!((t.world().gravity().y - 10.0).abs() < 1.0e-6);
        assert!(t.world().body(body).unwrap().translation().y > 10.0);
    }
}
