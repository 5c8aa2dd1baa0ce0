use std::f32::consts::PI;

use rapier2d::prelude::*;

use crate::constants::{
    PENDULUM_HEAD_RADIUS, PENDULUM_MASS, PENDULUM_SHAFT_DENSITY_SCALE, PENDULUM_SHAFT_DIM,
    PENDULUM_WORLD_POS,
};
use crate::error::Result;
use crate::harness::{Test, TestBase};
use crate::joint::RevoluteJointDef;
use crate::shapes::{BodyDef, FixtureDef, ShapeDef};

/// A thin shaft with a heavy circular head, hinged at the top of the shaft
/// to a small static hook.
pub struct Pendulum {
    base: TestBase,
    pendulum: RigidBodyHandle,
    hook: RigidBodyHandle,
    joint: ImpulseJointHandle,
    head: ColliderHandle,
}

impl Pendulum {
    pub const NAME: &'static str = "Pendulum";

    pub fn new() -> Result<Self> {
        let mut base = TestBase::new();
        let world = &mut base.world;

        let shaft_dim = vector![PENDULUM_SHAFT_DIM[0], PENDULUM_SHAFT_DIM[1]];
        let shaft_pos = vector![shaft_dim.x / 2.0, 0.0];
        let pend_world_pos = vector![PENDULUM_WORLD_POS[0], PENDULUM_WORLD_POS[1]];
        let hook_world_pos = pend_world_pos + vector![shaft_dim.x / 2.0, shaft_dim.y];

        let pendulum = world.create_body(&BodyDef::dynamic(pend_world_pos));

        // Shaft: half-widths are the shaft dims themselves.
        world.create_fixture(
            pendulum,
            &FixtureDef::new(
                ShapeDef::Box {
                    half_extents: shaft_dim,
                    center: shaft_pos,
                    angle: 0.0,
                },
                PENDULUM_MASS * PENDULUM_SHAFT_DENSITY_SCALE,
            ),
        )?;

        // Head sits at the bottom end of the shaft.
        let head_volume = 0.5 * PENDULUM_HEAD_RADIUS * PI * PI;
        let head = world.create_fixture(
            pendulum,
            &FixtureDef::new(
                ShapeDef::Circle {
                    radius: PENDULUM_HEAD_RADIUS,
                    center: vector![shaft_dim.x / 2.0, PENDULUM_HEAD_RADIUS - shaft_dim.y],
                },
                PENDULUM_MASS / head_volume,
            ),
        )?;

        let hook = world.create_body(&BodyDef::fixed(hook_world_pos));
        world.create_fixture(hook, &FixtureDef::new(ShapeDef::circle(2.0 * shaft_dim.x), 0.0))?;

        let mut joint_def =
            RevoluteJointDef::initialize(world, pendulum, hook, Point::from(hook_world_pos))?;
        joint_def.collide_connected = false;
        let joint = world.create_revolute_joint(&joint_def)?;

        log::info!(
            "pendulum ready: hinge at ({}, {}), mass {:.4} kg",
            hook_world_pos.x,
            hook_world_pos.y,
            world.body(pendulum).map_or(0.0, |rb| rb.mass())
        );

        Ok(Self {
            base,
            pendulum,
            hook,
            joint,
            head,
        })
    }

    /// Registry factory.
    pub fn create() -> Result<Box<dyn Test>> {
        Ok(Box::new(Self::new()?))
    }

    pub fn body(&self) -> RigidBodyHandle {
        self.pendulum
    }

    pub fn hook(&self) -> RigidBodyHandle {
        self.hook
    }

    pub fn joint(&self) -> ImpulseJointHandle {
        self.joint
    }

    /// Rotation of the pendulum relative to its hanging pose (radians).
    pub fn swing_angle(&self) -> Result<f32> {
        self.base.world.joint_angle(self.joint).map(|a| -a)
    }

    /// World-space center of the head.
    pub fn head_position(&self) -> Option<Point<f32>> {
        self.base
            .world
            .collider(self.head)
            .map(|c| Point::from(*c.translation()))
    }
}

impl Test for Pendulum {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn base(&self) -> &TestBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut TestBase {
        &mut self.base
    }

    fn status(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Ok(swing) = self.swing_angle() {
            lines.push(format!("swing angle = {swing:+.4} rad"));
        }
        if let Ok(separation) = self.base.world.joint_separation(self.joint) {
            lines.push(format!("hinge separation = {separation:.2e} m"));
        }
        lines
    }
}
