//! Rapier-backed simulation world used by every test.
//!
//! `SimWorld` owns the complete Rapier pipeline state. Tests populate it through
//! [`BodyDef`], [`FixtureDef`] and [`RevoluteJointDef`], then advance it with
//! [`SimWorld::step`].
//!
//! Conventions
//! - Units are meters, kilograms and seconds.
//! - Angles are radians, counter-clockwise.
//! - Fixture and anchor coordinates are in the owning body's frame.

// Re-export Rapier so downstream crates can name handles and read bodies
// without depending on `rapier2d` directly.
pub use rapier2d;

use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use rapier2d::prelude::*;

use crate::error::{Result, TestbedError};
use crate::joint::RevoluteJointDef;
use crate::shapes::{BodyDef, FixtureDef, collider_from_fixture};

/// All Rapier state for one simulated world.
///
/// `PhysicsPipeline::step` needs mutable access to every set at once, so they
/// all live together.
pub struct SimWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,

    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,

    integration_parameters: IntegrationParameters,
    gravity: Vector<f32>,

    /// Reference angle recorded for each revolute joint at creation.
    reference_angles: HashMap<ImpulseJointHandle, f32>,
}

impl SimWorld {
    pub fn new(gravity: Vector<f32>) -> Self {
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            integration_parameters: IntegrationParameters::default(),
            gravity,
            reference_angles: HashMap::new(),
        }
    }

    pub fn gravity(&self) -> Vector<f32> {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vector<f32>) {
        self.gravity = gravity;
    }

    pub fn create_body(&mut self, def: &BodyDef) -> RigidBodyHandle {
        let handle = self.bodies.insert(def.to_rigid_body());
        log::debug!(
            "created {:?} body {:?} at ({}, {})",
            def.kind,
            handle,
            def.position.x,
            def.position.y
        );
        handle
    }

    /// Attach a fixture to `body` and refresh the body's mass properties.
    pub fn create_fixture(
        &mut self,
        body: RigidBodyHandle,
        def: &FixtureDef,
    ) -> Result<ColliderHandle> {
        self.require_body(body)?;
        let collider = collider_from_fixture(def)?;
        let handle = self
            .colliders
            .insert_with_parent(collider, body, &mut self.bodies);

        if let Some(rb) = self.bodies.get_mut(body) {
            rb.recompute_mass_properties_from_colliders(&self.colliders);
        }
        log::debug!(
            "attached fixture {:?} to body {:?} (density {})",
            handle,
            body,
            def.density
        );
        Ok(handle)
    }

    pub fn create_revolute_joint(&mut self, def: &RevoluteJointDef) -> Result<ImpulseJointHandle> {
        self.require_body(def.body_a)?;
        self.require_body(def.body_b)?;

        let handle = self
            .impulse_joints
            .insert(def.body_a, def.body_b, def.to_joint(), true);
        self.reference_angles.insert(handle, def.reference_angle);
        log::debug!(
            "created revolute joint {:?} between {:?} and {:?}",
            handle,
            def.body_a,
            def.body_b
        );
        Ok(handle)
    }

    /// Advance the world by `dt` seconds. Non-positive `dt` leaves it untouched.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
        log::trace!("stepped world by {dt}s");
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    pub fn collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    pub fn joint_count(&self) -> usize {
        self.impulse_joints.len()
    }

    /// World rotation of a body (radians).
    pub fn body_angle(&self, handle: RigidBodyHandle) -> Result<f32> {
        Ok(self.require_body(handle)?.rotation().angle())
    }

    /// Map a point from `handle`'s local frame to world space.
    pub fn world_point(&self, handle: RigidBodyHandle, local: Point<f32>) -> Result<Point<f32>> {
        let rb = self.require_body(handle)?;
        Ok(Point::from(rb.rotation() * local.coords + rb.translation()))
    }

    /// Map a world-space point into `handle`'s local frame.
    pub fn local_point(&self, handle: RigidBodyHandle, world: Point<f32>) -> Result<Point<f32>> {
        let rb = self.require_body(handle)?;
        let offset = world.coords - rb.translation();
        Ok(Point::from(rb.rotation().inverse_transform_vector(&offset)))
    }

    /// World-space anchor points of a joint, as seen from each of its bodies.
    pub fn joint_anchors(&self, handle: ImpulseJointHandle) -> Result<(Point<f32>, Point<f32>)> {
        let joint = self
            .impulse_joints
            .get(handle)
            .ok_or(TestbedError::UnknownJoint(handle))?;
        let a = self.world_point(joint.body1, joint.data.local_anchor1())?;
        let b = self.world_point(joint.body2, joint.data.local_anchor2())?;
        Ok((a, b))
    }

    /// Distance between the two world anchors of a joint. Zero when the
    /// constraint is perfectly satisfied.
    pub fn joint_separation(&self, handle: ImpulseJointHandle) -> Result<f32> {
        let (a, b) = self.joint_anchors(handle)?;
        Ok((b - a).norm())
    }

    /// Relative rotation `angle_b - angle_a - reference_angle` of a revolute joint,
    /// wrapped into `[-pi, pi)`.
    pub fn joint_angle(&self, handle: ImpulseJointHandle) -> Result<f32> {
        let joint = self
            .impulse_joints
            .get(handle)
            .ok_or(TestbedError::UnknownJoint(handle))?;
        let reference = self.reference_angles.get(&handle).copied().unwrap_or(0.0);
        let raw = self.body_angle(joint.body2)? - self.body_angle(joint.body1)? - reference;
        Ok(wrap_angle(raw))
    }

    fn require_body(&self, handle: RigidBodyHandle) -> Result<&RigidBody> {
        self.bodies
            .get(handle)
            .ok_or(TestbedError::UnknownBody(handle))
    }
}

/// Wrap an angle into `[-pi, pi)`.
///
/// Body rotations are only known modulo `2 pi`, so raw differences can be off
/// by a full turn.
fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}
