use rapier2d::prelude::*;

use crate::error::Result;
use crate::world::SimWorld;

/// Revolute (hinge) joint between two bodies.
///
/// Both anchors are stored in their body's local frame. Use
/// [`RevoluteJointDef::initialize`] to derive them from a shared world point.
#[derive(Clone, Debug)]
pub struct RevoluteJointDef {
    pub body_a: RigidBodyHandle,
    pub body_b: RigidBodyHandle,
    pub local_anchor_a: Point<f32>,
    pub local_anchor_b: Point<f32>,
    /// `angle_b - angle_a` at creation. Joint angles are reported relative to it.
    pub reference_angle: f32,
    /// Whether the two jointed bodies may still collide with each other.
    pub collide_connected: bool,
}

impl RevoluteJointDef {
    /// Hinge `body_a` and `body_b` around the world-space point `anchor`,
    /// using the bodies' current poses.
    pub fn initialize(
        world: &SimWorld,
        body_a: RigidBodyHandle,
        body_b: RigidBodyHandle,
        anchor: Point<f32>,
    ) -> Result<Self> {
        let local_anchor_a = world.local_point(body_a, anchor)?;
        let local_anchor_b = world.local_point(body_b, anchor)?;
        let reference_angle = world.body_angle(body_b)? - world.body_angle(body_a)?;

        Ok(Self {
            body_a,
            body_b,
            local_anchor_a,
            local_anchor_b,
            reference_angle,
            collide_connected: false,
        })
    }

    pub(crate) fn to_joint(&self) -> RevoluteJoint {
        RevoluteJointBuilder::new()
            .local_anchor1(self.local_anchor_a)
            .local_anchor2(self.local_anchor_b)
            .contacts_enabled(self.collide_connected)
            .build()
    }
}

