use rapier2d::prelude::*;

use crate::constants::DEFAULT_FRICTION;
use crate::error::{Result, TestbedError};

/// Body type, mapped onto the engine's rigid-body types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyKind {
    /// Never moves. Infinite mass.
    #[default]
    Static,
    /// Moved by velocity only, ignores forces.
    Kinematic,
    /// Fully simulated.
    Dynamic,
}

/// Parameters for creating a rigid body.
#[derive(Clone, Debug)]
pub struct BodyDef {
    pub kind: BodyKind,
    /// World-space position of the body origin.
    pub position: Vector<f32>,
    /// World-space rotation (radians).
    pub angle: f32,
    pub allow_sleep: bool,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            kind: BodyKind::Static,
            position: Vector::zeros(),
            angle: 0.0,
            allow_sleep: true,
        }
    }
}

impl BodyDef {
    pub fn dynamic(position: Vector<f32>) -> Self {
        Self {
            kind: BodyKind::Dynamic,
            position,
            ..Self::default()
        }
    }

    pub fn fixed(position: Vector<f32>) -> Self {
        Self {
            kind: BodyKind::Static,
            position,
            ..Self::default()
        }
    }

    pub(crate) fn to_rigid_body(&self) -> RigidBody {
        let body_type = match self.kind {
            BodyKind::Static => RigidBodyType::Fixed,
            BodyKind::Kinematic => RigidBodyType::KinematicVelocityBased,
            BodyKind::Dynamic => RigidBodyType::Dynamic,
        };
        RigidBodyBuilder::new(body_type)
            .translation(self.position)
            .rotation(self.angle)
            .can_sleep(self.allow_sleep)
            .build()
    }
}

/// Supported fixture shapes, expressed in the parent body's frame.
#[derive(Clone, Debug)]
pub enum ShapeDef {
    /// Oriented box with the given half-widths, centered at `center` and
    /// rotated by `angle` (radians) relative to the body.
    Box {
        half_extents: Vector<f32>,
        center: Vector<f32>,
        angle: f32,
    },

    /// Circle of `radius` centered at `center`.
    Circle { radius: f32, center: Vector<f32> },
}

impl ShapeDef {
    /// Axis-aligned box centered on the body origin.
    pub fn cuboid(hx: f32, hy: f32) -> Self {
        Self::Box {
            half_extents: vector![hx, hy],
            center: Vector::zeros(),
            angle: 0.0,
        }
    }

    /// Circle centered on the body origin.
    pub fn circle(radius: f32) -> Self {
        Self::Circle {
            radius,
            center: Vector::zeros(),
        }
    }
}

/// A shape plus the material attached to a body.
#[derive(Clone, Debug)]
pub struct FixtureDef {
    pub shape: ShapeDef,
    /// Mass per unit area (kg/m²). `0` contributes no mass.
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl FixtureDef {
    pub fn new(shape: ShapeDef, density: f32) -> Self {
        Self {
            shape,
            density,
            friction: DEFAULT_FRICTION,
            restitution: 0.0,
        }
    }
}

/// Build an engine collider from a `FixtureDef`.
///
/// The collider pose is relative to the body it will be attached to.
pub fn collider_from_fixture(def: &FixtureDef) -> Result<Collider> {
    if !def.density.is_finite() || def.density < 0.0 {
        return Err(TestbedError::InvalidShape(format!(
            "density must be finite and >= 0, got {}",
            def.density
        )));
    }

    let builder = match &def.shape {
        ShapeDef::Box {
            half_extents,
            center,
            angle,
        } => {
            if !half_extents.iter().all(|h| h.is_finite() && *h > 0.0) {
                return Err(TestbedError::InvalidShape(format!(
                    "box half extents must be finite and > 0, got ({}, {})",
                    half_extents.x, half_extents.y
                )));
            }
            ColliderBuilder::cuboid(half_extents.x, half_extents.y)
                .translation(*center)
                .rotation(*angle)
        }

        ShapeDef::Circle { radius, center } => {
            if !radius.is_finite() || *radius <= 0.0 {
                return Err(TestbedError::InvalidShape(format!(
                    "circle radius must be finite and > 0, got {radius}"
                )));
            }
            ColliderBuilder::ball(*radius).translation(*center)
        }
    };

    Ok(builder
        .density(def.density)
        .friction(def.friction)
        .restitution(def.restitution)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_keeps_half_extents_and_offset() {
        let def = FixtureDef::new(
            ShapeDef::Box {
                half_extents: vector![0.2, 10.0],
                center: vector![0.1, 0.0],
                angle: 0.0,
            },
            2.0,
        );
        let collider = collider_from_fixture(&def).unwrap();

        let cuboid = collider.shape().as_cuboid().unwrap();
        assert!((cuboid.half_extents.x - 0.2).abs() < 1.0e-6);
        assert!((cuboid.half_extents.y - 10.0).abs() < 1.0e-6);
        assert!((collider.translation().x - 0.1).abs() < 1.0e-6);
        assert!((collider.density() - 2.0).abs() < 1.0e-6);
        assert!((collider.friction() - DEFAULT_FRICTION).abs() < 1.0e-6);
    }

    #[test]
    fn circle_keeps_radius() {
        let collider = collider_from_fixture(&FixtureDef::new(ShapeDef::circle(0.4), 0.0)).unwrap();
        let ball = collider.shape().as_ball().unwrap();
        assert!((ball.radius - 0.4).abs() < 1.0e-6);
    }

    #[test]
    fn rejects_degenerate_geometry() {
        for shape in [
            ShapeDef::circle(0.0),
            ShapeDef::circle(f32::NAN),
            ShapeDef::cuboid(-1.0, 1.0),
            ShapeDef::cuboid(1.0, f32::INFINITY),
        ] {
            let err = collider_from_fixture(&FixtureDef::new(shape, 1.0)).unwrap_err();
            assert!(matches!(err, TestbedError::InvalidShape(_)));
        }
    }

    #[test]
    fn rejects_negative_density() {
        let err = collider_from_fixture(&FixtureDef::new(ShapeDef::circle(1.0), -0.5)).unwrap_err();
        assert!(matches!(err, TestbedError::InvalidShape(_)));
    }

    #[test]
    fn body_def_maps_kind() {
        let body = BodyDef::dynamic(vector![1.0, 2.0]).to_rigid_body();
        assert!(body.is_dynamic());
        assert!((body.translation().y - 2.0).abs() < 1.0e-6);

        assert!(BodyDef::fixed(Vector::zeros()).to_rigid_body().is_fixed());

        let kinematic = BodyDef {
            kind: BodyKind::Kinematic,
            ..BodyDef::default()
        }
        .to_rigid_body();
        assert!(kinematic.is_kinematic());
        assert_eq!(kinematic.body_type(), RigidBodyType::KinematicVelocityBased);
    }

    #[test]
    fn body_def_maps_rotation() {
        let body = BodyDef {
            angle: 0.5,
            ..BodyDef::dynamic(Vector::zeros())
        }
        .to_rigid_body();
        assert!((body.rotation().angle() - 0.5).abs() < 1.0e-6);
    }

    #[test]
    fn disallowed_sleep_disables_activation_thresholds() {
        let awake = BodyDef {
            allow_sleep: false,
            ..BodyDef::dynamic(Vector::zeros())
        }
        .to_rigid_body();
        assert!(awake.activation().normalized_linear_threshold < 0.0);
        assert!(awake.activation().angular_threshold < 0.0);

        let sleepy = BodyDef::dynamic(Vector::zeros()).to_rigid_body();
        assert!(sleepy.activation().normalized_linear_threshold > 0.0);
    }
}
