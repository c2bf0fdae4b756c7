use bevy_ecs::component::Component;
use bevy_math::{Mat4, Quat, Vec3};

use common::protocol::ModelKind;

// ============================================================================
// Bevy Components
// ============================================================================

/// Primitive the renderer instantiates for this entity
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Model(pub ModelKind);

/// Box center and extents in world space
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    pub position: Vec3,
    pub scale: Vec3,
}

impl Transformation {
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, Quat::IDENTITY, self.position)
    }
}

/// Axis-aligned box extents used for collision by the world
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox(pub Vec3);

/// Cached model matrix for `Transformation`
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TransformationMatrix(pub Mat4);

// ============================================================================
// Markers
// ============================================================================

#[derive(Component)]
pub struct FloorMarker;

#[derive(Component)]
pub struct WallMarker;
