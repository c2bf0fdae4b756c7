use bevy_ecs::{bundle::Bundle, entity::Entity, world::World};
use bevy_math::Vec3;
use tracing::debug;

use crate::{
    components::{BoundingBox, FloorMarker, Model, Transformation, TransformationMatrix, WallMarker},
    resources::LevelLayout,
};
use common::protocol::{Level, Material, SegmentKind, SegmentRequest};

#[derive(Bundle)]
struct SegmentBundle {
    model: Model,
    transformation: Transformation,
    bounding_box: BoundingBox,
    matrix: TransformationMatrix,
    material: Material,
}

// Spawn one entity for a segment request.
pub fn spawn_segment(world: &mut World, request: &SegmentRequest) -> Entity {
    let transformation = Transformation {
        position: Vec3::from(request.position),
        scale: Vec3::from(request.scale),
    };

    let mut entity = world.spawn(SegmentBundle {
        model: Model(request.model),
        transformation,
        bounding_box: BoundingBox(Vec3::from(request.bounding_box)),
        matrix: TransformationMatrix(transformation.matrix()),
        material: request.material,
    });

    match request.kind {
        SegmentKind::Floor => entity.insert(FloorMarker),
        SegmentKind::Wall => entity.insert(WallMarker),
    };

    entity.id()
}

// Materialize a generated level: one entity per segment, layout as a resource.
pub fn spawn_level(world: &mut World, level: &Level) -> Vec<Entity> {
    let entities: Vec<Entity> = level
        .segments
        .iter()
        .map(|request| spawn_segment(world, request))
        .collect();

    world.insert_resource(LevelLayout(level.layout.clone()));
    debug!("spawned {} maze entities", entities.len());
    entities
}
