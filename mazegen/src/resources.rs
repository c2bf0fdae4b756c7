use bevy_ecs::prelude::Resource;

use common::protocol::MazeLayout;

// ============================================================================
// Bevy Resources
// ============================================================================

// Layout of the current level - inserted once when the level is materialized
#[derive(Resource, Debug, Clone)]
pub struct LevelLayout(pub MazeLayout);
