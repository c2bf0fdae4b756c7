use crate::config::MazeConfig;
use common::protocol::Position;

/// Footprint and center of a maze, derived from configuration alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub total_w: f32,
    pub total_h: f32,
    pub center: Position,
}

impl LayoutMetrics {
    #[must_use]
    pub fn new(config: &MazeConfig) -> Self {
        let pair = config.wall_width + config.path_width;
        let total_w = config.width as f32 * pair / 2.0;
        let total_h = config.height as f32 * pair / 2.0;

        Self {
            total_w,
            total_h,
            center: Position {
                x: total_w / 2.0 + config.wall_width / 2.0,
                y: total_h / 2.0 + config.wall_width / 2.0,
                z: 0.0,
            },
        }
    }
}
