use crate::protocol::Rgb;

// ============================================================================
// Maze Geometry Defaults
// ============================================================================

pub const DEFAULT_DEPTH: f32 = 2.0; // Wall extrusion height
pub const DEFAULT_WALL_WIDTH: f32 = 1.0; // Extent of even-indexed cells
pub const DEFAULT_PATH_WIDTH: f32 = 3.0; // Extent of odd-indexed cells

// ============================================================================
// Floor Material
// ============================================================================

pub const FLOOR_DIFFUSE: Rgb = Rgb::new(0.6, 0.6, 0.6);
pub const FLOOR_SPECULAR: Rgb = Rgb::new(0.2, 0.3, 0.6);
pub const FLOOR_SHININESS: f32 = 6.0;
