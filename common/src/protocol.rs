#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "bincode")]
use bincode::{Decode, Encode};

use bevy_ecs::component::Component;
use bevy_math::Vec3;

// Macro to reduce boilerplate for structs
macro_rules! message {
    ($(#[$meta:meta])* struct $name:ident $body:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "bincode", derive(Encode, Decode))]
        pub struct $name $body
    };
}

// ============================================================================
// Common Data Types
// ============================================================================

// World-space point. The maze lies in the XY plane, Z points up out of the floor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

// Box extents: `w` along X, `h` along Y, `depth` along Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub struct Size {
    pub w: f32,
    pub h: f32,
    pub depth: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Position> for Vec3 {
    fn from(p: Position) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Size> for Vec3 {
    fn from(s: Size) -> Self {
        Self::new(s.w, s.h, s.depth)
    }
}

impl From<Rgb> for Vec3 {
    fn from(c: Rgb) -> Self {
        Self::new(c.r, c.g, c.b)
    }
}

// ============================================================================
// Maze Geometry
// ============================================================================

message! {
// One maximal horizontal run of wall cells inside a single grid row.
// `col_start..col_end` is the covered cell range (exclusive end).
struct WallSegment {
    pub row: usize,
    pub col_start: usize,
    pub col_end: usize,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub depth: f32,
    pub color: Rgb,
}
}

message! {
// Walkable cell with its spawn/navigation center.
struct EmptyCell {
    pub row: usize,
    pub col: usize,
    pub cx: f32,
    pub cy: f32,
}
}

// Surface description handed to the renderer. `None` means the renderer's default.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub struct Material {
    pub diffuse: Rgb,
    pub specular: Option<Rgb>,
    pub shininess: Option<f32>,
}

impl Material {
    #[must_use]
    pub const fn diffuse(diffuse: Rgb) -> Self {
        Self {
            diffuse,
            specular: None,
            shininess: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub enum SegmentKind {
    Floor,
    Wall,
}

// Primitive model the renderer instantiates for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bincode", derive(Encode, Decode))]
pub enum ModelKind {
    #[default]
    Cube,
}

impl ModelKind {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Cube => "cube",
        }
    }
}

message! {
// Request for the world builder to create one renderable box.
struct SegmentRequest {
    pub kind: SegmentKind,
    pub model: ModelKind,
    pub position: Position,
    pub scale: Size,
    pub bounding_box: Size,
    pub material: Material,
}
}

message! {
// Layout data for placing players, cameras and pickups.
struct MazeLayout {
    pub shape: (usize, usize),
    pub center: Position,
    pub empty_areas: Vec<EmptyCell>,
}
}

message! {
// Complete output of one generation: floor request first, then wall requests in scan order.
struct Level {
    pub layout: MazeLayout,
    pub segments: Vec<SegmentRequest>,
}
}

impl Level {
    pub fn walls(&self) -> impl Iterator<Item = &SegmentRequest> {
        self.segments.iter().filter(|s| s.kind == SegmentKind::Wall)
    }

    #[must_use]
    pub fn floor(&self) -> Option<&SegmentRequest> {
        self.segments.iter().find(|s| s.kind == SegmentKind::Floor)
    }
}
