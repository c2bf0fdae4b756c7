pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod map;
pub mod resources;
pub mod spawning;

pub use config::{Difficulty, GridShape, MazeConfig, init_tracing};
pub use error::{ConfigurationError, GenerationError, MazeError};
pub use map::generate_level;
