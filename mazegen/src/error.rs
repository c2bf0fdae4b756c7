use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("maze {name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: i32 },

    #[error("{name} must be a finite positive size, got {value}")]
    InvalidSize { name: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("grid of {rows}x{cols} cells exceeds the limit of {limit} cells")]
    TooManyCells { rows: usize, cols: usize, limit: usize },

    #[error("grid of {rows}x{cols} cells overflows the address space")]
    ShapeOverflow { rows: usize, cols: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}
