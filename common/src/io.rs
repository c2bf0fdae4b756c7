use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::protocol::Level;

// ============================================================================
// Level Encoding
// ============================================================================

#[cfg(feature = "json")]
pub fn encode_level(level: &Level) -> Result<Vec<u8>> {
    let data = serde_json::to_vec(level)?;
    Ok(data)
}

#[cfg(all(feature = "bincode", not(feature = "json")))]
pub fn encode_level(level: &Level) -> Result<Vec<u8>> {
    let data = bincode::encode_to_vec(level, bincode::config::standard())?;
    Ok(data)
}

#[cfg(feature = "json")]
pub fn decode_level(data: &[u8]) -> Result<Level> {
    let result = serde_json::from_slice(data)?;
    Ok(result)
}

#[cfg(all(feature = "bincode", not(feature = "json")))]
pub fn decode_level(data: &[u8]) -> Result<Level> {
    let result = bincode::decode_from_slice(data, bincode::config::standard())?.0;
    Ok(result)
}

pub fn write_level(path: &Path, level: &Level) -> Result<usize> {
    let data = encode_level(level)?;
    fs::write(path, &data).with_context(|| format!("Failed to write level to {}", path.display()))?;
    Ok(data.len())
}

pub fn read_level(path: &Path) -> Result<Level> {
    let data = fs::read(path).with_context(|| format!("Failed to read level from {}", path.display()))?;
    decode_level(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{EmptyCell, MazeLayout, Position};

    #[test]
    fn test_decode_restores_layout() {
        let level = Level {
            layout: MazeLayout {
                shape: (3, 3),
                center: Position { x: 1.5, y: 1.5, z: 0.0 },
                empty_areas: vec![EmptyCell {
                    row: 1,
                    col: 1,
                    cx: 2.5,
                    cy: 2.5,
                }],
            },
            segments: Vec::new(),
        };

        let data = encode_level(&level).unwrap();
        assert_eq!(decode_level(&data).unwrap(), level);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_level(&[0xff, 0x00, 0x13]).is_err());
    }
}
