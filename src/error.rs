// error.rs - Synthesis errors
//
// Picking never fails; only terrain synthesis and its configuration can.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("invalid terrain dimensions {width}x{depth}")]
    InvalidDimension { width: usize, depth: usize },

    #[error("invalid upscale factor {0}, must be at least 1")]
    InvalidUpscale(u32),

    #[error("invalid terrain config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, TerrainError>;
