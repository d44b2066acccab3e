pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cannot reverse straight into the snake's own neck")]
pub struct ReverseDirectionError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("grid size {size} out of range ({}..={})", Grid::MIN_SIZE, Grid::MAX_SIZE)]
pub struct GridSizeError {
    pub size: u8,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid hex: expected 32 characters, got {len}")]
    Length { len: usize },
    #[display("invalid hex: {input} ({source})")]
    Digit {
        input: String,
        source: std::num::ParseIntError,
    },
}
