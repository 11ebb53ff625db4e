use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid bin dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Nothing to pack")]
    Empty,
    #[error("No bin configuration placed all rects ({combos} combos tried, scale capped at {max_scale})")]
    SearchExhausted { combos: usize, max_scale: f64 },
}

pub type Result<T> = std::result::Result<T, PackError>;
