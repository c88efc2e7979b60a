#[derive(Debug, thiserror::Error)]
pub enum SplatError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Out of range: {0}")]
    OutOfRange(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl SplatError {
    pub fn invalid_argument(msg: &str) -> Self {
        SplatError::InvalidArgument(String::from(msg))
    }

    pub fn out_of_range(msg: &str) -> Self {
        SplatError::OutOfRange(String::from(msg))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SplatError::InvalidArgument(_))
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, SplatError::OutOfRange(_))
    }
}
