use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum QRError {
    #[error("No input: stdin closed before a line was read")]
    NoInput,

    #[error("Data too long: {0}")]
    DataTooLong(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl From<qrcodegen::DataTooLong> for QRError {
    fn from(err: qrcodegen::DataTooLong) -> Self {
        Self::DataTooLong(err.to_string())
    }
}

pub type QRResult<T> = Result<T, QRError>;
