//! Error types for decoding, frame capture and registry access

use thiserror::Error;

/// Image data could not be turned into a pixel grid
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No bytes were supplied
    #[error("image data is empty")]
    Empty,
    /// The bytes are not a readable raster image
    #[error("failed to read image: {0}")]
    Image(#[from] image::ImageError),
}

/// A frame source failed to produce a usable frame
#[derive(Debug, Error)]
pub enum FrameError {
    /// Buffer length does not match `width * height * 3`
    #[error("frame buffer holds {actual} bytes, expected {expected} for {width}x{height}x3")]
    Layout {
        /// Frame width in pixels
        width: usize,
        /// Frame height in pixels
        height: usize,
        /// Required buffer length
        expected: usize,
        /// Supplied buffer length
        actual: usize,
    },
    /// Reading from the device failed
    #[error("capture device I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A captured frame could not be decoded
    #[error("capture device produced an unreadable frame: {0}")]
    Image(#[from] image::ImageError),
}

/// The product registry could not answer a lookup
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Registry storage could not be read
    #[error("registry I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Registry storage is not valid
    #[error("registry data is invalid: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two rows share a primary key
    #[error("registry contains duplicate product id {0}")]
    DuplicateId(i64),
    /// The backend is unreachable
    #[error("registry unavailable: {0}")]
    Unavailable(String),
}
