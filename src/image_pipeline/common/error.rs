use thiserror::Error;

/// The two failure classes a conversion can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is missing, unreadable, or not a recognized image encoding.
    Decode,
    /// The pixels cannot be stored in the target format, or the destination is not writable.
    Encode,
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::InputReadError(_) | ConversionError::DecodeError(_) => ErrorKind::Decode,
            // Dimension checks and raw io only happen once decoding succeeded
            ConversionError::OutputWriteError(_)
            | ConversionError::EncodeError(_)
            | ConversionError::InvalidDimensions(_, _)
            | ConversionError::IoError(_) => ErrorKind::Encode,
        }
    }

    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }

    pub fn is_encode(&self) -> bool {
        self.kind() == ErrorKind::Encode
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
