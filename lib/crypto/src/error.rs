use std::fmt;

use cipher::block_padding::UnpadError;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidKeyLength(usize),
    InvalidIvLength(usize),
    InvalidCiphertextLength(usize),
    InvalidPadding,
}

impl From<UnpadError> for Error {
    fn from(_: UnpadError) -> Self {
        Self::InvalidPadding
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength(len) => {
                write!(f, "invalid key length {len}, expected 16, 24 or 32 bytes")
            }
            Self::InvalidIvLength(len) => {
                write!(f, "invalid iv length {len}, expected 16 bytes")
            }
            Self::InvalidCiphertextLength(len) => write!(
                f,
                "invalid ciphertext length {len}, expected a non-zero multiple of 16 bytes"
            ),
            Self::InvalidPadding => write!(f, "invalid PKCS#7 padding"),
        }
    }
}

impl std::error::Error for Error {}
