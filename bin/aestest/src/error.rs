use std::fmt;
use std::string::FromUtf8Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Encoding(base64::DecodeError),
    Decrypt(crypto::Error),
    OutputEncoding(FromUtf8Error),
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::Encoding(err)
    }
}

impl From<crypto::Error> for Error {
    fn from(err: crypto::Error) -> Self {
        Self::Decrypt(err)
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Self {
        Self::OutputEncoding(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding(err) => write!(f, "invalid base64 ciphertext: {err}"),
            Self::Decrypt(err) => write!(f, "decryption error: {err}"),
            Self::OutputEncoding(err) => write!(f, "decrypted text is not valid UTF-8: {err}"),
        }
    }
}

impl std::error::Error for Error {}
