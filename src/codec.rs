//! Base64 transport codec.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::codec::error::Base64Error;

/// Base64 encoding and decoding over the standard alphabet.
#[derive(Debug)]
pub struct Base64;

impl Base64 {
    /// Encodes `data` as a base64 string.
    pub fn encode(data: impl AsRef<[u8]>) -> String {
        STANDARD.encode(data)
    }

    /// Decodes `encoded` into the text it carries.
    ///
    /// Fails when `encoded` is not valid base64 or when the decoded bytes
    /// are not valid UTF-8. Use [`Base64::decode_bytes`] for raw payloads.
    pub fn decode(encoded: &str) -> Result<String, Base64Error> {
        let data = STANDARD.decode(encoded)?;

        Ok(String::from_utf8(data)?)
    }

    /// Decodes `encoded` into raw bytes.
    pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>, Base64Error> {
        Ok(STANDARD.decode(encoded)?)
    }
}

/// Error-related types.
pub mod error {
    use thiserror::Error;

    #[derive(Clone, Debug, Eq, Error, PartialEq)]
    pub enum Base64Error {
        #[error(transparent)]
        Decode(#[from] base64::DecodeError),
        #[error("Decoded data is not valid UTF-8")]
        Utf8(#[from] std::string::FromUtf8Error),
    }
}
