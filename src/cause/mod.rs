//! # SCTP Error Causes
//!
//! Error causes share a fixed 4-octet header (code + length) followed by a
//! code-specific value. Instead of a base type, every cause record embeds an
//! [`ErrorCauseHeader`] by value and delegates encode/decode to it, adding
//! only its own typed body (if any).
//!
//! ## Components
//! - **Header**: the shared code + length + value codec
//! - **Code**: registered cause codes
//! - **Variants**: one record per cause code
//!
//! [`build_error_cause`] is the code → decoder mapping a chunk parser uses to
//! turn a raw cause into a typed record.

pub mod code;
pub mod header;
pub mod variants;

pub use code::ErrorCauseCode;
pub use header::{ErrorCauseHeader, ERROR_CAUSE_HEADER_LENGTH};
pub use variants::{
    InvalidStreamIdentifier, ProtocolViolation, UnrecognizedChunkType, UserInitiatedAbort,
};

use bytes::Buf;

use crate::core::codec::{Marshal, Unmarshal};
use crate::error::{ProtocolError, Result};

/// Any error cause, typed where the code is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCause {
    InvalidStreamIdentifier(InvalidStreamIdentifier),
    UnrecognizedChunkType(UnrecognizedChunkType),
    UserInitiatedAbort(UserInitiatedAbort),
    ProtocolViolation(ProtocolViolation),
    Other(ErrorCauseHeader),
}

impl ErrorCause {
    pub fn code(&self) -> ErrorCauseCode {
        self.header().code
    }

    /// The embedded shared header.
    pub fn header(&self) -> &ErrorCauseHeader {
        match self {
            ErrorCause::InvalidStreamIdentifier(cause) => cause.header(),
            ErrorCause::UnrecognizedChunkType(cause) => &cause.header,
            ErrorCause::UserInitiatedAbort(cause) => &cause.header,
            ErrorCause::ProtocolViolation(cause) => &cause.header,
            ErrorCause::Other(header) => header,
        }
    }
}

impl Marshal for ErrorCause {
    fn marshal(&self) -> Result<Vec<u8>> {
        match self {
            ErrorCause::InvalidStreamIdentifier(cause) => cause.marshal(),
            ErrorCause::UnrecognizedChunkType(cause) => cause.marshal(),
            ErrorCause::UserInitiatedAbort(cause) => cause.marshal(),
            ErrorCause::ProtocolViolation(cause) => cause.marshal(),
            ErrorCause::Other(header) => header.marshal(),
        }
    }
}

fn decode<T: Unmarshal + Default>(raw: &[u8]) -> Result<T> {
    let mut cause = T::default();
    cause.unmarshal(raw)?;
    Ok(cause)
}

/// Decode one error cause from the start of `raw`, dispatching on its code.
///
/// Bytes past the cause's own length are ignored.
pub fn build_error_cause(raw: &[u8]) -> Result<ErrorCause> {
    if raw.len() < ERROR_CAUSE_HEADER_LENGTH {
        return Err(ProtocolError::ErrorCauseTooShort);
    }

    let cause = match ErrorCauseCode((&raw[..]).get_u16()) {
        InvalidStreamIdentifier::CODE => ErrorCause::InvalidStreamIdentifier(decode(raw)?),
        UnrecognizedChunkType::CODE => ErrorCause::UnrecognizedChunkType(decode(raw)?),
        UserInitiatedAbort::CODE => ErrorCause::UserInitiatedAbort(decode(raw)?),
        ProtocolViolation::CODE => ErrorCause::ProtocolViolation(decode(raw)?),
        _ => ErrorCause::Other(decode(raw)?),
    };
    Ok(cause)
}
