//! The shared error cause header every cause variant embeds.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           Cause Code          |          Cause Length         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! /                    Cause-Specific Information                 /
//! \                                                               \
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Cause Length counts the 4 header octets plus the value.

use bytes::{Buf, BufMut, Bytes};

use crate::cause::code::ErrorCauseCode;
use crate::core::codec::{Marshal, Unmarshal};
use crate::error::{ProtocolError, Result};

/// Size of the fixed code + length prefix.
pub const ERROR_CAUSE_HEADER_LENGTH: usize = 4;

/// Fixed cause header plus the raw cause-specific value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorCauseHeader {
    pub code: ErrorCauseCode,
    pub raw: Bytes,
}

impl ErrorCauseHeader {
    pub fn new(code: ErrorCauseCode, raw: impl Into<Bytes>) -> Self {
        Self {
            code,
            raw: raw.into(),
        }
    }

    /// Encoded length of this cause, header included.
    pub fn length(&self) -> usize {
        ERROR_CAUSE_HEADER_LENGTH + self.raw.len()
    }
}

impl Marshal for ErrorCauseHeader {
    fn marshal(&self) -> Result<Vec<u8>> {
        let length = self.length();
        let wire_length =
            u16::try_from(length).map_err(|_| ProtocolError::CauseTooLarge(length))?;

        let mut out = Vec::with_capacity(length);
        out.put_u16(self.code.into());
        out.put_u16(wire_length);
        out.put_slice(&self.raw);
        Ok(out)
    }
}

impl Unmarshal for ErrorCauseHeader {
    fn unmarshal(&mut self, raw: &[u8]) -> Result<()> {
        if raw.len() < ERROR_CAUSE_HEADER_LENGTH {
            return Err(ProtocolError::ErrorCauseTooShort);
        }

        let mut buf = raw;
        let code = buf.get_u16();
        let length = buf.get_u16();

        if usize::from(length) < ERROR_CAUSE_HEADER_LENGTH || usize::from(length) > raw.len() {
            return Err(ProtocolError::InvalidCauseLength {
                length,
                available: raw.len(),
            });
        }

        self.code = ErrorCauseCode(code);
        self.raw = Bytes::copy_from_slice(&raw[ERROR_CAUSE_HEADER_LENGTH..usize::from(length)]);
        Ok(())
    }
}
