//! Per-code error cause records.
//!
//! Each record owns an [`ErrorCauseHeader`] and forwards `marshal` /
//! `unmarshal` to it. Records without a typed body forward verbatim: same
//! bytes, same errors. Records with a typed body stage it through the
//! embedded header's value.

use std::ops::{Deref, DerefMut};

use bytes::{Buf, BufMut, Bytes};

use crate::cause::code::ErrorCauseCode;
use crate::cause::header::ErrorCauseHeader;
use crate::core::codec::{Marshal, Unmarshal};
use crate::error::{ProtocolError, Result};

macro_rules! forwarding_cause {
    ($(#[$meta:meta])* $name:ident, $code:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub header: ErrorCauseHeader,
        }

        impl $name {
            pub const CODE: ErrorCauseCode = $code;

            pub fn new(value: impl Into<Bytes>) -> Self {
                Self {
                    header: ErrorCauseHeader::new(Self::CODE, value),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(Bytes::new())
            }
        }

        impl Deref for $name {
            type Target = ErrorCauseHeader;

            fn deref(&self) -> &Self::Target {
                &self.header
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.header
            }
        }

        impl Marshal for $name {
            fn marshal(&self) -> Result<Vec<u8>> {
                self.header.marshal()
            }
        }

        impl Unmarshal for $name {
            fn unmarshal(&mut self, raw: &[u8]) -> Result<()> {
                self.header.unmarshal(raw)
            }
        }
    };
}

forwarding_cause!(
    /// Unrecognized Chunk Type (6). The value is the offending chunk, verbatim.
    UnrecognizedChunkType,
    ErrorCauseCode::UNRECOGNIZED_CHUNK_TYPE
);

forwarding_cause!(
    /// User-Initiated Abort (12). The value is the upper layer's abort reason.
    UserInitiatedAbort,
    ErrorCauseCode::USER_INITIATED_ABORT
);

forwarding_cause!(
    /// Protocol Violation (13). The value is free-form additional information.
    ProtocolViolation,
    ErrorCauseCode::PROTOCOL_VIOLATION
);

/// Invalid Stream Identifier (1).
///
/// ```text
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     Cause Code=1              |      Cause Length=8           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |        Stream Identifier      |         (Reserved)            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The embedded header's value always holds the encoded body, so the
/// header's length matches the wire length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStreamIdentifier {
    header: ErrorCauseHeader,
    stream_identifier: u16,
}

impl InvalidStreamIdentifier {
    pub const CODE: ErrorCauseCode = ErrorCauseCode::INVALID_STREAM_IDENTIFIER;

    const BODY_LENGTH: usize = 4;

    pub fn new(stream_identifier: u16) -> Self {
        Self {
            header: ErrorCauseHeader::new(Self::CODE, Self::encode_body(stream_identifier)),
            stream_identifier,
        }
    }

    pub fn header(&self) -> &ErrorCauseHeader {
        &self.header
    }

    pub fn stream_identifier(&self) -> u16 {
        self.stream_identifier
    }

    pub fn set_stream_identifier(&mut self, stream_identifier: u16) {
        self.stream_identifier = stream_identifier;
        self.header.raw = Self::encode_body(stream_identifier);
    }

    fn encode_body(stream_identifier: u16) -> Bytes {
        let mut body = Vec::with_capacity(Self::BODY_LENGTH);
        body.put_u16(stream_identifier);
        body.put_u16(0); // reserved
        body.into()
    }
}

impl Default for InvalidStreamIdentifier {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Marshal for InvalidStreamIdentifier {
    fn marshal(&self) -> Result<Vec<u8>> {
        self.header.marshal()
    }
}

impl Unmarshal for InvalidStreamIdentifier {
    fn unmarshal(&mut self, raw: &[u8]) -> Result<()> {
        let mut header = ErrorCauseHeader::default();
        header.unmarshal(raw)?;

        if header.code != Self::CODE {
            return Err(ProtocolError::UnexpectedCauseCode {
                expected: Self::CODE.into(),
                found: header.code.into(),
            });
        }
        if header.raw.len() < Self::BODY_LENGTH {
            return Err(ProtocolError::ErrorCauseTooShort);
        }

        self.stream_identifier = (&header.raw[..]).get_u16();
        self.header = header;
        Ok(())
    }
}
