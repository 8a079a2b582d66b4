//! # RTCP Control Header
//!
//! Bit-exact codec for the 4-octet preamble shared by every RTCP packet.
//!
//! | Octet | Bits | Field        | Range   |
//! |-------|------|--------------|---------|
//! | 0     | 7-6  | version      | 0-3     |
//! | 0     | 5    | padding      | 0/1     |
//! | 0     | 4-0  | report count | 0-31    |
//! | 1     | 7-0  | packet type  | 0-255   |
//! | 2-3   | 15-0 | length       | 0-65535 |
//!
//! Encoding is strict and decoding is permissive: any 4 octets decode to a
//! header, and semantic checks are left to the dispatcher.

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};

use crate::core::codec::{Marshal, Unmarshal};
use crate::core::packet_type::PacketType;
use crate::error::{ProtocolError, Result};

/// Size of the encoded header in octets.
pub const HEADER_LENGTH: usize = 4;

/// RTP/RTCP version carried by every packet on the wire today.
pub const RTP_VERSION: u8 = 2;

pub const VERSION_SHIFT: u8 = 6;
pub const VERSION_MASK: u8 = 0x3;
pub const PADDING_SHIFT: u8 = 5;
pub const PADDING_MASK: u8 = 0x1;
pub const REPORT_COUNT_SHIFT: u8 = 0;
pub const REPORT_COUNT_MASK: u8 = 0x1f;

/// The common header shared by all RTCP packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Header {
    /// Version of RTP, which is the same in RTCP packets as in RTP data packets.
    pub version: u8,
    /// If set, this packet carries padding octets at the end which are
    /// counted in `length`.
    pub padding: bool,
    /// Number of sub-fields (e.g. reception report blocks); meaning depends
    /// on the packet type.
    pub report_count: u8,
    /// RTCP packet type for this packet.
    pub packet_type: u8,
    /// Length of this packet in 32-bit words minus one, including the header
    /// and any padding.
    pub length: u16,
}

impl Header {
    /// Header for `packet_type` at the current RTP version.
    pub fn new(packet_type: PacketType, report_count: u8, length: u16) -> Self {
        Self {
            version: RTP_VERSION,
            padding: false,
            report_count,
            packet_type: packet_type.into(),
            length,
        }
    }

    /// Decode a header from the first four octets of `raw`.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        let mut header = Self::default();
        header.unmarshal(raw)?;
        Ok(header)
    }

    /// Registered packet type, if the type code is one.
    pub fn kind(&self) -> Option<PacketType> {
        PacketType::try_from(self.packet_type).ok()
    }

    /// Append the encoded header to `buf`.
    ///
    /// Both range checks run before anything is written, so `buf` is
    /// untouched on error.
    pub fn marshal_to<B: BufMut>(&self, buf: &mut B) -> Result<()> {
        let first = self.first_octet()?;
        buf.put_u8(first);
        buf.put_u8(self.packet_type);
        buf.put_u16(self.length);
        Ok(())
    }

    // version is checked before report count
    fn first_octet(&self) -> Result<u8> {
        if self.version > VERSION_MASK {
            return Err(ProtocolError::InvalidVersion);
        }
        if self.report_count > REPORT_COUNT_MASK {
            return Err(ProtocolError::InvalidReportCount);
        }

        let mut octet = self.version << VERSION_SHIFT;
        if self.padding {
            octet |= 1 << PADDING_SHIFT;
        }
        octet |= self.report_count << REPORT_COUNT_SHIFT;
        Ok(octet)
    }
}

impl Marshal for Header {
    fn marshal(&self) -> Result<Vec<u8>> {
        let mut raw = Vec::with_capacity(HEADER_LENGTH);
        self.marshal_to(&mut raw)?;
        Ok(raw)
    }
}

impl Unmarshal for Header {
    fn unmarshal(&mut self, raw: &[u8]) -> Result<()> {
        if raw.len() < HEADER_LENGTH {
            return Err(ProtocolError::HeaderTooShort);
        }

        let mut buf = &raw[..HEADER_LENGTH];
        let first = buf.get_u8();

        self.version = (first >> VERSION_SHIFT) & VERSION_MASK;
        self.padding = ((first >> PADDING_SHIFT) & PADDING_MASK) > 0;
        self.report_count = (first >> REPORT_COUNT_SHIFT) & REPORT_COUNT_MASK;
        self.packet_type = buf.get_u8();
        self.length = buf.get_u16();

        Ok(())
    }
}
