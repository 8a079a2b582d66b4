//! RTCP packet types registered with IANA.
//!
//! These codes are the dispatch key a packet dispatcher reads from
//! [`Header::packet_type`](crate::Header::packet_type) before routing the body.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

pub const TYPE_SENDER_REPORT: u8 = 200; // RFC 3550, 6.4.1
pub const TYPE_RECEIVER_REPORT: u8 = 201; // RFC 3550, 6.4.2
pub const TYPE_SOURCE_DESCRIPTION: u8 = 202; // RFC 3550, 6.5
pub const TYPE_GOODBYE: u8 = 203; // RFC 3550, 6.6
pub const TYPE_APPLICATION_DEFINED: u8 = 204; // RFC 3550, 6.7

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PacketType {
    SenderReport = TYPE_SENDER_REPORT,
    ReceiverReport = TYPE_RECEIVER_REPORT,
    SourceDescription = TYPE_SOURCE_DESCRIPTION,
    Goodbye = TYPE_GOODBYE,
    ApplicationDefined = TYPE_APPLICATION_DEFINED,
}

impl PacketType {
    /// All registered packet types, in code order.
    pub const ALL: [PacketType; 5] = [
        PacketType::SenderReport,
        PacketType::ReceiverReport,
        PacketType::SourceDescription,
        PacketType::Goodbye,
        PacketType::ApplicationDefined,
    ];

    /// Short name as used in RFC 3550 (`SR`, `RR`, ...).
    pub fn name(self) -> &'static str {
        match self {
            PacketType::SenderReport => "SR",
            PacketType::ReceiverReport => "RR",
            PacketType::SourceDescription => "SDES",
            PacketType::Goodbye => "BYE",
            PacketType::ApplicationDefined => "APP",
        }
    }
}

impl From<PacketType> for u8 {
    fn from(packet_type: PacketType) -> Self {
        packet_type as u8
    }
}

impl TryFrom<u8> for PacketType {
    type Error = ProtocolError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            TYPE_SENDER_REPORT => Ok(PacketType::SenderReport),
            TYPE_RECEIVER_REPORT => Ok(PacketType::ReceiverReport),
            TYPE_SOURCE_DESCRIPTION => Ok(PacketType::SourceDescription),
            TYPE_GOODBYE => Ok(PacketType::Goodbye),
            TYPE_APPLICATION_DEFINED => Ok(PacketType::ApplicationDefined),
            other => Err(ProtocolError::UnknownPacketType(other)),
        }
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), u8::from(*self))
    }
}
