//! # control-wire
//!
//! Bit-exact header codecs for control-protocol packets.
//!
//! - [`Header`]: the fixed 4-octet RTCP header (version, padding, report
//!   count, packet type, length), strict on encode and permissive on decode.
//! - [`cause`]: SCTP error causes, where every cause record embeds the
//!   shared [`ErrorCauseHeader`] by value and forwards encode/decode to it.
//!
//! Packet bodies, compound packets, and transports are left to callers. The
//! [`protocol::dispatcher::Dispatcher`] shows the intended consumer: decode
//! the header, read the type code, route the remaining octets.
//!
//! ## Example
//! ```rust
//! use control_wire::{Header, Marshal, PacketType};
//!
//! let header = Header {
//!     version: 2,
//!     padding: true,
//!     report_count: 1,
//!     packet_type: PacketType::SenderReport.into(),
//!     length: 6,
//! };
//! let raw = header.marshal().unwrap();
//! assert_eq!(raw, [0xA1, 0xC8, 0x00, 0x06]);
//! assert_eq!(Header::from_bytes(&raw).unwrap(), header);
//! ```

#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod cause;
pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod utils;

pub use cause::{build_error_cause, ErrorCause, ErrorCauseCode, ErrorCauseHeader};
pub use config::{CodecConfig, DecodeConfig, DecodePolicy, LoggingConfig};
pub use crate::core::codec::{Marshal, Unmarshal};
pub use crate::core::header::{Header, HEADER_LENGTH, RTP_VERSION};
pub use crate::core::packet_type::PacketType;
pub use error::{ProtocolError, Result};
