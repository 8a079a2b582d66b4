//! # Core Protocol Components
//!
//! The fixed 4-octet RTCP control header and the capability traits every
//! wire record implements.
//!
//! ## Components
//! - **Codec**: `Marshal` / `Unmarshal` capability traits
//! - **Header**: bit-packed control header codec
//! - **Packet Type**: registered RTCP packet type codes
//!
//! ## Wire Format
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |V=2|P|    RC   |   PT=SR=200   |             length            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! ## Validation
//! - Encode rejects version > 3 and report count > 31
//! - Decode only requires 4 octets; any bit pattern is accepted

pub mod codec;
pub mod header;
pub mod packet_type;
