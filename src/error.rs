//! # Error Types
//!
//! Error handling for the control header and error cause codecs.
//!
//! Every variant describes caller-supplied bad input. Nothing here is
//! transient, so nothing here is retryable: the codecs return the error
//! immediately, produce no partial output, and never clamp out-of-range
//! values.
//!
//! ## Error Categories
//! - **Header Errors**: version/report count out of range, truncated header
//! - **Cause Errors**: truncated cause, bad length field, oversized value
//! - **Dispatch Errors**: unknown packet type, version rejected by policy
//! - **Configuration Errors**: unparsable or invalid configuration
//!
//! ## Example Usage
//! ```rust
//! use control_wire::error::{ProtocolError, Result};
//! use control_wire::Header;
//!
//! fn packet_type_of(raw: &[u8]) -> Result<u8> {
//!     Ok(Header::from_bytes(raw)?.packet_type)
//! }
//!
//! assert_eq!(packet_type_of(&[0x80, 0xC8, 0x00, 0x06]).unwrap(), 200);
//! assert!(matches!(
//!     packet_type_of(&[0x80, 0xC8]),
//!     Err(ProtocolError::HeaderTooShort)
//! ));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Dispatcher-related error messages
    pub const ERR_DISPATCHER_WRITE_LOCK: &str = "Failed to acquire write lock on dispatcher";
    pub const ERR_DISPATCHER_READ_LOCK: &str = "Failed to acquire read lock on dispatcher";

    /// Logging errors
    pub const ERR_SUBSCRIBER_INSTALLED: &str = "A global tracing subscriber is already installed";
}

// ProtocolError is the primary error type for all codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("invalid version")]
    InvalidVersion,

    #[error("invalid report count")]
    InvalidReportCount,

    #[error("rtcp header too short")]
    HeaderTooShort,

    #[error("error cause too short")]
    ErrorCauseTooShort,

    #[error("invalid error cause length {length} ({available} bytes available)")]
    InvalidCauseLength { length: u16, available: usize },

    #[error("error cause too large: {0} bytes")]
    CauseTooLarge(usize),

    #[error("unexpected error cause code {found} (expected {expected})")]
    UnexpectedCauseCode { expected: u16, found: u16 },

    #[error("unknown packet type: {0}")]
    UnknownPacketType(u8),

    #[error("Unsupported protocol version: {0}")]
    UnsupportedVersion(u8),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
