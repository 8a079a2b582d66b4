//! SCTP error cause codes (RFC 4960, 3.3.10).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error cause code as carried in the first two octets of a cause.
///
/// Unregistered codes are representable; they decode to
/// [`ErrorCause::Other`](crate::cause::ErrorCause::Other).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ErrorCauseCode(pub u16);

impl ErrorCauseCode {
    pub const INVALID_STREAM_IDENTIFIER: Self = Self(1);
    pub const MISSING_MANDATORY_PARAMETER: Self = Self(2);
    pub const STALE_COOKIE_ERROR: Self = Self(3);
    pub const OUT_OF_RESOURCE: Self = Self(4);
    pub const UNRESOLVABLE_ADDRESS: Self = Self(5);
    pub const UNRECOGNIZED_CHUNK_TYPE: Self = Self(6);
    pub const INVALID_MANDATORY_PARAMETER: Self = Self(7);
    pub const UNRECOGNIZED_PARAMETERS: Self = Self(8);
    pub const NO_USER_DATA: Self = Self(9);
    pub const COOKIE_RECEIVED_WHILE_SHUTTING_DOWN: Self = Self(10);
    pub const RESTART_OF_AN_ASSOCIATION_WITH_NEW_ADDRESSES: Self = Self(11);
    pub const USER_INITIATED_ABORT: Self = Self(12);
    pub const PROTOCOL_VIOLATION: Self = Self(13);

    /// Human-readable name, `None` for unregistered codes.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::INVALID_STREAM_IDENTIFIER => "Invalid Stream Identifier",
            Self::MISSING_MANDATORY_PARAMETER => "Missing Mandatory Parameter",
            Self::STALE_COOKIE_ERROR => "Stale Cookie Error",
            Self::OUT_OF_RESOURCE => "Out Of Resource",
            Self::UNRESOLVABLE_ADDRESS => "Unresolvable IP",
            Self::UNRECOGNIZED_CHUNK_TYPE => "Unrecognized Chunk Type",
            Self::INVALID_MANDATORY_PARAMETER => "Invalid Mandatory Parameter",
            Self::UNRECOGNIZED_PARAMETERS => "Unrecognized Parameters",
            Self::NO_USER_DATA => "No User Data",
            Self::COOKIE_RECEIVED_WHILE_SHUTTING_DOWN => "Cookie Received While Shutting Down",
            Self::RESTART_OF_AN_ASSOCIATION_WITH_NEW_ADDRESSES => {
                "Restart Of An Association With New Addresses"
            }
            Self::USER_INITIATED_ABORT => "User Initiated Abort",
            Self::PROTOCOL_VIOLATION => "Protocol Violation",
            _ => return None,
        };
        Some(name)
    }
}

impl From<u16> for ErrorCauseCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl From<ErrorCauseCode> for u16 {
    fn from(code: ErrorCauseCode) -> Self {
        code.0
    }
}

impl fmt::Display for ErrorCauseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Unknown CauseCode: {}", self.0),
        }
    }
}
