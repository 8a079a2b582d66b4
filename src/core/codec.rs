//! Capability traits shared by every wire record in this crate.
//!
//! A record is polymorphic over `{Marshal, Unmarshal}` rather than over a
//! base type: each error cause variant owns an [`ErrorCauseHeader`] by value
//! and forwards both operations to it.
//!
//! [`ErrorCauseHeader`]: crate::cause::ErrorCauseHeader

use crate::error::Result;

/// Encodes a record into a freshly allocated buffer.
pub trait Marshal {
    /// Encode `self` to its wire form.
    ///
    /// Fails without producing output if any field is outside its legal
    /// range.
    fn marshal(&self) -> Result<Vec<u8>>;
}

/// Decodes a record in place from received bytes.
pub trait Unmarshal {
    /// Decode `raw` into `self`.
    ///
    /// On error `self` is left as it was before the call.
    fn unmarshal(&mut self, raw: &[u8]) -> Result<()>;
}
