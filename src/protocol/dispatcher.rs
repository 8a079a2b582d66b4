use crate::config::DecodeConfig;
use crate::core::header::{Header, HEADER_LENGTH};
use crate::core::packet_type::PacketType;
use crate::error::constants::{ERR_DISPATCHER_READ_LOCK, ERR_DISPATCHER_WRITE_LOCK};
use crate::error::{ProtocolError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, trace, warn};

type HandlerFn<R> = dyn Fn(&Header, &[u8]) -> Result<R> + Send + Sync + 'static;

/// Routes received RTCP packets to per-type body parsers.
///
/// The dispatcher decodes the 4-octet header, applies the configured decode
/// policy, and hands the header plus the remaining octets to the handler
/// registered for the header's packet type. It keeps no per-packet state.
pub struct Dispatcher<R> {
    handlers: Arc<RwLock<HashMap<u8, Box<HandlerFn<R>>>>>,
    decode: DecodeConfig,
}

impl<R> Default for Dispatcher<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Dispatcher<R> {
    pub fn new() -> Self {
        Self::with_config(DecodeConfig::default())
    }

    pub fn with_config(decode: DecodeConfig) -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            decode,
        }
    }

    /// Register `handler` for a registered packet type.
    pub fn register<F>(&self, packet_type: PacketType, handler: F) -> Result<()>
    where
        F: Fn(&Header, &[u8]) -> Result<R> + Send + Sync + 'static,
    {
        self.register_raw(packet_type.into(), handler)
    }

    /// Register `handler` for an arbitrary type code, e.g. a feedback type
    /// outside the RFC 3550 range.
    pub fn register_raw<F>(&self, type_code: u8, handler: F) -> Result<()>
    where
        F: Fn(&Header, &[u8]) -> Result<R> + Send + Sync + 'static,
    {
        let mut handlers = self
            .handlers
            .write()
            .map_err(|_| ProtocolError::Custom(ERR_DISPATCHER_WRITE_LOCK.to_string()))?;

        if handlers.insert(type_code, Box::new(handler)).is_some() {
            debug!(type_code, "Replaced packet handler");
        } else {
            debug!(type_code, "Registered packet handler");
        }
        Ok(())
    }

    /// Decode the header of `raw` and run the matching handler on the body.
    pub fn dispatch(&self, raw: &[u8]) -> Result<R> {
        let header = Header::from_bytes(raw)?;

        if let Err(e) = self.decode.check_version(header.version) {
            warn!(
                version = header.version,
                expected = self.decode.expected_version,
                "Rejected packet header"
            );
            return Err(e);
        }

        let handlers = self
            .handlers
            .read()
            .map_err(|_| ProtocolError::Custom(ERR_DISPATCHER_READ_LOCK.to_string()))?;

        let Some(handler) = handlers.get(&header.packet_type) else {
            warn!(type_code = header.packet_type, "No handler for packet type");
            return Err(ProtocolError::UnknownPacketType(header.packet_type));
        };

        trace!(
            type_code = header.packet_type,
            report_count = header.report_count,
            length = header.length,
            "Dispatching packet"
        );
        handler(&header, &raw[HEADER_LENGTH..])
    }

    /// Whether a handler is registered for `type_code`.
    pub fn is_registered(&self, type_code: u8) -> Result<bool> {
        let handlers = self
            .handlers
            .read()
            .map_err(|_| ProtocolError::Custom(ERR_DISPATCHER_READ_LOCK.to_string()))?;
        Ok(handlers.contains_key(&type_code))
    }
}
