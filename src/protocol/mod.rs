//! # Packet Dispatch
//!
//! Reference consumer of the header codec: decode the first four octets,
//! read the packet type, and route the rest of the packet to the body
//! parser registered for that type.

pub mod dispatcher;

#[cfg(test)]
mod tests;
