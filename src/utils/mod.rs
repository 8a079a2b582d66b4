//! # Utility Modules
//!
//! Supporting utilities that sit outside the codecs.
//!
//! ## Components
//! - **Logging**: structured logging configuration

pub mod logging;

pub use logging::init_logging;
