//! Common crate
//!
//! Shared types, error handling, and task payload encoding for Igloo
//! connectors.
//!
//! # Example
//! ```rust
//! use igloo_common::Error;
//! let err = Error::invalid_argument("table name is null");
//! assert_eq!(err.to_string(), "Invalid argument: table name is null");
//! ```

pub mod codec;
pub mod error;
pub mod size_of;
pub mod split;

pub use codec::{PayloadCodec, PayloadFormat};
pub use error::{Error, Result};
pub use split::ConnectorSplit;
