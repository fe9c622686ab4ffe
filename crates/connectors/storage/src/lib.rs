//! Storage connector
//!
//! Splits describing scans over storage-backed tables, and the connector
//! settings used to ship them to workers.
//!
//! # Example
//! ```rust
//! use igloo_common::ConnectorSplit;
//! use igloo_connector_storage::{Mode, StorageSplit};
//!
//! let split = StorageSplit::new(Mode::Table, "public", "events");
//! assert!(split.addresses().is_empty());
//! assert_eq!(split.split_info()["mode"], "TABLE");
//! ```

pub mod config;
pub mod split;

pub use config::Settings;
pub use split::{Mode, StorageSplit, StorageSplitBuilder};
