//! # FlakeID
//!
//! Compact, sortable 64-bit identifiers for systems where many independent
//! nodes mint IDs without coordination.
//!
//! Each ID packs three fields into a non-negative `i64`:
//! milliseconds since a configurable epoch, a node ID, and a per-millisecond
//! sequence. Field widths are chosen per deployment; IDs sort by mint time.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use flakeid::FlakeNode;
//!
//! let epoch = Utc.with_ymd_and_hms(2022, 7, 1, 16, 10, 54).unwrap();
//! let node = FlakeNode::new(123, epoch, 10, 12).unwrap();
//!
//! let id = node.next_id();
//! assert_eq!(id.node(node.layout()), 123);
//! assert!(node.next_id() > id);
//! ```

#![forbid(unsafe_code)]

pub mod base62;
mod config;
mod error;
mod generator;
mod id;
mod layout;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{default_epoch, ClockRegression, FlakeConfig, FlakeConfigBuilder};
pub use error::FlakeError;
pub use generator::{Clock, FlakeNode, MonotonicClock, SystemClock};
pub use id::FlakeId;
pub use layout::{FlakeLayout, PAYLOAD_BITS};

pub use base62::DecodeError as Base62DecodeError;
pub use base62::MAX_LEN as BASE62_MAX_LEN;
