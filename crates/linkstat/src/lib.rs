//! Link statistics over routing netlink for Linux.
//!
//! This crate requests a dump of every network interface with
//! `RTM_GETLINK`, decodes the `RTM_NEWLINK` replies and exposes the
//! per-interface `IFLA_STATS` counters.
//!
//! # Features
//!
//! - `output` - JSON/text output formatting
//! - `full` - All features enabled
//!
//! # Example
//!
//! ```ignore
//! use linkstat::netlink::Connection;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> linkstat::Result<()> {
//!     let conn = Connection::new()?;
//!
//!     for link in conn.link_stats().await? {
//!         println!("{}: {} bytes", link.name_or("?"), link.stats.total_bytes());
//!     }
//!
//!     Ok(())
//! }
//! ```

// Core modules (always available)
pub mod netlink;
pub mod util;

// Feature-gated modules
#[cfg(feature = "output")]
pub mod output;

// Re-export common types at crate root for convenience
pub use netlink::{Connection, Error, LinkEntry, LinkStatistics, Result};
