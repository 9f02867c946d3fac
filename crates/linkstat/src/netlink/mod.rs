//! Routing netlink link statistics: request encoding, response decoding
//! and an async connection to drive a dump.
//!
//! # Quick Start
//!
//! ```ignore
//! use linkstat::netlink::Connection;
//!
//! let conn = Connection::new()?;
//! conn.for_each_link_stats(|link| {
//!     println!("{}: {} errors", link.name_or("?"), link.stats().total_errors());
//! })
//! .await?;
//! ```
//!
//! # Decoding without a socket
//!
//! The codec is synchronous and works on any byte buffer:
//!
//! ```ignore
//! use linkstat::netlink::{LinkStatsIter, build_link_dump_request};
//!
//! let request = build_link_dump_request();
//! // ... send request.as_bytes(), receive a datagram ...
//! for link in LinkStatsIter::new(&datagram) {
//!     let link = link?;
//!     println!("{}: {}", link.ifindex(), link.stats().rx_bytes());
//! }
//! ```

pub mod attr;
mod builder;
pub mod connection;
pub mod decode;
mod error;
#[cfg(test)]
mod fixtures;
pub mod message;
pub mod parse;
pub mod request;
mod socket;
pub mod stats;
pub mod types;

pub use attr::{AttrIter, NlAttr};
pub use builder::MessageBuilder;
pub use connection::Connection;
pub use decode::{DecodeStatus, LinkEntry, LinkRecord, LinkStatsIter, decode};
pub use error::{Error, Result};
pub use message::{MessageIter, NLMSG_HDRLEN, NlMsgHdr, NlMsgType};
pub use request::{LinkDumpRequest, build_link_dump_request};
pub use socket::{NetlinkSocket, RECV_BUF_SIZE, Transport};
pub use stats::LinkStatistics;
