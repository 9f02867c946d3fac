//! High-level connection driving one link statistics dump.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use linkstat::netlink::Connection;
//!
//! let conn = Connection::new()?.timeout(Duration::from_secs(5));
//! for link in conn.link_stats().await? {
//!     println!("{}: {}", link.name_or("?"), link.stats.total_bytes());
//! }
//! ```

use std::io;
use std::time::Duration;

use super::decode::{DecodeStatus, LinkEntry, LinkRecord, decode};
use super::error::{Error, Result};
use super::request::build_link_dump_request;
use super::socket::{NetlinkSocket, Transport};

/// A routing netlink connection.
///
/// Generic over the [`Transport`] so the dump logic can run against
/// scripted datagrams.
pub struct Connection<T: Transport = NetlinkSocket> {
    transport: T,
    timeout: Option<Duration>,
}

impl Connection<NetlinkSocket> {
    /// Open a connection over a new `NETLINK_ROUTE` socket.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(NetlinkSocket::new()?))
    }
}

impl<T: Transport> Connection<T> {
    /// Create a connection over an existing transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            timeout: None,
        }
    }

    /// Bound the wait for each received datagram.
    ///
    /// A zero duration removes the bound.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn recv(&self) -> Result<Vec<u8>> {
        let data = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.transport.recv())
                .await
                .map_err(|_| Error::Timeout(limit))??,
            None => self.transport.recv().await?,
        };

        if data.is_empty() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "netlink socket returned an empty datagram",
            )));
        }
        Ok(data)
    }

    /// Dump every link and call `f` for each one carrying statistics.
    ///
    /// Datagrams are received and decoded one at a time until the kernel
    /// ends the dump. The first error aborts the dump; records already
    /// delivered stay delivered.
    pub async fn for_each_link_stats<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(LinkRecord<'_>),
    {
        let seq = self.transport.next_seq();
        let request = build_link_dump_request()
            .with_seq(seq)
            .with_pid(self.transport.pid());

        self.transport.send(request.as_bytes()).await?;
        tracing::debug!(seq, len = request.length(), "sent RTM_GETLINK dump request");

        loop {
            let data = self.recv().await?;
            tracing::debug!(bytes = data.len(), "decoding datagram");

            match decode(&data, &mut f)? {
                DecodeStatus::Done => return Ok(()),
                DecodeStatus::Exhausted => continue,
            }
        }
    }

    /// Dump statistics for every link.
    pub async fn link_stats(&self) -> Result<Vec<LinkEntry>> {
        let mut entries = Vec::new();
        self.for_each_link_stats(|link| entries.push(link.to_entry()))
            .await?;
        Ok(entries)
    }

    /// Dump statistics and keep only the link with the given index.
    ///
    /// Returns `None` if the dump held no statistics for it.
    pub async fn link_stats_for(&self, ifindex: u32) -> Result<Option<LinkEntry>> {
        let mut found = None;
        self.for_each_link_stats(|link| {
            if found.is_none() && link.ifindex() == ifindex {
                found = Some(link.to_entry());
            }
        })
        .await?;
        Ok(found)
    }

    /// Dump statistics for the interface with the given name.
    ///
    /// The name is resolved to an index first; an unknown name is
    /// [`Error::InterfaceNotFound`].
    pub async fn link_stats_by_name(&self, name: &str) -> Result<Option<LinkEntry>> {
        let ifindex = crate::util::ifname::name_to_index(name)?;
        self.link_stats_for(ifindex).await
    }
}
