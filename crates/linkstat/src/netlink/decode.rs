//! Decoding of `RTM_GETLINK` dump responses into per-link statistics.
//!
//! A receive buffer holds zero or more netlink messages back to back.
//! Each `RTM_NEWLINK` message carries an `ifinfomsg` followed by a run of
//! `IFLA_*` attributes; the `IFLA_STATS` attribute holds the counters.
//!
//! Decoding walks the buffer once:
//!
//! - `NLMSG_DONE` ends the dump.
//! - `RTM_NEWLINK` yields a [`LinkRecord`] when it carries a complete
//!   statistics record, and is skipped otherwise.
//! - `NLMSG_ERROR` with a non-zero code aborts with [`Error::Kernel`];
//!   an ACK is skipped.
//! - Every other message type is skipped.
//!
//! A message whose declared length disagrees with the buffer aborts the
//! whole pass with [`Error::MalformedMessage`]. Running out of bytes on a
//! message boundary is a normal end of the datagram.
//!
//! # Example
//!
//! ```ignore
//! use linkstat::netlink::{DecodeStatus, decode};
//!
//! let status = decode(&datagram, |link| {
//!     println!("{}: {} bytes in", link.ifindex(), link.stats().rx_bytes());
//! })?;
//! if status == DecodeStatus::Exhausted {
//!     // the dump continues in the next datagram
//! }
//! ```

use super::attr::{AttrIter, get};
use super::error::{Error, Result};
use super::message::{MessageIter, NlMsgType, error_code};
use super::parse;
use super::stats::LinkStatistics;
use super::types::link::{IfInfoMsg, ifla};

/// How a decode pass over one buffer ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// The `NLMSG_DONE` sentinel was seen; the dump is complete.
    Done,
    /// The buffer ended on a message boundary without a sentinel.
    Exhausted,
}

/// Statistics decoded from one `RTM_NEWLINK` message.
///
/// Borrows the interface name from the receive buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRecord<'a> {
    ifindex: u32,
    header: IfInfoMsg,
    name: Option<&'a str>,
    stats: LinkStatistics,
}

impl<'a> LinkRecord<'a> {
    /// Get the interface index.
    pub fn ifindex(&self) -> u32 {
        self.ifindex
    }

    /// Get the interface name carried in the message (IFLA_IFNAME).
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    /// Get the interface name, or a default placeholder.
    pub fn name_or(&self, default: &'a str) -> &'a str {
        self.name.unwrap_or(default)
    }

    /// Get the statistics.
    pub fn stats(&self) -> &LinkStatistics {
        &self.stats
    }

    /// Get the fixed link header.
    pub fn header(&self) -> &IfInfoMsg {
        &self.header
    }

    /// Copy into an owned entry that outlives the receive buffer.
    pub fn to_entry(&self) -> LinkEntry {
        LinkEntry {
            ifindex: self.ifindex(),
            name: self.name.map(str::to_owned),
            stats: self.stats,
        }
    }
}

/// Owned copy of a [`LinkRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Interface index.
    pub ifindex: u32,
    /// Interface name as reported by the kernel.
    pub name: Option<String>,
    /// Statistics.
    pub stats: LinkStatistics,
}

impl LinkEntry {
    /// Get the interface name, or a default placeholder.
    pub fn name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(default)
    }
}

/// Lazy sequence of link statistics decoded from one receive buffer.
///
/// Yields `Err` at most once; the iterator is fused afterwards.
/// [`status`](Self::status) tells how a completed pass ended.
pub struct LinkStatsIter<'a> {
    messages: MessageIter<'a>,
    status: Option<DecodeStatus>,
    failed: bool,
}

impl<'a> LinkStatsIter<'a> {
    /// Start decoding `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            messages: MessageIter::new(buf),
            status: None,
            failed: false,
        }
    }

    /// How the pass ended, once the iterator has returned `None`.
    ///
    /// `None` while iteration is still in progress or after an error.
    pub fn status(&self) -> Option<DecodeStatus> {
        self.status
    }

    fn fail(&mut self, err: Error) -> Option<Result<LinkRecord<'a>>> {
        self.failed = true;
        Some(Err(err))
    }
}

impl<'a> Iterator for LinkStatsIter<'a> {
    type Item = Result<LinkRecord<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.status.is_some() {
            return None;
        }

        loop {
            let (offset, header, payload) = match self.messages.next() {
                None => {
                    self.status = Some(DecodeStatus::Exhausted);
                    return None;
                }
                Some(Err(e)) => return self.fail(e),
                Some(Ok(msg)) => msg,
            };

            match header.nlmsg_type {
                NlMsgType::DONE => {
                    self.status = Some(DecodeStatus::Done);
                    return None;
                }
                NlMsgType::ERROR => match error_code(payload) {
                    Some(0) => continue,
                    Some(code) => {
                        tracing::warn!(errno = -code, offset, "kernel rejected link dump");
                        return self.fail(Error::from_errno(code));
                    }
                    None => {
                        return self.fail(Error::malformed(
                            offset,
                            format!("error message payload of {} bytes", payload.len()),
                        ));
                    }
                },
                NlMsgType::RTM_NEWLINK => match parse_link(offset, payload) {
                    Ok(Some(record)) => return Some(Ok(record)),
                    Ok(None) => continue,
                    Err(e) => return self.fail(e),
                },
                other => {
                    tracing::trace!(msg_type = other, offset, "skipping message");
                }
            }
        }
    }
}

/// Decode an `RTM_NEWLINK` payload.
///
/// Returns `Ok(None)` when the message has no usable statistics.
fn parse_link(offset: usize, payload: &[u8]) -> Result<Option<LinkRecord<'_>>> {
    let mut input = payload;
    let header: IfInfoMsg = parse::record(&mut input).map_err(|_| {
        Error::malformed(
            offset,
            format!(
                "link payload of {} bytes cannot hold ifinfomsg ({} bytes)",
                payload.len(),
                IfInfoMsg::SIZE
            ),
        )
    })?;

    let Ok(ifindex) = u32::try_from(header.ifi_index) else {
        tracing::trace!(ifindex = header.ifi_index, "negative interface index");
        return Ok(None);
    };

    let mut name = None;
    let mut stats_attr = None;
    for (kind, data) in AttrIter::new(input) {
        match kind {
            ifla::IFNAME => name = get::string(data).ok().filter(|s| !s.is_empty()),
            ifla::STATS => stats_attr = Some(data),
            _ => {}
        }
    }

    let Some(data) = stats_attr else {
        tracing::trace!(ifindex, "no IFLA_STATS attribute");
        return Ok(None);
    };
    let Some(stats) = LinkStatistics::from_bytes(data) else {
        tracing::trace!(
            ifindex,
            len = data.len(),
            "IFLA_STATS shorter than rtnl_link_stats"
        );
        return Ok(None);
    };

    Ok(Some(LinkRecord {
        ifindex,
        header,
        name,
        stats,
    }))
}

/// Decode one receive buffer, calling `on_link` for every link that
/// carries statistics, in buffer order.
///
/// The callback runs synchronously before `decode` returns. The input
/// buffer is never modified.
pub fn decode<F>(buf: &[u8], mut on_link: F) -> Result<DecodeStatus>
where
    F: FnMut(LinkRecord<'_>),
{
    let mut iter = LinkStatsIter::new(buf);
    for record in iter.by_ref() {
        on_link(record?);
    }
    Ok(iter.status().unwrap_or(DecodeStatus::Exhausted))
}
