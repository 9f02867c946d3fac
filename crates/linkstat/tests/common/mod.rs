//! Common test utilities for integration tests.
//!
//! Builds kernel-shaped response datagrams through the public
//! `MessageBuilder`, and provides `MockTransport`, a scripted
//! [`Transport`] that replays canned datagrams.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use linkstat::netlink::message::NLM_F_MULTI;
use linkstat::netlink::types::link::{IfInfoMsg, RtnlLinkStats, ifla};
use linkstat::netlink::{Error, MessageBuilder, NlMsgType, Result, Transport};

/// An `RTM_NEWLINK` message carrying a name and statistics.
pub fn link_message(index: i32, name: &str, stats: &RtnlLinkStats) -> Vec<u8> {
    let mut builder = MessageBuilder::new(NlMsgType::RTM_NEWLINK, NLM_F_MULTI);
    builder.append(&IfInfoMsg::new().with_index(index));
    builder.append_attr_str(ifla::IFNAME, name);
    builder.append_attr(ifla::STATS, stats.as_bytes());
    builder.finish()
}

/// The `NLMSG_DONE` sentinel.
pub fn done_message() -> Vec<u8> {
    let mut builder = MessageBuilder::new(NlMsgType::DONE, NLM_F_MULTI);
    builder.append_bytes(&0i32.to_ne_bytes());
    builder.finish()
}

/// An `NLMSG_ERROR` message carrying a negated errno.
pub fn error_message(errno: i32) -> Vec<u8> {
    let mut builder = MessageBuilder::new(NlMsgType::ERROR, 0);
    builder.append_bytes(&errno.to_ne_bytes());
    builder.append_bytes(&[0u8; 16]);
    builder.finish()
}

/// Statistics with only the given byte counters set.
pub fn byte_stats(rx_bytes: u32, tx_bytes: u32) -> RtnlLinkStats {
    RtnlLinkStats {
        rx_bytes,
        tx_bytes,
        ..Default::default()
    }
}

/// What the mock does on a receive.
pub enum Reply {
    Datagram(Vec<u8>),
    Fail(std::io::ErrorKind),
    Hang,
}

/// A transport that records what was sent and replays scripted replies.
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    sent: Mutex<Vec<Vec<u8>>>,
    seq: AtomicU32,
}

impl MockTransport {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            sent: Mutex::new(Vec::new()),
            seq: AtomicU32::new(100),
        }
    }

    /// A transport that answers with the given datagrams in order.
    pub fn with_datagrams(datagrams: Vec<Vec<u8>>) -> Self {
        Self::new(datagrams.into_iter().map(Reply::Datagram).collect())
    }

    /// Every message sent so far.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    async fn send(&self, msg: &[u8]) -> Result<()> {
        self.sent.lock().unwrap().push(msg.to_vec());
        Ok(())
    }

    async fn recv(&self) -> Result<Vec<u8>> {
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Datagram(data)) => Ok(data),
            Some(Reply::Fail(kind)) => Err(Error::Io(std::io::Error::from(kind))),
            Some(Reply::Hang) | None => std::future::pending().await,
        }
    }

    fn next_seq(&self) -> u32 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }

    fn pid(&self) -> u32 {
        4242
    }
}
