//! Link dump request encoding.
//!
//! A dump of every link is an `RTM_GETLINK` message carrying only a
//! one-byte `rtgenmsg` family selector:
//!
//! ```text
//! +----------------------+----------+---------+
//! | nlmsghdr (16 bytes)  | family   | pad (3) |
//! +----------------------+----------+---------+
//! ```

use super::builder::MessageBuilder;
use super::message::{NLM_F_DUMP, NLM_F_REQUEST, NLMSG_HDRLEN, NlMsgHdr, NlMsgType};
use super::types::link::{AF_PACKET, RtGenMsg};

/// An encoded `RTM_GETLINK` dump request.
///
/// The length field is computed from the encoded size when the request is
/// built and is never touched afterwards; only the sequence number and
/// port id can be stamped onto a copy before sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDumpRequest {
    header: NlMsgHdr,
    family: RtGenMsg,
    bytes: Vec<u8>,
}

impl LinkDumpRequest {
    /// Encoded size: header plus the padded family selector.
    pub const LEN: usize = NLMSG_HDRLEN + RtGenMsg::padded_size();

    /// Build a request for all links of every family.
    pub fn new() -> Self {
        Self::encode(0, 0)
    }

    fn encode(seq: u32, pid: u32) -> Self {
        let family = RtGenMsg::with_family(AF_PACKET);

        let mut builder = MessageBuilder::new(NlMsgType::RTM_GETLINK, NLM_F_REQUEST | NLM_F_DUMP);
        builder.set_seq(seq);
        builder.set_pid(pid);
        builder.append(&family);
        let bytes = builder.finish();

        let header = NlMsgHdr {
            nlmsg_len: bytes.len() as u32,
            nlmsg_type: NlMsgType::RTM_GETLINK,
            nlmsg_flags: NLM_F_REQUEST | NLM_F_DUMP,
            nlmsg_seq: seq,
            nlmsg_pid: pid,
        };

        Self {
            header,
            family,
            bytes,
        }
    }

    /// Return a copy stamped with the given sequence number.
    pub fn with_seq(&self, seq: u32) -> Self {
        Self::encode(seq, self.header.nlmsg_pid)
    }

    /// Return a copy stamped with the given port id.
    pub fn with_pid(&self, pid: u32) -> Self {
        Self::encode(self.header.nlmsg_seq, pid)
    }

    /// The message header as encoded.
    pub fn header(&self) -> &NlMsgHdr {
        &self.header
    }

    /// Total encoded length in bytes.
    pub fn length(&self) -> u32 {
        self.header.nlmsg_len
    }

    /// Message type (`RTM_GETLINK`).
    pub fn message_type(&self) -> u16 {
        self.header.nlmsg_type
    }

    /// Request flags (`NLM_F_REQUEST | NLM_F_DUMP`).
    pub fn flags(&self) -> u16 {
        self.header.nlmsg_flags
    }

    /// The family selector (`AF_PACKET`).
    pub fn family(&self) -> u8 {
        self.family.rtgen_family
    }

    /// Wire bytes, ready to send.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for LinkDumpRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a request that dumps every link, including its statistics.
pub fn build_link_dump_request() -> LinkDumpRequest {
    LinkDumpRequest::new()
}
