//! Netlink message header and parsing.

use super::error::{Error, Result};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Netlink message header alignment.
pub const NLMSG_ALIGNTO: usize = 4;

/// Align a length to NLMSG_ALIGNTO boundary.
#[inline]
pub const fn nlmsg_align(len: usize) -> usize {
    (len + NLMSG_ALIGNTO - 1) & !(NLMSG_ALIGNTO - 1)
}

/// Size of the netlink message header.
pub const NLMSG_HDRLEN: usize = nlmsg_align(std::mem::size_of::<NlMsgHdr>());

/// Netlink message header (mirrors struct nlmsghdr).
///
/// All fields are host byte order; netlink never leaves the machine.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout,
)]
pub struct NlMsgHdr {
    /// Length of message including header.
    pub nlmsg_len: u32,
    /// Message type.
    pub nlmsg_type: u16,
    /// Additional flags.
    pub nlmsg_flags: u16,
    /// Sequence number.
    pub nlmsg_seq: u32,
    /// Sending process port ID.
    pub nlmsg_pid: u32,
}

impl NlMsgHdr {
    /// Create a new message header.
    pub fn new(msg_type: u16, flags: u16) -> Self {
        Self {
            nlmsg_len: NLMSG_HDRLEN as u32,
            nlmsg_type: msg_type,
            nlmsg_flags: flags,
            nlmsg_seq: 0,
            nlmsg_pid: 0,
        }
    }

    /// Get the payload length (total length minus header).
    pub fn payload_len(&self) -> usize {
        (self.nlmsg_len as usize).saturating_sub(NLMSG_HDRLEN)
    }

    /// Check if this is a done message.
    pub fn is_done(&self) -> bool {
        self.nlmsg_type == NlMsgType::DONE
    }

    /// Convert header to bytes.
    pub fn as_bytes(&self) -> &[u8] {
        <Self as IntoBytes>::as_bytes(self)
    }

    /// Read a header from the front of `data`.
    ///
    /// The header is copied out, so `data` needs no particular alignment.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::read_from_prefix(data)
            .map(|(hdr, _)| hdr)
            .map_err(|_| Error::Truncated {
                expected: std::mem::size_of::<Self>(),
                actual: data.len(),
            })
    }
}

/// Standard netlink message types.
pub struct NlMsgType;

impl NlMsgType {
    /// No operation, message must be discarded.
    pub const NOOP: u16 = 1;
    /// Error message or ACK.
    pub const ERROR: u16 = 2;
    /// End of multipart message.
    pub const DONE: u16 = 3;

    // Link messages
    pub const RTM_NEWLINK: u16 = 16;
    pub const RTM_GETLINK: u16 = 18;
}

/// Netlink message flags.
pub const NLM_F_REQUEST: u16 = 0x01;
pub const NLM_F_MULTI: u16 = 0x02;

// Modifiers to GET request
pub const NLM_F_ROOT: u16 = 0x100;
pub const NLM_F_MATCH: u16 = 0x200;
pub const NLM_F_DUMP: u16 = NLM_F_ROOT | NLM_F_MATCH;

/// Iterator over netlink messages in a receive buffer.
///
/// Yields each message header together with its payload and the offset
/// of the message inside the buffer. A message whose declared length
/// does not fit the remaining bytes ends iteration with
/// [`Error::MalformedMessage`]; nothing past the buffer is ever read.
/// Running out of bytes exactly on a message boundary ends iteration
/// cleanly.
pub struct MessageIter<'a> {
    data: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> MessageIter<'a> {
    /// Create a new message iterator.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            failed: false,
        }
    }

    /// Offset of the next message to be read.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn fail(&mut self, reason: String) -> Option<Result<(usize, NlMsgHdr, &'a [u8])>> {
        self.failed = true;
        Some(Err(Error::malformed(self.offset, reason)))
    }
}

impl<'a> Iterator for MessageIter<'a> {
    /// Returns (message offset, header, payload).
    type Item = Result<(usize, NlMsgHdr, &'a [u8])>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let data = self.data;
        let remaining = &data[self.offset..];
        if remaining.is_empty() {
            return None;
        }
        if remaining.len() < NLMSG_HDRLEN {
            return self.fail(format!(
                "{} trailing bytes cannot hold a {}-byte header",
                remaining.len(),
                NLMSG_HDRLEN
            ));
        }

        let header = match NlMsgHdr::from_bytes(remaining) {
            Ok(h) => h,
            Err(e) => {
                self.failed = true;
                return Some(Err(e));
            }
        };

        let msg_len = header.nlmsg_len as usize;
        if msg_len < NLMSG_HDRLEN {
            return self.fail(format!(
                "declared length {} is below header size {}",
                msg_len, NLMSG_HDRLEN
            ));
        }
        if msg_len > remaining.len() {
            return self.fail(format!(
                "declared length {} exceeds the {} bytes remaining",
                msg_len,
                remaining.len()
            ));
        }

        let start = self.offset;
        let payload = &remaining[NLMSG_HDRLEN..msg_len];

        // msg_len >= NLMSG_HDRLEN, so the cursor always moves forward.
        let next = start + nlmsg_align(msg_len);
        if next <= start {
            return self.fail(format!("length {} does not advance the cursor", msg_len));
        }
        self.offset = next.min(self.data.len());

        Some(Ok((start, header, payload)))
    }
}

/// Extract the error code from an `NLMSG_ERROR` payload.
///
/// The kernel reports a negated errno, or 0 for an ACK. Returns `None`
/// when the payload is too short to hold the code.
pub fn error_code(payload: &[u8]) -> Option<i32> {
    let (code, _) = i32::read_from_prefix(payload).ok()?;
    Some(code)
}
