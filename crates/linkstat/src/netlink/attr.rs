//! Netlink attribute (rtattr/nlattr) handling.

use super::error::{Error, Result};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Netlink attribute alignment.
pub const NLA_ALIGNTO: usize = 4;

/// Align a length to NLA_ALIGNTO boundary.
#[inline]
pub const fn nla_align(len: usize) -> usize {
    (len + NLA_ALIGNTO - 1) & !(NLA_ALIGNTO - 1)
}

/// Size of the attribute header.
pub const NLA_HDRLEN: usize = 4; // nla_align(size_of::<NlAttr>())

/// Netlink attribute header (mirrors struct nlattr / struct rtattr).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct NlAttr {
    /// Length including header.
    pub nla_len: u16,
    /// Attribute type.
    pub nla_type: u16,
}

/// Attribute type flags.
pub const NLA_F_NESTED: u16 = 1 << 15;
pub const NLA_F_NET_BYTEORDER: u16 = 1 << 14;
pub const NLA_TYPE_MASK: u16 = !(NLA_F_NESTED | NLA_F_NET_BYTEORDER);

impl NlAttr {
    /// Create a new attribute header.
    pub fn new(attr_type: u16, data_len: usize) -> Self {
        Self {
            nla_len: (NLA_HDRLEN + data_len) as u16,
            nla_type: attr_type,
        }
    }

    /// Get the attribute type without flags.
    pub fn kind(&self) -> u16 {
        self.nla_type & NLA_TYPE_MASK
    }

    /// Get the payload length (total length minus header).
    pub fn payload_len(&self) -> usize {
        (self.nla_len as usize).saturating_sub(NLA_HDRLEN)
    }

    /// Convert to bytes.
    pub fn as_bytes(&self) -> &[u8] {
        <Self as IntoBytes>::as_bytes(self)
    }

    /// Read an attribute header from the front of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::read_from_prefix(data)
            .map(|(a, _)| a)
            .map_err(|_| Error::Truncated {
                expected: std::mem::size_of::<Self>(),
                actual: data.len(),
            })
    }
}

/// Iterator over netlink attributes in a buffer.
///
/// The sequence ends when fewer than [`NLA_HDRLEN`] bytes remain or an
/// attribute declares a length smaller than its own header; trailing
/// garbage is treated as "no more attributes". An attribute that claims
/// more bytes than remain is yielded with its payload clamped to what is
/// there, and the iteration ends after it.
pub struct AttrIter<'a> {
    data: &'a [u8],
}

impl<'a> AttrIter<'a> {
    /// Create a new attribute iterator.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Check if there are no more attributes.
    pub fn is_empty(&self) -> bool {
        self.data.len() < NLA_HDRLEN
    }
}

impl<'a> Iterator for AttrIter<'a> {
    /// Returns (attribute type, payload data).
    type Item = (u16, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.data.len() < NLA_HDRLEN {
            return None;
        }

        let attr = NlAttr::from_bytes(self.data).ok()?;

        let len = attr.nla_len as usize;
        if len < NLA_HDRLEN {
            self.data = &[];
            return None;
        }

        let end = len.min(self.data.len());
        let payload = &self.data[NLA_HDRLEN..end];
        let step = nla_align(len).min(self.data.len());
        self.data = &self.data[step..];

        Some((attr.kind(), payload))
    }
}

/// Helper functions for extracting typed values from attribute payloads.
pub mod get {
    use super::*;

    /// Extract a u32 value (native endian).
    pub fn u32_ne(data: &[u8]) -> Result<u32> {
        if data.len() < 4 {
            return Err(Error::InvalidAttribute("truncated u32 attribute".into()));
        }
        Ok(u32::from_ne_bytes([data[0], data[1], data[2], data[3]]))
    }

    /// Extract a null-terminated string.
    pub fn string(data: &[u8]) -> Result<&str> {
        // Find null terminator or use whole buffer
        let len = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        std::str::from_utf8(&data[..len])
            .map_err(|e| Error::InvalidAttribute(format!("invalid UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(attr_type: u16, payload: &[u8]) -> Vec<u8> {
        let mut buf = NlAttr::new(attr_type, payload.len()).as_bytes().to_vec();
        buf.extend_from_slice(payload);
        buf.resize(nla_align(buf.len()), 0);
        buf
    }

    #[test]
    fn test_walk_padded_attributes() {
        let mut buf = attr(3, b"lo\0");
        buf.extend(attr(4, &65536u32.to_ne_bytes()));

        let attrs: Vec<_> = AttrIter::new(&buf).collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0], (3, &b"lo\0"[..]));
        assert_eq!(attrs[1].0, 4);
        assert_eq!(get::u32_ne(attrs[1].1).unwrap(), 65536);
    }

    #[test]
    fn test_zero_length_attribute_terminates() {
        let mut buf = attr(3, b"eth0\0");
        buf.extend_from_slice(&[0, 0, 7, 0]);
        buf.extend(attr(4, &[1, 2, 3, 4]));

        let attrs: Vec<_> = AttrIter::new(&buf).collect();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].0, 3);
    }

    #[test]
    fn test_oversized_attribute_is_clamped() {
        let mut buf = attr(7, &[0xaa; 8]);
        // Claim 40 bytes while only 12 are present.
        buf[0..2].copy_from_slice(&40u16.to_ne_bytes());

        let mut iter = AttrIter::new(&buf);
        let (kind, payload) = iter.next().unwrap();
        assert_eq!(kind, 7);
        assert_eq!(payload.len(), 8);
        assert!(iter.next().is_none());
        assert!(iter.is_empty());
    }

    #[test]
    fn test_short_tail_ignored() {
        let mut buf = attr(1, &[]);
        buf.extend_from_slice(&[8, 0]);

        let attrs: Vec<_> = AttrIter::new(&buf).collect();
        assert_eq!(attrs, vec![(1u16, &b""[..])]);
    }

    #[test]
    fn test_kind_masks_flags() {
        let buf = attr(NLA_F_NESTED | 18, &[]);
        let (kind, _) = AttrIter::new(&buf).next().unwrap();
        assert_eq!(kind, 18);
    }

    #[test]
    fn test_get_helpers() {
        assert!(get::u32_ne(&[1, 2]).is_err());
        assert_eq!(get::string(b"eth0\0\0\0").unwrap(), "eth0");
        assert_eq!(get::string(b"wlan0").unwrap(), "wlan0");
        assert!(get::string(&[0xff, 0xfe, 0]).is_err());
    }
}
