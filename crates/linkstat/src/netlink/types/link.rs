//! Link (network interface) wire records.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Packet address family; as a dump selector it matches links of every family.
pub const AF_PACKET: u8 = libc::AF_PACKET as u8;

/// Interface link attributes (IFLA_*) used by the statistics dump.
pub mod ifla {
    /// Interface name (NUL-terminated string).
    pub const IFNAME: u16 = 3;
    /// Link statistics (struct rtnl_link_stats).
    pub const STATS: u16 = 7;
}

/// Interface info message (struct ifinfomsg).
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout,
)]
pub struct IfInfoMsg {
    /// Address family (usually AF_UNSPEC).
    pub ifi_family: u8,
    /// Padding.
    pub __ifi_pad: u8,
    /// Device type (ARPHRD_*).
    pub ifi_type: u16,
    /// Interface index.
    pub ifi_index: i32,
    /// Device flags (IFF_*).
    pub ifi_flags: u32,
    /// Change mask.
    pub ifi_change: u32,
}

impl IfInfoMsg {
    /// Size of this structure.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Create a new interface info message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interface index.
    pub fn with_index(mut self, index: i32) -> Self {
        self.ifi_index = index;
        self
    }

    /// Set the device flags.
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.ifi_flags = flags;
        self
    }

    /// Convert to bytes.
    pub fn as_bytes(&self) -> &[u8] {
        <Self as IntoBytes>::as_bytes(self)
    }
}

/// rtgenmsg structure: the one-byte family selector of a dump request.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout,
)]
pub struct RtGenMsg {
    /// Address family.
    pub rtgen_family: u8,
}

impl RtGenMsg {
    /// Create with a specific address family.
    pub fn with_family(family: u8) -> Self {
        Self {
            rtgen_family: family,
        }
    }

    /// Convert to bytes for netlink message building.
    pub fn as_bytes(&self) -> &[u8] {
        <Self as IntoBytes>::as_bytes(self)
    }

    /// Size of this struct for message building (includes padding to 4 bytes).
    pub const fn padded_size() -> usize {
        4 // 1 byte + 3 bytes padding
    }
}

/// Link statistics (struct rtnl_link_stats).
///
/// Every counter is a host-endian u32 that wraps on overflow in the kernel.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout,
)]
#[cfg_attr(feature = "output", derive(serde::Serialize))]
pub struct RtnlLinkStats {
    pub rx_packets: u32,
    pub tx_packets: u32,
    pub rx_bytes: u32,
    pub tx_bytes: u32,
    pub rx_errors: u32,
    pub tx_errors: u32,
    pub rx_dropped: u32,
    pub tx_dropped: u32,
    pub multicast: u32,
    pub collisions: u32,
    // Detailed rx errors
    pub rx_length_errors: u32,
    pub rx_over_errors: u32,
    pub rx_crc_errors: u32,
    pub rx_frame_errors: u32,
    pub rx_fifo_errors: u32,
    pub rx_missed_errors: u32,
    // Detailed tx errors
    pub tx_aborted_errors: u32,
    pub tx_carrier_errors: u32,
    pub tx_fifo_errors: u32,
    pub tx_heartbeat_errors: u32,
    pub tx_window_errors: u32,
    // For cslip etc
    pub rx_compressed: u32,
    pub tx_compressed: u32,
    pub rx_nohandler: u32,
}

impl RtnlLinkStats {
    /// Size of this structure.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Read from an attribute payload.
    ///
    /// Returns `None` unless the payload holds at least [`Self::SIZE`] bytes.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        Self::read_from_prefix(data).map(|(r, _)| r).ok()
    }

    /// Convert to bytes.
    pub fn as_bytes(&self) -> &[u8] {
        <Self as IntoBytes>::as_bytes(self)
    }
}
