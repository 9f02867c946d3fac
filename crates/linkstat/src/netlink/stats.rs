//! Read-only view over a link statistics record.
//!
//! Counters are stored on the wire as u32 but reported as u64 so that
//! sums never overflow. Derived totals are computed on every call.
//!
//! # Example
//!
//! ```ignore
//! use linkstat::netlink::decode;
//!
//! decode(&datagram, |link| {
//!     let stats = link.stats();
//!     println!("{}: {} rx bytes, {} errors", link.ifindex(), stats.rx_bytes(), stats.total_errors());
//! })?;
//! ```

use std::fmt;

use super::types::link::RtnlLinkStats;

/// Statistics for one network interface (IFLA_STATS).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStatistics {
    raw: RtnlLinkStats,
}

impl LinkStatistics {
    /// Wrap a decoded record.
    pub fn new(raw: RtnlLinkStats) -> Self {
        Self { raw }
    }

    /// Read from an `IFLA_STATS` payload; `None` if it is shorter than the record.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        RtnlLinkStats::from_bytes(data).map(Self::new)
    }

    /// The underlying wire record.
    pub fn raw(&self) -> &RtnlLinkStats {
        &self.raw
    }

    /// The number of bytes received.
    pub fn rx_bytes(&self) -> u64 {
        self.raw.rx_bytes.into()
    }

    /// The number of packets received.
    pub fn rx_packets(&self) -> u64 {
        self.raw.rx_packets.into()
    }

    /// The number of errors while receiving.
    pub fn rx_errors(&self) -> u64 {
        self.raw.rx_errors.into()
    }

    /// The number of dropped packets while receiving.
    pub fn rx_dropped(&self) -> u64 {
        self.raw.rx_dropped.into()
    }

    /// The number of multicast packets received.
    pub fn rx_multicast(&self) -> u64 {
        self.raw.multicast.into()
    }

    /// The number of receive CRC errors.
    pub fn rx_crc_errors(&self) -> u64 {
        self.raw.rx_crc_errors.into()
    }

    /// The number of length errors while receiving.
    pub fn rx_length_errors(&self) -> u64 {
        self.raw.rx_length_errors.into()
    }

    /// The number of receiver ring buffer overflows.
    pub fn rx_over_errors(&self) -> u64 {
        self.raw.rx_over_errors.into()
    }

    /// The number of frame alignment errors while receiving.
    pub fn rx_frame_errors(&self) -> u64 {
        self.raw.rx_frame_errors.into()
    }

    /// The number of FIFO overrun errors while receiving.
    pub fn rx_fifo_errors(&self) -> u64 {
        self.raw.rx_fifo_errors.into()
    }

    /// The number of packets missed by the host.
    pub fn rx_missed_errors(&self) -> u64 {
        self.raw.rx_missed_errors.into()
    }

    /// The number of compressed packets received.
    pub fn rx_compressed(&self) -> u64 {
        self.raw.rx_compressed.into()
    }

    /// The number of packets dropped for lack of a protocol handler.
    pub fn rx_nohandler(&self) -> u64 {
        self.raw.rx_nohandler.into()
    }

    /// The number of bytes transmitted.
    pub fn tx_bytes(&self) -> u64 {
        self.raw.tx_bytes.into()
    }

    /// The number of packets transmitted.
    pub fn tx_packets(&self) -> u64 {
        self.raw.tx_packets.into()
    }

    /// The number of errors while transmitting.
    pub fn tx_errors(&self) -> u64 {
        self.raw.tx_errors.into()
    }

    /// The number of dropped packets while transmitting.
    pub fn tx_dropped(&self) -> u64 {
        self.raw.tx_dropped.into()
    }

    /// The number of collisions while transmitting.
    pub fn tx_collisions(&self) -> u64 {
        self.raw.collisions.into()
    }

    /// The number of aborted transmissions.
    pub fn tx_aborted_errors(&self) -> u64 {
        self.raw.tx_aborted_errors.into()
    }

    /// The number of carrier errors.
    pub fn tx_carrier_errors(&self) -> u64 {
        self.raw.tx_carrier_errors.into()
    }

    /// The number of FIFO errors while transmitting.
    pub fn tx_fifo_errors(&self) -> u64 {
        self.raw.tx_fifo_errors.into()
    }

    /// The number of heartbeat errors.
    pub fn tx_heartbeat_errors(&self) -> u64 {
        self.raw.tx_heartbeat_errors.into()
    }

    /// The number of transmit window errors.
    pub fn tx_window_errors(&self) -> u64 {
        self.raw.tx_window_errors.into()
    }

    /// The number of compressed packets transmitted.
    pub fn tx_compressed(&self) -> u64 {
        self.raw.tx_compressed.into()
    }

    /// Sum of all receive-side error counters.
    pub fn rx_total_errors(&self) -> u64 {
        self.rx_errors()
            + self.rx_crc_errors()
            + self.rx_length_errors()
            + self.rx_over_errors()
            + self.rx_frame_errors()
            + self.rx_fifo_errors()
            + self.rx_missed_errors()
    }

    /// Sum of all transmit-side error counters.
    pub fn tx_total_errors(&self) -> u64 {
        self.tx_errors()
            + self.tx_aborted_errors()
            + self.tx_carrier_errors()
            + self.tx_fifo_errors()
            + self.tx_heartbeat_errors()
            + self.tx_window_errors()
    }

    /// Total errors (rx + tx).
    pub fn total_errors(&self) -> u64 {
        self.rx_total_errors() + self.tx_total_errors()
    }

    /// Total bytes (rx + tx).
    pub fn total_bytes(&self) -> u64 {
        self.rx_bytes() + self.tx_bytes()
    }

    /// Total packets (rx + tx).
    pub fn total_packets(&self) -> u64 {
        self.rx_packets() + self.tx_packets()
    }

    /// Total dropped (rx + tx).
    pub fn total_dropped(&self) -> u64 {
        self.rx_dropped() + self.tx_dropped()
    }

    /// Every named counter with its label, in display order.
    pub fn counters(&self) -> [(&'static str, u64); 24] {
        [
            ("rx_bytes", self.rx_bytes()),
            ("rx_packets", self.rx_packets()),
            ("rx_errors", self.rx_errors()),
            ("rx_dropped", self.rx_dropped()),
            ("rx_multicast", self.rx_multicast()),
            ("rx_crc_errors", self.rx_crc_errors()),
            ("rx_length_errors", self.rx_length_errors()),
            ("rx_over_errors", self.rx_over_errors()),
            ("rx_frame_errors", self.rx_frame_errors()),
            ("rx_fifo_errors", self.rx_fifo_errors()),
            ("rx_missed_errors", self.rx_missed_errors()),
            ("rx_compressed", self.rx_compressed()),
            ("rx_nohandler", self.rx_nohandler()),
            ("tx_bytes", self.tx_bytes()),
            ("tx_packets", self.tx_packets()),
            ("tx_errors", self.tx_errors()),
            ("tx_dropped", self.tx_dropped()),
            ("tx_collisions", self.tx_collisions()),
            ("tx_aborted_errors", self.tx_aborted_errors()),
            ("tx_carrier_errors", self.tx_carrier_errors()),
            ("tx_fifo_errors", self.tx_fifo_errors()),
            ("tx_heartbeat_errors", self.tx_heartbeat_errors()),
            ("tx_window_errors", self.tx_window_errors()),
            ("tx_compressed", self.tx_compressed()),
        ]
    }
}

impl LinkStatistics {
    /// The classic `rtnl_link_stats` counters under their kernel field
    /// names, in kernel field order.
    ///
    /// Omits `rx_compressed`, `tx_compressed` and `rx_nohandler`.
    pub fn kernel_counters(&self) -> [(&'static str, u64); 21] {
        [
            ("rx_packets", self.rx_packets()),
            ("tx_packets", self.tx_packets()),
            ("rx_bytes", self.rx_bytes()),
            ("tx_bytes", self.tx_bytes()),
            ("rx_errors", self.rx_errors()),
            ("tx_errors", self.tx_errors()),
            ("rx_dropped", self.rx_dropped()),
            ("tx_dropped", self.tx_dropped()),
            ("multicast", self.rx_multicast()),
            ("collisions", self.tx_collisions()),
            ("rx_length_errors", self.rx_length_errors()),
            ("rx_over_errors", self.rx_over_errors()),
            ("rx_crc_errors", self.rx_crc_errors()),
            ("rx_frame_errors", self.rx_frame_errors()),
            ("rx_fifo_errors", self.rx_fifo_errors()),
            ("rx_missed_errors", self.rx_missed_errors()),
            ("tx_aborted_errors", self.tx_aborted_errors()),
            ("tx_carrier_errors", self.tx_carrier_errors()),
            ("tx_fifo_errors", self.tx_fifo_errors()),
            ("tx_heartbeat_errors", self.tx_heartbeat_errors()),
            ("tx_window_errors", self.tx_window_errors()),
        ]
    }
}

impl From<RtnlLinkStats> for LinkStatistics {
    fn from(raw: RtnlLinkStats) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for LinkStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.counters() {
            writeln!(f, "{}: {}", name, value)?;
        }
        writeln!(f, "rx_total_errors: {}", self.rx_total_errors())?;
        writeln!(f, "tx_total_errors: {}", self.tx_total_errors())?;
        write!(f, "total_errors: {}", self.total_errors())
    }
}
