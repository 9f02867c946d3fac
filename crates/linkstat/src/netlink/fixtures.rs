//! Synthetic kernel responses for decoder tests.

use super::builder::MessageBuilder;
use super::message::{NLM_F_MULTI, NlMsgType};
use super::types::link::{IfInfoMsg, RtnlLinkStats, ifla};

/// A bare message of the given type with a raw payload.
pub fn message(msg_type: u16, payload: &[u8]) -> Vec<u8> {
    let mut builder = MessageBuilder::new(msg_type, NLM_F_MULTI);
    if !payload.is_empty() {
        builder.append_bytes(payload);
    }
    builder.finish()
}

/// An `RTM_NEWLINK` message as the kernel sends it in a dump.
pub fn link_message(index: i32, name: Option<&str>, stats: Option<&RtnlLinkStats>) -> Vec<u8> {
    let mut builder = MessageBuilder::new(NlMsgType::RTM_NEWLINK, NLM_F_MULTI);
    builder.append(&IfInfoMsg::new().with_index(index).with_flags(0x1));
    if let Some(name) = name {
        builder.append_attr_str(ifla::IFNAME, name);
    }
    // MTU, so the statistics are never the first attribute.
    builder.append_attr(4, &1500u32.to_ne_bytes());
    if let Some(stats) = stats {
        builder.append_attr(ifla::STATS, stats.as_bytes());
    }
    builder.finish()
}

/// The `NLMSG_DONE` sentinel that ends a dump.
pub fn done_message() -> Vec<u8> {
    message(NlMsgType::DONE, &0i32.to_ne_bytes())
}

/// An `NLMSG_ERROR` message with the given (negated) errno.
pub fn error_message(errno: i32) -> Vec<u8> {
    let mut payload = errno.to_ne_bytes().to_vec();
    payload.extend_from_slice(&[0u8; 16]);
    message(NlMsgType::ERROR, &payload)
}

/// Counters with distinct values in every field.
pub fn sample_stats(seed: u32) -> RtnlLinkStats {
    RtnlLinkStats {
        rx_packets: seed + 1,
        tx_packets: seed + 2,
        rx_bytes: seed + 3,
        tx_bytes: seed + 4,
        rx_errors: seed + 5,
        tx_errors: seed + 6,
        rx_dropped: seed + 7,
        tx_dropped: seed + 8,
        multicast: seed + 9,
        collisions: seed + 10,
        rx_length_errors: seed + 11,
        rx_over_errors: seed + 12,
        rx_crc_errors: seed + 13,
        rx_frame_errors: seed + 14,
        rx_fifo_errors: seed + 15,
        rx_missed_errors: seed + 16,
        tx_aborted_errors: seed + 17,
        tx_carrier_errors: seed + 18,
        tx_fifo_errors: seed + 19,
        tx_heartbeat_errors: seed + 20,
        tx_window_errors: seed + 21,
        rx_compressed: seed + 22,
        tx_compressed: seed + 23,
        rx_nohandler: seed + 24,
    }
}
