//! Printable implementations for library types.

mod link_stats;
