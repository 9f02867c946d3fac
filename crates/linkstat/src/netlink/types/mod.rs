//! Fixed-layout netlink wire records.

pub mod link;
