//! Shared utilities for linkstat.

pub mod ifname;

pub use ifname::{IfError, index_to_name, name_to_index, resolve};
