//! Error types for netlink operations.

use std::io;
use std::time::Duration;

/// Result type for netlink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while requesting or decoding link statistics.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error from socket operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[cfg(feature = "output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Kernel returned an error code.
    #[error("kernel error: {message} (errno {errno})")]
    Kernel {
        /// The errno value from the kernel.
        errno: i32,
        /// Human-readable error message.
        message: String,
    },

    /// A message's declared length does not fit the receive buffer.
    ///
    /// Decoding cannot continue past this point without guessing an offset.
    #[error("malformed message at offset {offset}: {reason}")]
    MalformedMessage {
        /// Byte offset of the message within the receive buffer.
        offset: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Fixed-size record was truncated.
    #[error("record truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Expected record length.
        expected: usize,
        /// Actual bytes available.
        actual: usize,
    },

    /// Invalid attribute format.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// Interface not found.
    #[error("interface not found: {name}")]
    InterfaceNotFound {
        /// The interface name that was not found.
        name: String,
    },

    /// No response arrived within the configured bound.
    #[error("timed out after {0:?} waiting for a netlink response")]
    Timeout(Duration),
}

impl Error {
    /// Create a kernel error from an errno value.
    ///
    /// Netlink error messages carry the errno negated; either sign is accepted.
    pub fn from_errno(errno: i32) -> Self {
        let errno = errno.abs();
        let message = io::Error::from_raw_os_error(errno).to_string();
        Self::Kernel { errno, message }
    }

    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        Self::MalformedMessage {
            offset,
            reason: reason.into(),
        }
    }

    /// Check if this error means the response bytes could not be trusted.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedMessage { .. } | Self::Truncated { .. })
    }

    /// Check if this is a "not found" error (ENOENT, ENODEV, etc.).
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Kernel { errno, .. } => matches!(*errno, 2 | 19), // ENOENT=2, ENODEV=19
            Self::InterfaceNotFound { .. } => true,
            _ => false,
        }
    }

    /// Check if this is a permission error (EPERM, EACCES).
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Kernel { errno, .. } => matches!(*errno, 1 | 13), // EPERM=1, EACCES=13
            Self::Io(e) => e.kind() == io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Get the errno value if this is a kernel error.
    pub fn errno(&self) -> Option<i32> {
        match self {
            Self::Kernel { errno, .. } => Some(*errno),
            _ => None,
        }
    }
}

impl From<crate::util::ifname::IfError> for Error {
    fn from(err: crate::util::ifname::IfError) -> Self {
        use crate::util::ifname::IfError;

        match err {
            IfError::NotFound(name) | IfError::InvalidName { name, .. } => {
                Self::InterfaceNotFound { name }
            }
            IfError::Io(e) => Self::Io(e),
        }
    }
}
