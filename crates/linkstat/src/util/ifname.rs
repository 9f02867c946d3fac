//! Interface name and index resolution.
//!
//! Names are looked up through `/sys/class/net`, so no netlink round trip
//! is needed before the dump itself.

use std::path::Path;

/// Maximum interface name length (including null terminator).
pub const IFNAMSIZ: usize = 16;

const SYSFS_NET: &str = "/sys/class/net";

/// Error type for interface resolution.
#[derive(Debug, thiserror::Error)]
pub enum IfError {
    #[error("interface not found: {0}")]
    NotFound(String),

    #[error("invalid interface name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IfError>;

/// Check that `name` could be a kernel interface name.
pub fn validate(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "empty name"
    } else if name.len() >= IFNAMSIZ {
        "name too long"
    } else if name == "." || name == ".." {
        "reserved name"
    } else if name.contains('/') || name.contains('\0') {
        "name contains invalid characters"
    } else if name.chars().any(char::is_whitespace) {
        "name contains whitespace"
    } else {
        return Ok(());
    };

    Err(IfError::InvalidName {
        name: name.to_string(),
        reason,
    })
}

/// Convert an interface name to its index.
pub fn name_to_index(name: &str) -> Result<u32> {
    validate(name)?;

    let path = Path::new(SYSFS_NET).join(name).join("ifindex");
    let content =
        std::fs::read_to_string(&path).map_err(|_| IfError::NotFound(name.to_string()))?;

    content
        .trim()
        .parse()
        .map_err(|_| IfError::NotFound(name.to_string()))
}

/// Convert an interface index to its name.
pub fn index_to_name(index: u32) -> Result<String> {
    if index == 0 {
        return Err(IfError::NotFound("index 0".to_string()));
    }

    for entry in std::fs::read_dir(SYSFS_NET)?.flatten() {
        let path = entry.path().join("ifindex");
        if let Ok(content) = std::fs::read_to_string(&path)
            && content.trim().parse::<u32>().ok() == Some(index)
        {
            return Ok(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Err(IfError::NotFound(format!("index {}", index)))
}

/// Resolve a name or a numeric index to `(name, index)`.
pub fn resolve(s: &str) -> Result<(String, u32)> {
    match s.parse::<u32>() {
        Ok(index) => Ok((index_to_name(index)?, index)),
        Err(_) => Ok((s.to_string(), name_to_index(s)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(validate("eth0").is_ok());
        assert!(validate("lo").is_ok());
        assert!(validate("veth123").is_ok());
        assert!(validate("a".repeat(IFNAMSIZ - 1).as_str()).is_ok());

        assert!(validate("").is_err());
        assert!(validate("a".repeat(IFNAMSIZ).as_str()).is_err());
        assert!(validate("eth/0").is_err());
        assert!(validate("eth 0").is_err());
        assert!(validate("..").is_err());
    }

    #[test]
    fn test_invalid_name_keeps_name() {
        match validate("eth 0") {
            Err(IfError::InvalidName { name, reason }) => {
                assert_eq!(name, "eth 0");
                assert_eq!(reason, "name contains whitespace");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_name_not_found() {
        assert!(matches!(
            name_to_index("nosuchif0"),
            Err(IfError::NotFound(name)) if name == "nosuchif0"
        ));
    }

    #[test]
    fn test_index_zero_not_found() {
        assert!(matches!(index_to_name(0), Err(IfError::NotFound(_))));
        assert!(matches!(resolve("0"), Err(IfError::NotFound(_))));
    }
}
