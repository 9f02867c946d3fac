//! Printable implementation for LinkEntry.

use std::io::Write;

use crate::netlink::LinkEntry;
use crate::output::{OutputOptions, Printable};

impl Printable for LinkEntry {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        match &self.name {
            Some(name) => writeln!(w, "Interface: {}", name)?,
            None => writeln!(w, "Interface: if{}", self.ifindex)?,
        }
        for (name, value) in self.stats.kernel_counters() {
            writeln!(w, "{}: {}", name, value)?;
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        let mut stats = serde_json::Map::new();
        for (name, value) in self.stats.counters() {
            stats.insert(name.to_string(), serde_json::json!(value));
        }

        serde_json::json!({
            "ifindex": self.ifindex,
            "ifname": self.name,
            "stats": stats,
            "rx_total_errors": self.stats.rx_total_errors(),
            "tx_total_errors": self.stats.tx_total_errors(),
            "total_errors": self.stats.total_errors(),
        })
    }
}
