//! Dump statistics for every interface.
//!
//! Run with: cargo run -p linkstat --example dump_stats

use std::time::Duration;

use linkstat::netlink::Connection;

#[tokio::main(flavor = "current_thread")]
async fn main() -> linkstat::Result<()> {
    let conn = Connection::new()?.timeout(Duration::from_secs(5));

    println!(
        "{:<16} {:>14} {:>14} {:>10} {:>10}",
        "INTERFACE", "RX bytes", "TX bytes", "errors", "dropped"
    );
    println!("{}", "-".repeat(68));

    conn.for_each_link_stats(|link| {
        let stats = link.stats();
        println!(
            "{:<16} {:>14} {:>14} {:>10} {:>10}",
            link.name_or("?"),
            stats.rx_bytes(),
            stats.tx_bytes(),
            stats.total_errors(),
            stats.total_dropped()
        );
    })
    .await
}
