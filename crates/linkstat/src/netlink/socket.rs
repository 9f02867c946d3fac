//! Low-level async netlink socket operations.

use std::future::Future;
use std::os::unix::io::{AsRawFd, RawFd};
use std::sync::atomic::{AtomicU32, Ordering};

use bytes::BytesMut;
use netlink_sys::{Socket, SocketAddr, protocols};
use tokio::io::Interest;
use tokio::io::unix::AsyncFd;

use super::error::Result;

/// Size of the buffer a single receive fills.
///
/// Large enough for one kernel dump datagram; the kernel never splits a
/// message across datagrams.
pub const RECV_BUF_SIZE: usize = 32768;

/// A datagram channel to the kernel's routing netlink family.
///
/// [`NetlinkSocket`] is the real implementation; tests substitute a
/// scripted one.
pub trait Transport {
    /// Send one complete message.
    fn send(&self, msg: &[u8]) -> impl Future<Output = Result<()>> + Send;

    /// Receive one datagram.
    fn recv(&self) -> impl Future<Output = Result<Vec<u8>>> + Send;

    /// Get the next sequence number.
    fn next_seq(&self) -> u32;

    /// Get the local port ID.
    fn pid(&self) -> u32;
}

/// Async `NETLINK_ROUTE` socket.
pub struct NetlinkSocket {
    /// The underlying async file descriptor.
    fd: AsyncFd<Socket>,
    /// Sequence number counter.
    seq: AtomicU32,
    /// Local port ID (assigned by kernel).
    pid: u32,
}

impl NetlinkSocket {
    /// Open and bind a routing netlink socket.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new() -> Result<Self> {
        let mut socket = Socket::new(protocols::NETLINK_ROUTE)?;
        socket.set_non_blocking(true)?;

        // Bind to get a port ID
        let mut addr = SocketAddr::new(0, 0);
        socket.bind(&addr)?;
        socket.get_address(&mut addr)?;
        let pid = addr.port_number();

        let fd = AsyncFd::new(socket)?;
        tracing::debug!(pid, "opened NETLINK_ROUTE socket");

        Ok(Self {
            fd,
            seq: AtomicU32::new(1),
            pid,
        })
    }

    /// Send a message.
    pub async fn send(&self, msg: &[u8]) -> Result<()> {
        loop {
            let mut guard = self.fd.ready(Interest::WRITABLE).await?;

            match guard.try_io(|inner| inner.get_ref().send(msg, 0)) {
                Ok(result) => {
                    result?;
                    return Ok(());
                }
                Err(_would_block) => continue,
            }
        }
    }

    /// Receive one datagram, allocating a buffer.
    pub async fn recv_msg(&self) -> Result<Vec<u8>> {
        // Allocate buffer with capacity - don't resize, let recv fill it
        let mut buf = BytesMut::with_capacity(RECV_BUF_SIZE);

        loop {
            let mut guard = self.fd.ready(Interest::READABLE).await?;

            match guard.try_io(|inner| inner.get_ref().recv(&mut buf, 0)) {
                Ok(result) => {
                    let n = result?;
                    tracing::trace!(bytes = n, "received datagram");
                    // buf has been advanced by recv, so buf[..] contains the data
                    return Ok(buf.to_vec());
                }
                Err(_would_block) => continue,
            }
        }
    }

    /// Get the next sequence number.
    pub fn next_seq(&self) -> u32 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }

    /// Get the local port ID.
    pub fn pid(&self) -> u32 {
        self.pid
    }
}

impl Transport for NetlinkSocket {
    async fn send(&self, msg: &[u8]) -> Result<()> {
        NetlinkSocket::send(self, msg).await
    }

    async fn recv(&self) -> Result<Vec<u8>> {
        self.recv_msg().await
    }

    fn next_seq(&self) -> u32 {
        NetlinkSocket::next_seq(self)
    }

    fn pid(&self) -> u32 {
        NetlinkSocket::pid(self)
    }
}

impl AsRawFd for NetlinkSocket {
    fn as_raw_fd(&self) -> RawFd {
        self.fd.get_ref().as_raw_fd()
    }
}
