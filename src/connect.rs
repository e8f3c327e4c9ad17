use std::net::{IpAddr, SocketAddr};

use tokio::net::{lookup_host, TcpSocket, TcpStream};

use crate::Error;

/// Resolve `host` to its first IPv4 address.
pub async fn resolve(host: &str, port: u16) -> Result<SocketAddr, Error> {
    let mut addrs = lookup_host((host, port))
        .await
        .map_err(|source| Error::Resolution {
            host: host.to_owned(),
            source: Some(source),
        })?;
    addrs
        .find(|addr| matches!(addr.ip(), IpAddr::V4(_)))
        .ok_or_else(|| Error::Resolution {
            host: host.to_owned(),
            source: None,
        })
}

/// Open a single TCP connection to `host:port`.
///
/// The socket is created before the name lookup, so resource exhaustion is reported
/// ahead of a resolution failure. Nothing is retried.
pub async fn connect(host: &str, port: u16) -> Result<TcpStream, Error> {
    let socket = TcpSocket::new_v4().map_err(Error::SocketCreation)?;
    tracing::info!("Created TCP socket");

    let addr = resolve(host, port).await?;

    tracing::info!("Connecting to remote host {addr}...");
    let stream = socket.connect(addr).await.map_err(Error::Connection)?;
    stream.set_nodelay(true).map_err(Error::Connection)?;
    tracing::info!("Connected.");

    Ok(stream)
}
