use std::io;

use thiserror::Error;

/// Everything that can go wrong between resolving the peer and half-closing the connection.
#[derive(Debug, Error)]
pub enum Error {
    /// The hostname did not resolve to any IPv4 address.
    #[error("DNS lookup failed for host {host}")]
    Resolution {
        /// The hostname as given on the command line.
        host: String,
        /// Set when the resolver itself failed rather than returning no IPv4 address.
        #[source]
        source: Option<io::Error>,
    },

    /// No local socket could be created.
    #[error("socket")]
    SocketCreation(#[source] io::Error),

    /// The peer refused or could not be reached.
    #[error("connect")]
    Connection(#[source] io::Error),

    /// Reading the local input failed.
    #[error("read from input failed")]
    LocalRead(#[source] io::Error),

    /// Reading from the peer failed.
    #[error("read from remote peer failed")]
    RemoteRead(#[source] io::Error),

    /// Writing to the local output failed.
    #[error("write to output failed")]
    LocalWrite(#[source] io::Error),

    /// Writing to the peer failed.
    #[error("write to remote peer failed")]
    RemoteWrite(#[source] io::Error),

    /// The outbound half of the connection could not be shut down.
    #[error("shutdown")]
    Shutdown(#[source] io::Error),
}
