#![warn(missing_docs)]

//! A line-oriented TCP relay client: connect to one peer, then pass lines typed on
//! standard input to the socket and everything the peer sends to standard output,
//! until either side closes.

use std::{net::SocketAddr, time::Duration};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use arguments::Arguments;
pub use error::Error;
pub use relay::Outcome;

/// Command line arguments.
pub mod arguments;

/// Resolve the peer and open the one connection of a session.
pub mod connect;

mod error;

/// Write a whole buffer regardless of how many bytes each `write` accepts.
pub mod insist;

/// Multiplex local input and the connection, moving bytes both ways.
pub mod relay;

/// Run a relay to completion and half-close the connection afterwards.
pub mod session;

/// Install the diagnostics subscriber: human-readable events on standard error,
/// filtered by `RUST_LOG` (default `info`). When `console` is given, console events
/// are additionally published on that address.
pub fn init_tracing(console: Option<SocketAddr>) {
    let console = console.map(|addr| {
        console_subscriber::ConsoleLayer::builder()
            .retention(Duration::from_secs(60))
            .server_addr(addr)
            .spawn()
    });
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(console)
        .with(stderr)
        .init();
}
