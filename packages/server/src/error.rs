//! Server lifecycle errors.

use std::{io, net::SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server terminated unexpectedly: {0}")]
    Serve(#[source] io::Error),
}
