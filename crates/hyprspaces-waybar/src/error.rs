//! Error types for the waybar relay

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a relay run
#[derive(Error, Debug)]
pub enum RelayError {
    /// Neither `XDG_CONFIG_HOME` nor `HOME` is usable
    #[error("missing XDG_CONFIG_HOME/HOME")]
    MissingConfigRoot,

    /// Could not connect to the socket
    #[error("Failed to connect to {}: {source}", .path.display())]
    Connect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the socket failed
    #[error("Read error: {0}")]
    Read(#[source] std::io::Error),

    /// Writing to the output failed
    #[error("Write error: {0}")]
    Write(#[source] std::io::Error),
}
