//! hyprspaces-waybar: waybar socket relay for hyprspaces
//!
//! Connects to the status socket published by the hyprspaces plugin and
//! forwards every byte it receives to standard output, so the binary can be
//! used directly as the `exec` of a waybar custom module.

pub mod error;
pub mod paths;
pub mod relay;

pub use error::RelayError;
pub use paths::{resolve_socket_path, socket_path, EnvConfig};
pub use relay::{connect, relay, run, CHUNK_SIZE};
