//! Socket path resolution
//!
//! The plugin publishes its waybar socket under the user's configuration
//! root: `$XDG_CONFIG_HOME/hyprspaces/waybar/waybar.sock`, falling back to
//! `$HOME/.config/hyprspaces/waybar/waybar.sock`.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::RelayError;

/// Application directory under the configuration root
pub const APP_DIR: &str = "hyprspaces";

/// Waybar directory under [`APP_DIR`]
pub const WAYBAR_DIR: &str = "waybar";

/// Socket file name
pub const SOCKET_FILE: &str = "waybar.sock";

/// Snapshot of the environment variables used for path resolution
///
/// A variable that is set but empty is stored as `None`. Values are kept as
/// raw OS strings, so non-UTF-8 paths resolve byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub xdg_config_home: Option<OsString>,
    pub home: Option<OsString>,
}

impl EnvConfig {
    /// Read `XDG_CONFIG_HOME` and `HOME` from the process environment
    pub fn from_env() -> Self {
        Self {
            xdg_config_home: non_empty_var("XDG_CONFIG_HOME"),
            home: non_empty_var("HOME"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<OsString> {
    std::env::var_os(name).filter(|value| !value.is_empty())
}

/// Get the configuration root, if the environment provides one
pub fn config_root(env: &EnvConfig) -> Option<PathBuf> {
    if let Some(xdg) = &env.xdg_config_home {
        return Some(PathBuf::from(xdg));
    }
    env.home
        .as_ref()
        .map(|home| PathBuf::from(home).join(".config"))
}

/// Get the waybar socket path, if the environment provides a root for it
pub fn socket_path(env: &EnvConfig) -> Option<PathBuf> {
    config_root(env).map(|root| root.join(APP_DIR).join(WAYBAR_DIR).join(SOCKET_FILE))
}

/// Like [`socket_path`], but treats a missing root as an error
pub fn resolve_socket_path(env: &EnvConfig) -> Result<PathBuf, RelayError> {
    socket_path(env).ok_or(RelayError::MissingConfigRoot)
}
