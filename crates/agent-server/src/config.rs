//! Server configuration from the environment

use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// `BIND_ADDR`, default `0.0.0.0:3000`
    pub bind_addr: String,

    /// `STATIC_DIR`, default `./static` when it holds an `index.html`,
    /// else the `static/` directory next to this crate's sources
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Build from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR")
                .and_then(|v| v.into_string().ok())
                .unwrap_or(defaults.bind_addr),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }
}

fn default_static_dir() -> PathBuf {
    let local = PathBuf::from("static");
    if local.join("index.html").is_file() {
        local
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
    }
}
