//! Listen address resolution.
//!
//! The daemon binds a single fixed port. `SHOP_DAEMON_ADDR` (`host:port`) may
//! override it for local runs; `.env.local` is honoured via `dotenvy` in
//! `main.rs`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing::warn;

pub const ADDR_ENV: &str = "SHOP_DAEMON_ADDR";
pub const DEFAULT_PORT: u16 = 8081;

pub fn default_addr() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
}

/// Resolve the bind address from an optional raw override.
///
/// An unparseable override is logged and ignored.
pub fn bind_addr(raw: Option<&str>) -> SocketAddr {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return default_addr();
    };
    match raw.parse() {
        Ok(addr) => addr,
        Err(err) => {
            warn!(%err, value = raw, "ignoring invalid {ADDR_ENV}");
            default_addr()
        }
    }
}

pub fn bind_addr_from_env() -> SocketAddr {
    bind_addr(std::env::var(ADDR_ENV).ok().as_deref())
}
