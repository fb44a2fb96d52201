use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;

/// Address to listen on, from `HOST` and `PORT`.
pub fn resolve_bind_addr() -> SocketAddr {
    bind_addr(env::var("HOST").ok(), env::var("PORT").ok())
}

fn bind_addr(host: Option<String>, port: Option<String>) -> SocketAddr {
    let host = match host {
        Some(raw) => raw.parse::<IpAddr>().unwrap_or_else(|err| {
            warn!("ignoring HOST={raw}: {err}");
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        }),
        None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
    };
    let port = match port {
        Some(raw) => raw.parse::<u16>().unwrap_or_else(|err| {
            warn!("ignoring PORT={raw}: {err}");
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    };
    SocketAddr::new(host, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_interfaces_on_8080() {
        assert_eq!(bind_addr(None, None), SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn reads_host_and_port() {
        let addr = bind_addr(Some("127.0.0.1".into()), Some("9100".into()));
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 9100)));
    }

    #[test]
    fn invalid_values_fall_back() {
        let addr = bind_addr(Some("localhost:80".into()), Some("http".into()));
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));
    }
}
