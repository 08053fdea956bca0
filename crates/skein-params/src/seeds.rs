//! Bootstrap peer discovery data

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

const ONE_WEEK_SECS: i64 = 7 * 24 * 60 * 60;

/// DNS seed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    /// Display name
    pub name: &'static str,
    /// Host queried for peer addresses
    pub host: &'static str,
}

impl DnsSeed {
    /// Seed whose name is its host
    pub const fn same(host: &'static str) -> Self {
        Self { name: host, host }
    }
}

/// Compiled-in fixed seed: 16-byte IPv6 (or IPv4-mapped) address and port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    /// Address bytes, network order
    pub addr: [u8; 16],
    /// Port
    pub port: u16,
}

impl SeedSpec6 {
    /// IPv4 seed in IPv4-mapped form
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> Self {
        Self {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }

    /// Socket address, unwrapping IPv4-mapped addresses
    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// Peer address handed to the address manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerAddress {
    /// Socket address
    pub addr: SocketAddr,
    /// Synthetic "last seen" time
    pub last_seen: DateTime<Utc>,
}

/// Turn fixed seed specs into peer addresses.
///
/// Each seed is given a random last-seen time between one and two weeks
/// before `now`. A node only talks to one or two seeds before learning
/// fresher addresses from them.
pub fn convert_seed6<R: Rng + ?Sized>(
    specs: &[SeedSpec6],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<PeerAddress> {
    specs
        .iter()
        .map(|spec| {
            let age = ONE_WEEK_SECS + rng.gen_range(0..ONE_WEEK_SECS);
            PeerAddress {
                addr: spec.socket_addr(),
                last_seen: now - Duration::seconds(age),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ipv4_mapped_seed() {
        let spec = SeedSpec6::ipv4(192, 0, 2, 10, 11230);
        assert_eq!(spec.socket_addr(), "192.0.2.10:11230".parse().unwrap());
    }

    #[test]
    fn test_ipv6_seed() {
        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[2] = 0x0d;
        addr[3] = 0xb8;
        addr[15] = 1;
        let spec = SeedSpec6 { addr, port: 27711 };
        assert_eq!(spec.socket_addr(), "[2001:db8::1]:27711".parse().unwrap());
    }

    #[test]
    fn test_last_seen_window() {
        let now = Utc::now();
        let specs = vec![SeedSpec6::ipv4(192, 0, 2, 1, 11230); 64];
        let mut rng = StdRng::seed_from_u64(7);
        for peer in convert_seed6(&specs, now, &mut rng) {
            let age = (now - peer.last_seen).num_seconds();
            assert!(age >= ONE_WEEK_SECS, "age {} too fresh", age);
            assert!(age < 2 * ONE_WEEK_SECS, "age {} too stale", age);
        }
    }
}
