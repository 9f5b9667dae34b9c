//! Client identity - the network address that keys rate and ban state

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::http::HeaderMap;

/// Network address of a requester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientIdentity(IpAddr);

impl ClientIdentity {
    /// Create an identity, folding IPv4-mapped IPv6 addresses onto IPv4
    pub fn new(ip: IpAddr) -> Self {
        Self(ip.to_canonical())
    }

    /// Resolve the identity of a request.
    ///
    /// When `trust_forwarded_for` is set, the first entry of `X-Forwarded-For`
    /// wins if it parses as an address; otherwise the socket peer is used.
    pub fn resolve(
        headers: &HeaderMap,
        peer: Option<SocketAddr>,
        trust_forwarded_for: bool,
    ) -> Option<Self> {
        if trust_forwarded_for {
            let forwarded = headers
                .get("x-forwarded-for")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .and_then(|v| IpAddr::from_str(v.trim()).ok());

            if let Some(ip) = forwarded {
                return Some(Self::new(ip));
            }
        }

        peer.map(|addr| Self::new(addr.ip()))
    }

    pub fn ip(&self) -> IpAddr {
        self.0
    }
}

impl From<IpAddr> for ClientIdentity {
    fn from(ip: IpAddr) -> Self {
        Self::new(ip)
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
