use std_alloc::format;
use std_alloc::string::String;

use no_std_net::Ipv6Addr;

use crate::{Adapter, DevAddr, HostError};

/// URI scheme for CoAP over UDP
pub const COAP_SCHEME: &str = "coap";

/// URI scheme for CoAP over DTLS
pub const COAPS_SCHEME: &str = "coaps";

/// URI scheme for CoAP over TCP
pub const COAP_TCP_SCHEME: &str = "coap+tcp";

/// URI scheme for CoAP over TLS
pub const COAPS_TCP_SCHEME: &str = "coaps+tcp";

/// Size of the literal address buffer of the network stack, including its
/// NUL terminator
pub const MAX_ADDR_LEN: usize = 66;

/// Longest literal address (in bytes) that will be formatted
pub const MAX_LITERAL_LEN: usize = MAX_ADDR_LEN - 1;

/// The zone separator `%` re-encoded for use inside a URI
/// ([RFC 6874 section 2](https://datatracker.ietf.org/doc/html/rfc6874#section-2))
pub const ZONE_SEPARATOR_ESCAPED: &str = "%25";

/// The URI scheme used to reach a device
///
/// ```
/// use toad_dev_addr::{scheme, Adapter, DevAddr, Flags};
///
/// let mut addr = DevAddr::default();
/// assert_eq!(scheme(&addr), "coap");
///
/// addr.flags = Flags::v4().secure();
/// assert_eq!(scheme(&addr), "coaps");
///
/// addr.adapter = Adapter::Tcp;
/// assert_eq!(scheme(&addr), "coaps+tcp");
/// ```
pub fn scheme(addr: &DevAddr) -> &'static str {
  match (addr.adapter, addr.flags.secure) {
    | (Adapter::Tcp, false) => COAP_TCP_SCHEME,
    | (Adapter::Tcp, true) => COAPS_TCP_SCHEME,
    | (_, false) => COAP_SCHEME,
    | (_, true) => COAPS_SCHEME,
  }
}

fn is_unreserved(c: char) -> bool {
  c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

/// Validate an IPv6 literal and escape its zone id (if any) for embedding in a URI.
///
/// ```
/// use toad_dev_addr::{encode_zone, HostError};
///
/// assert_eq!(encode_zone("fe80::1%eth0").unwrap(), "fe80::1%25eth0");
/// assert_eq!(encode_zone("::1").unwrap(), "::1");
/// assert_eq!(encode_zone("fe80::1%%"), Err(HostError::MultipleZoneSeparators));
/// ```
pub fn encode_zone(literal: &str) -> Result<String, HostError> {
  if literal.len() > MAX_LITERAL_LEN {
    return Err(HostError::too_long(literal.len()));
  }

  let (base, zone) = match literal.split_once('%') {
    | Some((_, zone)) if zone.contains('%') => return Err(HostError::MultipleZoneSeparators),
    | Some((base, zone)) => (base, Some(zone)),
    | None => (literal, None),
  };

  if base.parse::<Ipv6Addr>().is_err() {
    return Err(HostError::InvalidIpv6(base.into()));
  }

  match zone {
    | None => Ok(base.into()),
    | Some("") => Err(HostError::EmptyZone),
    | Some(zone) => match zone.chars().find(|c| !is_unreserved(*c)) {
      | Some(c) => Err(HostError::InvalidZoneChar(c)),
      | None => Ok(format!("{}{}{}", base, ZONE_SEPARATOR_ESCAPED, zone)),
    },
  }
}

/// Format a device address as the scheme-qualified host of a URI:
/// `scheme://literal:port`, with IPv6 literals bracketed and their
/// zone id escaped.
///
/// Fails instead of yielding a malformed URI.
///
/// ```
/// use toad_dev_addr::{host, DevAddr, Flags, HostError};
///
/// let mut addr = DevAddr { flags: Flags::v6(),
///                          port: 5000,
///                          addr: "fe80::1%eth0".into(),
///                          ..Default::default() };
/// assert_eq!(host(&addr).unwrap(), "coap://[fe80::1%25eth0]:5000");
///
/// addr.addr = "fe80::1%%".into();
/// assert_eq!(host(&addr), Err(HostError::MultipleZoneSeparators));
/// ```
pub fn host(addr: &DevAddr) -> Result<String, HostError> {
  let literal = if addr.is_ipv6() {
    encode_zone(&addr.addr).map(|lit| format!("[{}]", lit))
  } else if addr.addr.len() > MAX_LITERAL_LEN {
    Err(HostError::too_long(addr.addr.len()))
  } else {
    Ok(addr.addr.clone())
  };

  match literal {
    | Ok(literal) => Ok(format!("{}://{}:{}", scheme(addr), literal, addr.port)),
    | Err(e) => {
      log::debug!("cannot format {:?} as a URI host: {}", addr.addr, e);
      Err(e)
    },
  }
}
