//! This microcrate contains the [`DevAddr`] struct describing where a resource
//! lives on a constrained network, and the [`host`] function that turns one into
//! the scheme-qualified host of a CoAP URI.
//!
//! ```
//! use toad_dev_addr::{host, Adapter, DevAddr, Flags};
//!
//! let addr = DevAddr { adapter: Adapter::Default,
//!                      flags: Flags::v6(),
//!                      port: 5000,
//!                      addr: "fe80::1%eth0".into(),
//!                      ..Default::default() };
//!
//! assert_eq!(host(&addr).unwrap(), "coap://[fe80::1%25eth0]:5000");
//! ```

// docs
#![doc(html_root_url = "https://docs.rs/toad-dev-addr/0.0.0")]
#![cfg_attr(any(docsrs, feature = "docs"), feature(doc_cfg))]
// -
// style
#![allow(clippy::unused_unit)]
// -
// deny
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(missing_copy_implementations)]
#![cfg_attr(not(test), deny(unsafe_code))]
// -
// warnings
#![cfg_attr(not(test), warn(unreachable_pub))]
// -
// features
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "alloc"))]
compile_error!("toad-dev-addr stores owned address text and requires the `alloc` feature");

#[cfg(feature = "alloc")]
extern crate alloc as std_alloc;

use core::fmt::Write;

use no_std_net::{Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std_alloc::string::{String, ToString};

mod error;
mod host;

pub use error::HostError;
pub use host::*;

/// The transport a device was reached over
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Adapter {
  /// Let the network stack pick
  #[default]
  Default,
  /// UDP over IPv4 / IPv6
  Ip,
  /// Bluetooth Low Energy GATT
  GattBtle,
  /// Bluetooth classic RFCOMM
  RfcommBtedr,
  /// CoAP over TCP
  Tcp,
  /// Near-field communication
  Nfc,
}

/// Which IP family the literal address in a [`DevAddr`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum IpFamily {
  /// Not an IP address, or not known
  #[default]
  Unspecified,
  /// IPv4
  V4,
  /// IPv6
  V6,
}

/// Transport flags of a [`DevAddr`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Flags {
  /// IP family of [`DevAddr.addr`](DevAddr#structfield.addr)
  pub family: IpFamily,
  /// Whether the device is reached over (D)TLS
  pub secure: bool,
}

impl Flags {
  /// Insecure IPv4
  pub const fn v4() -> Self {
    Self { family: IpFamily::V4,
           secure: false }
  }

  /// Insecure IPv6
  pub const fn v6() -> Self {
    Self { family: IpFamily::V6,
           secure: false }
  }

  /// Copy of these flags with `secure` set
  pub const fn secure(self) -> Self {
    Self { secure: true,
           ..self }
  }
}

/// Where a resource lives on the network.
///
/// `addr` is the textual literal of the address. For link-local IPv6
/// addresses it may carry a zone id after a `%` (`fe80::1%eth0`), which
/// [`host`] escapes when building a URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DevAddr {
  /// Transport adapter the device was seen on
  pub adapter: Adapter,
  /// IP family & security flags
  pub flags: Flags,
  /// Port; `0` is a legal value and is always rendered
  pub port: u16,
  /// Literal address text
  pub addr: String,
  /// Interface index the device was seen on
  pub ifindex: u32,
  /// Adapter-specific routing data
  pub route_data: String,
  /// Adapter-specific remote endpoint id
  pub remote_id: String,
}

impl DevAddr {
  /// An address on the default adapter
  ///
  /// ```
  /// use toad_dev_addr::{host, DevAddr, Flags};
  ///
  /// let addr = DevAddr::new(Flags::v6().secure(), "::1", 5684);
  /// assert_eq!(host(&addr).unwrap(), "coaps://[::1]:5684");
  /// ```
  pub fn new<S: Into<String>>(flags: Flags, addr: S, port: u16) -> Self {
    Self { flags,
           addr: addr.into(),
           port,
           ..Default::default() }
  }

  /// Is the literal address an IPv6 address?
  pub fn is_ipv6(&self) -> bool {
    self.flags.family == IpFamily::V6
  }

  /// Parse the literal address back into a socket address.
  ///
  /// Yields `None` when the literal is not a numeric IP of the flagged family
  /// (e.g. a Bluetooth MAC). A numeric IPv6 zone becomes the scope id,
  /// otherwise `ifindex` is used.
  ///
  /// ```
  /// use no_std_net::SocketAddr;
  /// use toad_dev_addr::{DevAddr, Flags};
  ///
  /// let addr = DevAddr { flags: Flags::v4(),
  ///                      port: 5683,
  ///                      addr: "192.168.0.1".into(),
  ///                      ..Default::default() };
  ///
  /// assert_eq!(addr.socket_addr(),
  ///            Some("192.168.0.1:5683".parse::<SocketAddr>().unwrap()));
  /// ```
  pub fn socket_addr(&self) -> Option<SocketAddr> {
    match self.flags.family {
      | IpFamily::V6 => {
        let (base, zone) = match self.addr.split_once('%') {
          | Some((base, zone)) => (base, Some(zone)),
          | None => (self.addr.as_str(), None),
        };

        let ip = base.parse::<Ipv6Addr>().ok()?;
        let scope = match zone {
          | Some(zone) => zone.parse::<u32>().ok()?,
          | None => self.ifindex,
        };

        Some(SocketAddr::V6(SocketAddrV6::new(ip, self.port, 0, scope)))
      },
      | _ => {
        let ip = self.addr.parse::<Ipv4Addr>().ok()?;
        Some(SocketAddr::V4(SocketAddrV4::new(ip, self.port)))
      },
    }
  }
}

impl From<SocketAddr> for DevAddr {
  fn from(addr: SocketAddr) -> Self {
    match addr {
      | SocketAddr::V4(v4) => DevAddr { adapter: Adapter::Ip,
                                        flags: Flags::v4(),
                                        port: v4.port(),
                                        addr: v4.ip().to_string(),
                                        ..Default::default() },
      | SocketAddr::V6(v6) => {
        let mut literal = v6.ip().to_string();
        if v6.scope_id() != 0 {
          write!(literal, "%{}", v6.scope_id()).ok();
        }

        DevAddr { adapter: Adapter::Ip,
                  flags: Flags::v6(),
                  port: v6.port(),
                  addr: literal,
                  ifindex: v6.scope_id(),
                  ..Default::default() }
      },
    }
  }
}
