use core::fmt;

use std_alloc::string::String;

/// Reasons a [`DevAddr`](crate::DevAddr) cannot be turned into a URI host
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HostError {
  /// The IPv6 literal contained more than one zone separator (`%`)
  MultipleZoneSeparators,

  /// The IPv6 literal ended in a zone separator with no zone id after it
  EmptyZone,

  /// The zone id contained a character that is not RFC 3986 "unreserved"
  InvalidZoneChar(char),

  /// The part of the literal before the zone id is not an IPv6 address
  InvalidIpv6(String),

  /// The literal is longer than [`MAX_LITERAL_LEN`](crate::MAX_LITERAL_LEN)
  #[allow(missing_docs)]
  TooLong { capacity: usize, actual: usize },
}

impl HostError {
  /// Shorthand for [`HostError::TooLong`]
  pub fn too_long(actual: usize) -> Self {
    Self::TooLong { capacity: crate::MAX_LITERAL_LEN,
                    actual }
  }
}

impl fmt::Display for HostError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::MultipleZoneSeparators => f.write_str("address contains more than one zone separator"),
      | Self::EmptyZone => f.write_str("address has a zone separator but no zone id"),
      | Self::InvalidZoneChar(c) => write!(f, "zone id contains invalid character {:?}", c),
      | Self::InvalidIpv6(lit) => write!(f, "{:?} is not an IPv6 address", lit),
      | Self::TooLong { capacity, actual } => {
        write!(f, "address is {} bytes long, at most {} allowed", actual, capacity)
      },
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for HostError {}
