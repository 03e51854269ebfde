use core::ops::{Deref, DerefMut};

use std_alloc::string::String;
use std_alloc::vec::Vec;

use crate::Representation;

/// The kind of data stored in an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
  /// No value
  Null,
  /// `bool`
  Boolean,
  /// `i32`
  Integer32,
  /// `i64`
  Integer64,
  /// `f64`
  Double,
  /// UTF-8 text
  Text,
  /// Opaque bytes, see [`ByteString`]
  ByteString,
  /// A nested [`Representation`]
  Representation,
  /// A sequence nested 1, 2 or 3 deep, see [`Seq`]
  Sequence,
}

/// An opaque sequence of bytes.
///
/// This is a distinct type from [`Vec<u8>`] so that a byte string is never
/// confused with a sequence of numbers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteString(pub Vec<u8>);

impl ByteString {
  /// Create an empty byte string
  pub fn new() -> Self {
    Self::default()
  }

  /// Unwrap the bytes
  pub fn into_inner(self) -> Vec<u8> {
    self.0
  }
}

impl Deref for ByteString {
  type Target = Vec<u8>;

  fn deref(&self) -> &Vec<u8> {
    &self.0
  }
}

impl DerefMut for ByteString {
  fn deref_mut(&mut self) -> &mut Vec<u8> {
    &mut self.0
  }
}

impl AsRef<[u8]> for ByteString {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl From<Vec<u8>> for ByteString {
  fn from(bytes: Vec<u8>) -> Self {
    Self(bytes)
  }
}

impl<'a> From<&'a [u8]> for ByteString {
  fn from(bytes: &'a [u8]) -> Self {
    Self(bytes.into())
  }
}

impl<const N: usize> From<[u8; N]> for ByteString {
  fn from(bytes: [u8; N]) -> Self {
    Self(bytes.into())
  }
}

/// A sequence of `T`, nested 1, 2 or 3 deep.
///
/// Deeper nesting is not a supported shape, so it has no variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
  /// `[T]`
  One(Vec<T>),
  /// `[[T]]`
  Two(Vec<Vec<T>>),
  /// `[[[T]]]`
  Three(Vec<Vec<Vec<T>>>),
}

impl<T> Nested<T> {
  /// How many sequences deep this is (1, 2 or 3)
  pub fn depth(&self) -> usize {
    match self {
      | Self::One(_) => 1,
      | Self::Two(_) => 2,
      | Self::Three(_) => 3,
    }
  }

  /// Number of elements in the outermost sequence
  pub fn len(&self) -> usize {
    match self {
      | Self::One(v) => v.len(),
      | Self::Two(v) => v.len(),
      | Self::Three(v) => v.len(),
    }
  }

  /// Whether the outermost sequence is empty
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// A sequence attribute, tagged by the kind of its innermost elements
#[allow(missing_docs)]
#[derive(Debug, Clone)]
pub enum Seq {
  Bool(Nested<bool>),
  Int32(Nested<i32>),
  Int64(Nested<i64>),
  Double(Nested<f64>),
  Text(Nested<String>),
  Bytes(Nested<ByteString>),
  Rep(Nested<Representation>),
}

impl Seq {
  /// The kind of the innermost elements; never [`Kind::Sequence`]
  pub fn base_kind(&self) -> Kind {
    match self {
      | Self::Bool(_) => Kind::Boolean,
      | Self::Int32(_) => Kind::Integer32,
      | Self::Int64(_) => Kind::Integer64,
      | Self::Double(_) => Kind::Double,
      | Self::Text(_) => Kind::Text,
      | Self::Bytes(_) => Kind::ByteString,
      | Self::Rep(_) => Kind::Representation,
    }
  }

  /// Nesting depth (1, 2 or 3)
  pub fn depth(&self) -> usize {
    match self {
      | Self::Bool(n) => n.depth(),
      | Self::Int32(n) => n.depth(),
      | Self::Int64(n) => n.depth(),
      | Self::Double(n) => n.depth(),
      | Self::Text(n) => n.depth(),
      | Self::Bytes(n) => n.depth(),
      | Self::Rep(n) => n.depth(),
    }
  }
}

/// The value of one attribute of a [`Representation`].
///
/// `kind`, `base_kind` and `depth` are all derived from the variant, so
/// they can never disagree with the payload:
///
/// ```
/// use toad_repr::{Kind, Value};
///
/// let v = Value::from(vec![vec![1.5f64], vec![2.5]]);
/// assert_eq!(v.kind(), Kind::Sequence);
/// assert_eq!(v.base_kind(), Kind::Double);
/// assert_eq!(v.depth(), 2);
///
/// let v = Value::from(7i64);
/// assert_eq!((v.kind(), v.base_kind(), v.depth()), (Kind::Integer64, Kind::Integer64, 0));
/// ```
#[allow(missing_docs)]
#[derive(Debug, Clone, Default)]
pub enum Value {
  #[default]
  Null,
  Bool(bool),
  Int32(i32),
  Int64(i64),
  Double(f64),
  Text(String),
  Bytes(ByteString),
  Rep(Representation),
  Seq(Seq),
}

impl Value {
  /// The kind of this value
  pub fn kind(&self) -> Kind {
    match self {
      | Self::Null => Kind::Null,
      | Self::Bool(_) => Kind::Boolean,
      | Self::Int32(_) => Kind::Integer32,
      | Self::Int64(_) => Kind::Integer64,
      | Self::Double(_) => Kind::Double,
      | Self::Text(_) => Kind::Text,
      | Self::Bytes(_) => Kind::ByteString,
      | Self::Rep(_) => Kind::Representation,
      | Self::Seq(_) => Kind::Sequence,
    }
  }

  /// For sequences, the kind of the innermost elements.
  /// For everything else, the same as [`Value::kind`].
  pub fn base_kind(&self) -> Kind {
    match self {
      | Self::Seq(s) => s.base_kind(),
      | other => other.kind(),
    }
  }

  /// 0 for scalars, otherwise the sequence nesting depth
  pub fn depth(&self) -> usize {
    match self {
      | Self::Seq(s) => s.depth(),
      | _ => 0,
    }
  }

  /// Is this [`Value::Null`]?
  pub fn is_null(&self) -> bool {
    matches!(self, Self::Null)
  }
}

impl<'a> From<&'a str> for Value {
  fn from(s: &'a str) -> Self {
    Self::Text(s.into())
  }
}
