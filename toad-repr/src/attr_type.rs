use std_alloc::string::String;
use std_alloc::vec::Vec;

use crate::{ByteString, Kind, Nested, Representation, Seq, Value};

/// Rust types that can be stored in and read back out of a [`Value`].
///
/// Implemented for `bool`, `i32`, `i64`, `f64`, [`String`], [`ByteString`],
/// [`Representation`], and `Vec`s of each of those nested 1, 2 or 3 deep.
///
/// Reads are exact: a value is only readable as the type it was stored as.
/// There is no numeric widening (an `i32` is not readable as `i64` or `f64`)
/// and no coercion between kinds.
///
/// ```
/// use toad_repr::{AttrType, Kind, Value};
///
/// let v = Value::from(vec![vec![1i32, 2], vec![3]]);
///
/// assert_eq!(<Vec<Vec<i32>>>::from_ref(&v), Some(&vec![vec![1, 2], vec![3]]));
/// assert_eq!(<Vec<Vec<i64>>>::from_ref(&v), None);
/// assert_eq!(<Vec<i32>>::from_ref(&v), None);
///
/// assert_eq!(<Vec<Vec<i32>> as AttrType>::DEPTH, 2);
/// assert_eq!(<Vec<Vec<i32>> as AttrType>::BASE_KIND, Kind::Integer32);
/// ```
pub trait AttrType: Sized {
  /// [`Value::kind`] of values of this type
  const KIND: Kind;

  /// [`Value::base_kind`] of values of this type
  const BASE_KIND: Kind;

  /// [`Value::depth`] of values of this type
  const DEPTH: usize;

  /// Wrap in a [`Value`]
  fn into_value(self) -> Value;

  /// Borrow the payload of `value` if it has exactly this type's shape
  fn from_ref(value: &Value) -> Option<&Self>;

  /// Mutably borrow the payload of `value` if it has exactly this type's shape
  fn from_mut(value: &mut Value) -> Option<&mut Self>;

  /// Unwrap the payload of `value` if it has exactly this type's shape,
  /// giving `value` back otherwise.
  fn from_value(value: Value) -> Result<Self, Value>;

  /// Does `value` have exactly this type's shape?
  fn matches(value: &Value) -> bool {
    Self::from_ref(value).is_some()
  }
}

macro_rules! attr_type {
  ($ty:ty, kind = $kind:ident, base = $base:ident, depth = $depth:literal, $v:ident => $pat:pat, $wrap:expr) => {
    impl AttrType for $ty {
      const KIND: Kind = Kind::$kind;
      const BASE_KIND: Kind = Kind::$base;
      const DEPTH: usize = $depth;

      fn into_value(self) -> Value {
        let $v = self;
        $wrap
      }

      fn from_ref(value: &Value) -> Option<&Self> {
        match value {
          | $pat => Some($v),
          | _ => None,
        }
      }

      fn from_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
          | $pat => Some($v),
          | _ => None,
        }
      }

      fn from_value(value: Value) -> Result<Self, Value> {
        match value {
          | $pat => Ok($v),
          | other => Err(other),
        }
      }
    }

    impl From<$ty> for Value {
      fn from(v: $ty) -> Value {
        v.into_value()
      }
    }
  };
}

macro_rules! attr_types {
  ($ty:ty => $kind:ident, $variant:ident) => {
    attr_type!($ty,
               kind = $kind,
               base = $kind,
               depth = 0,
               v => Value::$variant(v),
               Value::$variant(v));
    attr_types!(@seq Vec<$ty> => $kind, $variant, One, 1);
    attr_types!(@seq Vec<Vec<$ty>> => $kind, $variant, Two, 2);
    attr_types!(@seq Vec<Vec<Vec<$ty>>> => $kind, $variant, Three, 3);
  };
  (@seq $ty:ty => $kind:ident, $variant:ident, $nest:ident, $depth:literal) => {
    attr_type!($ty,
               kind = Sequence,
               base = $kind,
               depth = $depth,
               v => Value::Seq(Seq::$variant(Nested::$nest(v))),
               Value::Seq(Seq::$variant(Nested::$nest(v))));
  };
}

attr_types!(bool => Boolean, Bool);
attr_types!(i32 => Integer32, Int32);
attr_types!(i64 => Integer64, Int64);
attr_types!(f64 => Double, Double);
attr_types!(String => Text, Text);
attr_types!(ByteString => ByteString, Bytes);
attr_types!(Representation => Representation, Rep);

impl From<Seq> for Value {
  fn from(seq: Seq) -> Value {
    Value::Seq(seq)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_widening() {
    let v = Value::from(5i32);
    assert_eq!(i32::from_ref(&v), Some(&5));
    assert_eq!(i64::from_ref(&v), None);
    assert_eq!(f64::from_ref(&v), None);
    assert_eq!(bool::from_ref(&v), None);
    assert_eq!(String::from_ref(&v), None);

    let v = Value::from(5i64);
    assert_eq!(i32::from_ref(&v), None);
    assert_eq!(i64::from_ref(&v), Some(&5));
  }

  #[test]
  fn depth_must_match() {
    let v = Value::from(vec![vec![true]]);
    assert!(<Vec<Vec<bool>>>::matches(&v));
    assert!(!<Vec<bool>>::matches(&v));
    assert!(!<Vec<Vec<Vec<bool>>>>::matches(&v));
    assert!(!bool::matches(&v));
  }

  #[test]
  fn from_mut_edits_in_place() {
    let mut v = Value::from(vec![String::from("a")]);
    <Vec<String>>::from_mut(&mut v).unwrap().push("b".into());
    assert_eq!(<Vec<String>>::from_ref(&v),
               Some(&vec!["a".to_string(), "b".to_string()]));
  }

  #[test]
  fn from_value_gives_back_mismatch() {
    let v = Value::from(ByteString::from([1u8, 2]));
    let v = i32::from_value(v).unwrap_err();
    assert_eq!(ByteString::from_value(v).unwrap(), ByteString::from([1u8, 2]));
  }

  #[test]
  fn consts() {
    assert_eq!(<Representation as AttrType>::KIND, Kind::Representation);
    assert_eq!(<Vec<Vec<Vec<Representation>>> as AttrType>::KIND,
               Kind::Sequence);
    assert_eq!(<Vec<Vec<Vec<Representation>>> as AttrType>::BASE_KIND,
               Kind::Representation);
    assert_eq!(<Vec<Vec<Vec<Representation>>> as AttrType>::DEPTH, 3);
    assert_eq!(<ByteString as AttrType>::DEPTH, 0);
  }
}
