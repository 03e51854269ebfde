use std_alloc::string::String;

use crate::{AttrType, Representation, Value};

/// A handle on one named attribute of a [`Representation`],
/// obtained with [`Representation::attr`].
///
/// Reads through a handle are lenient: asking for a type the attribute
/// does not hold (or asking for an attribute that does not exist) gives
/// that type's [`Default`] instead of failing.
///
/// ```
/// use toad_repr::Representation;
///
/// let mut rep = Representation::new();
/// rep.attr("temp").set(21.5f64);
///
/// assert_eq!(rep.attr("temp").get::<f64>(), 21.5);
/// assert_eq!(rep.attr("temp").get::<i32>(), 0);
/// assert_eq!(rep.attr("missing").get::<String>(), "");
/// ```
#[derive(Debug)]
pub struct Attr<'a> {
  rep: &'a mut Representation,
  key: &'a str,
}

impl<'a> Attr<'a> {
  pub(crate) fn new(rep: &'a mut Representation, key: &'a str) -> Self {
    Self { rep, key }
  }

  /// The attribute's name
  pub fn name(&self) -> &'a str {
    self.key
  }

  /// Does the attribute exist?
  pub fn exists(&self) -> bool {
    self.rep.contains(self.key)
  }

  /// Assign to the attribute, creating it if needed.
  ///
  /// Same as [`Representation::set_value`].
  pub fn set<V: Into<Value>>(self, value: V) -> Self {
    self.rep.set_value(self.key, value);
    self
  }

  /// Assign null to the attribute, creating it if needed
  pub fn set_null(self) -> Self {
    self.rep.set_null(self.key);
    self
  }

  /// Read-only view of this handle
  pub fn as_attr_ref(&self) -> AttrRef<'_> {
    AttrRef::new(&*self.rep, self.key)
  }

  /// See [`AttrRef::get`]
  pub fn get<T: AttrType + Clone + Default>(&self) -> T {
    self.as_attr_ref().get()
  }

  /// Does the attribute exist and hold null?
  pub fn is_null(&self) -> bool {
    self.as_attr_ref().is_null()
  }

  /// Same as [`Representation::get_value_to_string`]
  pub fn get_value_to_string(&self) -> String {
    self.as_attr_ref().get_value_to_string()
  }
}

/// A read-only handle on one named attribute of a [`Representation`],
/// obtained with [`Representation::attr_ref`].
///
/// Reads are lenient in the same way as through [`Attr`].
#[derive(Debug, Clone, Copy)]
pub struct AttrRef<'a> {
  rep: &'a Representation,
  key: &'a str,
}

impl<'a> AttrRef<'a> {
  pub(crate) fn new(rep: &'a Representation, key: &'a str) -> Self {
    Self { rep, key }
  }

  /// The attribute's name
  pub fn name(&self) -> &'a str {
    self.key
  }

  /// Does the attribute exist?
  pub fn exists(&self) -> bool {
    self.rep.contains(self.key)
  }

  /// Read the attribute as a `T`, or `T::default()` if it does not exist
  /// or does not hold a `T`.
  pub fn get<T: AttrType + Clone + Default>(&self) -> T {
    self.rep.get_value::<T>(self.key).unwrap_or_default()
  }

  /// Does the attribute exist and hold null?
  pub fn is_null(&self) -> bool {
    self.rep.is_null(self.key)
  }

  /// Same as [`Representation::get_value_to_string`]
  pub fn get_value_to_string(&self) -> String {
    self.rep.get_value_to_string(self.key)
  }
}

#[cfg(test)]
mod tests {
  use crate::{ByteString, Representation};

  #[test]
  fn set_then_get() {
    let mut rep = Representation::new();
    rep.attr("a").set(1i32).set(2i32);
    rep.attr("b").set(vec![true, false]);

    assert_eq!(rep.attr("a").get::<i32>(), 2);
    assert_eq!(rep.attr("b").get::<Vec<bool>>(), vec![true, false]);
    assert_eq!(rep.len(), 2);
  }

  #[test]
  fn lenient_reads() {
    let mut rep = Representation::new();
    rep.attr("s").set("text");

    assert_eq!(rep.attr("s").get::<bool>(), false);
    assert_eq!(rep.attr("s").get::<Vec<Vec<i64>>>(), Vec::<Vec<i64>>::new());
    assert_eq!(rep.attr("nope").get::<ByteString>(), ByteString::new());
    assert!(!rep.attr("nope").exists());
    assert!(!rep.attr("nope").is_null());

    // reads never create the attribute
    assert_eq!(rep.len(), 1);
  }

  #[test]
  fn null() {
    let mut rep = Representation::new();
    let a = rep.attr("n").set(5i64).set_null();
    assert!(a.is_null());
    assert!(a.exists());
    assert_eq!(a.name(), "n");
    assert_eq!(a.get_value_to_string(), "(null)");
  }

  #[test]
  fn read_through_shared_ref() {
    fn read(rep: &Representation, key: &str) -> (i32, bool, bool, String) {
      let a = rep.attr_ref(key);
      (a.get::<i32>(), a.exists(), a.is_null(), a.get_value_to_string())
    }

    let mut rep = Representation::new();
    rep.set_value("x", 4i32);
    rep.set_value("s", "four");
    rep.set_null("n");

    assert_eq!(read(&rep, "x"), (4, true, false, "4".into()));
    assert_eq!(read(&rep, "s"), (0, true, false, "four".into()));
    assert_eq!(read(&rep, "n"), (0, true, true, "(null)".into()));
    assert_eq!(read(&rep, "missing"), (0, false, false, String::new()));
    assert_eq!(rep.attr_ref("s").get::<String>(), "four");
    assert_eq!(rep.attr_ref("s").name(), "s");
  }

  #[test]
  fn renders_like_representation() {
    let mut rep = Representation::new();
    rep.set_value("bytes", ByteString::from([0x1u8, 0xff]));
    rep.set_value("nums", vec![vec![1i32], vec![2, 3]]);

    for key in ["bytes", "nums", "missing"] {
      let expected = rep.get_value_to_string(key);
      assert_eq!(rep.attr_ref(key).get_value_to_string(), expected);
      assert_eq!(rep.attr(key).get_value_to_string(), expected);
    }
  }
}
