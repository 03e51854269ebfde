use std_alloc::string::{String, ToString};

use crate::{AttrType, Kind, Value};

/// Iterator over the attributes of a [`Representation`](crate::Representation),
/// in insertion order.
///
/// Holds a shared borrow of the representation, so it can't be
/// invalidated by attributes being added or removed.
#[derive(Debug)]
pub struct Iter<'a>(toad_map::Iter<'a, String, Value>);

impl<'a> Iter<'a> {
  pub(crate) fn new(inner: toad_map::Iter<'a, String, Value>) -> Self {
    Self(inner)
  }
}

impl<'a> Iterator for Iter<'a> {
  type Item = Entry<'a>;

  fn next(&mut self) -> Option<Entry<'a>> {
    self.0.next().map(|(name, value)| Entry { name, value })
  }
}

/// Mutable iterator over the attributes of a
/// [`Representation`](crate::Representation), in insertion order.
#[derive(Debug)]
pub struct IterMut<'a>(toad_map::IterMut<'a, String, Value>);

impl<'a> IterMut<'a> {
  pub(crate) fn new(inner: toad_map::IterMut<'a, String, Value>) -> Self {
    Self(inner)
  }
}

impl<'a> Iterator for IterMut<'a> {
  type Item = EntryMut<'a>;

  fn next(&mut self) -> Option<EntryMut<'a>> {
    self.0.next().map(|(name, value)| EntryMut { name, value })
  }
}

/// One attribute yielded by [`Iter`]
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
  name: &'a String,
  value: &'a Value,
}

impl<'a> Entry<'a> {
  /// The attribute's name
  pub fn name(&self) -> &'a str {
    self.name
  }

  /// See [`Value::kind`]
  pub fn kind(&self) -> Kind {
    self.value.kind()
  }

  /// See [`Value::base_kind`]
  pub fn base_kind(&self) -> Kind {
    self.value.base_kind()
  }

  /// See [`Value::depth`]
  pub fn depth(&self) -> usize {
    self.value.depth()
  }

  /// Is the value null?
  pub fn is_null(&self) -> bool {
    self.value.is_null()
  }

  /// The raw value
  pub fn value(&self) -> &'a Value {
    self.value
  }

  /// Borrow the value as a `T`, if it is exactly a `T`
  pub fn get<T: AttrType>(&self) -> Option<&'a T> {
    T::from_ref(self.value)
  }

  /// Copy the value out as a `T`, if it is exactly a `T`
  pub fn get_value<T: AttrType + Clone>(&self) -> Option<T> {
    self.get::<T>().cloned()
  }

  /// See [`Representation::get_value_to_string`](crate::Representation::get_value_to_string)
  pub fn get_value_to_string(&self) -> String {
    self.value.to_string()
  }
}

/// One attribute yielded by [`IterMut`].
///
/// The value can be replaced, possibly with one of a different kind.
#[derive(Debug)]
pub struct EntryMut<'a> {
  name: &'a String,
  value: &'a mut Value,
}

impl<'a> EntryMut<'a> {
  /// The attribute's name
  pub fn name(&self) -> &'a str {
    self.name
  }

  /// See [`Value::kind`]
  pub fn kind(&self) -> Kind {
    self.value.kind()
  }

  /// See [`Value::base_kind`]
  pub fn base_kind(&self) -> Kind {
    self.value.base_kind()
  }

  /// See [`Value::depth`]
  pub fn depth(&self) -> usize {
    self.value.depth()
  }

  /// Is the value null?
  pub fn is_null(&self) -> bool {
    self.value.is_null()
  }

  /// The raw value
  pub fn value(&self) -> &Value {
    &*self.value
  }

  /// Borrow the value as a `T`, if it is exactly a `T`
  pub fn get<T: AttrType>(&self) -> Option<&T> {
    T::from_ref(&*self.value)
  }

  /// Copy the value out as a `T`, if it is exactly a `T`
  pub fn get_value<T: AttrType + Clone>(&self) -> Option<T> {
    self.get::<T>().cloned()
  }

  /// Mutably borrow the value as a `T`, if it is exactly a `T`
  pub fn get_mut<T: AttrType>(&mut self) -> Option<&mut T> {
    T::from_mut(self.value)
  }

  /// Replace the value
  pub fn set<V: Into<Value>>(&mut self, value: V) {
    *self.value = value.into();
  }

  /// Replace the value with null
  pub fn set_null(&mut self) {
    self.set(Value::Null)
  }

  /// See [`Representation::get_value_to_string`](crate::Representation::get_value_to_string)
  pub fn get_value_to_string(&self) -> String {
    self.value.to_string()
  }
}

#[cfg(test)]
mod tests {
  use std_alloc::vec::Vec;

  use crate::{ByteString, Kind, Representation};

  #[test]
  fn entries_describe_values() {
    let mut rep = Representation::new();
    rep.set_value("n", 3i64);
    rep.set_value("m", vec![vec![ByteString::from([0xau8])]]);
    rep.set_null("z");

    let shapes = rep.iter()
                    .map(|e| (e.name(), e.kind(), e.base_kind(), e.depth()))
                    .collect::<Vec<_>>();
    assert_eq!(shapes,
               vec![("n", Kind::Integer64, Kind::Integer64, 0),
                    ("m", Kind::Sequence, Kind::ByteString, 2),
                    ("z", Kind::Null, Kind::Null, 0)]);

    let m = rep.iter().nth(1).unwrap();
    assert_eq!(m.get_value_to_string(), "[[\\xa ] ]");
    assert_eq!(m.get::<Vec<ByteString>>(), None);
    assert!(m.get::<Vec<Vec<ByteString>>>().is_some());
    assert!(rep.iter().last().unwrap().is_null());
  }

  #[test]
  fn entries_can_be_replaced() {
    let mut rep = Representation::new();
    rep.set_value("a", 1i32);
    rep.set_value("b", 2i32);

    for mut e in rep.iter_mut() {
      match e.name() {
        | "a" => *e.get_mut::<i32>().unwrap() += 10,
        | _ => e.set("bee"),
      }
    }

    assert_eq!(rep.get_value::<i32>("a"), Some(11));
    assert_eq!(rep.get_value::<String>("b"), Some("bee".into()));
    assert_eq!(rep.iter().map(|e| e.name()).collect::<Vec<_>>(),
               vec!["a", "b"]);
  }

  #[test]
  fn into_iter() {
    let mut rep = Representation::new();
    rep.set_value("x", true);

    let mut seen = 0;
    for e in &rep {
      assert_eq!(e.get_value::<bool>(), Some(true));
      seen += 1;
    }
    assert_eq!(seen, 1);

    for mut e in &mut rep {
      e.set_null();
    }
    assert!(rep.is_null("x"));
  }

  #[test]
  fn empty() {
    assert_eq!(Representation::new().iter().count(), 0);
  }
}
