use std_alloc::string::{String, ToString};
use std_alloc::vec::Vec;

use toad_dev_addr::{DevAddr, HostError};
use toad_len::Len;
use toad_map::{InsertError, Map};

use crate::iter::{Iter, IterMut};
use crate::{Attr, AttrRef, AttrType, Value};

/// A resource representation: an ordered set of named, dynamically typed
/// attributes, plus the URI and network address of the resource.
///
/// Attributes keep the order they were first inserted in. Setting an
/// attribute that already exists replaces its value (and possibly its kind)
/// without moving it.
///
/// Cloning is a deep copy; two representations never share attribute state.
///
/// Representations deliberately do not implement [`PartialEq`]. Compare the
/// fields you care about instead.
///
/// ```
/// use toad_repr::Representation;
///
/// let mut rep = Representation::new();
/// rep.set_value("power", true);
/// rep.set_value("brightness", 80i32);
/// rep.set_value("power", "on");
///
/// assert_eq!(rep.len(), 2);
/// assert_eq!(rep.get_value::<String>("power"), Some("on".to_string()));
/// assert_eq!(rep.get_value::<bool>("power"), None);
///
/// let names = rep.iter().map(|e| e.name()).collect::<Vec<_>>();
/// assert_eq!(names, vec!["power", "brightness"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Representation {
  attrs: Vec<(String, Value)>,
  uri: String,
  dev_addr: Option<DevAddr>,
  host: String,
  resource_types: Vec<String>,
  interfaces: Vec<String>,
  children: Vec<Representation>,
}

impl Representation {
  /// Create an empty representation
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the attribute `key` to `value`.
  ///
  /// If `key` exists its value is replaced in place, regardless of the old
  /// or new kind. Never fails.
  ///
  /// Keys should be non-empty. An empty key is still stored (and can be
  /// read back like any other), but a warning is logged.
  pub fn set_value<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) {
    let key = key.into();
    let value = value.into();
    if key.is_empty() {
      log::warn!("storing {:?} under an empty attribute name", value.kind());
    }

    log::trace!("set {:?} to {:?}", key, value.kind());
    match Map::insert(&mut self.attrs, key, value) {
      | Err(InsertError::Exists(old)) => log::trace!("replaced previous {:?}", old.kind()),
      // `Vec` is never full
      | Ok(()) | Err(InsertError::CapacityExhausted) => (),
    }
  }

  /// Set the attribute `key` to null, dropping any previous payload
  pub fn set_null<K: Into<String>>(&mut self, key: K) {
    self.set_value(key, Value::Null)
  }

  /// Does `key` exist and hold null?
  pub fn is_null(&self, key: &str) -> bool {
    self.value(key).map(Value::is_null).unwrap_or(false)
  }

  /// Does `key` exist?
  pub fn contains(&self, key: &str) -> bool {
    self.value(key).is_some()
  }

  /// Number of attributes
  pub fn len(&self) -> usize {
    Len::len(&self.attrs)
  }

  /// Are there no attributes?
  pub fn is_empty(&self) -> bool {
    Len::is_empty(&self.attrs)
  }

  /// Are there no attributes, uri, resource types, interfaces or children?
  pub fn is_empty_data(&self) -> bool {
    self.is_empty()
    && self.uri.is_empty()
    && self.resource_types.is_empty()
    && self.interfaces.is_empty()
    && self.children.is_empty()
  }

  /// Remove the attribute `key`, keeping the order of the rest.
  ///
  /// Returns whether there was anything to remove.
  pub fn erase(&mut self, key: &str) -> bool {
    match Map::iter(&self.attrs).position(|(k, _)| k.as_str() == key) {
      | Some(ix) => {
        let (_, old) = Vec::remove(&mut self.attrs, ix);
        log::trace!("erased {:?} ({:?})", key, old.kind());
        true
      },
      | None => false,
    }
  }

  /// Borrow the raw value of `key`
  pub fn value(&self, key: &str) -> Option<&Value> {
    Map::iter(&self.attrs).find(|(k, _)| k.as_str() == key)
                          .map(|(_, v)| v)
  }

  /// Mutably borrow the raw value of `key`
  pub fn value_mut(&mut self, key: &str) -> Option<&mut Value> {
    Map::iter_mut(&mut self.attrs).find(|(k, _)| k.as_str() == key)
                                  .map(|(_, v)| v)
  }

  /// Borrow `key` as a `T`.
  ///
  /// `None` when `key` does not exist or does not hold exactly a `T`
  /// (see [`AttrType`]).
  pub fn get<T: AttrType>(&self, key: &str) -> Option<&T> {
    self.value(key).and_then(T::from_ref)
  }

  /// Mutably borrow `key` as a `T`.
  ///
  /// `None` when `key` does not exist or does not hold exactly a `T`.
  pub fn get_mut<T: AttrType>(&mut self, key: &str) -> Option<&mut T> {
    self.value_mut(key).and_then(T::from_mut)
  }

  /// Copy `key` out as a `T`.
  ///
  /// `None` when `key` does not exist or does not hold exactly a `T`.
  pub fn get_value<T: AttrType + Clone>(&self, key: &str) -> Option<T> {
    self.get::<T>(key).cloned()
  }

  /// Copy `key` into `out` if it holds exactly a `T`, returning whether it did.
  ///
  /// `out` is left untouched on failure.
  ///
  /// ```
  /// use toad_repr::Representation;
  ///
  /// let mut rep = Representation::new();
  /// rep.set_value("n", 5i32);
  ///
  /// let mut out = 1.5f64;
  /// assert!(!rep.get_value_into("n", &mut out));
  /// assert_eq!(out, 1.5);
  ///
  /// let mut out = 0i32;
  /// assert!(rep.get_value_into("n", &mut out));
  /// assert_eq!(out, 5);
  /// ```
  pub fn get_value_into<T: AttrType + Clone>(&self, key: &str, out: &mut T) -> bool {
    match self.get::<T>(key) {
      | Some(t) => {
        out.clone_from(t);
        true
      },
      | None => false,
    }
  }

  /// Render `key` for diagnostics (see [`render`](crate::render)).
  ///
  /// Empty if `key` does not exist.
  pub fn get_value_to_string(&self, key: &str) -> String {
    self.value(key).map(Value::to_string).unwrap_or_default()
  }

  /// A handle on the attribute `key` that can be read or assigned through
  pub fn attr<'a>(&'a mut self, key: &'a str) -> Attr<'a> {
    Attr::new(self, key)
  }

  /// A read-only handle on the attribute `key`, see [`AttrRef`]
  ///
  /// ```
  /// use toad_repr::Representation;
  ///
  /// fn level(rep: &Representation) -> i32 {
  ///   rep.attr_ref("level").get::<i32>()
  /// }
  ///
  /// let mut rep = Representation::new();
  /// assert_eq!(level(&rep), 0);
  ///
  /// rep.set_value("level", 7i32);
  /// assert_eq!(level(&rep), 7);
  /// ```
  pub fn attr_ref<'a>(&'a self, key: &'a str) -> AttrRef<'a> {
    AttrRef::new(self, key)
  }

  /// Iterate over the attributes in insertion order.
  ///
  /// The iterator borrows the representation, so attributes can't be added
  /// or removed until it is dropped.
  pub fn iter(&self) -> Iter<'_> {
    Iter::new(Map::iter(&self.attrs))
  }

  /// Iterate mutably over the attributes in insertion order.
  ///
  /// Values may be replaced (even with a different kind) through the
  /// yielded entries; attributes can't be added or removed.
  pub fn iter_mut(&mut self) -> IterMut<'_> {
    IterMut::new(Map::iter_mut(&mut self.attrs))
  }

  /// The URI of the resource this represents
  pub fn uri(&self) -> &str {
    &self.uri
  }

  /// Set the URI of the resource this represents
  pub fn set_uri<S: Into<String>>(&mut self, uri: S) {
    self.uri = uri.into();
  }

  /// The address of the device this representation came from
  pub fn dev_addr(&self) -> Option<&DevAddr> {
    self.dev_addr.as_ref()
  }

  /// Set the address of the device this representation came from.
  ///
  /// The URI host is computed immediately; if the address can't be
  /// formatted (see [`toad_dev_addr::host`]) this fails and the previous
  /// address & host are kept.
  ///
  /// ```
  /// use toad_dev_addr::{DevAddr, Flags, HostError};
  /// use toad_repr::Representation;
  ///
  /// let mut rep = Representation::new();
  /// rep.set_dev_addr(DevAddr { flags: Flags::v6(),
  ///                            port: 5000,
  ///                            addr: "fe80::1%eth0".into(),
  ///                            ..Default::default() })
  ///    .unwrap();
  /// assert_eq!(rep.host(), "coap://[fe80::1%25eth0]:5000");
  ///
  /// let bad = DevAddr { flags: Flags::v6(),
  ///                     port: 5000,
  ///                     addr: "fe80::1%%".into(),
  ///                     ..Default::default() };
  /// assert_eq!(rep.set_dev_addr(bad), Err(HostError::MultipleZoneSeparators));
  /// assert_eq!(rep.host(), "coap://[fe80::1%25eth0]:5000");
  /// ```
  pub fn set_dev_addr(&mut self, addr: DevAddr) -> Result<(), HostError> {
    match toad_dev_addr::host(&addr) {
      | Ok(host) => {
        self.host = host;
        self.dev_addr = Some(addr);
        Ok(())
      },
      | Err(e) => {
        log::warn!("rejected device address {:?}: {}", addr.addr, e);
        Err(e)
      },
    }
  }

  /// The scheme-qualified host of the device this came from
  /// (e.g. `coap://[fe80::1%25eth0]:5000`).
  ///
  /// Empty if no device address was set.
  pub fn host(&self) -> &str {
    &self.host
  }

  /// Resource types (`rt`) of the resource
  pub fn resource_types(&self) -> &[String] {
    &self.resource_types
  }

  /// Replace the resource types of the resource
  pub fn set_resource_types(&mut self, types: Vec<String>) {
    self.resource_types = types;
  }

  /// Add a resource type to the resource
  pub fn add_resource_type<S: ToString + ?Sized>(&mut self, ty: &S) {
    self.resource_types.push(ty.to_string());
  }

  /// Interfaces (`if`) of the resource
  pub fn resource_interfaces(&self) -> &[String] {
    &self.interfaces
  }

  /// Replace the interfaces of the resource
  pub fn set_resource_interfaces(&mut self, interfaces: Vec<String>) {
    self.interfaces = interfaces;
  }

  /// Add an interface to the resource
  pub fn add_resource_interface<S: ToString + ?Sized>(&mut self, interface: &S) {
    self.interfaces.push(interface.to_string());
  }

  /// Representations of child resources (e.g. in a collection)
  pub fn children(&self) -> &[Representation] {
    &self.children
  }

  /// Replace the child representations
  pub fn set_children(&mut self, children: Vec<Representation>) {
    self.children = children;
  }

  /// Add a child representation
  pub fn add_child(&mut self, child: Representation) {
    self.children.push(child);
  }

  /// Remove all child representations
  pub fn clear_children(&mut self) {
    self.children.clear();
  }
}

impl<'a> IntoIterator for &'a Representation {
  type Item = crate::iter::Entry<'a>;
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Iter<'a> {
    self.iter()
  }
}

impl<'a> IntoIterator for &'a mut Representation {
  type Item = crate::iter::EntryMut<'a>;
  type IntoIter = IterMut<'a>;

  fn into_iter(self) -> IterMut<'a> {
    self.iter_mut()
  }
}

#[cfg(test)]
mod tests {
  use toad_dev_addr::Flags;

  use super::*;
  use crate::{ByteString, Kind};

  #[test]
  fn empty() {
    let rep = Representation::new();
    assert!(rep.is_empty());
    assert!(rep.is_empty_data());
    assert_eq!(rep.len(), 0);
    assert_eq!(rep.uri(), "");
    assert_eq!(rep.host(), "");
    assert!(rep.dev_addr().is_none());
  }

  #[test]
  fn overwrite_keeps_position() {
    let mut rep = Representation::new();
    rep.set_value("a", 1i32);
    rep.set_value("b", 2i32);
    rep.set_value("c", 3i32);
    rep.set_value("b", "two");

    assert_eq!(rep.len(), 3);
    assert_eq!(rep.iter().map(|e| e.name()).collect::<Vec<_>>(),
               vec!["a", "b", "c"]);
    assert_eq!(rep.value("b").unwrap().kind(), Kind::Text);
    assert_eq!(rep.get_value::<i32>("b"), None);
    assert_eq!(rep.get_value::<String>("b"), Some("two".into()));
  }

  #[test]
  fn not_sorted() {
    let mut rep = Representation::new();
    for k in ["zeta", "alpha", "mu"] {
      rep.set_value(k, true);
    }

    assert_eq!(rep.iter().map(|e| e.name()).collect::<Vec<_>>(),
               vec!["zeta", "alpha", "mu"]);
  }

  #[test]
  fn null() {
    let mut rep = Representation::new();
    rep.set_value("x", 1.5f64);
    rep.set_null("x");

    assert!(rep.is_null("x"));
    assert!(!rep.is_null("missing"));
    assert!(rep.contains("x"));
    assert_eq!(rep.get_value::<f64>("x"), None);
    assert_eq!(rep.get_value_to_string("x"), "(null)");
  }

  #[test]
  fn mismatched_read_leaves_out_untouched() {
    let mut rep = Representation::new();
    rep.set_value("s", "hi");

    let mut out = vec![1i32];
    assert!(!rep.get_value_into("s", &mut out));
    assert!(!rep.get_value_into("missing", &mut out));
    assert_eq!(out, vec![1]);

    let mut out = String::from("before");
    assert!(rep.get_value_into("s", &mut out));
    assert_eq!(out, "hi");
  }

  #[test]
  fn erase() {
    let mut rep = Representation::new();
    rep.set_value("a", 1i32);
    rep.set_value("b", 2i32);
    rep.set_value("c", 3i32);

    assert!(rep.erase("b"));
    assert!(!rep.erase("b"));
    assert!(!rep.contains("b"));
    assert_eq!(rep.iter().map(|e| e.name()).collect::<Vec<_>>(),
               vec!["a", "c"]);
  }

  #[test]
  fn get_mut() {
    let mut rep = Representation::new();
    rep.set_value("bytes", ByteString::from([1u8]));
    rep.get_mut::<ByteString>("bytes").unwrap().push(2);
    assert!(rep.get_mut::<String>("bytes").is_none());

    assert_eq!(rep.get_value_to_string("bytes"), "\\x1\\x2");
  }

  #[test]
  fn empty_key_is_stored() {
    let mut rep = Representation::new();
    rep.set_value("", 1i32);
    rep.set_value("", 2i32);

    assert_eq!(rep.len(), 1);
    assert!(rep.contains(""));
    assert_eq!(rep.get_value::<i32>(""), Some(2));
  }

  #[test]
  fn to_string_of_missing_key_is_empty() {
    assert_eq!(Representation::new().get_value_to_string("nope"), "");
  }

  #[test]
  fn dev_addr() {
    let mut rep = Representation::new();
    let addr = DevAddr { flags: Flags::v6(),
                         port: 5000,
                         addr: "fe80::1%eth0".into(),
                         ..Default::default() };

    rep.set_dev_addr(addr.clone()).unwrap();
    assert_eq!(rep.host(), "coap://[fe80::1%25eth0]:5000");
    assert_eq!(rep.dev_addr(), Some(&addr));
  }

  #[test]
  fn bad_dev_addr_is_atomic() {
    let mut rep = Representation::new();
    let bad = DevAddr { flags: Flags::v6(),
                        port: 5000,
                        addr: "fe80::1%%".into(),
                        ..Default::default() };

    assert_eq!(rep.set_dev_addr(bad), Err(HostError::MultipleZoneSeparators));
    assert_eq!(rep.host(), "");
    assert!(rep.dev_addr().is_none());
  }

  #[test]
  fn metadata() {
    let mut rep = Representation::new();
    rep.set_uri("/a/light");
    rep.add_resource_type("oic.r.light");
    rep.add_resource_interface("oic.if.baseline");
    rep.add_resource_interface(&String::from("oic.if.rw"));

    assert!(rep.is_empty());
    assert!(!rep.is_empty_data());
    assert_eq!(rep.uri(), "/a/light");
    assert_eq!(rep.resource_types(), ["oic.r.light".to_string()]);
    assert_eq!(rep.resource_interfaces(),
               ["oic.if.baseline".to_string(), "oic.if.rw".to_string()]);

    rep.set_resource_types(vec![]);
    assert!(rep.resource_types().is_empty());
  }

  #[test]
  fn children() {
    let mut child = Representation::new();
    child.set_uri("/a/child");

    let mut rep = Representation::new();
    rep.add_child(child);
    assert_eq!(rep.children().len(), 1);
    assert_eq!(rep.children()[0].uri(), "/a/child");
    assert!(!rep.is_empty_data());

    rep.clear_children();
    assert!(rep.children().is_empty());

    rep.set_children(vec![Representation::new(), Representation::new()]);
    assert_eq!(rep.children().len(), 2);
  }
}
