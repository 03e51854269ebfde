//! [`serde::Serialize`] support, enabled by the `serde` feature.
//!
//! Representations serialize as a map of their attributes in insertion
//! order; the uri, device address and other metadata are not included.
//! Null attributes serialize as unit, byte strings as bytes.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::{ByteString, Nested, Representation, Seq, Value};

impl Serialize for ByteString {
  fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_bytes(&self.0)
  }
}

impl<T: Serialize> Serialize for Nested<T> {
  fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    match self {
      | Nested::One(v) => v.serialize(s),
      | Nested::Two(v) => v.serialize(s),
      | Nested::Three(v) => v.serialize(s),
    }
  }
}

impl Serialize for Seq {
  fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    match self {
      | Seq::Bool(n) => n.serialize(s),
      | Seq::Int32(n) => n.serialize(s),
      | Seq::Int64(n) => n.serialize(s),
      | Seq::Double(n) => n.serialize(s),
      | Seq::Text(n) => n.serialize(s),
      | Seq::Bytes(n) => n.serialize(s),
      | Seq::Rep(n) => n.serialize(s),
    }
  }
}

impl Serialize for Value {
  fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    match self {
      | Value::Null => s.serialize_unit(),
      | Value::Bool(b) => s.serialize_bool(*b),
      | Value::Int32(n) => s.serialize_i32(*n),
      | Value::Int64(n) => s.serialize_i64(*n),
      | Value::Double(n) => s.serialize_f64(*n),
      | Value::Text(t) => s.serialize_str(t),
      | Value::Bytes(b) => b.serialize(s),
      | Value::Rep(r) => r.serialize(s),
      | Value::Seq(seq) => seq.serialize(s),
    }
  }
}

impl Serialize for Representation {
  fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    let mut map = s.serialize_map(Some(self.len()))?;
    for e in self.iter() {
      map.serialize_entry(e.name(), e.value())?;
    }
    map.end()
  }
}

#[cfg(test)]
mod tests {
  use crate::{ByteString, Representation};

  #[test]
  fn json() {
    let mut inner = Representation::new();
    inner.set_value("on", true);

    let mut rep = Representation::new();
    rep.set_uri("/ignored");
    rep.set_value("z", 1i32);
    rep.set_value("a", vec![vec![1.5f64], vec![]]);
    rep.set_null("n");
    rep.set_value("bytes", ByteString::from([1u8, 255]));
    rep.set_value("child", inner);
    rep.set_value("text", "hi");

    assert_eq!(serde_json::to_string(&rep).unwrap(),
               r#"{"z":1,"a":[[1.5],[]],"n":null,"bytes":[1,255],"child":{"on":true},"text":"hi"}"#);
  }

  #[test]
  fn empty() {
    assert_eq!(serde_json::to_string(&Representation::new()).unwrap(), "{}");
  }
}
