//! Diagnostic rendering of attribute values.
//!
//! | kind | rendered as |
//! |------|-------------|
//! | null | `(null)` |
//! | bool | `true` / `false` |
//! | integers | decimal |
//! | double | shortest text that parses back to the same `f64` |
//! | text | verbatim |
//! | bytes | `\x` + lowercase hex per byte, no padding (`\x1\xa\xff`) |
//! | representation | `OC::OCRepresentation`, never the contents |
//! | sequence | `[`, each element followed by one space, `]` |

use core::fmt::{self, Display, Formatter};

use std_alloc::string::String;
use std_alloc::vec::Vec;

use crate::{ByteString, Nested, Representation, Seq, Value};

/// What a null attribute renders as
pub const NULL_TOKEN: &str = "(null)";

/// What a nested representation renders as, regardless of its contents
pub const REPRESENTATION_TOKEN: &str = "OC::OCRepresentation";

trait Render {
  fn render(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

macro_rules! render_display {
  ($($ty:ty),*) => {
    $(
      impl Render for $ty {
        fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
          Display::fmt(self, f)
        }
      }
    )*
  };
}

render_display!(bool, i32, i64, f64, String, ByteString);

impl Render for Representation {
  fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(REPRESENTATION_TOKEN)
  }
}

impl<T: Render> Render for Vec<T> {
  fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for t in self {
      t.render(f)?;
      f.write_str(" ")?;
    }
    f.write_str("]")
  }
}

impl<T: Render> Render for Nested<T> {
  fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      | Nested::One(v) => v.render(f),
      | Nested::Two(v) => v.render(f),
      | Nested::Three(v) => v.render(f),
    }
  }
}

impl Display for ByteString {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.iter().try_for_each(|b| write!(f, "\\x{:x}", b))
  }
}

impl Display for Seq {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      | Seq::Bool(n) => n.render(f),
      | Seq::Int32(n) => n.render(f),
      | Seq::Int64(n) => n.render(f),
      | Seq::Double(n) => n.render(f),
      | Seq::Text(n) => n.render(f),
      | Seq::Bytes(n) => n.render(f),
      | Seq::Rep(n) => n.render(f),
    }
  }
}

impl Display for Value {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      | Value::Null => f.write_str(NULL_TOKEN),
      | Value::Bool(b) => b.render(f),
      | Value::Int32(n) => n.render(f),
      | Value::Int64(n) => n.render(f),
      | Value::Double(n) => n.render(f),
      | Value::Text(s) => s.render(f),
      | Value::Bytes(b) => b.render(f),
      | Value::Rep(r) => r.render(f),
      | Value::Seq(s) => Display::fmt(s, f),
    }
  }
}
