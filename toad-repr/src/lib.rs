//! This microcrate contains [`Representation`], the resource representation
//! exchanged between CoAP devices: an insertion-ordered set of named,
//! dynamically typed attributes, plus the URI and device address the
//! resource was reached at.
//!
//! # Attribute values
//! Every attribute holds a [`Value`]: null, a scalar (`bool`, `i32`, `i64`,
//! `f64`, [`String`], [`ByteString`], or a nested [`Representation`]), or a
//! sequence of one scalar kind nested 1, 2 or 3 deep.
//!
//! Values are written with [`Representation::set_value`] and read back with
//! [`Representation::get_value`], which only succeeds for exactly the type
//! that was stored (see [`AttrType`]).
//!
//! ```
//! use toad_repr::{ByteString, Representation};
//!
//! let mut rep = Representation::new();
//! rep.set_uri("/a/light");
//! rep.set_value("state", true);
//! rep.set_value("levels", vec![vec![1i32, 2], vec![3]]);
//! rep.set_value("raw", ByteString::from([0x1u8, 0xa]));
//!
//! assert_eq!(rep.get_value::<Vec<Vec<i32>>>("levels"), Some(vec![vec![1, 2], vec![3]]));
//! assert_eq!(rep.get_value::<Vec<i32>>("levels"), None);
//!
//! assert_eq!(rep.get_value_to_string("levels"), "[[1 2 ] [3 ] ]");
//! assert_eq!(rep.get_value_to_string("raw"), "\\x1\\xa");
//!
//! for attr in rep.iter() {
//!   println!("{} ({:?}): {}", attr.name(), attr.kind(), attr.get_value_to_string());
//! }
//! ```
//!
//! # Features
//! - `std` (default): implies `alloc`
//! - `alloc`: required
//! - `serde`: `serde::Serialize` for representations and values

// docs
#![doc(html_root_url = "https://docs.rs/toad-repr/0.0.0")]
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
compile_error!("toad-repr stores owned attribute data and requires the `alloc` feature");

#[cfg(feature = "alloc")]
extern crate alloc as std_alloc;

mod attr;
mod attr_type;
mod iter;
pub mod render;
mod repr;
mod value;

#[cfg(feature = "serde")]
mod ser;

pub use attr::{Attr, AttrRef};
pub use attr_type::AttrType;
pub use iter::{Entry, EntryMut, Iter, IterMut};
pub use render::{NULL_TOKEN, REPRESENTATION_TOKEN};
pub use repr::Representation;
#[doc(no_inline)]
pub use toad_dev_addr::{Adapter, DevAddr, Flags, HostError, IpFamily};
pub use value::{ByteString, Kind, Nested, Seq, Value};
