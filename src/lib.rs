//! Loam - a tuple-backed value model with named definitions
//!
//! Loam models program data as a small set of value kinds built on one
//! ordered container. A [`Definition`] is the constrained form of that
//! container: a named binding with an optional metadata slot, validated at
//! construction and immutable afterwards. A [`Lens`] turns any value into
//! its display text, optionally styled for terminals.
//!
//! # Quick Start
//!
//! ```
//! use loam::{Definition, Lens, Render, Value};
//!
//! // Bind a name to a value; the metadata slot defaults to an empty list
//! let def = Definition::new(vec![Value::text("foo"), Value::Int(42)])?;
//!
//! assert_eq!(def.name_text(), "foo");
//! assert_eq!(def.render(&Lens::new()), "'foo':(42):()");
//! # Ok::<(), loam::DefinitionError>(())
//! ```
//!
//! # Architecture
//!
//! All types live in `loam-core`; this crate re-exports its public API.

// Re-export the public API from loam-core
pub use loam_core::*;
