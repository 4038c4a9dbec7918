//! Core types for the loam object model
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: unified value enum for all data kinds
//! - Tuple: ordered container backing the structured types
//! - Definition: named binding with optional metadata
//! - Lens: rendering context (stringification grammar + display styles)
//! - Traits: shared seams (Container, Render)

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod definition;
pub mod lens;
pub mod traits;
pub mod tuple;
pub mod value;

// Re-export commonly used types and traits
pub use definition::{Definition, DefinitionError, MAX_CONTENT_LEN, MIN_CONTENT_LEN};
pub use lens::{Lens, Style, StyleKind, StyleSheet};
pub use traits::{Container, Render};
pub use tuple::Tuple;
pub use value::Value;
