//! Core traits for container access and rendering
//!
//! This module defines the seams shared by the generic container and its
//! constrained variants: ordered-content access ([`Container`]) and the
//! lens hook ([`Render`]). Code that only needs to walk stored elements or
//! produce a representation can take either trait without caring which
//! concrete construct it holds.

use crate::lens::Lens;
use crate::value::Value;

/// Ordered-content access
///
/// Implemented by every construct that stores an ordered sequence of
/// values as its backing content - the generic tuple and the definition.
///
/// The provided methods all derive from [`Container::content`]; an
/// implementation only supplies the backing slice.
pub trait Container {
    /// The stored content sequence
    fn content(&self) -> &[Value];

    /// Number of stored elements
    fn len(&self) -> usize {
        self.content().len()
    }

    /// Check if no elements are stored
    fn is_empty(&self) -> bool {
        self.content().is_empty()
    }

    /// Element at `index`, if present
    fn get(&self, index: usize) -> Option<&Value> {
        self.content().get(index)
    }
}

/// The lens hook: produce a human-readable representation
///
/// Implementations must be pure functions of current state and must
/// reflect exactly the stored content. The output is for inspection and
/// debugging only - never equality, never serialization.
pub trait Render {
    /// Render through the given lens
    fn render(&self, lens: &Lens) -> String;
}
