//! Generic ordered-content container
//!
//! A tuple stores an ordered sequence of values and nothing more: the base
//! constructor accepts any arity and performs no validation. Constrained
//! variants (the definition) layer their checks on top of this container
//! and delegate storage to it.
//!
//! Tuples are structurally immutable once built - the content sequence is
//! fixed at construction and only read access is exposed.

use crate::lens::{Lens, StyleKind};
use crate::traits::{Container, Render};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice;

/// Ordered-content container over [`Value`]s
///
/// The backing sequence is stored exactly as supplied; order is preserved
/// and elements may be of any kind, including other tuples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuple {
    content: Vec<Value>,
}

impl Tuple {
    /// Create a tuple holding the given content sequence
    ///
    /// This is the base container constructor: any arity is accepted and
    /// the sequence is stored as-is.
    pub fn new(content: Vec<Value>) -> Self {
        Tuple { content }
    }

    /// Create a tuple with no elements
    pub fn empty() -> Self {
        Tuple {
            content: Vec::new(),
        }
    }

    /// The stored content sequence
    #[inline]
    pub fn content(&self) -> &[Value] {
        &self.content
    }

    /// Number of stored elements
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the tuple holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Element at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.content.get(index)
    }

    /// Iterate over the stored elements in order
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.content.iter()
    }

    /// Consume the tuple and return its content sequence
    pub fn into_content(self) -> Vec<Value> {
        self.content
    }
}

impl Container for Tuple {
    fn content(&self) -> &[Value] {
        &self.content
    }
}

impl Render for Tuple {
    fn render(&self, lens: &Lens) -> String {
        lens.stylize(&lens.group(&self.content), StyleKind::Tuple)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Lens::default()))
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(content: Vec<Value>) -> Self {
        Tuple::new(content)
    }
}

impl From<Tuple> for Vec<Value> {
    fn from(tuple: Tuple) -> Self {
        tuple.content
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Tuple::new(iter.into_iter().collect())
    }
}
