//! The definition construct
//!
//! A definition is a named binding plus optional metadata: a tuple that is
//! stricter about its content. Where the generic container accepts any
//! ordered sequence, a definition must hold exactly
//!
//! 1. `name` - a text value,
//! 2. `value` - any value,
//! 3. `metadata` - optional at construction; an empty ordered list is
//!    appended in its place when omitted.
//!
//! ## Invariants
//!
//! Once constructed:
//!
//! - the stored content always has exactly 3 elements (a definition built
//!   from 2 is never observably a 2-tuple),
//! - the first element always satisfies [`Value::is_text`],
//! - the shape is fixed for the instance's lifetime - no mutating access
//!   exists, so nothing can re-run validation on a live instance.
//!
//! ## Validation order
//!
//! The name check runs before the arity check, so a non-text first element
//! is reported as [`DefinitionError::InvalidName`] regardless of length.
//! An empty sequence has no first element to classify and is reported as
//! [`DefinitionError::InvalidStructure`].
//!
//! Construction consumes its content sequence; normalization happens on
//! the owned sequence and the caller's data is never aliased or mutated.

use crate::lens::{Lens, StyleKind};
use crate::traits::{Container, Render};
use crate::tuple::Tuple;
use crate::value::Value;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum number of content elements a definition accepts
pub const MIN_CONTENT_LEN: usize = 2;

/// Maximum number of content elements a definition accepts
pub const MAX_CONTENT_LEN: usize = 3;

// The root definition every other definition descends from. Built lazily
// through the ordinary validating constructor: raw prototype content
// first, then a single validation/default-fill pass.
static ROOT: Lazy<Definition> = Lazy::new(|| {
    let prototype = vec![Value::text(""), Value::void()];
    Definition::new(prototype).expect("root definition content is statically valid")
});

/// A named binding with optional metadata
///
/// Definitions are really just tuples that are a bit stricter about their
/// content: the backing store is a [`Tuple`], and validation layers the
/// shape constraints on top of the base container construction.
///
/// ## Examples
///
/// ```
/// use loam_core::{Definition, Value};
///
/// let def = Definition::new(vec![Value::text("foo"), Value::Int(42)])?;
///
/// // The omitted metadata element was defaulted to an empty list
/// assert_eq!(def.content().len(), 3);
/// assert_eq!(def.metadata(), &Value::empty_list());
/// assert_eq!(def.to_string(), "'foo':(42):()");
/// # Ok::<(), loam_core::DefinitionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub struct Definition {
    tuple: Tuple,
}

/// Error when validating definition content
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The first element is not a text value
    #[error("the first element of a definition must be a text value (found {found})")]
    InvalidName {
        /// Kind of the value supplied as the name
        found: &'static str,
    },

    /// The content length is outside the accepted range
    #[error(
        "a definition must contain either two or three elements: \
         name, value, and an optional metadata list (found {found})"
    )]
    InvalidStructure {
        /// Number of elements supplied
        found: usize,
    },
}

impl Definition {
    /// Create a definition, validating and normalizing the content
    ///
    /// Runs the ordered checks - name kind, then arity - and appends an
    /// empty ordered list when the metadata element is omitted, then
    /// delegates storage to the base container constructor.
    ///
    /// The content sequence is consumed; a sequence that was already
    /// valid and 3 elements long is stored exactly as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::InvalidName`] when the first element is
    /// not text, and [`DefinitionError::InvalidStructure`] when the length
    /// is outside `2..=3`.
    pub fn new(mut content: Vec<Value>) -> Result<Self, DefinitionError> {
        Self::validate(&content)?;

        if content.len() < MAX_CONTENT_LEN {
            content.push(Value::empty_list());
        }

        Ok(Definition {
            tuple: Tuple::new(content),
        })
    }

    /// Validate a content sequence without constructing
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Definition::new`].
    pub fn validate(content: &[Value]) -> Result<(), DefinitionError> {
        // Name kind is checked first: a wrong-kind name is a name error
        // even when the arity is wrong too.
        if let Some(first) = content.first() {
            if !first.is_text() {
                return Err(DefinitionError::InvalidName {
                    found: first.kind(),
                });
            }
        }

        if !(MIN_CONTENT_LEN..=MAX_CONTENT_LEN).contains(&content.len()) {
            return Err(DefinitionError::InvalidStructure {
                found: content.len(),
            });
        }

        Ok(())
    }

    /// The root definition
    ///
    /// The prototype every other definition descends from: empty name,
    /// void value, empty metadata list. Initialized lazily, once per
    /// process, and immutable thereafter.
    pub fn root() -> &'static Definition {
        &ROOT
    }

    /// The binding name
    ///
    /// Always a text value: construction rejects anything else.
    pub fn name(&self) -> &Value {
        &self.tuple.content()[0]
    }

    /// The binding name as a string slice
    pub fn name_text(&self) -> &str {
        self.name()
            .as_text()
            .expect("definition name is text by construction")
    }

    /// The bound value
    pub fn value(&self) -> &Value {
        &self.tuple.content()[1]
    }

    /// The metadata element
    ///
    /// When the definition was constructed without one, this is the empty
    /// ordered list that default-fill appended. A caller-supplied third
    /// element is stored as-is, whatever its kind.
    pub fn metadata(&self) -> &Value {
        &self.tuple.content()[2]
    }

    /// The stored content sequence - always 3 elements
    pub fn content(&self) -> &[Value] {
        self.tuple.content()
    }

    /// The backing tuple
    pub fn as_tuple(&self) -> &Tuple {
        &self.tuple
    }

    /// Consume the definition and return its backing tuple
    pub fn into_tuple(self) -> Tuple {
        self.tuple
    }
}

impl Default for Definition {
    /// A fresh clone of the root definition
    fn default() -> Self {
        Definition::root().clone()
    }
}

impl Container for Definition {
    fn content(&self) -> &[Value] {
        self.tuple.content()
    }
}

impl Render for Definition {
    /// Render as `:`-joined segments wrapped in the tuple display style
    ///
    /// Each stored element is rendered individually, so the output always
    /// has exactly as many segments as stored elements - `'foo':(42):()`.
    fn render(&self, lens: &Lens) -> String {
        let segments: Vec<String> = self
            .tuple
            .iter()
            .map(|element| lens.stringify(element))
            .collect();
        lens.stylize(&segments.join(":"), StyleKind::Tuple)
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Lens::default()))
    }
}

impl TryFrom<Vec<Value>> for Definition {
    type Error = DefinitionError;

    fn try_from(content: Vec<Value>) -> Result<Self, Self::Error> {
        Definition::new(content)
    }
}

impl TryFrom<Tuple> for Definition {
    type Error = DefinitionError;

    /// Validate a generic tuple into a definition
    fn try_from(tuple: Tuple) -> Result<Self, Self::Error> {
        Definition::new(tuple.into_content())
    }
}

impl From<Definition> for Tuple {
    fn from(definition: Definition) -> Self {
        definition.tuple
    }
}

impl From<Definition> for Vec<Value> {
    fn from(definition: Definition) -> Self {
        definition.tuple.into_content()
    }
}

// ============================================================================
// Tests
// ============================================================================
