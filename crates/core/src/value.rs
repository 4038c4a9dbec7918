//! Value types for the loam object model
//!
//! This module defines:
//! - Value: unified enum for every kind of thing the model can hold
//!
//! ## Canonical Value Model
//!
//! The Value enum has exactly 8 variants:
//! - Void, Bool, Int, Float, Text, List, Tuple, Definition
//!
//! ### Kind Rules
//!
//! - **No implicit coercions**: `Int(1) != Float(1.0)` - different kinds are
//!   NEVER equal
//! - **Float uses IEEE-754 equality**: `NaN != NaN`, `-0.0 == 0.0`
//! - **Text is the only string-capable kind**: the definition name predicate
//!   ([`Value::is_text`]) accepts nothing else
//! - **Containers are values too**: lists, tuples, and definitions nest freely
//!
//! `Void` is the unset value - the slot a binding holds before anything has
//! been bound to it. It is its own kind, not a boolean.

use crate::definition::Definition;
use crate::lens::Lens;
use crate::traits::Render;
use crate::tuple::Tuple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical value type for the loam object model
///
/// Every piece of data in the model is one of these 8 kinds. Bindings,
/// tuple elements, and metadata entries all hold `Value`s.
///
/// ## Kind Equality
///
/// Different kinds are NEVER equal, even if they contain the same "value":
/// - `Int(1) != Float(1.0)`
/// - `Text("true") != Bool(true)`
///
/// Float equality follows IEEE-754 semantics:
/// - `NaN != NaN`
/// - `-0.0 == 0.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// The unset value
    Void,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 text - the string-capable kind
    Text(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Generic ordered-content container
    Tuple(Tuple),
    /// Named binding with optional metadata
    Definition(Definition),
}

// Custom PartialEq implementation for IEEE-754 float semantics
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Void, Value::Void) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Definition(a), Value::Definition(b)) => a == b,
            // Different kinds are NEVER equal
            _ => false,
        }
    }
}

impl Value {
    /// Get the kind name as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Void => "Void",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Text(_) => "Text",
            Value::List(_) => "List",
            Value::Tuple(_) => "Tuple",
            Value::Definition(_) => "Definition",
        }
    }

    // ========================================================================
    // Factory constructors
    // ========================================================================

    /// The unset value
    pub fn void() -> Value {
        Value::Void
    }

    /// A new text value
    pub fn text(s: impl Into<String>) -> Value {
        Value::Text(s.into())
    }

    /// A new list holding the given elements
    pub fn list(items: Vec<Value>) -> Value {
        Value::List(items)
    }

    /// A new empty ordered list
    ///
    /// This is the constructor the definition's default-fill rule uses for
    /// an omitted metadata element.
    pub fn empty_list() -> Value {
        Value::List(Vec::new())
    }

    // ========================================================================
    // Capability predicates
    // ========================================================================

    /// Check if this is the unset value
    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    /// Check if this is a boolean value
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if this is a float value
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if this is a text value
    ///
    /// This is the string-capability predicate the definition constructor
    /// applies to its first element. It is the single authoritative test;
    /// nothing else in the crate classifies a value as string-capable.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Check if this is a list value
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Check if this is a tuple value
    pub fn is_tuple(&self) -> bool {
        matches!(self, Value::Tuple(_))
    }

    /// Check if this is a definition value
    pub fn is_definition(&self) -> bool {
        matches!(self, Value::Definition(_))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a Text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[Value] if this is a List value
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get as &Tuple if this is a Tuple value
    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            Value::Tuple(t) => Some(t),
            _ => None,
        }
    }

    /// Get as &Definition if this is a Definition value
    pub fn as_definition(&self) -> Option<&Definition> {
        match self {
            Value::Definition(d) => Some(d),
            _ => None,
        }
    }
}

impl Render for Value {
    fn render(&self, lens: &Lens) -> String {
        lens.stringify(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Lens::default().stringify(self))
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Tuple> for Value {
    fn from(t: Tuple) -> Self {
        Value::Tuple(t)
    }
}

impl From<Definition> for Value {
    fn from(d: Definition) -> Self {
        Value::Definition(d)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Void
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests for Value enum variants

    #[test]
    fn test_value_void() {
        let value = Value::Void;
        assert!(matches!(value, Value::Void));
        assert!(value.is_void());
        assert_eq!(Value::void(), Value::Void);
    }

    #[test]
    fn test_value_bool() {
        let value_true = Value::Bool(true);
        let value_false = Value::Bool(false);

        assert!(matches!(value_true, Value::Bool(true)));
        assert!(matches!(value_false, Value::Bool(false)));
        assert!(value_true.is_bool());
        assert_eq!(value_true.as_bool(), Some(true));
    }

    #[test]
    fn test_value_int() {
        let value = Value::Int(42);
        assert!(matches!(value, Value::Int(42)));
        assert!(value.is_int());
        assert_eq!(value.as_int(), Some(42));

        let negative = Value::Int(-100);
        assert!(matches!(negative, Value::Int(-100)));
    }

    #[test]
    fn test_value_float() {
        let value = Value::Float(3.14);
        assert!(matches!(value, Value::Float(_)));
        assert!(value.is_float());

        if let Some(f) = value.as_float() {
            assert!((f - 3.14).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_value_text() {
        let value = Value::text("hello world");
        assert!(matches!(value, Value::Text(_)));
        assert!(value.is_text());
        assert_eq!(value.as_text(), Some("hello world"));
    }

    #[test]
    fn test_value_list() {
        let items = vec![Value::Int(1), Value::text("two"), Value::Bool(true)];
        let value = Value::List(items.clone());

        assert!(matches!(value, Value::List(_)));
        assert!(value.is_list());
        if let Some(list) = value.as_list() {
            assert_eq!(list.len(), 3);
            assert_eq!(list[0], Value::Int(1));
            assert_eq!(list[1], Value::text("two"));
            assert_eq!(list[2], Value::Bool(true));
        }
    }

    #[test]
    fn test_value_tuple() {
        let tuple = Tuple::new(vec![Value::Int(1), Value::Int(2)]);
        let value = Value::Tuple(tuple.clone());

        assert!(value.is_tuple());
        assert_eq!(value.as_tuple(), Some(&tuple));
    }

    #[test]
    fn test_value_definition() {
        let def = Definition::new(vec![Value::text("x"), Value::Int(1)]).unwrap();
        let value = Value::Definition(def.clone());

        assert!(value.is_definition());
        assert_eq!(value.as_definition(), Some(&def));
    }

    #[test]
    fn test_empty_list_factory() {
        let value = Value::empty_list();
        assert!(value.is_list());
        assert_eq!(value.as_list().unwrap().len(), 0);
    }

    // ====================================================================
    // Kind equality rules
    // ====================================================================

    #[test]
    fn test_int_not_equal_float() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    #[test]
    fn test_nan_not_equal_nan() {
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        assert_eq!(Value::Float(-0.0), Value::Float(0.0));
    }

    #[test]
    fn test_void_not_equal_to_other_kinds() {
        assert_ne!(Value::Void, Value::Bool(false));
        assert_ne!(Value::Void, Value::Int(0));
        assert_ne!(Value::Void, Value::Float(0.0));
        assert_ne!(Value::Void, Value::text(""));
        assert_ne!(Value::Void, Value::empty_list());
    }

    #[test]
    fn test_text_not_equal_bool() {
        assert_ne!(Value::text("true"), Value::Bool(true));
    }

    #[test]
    fn test_list_not_equal_tuple_with_same_content() {
        let items = vec![Value::Int(1), Value::Int(2)];
        assert_ne!(Value::List(items.clone()), Value::Tuple(Tuple::new(items)));
    }

    #[test]
    fn test_float_infinity() {
        let pos_inf = Value::Float(f64::INFINITY);
        let neg_inf = Value::Float(f64::NEG_INFINITY);
        assert_eq!(pos_inf, Value::Float(f64::INFINITY));
        assert_ne!(pos_inf, neg_inf);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Void.kind(), "Void");
        assert_eq!(Value::Bool(true).kind(), "Bool");
        assert_eq!(Value::Int(1).kind(), "Int");
        assert_eq!(Value::Float(1.0).kind(), "Float");
        assert_eq!(Value::text("").kind(), "Text");
        assert_eq!(Value::empty_list().kind(), "List");
        assert_eq!(Value::Tuple(Tuple::empty()).kind(), "Tuple");
        let def = Definition::new(vec![Value::text("n"), Value::Void]).unwrap();
        assert_eq!(Value::Definition(def).kind(), "Definition");
    }

    // ====================================================================
    // From conversions
    // ====================================================================

    #[test]
    fn test_from_i64() {
        let v: Value = 42i64.into();
        assert_eq!(v, Value::Int(42));
    }

    #[test]
    fn test_from_i32() {
        let v: Value = 42i32.into();
        assert_eq!(v, Value::Int(42));
    }

    #[test]
    fn test_from_f64() {
        let v: Value = 3.14f64.into();
        assert!(matches!(v, Value::Float(f) if (f - 3.14).abs() < f64::EPSILON));
    }

    #[test]
    fn test_from_bool() {
        let v: Value = true.into();
        assert_eq!(v, Value::Bool(true));
        let v: Value = false.into();
        assert_eq!(v, Value::Bool(false));
    }

    #[test]
    fn test_from_string() {
        let v: Value = String::from("hello").into();
        assert_eq!(v, Value::text("hello"));
    }

    #[test]
    fn test_from_str_ref() {
        let v: Value = "hello".into();
        assert_eq!(v, Value::text("hello"));
    }

    #[test]
    fn test_from_vec() {
        let v: Value = vec![Value::Int(1), Value::Int(2)].into();
        assert_eq!(v, Value::List(vec![Value::Int(1), Value::Int(2)]));
    }

    #[test]
    fn test_from_tuple() {
        let t = Tuple::new(vec![Value::Int(1)]);
        let v: Value = t.clone().into();
        assert_eq!(v.as_tuple(), Some(&t));
    }

    #[test]
    fn test_from_unit() {
        let v: Value = ().into();
        assert_eq!(v, Value::Void);
    }

    // ====================================================================
    // as_* returns None for wrong kinds
    // ====================================================================

    #[test]
    fn test_as_wrong_kind_returns_none() {
        let v = Value::Int(42);
        assert!(v.as_bool().is_none());
        assert!(v.as_float().is_none());
        assert!(v.as_text().is_none());
        assert!(v.as_list().is_none());
        assert!(v.as_tuple().is_none());
        assert!(v.as_definition().is_none());

        let v = Value::text("hello");
        assert!(v.as_int().is_none());
        assert!(v.as_bool().is_none());
        assert!(v.as_float().is_none());
        assert!(v.as_list().is_none());
    }

    // ====================================================================
    // Empty container edge cases
    // ====================================================================

    #[test]
    fn test_empty_text() {
        let v = Value::text("");
        assert!(v.is_text());
        assert_eq!(v.as_text(), Some(""));
    }

    #[test]
    fn test_empty_list() {
        let v = Value::List(vec![]);
        assert!(v.is_list());
        assert_eq!(v.as_list().unwrap().len(), 0);
    }

    // ====================================================================
    // Nested structures
    // ====================================================================

    #[test]
    fn test_nested_list() {
        let inner = Value::List(vec![Value::Int(1), Value::Int(2)]);
        let outer = Value::List(vec![inner.clone(), Value::Int(3)]);
        assert!(outer.is_list());
        let items = outer.as_list().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], inner);
    }

    #[test]
    fn test_definition_inside_list() {
        let def = Definition::new(vec![Value::text("inner"), Value::Int(9)]).unwrap();
        let list = Value::List(vec![Value::Definition(def.clone())]);
        let items = list.as_list().unwrap();
        assert_eq!(items[0].as_definition(), Some(&def));
    }

    #[test]
    fn test_deeply_nested_equality() {
        let inner = Value::List(vec![Value::Tuple(Tuple::new(vec![Value::Int(1)]))]);
        let v1 = Value::List(vec![inner.clone()]);
        let v2 = Value::List(vec![inner]);
        assert_eq!(v1, v2);
    }

    #[test]
    fn test_value_debug() {
        let v = Value::Int(42);
        let debug = format!("{:?}", v);
        assert!(debug.contains("42"));
    }

    // ====================================================================
    // Serialization
    // ====================================================================

    #[test]
    fn test_value_serialization_all_variants() {
        let test_values = vec![
            Value::Void,
            Value::Bool(true),
            Value::Int(42),
            Value::Float(3.14),
            Value::text("test"),
            Value::List(vec![Value::Int(1), Value::text("a")]),
            Value::Tuple(Tuple::new(vec![Value::Int(1), Value::Int(2)])),
            Value::Definition(Definition::new(vec![Value::text("n"), Value::Int(1)]).unwrap()),
        ];

        for value in test_values {
            let serialized = serde_json::to_string(&value).unwrap();
            let deserialized: Value = serde_json::from_str(&serialized).unwrap();
            assert_eq!(value, deserialized);
        }
    }

    #[test]
    fn test_nested_serialization() {
        let def = Definition::new(vec![Value::text("k"), Value::Int(7)]).unwrap();
        let value = Value::List(vec![Value::Definition(def), Value::Void]);

        let serialized = serde_json::to_string(&value).unwrap();
        let deserialized: Value = serde_json::from_str(&serialized).unwrap();
        assert_eq!(value, deserialized);
    }
}
