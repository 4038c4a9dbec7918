//! Rendering and stylization
//!
//! A [`Lens`] produces human-readable representations of values for
//! inspection and debugging. Rendering is a pure function of current state:
//! no side effects, and the output must never be treated as an equality or
//! serialization surface.
//!
//! ## Render grammar
//!
//! - `Text("foo")` renders `'foo'` (content unescaped)
//! - `Bool(true)` renders `(true)`, `Int(42)` renders `(42)`
//! - `Void` renders `(void)` - distinct from the empty list's `()`
//! - Lists and tuples render as parenthesized, space-separated groups:
//!   `('a' (1))`
//! - Definitions render as their `:`-joined segments: `'foo':(42):()`
//!
//! ## Styles
//!
//! Each piece of output is wrapped in the display style its kind maps to in
//! the lens's [`StyleSheet`]. The default sheet styles nothing, so the
//! plain lens emits bare text; [`Lens::colored`] wraps output in ANSI
//! escape pairs.

use crate::traits::Render;
use crate::value::Value;

/// A display style: a pair of escape sequences wrapped around rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    open: &'static str,
    close: &'static str,
}

impl Style {
    /// ANSI green
    pub const GREEN: Style = Style::new("\x1b[32m", "\x1b[39m");
    /// ANSI yellow
    pub const YELLOW: Style = Style::new("\x1b[33m", "\x1b[39m");
    /// ANSI cyan
    pub const CYAN: Style = Style::new("\x1b[36m", "\x1b[39m");
    /// ANSI bright black
    pub const GREY: Style = Style::new("\x1b[90m", "\x1b[39m");

    /// A style from an open/close escape pair
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Style { open, close }
    }

    /// Wrap `text` in this style's escape pair
    pub fn apply(&self, text: &str) -> String {
        format!("{}{}{}", self.open, text, self.close)
    }
}

/// The named display styles a lens can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// Text values
    Text,
    /// Integer and float values
    Number,
    /// Boolean values
    Bool,
    /// The unset value
    Void,
    /// List groups
    List,
    /// Tuple and definition output
    Tuple,
}

/// Mapping from display-style names to styles
///
/// A kind with no style renders as bare text. The plain sheet styles
/// nothing; the colored sheet approximates terminal-inspector colors.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    text: Option<Style>,
    number: Option<Style>,
    boolean: Option<Style>,
    void: Option<Style>,
    list: Option<Style>,
    tuple: Option<Style>,
}

impl StyleSheet {
    /// A sheet that styles nothing
    pub fn plain() -> Self {
        StyleSheet::default()
    }

    /// A sheet with ANSI colors per kind
    pub fn colored() -> Self {
        StyleSheet {
            text: Some(Style::GREEN),
            number: Some(Style::YELLOW),
            boolean: Some(Style::YELLOW),
            void: Some(Style::GREY),
            list: None,
            tuple: Some(Style::CYAN),
        }
    }

    /// The style for a kind, if any
    pub fn get(&self, kind: StyleKind) -> Option<&Style> {
        match kind {
            StyleKind::Text => self.text.as_ref(),
            StyleKind::Number => self.number.as_ref(),
            StyleKind::Bool => self.boolean.as_ref(),
            StyleKind::Void => self.void.as_ref(),
            StyleKind::List => self.list.as_ref(),
            StyleKind::Tuple => self.tuple.as_ref(),
        }
    }

    /// Set or clear the style for a kind
    pub fn set(&mut self, kind: StyleKind, style: Option<Style>) {
        match kind {
            StyleKind::Text => self.text = style,
            StyleKind::Number => self.number = style,
            StyleKind::Bool => self.boolean = style,
            StyleKind::Void => self.void = style,
            StyleKind::List => self.list = style,
            StyleKind::Tuple => self.tuple = style,
        }
    }
}

/// Renderer for values
///
/// Holds the stylesheet applied to output. `Lens::new()` (and `Default`)
/// renders bare text; [`Lens::colored`] renders with ANSI colors.
#[derive(Debug, Clone, Default)]
pub struct Lens {
    styles: StyleSheet,
}

impl Lens {
    /// A lens that renders bare text
    pub fn new() -> Self {
        Lens {
            styles: StyleSheet::plain(),
        }
    }

    /// A lens that renders with ANSI colors
    pub fn colored() -> Self {
        Lens {
            styles: StyleSheet::colored(),
        }
    }

    /// A lens with a custom stylesheet
    pub fn with_styles(styles: StyleSheet) -> Self {
        Lens { styles }
    }

    /// The stylesheet this lens applies
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Wrap `text` in the display style mapped to `kind`
    ///
    /// Returns the text unchanged when the sheet has no style for the kind.
    pub fn stylize(&self, text: &str, kind: StyleKind) -> String {
        match self.styles.get(kind) {
            Some(style) => style.apply(text),
            None => text.to_string(),
        }
    }

    /// Render a value according to the grammar
    pub fn stringify(&self, value: &Value) -> String {
        match value {
            Value::Void => self.stylize("(void)", StyleKind::Void),
            Value::Bool(b) => self.stylize(&format!("({b})"), StyleKind::Bool),
            Value::Int(i) => self.stylize(&format!("({i})"), StyleKind::Number),
            Value::Float(x) => self.stylize(&format!("({x})"), StyleKind::Number),
            Value::Text(s) => self.stylize(&format!("'{s}'"), StyleKind::Text),
            Value::List(items) => self.stylize(&self.group(items), StyleKind::List),
            Value::Tuple(t) => t.render(self),
            Value::Definition(d) => d.render(self),
        }
    }

    /// Render a sequence as a parenthesized, space-separated group
    pub fn group(&self, items: &[Value]) -> String {
        let rendered: Vec<String> = items.iter().map(|item| self.stringify(item)).collect();
        format!("({})", rendered.join(" "))
    }
}
