//! Multi-value attributes.
//!
//! An attribute such as `class="card wide"` holds an ordered list of
//! space-separated tokens. [`AttributeValueSet`] stores those tokens and
//! [`AttrValue`] is the input shape accepted wherever a value is supplied:
//! either one space-delimited string or a sequence of strings.

use compact_str::CompactString;
use facet::Facet;
use facet_reflect::Peek;
use smallvec::SmallVec;
use std::fmt;

use crate::error::{Error, Result};

type Tokens = SmallVec<[CompactString; 4]>;

/// A value supplied to an attribute operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// A single string, split on spaces into tokens.
    Text(String),
    /// A sequence of strings, one token per item.
    List(Vec<String>),
}

impl AttrValue {
    /// Build a value from any reflected type.
    ///
    /// Strings become [`AttrValue::Text`]; lists, arrays and slices of strings
    /// become [`AttrValue::List`]. Anything else is rejected with
    /// [`Error::InvalidValue`].
    pub fn reflect<'facet, T: Facet<'facet> + ?Sized>(value: &T) -> Result<Self> {
        let peek = Peek::new(value);
        let found = peek.shape().type_identifier;
        let invalid = || Error::InvalidValue {
            found: found.to_string(),
        };

        if let Some(text) = peek.as_str() {
            return Ok(AttrValue::Text(text.to_string()));
        }

        let list = peek.into_list_like().map_err(|_| invalid())?;
        let mut items = Vec::with_capacity(list.len());
        for item in list.iter() {
            let text = item.as_str().ok_or_else(invalid)?;
            items.push(text.to_string());
        }
        Ok(AttrValue::List(items))
    }

    fn tokenize(&self) -> Tokens {
        match self {
            AttrValue::Text(text) => collect_tokens(text.split(' ')),
            AttrValue::List(items) => collect_tokens(items.iter().map(String::as_str)),
        }
    }
}

/// Trim every piece and drop the ones left empty, so `"a  b "` yields `a`, `b`.
fn collect_tokens<'a>(pieces: impl Iterator<Item = &'a str>) -> Tokens {
    pieces
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(CompactString::from)
        .collect()
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(value: Vec<&str>) -> Self {
        AttrValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for AttrValue {
    fn from(value: &[&str]) -> Self {
        AttrValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AttrValue {
    fn from(value: [&str; N]) -> Self {
        AttrValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// The ordered tokens of one attribute.
///
/// Despite the name this is not a mathematical set: duplicates are kept and
/// order is preserved. Every token is trimmed and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeValueSet {
    tokens: Tokens,
}

impl AttributeValueSet {
    /// Create a value set from a string or a sequence of strings.
    pub fn new(initial: impl Into<AttrValue>) -> Self {
        Self {
            tokens: initial.into().tokenize(),
        }
    }

    /// Create a value set from a reflected value, see [`AttrValue::reflect`].
    pub fn from_reflect<'facet, T: Facet<'facet> + ?Sized>(initial: &T) -> Result<Self> {
        Ok(Self::new(AttrValue::reflect(initial)?))
    }

    /// Returns true if some token equals `value` exactly.
    pub fn contains(&self, value: &str) -> bool {
        self.tokens.iter().any(|token| token.as_str() == value)
    }

    /// Append tokens. Existing tokens are never deduplicated.
    pub fn add(&mut self, vals: impl Into<AttrValue>) {
        self.tokens.extend(vals.into().tokenize());
    }

    /// Replace all tokens.
    pub fn set(&mut self, vals: impl Into<AttrValue>) {
        self.tokens = vals.into().tokenize();
    }

    /// Remove every token equal to `value`. No-op if absent.
    pub fn remove(&mut self, value: &str) {
        self.tokens.retain(|token| token.as_str() != value);
    }

    /// Tokens joined with a single space.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn tokens(&self) -> &[CompactString] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for AttributeValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}
