//! Cell records of the document model

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::document::DocumentData;
use crate::error::DocumentError;
use crate::lenient;

/// Type hint stored next to a cell value (`t`)
///
/// Serialized as the editor's integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CellValueType {
    String = 1,
    Number = 2,
    Boolean = 3,
    /// Text that must stay text even if it looks numeric
    ForceString = 4,
}

impl TryFrom<u8> for CellValueType {
    type Error = DocumentError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(CellValueType::String),
            2 => Ok(CellValueType::Number),
            3 => Ok(CellValueType::Boolean),
            4 => Ok(CellValueType::ForceString),
            _ => Err(DocumentError::InvalidCode {
                kind: "cell value type",
                code,
            }),
        }
    }
}

impl From<CellValueType> for u8 {
    fn from(t: CellValueType) -> Self {
        t as u8
    }
}

/// Boolean encoded as 0/1, as the editor stores flags
///
/// Reading is tolerant: any non-zero number or `true` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub enum BooleanNumber {
    #[default]
    False = 0,
    True = 1,
}

impl BooleanNumber {
    pub fn is_true(self) -> bool {
        self == BooleanNumber::True
    }
}

impl From<bool> for BooleanNumber {
    fn from(b: bool) -> Self {
        if b {
            BooleanNumber::True
        } else {
            BooleanNumber::False
        }
    }
}

impl<'de> Deserialize<'de> for BooleanNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|raw| lenient::flag(&raw))
    }
}

impl From<BooleanNumber> for u8 {
    fn from(b: BooleanNumber) -> Self {
        b as u8
    }
}

/// Scalar cell value (`v`): string, number or boolean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellScalar {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl CellScalar {
    /// Whether the value is the empty string
    pub fn is_empty_string(&self) -> bool {
        matches!(self, CellScalar::String(s) if s.is_empty())
    }

    /// The type hint matching the runtime kind of this value
    pub fn inferred_type(&self) -> CellValueType {
        match self {
            CellScalar::Boolean(_) => CellValueType::Boolean,
            CellScalar::Number(_) => CellValueType::Number,
            CellScalar::String(_) => CellValueType::String,
        }
    }
}

impl fmt::Display for CellScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellScalar::Boolean(b) => write!(f, "{}", b),
            CellScalar::Number(n) => write!(f, "{}", n),
            CellScalar::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for CellScalar {
    fn from(b: bool) -> Self {
        CellScalar::Boolean(b)
    }
}

impl From<f64> for CellScalar {
    fn from(n: f64) -> Self {
        CellScalar::Number(n)
    }
}

impl From<&str> for CellScalar {
    fn from(s: &str) -> Self {
        CellScalar::String(s.to_string())
    }
}

impl From<String> for CellScalar {
    fn from(s: String) -> Self {
        CellScalar::String(s)
    }
}

/// A single cell of the document model
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CellData {
    /// Scalar value; for formula cells, the last computed result
    #[serde(
        rename = "v",
        default,
        deserialize_with = "lenient::scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<CellScalar>,

    /// Type hint for `value`; unknown codes read as no hint
    #[serde(
        rename = "t",
        default,
        deserialize_with = "lenient::type_hint",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_type: Option<CellValueType>,

    /// Formula source text
    #[serde(rename = "f", default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,

    /// Styled text payload
    #[serde(rename = "p", default, skip_serializing_if = "Option::is_none")]
    pub rich_text: Option<DocumentData>,
}

impl CellData {
    /// Create a cell whose type hint follows the value's runtime kind
    pub fn scalar<V: Into<CellScalar>>(value: V) -> Self {
        let value = value.into();
        Self {
            value_type: Some(value.inferred_type()),
            value: Some(value),
            formula: None,
            rich_text: None,
        }
    }

    /// Create a number cell
    pub fn number(n: f64) -> Self {
        Self::scalar(n)
    }

    /// Create a boolean cell
    pub fn boolean(b: bool) -> Self {
        Self::scalar(b)
    }

    /// Create a string cell
    pub fn string<S: Into<String>>(s: S) -> Self {
        Self::scalar(s.into())
    }

    /// Attach formula text
    pub fn with_formula<S: Into<String>>(mut self, formula: S) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Attach a rich text payload
    pub fn with_rich_text(mut self, doc: DocumentData) -> Self {
        self.rich_text = Some(doc);
        self
    }

    /// Formula text, if present and non-empty
    pub fn formula_text(&self) -> Option<&str> {
        self.formula.as_deref().filter(|f| !f.is_empty())
    }
}
