//! Forward cell classification
//!
//! Every stored cell is first turned into a [`SourceCell`], a closed set of
//! shapes the document model knows how to hold, and only then converted.
//! Classification never fails: values that cannot be represented are
//! omitted or coerced to strings.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use sheet_bridge_core::{CellData, CellError, CellType, CellValue, Hyperlink, RichText};
use sheet_bridge_doc::{CellData as DocCell, CellScalar};

use crate::ids::{IdGenerator, IdKind};
use crate::rich_text::encode_rich_text;

static EMPTY: CellValue = CellValue::Empty;

/// Shape of a source cell as far as conversion is concerned
#[derive(Debug, Clone, PartialEq)]
pub enum SourceCell<'a> {
    /// Nothing to emit
    Empty,
    Number(f64),
    Boolean(bool),
    Date(NaiveDateTime),
    PlainString(Cow<'a, str>),
    SharedString(Cow<'a, str>),
    RichText(&'a RichText),
    Hyperlink(&'a Hyperlink),
    /// A formula together with its last computed result
    FormulaResult {
        formula: &'a str,
        result: &'a CellValue,
    },
    ErrorMarker(CellError),
    /// A value whose tag says nothing about its shape
    Unknown(&'a CellValue),
}

impl<'a> SourceCell<'a> {
    /// Classify a stored cell
    ///
    /// Formulas win over the declared type tag, which wins over the runtime
    /// shape of the value.
    pub fn classify(cell: &'a CellData) -> Self {
        let value = &cell.value;
        if let CellValue::Formula { text, cached_value } = value {
            if !text.is_empty() {
                return match cached_value {
                    Some(result) => SourceCell::FormulaResult {
                        formula: text,
                        result,
                    },
                    None => {
                        log::debug!("formula {:?} has no computed result; omitted", text);
                        SourceCell::Empty
                    }
                };
            }
        }

        // a formula wrapper with no text is just its cached value
        let value = match value {
            CellValue::Formula {
                cached_value: Some(result),
                ..
            } => result.as_ref(),
            CellValue::Formula { .. } => &EMPTY,
            other => other,
        };

        if let Some(formula) = cell.formula.as_deref().filter(|f| !f.is_empty()) {
            return SourceCell::FormulaResult {
                formula,
                result: value,
            };
        }

        if value.is_empty() {
            return SourceCell::Empty;
        }

        match cell.value_type() {
            CellType::Number => match value {
                CellValue::Number(n) => SourceCell::Number(*n),
                other => mismatch("number", other),
            },
            CellType::Boolean => match value {
                CellValue::Boolean(b) => SourceCell::Boolean(*b),
                other => mismatch("boolean", other),
            },
            CellType::Date => match value {
                CellValue::Date(dt) => SourceCell::Date(*dt),
                other => mismatch("date", other),
            },
            CellType::String => SourceCell::PlainString(text_of(value)),
            CellType::SharedString => SourceCell::SharedString(text_of(value)),
            CellType::RichText => match value {
                CellValue::RichText(rich) => SourceCell::RichText(rich),
                other => SourceCell::PlainString(text_of(other)),
            },
            CellType::Hyperlink => match value {
                CellValue::Hyperlink(link) => SourceCell::Hyperlink(link),
                other => SourceCell::PlainString(text_of(other)),
            },
            CellType::Error => match value {
                CellValue::Error(err) => SourceCell::ErrorMarker(*err),
                other => SourceCell::PlainString(text_of(other)),
            },
            CellType::Null | CellType::Merge | CellType::Formula => SourceCell::Unknown(value),
        }
    }

    /// Classify a value by its runtime shape alone
    ///
    /// This is the policy for cells whose tag carries no shape. Anything
    /// without a dedicated shape becomes a string.
    pub fn coerce_unknown(value: &'a CellValue) -> Self {
        match value {
            CellValue::Empty => SourceCell::Empty,
            CellValue::Number(n) => SourceCell::Number(*n),
            CellValue::Boolean(b) => SourceCell::Boolean(*b),
            CellValue::Date(dt) => SourceCell::Date(*dt),
            CellValue::String(s) => SourceCell::PlainString(Cow::Borrowed(s.as_str())),
            CellValue::RichText(rich) => SourceCell::RichText(rich),
            CellValue::Hyperlink(link) => SourceCell::Hyperlink(link),
            CellValue::Error(err) => SourceCell::ErrorMarker(*err),
            CellValue::Formula { .. } => SourceCell::PlainString(text_of(value)),
        }
    }

    /// Convert into a document model cell, `None` when nothing is emitted
    pub fn into_document_cell(self, ids: &mut dyn IdGenerator) -> Option<DocCell> {
        let cell = match self {
            SourceCell::Empty => return None,
            SourceCell::Number(n) => DocCell::number(n),
            SourceCell::Boolean(b) => DocCell::boolean(b),
            SourceCell::Date(dt) => DocCell::number(epoch_millis(&dt)),
            SourceCell::PlainString(s) | SourceCell::SharedString(s) => DocCell::string(s),
            SourceCell::RichText(rich) => {
                if rich.is_empty() {
                    DocCell::string("")
                } else {
                    let doc = encode_rich_text(rich, ids.next_id(IdKind::Document));
                    DocCell::string(rich.plain_text()).with_rich_text(doc)
                }
            }
            SourceCell::Hyperlink(link) => DocCell::string(link.display_text()),
            SourceCell::ErrorMarker(err) => DocCell::string(err.as_str()),
            SourceCell::FormulaResult { formula, result } => match result_scalar(result) {
                Some(value) => DocCell::scalar(value).with_formula(formula),
                None => {
                    log::debug!("formula {:?} has no usable result; omitted", formula);
                    return None;
                }
            },
            SourceCell::Unknown(value) => {
                return SourceCell::coerce_unknown(value).into_document_cell(ids)
            }
        };
        Some(cell)
    }
}

/// Classify and convert a stored cell in one step
pub fn to_document_cell(cell: &CellData, ids: &mut dyn IdGenerator) -> Option<DocCell> {
    SourceCell::classify(cell).into_document_cell(ids)
}

fn mismatch<'a>(declared: &str, value: &CellValue) -> SourceCell<'a> {
    log::debug!(
        "cell declared as {} holds a {} value; omitted",
        declared,
        value.type_name()
    );
    SourceCell::Empty
}

fn text_of(value: &CellValue) -> Cow<'_, str> {
    match value {
        CellValue::String(s) => Cow::Borrowed(s.as_str()),
        CellValue::Hyperlink(link) => Cow::Borrowed(link.display_text()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Milliseconds since the Unix epoch, reading the date as UTC
fn epoch_millis(dt: &NaiveDateTime) -> f64 {
    dt.and_utc().timestamp_millis() as f64
}

/// Scalar form of a formula result
fn result_scalar(result: &CellValue) -> Option<CellScalar> {
    match result {
        CellValue::Empty => None,
        CellValue::Number(n) => Some(CellScalar::Number(*n)),
        CellValue::Boolean(b) => Some(CellScalar::Boolean(*b)),
        CellValue::String(s) => Some(CellScalar::String(s.to_string())),
        CellValue::Date(dt) => Some(CellScalar::Number(epoch_millis(dt))),
        CellValue::RichText(rich) => Some(CellScalar::String(rich.plain_text())),
        CellValue::Hyperlink(link) => Some(CellScalar::String(link.display_text().to_string())),
        CellValue::Error(err) => Some(CellScalar::String(err.as_str().to_string())),
        CellValue::Formula { cached_value, .. } => cached_value.as_deref().and_then(result_scalar),
    }
}
