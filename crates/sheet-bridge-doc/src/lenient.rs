//! Tolerant readers for snapshot fields
//!
//! Snapshots are written by other tools and by hand. A field holding a value
//! of the wrong kind degrades to its "absent" reading instead of failing the
//! whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::cell::{BooleanNumber, CellScalar, CellValueType};

/// Read `t`: unknown codes and non-numeric values become no hint
pub(crate) fn type_hint<'de, D>(deserializer: D) -> Result<Option<CellValueType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }

    let code = raw
        .as_f64()
        .filter(|n| n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(n));
    match code.map(|n| CellValueType::try_from(n as u8)) {
        Some(Ok(hint)) => Ok(Some(hint)),
        Some(Err(e)) => {
            log::debug!("ignoring cell type hint: {}", e);
            Ok(None)
        }
        None => {
            log::debug!("ignoring non-numeric cell type hint {}", raw);
            Ok(None)
        }
    }
}

/// Read `v`: objects and arrays become no value
pub(crate) fn scalar<'de, D>(deserializer: D) -> Result<Option<CellScalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Bool(b) => Some(CellScalar::Boolean(b)),
        Value::Number(n) => n.as_f64().map(CellScalar::Number),
        Value::String(s) => Some(CellScalar::String(s)),
        other => {
            log::debug!("ignoring non-scalar cell value {}", other);
            None
        }
    })
}

/// Read a text offset: any JSON number, truncated toward zero
pub(crate) fn offset<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    match raw.as_i64().or_else(|| raw.as_f64().map(|n| n.trunc() as i64)) {
        Some(offset) => Ok(offset),
        None => {
            log::debug!("ignoring non-numeric text offset {}", raw);
            Ok(0)
        }
    }
}

/// Read a 0/1 flag: any non-zero number or `true` is set
pub(crate) fn flag(raw: &Value) -> BooleanNumber {
    match raw {
        Value::Bool(b) => BooleanNumber::from(*b),
        Value::Number(n) => BooleanNumber::from(n.as_f64().map_or(false, |n| n != 0.0)),
        Value::Null => BooleanNumber::False,
        other => {
            log::debug!("ignoring non-numeric flag {}", other);
            BooleanNumber::False
        }
    }
}
