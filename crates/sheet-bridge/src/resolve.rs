//! Reverse cell value resolution

use sheet_bridge_core::CellValue;
use sheet_bridge_doc::{CellData as DocCell, CellScalar, CellValueType};

use crate::rich_text::decode_rich_text;

/// Resolve a document model cell into a cell value, `None` for no value
///
/// Rich text wins when its payload decodes to at least one run. Otherwise a
/// formula keeps its text with `v` as the cached result, and plain values
/// follow their type hint.
pub fn resolve_cell(cell: &DocCell) -> Option<CellValue> {
    if let Some(rich) = cell.rich_text.as_ref().and_then(decode_rich_text) {
        if !rich.is_empty() {
            return Some(CellValue::RichText(rich));
        }
    }

    let value = cell.value.as_ref()?;
    let formula = cell.formula_text();
    if let Some(formula) = formula {
        return Some(CellValue::formula_with_result(formula, native_value(value)));
    }
    if value.is_empty_string() {
        return None;
    }

    Some(match cell.value_type {
        Some(CellValueType::Boolean) => CellValue::Boolean(truthy(value)),
        Some(CellValueType::Number) => CellValue::Number(numeric(value)),
        Some(CellValueType::String) | Some(CellValueType::ForceString) => {
            CellValue::string(value.to_string())
        }
        None => native_value(value),
    })
}

/// The value as stored, without any hint applied
fn native_value(value: &CellScalar) -> CellValue {
    match value {
        CellScalar::Boolean(b) => CellValue::Boolean(*b),
        CellScalar::Number(n) => CellValue::Number(*n),
        CellScalar::String(s) => CellValue::string(s.as_str()),
    }
}

/// Truthiness: non-zero numbers and non-empty strings are true
fn truthy(value: &CellScalar) -> bool {
    match value {
        CellScalar::Boolean(b) => *b,
        CellScalar::Number(n) => *n != 0.0 && !n.is_nan(),
        CellScalar::String(s) => !s.is_empty(),
    }
}

/// Numeric reading: blank strings are zero, unparseable ones NaN
fn numeric(value: &CellScalar) -> f64 {
    match value {
        CellScalar::Boolean(b) => f64::from(u8::from(*b)),
        CellScalar::Number(n) => *n,
        CellScalar::String(s) => parse_number(s),
    }
}

/// Parse a string the way the editor's scripting runtime does
///
/// Accepts decimal literals, `Infinity` with an optional sign, and unsigned
/// `0x`/`0o`/`0b` integers. Rust-only spellings such as `inf` or `NaN`
/// read as NaN.
fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    match s {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    if s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        s.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheet_bridge_core::{RichText, RunFont};
    use sheet_bridge_doc::{
        BooleanNumber, DocumentBody, DocumentData, Paragraph, TextRun, TextStyle,
    };

    fn hinted(value: CellScalar, hint: Option<CellValueType>) -> DocCell {
        DocCell {
            value: Some(value),
            value_type: hint,
            ..Default::default()
        }
    }

    fn doc(stream: &str, runs: Option<Vec<TextRun>>) -> DocumentData {
        DocumentData {
            id: "d".into(),
            body: Some(DocumentBody {
                data_stream: stream.into(),
                text_runs: runs,
                paragraphs: vec![Paragraph { start_index: 0 }],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(resolve_cell(&DocCell::number(3.0)), Some(CellValue::Number(3.0)));
        assert_eq!(resolve_cell(&DocCell::boolean(true)), Some(CellValue::Boolean(true)));
        assert_eq!(resolve_cell(&DocCell::string("x")), Some(CellValue::string("x")));
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(resolve_cell(&DocCell::default()), None);
        assert_eq!(resolve_cell(&DocCell::string("")), None);
    }

    #[test]
    fn test_formula_keeps_cached_value() {
        let cell = DocCell::number(42.0).with_formula("=SUM(A1:A2)");
        assert_eq!(
            resolve_cell(&cell),
            Some(CellValue::formula_with_result("=SUM(A1:A2)", CellValue::Number(42.0)))
        );

        let cell = DocCell::string("").with_formula("=A1");
        assert_eq!(
            resolve_cell(&cell),
            Some(CellValue::formula_with_result("=A1", CellValue::string("")))
        );

        let cell = DocCell::number(1.0).with_formula("");
        assert_eq!(resolve_cell(&cell), Some(CellValue::Number(1.0)));
    }

    #[test]
    fn test_boolean_hint_uses_truthiness() {
        let hint = Some(CellValueType::Boolean);
        assert_eq!(resolve_cell(&hinted(1.0.into(), hint)), Some(CellValue::Boolean(true)));
        assert_eq!(resolve_cell(&hinted(0.0.into(), hint)), Some(CellValue::Boolean(false)));
        assert_eq!(resolve_cell(&hinted(f64::NAN.into(), hint)), Some(CellValue::Boolean(false)));
        assert_eq!(resolve_cell(&hinted("no".into(), hint)), Some(CellValue::Boolean(true)));
    }

    #[test]
    fn test_number_hint_parses() {
        let hint = Some(CellValueType::Number);
        assert_eq!(resolve_cell(&hinted(" 12.5 ".into(), hint)), Some(CellValue::Number(12.5)));
        assert_eq!(resolve_cell(&hinted(true.into(), hint)), Some(CellValue::Number(1.0)));

        let parsed = resolve_cell(&hinted("abc".into(), hint)).and_then(|v| v.as_number());
        assert!(parsed.unwrap().is_nan());
    }

    #[test]
    fn test_number_hint_follows_script_parsing() {
        assert_eq!(parse_number("0x10"), 16.0);
        assert_eq!(parse_number("0B101"), 5.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number(" -Infinity "), f64::NEG_INFINITY);
        assert_eq!(parse_number("+Infinity"), f64::INFINITY);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("\t"), 0.0);

        for text in ["inf", "infinity", "nan", "NaN", "-0x10", "0x", "0xG", "1_000", "1e", "."] {
            assert!(parse_number(text).is_nan(), "{:?}", text);
        }

        let hint = Some(CellValueType::Number);
        assert_eq!(resolve_cell(&hinted("0x1F".into(), hint)), Some(CellValue::Number(31.0)));
    }

    #[test]
    fn test_string_hints_stringify() {
        assert_eq!(
            resolve_cell(&hinted(7.0.into(), Some(CellValueType::String))),
            Some(CellValue::string("7"))
        );
        assert_eq!(
            resolve_cell(&hinted(false.into(), Some(CellValueType::ForceString))),
            Some(CellValue::string("false"))
        );
    }

    #[test]
    fn test_no_hint_keeps_native_kind() {
        assert_eq!(resolve_cell(&hinted(2.0.into(), None)), Some(CellValue::Number(2.0)));
        assert_eq!(resolve_cell(&hinted(false.into(), None)), Some(CellValue::Boolean(false)));
        assert_eq!(resolve_cell(&hinted("2".into(), None)), Some(CellValue::string("2")));
    }

    #[test]
    fn test_rich_text_wins() {
        let style = TextStyle {
            bold: Some(BooleanNumber::True),
            ..Default::default()
        };
        let cell = DocCell::string("Hi bold")
            .with_rich_text(doc("Hi bold\r", Some(vec![TextRun::new(3, 7, Some(style))])));

        let expected = RichText::default()
            .with_run("Hi ", None)
            .with_run("bold", Some(RunFont::new().with_bold(true)));
        assert_eq!(resolve_cell(&cell), Some(CellValue::RichText(expected)));
    }

    #[test]
    fn test_blank_rich_text_falls_back_to_value() {
        let cell = DocCell::string("plain").with_rich_text(doc("\r", None));
        assert_eq!(resolve_cell(&cell), Some(CellValue::string("plain")));

        let cell = DocCell::string("").with_rich_text(DocumentData::default());
        assert_eq!(resolve_cell(&cell), None);
    }
}
