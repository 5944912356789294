//! Rich text payload of a cell (`p`)

use serde::{Deserialize, Serialize};

use crate::cell::BooleanNumber;

/// End-of-paragraph marker terminating every `dataStream`
pub const PARAGRAPH_END: char = '\r';

/// Embedded document holding a cell's styled text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub document_style: DocumentStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<DocumentBody>,
}

/// Page-level document settings; cells never set any
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentStyle {}

/// Text content of an embedded document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentBody {
    /// Concatenated text, terminated by [`PARAGRAPH_END`]
    #[serde(default)]
    pub data_stream: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_runs: Option<Vec<TextRun>>,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl DocumentBody {
    /// The stream without its trailing paragraph marker
    pub fn text(&self) -> &str {
        self.data_stream
            .strip_suffix(PARAGRAPH_END)
            .unwrap_or(&self.data_stream)
    }

    /// Recorded runs, empty when none were recorded
    pub fn runs(&self) -> &[TextRun] {
        self.text_runs.as_deref().unwrap_or(&[])
    }
}

/// A styled range `[start, end)` of the data stream
///
/// Offsets count UTF-16 code units, matching how the editor indexes text.
/// They are signed and read from any JSON number, truncated, so that
/// malformed snapshots still deserialize. Decoding clamps them to the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    #[serde(rename = "st", default, deserialize_with = "crate::lenient::offset")]
    pub start: i64,
    #[serde(rename = "ed", default, deserialize_with = "crate::lenient::offset")]
    pub end: i64,
    #[serde(rename = "ts", default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl TextRun {
    pub fn new(start: i64, end: i64, style: Option<TextStyle>) -> Self {
        Self { start, end, style }
    }
}

/// Paragraph boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default, deserialize_with = "crate::lenient::offset")]
    pub start_index: i64,
}

/// Text style subset carried by runs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(rename = "ff", default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(rename = "fs", default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(rename = "bl", default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<BooleanNumber>,
    #[serde(rename = "it", default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<BooleanNumber>,
    #[serde(rename = "ul", default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<TextDecoration>,
    #[serde(rename = "cl", default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorStyle>,
}

impl TextStyle {
    /// Check if no attribute is set
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.font_size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.color.is_none()
    }
}

/// Line decoration (underline, strikethrough)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextDecoration {
    /// Whether the decoration is shown
    #[serde(rename = "s", default)]
    pub show: BooleanNumber,
}

/// Color as `#RRGGBB`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_round_trips_editor_json() {
        let json = serde_json::json!({
            "id": "doc-1",
            "documentStyle": {},
            "body": {
                "dataStream": "Hi bold\r",
                "textRuns": [{ "st": 3, "ed": 7, "ts": { "bl": 1, "cl": { "rgb": "#FF0000" } } }],
                "paragraphs": [{ "startIndex": 0 }]
            }
        });

        let doc: DocumentData = serde_json::from_value(json.clone()).unwrap();
        let body = doc.body.as_ref().unwrap();
        assert_eq!(body.text(), "Hi bold");
        assert_eq!(body.runs().len(), 1);
        assert_eq!(body.runs()[0].style.as_ref().unwrap().bold, Some(BooleanNumber::True));

        assert_eq!(serde_json::to_value(&doc).unwrap(), json);
    }

    #[test]
    fn test_offsets_read_from_any_number() {
        let json = r#"[
            { "st": 1.0, "ed": 4.9 },
            { "st": -2, "ed": 1e3 },
            { "st": "3", "ed": null },
            { "ed": 2 }
        ]"#;
        let runs: Vec<TextRun> = serde_json::from_str(json).unwrap();
        let offsets: Vec<(i64, i64)> = runs.iter().map(|r| (r.start, r.end)).collect();
        assert_eq!(offsets, vec![(1, 4), (-2, 1000), (0, 0), (0, 2)]);

        let paragraph: Paragraph = serde_json::from_str(r#"{ "startIndex": 5.0 }"#).unwrap();
        assert_eq!(paragraph.start_index, 5);
    }

    #[test]
    fn test_flags_read_tolerantly() {
        let style: TextStyle =
            serde_json::from_str(r#"{ "bl": 2, "it": 0, "ul": { "s": true } }"#).unwrap();
        assert_eq!(style.bold, Some(BooleanNumber::True));
        assert_eq!(style.italic, Some(BooleanNumber::False));
        assert_eq!(style.underline.map(|u| u.show), Some(BooleanNumber::True));
    }

    #[test]
    fn test_text_strips_single_marker() {
        let body = DocumentBody {
            data_stream: "a\r\r".into(),
            ..Default::default()
        };
        assert_eq!(body.text(), "a\r");
        assert!(body.runs().is_empty());
    }

    #[test]
    fn test_empty_style() {
        assert!(TextStyle::default().is_empty());
        let style = TextStyle {
            italic: Some(BooleanNumber::False),
            ..Default::default()
        };
        assert!(!style.is_empty());
    }
}
