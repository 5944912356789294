// Property-based tests for the rich text codec.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;
use sheet_bridge::doc::{BooleanNumber, DocumentBody, Paragraph, TextRun, TextStyle};
use sheet_bridge::{decode_runs, encode_rich_text, RichText, RunFont};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Arbitrary run offsets, including negative and past-the-end values.
fn arb_run() -> impl Strategy<Value = TextRun> {
    (-5i64..40, -5i64..40, any::<bool>()).prop_map(|(start, end, bold)| {
        let style = bold.then(|| TextStyle {
            bold: Some(BooleanNumber::True),
            ..Default::default()
        });
        TextRun::new(start, end, style)
    })
}

/// Arbitrary text, mixing ASCII with characters outside the BMP.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => r"[a-z ]{0,30}",
        1 => r"[a-zé😀]{0,12}",
    ]
}

fn arb_font() -> impl Strategy<Value = Option<RunFont>> {
    prop_oneof![
        Just(None),
        Just(Some(RunFont::new())),
        Just(Some(RunFont::new().with_bold(true))),
        Just(Some(RunFont::new().with_italic(false).with_size(9.0))),
    ]
}

fn body(text: &str, runs: Vec<TextRun>) -> DocumentBody {
    DocumentBody {
        data_stream: format!("{}\r", text),
        text_runs: Some(runs),
        paragraphs: vec![Paragraph { start_index: 0 }],
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    /// Decoded runs are contiguous and cover the text exactly.
    #[test]
    fn decoded_runs_cover_text(text in arb_text(), runs in prop::collection::vec(arb_run(), 0..8)) {
        let len = text.encode_utf16().count();
        let decoded = decode_runs(&body(&text, runs));

        if len == 0 {
            prop_assert!(decoded.is_empty());
        } else {
            prop_assert_eq!(decoded.first().map(|r| r.start), Some(0));
            prop_assert_eq!(decoded.last().map(|r| r.end), Some(len));
            for pair in decoded.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }
            for run in &decoded {
                prop_assert!(run.start < run.end);
            }
        }
    }

    /// Encoded runs stay inside the stream and never overlap.
    #[test]
    fn encoded_runs_are_ordered(parts in prop::collection::vec((arb_text(), arb_font()), 0..6)) {
        let mut rich = RichText::default();
        for (text, font) in parts {
            rich.push(text, font);
        }

        let doc = encode_rich_text(&rich, "doc".to_string());
        let body = doc.body.unwrap();
        let text = rich.plain_text();
        prop_assert_eq!(&body.data_stream, &format!("{}\r", text));

        let len = text.encode_utf16().count() as i64;
        let mut last_end = 0;
        for run in body.runs() {
            prop_assert!(run.start >= last_end);
            prop_assert!(run.start < run.end);
            prop_assert!(run.end <= len);
            last_end = run.end;
        }
    }

    /// Decoding an encoded document gives back the same text.
    #[test]
    fn encode_decode_preserves_text(parts in prop::collection::vec((arb_text(), arb_font()), 1..6)) {
        let mut rich = RichText::default();
        for (text, font) in parts {
            rich.push(text, font);
        }

        let doc = encode_rich_text(&rich, "doc".to_string());
        let decoded = sheet_bridge::decode_rich_text(&doc).unwrap();
        prop_assert_eq!(decoded.plain_text(), rich.plain_text());
    }
}
