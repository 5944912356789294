//! Rich text codec
//!
//! Translates between run-list rich text ([`RichText`]) and the editor's
//! embedded document form: one data stream terminated by `'\r'` plus a list
//! of styled `[start, end)` ranges. Offsets count UTF-16 code units because
//! that is how the editor indexes its text.

use sheet_bridge_core::{Color, RichText, RichTextRun, RunFont, Underline};
use sheet_bridge_doc::{
    BooleanNumber, ColorStyle, DocumentBody, DocumentData, DocumentStyle, Paragraph, TextDecoration,
    TextRun, TextStyle, PARAGRAPH_END,
};

/// One piece of a decoded data stream
///
/// `start` and `end` are UTF-16 offsets into the stream without its
/// paragraph marker.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRun {
    pub start: usize,
    pub end: usize,
    pub style: Option<TextStyle>,
}

impl DecodedRun {
    fn unstyled(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            style: None,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Encode rich text as an embedded document
///
/// Only non-empty runs whose font carries at least one mappable attribute
/// produce a text run; the rest contribute text alone.
pub fn encode_rich_text(rich: &RichText, id: String) -> DocumentData {
    let mut stream = String::new();
    let mut text_runs = Vec::new();
    let mut offset: i64 = 0;

    for run in &rich.runs {
        stream.push_str(&run.text);
        let start = offset;
        offset += run.text.encode_utf16().count() as i64;
        if offset == start {
            continue;
        }
        if let Some(style) = run.font.as_ref().and_then(font_to_text_style) {
            text_runs.push(TextRun::new(start, offset, Some(style)));
        }
    }
    stream.push(PARAGRAPH_END);

    DocumentData {
        id,
        document_style: DocumentStyle::default(),
        body: Some(DocumentBody {
            data_stream: stream,
            text_runs: (!text_runs.is_empty()).then_some(text_runs),
            paragraphs: vec![Paragraph { start_index: 0 }],
        }),
    }
}

/// Split a body's text into contiguous runs
///
/// The result is sorted, non-overlapping and covers the whole text. Gaps
/// between recorded runs become unstyled runs; offsets outside the text are
/// clamped and overlapping runs are cut at the previous run's end.
pub fn decode_runs(body: &DocumentBody) -> Vec<DecodedRun> {
    let len = body.text().encode_utf16().count();
    split_runs(body.runs(), len)
}

fn split_runs(runs: &[TextRun], len: usize) -> Vec<DecodedRun> {
    if len == 0 {
        return Vec::new();
    }
    if runs.is_empty() {
        return vec![DecodedRun::unstyled(0, len)];
    }

    let clamp = |offset: i64| offset.clamp(0, len as i64) as usize;

    let mut sorted: Vec<&TextRun> = runs.iter().collect();
    sorted.sort_by_key(|run| run.start);

    let mut decoded = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut last_end = 0;
    for run in sorted {
        let start = clamp(run.start);
        let end = clamp(run.end);

        if start > last_end {
            decoded.push(DecodedRun::unstyled(last_end, start));
            last_end = start;
        }
        if end > last_end {
            decoded.push(DecodedRun {
                start: last_end,
                end,
                style: run.style.clone(),
            });
            last_end = end;
        }
    }
    if last_end < len {
        decoded.push(DecodedRun::unstyled(last_end, len));
    }

    decoded
}

/// Decode an embedded document into rich text
///
/// Returns `None` when the document has no body or an empty stream. A stream
/// holding only the paragraph marker decodes to rich text with no runs.
pub fn decode_rich_text(doc: &DocumentData) -> Option<RichText> {
    let body = doc.body.as_ref()?;
    if body.data_stream.is_empty() {
        return None;
    }

    let units: Vec<u16> = body.text().encode_utf16().collect();
    let runs = split_runs(body.runs(), units.len())
        .into_iter()
        .map(|run| RichTextRun {
            text: String::from_utf16_lossy(&units[run.start..run.end]),
            font: run.style.as_ref().and_then(text_style_to_font),
        })
        .collect();

    Some(RichText::new(runs))
}

/// Map a run font onto a text style, `None` when nothing maps
///
/// Theme, indexed and automatic colors have no explicit RGB value and are
/// left out.
pub fn font_to_text_style(font: &RunFont) -> Option<TextStyle> {
    let style = TextStyle {
        font_family: font.name.clone(),
        font_size: font.size,
        bold: font.bold.map(BooleanNumber::from),
        italic: font.italic.map(BooleanNumber::from),
        underline: font
            .underline
            .filter(Underline::is_drawn)
            .map(|_| TextDecoration {
                show: BooleanNumber::True,
            }),
        color: font
            .color
            .as_ref()
            .and_then(Color::to_css_hex)
            .map(|rgb| ColorStyle { rgb: Some(rgb) }),
    };

    (!style.is_empty()).then_some(style)
}

/// Map a text style back onto a run font, `None` when nothing maps
pub fn text_style_to_font(style: &TextStyle) -> Option<RunFont> {
    let color = style
        .color
        .as_ref()
        .and_then(|c| c.rgb.as_deref())
        .and_then(|rgb| {
            let parsed = Color::from_argb_hex(rgb);
            if parsed.is_none() {
                log::debug!("ignoring unparseable run color {:?}", rgb);
            }
            parsed
        });

    let font = RunFont {
        name: style.font_family.clone(),
        size: style.font_size,
        bold: style.bold.map(BooleanNumber::is_true),
        italic: style.italic.map(BooleanNumber::is_true),
        underline: style
            .underline
            .filter(|ul| ul.show.is_true())
            .map(|_| Underline::Single),
        color,
    };

    (!font.is_empty()).then_some(font)
}
