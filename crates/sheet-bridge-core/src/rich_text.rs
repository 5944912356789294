//! Rich (multi-style) text values

use crate::style::RunFont;

/// Styled text as an ordered list of runs
///
/// The cell text is the concatenation of all run texts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichText {
    pub runs: Vec<RichTextRun>,
}

impl RichText {
    /// Create rich text from runs
    pub fn new(runs: Vec<RichTextRun>) -> Self {
        Self { runs }
    }

    /// Append a run
    pub fn push<S: Into<String>>(&mut self, text: S, font: Option<RunFont>) {
        self.runs.push(RichTextRun {
            text: text.into(),
            font,
        });
    }

    /// Builder form of [`RichText::push`]
    pub fn with_run<S: Into<String>>(mut self, text: S, font: Option<RunFont>) -> Self {
        self.push(text, font);
        self
    }

    /// Concatenated text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if there are no runs
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// One run of rich text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichTextRun {
    pub text: String,
    /// Font overrides for this run; `None` means unstyled
    pub font: Option<RunFont>,
}
