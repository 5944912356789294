//! Identifier generation for converted workbooks, sheets and rich text documents
//!
//! Ids are informational: they are unique within one conversion call and
//! nothing more. Callers that need reproducible output (tests, snapshot
//! diffs) pass [`SequentialIds`] or a closure.

use chrono::Utc;

/// What an id is being generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Workbook,
    /// Sheet at the given 0-based position in the source
    Sheet(usize),
    /// Rich text payload of a cell
    Document,
}

/// Source of ids for one conversion
pub trait IdGenerator {
    fn next_id(&mut self, kind: IdKind) -> String;
}

impl<F> IdGenerator for F
where
    F: FnMut(IdKind) -> String,
{
    fn next_id(&mut self, kind: IdKind) -> String {
        self(kind)
    }
}

/// Default generator: creation timestamp plus a monotonic counter
#[derive(Debug, Clone)]
pub struct TimestampIds {
    timestamp: i64,
    documents: u64,
}

impl TimestampIds {
    /// Stamp ids with the current time
    pub fn new() -> Self {
        Self::at(Utc::now().timestamp_millis())
    }

    /// Stamp ids with a fixed millisecond timestamp
    pub fn at(timestamp: i64) -> Self {
        Self {
            timestamp,
            documents: 0,
        }
    }
}

impl Default for TimestampIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        match kind {
            IdKind::Workbook => format!("workbook-{}", self.timestamp),
            IdKind::Sheet(index) => format!("sheet-{}-{}", index, self.timestamp),
            IdKind::Document => {
                self.documents += 1;
                format!("doc-{}-{}", self.timestamp, self.documents)
            }
        }
    }
}

/// Deterministic generator: "workbook", "sheet-{index}", "doc-{n}"
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    documents: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        match kind {
            IdKind::Workbook => "workbook".to_string(),
            IdKind::Sheet(index) => format!("sheet-{}", index),
            IdKind::Document => {
                self.documents += 1;
                format!("doc-{}", self.documents)
            }
        }
    }
}
