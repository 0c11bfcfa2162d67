use serde::{Deserialize, Serialize};

use super::position::Position;

/// Half-open span `[start, end)` of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Empty range sitting at `position`, used for insertions
    pub fn empty(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Two ranges overlap when they share at least one byte. Empty ranges
    /// only collide with ranges strictly around them.
    pub fn overlaps(&self, other: &TextRange) -> bool {
        self.start.offset < other.end.offset && other.start.offset < self.end.offset
    }

    /// The text covered by this range, if it is valid for `source`
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start.offset..self.end.offset)
    }
}
