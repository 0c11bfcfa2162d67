//! Turning UI requests into text edits

pub mod batch;
pub mod lifecycle;
pub mod rename;
pub mod translator;

use serde::{Deserialize, Serialize};

use crate::types::TextRange;

/// Replace `range` with `new_text`; an empty range is an insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: TextRange,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(range: TextRange, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    pub fn insert(range: TextRange, new_text: impl Into<String>) -> Self {
        Self::replace(TextRange::empty(range.end), new_text)
    }

    pub fn is_insertion(&self) -> bool {
        self.range.is_empty()
    }
}

pub use batch::apply_edits;
pub use lifecycle::find_update_method;
pub use rename::rename_edits;
pub use translator::translate;
