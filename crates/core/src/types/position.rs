use serde::{Deserialize, Serialize};

/// A location in a text document.
///
/// `line` and `character` are 0-based; `character` counts Unicode scalar
/// values from the start of the line. `offset` is the byte offset into the
/// UTF-8 source and is what edits are computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, character: u32, offset: usize) -> Self {
        Self {
            line,
            character,
            offset,
        }
    }
}
