//! Ordered index of class declarations in a script

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::utils::LineIndex;

static CLASS_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+([a-zA-Z0-9_]+)\s*\(").unwrap());
static CLASS_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^class\s+([a-zA-Z0-9_]+)\s*\(\s*([a-zA-Z0-9_\.]+)\s*\):").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    pub name: String,
    /// Declared parent type, present only for a complete `class Name(Parent):` header
    pub parent: Option<String>,
    pub offset: usize,
    pub line: u32,
    /// Byte span from this declaration to the next one or end of text
    pub span: Range<usize>,
}

impl ClassEntry {
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.span.clone()]
    }
}

/// Every `class Name(` occurrence in source order.
///
/// Built once per scan; passes that need "the class around this position"
/// look it up here instead of re-scanning the text.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    entries: Vec<ClassEntry>,
}

impl ClassIndex {
    pub fn build(text: &str, lines: &LineIndex) -> Self {
        let starts: Vec<(usize, String)> = CLASS_START_RE
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some((whole.start(), caps[1].to_string()))
            })
            .collect();

        let entries = starts
            .iter()
            .enumerate()
            .map(|(i, (offset, name))| {
                let end = starts.get(i + 1).map(|(next, _)| *next).unwrap_or(text.len());
                let parent = CLASS_DECL_RE
                    .captures(&text[*offset..])
                    .map(|caps| caps[2].to_string());
                ClassEntry {
                    name: name.clone(),
                    parent,
                    offset: *offset,
                    line: lines.line_of(*offset),
                    span: *offset..end,
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[ClassEntry] {
        &self.entries
    }

    /// Classes with a full `class Name(Parent):` header
    pub fn declarations(&self) -> impl Iterator<Item = &ClassEntry> {
        self.entries.iter().filter(|entry| entry.parent.is_some())
    }

    /// The last class declared on or before `line`
    pub fn enclosing(&self, line: u32) -> Option<&ClassEntry> {
        self.entries.iter().rev().find(|entry| entry.line <= line)
    }
}
