//! Maps a new value for a descriptor onto the minimal text replacement.
//!
//! Only the value part of a declaration is rewritten; the name, operator
//! and everything before them stay untouched. Ranges are never adjusted
//! afterwards: once an edit is applied, every descriptor of that document is
//! stale.

use crate::{
    edit::TextEdit,
    types::{FileKind, ParameterDescriptor, ParameterOrigin, Position, TextRange},
};

pub fn translate(descriptor: &ParameterDescriptor, kind: FileKind, new_value: &str) -> TextEdit {
    let text = &descriptor.text;
    match kind {
        FileKind::Script => match descriptor.origin {
            ParameterOrigin::Field => replace_after_prefix(descriptor, new_value),
            _ => {
                let start = text.find('=').map(|i| skip_blanks(text, i + 1)).unwrap_or(0);
                TextEdit::replace(value_range(descriptor, start), new_value)
            }
        },
        FileKind::Json => {
            let after_key = key_end(text).unwrap_or(0);
            let colon = text[after_key..].find(':').map(|i| after_key + i);
            replace_spaced(descriptor, colon, new_value)
        }
        FileKind::Shader => match text.find('=') {
            Some(equals) => replace_spaced(descriptor, Some(equals), new_value),
            None => TextEdit::insert(descriptor.range, format!(" = {new_value}")),
        },
    }
}

/// `self.<name> = ` is assumed verbatim in front of the value
fn replace_after_prefix(descriptor: &ParameterDescriptor, new_value: &str) -> TextEdit {
    let prefix_len = "self.".len() + descriptor.name.len() + " = ".len();
    let start = floor_char_boundary(&descriptor.text, prefix_len);
    TextEdit::replace(value_range(descriptor, start), new_value)
}

/// Everything after the one-byte separator at `separator` becomes a single
/// space plus the value. Without a separator the whole declaration is
/// replaced.
fn replace_spaced(descriptor: &ParameterDescriptor, separator: Option<usize>, new_value: &str) -> TextEdit {
    let start = separator.map(|i| i + 1).unwrap_or(0);
    TextEdit::replace(value_range(descriptor, start), format!(" {new_value}"))
}

/// Byte offset just past the closing quote of a leading `"key"`
fn key_end(text: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in text.char_indices().skip(1) {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return Some(i + 1),
            _ => escaped = false,
        }
    }
    None
}

fn skip_blanks(text: &str, from: usize) -> usize {
    let rest = &text[from..];
    from + rest.len() - rest.trim_start_matches([' ', '\t']).len()
}

fn value_range(descriptor: &ParameterDescriptor, text_offset: usize) -> TextRange {
    let start = advance(descriptor.range.start, &descriptor.text[..text_offset]);
    TextRange::new(start, descriptor.range.end)
}

/// Position reached after walking over `text` from `from`
fn advance(from: Position, text: &str) -> Position {
    let mut position = from;
    for c in text.chars() {
        if c == '\n' {
            position.line += 1;
            position.character = 0;
        } else {
            position.character += 1;
        }
    }
    position.offset += text.len();
    position
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
