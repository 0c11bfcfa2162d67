use crate::{
    edit::TextEdit,
    error::{Error, Result},
};

/// Apply a batch of edits to `text` atomically.
///
/// All ranges refer to the original `text`. If any range is out of bounds,
/// splits a UTF-8 character or overlaps another edit, nothing is applied.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> Result<String> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|edit| (edit.range.start.offset, edit.range.end.offset));

    for edit in &ordered {
        let (start, end) = (edit.range.start.offset, edit.range.end.offset);
        if start > end || end > text.len() {
            return Err(Error::EditError(format!(
                "range {start}..{end} is outside the document ({} bytes)",
                text.len()
            )));
        }
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Err(Error::EditError(format!(
                "range {start}..{end} does not fall on character boundaries"
            )));
        }
    }

    for pair in ordered.windows(2) {
        if pair[0].range.overlaps(&pair[1].range) {
            return Err(Error::EditError(format!(
                "edits at {}..{} and {}..{} overlap",
                pair[0].range.start.offset,
                pair[0].range.end.offset,
                pair[1].range.start.offset,
                pair[1].range.end.offset
            )));
        }
    }

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    for edit in ordered {
        result.push_str(&text[cursor..edit.range.start.offset]);
        result.push_str(&edit.new_text);
        cursor = edit.range.end.offset;
    }
    result.push_str(&text[cursor..]);

    Ok(result)
}
