use regex::Regex;
use tracing::debug;

use crate::{edit::TextEdit, utils::LineIndex};

/// Edits renaming every `self.<property>` access in `text` to `self.<new_name>`.
///
/// Whole-document and class-agnostic. An empty or unchanged name produces no
/// edits.
pub fn rename_edits(text: &str, property: &str, new_name: &str) -> Vec<TextEdit> {
    let new_name = new_name.trim();
    if new_name.is_empty() || new_name == property {
        return Vec::new();
    }

    let Ok(re) = Regex::new(&format!(r"self\.{}\b", regex::escape(property))) else {
        return Vec::new();
    };

    let lines = LineIndex::new(text);
    let edits: Vec<TextEdit> = re
        .find_iter(text)
        .map(|m| TextEdit::replace(lines.range(text, m.start(), m.end()), format!("self.{new_name}")))
        .collect();

    debug!("rename self.{} -> self.{}: {} occurrences", property, new_name, edits.len());
    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::apply_edits;

    #[test]
    fn test_renames_whole_word_accesses() {
        let text = "self.speed = 1\nself.speed_max = 2\nprint(self.speed)\n";
        let edits = rename_edits(text, "speed", "velocity");

        assert_eq!(edits.len(), 2);
        assert_eq!(
            apply_edits(text, &edits).unwrap(),
            "self.velocity = 1\nself.speed_max = 2\nprint(self.velocity)\n"
        );
    }

    #[test]
    fn test_noop_names() {
        assert!(rename_edits("self.a = 1", "a", "a").is_empty());
        assert!(rename_edits("self.a = 1", "a", "  ").is_empty());
        assert!(rename_edits("self.a = 1", "b", "c").is_empty());
    }
}
