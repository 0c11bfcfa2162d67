use regex::Regex;
use std::sync::LazyLock;

use crate::{types::Position, utils::LineIndex};

static UPDATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+update\s*\(\s*self").unwrap());

/// Position of the first `def update(self` after `class <class_name>(`
pub fn find_update_method(text: &str, class_name: &str) -> Option<Position> {
    let class_re = Regex::new(&format!(r"class\s+{}\s*\(", regex::escape(class_name))).ok()?;
    let class_start = class_re.find(text)?.start();
    let update = UPDATE_RE.find(&text[class_start..])?;

    let offset = class_start + update.start();
    Some(LineIndex::new(text).position_at(text, offset))
}
