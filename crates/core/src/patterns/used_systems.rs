use regex::Regex;
use std::sync::LazyLock;

static SYSTEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"self\.e\s*\[\s*['"]([^'"]+)['"]\s*\]"#).unwrap());

/// Distinct `self.e['System']` keys referenced in `class_text`, in first-seen order
pub fn collect_used_systems(class_text: &str) -> Vec<String> {
    let mut systems: Vec<String> = Vec::new();
    for caps in SYSTEM_RE.captures_iter(class_text) {
        let key = &caps[1];
        if !systems.iter().any(|s| s == key) {
            systems.push(key.to_string());
        }
    }
    systems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_distinct_systems_in_order() {
        let text = r#"
        self.e['Input'].pressed('jump')
        self.e [ "Renderer" ].blit(self.img)
        if self.e['Input'].held('left'):
            self.e['Window'].dt
"#;
        assert_eq!(collect_used_systems(text), vec!["Input", "Renderer", "Window"]);
    }

    #[test]
    fn test_ignores_other_subscripts() {
        assert!(collect_used_systems("self.elements['Input']\nother.e['Game']").is_empty());
    }
}
