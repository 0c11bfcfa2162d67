//! Indentation-based method body detection

/// End offset (exclusive) of the method whose signature contains `signature`.
///
/// The body continues while non-blank, non-comment lines are indented
/// strictly deeper than the signature line. Blank and comment lines are
/// taken along without ending the body, so trailing ones are included.
pub fn method_body_end(text: &str, signature: usize) -> usize {
    let line_start = text[..signature].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let base_indent = indent_width(line_of(text, line_start));

    let mut end = line_start + line_of(text, line_start).len();
    let mut cursor = end;

    while cursor < text.len() {
        // skip the newline ending the previous line
        let next_start = cursor + 1;
        if next_start > text.len() {
            break;
        }
        let line = line_of(text, next_start);
        let trimmed = line.trim();

        if !trimmed.is_empty() && !trimmed.starts_with('#') && indent_width(line) <= base_indent {
            break;
        }

        end = next_start + line.len();
        cursor = end;
    }

    end
}

fn line_of(text: &str, start: usize) -> &str {
    let rest = &text[start..];
    match rest.find('\n') {
        Some(i) => &rest[..i],
        None => rest,
    }
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_stops_at_sibling_method() {
        let text = "class A(B):\n    def __init__(self):\n        self.x = 1\n\n        # note\n        self.y = 2\n    def update(self):\n        pass\n";
        let signature = text.find("def __init__").unwrap();
        let end = method_body_end(text, signature);

        let body = &text[signature..end];
        assert!(body.ends_with("self.y = 2"));
        assert!(!body.contains("update"));
    }

    #[test]
    fn test_trailing_blank_lines_are_included() {
        let text = "    def init(self):\n        self.a = 1\n\n    def other(self):\n";
        let end = method_body_end(text, 4);
        assert_eq!(&text[4..end], "def init(self):\n        self.a = 1\n");
    }

    #[test]
    fn test_shallow_comment_does_not_end_body() {
        let text = "class A(B):\n    def __init__(self):\n        self.a = 1\n# note\n    # aside\n        self.b = 2\n    def update(self):\n";
        let signature = text.find("def __init__").unwrap();
        let body = &text[signature..method_body_end(text, signature)];

        assert!(body.contains("# note"));
        assert!(body.ends_with("self.b = 2"));
    }

    #[test]
    fn test_crlf_lines() {
        let text = "    def __init__(self):\r\n        self.a = 1\r\n\r\n        self.b = 2\r\n    def update(self):\r\n";
        let body = &text[4..method_body_end(text, 4)];

        assert!(body.ends_with("self.b = 2\r"));
        assert!(!body.contains("update"));
    }

    #[test]
    fn test_body_runs_to_end_of_text() {
        let text = "def __init__(self):\n    self.a = 1";
        assert_eq!(method_body_end(text, 0), text.len());
    }
}
