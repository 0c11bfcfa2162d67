//! User prompt interface

/// Collects free-text input from the user, such as a new property name
pub trait RenamePrompt {
    /// Ask for a new name, pre-filled with `current`. `None` means cancelled.
    fn ask(&mut self, message: &str, current: &str) -> Option<String>;
}

/// Prompt that always answers with a fixed value, for scripted renames
#[derive(Debug, Clone)]
pub struct FixedAnswer(pub Option<String>);

impl RenamePrompt for FixedAnswer {
    fn ask(&mut self, _message: &str, _current: &str) -> Option<String> {
        self.0.clone()
    }
}
