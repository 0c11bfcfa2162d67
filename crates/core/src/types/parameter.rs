use serde::{Deserialize, Serialize};

use super::span::TextRange;

/// Inferred type of a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    String,
    Int,
    Float,
    Boolean,
    /// Tuple or list literal, shown verbatim and not editable
    Array,
    Unknown,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Int => "int",
            ParamType::Float => "float",
            ParamType::Boolean => "boolean",
            ParamType::Array => "array",
            ParamType::Unknown => "unknown",
        }
    }

    pub fn is_editable(&self) -> bool {
        !matches!(self, ParamType::Array)
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse category of a script class, derived from its parent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassType {
    Singleton,
    PhysicsEntity,
    Entity,
    Element,
    PygpenGame,
    Script,
}

impl ClassType {
    /// Parent type markers, most specific first. The first marker contained
    /// in the parent name decides the category.
    const MARKERS: [(&'static str, ClassType); 6] = [
        ("ElementSingleton", ClassType::Singleton),
        ("PhysicsEntity", ClassType::PhysicsEntity),
        ("Entity", ClassType::Entity),
        ("Element", ClassType::Element),
        ("PygpenGame", ClassType::PygpenGame),
        ("GameScript", ClassType::Script),
    ];

    pub fn from_parent(parent: &str) -> Option<Self> {
        Self::MARKERS
            .iter()
            .find(|(marker, _)| parent.contains(marker))
            .map(|(_, class_type)| *class_type)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassType::Singleton => "Singleton",
            ClassType::PhysicsEntity => "PhysicsEntity",
            ClassType::Entity => "Entity",
            ClassType::Element => "Element",
            ClassType::PygpenGame => "PygpenGame",
            ClassType::Script => "Script",
        }
    }
}

/// The extraction pass a descriptor came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterOrigin {
    /// Top-level `UPPER_SNAKE = value` constant
    Config,
    /// `self.field = value` inside a constructor
    Field,
    /// `name=value` argument of an engine init call
    InitArg,
    /// Boolean or numeric JSON leaf
    JsonLeaf,
    /// Scalar shader uniform
    Uniform,
}

/// One editable value discovered in a document.
///
/// Descriptors are only valid for the exact text they were extracted from.
/// Once that text changes, throw the whole list away and extract again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub value: String,
    pub original_value: String,
    pub param_type: ParamType,
    pub range: TextRange,
    pub line: u32,
    /// Exact source text covered by `range`
    pub text: String,
    pub method: String,
    pub class_name: String,
    pub folder: String,
    pub origin: ParameterOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_type: Option<ClassType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_update_method: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub used_systems: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_folder: Option<String>,
}

impl ParameterDescriptor {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        param_type: ParamType,
        range: TextRange,
        text: impl Into<String>,
        origin: ParameterOrigin,
    ) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            display_name: None,
            original_value: value.clone(),
            value,
            param_type,
            line: range.start.line,
            range,
            text: text.into(),
            method: String::new(),
            class_name: String::new(),
            folder: String::new(),
            origin,
            class_type: None,
            has_update_method: None,
            used_systems: Vec::new(),
            image_folder: None,
        }
    }

    pub fn with_scope(mut self, class_name: impl Into<String>, method: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self.method = method.into();
        self
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_type_prefers_specific_marker() {
        assert_eq!(
            ClassType::from_parent("pp.PhysicsEntity"),
            Some(ClassType::PhysicsEntity)
        );
        assert_eq!(
            ClassType::from_parent("pp.ElementSingleton"),
            Some(ClassType::Singleton)
        );
        assert_eq!(ClassType::from_parent("pp.Entity"), Some(ClassType::Entity));
        assert_eq!(
            ClassType::from_parent("pp.GameScript"),
            Some(ClassType::Script)
        );
        assert_eq!(ClassType::from_parent("object"), None);
    }

    #[test]
    fn test_param_type_serializes_lowercase() {
        let json = serde_json::to_string(&ParamType::Boolean).unwrap();
        assert_eq!(json, "\"boolean\"");
        assert!(!ParamType::Array.is_editable());
    }
}
