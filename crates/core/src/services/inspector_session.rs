//! The inspector's view model.
//!
//! A session owns one document's text and the latest extraction of it. Every
//! applied edit goes through the session and is followed by a fresh scan, so
//! the snapshot it hands out always matches the text it holds.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::{
    edit::{TextEdit, apply_edits, find_update_method, rename_edits, translate},
    error::{Error, Result},
    interfaces::{AssetLister, NoAssets, RenamePrompt, ScanContext},
    patterns::ParameterDetector,
    types::{Extraction, FileKind, Position},
};

/// Messages the presentation layer sends back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum InspectorRequest {
    ParameterValueChange {
        class_name: String,
        parameter: String,
        value: String,
    },
    JumpToUpdate {
        class_name: String,
    },
    RenameProperty {
        class_name: String,
        property_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum InspectorResponse {
    Edited { edits: Vec<TextEdit> },
    Jump { position: Position },
    Renamed { occurrences: usize },
    Cancelled,
}

pub struct InspectorSession {
    path: Option<PathBuf>,
    kind: FileKind,
    text: String,
    assets: Box<dyn AssetLister>,
    detector: ParameterDetector,
    snapshot: Extraction,
}

impl InspectorSession {
    pub fn new(text: impl Into<String>, kind: FileKind) -> Self {
        let text = text.into();
        let detector = ParameterDetector::new(kind);
        let snapshot = detector.detect(&text, &ScanContext::default());
        Self {
            path: None,
            kind,
            text,
            assets: Box::new(NoAssets),
            detector,
            snapshot,
        }
    }

    /// Open a file from disk
    pub fn open(path: impl AsRef<Path>, kind: FileKind) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(text, kind).with_path(path))
    }

    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self.refresh();
        self
    }

    pub fn with_assets(mut self, assets: Box<dyn AssetLister>) -> Self {
        self.assets = assets;
        self.refresh();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn snapshot(&self) -> &Extraction {
        &self.snapshot
    }

    /// Re-scan the current text, replacing the snapshot
    pub fn refresh(&mut self) -> &Extraction {
        let mut context = ScanContext::new(self.assets.as_ref());
        if let Some(path) = &self.path {
            context = context.with_file_path(path);
        }
        self.snapshot = self.detector.detect(&self.text, &context);
        &self.snapshot
    }

    /// The host changed the document; all descriptors are discarded
    pub fn document_changed(&mut self, text: impl Into<String>) -> &Extraction {
        self.text = text.into();
        self.refresh()
    }

    /// Set one parameter's value in the document.
    ///
    /// Returns the applied edits. On failure the document is left as it was.
    pub fn change_value(&mut self, class_name: &str, name: &str, value: &str) -> Result<Vec<TextEdit>> {
        let descriptor = self
            .snapshot
            .find(class_name, name)
            .ok_or_else(|| Error::UnknownParameter {
                class_name: class_name.to_string(),
                name: name.to_string(),
            })?;

        if !descriptor.param_type.is_editable() {
            return Err(Error::EditError(format!(
                "{class_name}.{name} is a {} value and cannot be edited",
                descriptor.param_type
            )));
        }

        let edits = vec![translate(descriptor, self.kind, value)];
        self.text = apply_edits(&self.text, &edits).inspect_err(|e| {
            warn!("edit of {}.{} rejected: {}", class_name, name, e);
        })?;

        if let Some(descriptor) = self.snapshot.find_mut(class_name, name) {
            descriptor.value = value.to_string();
        }
        info!("{}.{} = {}", class_name, name, value);

        self.refresh();
        Ok(edits)
    }

    /// Rename `self.<property>` across the whole document.
    ///
    /// Returns the number of rewritten occurrences; zero when the name is
    /// empty or unchanged.
    pub fn rename_property(&mut self, property: &str, new_name: &str) -> Result<usize> {
        let edits = rename_edits(&self.text, property, new_name);
        if edits.is_empty() {
            return Ok(0);
        }

        self.text = apply_edits(&self.text, &edits)?;
        info!("renamed self.{} in {} places", property, edits.len());
        self.refresh();
        Ok(edits.len())
    }

    /// Position of the update method of `class_name` in this document
    pub fn jump_to_update(&self, class_name: &str) -> Result<Position> {
        find_update_method(&self.text, class_name)
            .ok_or_else(|| Error::UpdateMethodNotFound(class_name.to_string()))
    }

    pub fn handle(&mut self, request: InspectorRequest, prompt: &mut dyn RenamePrompt) -> Result<InspectorResponse> {
        debug!("handling {:?}", request);
        match request {
            InspectorRequest::ParameterValueChange {
                class_name,
                parameter,
                value,
            } => {
                let edits = self.change_value(&class_name, &parameter, &value)?;
                Ok(InspectorResponse::Edited { edits })
            }
            InspectorRequest::JumpToUpdate { class_name } => {
                let position = self.jump_to_update(&class_name)?;
                Ok(InspectorResponse::Jump { position })
            }
            InspectorRequest::RenameProperty {
                class_name: _,
                property_name,
            } => {
                let message = format!("Enter new name for {property_name}");
                match prompt.ask(&message, &property_name) {
                    Some(new_name) => {
                        let occurrences = self.rename_property(&property_name, &new_name)?;
                        Ok(InspectorResponse::Renamed { occurrences })
                    }
                    None => Ok(InspectorResponse::Cancelled),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::FixedAnswer;

    const SCRIPT: &str = r#"SPAWN_RATE = 2
LEVELS = [1, 2, 3]

class Slime(pp.Entity):
    def __init__(self):
        self.speed = 10
        self.hp = 3

    def update(self, dt):
        self.pos[0] += self.speed * dt
"#;

    #[test]
    fn test_change_value_rescans() {
        let mut session = InspectorSession::new(SCRIPT, FileKind::Script);
        let edits = session.change_value("Slime", "speed", "20").unwrap();

        assert_eq!(edits.len(), 1);
        assert!(session.text().contains("        self.speed = 20\n"));
        assert!(session.snapshot().is_current_for(session.text()));

        let speed = session.snapshot().find("Slime", "speed").unwrap();
        assert_eq!(speed.value, "20");
        assert_eq!(speed.original_value, "20");
    }

    #[test]
    fn test_unknown_and_read_only_parameters() {
        let mut session = InspectorSession::new(SCRIPT, FileKind::Script);

        let err = session.change_value("Slime", "mana", "1").unwrap_err();
        assert!(matches!(err, Error::UnknownParameter { .. }));

        let err = session.change_value("GlobalConfig", "LEVELS", "[4]").unwrap_err();
        assert!(matches!(err, Error::EditError(_)));
        assert_eq!(session.text(), SCRIPT);
    }

    #[test]
    fn test_rename_request_uses_prompt() {
        let mut session = InspectorSession::new(SCRIPT, FileKind::Script);
        let request = InspectorRequest::RenameProperty {
            class_name: "Slime".to_string(),
            property_name: "speed".to_string(),
        };

        let response = session
            .handle(request.clone(), &mut FixedAnswer(Some("velocity".to_string())))
            .unwrap();
        assert_eq!(response, InspectorResponse::Renamed { occurrences: 2 });
        assert!(session.snapshot().find("Slime", "velocity").is_some());

        let response = session.handle(request, &mut FixedAnswer(None)).unwrap();
        assert_eq!(response, InspectorResponse::Cancelled);
    }

    #[test]
    fn test_jump_request() {
        let mut session = InspectorSession::new(SCRIPT, FileKind::Script);
        let response = session
            .handle(
                InspectorRequest::JumpToUpdate {
                    class_name: "Slime".to_string(),
                },
                &mut FixedAnswer(None),
            )
            .unwrap();

        match response {
            InspectorResponse::Jump { position } => assert_eq!(position.line, 8),
            other => panic!("expected jump, got {other:?}"),
        }
        assert!(session.jump_to_update("Bat").is_err());
    }

    #[test]
    fn test_request_wire_format() {
        let request: InspectorRequest = serde_json::from_str(
            r#"{"command": "parameter_value_change", "class_name": "Slime", "parameter": "hp", "value": "5"}"#,
        )
        .unwrap();

        let mut session = InspectorSession::new(SCRIPT, FileKind::Script);
        session.handle(request, &mut FixedAnswer(None)).unwrap();
        assert!(session.text().contains("self.hp = 5"));
    }

    #[test]
    fn test_document_changed_replaces_snapshot() {
        let mut session = InspectorSession::new(SCRIPT, FileKind::Script);
        let before = session.snapshot().fingerprint.clone();

        session.document_changed("SPAWN_RATE = 4\n");
        assert_ne!(session.snapshot().fingerprint, before);
        assert_eq!(session.snapshot().parameters.len(), 1);
        assert_eq!(session.snapshot().parameters[0].value, "4");
    }
}
