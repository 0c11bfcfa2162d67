use tracing::debug;

use crate::{
    interfaces::ScanContext,
    patterns::{
        AssetFolderPass, ClassStructurePass, ConfigConstantPass, ImagePropertyPass, InitCallPass,
        JsonLeafPass, ScanPass, ScanState, ShaderUniformPass,
    },
    types::{Extraction, FileKind, ModuleInfo},
};

/// Runs the extraction passes for one file kind, in their fixed order
pub struct ParameterDetector {
    kind: FileKind,
    passes: Vec<Box<dyn ScanPass>>,
}

impl ParameterDetector {
    pub fn new(kind: FileKind) -> Self {
        let passes: Vec<Box<dyn ScanPass>> = match kind {
            FileKind::Script => vec![
                Box::new(ConfigConstantPass),
                Box::new(ClassStructurePass),
                Box::new(AssetFolderPass),
                Box::new(ImagePropertyPass),
                Box::new(InitCallPass),
            ],
            FileKind::Json => vec![Box::new(JsonLeafPass)],
            FileKind::Shader => vec![Box::new(ShaderUniformPass)],
        };
        Self { kind, passes }
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    /// Scan `text` from scratch. Never fails: malformed input only means
    /// fewer descriptors.
    pub fn detect(&self, text: &str, context: &ScanContext<'_>) -> Extraction {
        let mut state = ScanState::new(text, context);
        for pass in &self.passes {
            pass.scan(&mut state);
        }

        let module_info = match self.kind {
            FileKind::Script => state.module_info,
            FileKind::Json | FileKind::Shader => ModuleInfo::all_global(&state.parameters),
        };

        debug!(
            "extracted {} parameters from {} document ({} bytes)",
            state.parameters.len(),
            self.kind.as_str(),
            text.len()
        );

        Extraction {
            kind: self.kind,
            parameters: state.parameters,
            module_info,
            asset_folders: state.asset_folders,
            fingerprint: Extraction::fingerprint_of(text),
        }
    }
}

/// Scan `text` as `kind`
pub fn extract(text: &str, kind: FileKind, context: &ScanContext<'_>) -> Extraction {
    ParameterDetector::new(kind).detect(text, context)
}
