use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::{
    patterns::{ScanPass, ScanState},
    types::{ParamType, ParameterDescriptor, ParameterOrigin},
};

static UNIFORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"uniform\s+([A-Za-z0-9_]+)\s+([A-Za-z0-9_]+)(?:\s*=\s*([0-9.]+))?").unwrap()
});

pub const SHADER_OWNER: &str = "Shader";
pub const UNIFORM_METHOD: &str = "uniform";
pub const SHADER_FOLDER: &str = "shader";

/// Scalar `uniform` declarations of a shader
pub struct ShaderUniformPass;

impl ShaderUniformPass {
    /// Vectors, matrices and samplers cannot be edited as one number
    fn is_scalar(type_name: &str) -> bool {
        !(type_name.contains("vec") || type_name.contains("mat") || type_name.contains("sampler"))
    }
}

impl ScanPass for ShaderUniformPass {
    fn name(&self) -> &'static str {
        "shader-uniforms"
    }

    fn scan(&self, state: &mut ScanState<'_>) {
        for caps in UNIFORM_RE.captures_iter(state.text) {
            let Some(whole) = caps.get(0) else { continue };
            let type_name = &caps[1];
            if !Self::is_scalar(type_name) {
                trace!("skipping non-scalar uniform {} {}", type_name, &caps[2]);
                continue;
            }

            let value = caps.get(3).map(|m| m.as_str()).unwrap_or("0");
            let param_type = if type_name == "int" {
                ParamType::Int
            } else {
                ParamType::Float
            };

            let descriptor = ParameterDescriptor::new(
                &caps[2],
                value,
                param_type,
                state.range(whole.start(), whole.end()),
                whole.as_str(),
                ParameterOrigin::Uniform,
            )
            .with_scope(SHADER_OWNER, UNIFORM_METHOD)
            .with_folder(SHADER_FOLDER);

            state.parameters.push(descriptor);
        }

        debug!("{}: {} uniforms", self.name(), state.parameters.len());
    }
}
