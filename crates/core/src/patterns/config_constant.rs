use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::{
    patterns::{
        ScanPass, ScanState,
        value_type::classify_assignment,
    },
    types::{ParamType, ParameterDescriptor, ParameterOrigin},
};

static CONFIG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([A-Z][A-Z0-9_]+)\s*=\s*([^\r\n]+)").unwrap());

pub const CONFIG_CLASS: &str = "GlobalConfig";
pub const CONFIG_METHOD: &str = "config";

/// Top-level `UPPER_SNAKE = value` constants
pub struct ConfigConstantPass;

impl ScanPass for ConfigConstantPass {
    fn name(&self) -> &'static str {
        "config-constants"
    }

    fn scan(&self, state: &mut ScanState<'_>) {
        let folder = state.context.folder_tag();
        let mut found = 0;

        for caps in CONFIG_RE.captures_iter(state.text) {
            let Some(whole) = caps.get(0) else { continue };
            let name = &caps[1];
            let value = caps[2].trim();
            let param_type = classify_assignment(value, ParamType::String);
            trace!("config constant {} = {} ({})", name, value, param_type);

            let descriptor = ParameterDescriptor::new(
                name,
                value,
                param_type,
                state.range(whole.start(), whole.end()),
                whole.as_str(),
                ParameterOrigin::Config,
            )
            .with_scope(CONFIG_CLASS, CONFIG_METHOD)
            .with_folder(folder.clone());

            state.module_info.global_config.push(descriptor.clone());
            state.parameters.push(descriptor);
            found += 1;
        }

        debug!("{}: {} constants", self.name(), found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::ScanContext;

    fn scan(text: &str) -> Vec<ParameterDescriptor> {
        let context = ScanContext::default().with_file_path("game/config/settings.py");
        let mut state = ScanState::new(text, &context);
        ConfigConstantPass.scan(&mut state);
        assert_eq!(state.module_info.global_config, state.parameters);
        state.parameters
    }

    #[test]
    fn test_int_and_float_constants() {
        let params = scan("MAX_SPEED = 5\nGRAVITY = 9.8\n");

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "MAX_SPEED");
        assert_eq!(params[0].value, "5");
        assert_eq!(params[0].param_type, ParamType::Int);
        assert_eq!(params[1].name, "GRAVITY");
        assert_eq!(params[1].value, "9.8");
        assert_eq!(params[1].param_type, ParamType::Float);
        assert_eq!(params[1].line, 1);
        assert_eq!(params[1].class_name, CONFIG_CLASS);
        assert_eq!(params[1].method, CONFIG_METHOD);
        assert_eq!(params[1].folder, "config");
    }

    #[test]
    fn test_other_value_kinds() {
        let params = scan("SIZE = (640, 480)\nDEBUG = True\nTITLE = 'Soma'\n");

        assert_eq!(params[0].param_type, ParamType::Array);
        assert_eq!(params[0].value, "(640, 480)");
        assert_eq!(params[1].param_type, ParamType::Boolean);
        assert_eq!(params[2].param_type, ParamType::String);
    }

    #[test]
    fn test_only_statement_start_matches() {
        let params = scan("    INDENTED = 1\nx = MAX\nA = 1\nOK_2 = 3\n");

        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["OK_2"]);
    }

    #[test]
    fn test_range_covers_whole_line() {
        let text = "FPS = 60  # frames\n";
        let params = scan(text);

        assert_eq!(params[0].text, "FPS = 60  # frames");
        assert_eq!(params[0].range.slice(text), Some("FPS = 60  # frames"));
        assert_eq!(params[0].param_type, ParamType::String);
    }

    #[test]
    fn test_crlf_value_stops_before_carriage_return() {
        let text = "MAX_SPEED = 5\r\nTITLE = 'Soma'\r\n";
        let params = scan(text);

        assert_eq!(params[0].text, "MAX_SPEED = 5");
        assert_eq!(params[0].param_type, ParamType::Int);
        assert_eq!(params[0].range.end.offset, text.find('\r').unwrap());
        assert_eq!(params[1].value, "'Soma'");
        assert_eq!(params[1].line, 1);
    }
}
