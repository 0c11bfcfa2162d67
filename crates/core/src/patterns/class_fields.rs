use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::{
    parser::method_body_end,
    patterns::{
        ScanPass, ScanState,
        used_systems::collect_used_systems,
        value_type::classify_assignment,
    },
    types::{ClassType, ParamType, ParameterDescriptor, ParameterOrigin},
};

static INIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+(?:__init__|init)\s*\(\s*self").unwrap());
static FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"self\.([a-zA-Z0-9_]+)\s*=\s*([^#\r\n]+)").unwrap());

pub const FIELD_METHOD: &str = "__init__";

/// Constructor fields of every `class Name(Parent):`, plus the per-class
/// annotations (class type, update method, referenced subsystems)
pub struct ClassStructurePass;

impl ClassStructurePass {
    fn has_update_method(class_text: &str) -> bool {
        class_text.contains("def update(self") || class_text.contains("def update (self")
    }
}

impl ScanPass for ClassStructurePass {
    fn name(&self) -> &'static str {
        "class-structure"
    }

    fn scan(&self, state: &mut ScanState<'_>) {
        let folder = state.context.folder_tag();
        let declarations: Vec<_> = state.classes.declarations().cloned().collect();
        let mut found = 0;

        for class in &declarations {
            let class_text = class.slice(state.text);
            let class_type = class.parent.as_deref().and_then(ClassType::from_parent);
            let has_update = Self::has_update_method(class_text);
            trace!(
                "class {} ({:?}) at line {}, update method: {}",
                class.name, class.parent, class.line, has_update
            );

            if let Some(init) = INIT_RE.find(class_text) {
                let init_start = class.offset + init.start();
                let init_end = method_body_end(state.text, init_start);
                let init_text = &state.text[init_start..init_end];

                for caps in FIELD_RE.captures_iter(init_text) {
                    let Some(whole) = caps.get(0) else { continue };
                    let value = caps[2].trim();
                    let start = init_start + whole.start();
                    let end = init_start + whole.end();

                    let mut descriptor = ParameterDescriptor::new(
                        &caps[1],
                        value,
                        classify_assignment(value, ParamType::Unknown),
                        state.range(start, end),
                        whole.as_str(),
                        ParameterOrigin::Field,
                    )
                    .with_scope(class.name.clone(), FIELD_METHOD)
                    .with_folder(folder.clone());
                    descriptor.class_type = class_type;
                    descriptor.has_update_method = Some(has_update);

                    state.parameters.push(descriptor);
                    found += 1;
                }
            }

            let systems = collect_used_systems(class_text);
            if !systems.is_empty() {
                state.annotate_class(&class.name, |p| p.used_systems = systems.clone());
            }
        }

        debug!(
            "{}: {} fields across {} classes",
            self.name(),
            found,
            declarations.len()
        );
    }
}
