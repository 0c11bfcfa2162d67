use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::{
    patterns::{ScanPass, ScanState, value_type::classify_init_arg},
    types::{ParameterDescriptor, ParameterOrigin},
};

static INIT_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)pp\.init\s*\(\s*(.*?)\)").unwrap());
// Splits on commas without looking at nesting: `size=(640, 480)` yields
// `size=(640` and nothing for ` 480`.
static INIT_ARG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z0-9_]+)\s*=\s*([^,\r\n]+)").unwrap());

pub const ENGINE_OWNER: &str = "Engine";
pub const INIT_METHOD: &str = "init";

/// Keyword arguments of `pp.init(...)` calls
pub struct InitCallPass;

impl ScanPass for InitCallPass {
    fn name(&self) -> &'static str {
        "init-calls"
    }

    fn scan(&self, state: &mut ScanState<'_>) {
        let mut found = 0;

        for caps in INIT_CALL_RE.captures_iter(state.text) {
            let (Some(call), Some(args)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let owner = state
                .classes
                .enclosing(state.lines.line_of(call.start()))
                .map(|class| class.name.clone())
                .unwrap_or_else(|| ENGINE_OWNER.to_string());

            for arg in INIT_ARG_RE.captures_iter(args.as_str()) {
                let Some(whole) = arg.get(0) else { continue };
                let value = arg[2].trim();
                let start = args.start() + whole.start();
                let end = args.start() + whole.end();
                trace!("init argument {}={} owned by {}", &arg[1], value, owner);

                let descriptor = ParameterDescriptor::new(
                    &arg[1],
                    value,
                    classify_init_arg(value),
                    state.range(start, end),
                    whole.as_str(),
                    ParameterOrigin::InitArg,
                )
                .with_scope(owner.clone(), INIT_METHOD)
                .with_folder(ENGINE_OWNER);

                state.module_info.init_params.push(descriptor.clone());
                state.parameters.push(descriptor);
                found += 1;
            }
        }

        debug!("{}: {} init arguments", self.name(), found);
    }
}
