use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    patterns::{ScanPass, ScanState},
    types::{ParamType, ParameterDescriptor, ParameterOrigin},
};

pub const JSON_OWNER: &str = "JSON";
pub const JSON_ROOT_METHOD: &str = "root";
pub const JSON_FOLDER: &str = "json";

const LITERAL: &str = r"(true|false|-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)";

/// Boolean and numeric leaves of a JSON document, keyed by dotted path
pub struct JsonLeafPass;

impl ScanPass for JsonLeafPass {
    fn name(&self) -> &'static str {
        "json-leaves"
    }

    fn scan(&self, state: &mut ScanState<'_>) {
        let root: Value = match serde_json::from_str(state.text) {
            Ok(root) => root,
            Err(e) => {
                debug!("{}: document is not valid JSON: {}", self.name(), e);
                return;
            }
        };

        walk("", &root, state);
        debug!("{}: {} leaves", self.name(), state.parameters.len());
    }
}

fn walk(path: &str, value: &Value, state: &mut ScanState<'_>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                visit(path, key, child, state);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                visit(path, &i.to_string(), child, state);
            }
        }
        _ => {}
    }
}

fn visit(path: &str, key: &str, value: &Value, state: &mut ScanState<'_>) {
    let current = if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    };

    let (display, param_type) = match value {
        Value::Object(_) | Value::Array(_) => {
            walk(&current, value, state);
            return;
        }
        Value::Bool(b) => (b.to_string(), ParamType::Boolean),
        Value::Number(n) => number_display(n),
        Value::String(_) | Value::Null => return,
    };

    let Some((start, end)) = locate(state.text, key, value) else {
        trace!("json leaf {} not found in text", current);
        return;
    };

    let owner = path
        .split('.')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(JSON_OWNER)
        .to_string();
    let method = if path.is_empty() { JSON_ROOT_METHOD } else { path };

    let descriptor = ParameterDescriptor::new(
        current,
        display,
        param_type,
        state.range(start, end),
        &state.text[start..end],
        ParameterOrigin::JsonLeaf,
    )
    .with_display_name(key)
    .with_scope(owner, method)
    .with_folder(JSON_FOLDER);

    state.parameters.push(descriptor);
}

fn number_display(n: &serde_json::Number) -> (String, ParamType) {
    if n.is_i64() || n.is_u64() {
        return (n.to_string(), ParamType::Int);
    }
    let f = n.as_f64().unwrap_or_default();
    if f.is_finite() && f.fract() == 0.0 {
        (format!("{f}"), ParamType::Int)
    } else {
        (format!("{f}"), ParamType::Float)
    }
}

/// First `"key": literal` in `text` whose literal equals `value`
fn locate(text: &str, key: &str, value: &Value) -> Option<(usize, usize)> {
    let pattern = format!(r#""{}"\s*:\s*{}"#, regex::escape(key), LITERAL);
    let re = Regex::new(&pattern).ok()?;

    re.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        literal_matches(&caps[1], value).then(|| (whole.start(), whole.end()))
    })
}

fn literal_matches(literal: &str, value: &Value) -> bool {
    match value {
        Value::Bool(b) => literal == if *b { "true" } else { "false" },
        Value::Number(n) => {
            if let (Some(expected), Ok(found)) = (n.as_i64(), literal.parse::<i64>()) {
                return expected == found;
            }
            if let (Some(expected), Ok(found)) = (n.as_u64(), literal.parse::<u64>()) {
                return expected == found;
            }
            match (n.as_f64(), literal.parse::<f64>()) {
                (Some(expected), Ok(found)) => expected == found,
                _ => false,
            }
        }
        _ => false,
    }
}
