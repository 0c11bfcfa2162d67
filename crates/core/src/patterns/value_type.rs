//! Value classification rules shared by the script passes

use crate::{types::ParamType, utils::is_numeric_literal};

/// Classify the right-hand side of an assignment.
///
/// Rules are checked in order: tuple/list literal, number, `True`/`False`,
/// then `fallback`.
pub fn classify_assignment(value: &str, fallback: ParamType) -> ParamType {
    if value.starts_with('(') || value.starts_with('[') {
        ParamType::Array
    } else if is_numeric_literal(value) {
        if value.contains('.') {
            ParamType::Float
        } else {
            ParamType::Int
        }
    } else if value == "True" || value == "False" {
        ParamType::Boolean
    } else {
        fallback
    }
}

/// Classify an engine init argument. Booleans are not distinguished here.
pub fn classify_init_arg(value: &str) -> ParamType {
    if value.contains('.') {
        ParamType::Float
    } else if !is_numeric_literal(value) {
        ParamType::String
    } else {
        ParamType::Int
    }
}
