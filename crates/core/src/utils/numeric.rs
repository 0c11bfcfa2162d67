//! Number recognition matching how the inspector has always classified
//! script values.

/// Whether `value` reads as a number.
///
/// Accepts the empty string, signed decimals with optional fraction and
/// exponent (`5`, `-2.5`, `.5`, `3.`, `1e-3`), `0x`/`0o`/`0b` integers and a
/// signed `Infinity`. Surrounding whitespace is ignored.
pub fn is_numeric_literal(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }

    if let Some(digits) = radix_digits(value) {
        let (body, radix) = digits;
        return !body.is_empty() && body.chars().all(|c| c.is_digit(radix));
    }

    let unsigned = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);

    if unsigned == "Infinity" {
        return true;
    }

    is_decimal(unsigned)
}

fn radix_digits(value: &str) -> Option<(&str, u32)> {
    let prefix = value.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((&value[2..], radix))
}

fn is_decimal(value: &str) -> bool {
    let (mantissa, exponent) = match value.find(['e', 'E']) {
        Some(i) => (&value[..i], Some(&value[i + 1..])),
        None => (value, None),
    };

    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (mantissa, ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
        return false;
    }

    match exponent {
        None => true,
        Some(exponent) => {
            let exponent = exponent
                .strip_prefix('+')
                .or_else(|| exponent.strip_prefix('-'))
                .unwrap_or(exponent);
            !exponent.is_empty() && all_digits(exponent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numbers() {
        for value in ["5", "9.8", "-3", "+2.", ".5", "1e5", "2.5E-3", "0x1F", "0b101", "Infinity", "-Infinity", "", "  "] {
            assert!(is_numeric_literal(value), "{value:?} should be numeric");
        }
    }

    #[test]
    fn test_rejects_non_numbers() {
        for value in ["True", "abc", "1.2.3", ".", "-", "1e", "0x", "0xZZ", "5 # speed", "(1, 2)", "inf", "NaN", "1_000"] {
            assert!(!is_numeric_literal(value), "{value:?} should not be numeric");
        }
    }
}
