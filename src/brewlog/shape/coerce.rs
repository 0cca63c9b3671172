//! Coercion helpers shared by the shop and order shapers.
//!
//! Blank text counts as absent everywhere. Numeric text is trimmed before
//! parsing; integers truncate toward zero the way a form's number parser does.

use crate::input::{LooseValue, VibeInput};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Trimmed text, or `None` when missing or blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// The value itself, or `None` when missing or blank text.
pub fn present(value: Option<&LooseValue>) -> Option<&LooseValue> {
    value.filter(|v| !v.is_blank())
}

/// Integer coercion: finite numbers and numeric text, truncated toward zero.
pub fn to_integer(value: &LooseValue) -> Option<i64> {
    let number = match value {
        LooseValue::Number(n) => *n,
        LooseValue::Text(s) => s.trim().parse::<f64>().ok()?,
        LooseValue::Bool(_) => return None,
    };
    if !number.is_finite() {
        return None;
    }
    let truncated = number.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Decimal coercion: finite numbers and decimal text.
pub fn to_decimal(value: &LooseValue) -> Option<Decimal> {
    match value {
        LooseValue::Number(n) if n.is_finite() => Decimal::try_from(*n).ok(),
        LooseValue::Number(_) | LooseValue::Bool(_) => None,
        LooseValue::Text(s) => {
            let s = s.trim();
            Decimal::from_str(s)
                .or_else(|_| Decimal::from_scientific(s))
                .ok()
        }
    }
}

/// Checkbox-style flag. Missing, blank, `false`, zero and the usual "off"
/// words are false; any other value is true.
pub fn flag(value: Option<&LooseValue>) -> bool {
    match present(value) {
        None => false,
        Some(LooseValue::Bool(b)) => *b,
        Some(LooseValue::Number(n)) => *n != 0.0 && !n.is_nan(),
        Some(LooseValue::Text(s)) => !matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "false" | "off" | "no" | "0"
        ),
    }
}

/// Splits and cleans vibe tags. Always yields a list, possibly empty.
pub fn vibe_tags(value: Option<&VibeInput>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(VibeInput::Text(text)) => clean_tags(text.split(',')),
        Some(VibeInput::Tags(tags)) => clean_tags(tags.iter().map(String::as_str)),
    }
}

fn clean_tags<'a>(tags: impl Iterator<Item = &'a str>) -> Vec<String> {
    tags.map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
