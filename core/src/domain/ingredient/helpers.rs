use std::collections::HashSet;

use serde_json::Value;

/// Union of both lists in first-seen order: `existing` first, then the
/// `detected` names not already present. Names compare by exact equality.
pub fn merge_ingredients(existing: &[String], detected: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(existing.len() + detected.len());

    existing
        .iter()
        .chain(detected)
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

/// Trims names and drops the blank ones.
pub fn normalize_ingredient_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Parse the model output into ingredient names.
///
/// Accepts a bare JSON array or an object with an `ingredients` array, optionally
/// wrapped in a markdown code fence. Non-string entries are skipped. Returns `None`
/// when the text is not one of those shapes.
pub fn parse_ingredient_list(raw: &str) -> Option<Vec<String>> {
    let value: Value = serde_json::from_str(strip_code_fence(raw.trim())).ok()?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("ingredients") {
            Some(Value::Array(items)) => items,
            _ => return None,
        },
        _ => return None,
    };

    let names = items.into_iter().filter_map(|item| match item {
        Value::String(name) => Some(name),
        _ => None,
    });

    Some(normalize_ingredient_names(names))
}

fn strip_code_fence(raw: &str) -> &str {
    let Some(body) = raw.strip_prefix("```") else {
        return raw;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}
