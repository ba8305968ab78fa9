//! Inline style flattening.
//!
//! Pickers accept their extra style either as an inline CSS string or as a
//! property map. Both are flattened to one inline string and appended to the
//! component's base style. Map entries are emitted in key order, so the
//! result is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Extra style supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleInput {
    /// Inline CSS such as `"width: 350px;"`.
    Inline(String),
    /// Property/value pairs.
    Map(BTreeMap<String, String>),
}

impl From<&str> for StyleInput {
    fn from(style: &str) -> Self {
        Self::Inline(style.to_string())
    }
}

impl From<String> for StyleInput {
    fn from(style: String) -> Self {
        Self::Inline(style)
    }
}

impl From<BTreeMap<String, String>> for StyleInput {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self::Map(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Flatten a style to an inline string; `None` flattens to `""`.
pub fn flatten_style(style: Option<&StyleInput>) -> String {
    match style {
        None => String::new(),
        Some(StyleInput::Inline(inline)) => inline.trim().to_string(),
        Some(StyleInput::Map(map)) => map
            .iter()
            .map(|(property, value)| format!("{}: {};", property.trim(), value.trim()))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Append `extra` to `base`, separating declarations with `;`.
pub fn merge_style(base: &str, extra: Option<&StyleInput>) -> String {
    let base = base.trim();
    let extra = flatten_style(extra);
    match (base.is_empty(), extra.is_empty()) {
        (true, _) => extra,
        (false, true) => base.to_string(),
        (false, false) if base.ends_with(';') => format!("{base} {extra}"),
        (false, false) => format!("{base}; {extra}"),
    }
}
