//! User intents as they arrive from the presentation boundary.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shopfront_catalog::SortMode;
use shopfront_core::DomainError;

/// A discrete user action against a [`crate::BrowseSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Intent {
    ToggleCategory(String),
    ToggleSubCategory(String),
    SetSearchTerm(String),
    SetSearchActive(bool),
    ToggleSearch,
    /// Navigating away from the collection view closes the search bar.
    LeaveCollection,
    SetSortMode(SortMode),
    SetPage(usize),
    NextPage,
    PrevPage,
    /// Validated against the configured sizes when applied.
    SetPageSize(usize),
}

/// Parses the compact `key=value` form, e.g. `category=Men`, `sort=low-high`,
/// `page=next`, `size=16`, `search=red`, `search-active=true`, `search-toggle`, `leave`.
impl FromStr for Intent {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (key, value) = match s.split_once('=') {
            Some((key, value)) => (key.trim(), Some(value)),
            None => (s, None),
        };

        let intent = match (key, value) {
            ("category", Some(v)) => Intent::ToggleCategory(non_blank(key, v)?),
            ("subcategory" | "sub-category", Some(v)) => {
                Intent::ToggleSubCategory(non_blank(key, v)?)
            }
            ("search", Some(v)) => Intent::SetSearchTerm(v.to_string()),
            ("search-active", Some(v)) => Intent::SetSearchActive(parse_bool(v)?),
            ("search-toggle", None) => Intent::ToggleSearch,
            ("leave", None) => Intent::LeaveCollection,
            ("sort", Some(v)) => Intent::SetSortMode(v.parse()?),
            ("page", Some("next")) => Intent::NextPage,
            ("page", Some("prev")) => Intent::PrevPage,
            ("page", Some(v)) => Intent::SetPage(parse_number(key, v)?),
            ("size", Some(v)) => Intent::SetPageSize(parse_number(key, v)?),
            _ => return Err(DomainError::validation(format!("unrecognized intent: {s:?}"))),
        };
        Ok(intent)
    }
}

fn non_blank(key: &str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{key} needs a value")));
    }
    Ok(value.to_string())
}

fn parse_bool(value: &str) -> Result<bool, DomainError> {
    match value.trim() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        other => Err(DomainError::validation(format!("expected a boolean, got {other:?}"))),
    }
}

fn parse_number(key: &str, value: &str) -> Result<usize, DomainError> {
    value
        .trim()
        .parse()
        .map_err(|e| DomainError::validation(format!("{key}={value:?}: {e}")))
}
