// file: src/models/group_key.rs
// description: grouping mode flag and the typed group key decided at the fetch boundary
// reference: internal data structures

use crate::grouping::OrderingRules;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Separator between year and category in composite keys.
pub const KEY_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GroupingMode {
    YearCategory,
    #[default]
    Flat,
}

impl GroupingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingMode::YearCategory => "year_category",
            GroupingMode::Flat => "flat",
        }
    }

    pub fn is_hierarchical(&self) -> bool {
        matches!(self, GroupingMode::YearCategory)
    }
}

impl From<&str> for GroupingMode {
    /// Anything other than `year_category` falls back to flat grouping.
    fn from(value: &str) -> Self {
        if value.trim() == "year_category" {
            GroupingMode::YearCategory
        } else {
            GroupingMode::Flat
        }
    }
}

impl From<String> for GroupingMode {
    fn from(value: String) -> Self {
        GroupingMode::from(value.as_str())
    }
}

impl From<GroupingMode> for String {
    fn from(mode: GroupingMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket a document belongs to.
///
/// Raw keys are split exactly once, here, so nothing downstream re-parses
/// the `year|category` convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Flat(String),
    YearCategory { year: String, category: String },
}

impl GroupKey {
    pub fn parse(raw: &str, mode: GroupingMode, rules: &OrderingRules) -> Self {
        match mode {
            GroupingMode::YearCategory => Self::parse_composite(raw, rules),
            GroupingMode::Flat => {
                let label = raw.trim();
                if label.is_empty() {
                    GroupKey::Flat(rules.ungrouped_sentinel.clone())
                } else {
                    GroupKey::Flat(label.to_string())
                }
            }
        }
    }

    fn parse_composite(raw: &str, rules: &OrderingRules) -> Self {
        let Some((year, category)) = raw.split_once(KEY_SEPARATOR) else {
            warn!(
                "Group key {:?} has no '{}' separator, filing under {}/{}",
                raw, KEY_SEPARATOR, rules.other_years_label, rules.pinned_last_category
            );
            return GroupKey::YearCategory {
                year: rules.other_years_label.clone(),
                category: rules.pinned_last_category.clone(),
            };
        };

        let year = year.trim();
        let category = category.trim();

        GroupKey::YearCategory {
            year: if year.is_empty() {
                rules.other_years_label.clone()
            } else {
                year.to_string()
            },
            category: if category.is_empty() {
                rules.pinned_last_category.clone()
            } else {
                category.to_string()
            },
        }
    }

    /// Composite string form, `year|category` or the flat label.
    pub fn raw(&self) -> String {
        match self {
            GroupKey::Flat(label) => label.clone(),
            GroupKey::YearCategory { year, category } => {
                format!("{}{}{}", year, KEY_SEPARATOR, category)
            }
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}
