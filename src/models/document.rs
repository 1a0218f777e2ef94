// file: src/models/document.rs
// description: downloadable document model and its stored record form
// reference: internal data structures

use crate::grouping::OrderingRules;
use crate::models::badge::FileBadge;
use crate::models::group_key::{GroupingMode, KEY_SEPARATOR};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub file_name: String,
    pub file_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        file_name: impl Into<String>,
        file_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            file_name: file_name.into(),
            file_url: file_url.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn badge(&self) -> FileBadge {
        FileBadge::infer(&self.file_name)
    }
}

/// Row as stored by the admin panel. Either carries an explicit `groupKey`
/// or the `year`/`category` columns it is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    pub file_name: String,
    pub file_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl DocumentRecord {
    /// Raw group key for this record. Never empty.
    pub fn resolve_group_key(&self, mode: GroupingMode, rules: &OrderingRules) -> String {
        if let Some(key) = non_blank(self.group_key.as_deref()) {
            return key.to_string();
        }

        let category = non_blank(self.category.as_deref());

        match mode {
            GroupingMode::YearCategory => {
                let year =
                    non_blank(self.year.as_deref()).unwrap_or(rules.other_years_label.as_str());
                let category = category.unwrap_or(rules.pinned_last_category.as_str());
                format!("{}{}{}", year, KEY_SEPARATOR, category)
            }
            GroupingMode::Flat => category
                .unwrap_or(rules.ungrouped_sentinel.as_str())
                .to_string(),
        }
    }

    pub fn into_document(self) -> Document {
        Document {
            id: self.id,
            title: self.title,
            file_name: self.file_name,
            file_url: self.file_url,
            date: self.date,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
