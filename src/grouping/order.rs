// file: src/grouping/order.rs
// description: display ordering for years, categories and flat groups
// reference: tiered sort keys over a stable sort

use crate::grouping::collation::{self, CollationKey};
use crate::grouping::patterns::{last_year_run, parse_integer_label};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};

pub const RESULTS_CATEGORY: &str = "rezultate";
pub const OTHER_CATEGORIES: &str = "Alte categorii";
pub const OTHER_YEARS: &str = "Alte ani";
pub const UNGROUPED: &str = "default";

/// Labels with a fixed position in the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingRules {
    /// Category shown first under every year.
    pub pinned_first_category: String,
    /// Category shown last under every year; also the fallback category.
    pub pinned_last_category: String,
    /// Year bucket shown last; also the fallback year.
    pub other_years_label: String,
    /// Flat label meaning "not grouped".
    pub ungrouped_sentinel: String,
    /// Display alias of the sentinel, sorted with it.
    #[serde(skip)]
    pub ungrouped_alias: Option<String>,
}

impl Default for OrderingRules {
    fn default() -> Self {
        Self {
            pinned_first_category: RESULTS_CATEGORY.to_string(),
            pinned_last_category: OTHER_CATEGORIES.to_string(),
            other_years_label: OTHER_YEARS.to_string(),
            ungrouped_sentinel: UNGROUPED.to_string(),
            ungrouped_alias: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum YearKey {
    Numeric(Reverse<i64>),
    Label(CollationKey),
    OtherYears,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum CategoryKey {
    PinnedFirst,
    Label(CollationKey),
    PinnedLast,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum FlatKey {
    /// Year signal, then the whole-label value.
    Numeric(Reverse<i64>, Reverse<i64>),
    Label(CollationKey),
    Ungrouped,
}

impl OrderingRules {
    pub fn with_ungrouped_alias(mut self, alias: impl Into<String>) -> Self {
        self.ungrouped_alias = Some(alias.into());
        self
    }

    pub fn is_ungrouped(&self, label: &str) -> bool {
        label == self.ungrouped_sentinel || self.ungrouped_alias.as_deref() == Some(label)
    }

    pub fn is_pinned_first(&self, category: &str) -> bool {
        category == self.pinned_first_category
    }

    fn year_key(&self, year: &str) -> YearKey {
        if year == self.other_years_label {
            YearKey::OtherYears
        } else if let Some(value) = parse_integer_label(year) {
            YearKey::Numeric(Reverse(value))
        } else {
            YearKey::Label(CollationKey::new(year))
        }
    }

    fn category_key(&self, category: &str) -> CategoryKey {
        if category == self.pinned_first_category {
            CategoryKey::PinnedFirst
        } else if category == self.pinned_last_category {
            CategoryKey::PinnedLast
        } else {
            CategoryKey::Label(CollationKey::new(category))
        }
    }

    fn flat_key(&self, label: &str) -> FlatKey {
        if self.is_ungrouped(label) {
            return FlatKey::Ungrouped;
        }

        // integers past four digits compete on their last four-digit run
        let whole = parse_integer_label(label);
        let signal = match whole {
            Some(value) if value.unsigned_abs() < 10_000 => Some(value),
            _ => last_year_run(label),
        };

        match signal {
            Some(year) => FlatKey::Numeric(Reverse(year), Reverse(whole.unwrap_or(year))),
            None => FlatKey::Label(CollationKey::new(label)),
        }
    }

    /// Integer years newest first, then other labels alphabetically, then
    /// the "other years" bucket.
    pub fn compare_years(&self, a: &str, b: &str) -> Ordering {
        self.year_key(a).cmp(&self.year_key(b))
    }

    /// Pinned-first category, the rest alphabetically, pinned-last category.
    pub fn compare_categories(&self, a: &str, b: &str) -> Ordering {
        self.category_key(a).cmp(&self.category_key(b))
    }

    /// Labels carrying a year newest first, then the rest alphabetically,
    /// then ungrouped. The year is the whole label when it is an integer of
    /// at most four digits, else the last four-digit run. Equal years fall
    /// back to the whole-label value.
    pub fn compare_flat(&self, a: &str, b: &str) -> Ordering {
        self.flat_key(a).cmp(&self.flat_key(b))
    }

    // `sort_by_cached_key` is stable, equal keys keep their input order.

    pub fn sort_years<T>(&self, items: &mut [T], label: impl Fn(&T) -> &str) {
        items.sort_by_cached_key(|item| self.year_key(label(item)));
    }

    pub fn sort_categories<T>(&self, items: &mut [T], label: impl Fn(&T) -> &str) {
        items.sort_by_cached_key(|item| self.category_key(label(item)));
    }

    pub fn sort_flat<T>(&self, items: &mut [T], label: impl Fn(&T) -> &str) {
        items.sort_by_cached_key(|item| self.flat_key(label(item)));
    }
}

/// Plain locale-aware comparison, for callers outside the anchored orders.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    collation::compare(a, b)
}
