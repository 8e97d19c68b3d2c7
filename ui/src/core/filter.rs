//! Filter selection state and policy-driven application.
//!
//! Each report page owns one [`FilterSelection`] and one [`FilterPolicy`].
//! The policies intentionally differ per page — see [`FilterPolicy`] — and
//! those differences are part of the contract, not something to unify.

use std::collections::BTreeMap;
use std::str::FromStr;

use api::Record;
use thiserror::Error;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

use crate::core::records::field_text;

/// The filterable record fields, in the order filters are examined.
/// `ConjunctiveFirstMatch` depends on this order, so the enum declaration
/// order is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Country,
    EndYear,
    Topic,
    Sector,
    Region,
    Pestle,
    Source,
    Swot,
    City,
    Likelihood,
    Intensity,
}

impl FilterKey {
    pub const ALL: [FilterKey; 11] = [
        FilterKey::Country,
        FilterKey::EndYear,
        FilterKey::Topic,
        FilterKey::Sector,
        FilterKey::Region,
        FilterKey::Pestle,
        FilterKey::Source,
        FilterKey::Swot,
        FilterKey::City,
        FilterKey::Likelihood,
        FilterKey::Intensity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Country => "country",
            FilterKey::EndYear => "end_year",
            FilterKey::Topic => "topic",
            FilterKey::Sector => "sector",
            FilterKey::Region => "region",
            FilterKey::Pestle => "pestle",
            FilterKey::Source => "source",
            FilterKey::Swot => "swot",
            FilterKey::City => "city",
            FilterKey::Likelihood => "likelihood",
            FilterKey::Intensity => "intensity",
        }
    }

    /// Human label for filter controls.
    pub fn label(self) -> &'static str {
        match self {
            FilterKey::Country => "Country",
            FilterKey::EndYear => "End Year",
            FilterKey::Topic => "Topic",
            FilterKey::Sector => "Sector",
            FilterKey::Region => "Region",
            FilterKey::Pestle => "Pestle",
            FilterKey::Source => "Source",
            FilterKey::Swot => "SWOT",
            FilterKey::City => "City",
            FilterKey::Likelihood => "Likelihood",
            FilterKey::Intensity => "Intensity",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Asking for a field the dataset does not have is a programming error;
    /// callers are expected to fail fast on it.
    #[error("unknown filter key `{0}`")]
    UnknownKey(String),
}

impl FromStr for FilterKey {
    type Err = FilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == raw)
            .ok_or_else(|| FilterError::UnknownKey(raw.to_string()))
    }
}

/// The user's current constraints: at most one value per key (empty means
/// unconstrained and is never stored) plus an optional inclusive date range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    values: BTreeMap<FilterKey, String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl FilterSelection {
    pub fn value(&self, key: FilterKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Non-empty constraints in [`FilterKey`] declaration order.
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> + '_ {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn active_count(&self) -> usize {
        self.values.len()
    }

    fn set(&mut self, key: FilterKey, value: &str) {
        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value.to_string());
        }
    }

    fn date_range(&self) -> Option<(Date, Date)> {
        Some((self.start_date?, self.end_date?))
    }
}

/// How a page combines its filter controls.
///
/// The three variants reflect real, observed per-page behavior. In
/// particular `ConjunctiveFirstMatch` applies only the first non-empty
/// field and then stops — that asymmetry is preserved deliberately rather
/// than corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPolicy {
    /// Selecting any field clears every other field first, so at most one
    /// constraint is ever active. The date range survives the reset.
    Exclusive,
    /// All non-empty fields constrain together.
    ConjunctiveAll,
    /// Only the first non-empty field (in key order) constrains.
    ConjunctiveFirstMatch,
}

impl FilterPolicy {
    /// Returns the selection that results from the user picking `value` for
    /// `key`. An empty `value` clears the key ("All ...").
    pub fn set_filter(
        self,
        selection: &FilterSelection,
        key: FilterKey,
        value: &str,
    ) -> FilterSelection {
        let mut next = match self {
            FilterPolicy::Exclusive => FilterSelection {
                start_date: selection.start_date,
                end_date: selection.end_date,
                ..FilterSelection::default()
            },
            FilterPolicy::ConjunctiveAll | FilterPolicy::ConjunctiveFirstMatch => {
                selection.clone()
            }
        };
        next.set(key, value);
        next
    }

    /// Stable, order-preserving filter of `records` under `selection`.
    pub fn apply(self, records: &[Record], selection: &FilterSelection) -> Vec<Record> {
        let range = selection.date_range();
        records
            .iter()
            .filter(|record| self.matches(record, selection, range))
            .cloned()
            .collect()
    }

    fn matches(
        self,
        record: &Record,
        selection: &FilterSelection,
        range: Option<(Date, Date)>,
    ) -> bool {
        let field_matches =
            |(key, value): (FilterKey, &str)| field_text(record, key).as_str() == value;

        let fields_ok = match self {
            FilterPolicy::ConjunctiveFirstMatch => {
                selection.active().next().map(field_matches).unwrap_or(true)
            }
            FilterPolicy::Exclusive | FilterPolicy::ConjunctiveAll => {
                selection.active().all(field_matches)
            }
        };
        if !fields_ok {
            return false;
        }

        match range {
            Some((start, end)) => match parse_record_date(&record.date) {
                Some(date) => date >= start && date <= end,
                // Unparseable dates never satisfy an active range.
                None => false,
            },
            None => true,
        }
    }
}

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a record's date-like string. Anything that is not a full
/// `YYYY-MM-DD` date yields `None`.
pub fn parse_record_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), DATE_FORMAT).ok()
}

/// Inverse of [`parse_record_date`], for prefilling date controls.
pub fn format_record_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_default()
}
