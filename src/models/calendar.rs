//! Calendar override models and the per-room pricing snapshot
//!
//! Rooms persist their pricing and inventory overrides as serialized JSON
//! lists. This module owns the (deliberately tolerant) parse boundary and the
//! indexed snapshot the resolver reads from. Broken persisted data degrades
//! to "no overrides" with a warning; it never propagates as an error.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Price override pinned to one calendar date. Takes precedence over any
/// weekday rule for the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyPriceOverride {
    #[serde(deserialize_with = "calendar_date")]
    pub date: NaiveDate,
    pub price: Decimal,
}

/// Fallback price applying to every occurrence of one day of the week.
/// `weekday_index` runs 0=Sunday .. 6=Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayPriceRule {
    #[serde(alias = "weekday_index")]
    pub weekday_index: u8,
    pub price: Decimal,
}

/// Remaining bookable rooms of this type on one date. Zero means sold out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuotaOverride {
    #[serde(deserialize_with = "calendar_date")]
    pub date: NaiveDate,
    pub count: u32,
}

/// Accept `"2025-06-01"` as well as stored representations that carry a
/// time component (`"2025-06-01T00:00:00"`, `"2025-06-01 00:00:00+03:00"`).
/// Only the year-month-day part ever participates in lookups.
fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let day = raw.split(['T', ' ']).next().unwrap_or(raw.as_str());
    day.parse::<NaiveDate>()
        .map_err(|e| serde::de::Error::custom(format!("invalid calendar date {:?}: {}", raw, e)))
}

/// Parse a serialized override list, dropping whatever does not fit.
///
/// Returns an empty list for missing/blank text, non-array JSON and JSON that
/// is not valid at all; individually malformed elements are skipped. `what`
/// names the column for the log line.
pub fn parse_override_list<T: DeserializeOwned>(raw: Option<&str>, what: &str) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Discarding unparseable {} column: {}", what, e);
            return Vec::new();
        }
    };

    let serde_json::Value::Array(items) = value else {
        tracing::warn!("Discarding non-array {} column", what);
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Skipping malformed {} entry: {}", what, e);
                None
            }
        })
        .collect()
}

/// Immutable, indexed snapshot of one room's calendar overrides.
///
/// Built once per resolution so night lookups are map hits instead of list
/// scans. Duplicate dates and duplicate weekday indexes resolve last write
/// wins; negative prices and out-of-range weekday indexes are dropped here
/// so the resolver never sees them.
#[derive(Debug, Clone, Default)]
pub struct RoomCalendar {
    daily_prices: HashMap<NaiveDate, Decimal>,
    weekday_prices: HashMap<u8, Decimal>,
    quotas: HashMap<NaiveDate, u32>,
}

impl RoomCalendar {
    pub fn new(
        daily: Vec<DailyPriceOverride>,
        weekday: Vec<WeekdayPriceRule>,
        quotas: Vec<QuotaOverride>,
    ) -> Self {
        let mut calendar = Self::default();

        for entry in daily {
            if entry.price.is_sign_negative() {
                tracing::warn!("Skipping negative daily price for {}", entry.date);
                continue;
            }
            calendar.daily_prices.insert(entry.date, entry.price);
        }

        for rule in weekday {
            if rule.weekday_index > 6 {
                tracing::warn!("Skipping weekday rule with index {}", rule.weekday_index);
                continue;
            }
            if rule.price.is_sign_negative() {
                tracing::warn!("Skipping negative weekday price for index {}", rule.weekday_index);
                continue;
            }
            calendar.weekday_prices.insert(rule.weekday_index, rule.price);
        }

        for quota in quotas {
            calendar.quotas.insert(quota.date, quota.count);
        }

        calendar
    }

    /// Build a snapshot straight from the serialized room columns.
    pub fn from_raw(
        daily: Option<&str>,
        weekday: Option<&str>,
        quotas: Option<&str>,
    ) -> Self {
        Self::new(
            parse_override_list(daily, "daily_prices"),
            parse_override_list(weekday, "weekday_prices"),
            parse_override_list(quotas, "quotas"),
        )
    }

    /// Exact-date price override for `date`, if one exists.
    pub fn daily_price(&self, date: NaiveDate) -> Option<Decimal> {
        self.daily_prices.get(&date).copied()
    }

    /// Weekday fallback price for `date`'s day of week, if a rule exists.
    pub fn weekday_price(&self, date: NaiveDate) -> Option<Decimal> {
        let index = date.weekday().num_days_from_sunday() as u8;
        self.weekday_prices.get(&index).copied()
    }

    /// Remaining inventory recorded for `date`, if a record exists.
    pub fn quota(&self, date: NaiveDate) -> Option<u32> {
        self.quotas.get(&date).copied()
    }
}
