//! Stay pricing and availability resolution
//!
//! This module is the single authoritative implementation of the nightly
//! price / total price / bookability computation. The storefront quote
//! endpoint, the reservation acceptance path and the admin preview all call
//! into it; none of them carry their own copy of the rules.

pub mod resolver;

pub use resolver::{resolve_night, resolve_stay};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Highest remaining-room count still surfaced as "low availability" in the
/// storefront. Purely a display band, not a distinct booking state.
pub const LOW_AVAILABILITY_MAX: u32 = 5;

/// A requested stay. `check_out` is exclusive: a night exists for every
/// calendar day in `[check_in, check_out)`, and the night of the check-out
/// day itself is not stayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_count: u32,
}

impl StayRequest {
    /// Number of nights in the stay; zero when the range is empty or inverted.
    pub fn night_count(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        if days > 0 {
            days as u32
        } else {
            0
        }
    }
}

/// Price outcome for a single night.
///
/// A tagged variant instead of sentinel values, so that "no price" can never
/// leak into arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NightPrice {
    /// The night has a resolved price. `quota` carries the remaining
    /// inventory when a per-date record exists, `None` when the night
    /// reported no quota.
    Priced { amount: Decimal, quota: Option<u32> },
    /// Neither an exact-date override nor a weekday rule covers the night.
    Unpriced,
}

/// Resolution result for one calendar night of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightQuote {
    pub date: NaiveDate,
    pub price: NightPrice,
}

impl NightQuote {
    pub fn is_priced(&self) -> bool {
        matches!(self.price, NightPrice::Priced { .. })
    }
}

/// Why a stay cannot be booked. Each variant renders a distinct user-facing
/// message; in particular an empty/inverted date range is never conflated
/// with ordinary sold-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UnbookableReason {
    /// `check_out` is on or before `check_in`.
    InvalidDateRange,
    /// At least one night has no price configured.
    MissingPrice,
    /// Every night is priced but remaining inventory is exhausted or was
    /// never reported.
    NoAvailability,
}

/// Aggregated result of resolving every night of a requested stay.
///
/// Ephemeral by design: recomputed on every date or calendar change, never
/// persisted as authoritative truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StayQuote {
    pub night_count: u32,
    /// Sum of resolved nightly prices. Accumulation stops at the first
    /// unpriced night, so this is partial whenever `all_nights_priced` is
    /// false.
    pub total_price: Decimal,
    pub all_nights_priced: bool,
    /// Earliest night with no price, when one exists.
    pub first_unpriced_date: Option<NaiveDate>,
    /// Minimum quota reported across the stay, already normalized: a stay in
    /// which no night reported a quota exposes 0 here, never "unlimited".
    pub min_available_quota: u32,
    pub sold_out: bool,
    /// Set exactly when `sold_out` is true.
    pub reason: Option<UnbookableReason>,
}

impl StayQuote {
    pub fn is_bookable(&self) -> bool {
        !self.sold_out
    }

    /// Storefront urgency band: bookable with at most
    /// [`LOW_AVAILABILITY_MAX`] rooms remaining.
    pub fn low_availability(&self) -> bool {
        !self.sold_out && self.min_available_quota <= LOW_AVAILABILITY_MAX
    }
}
