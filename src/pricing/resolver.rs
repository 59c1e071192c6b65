//! Night and stay resolution
//!
//! Pure functions over an immutable [`RoomCalendar`] snapshot. No I/O, no
//! clock reads, no mutation: identical inputs always produce identical
//! quotes, so independently rendered surfaces never disagree about price or
//! sold-out status.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::calendar::RoomCalendar;

use super::{NightPrice, NightQuote, StayQuote, StayRequest, UnbookableReason};

/// Resolve a single calendar night against the room's calendar.
///
/// Precedence, first match wins:
/// 1. Exact-date price override. Inventory is looked up by the same date;
///    a daily-priced night with no quota record counts as sold out (quota
///    `Some(0)`), never as unlimited.
/// 2. Weekday fallback rule for the night's day of week. The quota store is
///    still consulted by exact date; a missing record leaves the quota
///    unreported (`None`) rather than forcing zero.
/// 3. Otherwise the night is unpriced.
pub fn resolve_night(date: NaiveDate, calendar: &RoomCalendar) -> NightQuote {
    if let Some(amount) = calendar.daily_price(date) {
        let quota = Some(calendar.quota(date).unwrap_or(0));
        return NightQuote {
            date,
            price: NightPrice::Priced { amount, quota },
        };
    }

    if let Some(amount) = calendar.weekday_price(date) {
        return NightQuote {
            date,
            price: NightPrice::Priced {
                amount,
                quota: calendar.quota(date),
            },
        };
    }

    NightQuote {
        date,
        price: NightPrice::Unpriced,
    }
}

/// Resolve every night of a requested stay into an aggregate quote.
///
/// Nights are walked in chronological order. Price accumulation stops at the
/// first unpriced night, and so does the walk: one missing price already
/// decides the outcome. An empty or inverted date range is reported as
/// [`UnbookableReason::InvalidDateRange`], distinct from ordinary sold-out.
pub fn resolve_stay(request: &StayRequest, calendar: &RoomCalendar) -> StayQuote {
    let night_count = request.night_count();
    if night_count == 0 {
        return StayQuote {
            night_count: 0,
            total_price: Decimal::ZERO,
            all_nights_priced: false,
            first_unpriced_date: None,
            min_available_quota: 0,
            sold_out: true,
            reason: Some(UnbookableReason::InvalidDateRange),
        };
    }

    let mut total_price = Decimal::ZERO;
    let mut min_quota: Option<u32> = None;
    let mut first_unpriced_date = None;

    let mut date = request.check_in;
    while date < request.check_out {
        match resolve_night(date, calendar).price {
            NightPrice::Priced { amount, quota } => {
                total_price += amount;
                if let Some(q) = quota {
                    min_quota = Some(min_quota.map_or(q, |m| m.min(q)));
                }
            }
            NightPrice::Unpriced => {
                first_unpriced_date = Some(date);
                break;
            }
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    let all_nights_priced = first_unpriced_date.is_none();
    // "Unknown" inventory normalizes to zero: bookability is never granted
    // on quota that nobody configured.
    let min_available_quota = min_quota.unwrap_or(0);
    let sold_out = !all_nights_priced || min_available_quota == 0;

    let reason = if !all_nights_priced {
        Some(UnbookableReason::MissingPrice)
    } else if min_available_quota == 0 {
        Some(UnbookableReason::NoAvailability)
    } else {
        None
    };

    StayQuote {
        night_count,
        total_price,
        all_nights_priced,
        first_unpriced_date,
        min_available_quota,
        sold_out,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar::{DailyPriceOverride, QuotaOverride, WeekdayPriceRule};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn price(v: i64) -> Decimal {
        Decimal::from(v)
    }

    fn calendar(
        daily: &[(&str, i64)],
        weekday: &[(u8, i64)],
        quotas: &[(&str, u32)],
    ) -> RoomCalendar {
        RoomCalendar::new(
            daily
                .iter()
                .map(|(d, p)| DailyPriceOverride { date: date(d), price: price(*p) })
                .collect(),
            weekday
                .iter()
                .map(|(w, p)| WeekdayPriceRule { weekday_index: *w, price: price(*p) })
                .collect(),
            quotas
                .iter()
                .map(|(d, c)| QuotaOverride { date: date(d), count: *c })
                .collect(),
        )
    }

    fn stay(check_in: &str, check_out: &str) -> StayRequest {
        StayRequest {
            check_in: date(check_in),
            check_out: date(check_out),
            guest_count: 2,
        }
    }

    // 2025-06-01 is a Sunday; 2025-06-02 a Monday.

    #[test]
    fn test_exact_date_override_beats_weekday_rule() {
        let cal = calendar(
            &[("2025-06-02", 1000)],
            &[(1, 500)],
            &[("2025-06-02", 3)],
        );

        let night = resolve_night(date("2025-06-02"), &cal);
        assert_eq!(
            night.price,
            NightPrice::Priced { amount: price(1000), quota: Some(3) }
        );
    }

    #[test]
    fn test_daily_price_without_quota_record_is_sold_out() {
        let cal = calendar(&[("2025-06-02", 1000)], &[], &[]);

        let night = resolve_night(date("2025-06-02"), &cal);
        assert_eq!(
            night.price,
            NightPrice::Priced { amount: price(1000), quota: Some(0) }
        );

        let quote = resolve_stay(&stay("2025-06-02", "2025-06-03"), &cal);
        assert!(quote.all_nights_priced);
        assert!(quote.sold_out);
        assert_eq!(quote.reason, Some(UnbookableReason::NoAvailability));
    }

    #[test]
    fn test_weekday_fallback_prices_a_monday_night() {
        // Scenario: no exact overrides, Monday fallback of 500
        let cal = calendar(&[], &[(1, 500)], &[]);

        let quote = resolve_stay(&stay("2025-06-02", "2025-06-03"), &cal);
        assert_eq!(quote.night_count, 1);
        assert_eq!(quote.total_price, price(500));
        assert!(quote.all_nights_priced);
        assert_eq!(quote.first_unpriced_date, None);
    }

    #[test]
    fn test_weekday_fallback_with_quota_record_is_bookable() {
        let cal = calendar(&[], &[(1, 500)], &[("2025-06-02", 4)]);

        let quote = resolve_stay(&stay("2025-06-02", "2025-06-03"), &cal);
        assert!(!quote.sold_out);
        assert_eq!(quote.min_available_quota, 4);
        assert_eq!(quote.reason, None);
    }

    #[test]
    fn test_weekday_fallback_without_any_quota_normalizes_to_zero() {
        let cal = calendar(&[], &[(1, 500)], &[]);

        let quote = resolve_stay(&stay("2025-06-02", "2025-06-03"), &cal);
        assert!(quote.all_nights_priced);
        assert_eq!(quote.min_available_quota, 0);
        assert!(quote.sold_out);
        assert_eq!(quote.reason, Some(UnbookableReason::NoAvailability));
    }

    #[test]
    fn test_two_priced_nights_with_exhausted_quota() {
        // Two daily overrides, second date has zero inventory left
        let cal = calendar(
            &[("2025-06-01", 1000), ("2025-06-02", 1200)],
            &[],
            &[("2025-06-01", 2), ("2025-06-02", 0)],
        );

        let quote = resolve_stay(&stay("2025-06-01", "2025-06-03"), &cal);
        assert_eq!(quote.night_count, 2);
        assert_eq!(quote.total_price, price(2200));
        assert!(quote.all_nights_priced);
        assert_eq!(quote.min_available_quota, 0);
        assert!(quote.sold_out);
        assert_eq!(quote.reason, Some(UnbookableReason::NoAvailability));
    }

    #[test]
    fn test_empty_calendar_is_unpriced_from_the_first_night() {
        let cal = calendar(&[], &[], &[]);

        let quote = resolve_stay(&stay("2025-06-01", "2025-06-04"), &cal);
        assert!(!quote.all_nights_priced);
        assert_eq!(quote.first_unpriced_date, Some(date("2025-06-01")));
        assert_eq!(quote.total_price, Decimal::ZERO);
        assert!(quote.sold_out);
        assert_eq!(quote.reason, Some(UnbookableReason::MissingPrice));
    }

    #[test]
    fn test_accumulation_stops_at_first_unpriced_night() {
        // Night 1 and 3 priced, night 2 missing: the 900 must not be added
        let cal = calendar(
            &[("2025-06-01", 100), ("2025-06-03", 900)],
            &[],
            &[("2025-06-01", 5), ("2025-06-03", 5)],
        );

        let quote = resolve_stay(&stay("2025-06-01", "2025-06-04"), &cal);
        assert_eq!(quote.total_price, price(100));
        assert_eq!(quote.first_unpriced_date, Some(date("2025-06-02")));
        assert!(!quote.all_nights_priced);
        assert_eq!(quote.reason, Some(UnbookableReason::MissingPrice));
    }

    #[test]
    fn test_equal_check_in_and_out_is_invalid_selection() {
        let cal = calendar(&[("2025-06-01", 1000)], &[], &[("2025-06-01", 5)]);

        let quote = resolve_stay(&stay("2025-06-01", "2025-06-01"), &cal);
        assert_eq!(quote.night_count, 0);
        assert_eq!(quote.total_price, Decimal::ZERO);
        assert!(quote.sold_out);
        assert!(!quote.all_nights_priced);
        assert_eq!(quote.reason, Some(UnbookableReason::InvalidDateRange));
    }

    #[test]
    fn test_inverted_range_is_invalid_selection() {
        let cal = calendar(&[], &[], &[]);

        let quote = resolve_stay(&stay("2025-06-05", "2025-06-01"), &cal);
        assert_eq!(quote.night_count, 0);
        assert_eq!(quote.reason, Some(UnbookableReason::InvalidDateRange));
    }

    #[test]
    fn test_zero_quota_on_one_night_forces_sold_out() {
        let cal = calendar(
            &[("2025-06-01", 1000), ("2025-06-02", 1000), ("2025-06-03", 1000)],
            &[],
            &[("2025-06-01", 8), ("2025-06-02", 0), ("2025-06-03", 8)],
        );

        let quote = resolve_stay(&stay("2025-06-01", "2025-06-04"), &cal);
        assert!(quote.all_nights_priced);
        assert_eq!(quote.min_available_quota, 0);
        assert!(quote.sold_out);
    }

    #[test]
    fn test_min_quota_is_minimum_across_reporting_nights() {
        let cal = calendar(
            &[("2025-06-01", 1000), ("2025-06-02", 1000), ("2025-06-03", 1000)],
            &[],
            &[("2025-06-01", 3), ("2025-06-02", 1), ("2025-06-03", 2)],
        );

        let quote = resolve_stay(&stay("2025-06-01", "2025-06-04"), &cal);
        assert_eq!(quote.min_available_quota, 1);
        assert!(!quote.sold_out);
        assert!(quote.low_availability());
    }

    #[test]
    fn test_ample_quota_is_not_low_availability() {
        let cal = calendar(&[("2025-06-01", 1000)], &[], &[("2025-06-01", 6)]);

        let quote = resolve_stay(&stay("2025-06-01", "2025-06-02"), &cal);
        assert!(!quote.sold_out);
        assert!(!quote.low_availability());
    }

    #[test]
    fn test_mixed_daily_and_weekday_pricing() {
        // Sunday night priced by override, Monday night by fallback
        let cal = calendar(
            &[("2025-06-01", 1200)],
            &[(1, 500)],
            &[("2025-06-01", 2), ("2025-06-02", 2)],
        );

        let quote = resolve_stay(&stay("2025-06-01", "2025-06-03"), &cal);
        assert_eq!(quote.total_price, price(1700));
        assert!(quote.all_nights_priced);
        assert_eq!(quote.min_available_quota, 2);
        assert!(!quote.sold_out);
    }

    #[test]
    fn test_identical_inputs_yield_identical_quotes() {
        let cal = calendar(
            &[("2025-06-01", 1000), ("2025-06-02", 1200)],
            &[(5, 800)],
            &[("2025-06-01", 2)],
        );
        let request = stay("2025-06-01", "2025-06-03");

        assert_eq!(resolve_stay(&request, &cal), resolve_stay(&request, &cal));
    }

    #[test]
    fn test_night_count_is_exclusive_of_check_out() {
        assert_eq!(stay("2025-06-01", "2025-06-03").night_count(), 2);
        assert_eq!(stay("2025-06-01", "2025-06-02").night_count(), 1);
        assert_eq!(stay("2025-06-01", "2025-06-01").night_count(), 0);
        assert_eq!(stay("2025-06-03", "2025-06-01").night_count(), 0);
    }
}
