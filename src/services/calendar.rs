//! Calendar administration service
//!
//! Read-modify-write over a room's serialized override lists: parse what is
//! stored (leniently), apply the edit with last-write-wins semantics, write
//! the canonical serialization back. These methods are the only writers of
//! the calendar columns.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    api::calendar::CalendarResponse,
    error::{AppError, AppResult},
    models::calendar::{
        parse_override_list, DailyPriceOverride, QuotaOverride, WeekdayPriceRule,
    },
    repository::Repository,
};

/// Upper bound on bulk edits, one year plus a leap day
const MAX_RANGE_DAYS: i64 = 366;

#[derive(Clone)]
pub struct CalendarService {
    repository: Repository,
}

impl CalendarService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Parsed override lists for the admin edit screens
    pub async fn get_calendar(&self, room_id: i32) -> AppResult<CalendarResponse> {
        self.load(room_id).await
    }

    /// Upsert the price for one date
    pub async fn set_daily_price(
        &self,
        room_id: i32,
        date: NaiveDate,
        price: Decimal,
    ) -> AppResult<CalendarResponse> {
        check_price(price)?;
        let mut lists = self.load(room_id).await?;
        upsert_daily(&mut lists.daily_prices, date, price);
        self.store(room_id, lists).await
    }

    /// Upsert the price for every date in `start..=end`
    pub async fn set_daily_price_range(
        &self,
        room_id: i32,
        start: NaiveDate,
        end: NaiveDate,
        price: Decimal,
    ) -> AppResult<CalendarResponse> {
        check_price(price)?;
        let dates = inclusive_range(start, end)?;
        let mut lists = self.load(room_id).await?;
        for date in dates {
            upsert_daily(&mut lists.daily_prices, date, price);
        }
        self.store(room_id, lists).await
    }

    /// Remove the price override for one date, if present
    pub async fn remove_daily_price(
        &self,
        room_id: i32,
        date: NaiveDate,
    ) -> AppResult<CalendarResponse> {
        let mut lists = self.load(room_id).await?;
        lists.daily_prices.retain(|entry| entry.date != date);
        self.store(room_id, lists).await
    }

    /// Upsert the fallback price for one weekday (0=Sunday .. 6=Saturday)
    pub async fn set_weekday_price(
        &self,
        room_id: i32,
        weekday_index: u8,
        price: Decimal,
    ) -> AppResult<CalendarResponse> {
        check_price(price)?;
        check_weekday(weekday_index)?;
        let mut lists = self.load(room_id).await?;
        lists
            .weekday_prices
            .retain(|rule| rule.weekday_index != weekday_index);
        lists.weekday_prices.push(WeekdayPriceRule { weekday_index, price });
        self.store(room_id, lists).await
    }

    /// Remove the fallback price for one weekday, if present
    pub async fn remove_weekday_price(
        &self,
        room_id: i32,
        weekday_index: u8,
    ) -> AppResult<CalendarResponse> {
        check_weekday(weekday_index)?;
        let mut lists = self.load(room_id).await?;
        lists
            .weekday_prices
            .retain(|rule| rule.weekday_index != weekday_index);
        self.store(room_id, lists).await
    }

    /// Upsert the remaining inventory for one date
    pub async fn set_quota(
        &self,
        room_id: i32,
        date: NaiveDate,
        count: u32,
    ) -> AppResult<CalendarResponse> {
        let mut lists = self.load(room_id).await?;
        upsert_quota(&mut lists.quotas, date, count);
        self.store(room_id, lists).await
    }

    /// Upsert the remaining inventory for every date in `start..=end`
    pub async fn set_quota_range(
        &self,
        room_id: i32,
        start: NaiveDate,
        end: NaiveDate,
        count: u32,
    ) -> AppResult<CalendarResponse> {
        let dates = inclusive_range(start, end)?;
        let mut lists = self.load(room_id).await?;
        for date in dates {
            upsert_quota(&mut lists.quotas, date, count);
        }
        self.store(room_id, lists).await
    }

    /// Remove the inventory record for one date, if present
    pub async fn remove_quota(&self, room_id: i32, date: NaiveDate) -> AppResult<CalendarResponse> {
        let mut lists = self.load(room_id).await?;
        lists.quotas.retain(|entry| entry.date != date);
        self.store(room_id, lists).await
    }

    async fn load(&self, room_id: i32) -> AppResult<CalendarResponse> {
        let room = self.repository.rooms.get_by_id(room_id).await?;
        Ok(CalendarResponse {
            daily_prices: parse_override_list(room.daily_prices.as_deref(), "daily_prices"),
            weekday_prices: parse_override_list(room.weekday_prices.as_deref(), "weekday_prices"),
            quotas: parse_override_list(room.quotas.as_deref(), "quotas"),
        })
    }

    async fn store(&self, room_id: i32, lists: CalendarResponse) -> AppResult<CalendarResponse> {
        self.repository
            .rooms
            .update_calendar(
                room_id,
                &to_json(&lists.daily_prices)?,
                &to_json(&lists.weekday_prices)?,
                &to_json(&lists.quotas)?,
            )
            .await?;
        Ok(lists)
    }
}

fn upsert_daily(list: &mut Vec<DailyPriceOverride>, date: NaiveDate, price: Decimal) {
    list.retain(|entry| entry.date != date);
    list.push(DailyPriceOverride { date, price });
}

fn upsert_quota(list: &mut Vec<QuotaOverride>, date: NaiveDate, count: u32) {
    list.retain(|entry| entry.date != date);
    list.push(QuotaOverride { date, count });
}

fn check_price(price: Decimal) -> AppResult<()> {
    if price.is_sign_negative() {
        return Err(AppError::Validation("Price must not be negative".to_string()));
    }
    Ok(())
}

fn check_weekday(weekday_index: u8) -> AppResult<()> {
    if weekday_index > 6 {
        return Err(AppError::Validation(
            "Weekday index must be between 0 (Sunday) and 6 (Saturday)".to_string(),
        ));
    }
    Ok(())
}

fn inclusive_range(start: NaiveDate, end: NaiveDate) -> AppResult<Vec<NaiveDate>> {
    if end < start {
        return Err(AppError::InvalidDateRange(
            "End date is before start date".to_string(),
        ));
    }
    let len = (end - start).num_days() + 1;
    if len > MAX_RANGE_DAYS {
        return Err(AppError::Validation(format!(
            "Bulk edits are limited to {} days per request",
            MAX_RANGE_DAYS
        )));
    }

    let mut dates = Vec::with_capacity(len as usize);
    let mut day = start;
    while day <= end {
        dates.push(day);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    Ok(dates)
}

fn to_json<T: Serialize>(list: &[T]) -> AppResult<String> {
    serde_json::to_string(list).map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_upsert_replaces_same_date() {
        let mut list = vec![
            DailyPriceOverride { date: date("2025-06-01"), price: Decimal::from(1000) },
            DailyPriceOverride { date: date("2025-06-02"), price: Decimal::from(1100) },
        ];
        upsert_daily(&mut list, date("2025-06-01"), Decimal::from(1250));

        assert_eq!(list.len(), 2);
        assert!(list
            .iter()
            .any(|e| e.date == date("2025-06-01") && e.price == Decimal::from(1250)));
    }

    #[test]
    fn test_inclusive_range_contains_both_endpoints() {
        let dates = inclusive_range(date("2025-06-01"), date("2025-06-03")).unwrap();
        assert_eq!(dates, vec![date("2025-06-01"), date("2025-06-02"), date("2025-06-03")]);

        let single = inclusive_range(date("2025-06-01"), date("2025-06-01")).unwrap();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert!(inclusive_range(date("2025-06-03"), date("2025-06-01")).is_err());
    }

    #[test]
    fn test_oversized_range_is_rejected() {
        assert!(inclusive_range(date("2025-01-01"), date("2027-01-01")).is_err());
    }

    #[test]
    fn test_negative_price_is_rejected() {
        assert!(check_price(Decimal::from(-1)).is_err());
        assert!(check_price(Decimal::ZERO).is_ok());
    }
}
