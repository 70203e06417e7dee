use super::value_objects::{DateRange, IsoWeek, Month, Year};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, Days, Months, NaiveDate, TimeDelta};

fn out_of_range() -> DomainError {
    DomainError::validation("requested period is out of range")
}

/// Monday that begins `week` of `year`.
///
/// Anchors at July 1st, which always belongs to an ISO week of its own
/// calendar year, and shifts whole weeks from there. Week 1 may therefore
/// start in late December of the previous year, and the last week may end in
/// early January of the next one.
pub fn week_start(year: Year, week: IsoWeek) -> DomainResult<NaiveDate> {
    let anchor = NaiveDate::from_ymd_opt(year.value(), 7, 1).ok_or_else(out_of_range)?;
    let monday = anchor
        .checked_sub_days(Days::new(u64::from(
            anchor.weekday().num_days_from_monday(),
        )))
        .ok_or_else(out_of_range)?;

    let anchor_week = i64::from(monday.iso_week().week());
    let shift = TimeDelta::try_weeks(i64::from(week.value()) - anchor_week)
        .ok_or_else(out_of_range)?;
    monday.checked_add_signed(shift).ok_or_else(out_of_range)
}

/// Monday..=Sunday of the given ISO week.
pub fn week_range(year: Year, week: IsoWeek) -> DomainResult<DateRange> {
    DateRange::starting_at(week_start(year, week)?, 6)
}

pub fn first_day_of_month(year: Year, month: Month) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year.value(), month.value(), 1).ok_or_else(out_of_range)
}

pub fn last_day_of_month(year: Year, month: Month) -> DomainResult<NaiveDate> {
    first_day_of_month(year, month)?
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(out_of_range)
}

pub fn month_range(year: Year, month: Month) -> DomainResult<DateRange> {
    DateRange::new(
        first_day_of_month(year, month)?,
        last_day_of_month(year, month)?,
    )
}

/// Number of the last ISO week of `year`, either 52 or 53.
///
/// December 28th always falls in the final ISO week of its year, unlike
/// December 31st which can already belong to week 1 of the following year.
pub fn last_iso_week_of_year(year: Year) -> DomainResult<u32> {
    NaiveDate::from_ymd_opt(year.value(), 12, 28)
        .map(|day| day.iso_week().week())
        .ok_or_else(out_of_range)
}
