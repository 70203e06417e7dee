//! Input validation shared by every query: both run before any upstream call.
use crate::application::{error::ApplicationResult, ports::time::Clock};
use crate::domain::calendar::{
    DateRange, IsoWeek, Month, Year, ensure_week_in_year, ensure_year_not_in_future, month_range,
    week_range,
};

pub(super) fn resolve_week(clock: &dyn Clock, year: i32, week: u32) -> ApplicationResult<DateRange> {
    let year = resolve_year(clock, year)?;
    let week = IsoWeek::new(week)?;
    ensure_week_in_year(year, week)?;
    Ok(week_range(year, week)?)
}

pub(super) fn resolve_month(
    clock: &dyn Clock,
    year: i32,
    month: u32,
) -> ApplicationResult<(Year, Month, DateRange)> {
    let year = resolve_year(clock, year)?;
    let month = Month::new(month)?;
    let range = month_range(year, month)?;
    Ok((year, month, range))
}

fn resolve_year(clock: &dyn Clock, year: i32) -> ApplicationResult<Year> {
    let year = Year::new(year)?;
    ensure_year_not_in_future(year, clock.current_year())?;
    Ok(year)
}
