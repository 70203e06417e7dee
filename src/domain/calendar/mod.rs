//! Calendar periods the pageview queries are expressed in: ISO weeks and
//! calendar months, resolved into concrete inclusive date ranges.
pub mod arithmetic;
pub mod specifications;
pub mod value_objects;

pub use arithmetic::{
    first_day_of_month, last_day_of_month, last_iso_week_of_year, month_range, week_range,
    week_start,
};
pub use specifications::{ensure_week_in_year, ensure_year_not_in_future};
pub use value_objects::{DateRange, IsoWeek, Month, Year};
