use super::arithmetic::last_iso_week_of_year;
use super::value_objects::{IsoWeek, Year};
use crate::domain::errors::{DomainError, DomainResult};

/// Rejects years after `current_year`. There is no lower bound.
pub fn ensure_year_not_in_future(year: Year, current_year: i32) -> DomainResult<()> {
    if year.value() > current_year {
        return Err(DomainError::validation(
            "input year cannot be greater than current year",
        ));
    }
    Ok(())
}

pub fn ensure_week_in_year(year: Year, week: IsoWeek) -> DomainResult<()> {
    let last_week = last_iso_week_of_year(year)?;
    if week.value() > last_week {
        return Err(DomainError::validation(format!(
            "input week cannot be greater than {last_week}"
        )));
    }
    Ok(())
}
