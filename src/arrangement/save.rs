use super::{types::ArrangementError, util, Arrangement};
use crate::model::{DayType, Holiday};
use chrono::NaiveDate;
use tracing::debug;

pub(super) fn save(
    arrangement: &mut Arrangement,
    month: u32,
    day: u32,
    day_type: DayType,
) -> Result<(), ArrangementError> {
    let year = arrangement.year.ok_or(ArrangementError::MissingYear)?;
    let holiday = arrangement.holiday.ok_or(ArrangementError::MissingHoliday)?;
    let date = util::date(year, month, day)?;

    place(arrangement, date, holiday, day_type);

    arrangement.saved_holiday = Some(holiday);
    arrangement.day_type = Some(day_type);
    arrangement.month = Some(month);
    arrangement.day = Some(day);
    Ok(())
}

/// Range `date` dans le bon tableau ; une date n'appartient qu'à un seul tableau.
pub(super) fn place(
    arrangement: &mut Arrangement,
    date: NaiveDate,
    holiday: Holiday,
    day_type: DayType,
) {
    for other in [DayType::Workday, DayType::Holiday, DayType::InLieu] {
        if other == day_type {
            continue;
        }
        if let Some(prev) = arrangement.bucket_mut(other).remove(&date) {
            debug!(%date, from = other.as_str(), to = day_type.as_str(), previous = %prev, "date moved between day types");
        }
    }

    if let Some(prev) = arrangement.bucket_mut(day_type).insert(date, holiday) {
        if prev != holiday {
            debug!(%date, previous = %prev, current = %holiday, "holiday overwritten");
        }
    }
}
