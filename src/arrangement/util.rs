use super::types::ArrangementError;
use chrono::NaiveDate;

pub(super) fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ArrangementError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ArrangementError::InvalidDate { year, month, day })
}

/// Dates de l'intervalle `(start, end]`.
pub(super) fn days_after(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().skip(1).take_while(move |d| *d <= end)
}
