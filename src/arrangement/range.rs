use super::{save, types::ArrangementError, util, Arrangement};

pub(super) fn extend_to(
    arrangement: &mut Arrangement,
    month: u32,
    day: u32,
) -> Result<(), ArrangementError> {
    let (Some(year), Some(start_month), Some(start_day)) =
        (arrangement.year, arrangement.month, arrangement.day)
    else {
        return Err(ArrangementError::MissingDate);
    };
    let holiday = arrangement
        .saved_holiday
        .ok_or(ArrangementError::MissingDate)?;
    let day_type = arrangement.day_type.ok_or(ArrangementError::MissingDate)?;

    let start = util::date(year, start_month, start_day)?;
    let end = util::date(year, month, day)?;
    if end <= start {
        return Err(ArrangementError::InvalidRange { start, end });
    }

    for date in util::days_after(start, end) {
        save::place(arrangement, date, holiday, day_type);
    }
    Ok(())
}
