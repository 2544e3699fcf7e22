use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrangementError {
    #[error("should set year before saving holiday")]
    MissingYear,
    #[error("should set holiday before saving holiday")]
    MissingHoliday,
    #[error("should set year/month/day before saving holiday range")]
    MissingDate,
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("end date should be after start date ({start} -> {end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl ArrangementError {
    /// Vrai pour les erreurs de contexte manquant (année, férié ou date précédente).
    pub fn is_context_not_set(&self) -> bool {
        matches!(
            self,
            ArrangementError::MissingYear
                | ArrangementError::MissingHoliday
                | ArrangementError::MissingDate
        )
    }
}
