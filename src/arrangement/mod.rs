mod marks;
mod range;
mod save;
mod types;
mod util;

pub use types::ArrangementError;

use crate::model::{DateAssignment, DayType, Holiday};
use crate::schedules;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Accumulateur chaînable : associe des dates à des fériés, par type de jour.
///
/// Le contexte (année, férié, dernière date enregistrée) n'est jamais remis à
/// zéro entre deux années : chaque programme annuel commence par `year_at`.
#[derive(Debug, Default)]
pub struct Arrangement {
    holidays: BTreeMap<NaiveDate, Holiday>,
    workdays: BTreeMap<NaiveDate, Holiday>,
    in_lieu_days: BTreeMap<NaiveDate, Holiday>,

    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    holiday: Option<Holiday>,
    day_type: Option<DayType>,
    saved_holiday: Option<Holiday>,
}

impl Arrangement {
    /// Construit l'accumulateur et exécute tous les programmes annuels connus.
    pub fn new() -> Result<Self, ArrangementError> {
        let mut arrangement = Self::empty();
        for (year, schedule) in schedules::SCHEDULES {
            debug!(year, "applying year schedule");
            schedule(&mut arrangement)?;
        }
        Ok(arrangement)
    }

    /// Accumulateur vide, sans aucun programme annuel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn holidays(&self) -> &BTreeMap<NaiveDate, Holiday> {
        &self.holidays
    }
    pub fn workdays(&self) -> &BTreeMap<NaiveDate, Holiday> {
        &self.workdays
    }
    pub fn in_lieu_days(&self) -> &BTreeMap<NaiveDate, Holiday> {
        &self.in_lieu_days
    }

    pub fn bucket(&self, day_type: DayType) -> &BTreeMap<NaiveDate, Holiday> {
        match day_type {
            DayType::Workday => &self.workdays,
            DayType::Holiday => &self.holidays,
            DayType::InLieu => &self.in_lieu_days,
        }
    }

    fn bucket_mut(&mut self, day_type: DayType) -> &mut BTreeMap<NaiveDate, Holiday> {
        match day_type {
            DayType::Workday => &mut self.workdays,
            DayType::Holiday => &mut self.holidays,
            DayType::InLieu => &mut self.in_lieu_days,
        }
    }

    /// Toutes les affectations, triées par date.
    pub fn assignments(&self) -> Vec<DateAssignment> {
        let mut out: Vec<DateAssignment> = [DayType::Holiday, DayType::Workday, DayType::InLieu]
            .into_iter()
            .flat_map(|day_type| {
                self.bucket(day_type)
                    .iter()
                    .map(move |(date, holiday)| DateAssignment {
                        date: *date,
                        holiday: *holiday,
                        day_type,
                    })
            })
            .collect();
        out.sort_by_key(|a| a.date);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty() && self.workdays.is_empty() && self.in_lieu_days.is_empty()
    }

    pub fn year_at(&mut self, year: i32) -> &mut Self {
        self.year = Some(year);
        self
    }

    pub fn mark(&mut self, holiday: Holiday) -> &mut Self {
        self.holiday = Some(holiday);
        self
    }

    /// Jour ouvré compensatoire.
    pub fn work(&mut self, month: u32, day: u32) -> Result<&mut Self, ArrangementError> {
        self.save(month, day, DayType::Workday)
    }

    /// Férié observé.
    pub fn rest(&mut self, month: u32, day: u32) -> Result<&mut Self, ArrangementError> {
        self.save(month, day, DayType::Holiday)
    }

    /// Jour chômé en remplacement (in lieu).
    pub fn in_lieu(&mut self, month: u32, day: u32) -> Result<&mut Self, ArrangementError> {
        self.save(month, day, DayType::InLieu)
    }

    /// Enregistre `(année courante, month, day)` pour le férié courant.
    pub fn save(
        &mut self,
        month: u32,
        day: u32,
        day_type: DayType,
    ) -> Result<&mut Self, ArrangementError> {
        save::save(self, month, day, day_type)?;
        Ok(self)
    }

    /// Étend le dernier enregistrement jusqu'à `(month, day)` inclus.
    ///
    /// La date de départ n'est pas réécrite ; chaque date suivante reçoit le
    /// férié et le type de jour de cet enregistrement, même si `mark` a été
    /// appelé depuis.
    pub fn to(&mut self, month: u32, day: u32) -> Result<&mut Self, ArrangementError> {
        range::extend_to(self, month, day)?;
        Ok(self)
    }
}
