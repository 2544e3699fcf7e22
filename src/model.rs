use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Jour férié reconnu (ensemble fixe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Holiday {
    NewYearsDay,
    AustraliaDay,
    GoodFriday,
    EasterSaturday,
    EasterSunday,
    EasterMonday,
    AnzacDay,
    KingsBirthday,
    LabourDay,
    ChristmasDay,
    BoxingDay,
}

impl Holiday {
    /// Tous les jours fériés, dans l'ordre de déclaration.
    pub const ALL: [Holiday; 11] = [
        Holiday::NewYearsDay,
        Holiday::AustraliaDay,
        Holiday::GoodFriday,
        Holiday::EasterSaturday,
        Holiday::EasterSunday,
        Holiday::EasterMonday,
        Holiday::AnzacDay,
        Holiday::KingsBirthday,
        Holiday::LabourDay,
        Holiday::ChristmasDay,
        Holiday::BoxingDay,
    ];

    /// Libellé anglais.
    pub fn english(self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "New Year's Day",
            Holiday::AustraliaDay => "Australia Day",
            Holiday::GoodFriday => "Good Friday",
            Holiday::EasterSaturday => "Easter Saturday",
            Holiday::EasterSunday => "Easter Sunday",
            Holiday::EasterMonday => "Easter Monday",
            Holiday::AnzacDay => "Anzac Day",
            Holiday::KingsBirthday => "King's Birthday",
            Holiday::LabourDay => "Labour Day",
            Holiday::ChristmasDay => "Christmas Day",
            Holiday::BoxingDay => "Boxing Day",
        }
    }

    /// Libellé localisé (chinois simplifié).
    pub fn chinese(self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "元旦",
            Holiday::AustraliaDay => "澳大利亚国庆日",
            Holiday::GoodFriday => "耶稣受难日",
            Holiday::EasterSaturday => "耶稣受难日翌日",
            Holiday::EasterSunday => "复活节星期日",
            Holiday::EasterMonday => "复活节星期一",
            Holiday::AnzacDay => "澳新军团日",
            Holiday::KingsBirthday => "国王诞辰日",
            Holiday::LabourDay => "劳动节",
            Holiday::ChristmasDay => "圣诞节",
            Holiday::BoxingDay => "节礼日",
        }
    }

    /// Nombre de jours chômés (toujours 1 pour les fériés australiens).
    pub fn days(self) -> u8 {
        1
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english())
    }
}

/// Classification d'une date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DayType {
    /// Jour ouvré compensatoire
    Workday,
    /// Férié observé
    Holiday,
    /// Jour chômé en remplacement (férié tombé un week-end)
    InLieu,
}

impl DayType {
    pub fn as_str(self) -> &'static str {
        match self {
            DayType::Workday => "workday",
            DayType::Holiday => "holiday",
            DayType::InLieu => "in_lieu",
        }
    }
}

/// Une date rattachée à un férié et à un type de jour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateAssignment {
    pub date: NaiveDate,
    pub holiday: Holiday,
    pub day_type: DayType,
}
