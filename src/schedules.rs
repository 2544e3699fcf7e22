//! Programmes annuels, recopiés à la main depuis les tableaux de référence.
//!
//! Ajouter une année = écrire une fonction et l'inscrire dans [`SCHEDULES`].

use crate::arrangement::{Arrangement, ArrangementError};

pub type YearSchedule = fn(&mut Arrangement) -> Result<(), ArrangementError>;

/// Registre explicite `(année, programme)`, par année croissante.
pub const SCHEDULES: &[(i32, YearSchedule)] = &[
    (2023, year_2023),
    (2024, year_2024),
    (2025, year_2025),
    (2026, year_2026),
];

pub fn supported_years() -> Vec<i32> {
    SCHEDULES.iter().map(|(year, _)| *year).collect()
}

/// <https://www.australia.cn/zh-cn/facts-and-planning/when-to-go/australian-public-holidays.html>
///
/// | date  | jour | férié                                   |
/// |-------|------|-----------------------------------------|
/// | 01-01 | dim  | New Year's Day                          |
/// | 01-02 | lun  | New Year's Day (jour supplémentaire)    |
/// | 01-26 | jeu  | Australia Day                           |
/// | 04-07 | ven  | Good Friday                             |
/// | 04-08 | sam  | Easter Saturday                         |
/// | 04-09 | dim  | Easter Sunday                           |
/// | 04-10 | lun  | Easter Monday                           |
/// | 04-25 | mar  | Anzac Day                               |
/// | 06-12 | lun  | King's Birthday (NSW)                   |
/// | 10-02 | lun  | Labour Day (NSW)                        |
/// | 12-25 | lun  | Christmas Day                           |
/// | 12-26 | mar  | Boxing Day                              |
#[rustfmt::skip]
fn year_2023(a: &mut Arrangement) -> Result<(), ArrangementError> {
    a.year_at(2023)
        .new_year().rest(1, 1)?.to(1, 2)?
        .australia_day().rest(1, 26)?
        .good_friday().rest(4, 7)?
        .easter_saturday().rest(4, 8)?
        .easter_sunday().rest(4, 9)?
        .easter_monday().rest(4, 10)?
        .anzac_day().rest(4, 25)?
        .kings_birthday().rest(6, 12)?
        .labour_day().rest(10, 2)?
        .christmas_day().rest(12, 25)?
        .boxing_day().rest(12, 26)?;
    Ok(())
}

/// <https://holidays-calendar.net/calendar_zh_cn/japan_zh_cn.html>
///
/// | date  | jour | férié            |
/// |-------|------|------------------|
/// | 01-01 | lun  | New Year's Day   |
/// | 01-26 | ven  | Australia Day    |
/// | 03-29 | ven  | Good Friday      |
/// | 03-30 | sam  | Easter Saturday  |
/// | 03-31 | dim  | Easter Sunday    |
/// | 04-01 | lun  | Easter Monday    |
/// | 04-25 | jeu  | Anzac Day        |
/// | 06-10 | lun  | King's Birthday  |
/// | 10-07 | lun  | Labour Day       |
/// | 12-25 | mer  | Christmas Day    |
/// | 12-26 | jeu  | Boxing Day       |
#[rustfmt::skip]
fn year_2024(a: &mut Arrangement) -> Result<(), ArrangementError> {
    a.year_at(2024)
        .new_year().rest(1, 1)?
        .australia_day().rest(1, 26)?
        .good_friday().rest(3, 29)?
        .easter_saturday().rest(3, 30)?
        .easter_sunday().rest(3, 31)?
        .easter_monday().rest(4, 1)?
        .anzac_day().rest(4, 25)?
        .kings_birthday().rest(6, 10)?
        .labour_day().rest(10, 7)?
        .christmas_day().rest(12, 25)?
        .boxing_day().rest(12, 26)?;
    Ok(())
}

/// <https://www.fairwork.gov.au/employment-conditions/public-holidays>
/// (fériés nationaux + NSW 2025)
///
/// | date  | jour | férié                          |
/// |-------|------|--------------------------------|
/// | 01-01 | mer  | New Year's Day                 |
/// | 01-26 | dim  | Australia Day                  |
/// | 01-27 | lun  | Australia Day (in lieu)        |
/// | 04-18 | ven  | Good Friday                    |
/// | 04-19 | sam  | Easter Saturday                |
/// | 04-20 | dim  | Easter Sunday                  |
/// | 04-21 | lun  | Easter Monday                  |
/// | 04-25 | ven  | Anzac Day                      |
/// | 06-09 | lun  | King's Birthday                |
/// | 10-06 | lun  | Labour Day (NSW)               |
/// | 12-25 | jeu  | Christmas Day                  |
/// | 12-26 | ven  | Boxing Day                     |
#[rustfmt::skip]
fn year_2025(a: &mut Arrangement) -> Result<(), ArrangementError> {
    a.year_at(2025)
        .new_year().rest(1, 1)?
        .australia_day().rest(1, 26)?.in_lieu(1, 27)?
        .good_friday().rest(4, 18)?
        .easter_saturday().rest(4, 19)?
        .easter_sunday().rest(4, 20)?
        .easter_monday().rest(4, 21)?
        .anzac_day().rest(4, 25)?
        .kings_birthday().rest(6, 9)?
        .labour_day().rest(10, 6)?
        .christmas_day().rest(12, 25)?
        .boxing_day().rest(12, 26)?;
    Ok(())
}

/// <https://www.fairwork.gov.au/employment-conditions/public-holidays>
/// (fériés nationaux + NSW 2026)
///
/// | date  | jour | férié                          |
/// |-------|------|--------------------------------|
/// | 01-01 | jeu  | New Year's Day                 |
/// | 01-26 | lun  | Australia Day                  |
/// | 04-03 | ven  | Good Friday                    |
/// | 04-04 | sam  | Easter Saturday                |
/// | 04-05 | dim  | Easter Sunday                  |
/// | 04-06 | lun  | Easter Monday                  |
/// | 04-25 | sam  | Anzac Day                      |
/// | 06-08 | lun  | King's Birthday                |
/// | 10-05 | lun  | Labour Day (NSW)               |
/// | 12-25 | ven  | Christmas Day                  |
/// | 12-26 | sam  | Boxing Day                     |
/// | 12-28 | lun  | Boxing Day (in lieu)           |
#[rustfmt::skip]
fn year_2026(a: &mut Arrangement) -> Result<(), ArrangementError> {
    a.year_at(2026)
        .new_year().rest(1, 1)?
        .australia_day().rest(1, 26)?
        .good_friday().rest(4, 3)?
        .easter_saturday().rest(4, 4)?
        .easter_sunday().rest(4, 5)?
        .easter_monday().rest(4, 6)?
        .anzac_day().rest(4, 25)?
        .kings_birthday().rest(6, 8)?
        .labour_day().rest(10, 5)?
        .christmas_day().rest(12, 25)?
        .boxing_day().rest(12, 26)?.in_lieu(12, 28)?;
    Ok(())
}
