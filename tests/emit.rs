#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use australians_calendar::{
    generate, write_atomic, Arrangement, CsvRenderer, Holiday, JsonRenderer, Renderer,
    RustSource,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tempfile::tempdir;

fn small() -> Arrangement {
    let mut a = Arrangement::empty();
    a.year_at(2025)
        .australia_day()
        .rest(1, 26)
        .unwrap()
        .in_lieu(1, 27)
        .unwrap();
    a
}

#[test]
fn csv_lists_every_assignment() {
    let out = CsvRenderer.render(&small()).unwrap();
    insta::assert_snapshot!(out, @r"
    date,holiday,day_type
    2025-01-26,australia_day,holiday
    2025-01-27,australia_day,in_lieu
    ");
}

#[test]
fn json_has_three_tables() {
    let out = JsonRenderer.render(&small()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["holidays"]["2025-01-26"], "australia_day");
    assert_eq!(value["in_lieu_days"]["2025-01-27"], "australia_day");
    assert!(value["workdays"].as_object().unwrap().is_empty());
}

#[test]
fn json_reads_back_into_typed_tables() {
    #[derive(serde::Deserialize)]
    struct Tables {
        holidays: BTreeMap<NaiveDate, Holiday>,
        workdays: BTreeMap<NaiveDate, Holiday>,
        in_lieu_days: BTreeMap<NaiveDate, Holiday>,
    }

    let a = Arrangement::new().unwrap();
    let out = JsonRenderer.render(&a).unwrap();
    let tables: Tables = serde_json::from_str(&out).unwrap();
    assert_eq!(&tables.holidays, a.holidays());
    assert_eq!(&tables.workdays, a.workdays());
    assert_eq!(&tables.in_lieu_days, a.in_lieu_days());
}

#[test]
fn rust_source_embeds_enum_and_tables() {
    let src = RustSource.render(&Arrangement::new().unwrap()).unwrap();
    assert!(src.starts_with("// This file is generated by australians-calendar"));
    assert!(src.contains("pub enum Holiday {"));
    assert!(src.contains("    EasterSaturday,"));
    assert!(src.contains("Holiday::EasterSaturday => \"耶稣受难日翌日\","));
    assert!(src.contains("((2023, 1, 2), Holiday::NewYearsDay),"));
    assert!(src.contains("((2024, 6, 10), Holiday::KingsBirthday),"));
    assert!(src.contains("pub const WORKDAYS: &[((i32, u32, u32), Holiday)] = &[];"));
    let in_lieu = &src[src.find("pub const IN_LIEU_DAYS").unwrap()..];
    assert!(in_lieu.contains("((2025, 1, 27), Holiday::AustraliaDay),"));
    assert!(in_lieu.contains("((2026, 12, 28), Holiday::BoxingDay),"));
}

#[test]
fn rendering_is_deterministic() {
    let a = RustSource.render(&Arrangement::new().unwrap()).unwrap();
    let b = RustSource.render(&Arrangement::new().unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn generate_writes_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("constants.rs");
    let arrangement = generate(&path, &RustSource).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, RustSource.render(&arrangement).unwrap());
}

#[test]
fn write_atomic_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "old").unwrap();
    write_atomic(&path, "new").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
}
