//! Rendu des tableaux accumulés (source Rust, JSON, CSV) et écriture atomique.

use crate::arrangement::Arrangement;
use crate::model::Holiday;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Transforme un [`Arrangement`] en artefact texte.
pub trait Renderer {
    fn render(&self, arrangement: &Arrangement) -> Result<String>;
}

/// Fichier source Rust autonome : enum `Holiday` + `HOLIDAYS`, `WORKDAYS`, `IN_LIEU_DAYS`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustSource;

impl Renderer for RustSource {
    fn render(&self, arrangement: &Arrangement) -> Result<String> {
        let mut out = String::new();
        writeln!(
            out,
            "// This file is generated by australians-calendar (generate-constants). Do not edit."
        )?;
        writeln!(out)?;
        write_holiday_enum(&mut out)?;
        writeln!(out)?;
        write_table(&mut out, "HOLIDAYS", arrangement.holidays())?;
        writeln!(out)?;
        write_table(&mut out, "WORKDAYS", arrangement.workdays())?;
        writeln!(out)?;
        write_table(&mut out, "IN_LIEU_DAYS", arrangement.in_lieu_days())?;
        Ok(out)
    }
}

fn write_holiday_enum(out: &mut String) -> std::fmt::Result {
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub enum Holiday {{")?;
    for h in Holiday::ALL {
        writeln!(out, "    {h:?},")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl Holiday {{")?;
    write_label_fn(out, "english", "&'static str", |h| format!("{:?}", h.english()))?;
    writeln!(out)?;
    write_label_fn(out, "chinese", "&'static str", |h| format!("{:?}", h.chinese()))?;
    writeln!(out)?;
    write_label_fn(out, "days", "u8", |h| h.days().to_string())?;
    writeln!(out, "}}")
}

fn write_label_fn(
    out: &mut String,
    name: &str,
    ret: &str,
    value: impl Fn(Holiday) -> String,
) -> std::fmt::Result {
    writeln!(out, "    pub fn {name}(self) -> {ret} {{")?;
    writeln!(out, "        match self {{")?;
    for h in Holiday::ALL {
        writeln!(out, "            Holiday::{h:?} => {},", value(h))?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")
}

fn write_table(
    out: &mut String,
    name: &str,
    days: &BTreeMap<NaiveDate, Holiday>,
) -> std::fmt::Result {
    use chrono::Datelike;

    if days.is_empty() {
        return writeln!(out, "pub const {name}: &[((i32, u32, u32), Holiday)] = &[];");
    }
    writeln!(out, "pub const {name}: &[((i32, u32, u32), Holiday)] = &[")?;
    for (date, holiday) in days {
        writeln!(
            out,
            "    (({}, {}, {}), Holiday::{holiday:?}),",
            date.year(),
            date.month(),
            date.day()
        )?;
    }
    writeln!(out, "];")
}

/// Objet JSON `{holidays, workdays, in_lieu_days}` : date ISO -> férié (snake_case).
#[cfg(feature = "serde")]
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

#[cfg(feature = "serde")]
impl Renderer for JsonRenderer {
    fn render(&self, arrangement: &Arrangement) -> Result<String> {
        #[derive(serde::Serialize)]
        struct Tables<'a> {
            holidays: &'a BTreeMap<NaiveDate, Holiday>,
            workdays: &'a BTreeMap<NaiveDate, Holiday>,
            in_lieu_days: &'a BTreeMap<NaiveDate, Holiday>,
        }

        let tables = Tables {
            holidays: arrangement.holidays(),
            workdays: arrangement.workdays(),
            in_lieu_days: arrangement.in_lieu_days(),
        };
        let mut s = serde_json::to_string_pretty(&tables)?;
        s.push('\n');
        Ok(s)
    }
}

/// CSV : header `date,holiday,day_type`, une ligne par date.
#[cfg(feature = "serde")]
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvRenderer;

#[cfg(feature = "serde")]
impl Renderer for CsvRenderer {
    fn render(&self, arrangement: &Arrangement) -> Result<String> {
        let mut w = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(Vec::new());
        for a in arrangement.assignments() {
            w.serialize(a)?;
        }
        let bytes = w
            .into_inner()
            .map_err(|e| anyhow::anyhow!("flushing csv writer: {}", e.error()))?;
        String::from_utf8(bytes).context("csv output is not utf-8")
    }
}

/// Écrit `contents` via un fichier temporaire voisin puis renommage.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}

/// Construit tous les programmes annuels, rend et écrit l'artefact.
pub fn generate<P: AsRef<Path>>(path: P, renderer: &dyn Renderer) -> Result<Arrangement> {
    let arrangement = Arrangement::new().context("building year schedules")?;
    let contents = renderer.render(&arrangement)?;
    write_atomic(&path, &contents)?;
    info!(
        path = %path.as_ref().display(),
        holidays = arrangement.holidays().len(),
        workdays = arrangement.workdays().len(),
        in_lieu_days = arrangement.in_lieu_days().len(),
        "constants generated"
    );
    Ok(arrangement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tables_render_as_empty_slices() {
        let src = RustSource.render(&Arrangement::empty()).unwrap();
        assert!(src.contains("pub const HOLIDAYS: &[((i32, u32, u32), Holiday)] = &[];"));
        assert!(src.contains("pub const IN_LIEU_DAYS: &[((i32, u32, u32), Holiday)] = &[];"));
        assert!(src.contains("Holiday::KingsBirthday => \"King's Birthday\","));
        assert!(src.contains("Holiday::NewYearsDay => \"元旦\","));
    }

    #[test]
    fn table_entries_follow_date_order() {
        let mut a = Arrangement::empty();
        a.year_at(2024)
            .boxing_day()
            .rest(12, 26)
            .unwrap()
            .new_year()
            .rest(1, 1)
            .unwrap();
        let src = RustSource.render(&a).unwrap();
        let first = src.find("((2024, 1, 1), Holiday::NewYearsDay)").unwrap();
        let second = src.find("((2024, 12, 26), Holiday::BoxingDay)").unwrap();
        assert!(first < second);
    }
}
