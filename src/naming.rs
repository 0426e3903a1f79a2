//! Plan filename conventions.
//!
//! Every generation is stored under its exact date and duplicated under two
//! ISO-week aliases:
//!
//! - `wochenplan_2024-05-10.txt` / `.html` → canonical, keyed by date
//! - `kw19-2024.txt` / `.html` → year-qualified week alias
//! - `kw19.txt` / `.html` → legacy week alias (ambiguous across years)
//!
//! Week numbers are always two digits. The ISO week-numbering year is used,
//! which differs from the calendar year around New Year (2024-12-30 is
//! `kw01-2025`).

use std::path::{Path, PathBuf};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

pub const CANONICAL_PREFIX: &str = "wochenplan_";
pub const TEXT_EXT: &str = "txt";
pub const HTML_EXT: &str = "html";
pub const INDEX_FILE: &str = "index.html";

/// ISO week number and week-numbering year of `date`.
pub fn iso_week(date: NaiveDate) -> (u32, i32) {
    let w = date.iso_week();
    (w.week(), w.year())
}

pub fn canonical_stem(date: NaiveDate) -> String {
    format!("{CANONICAL_PREFIX}{}", date.format("%Y-%m-%d"))
}

pub fn year_alias_stem(date: NaiveDate) -> String {
    let (week, year) = iso_week(date);
    format!("kw{week:02}-{year}")
}

pub fn legacy_alias_stem(date: NaiveDate) -> String {
    let (week, _) = iso_week(date);
    format!("kw{week:02}")
}

/// `KW 19/2024`
pub fn week_label(date: NaiveDate) -> String {
    let (week, year) = iso_week(date);
    format!("KW {week:02}/{year}")
}

/// `10.05.2024 - 16.05.2024`: the date and six days after it.
pub fn format_period(date: NaiveDate) -> String {
    let end = date + Duration::days(6);
    format!("{} - {}", date.format("%d.%m.%Y"), end.format("%d.%m.%Y"))
}

/// `10.05.2024 08:30`, used in "Aktualisiert am" lines.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%d.%m.%Y %H:%M").to_string()
}

/// Parse `wochenplan_YYYY-MM-DD.<ext>` into its date.
///
/// Returns `None` for other names and for impossible dates like `2024-02-30`.
pub fn parse_plan_filename(name: &str, ext: &str) -> Option<NaiveDate> {
    let stem = name
        .strip_prefix(CANONICAL_PREFIX)?
        .strip_suffix(ext)?
        .strip_suffix('.')?;
    if stem.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}

/// The six files one generation writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPaths {
    pub text: PathBuf,
    pub html: PathBuf,
    pub year_text: PathBuf,
    pub year_html: PathBuf,
    pub legacy_text: PathBuf,
    pub legacy_html: PathBuf,
}

impl PlanPaths {
    pub fn new(dir: &Path, date: NaiveDate) -> Self {
        let file = |stem: &str, ext: &str| dir.join(format!("{stem}.{ext}"));
        let canonical = canonical_stem(date);
        let year = year_alias_stem(date);
        let legacy = legacy_alias_stem(date);
        Self {
            text: file(&canonical, TEXT_EXT),
            html: file(&canonical, HTML_EXT),
            year_text: file(&year, TEXT_EXT),
            year_html: file(&year, HTML_EXT),
            legacy_text: file(&legacy, TEXT_EXT),
            legacy_html: file(&legacy, HTML_EXT),
        }
    }

    pub fn canonical(&self) -> [&Path; 2] {
        [&self.text, &self.html]
    }

    pub fn aliases(&self) -> [&Path; 4] {
        [
            &self.year_text,
            &self.year_html,
            &self.legacy_text,
            &self.legacy_html,
        ]
    }

    pub fn all(&self) -> [&Path; 6] {
        [
            &self.text,
            &self.html,
            &self.year_text,
            &self.year_html,
            &self.legacy_text,
            &self.legacy_html,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn stems_for_mid_year_date() {
        let date = d(2024, 5, 10);
        assert_eq!(canonical_stem(date), "wochenplan_2024-05-10");
        assert_eq!(year_alias_stem(date), "kw19-2024");
        assert_eq!(legacy_alias_stem(date), "kw19");
        assert_eq!(week_label(date), "KW 19/2024");
    }

    #[test]
    fn single_digit_week_is_padded() {
        assert_eq!(legacy_alias_stem(d(2024, 1, 5)), "kw01");
    }

    #[test]
    fn iso_year_differs_from_calendar_year() {
        assert_eq!(year_alias_stem(d(2024, 12, 30)), "kw01-2025");
        assert_eq!(year_alias_stem(d(2021, 1, 1)), "kw53-2020");
    }

    #[test]
    fn period_spans_seven_days() {
        assert_eq!(format_period(d(2024, 5, 10)), "10.05.2024 - 16.05.2024");
        assert_eq!(format_period(d(2024, 12, 27)), "27.12.2024 - 02.01.2025");
    }

    #[test]
    fn timestamp_format() {
        let at = d(2024, 5, 10).and_hms_opt(8, 5, 59).unwrap();
        assert_eq!(format_timestamp(at), "10.05.2024 08:05");
    }

    #[test]
    fn parse_valid_names() {
        assert_eq!(
            parse_plan_filename("wochenplan_2024-05-10.txt", TEXT_EXT),
            Some(d(2024, 5, 10))
        );
        assert_eq!(
            parse_plan_filename("wochenplan_2024-05-10.html", HTML_EXT),
            Some(d(2024, 5, 10))
        );
    }

    #[test]
    fn parse_rejects_other_names() {
        for name in [
            "wochenplan_2024-05-10.html",
            "kw19-2024.txt",
            "kw19.txt",
            "index.html",
            "wochenplan_.txt",
            "wochenplan_2024-5-1.txt",
            "wochenplan_2024-02-30.txt",
            "wochenplan_2024-05-10-copy.txt",
            "wochenplan_2024-05-10txt",
        ] {
            assert_eq!(parse_plan_filename(name, TEXT_EXT), None, "{name}");
        }
    }

    #[test]
    fn plan_paths_layout() {
        let paths = PlanPaths::new(Path::new("out"), d(2024, 5, 10));
        let names: Vec<String> = paths
            .all()
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "out/wochenplan_2024-05-10.txt",
                "out/wochenplan_2024-05-10.html",
                "out/kw19-2024.txt",
                "out/kw19-2024.html",
                "out/kw19.txt",
                "out/kw19.html",
            ]
        );
        assert_eq!(paths.canonical(), [paths.text.as_path(), paths.html.as_path()]);
        assert_eq!(paths.aliases().len(), 4);
    }
}
