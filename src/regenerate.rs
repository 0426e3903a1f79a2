//! Rebuild plan pages from their text files.
//!
//! The text file is the source of truth; after it has been edited by hand the
//! HTML page and its year alias are stale. This walks every
//! `wochenplan_YYYY-MM-DD.txt` in a directory, runs it through the
//! [`transduce`](crate::transduce) state machine and writes the result to the
//! canonical page and the `kwWW-YYYY.html` alias. The legacy `kwWW.html`
//! alias is left alone.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::index;
use crate::naming::{
    self, HTML_EXT, TEXT_EXT, canonical_stem, format_timestamp, year_alias_stem,
};
use crate::render::plan_page;
use crate::transduce::{TransduceError, transduce};

#[derive(Error, Debug)]
pub enum RegenerateError {
    #[error("{} ist kein gueltiges Verzeichnis", .0.display())]
    NotADirectory(PathBuf),
    #[error("Keine Wochenplaene gefunden (wochenplan_YYYY-MM-DD.txt) in {}", .0.display())]
    NoPlans(PathBuf),
    #[error("{}: {source}", .path.display())]
    Transduce {
        path: PathBuf,
        source: TransduceError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegeneratedPlan {
    pub date: NaiveDate,
    pub title: String,
    pub source: PathBuf,
    pub html: PathBuf,
    pub alias: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerateReport {
    pub plans: Vec<RegeneratedPlan>,
    /// `None` when the index was skipped.
    pub index: Option<PathBuf>,
}

/// Canonical text files in `dir`, oldest first.
pub fn find_plan_sources(dir: &Path) -> Result<Vec<(NaiveDate, PathBuf)>, RegenerateError> {
    if !dir.is_dir() {
        return Err(RegenerateError::NotADirectory(dir.to_path_buf()));
    }
    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let date = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| naming::parse_plan_filename(n, TEXT_EXT));
        if let Some(date) = date {
            sources.push((date, path));
        }
    }
    if sources.is_empty() {
        return Err(RegenerateError::NoPlans(dir.to_path_buf()));
    }
    sources.sort();
    Ok(sources)
}

/// Regenerate every plan page in `dir`.
///
/// `index_title` controls the index: `Some(title)` rebuilds it with that
/// heading, `None` leaves it untouched.
pub fn regenerate(
    dir: &Path,
    index_title: Option<&str>,
    now: NaiveDateTime,
) -> Result<RegenerateReport, RegenerateError> {
    let sources = find_plan_sources(dir)?;
    let stamp = format_timestamp(now);
    let footer = format!("Aktualisiert am {stamp}");

    let mut plans = Vec::with_capacity(sources.len());
    for (date, source) in sources {
        let raw = fs::read_to_string(&source)?;
        let (title, body) = transduce(&raw, date).map_err(|e| RegenerateError::Transduce {
            path: source.clone(),
            source: e,
        })?;
        let page = plan_page(&title, body, Some(&footer)).into_string();

        let html = dir.join(format!("{}.{HTML_EXT}", canonical_stem(date)));
        let alias = dir.join(format!("{}.{HTML_EXT}", year_alias_stem(date)));
        fs::write(&html, &page)?;
        fs::write(&alias, &page)?;
        tracing::debug!(source = %source.display(), "page regenerated");

        plans.push(RegeneratedPlan {
            date,
            title,
            source,
            html,
            alias,
        });
    }

    let index = match index_title {
        Some(title) => Some(index::write_index(dir, title, &stamp)?.0),
        None => None,
    };

    Ok(RegenerateReport { plans, index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::text::render_plan_text;
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 12)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gibt-es-nicht");
        let err = regenerate(&missing, None, now()).unwrap_err();
        assert!(matches!(err, RegenerateError::NotADirectory(_)));
        assert!(err.to_string().ends_with("ist kein gueltiges Verzeichnis"));
    }

    #[test]
    fn file_instead_of_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "datei.txt", "x");
        let err = regenerate(&tmp.path().join("datei.txt"), None, now()).unwrap_err();
        assert!(matches!(err, RegenerateError::NotADirectory(_)));
    }

    #[test]
    fn directory_without_plans_is_error() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "kw19.txt", "Titel");
        write(tmp.path(), "wochenplan_2024-05-10.html", "<p></p>");
        let err = regenerate(tmp.path(), None, now()).unwrap_err();
        assert!(matches!(err, RegenerateError::NoPlans(_)));
    }

    #[test]
    fn sources_sorted_by_date() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "wochenplan_2024-05-17.txt", "B");
        write(tmp.path(), "wochenplan_2023-12-29.txt", "A");
        let dates: Vec<NaiveDate> = find_plan_sources(tmp.path())
            .unwrap()
            .into_iter()
            .map(|(d, _)| d)
            .collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2023, 12, 29).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            ]
        );
    }

    #[test]
    fn writes_canonical_and_year_alias() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "wochenplan_2024-05-10.txt",
            &render_plan_text(&sample_plan()),
        );
        let report = regenerate(tmp.path(), Some("Alle Wochenplaene"), now()).unwrap();

        assert_eq!(report.plans.len(), 1);
        let plan = &report.plans[0];
        assert_eq!(plan.title, "Woechentliche Ernaehrung (leberwertfreundlich)");
        assert_eq!(plan.alias, tmp.path().join("kw19-2024.html"));

        let page = fs::read_to_string(&plan.html).unwrap();
        assert_eq!(page, fs::read_to_string(&plan.alias).unwrap());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<p>KW 19/2024</p>"));
        assert!(page.contains("<footer>Aktualisiert am 12.05.2024 09:30</footer>"));
        assert_eq!(count(&page, "<section>"), 6);
        assert!(!tmp.path().join("kw19.html").exists());
    }

    #[test]
    fn index_written_unless_skipped() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "wochenplan_2024-05-10.txt", "Titel\n");

        let report = regenerate(tmp.path(), None, now()).unwrap();
        assert_eq!(report.index, None);
        assert!(!tmp.path().join("index.html").exists());

        let report = regenerate(tmp.path(), Some("Plaene"), now()).unwrap();
        let index = report.index.unwrap();
        let html = fs::read_to_string(index).unwrap();
        assert!(html.contains("<h1>Plaene</h1>"));
        assert!(html.contains(r#"href="kw19-2024.html""#));
    }

    #[test]
    fn empty_text_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "wochenplan_2024-05-10.txt", "\n\n");
        let err = regenerate(tmp.path(), None, now()).unwrap_err();
        assert!(matches!(
            err,
            RegenerateError::Transduce {
                source: TransduceError::MissingTitle,
                ..
            }
        ));
        assert!(err.to_string().contains("wochenplan_2024-05-10.txt"));
    }

    #[test]
    fn hand_edited_markup_is_escaped() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "wochenplan_2024-05-10.txt",
            "Plan <neu>\nGericht 1: Salat & Brot\n",
        );
        let report = regenerate(tmp.path(), None, now()).unwrap();
        let page = fs::read_to_string(&report.plans[0].html).unwrap();
        assert!(page.contains("<title>Plan &lt;neu&gt;</title>"));
        assert!(page.contains("<h2>Gericht 1: Salat &amp; Brot</h2>"));
    }
}
