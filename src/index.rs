//! `index.html`: every plan in the output directory, grouped by ISO year.
//!
//! Only canonical HTML files (`wochenplan_YYYY-MM-DD.html`) count as plans.
//! Each entry links to the first file that exists among the year alias, the
//! legacy alias and the canonical page, so the listing keeps working for
//! directories written before year aliases existed.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use maud::{Markup, html};

use crate::naming::{
    self, HTML_EXT, INDEX_FILE, canonical_stem, format_period, legacy_alias_stem,
    year_alias_stem,
};
use crate::render::base_document;

const INDEX_CSS: &str = include_str!("../static/index.css");
const INDEX_PAGE_TITLE: &str = "Ernaehrungsplaene";
pub const EMPTY_PLACEHOLDER: &str = "Noch keine Wochenplaene verfuegbar.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub date: NaiveDate,
    pub week: u32,
    pub year: i32,
    /// File name relative to the index.
    pub href: String,
    /// `KW 19/2024 - 10.05.2024 - 16.05.2024`
    pub label: String,
}

impl IndexEntry {
    fn resolve(dir: &Path, date: NaiveDate) -> Self {
        let (week, year) = naming::iso_week(date);
        let candidates = [
            format!("{}.{HTML_EXT}", year_alias_stem(date)),
            format!("{}.{HTML_EXT}", legacy_alias_stem(date)),
        ];
        let href = candidates
            .into_iter()
            .find(|name| dir.join(name).is_file())
            .unwrap_or_else(|| format!("{}.{HTML_EXT}", canonical_stem(date)));
        Self {
            date,
            week,
            year,
            href,
            label: format!("KW {week:02}/{year} - {}", format_period(date)),
        }
    }
}

/// Index entries for all canonical HTML plans in `dir`, unordered.
pub fn scan_plans(dir: &Path) -> io::Result<Vec<IndexEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(date) = name
            .to_str()
            .and_then(|n| naming::parse_plan_filename(n, HTML_EXT))
        else {
            continue;
        };
        entries.push(IndexEntry::resolve(dir, date));
    }
    Ok(entries)
}

/// Group by ISO year; years descending, dates descending within a year.
pub fn group_by_year(entries: Vec<IndexEntry>) -> Vec<(i32, Vec<IndexEntry>)> {
    let mut groups: BTreeMap<i32, Vec<IndexEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.year).or_default().push(entry);
    }
    groups
        .into_iter()
        .rev()
        .map(|(year, mut list)| {
            list.sort_by(|a, b| b.date.cmp(&a.date));
            (year, list)
        })
        .collect()
}

pub fn render_index(
    title: &str,
    groups: &[(i32, Vec<IndexEntry>)],
    generated_at: &str,
) -> Markup {
    base_document(INDEX_PAGE_TITLE, INDEX_CSS, html! {
        h1 { (title) }
        p.meta { "Aktualisiert am " (generated_at) }
        @if groups.is_empty() {
            p { (EMPTY_PLACEHOLDER) }
        }
        @for (year, entries) in groups {
            section.year-group {
                h2 { (year) }
                ul {
                    @for entry in entries {
                        li { a href=(entry.href) { (entry.label) } }
                    }
                }
            }
        }
    })
}

/// Scan `dir` and rewrite its `index.html`. Returns the path and entry count.
pub fn write_index(dir: &Path, title: &str, generated_at: &str) -> io::Result<(PathBuf, usize)> {
    fs::create_dir_all(dir)?;
    let entries = scan_plans(dir)?;
    let count = entries.len();
    let groups = group_by_year(entries);
    let path = dir.join(INDEX_FILE);
    fs::write(&path, render_index(title, &groups, generated_at).into_string())?;
    tracing::debug!(path = %path.display(), plans = count, "index written");
    Ok((path, count))
}
