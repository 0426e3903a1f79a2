//! Plan generation.
//!
//! Selects a plan, renders both encodings and writes them to the output
//! directory together with their week aliases, then rebuilds the index.
//!
//! ## Output Structure
//!
//! ```text
//! wochenplaene/
//! ├── index.html                   # All plans, grouped by ISO year
//! ├── wochenplan_2024-05-10.txt    # Canonical text (source of truth)
//! ├── wochenplan_2024-05-10.html   # Canonical page
//! ├── kw19-2024.txt / .html        # Year alias, byte-identical copies
//! └── kw19.txt / .html             # Legacy alias, byte-identical copies
//! ```
//!
//! ## Guards
//!
//! Without `force`, generation refuses to run on any day other than the
//! configured generation day and refuses to touch a week whose files already
//! exist. With `force`, canonical files are overwritten and existing aliases
//! are deleted and written again.
//!
//! Selection and rendering finish before the first write, so a selection
//! failure leaves the directory untouched.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::{ConfigError, PlannerConfig};
use crate::index;
use crate::naming::{PlanPaths, format_timestamp};
use crate::render::render_plan_html;
use crate::schedule::{self, ScheduleError};
use crate::select::{SelectError, select_plan};
use crate::text::render_plan_text;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Heute ist kein {day}. Nutze die Option --force, um trotzdem einen Plan zu erstellen.")]
    WrongDay { day: &'static str },
    #[error(
        "Es existiert bereits eine Datei fuer diese Woche ({}). Nutze --force, um sie zu ueberschreiben.",
        .0.display()
    )]
    AlreadyExists(PathBuf),
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Skip the day gate and overwrite existing files.
    pub force: bool,
    /// Shift the plan date by this many weeks.
    pub week_offset: i64,
}

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub date: NaiveDate,
    pub paths: PlanPaths,
    pub index: PathBuf,
    pub meals: Vec<String>,
}

/// Generate the plan for `today` (shifted by `options.week_offset`).
///
/// `now` only feeds the index timestamp; plan files do not depend on it.
pub fn generate<R: Rng + ?Sized>(
    config: &PlannerConfig,
    catalog: &Catalog,
    options: &GenerateOptions,
    today: NaiveDate,
    now: NaiveDateTime,
    rng: &mut R,
) -> Result<GenerateReport, GenerateError> {
    let date = schedule::shift_weeks(today, options.week_offset)?;
    let dir = config.output_path();
    let paths = PlanPaths::new(&dir, date);

    if !options.force {
        let day = config.generation_weekday()?;
        if !schedule::is_generation_day(today, day) {
            return Err(GenerateError::WrongDay {
                day: schedule::weekday_name(day),
            });
        }
        if let Some(existing) = paths.all().into_iter().find(|p| p.exists()) {
            return Err(GenerateError::AlreadyExists(existing.to_path_buf()));
        }
    }

    let plan = select_plan(catalog, &config.selection_rules(), rng)?;
    let text = render_plan_text(&plan);
    let html = render_plan_html(&plan).into_string();
    let meals: Vec<String> = plan.meals.iter().map(|m| m.name.to_string()).collect();
    tracing::info!(%date, ?meals, "plan selected");

    fs::create_dir_all(&dir)?;
    write_plan_files(&paths, &text, &html)?;

    let (index, plans) = index::write_index(&dir, &config.index.title, &format_timestamp(now))?;
    tracing::debug!(plans, "index rebuilt");

    Ok(GenerateReport {
        date,
        paths,
        index,
        meals,
    })
}

fn write_plan_files(paths: &PlanPaths, text: &str, html: &str) -> std::io::Result<()> {
    fs::write(&paths.text, text)?;
    fs::write(&paths.html, html)?;

    for alias in paths.aliases() {
        if alias.exists() {
            tracing::debug!(path = %alias.display(), "removing stale alias");
            fs::remove_file(alias)?;
        }
    }
    for (alias, content) in [
        (&paths.year_text, text),
        (&paths.year_html, html),
        (&paths.legacy_text, text),
        (&paths.legacy_html, html),
    ] {
        write_file(alias, content)?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "written");
    Ok(())
}
