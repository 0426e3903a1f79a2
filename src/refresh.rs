//! Weekly refresh: make sure a plan exists for a target week.
//!
//! Meant for a scheduler that fires more often than once a week. It looks for
//! a canonical text file dated inside the target ISO week and only runs the
//! generator when there is none (or when forced). The generator runs as a
//! separate `wochenplan generate --force` process so a refresh behaves
//! exactly like a manual invocation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use chrono::NaiveDate;
use thiserror::Error;

use crate::naming::{self, TEXT_EXT};
use crate::schedule::{self, ScheduleError};

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("Generator fehlgeschlagen: {0}")]
    GeneratorFailed(ExitStatus),
    #[error("Generator konnte nicht gestartet werden: {0}")]
    Spawn(#[source] io::Error),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshOptions {
    pub force: bool,
    pub week_offset: i64,
    pub next_week: bool,
}

impl RefreshOptions {
    /// Offset handed to the generator.
    pub fn total_offset(&self) -> i64 {
        self.week_offset.saturating_add(i64::from(self.next_week))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A plan for the week was already there; nothing was run.
    Existing { monday: NaiveDate, plan: PathBuf },
    /// The generator ran.
    Generated { monday: NaiveDate },
}

/// Runs the generator for a week offset.
pub trait GeneratorRunner {
    fn run(&mut self, week_offset: i64) -> Result<(), RefreshError>;
}

/// Invokes a `wochenplan` binary as a child process.
#[derive(Debug, Clone)]
pub struct SubprocessGenerator {
    pub exe: PathBuf,
    pub config: PathBuf,
    pub dir: Option<PathBuf>,
}

impl SubprocessGenerator {
    pub fn command(&self, week_offset: i64) -> Command {
        let mut cmd = Command::new(&self.exe);
        cmd.arg("--config").arg(&self.config);
        if let Some(dir) = &self.dir {
            cmd.arg("--dir").arg(dir);
        }
        cmd.arg("generate").arg("--force");
        if week_offset != 0 {
            cmd.arg(format!("--week-offset={week_offset}"));
        }
        cmd
    }
}

impl GeneratorRunner for SubprocessGenerator {
    fn run(&mut self, week_offset: i64) -> Result<(), RefreshError> {
        let mut cmd = self.command(week_offset);
        tracing::info!(?cmd, "running generator");
        let status = cmd.status().map_err(RefreshError::Spawn)?;
        if !status.success() {
            return Err(RefreshError::GeneratorFailed(status));
        }
        Ok(())
    }
}

/// Canonical text plan in `dir` dated inside the ISO week of `monday`.
///
/// A missing directory simply has no plans.
pub fn find_plan_in_week(dir: &Path, monday: NaiveDate) -> io::Result<Option<PathBuf>> {
    if !dir.is_dir() {
        return Ok(None);
    }
    let mut found: Vec<(NaiveDate, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let date = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| naming::parse_plan_filename(n, TEXT_EXT));
        if let Some(date) = date.filter(|d| schedule::in_week_of(*d, monday)) {
            found.push((date, path));
        }
    }
    found.sort();
    Ok(found.pop().map(|(_, path)| path))
}

pub fn refresh<G: GeneratorRunner + ?Sized>(
    dir: &Path,
    options: &RefreshOptions,
    today: NaiveDate,
    generator: &mut G,
) -> Result<RefreshOutcome, RefreshError> {
    let monday = schedule::refresh_target(today, options.week_offset, options.next_week)?;

    if !options.force {
        if let Some(plan) = find_plan_in_week(dir, monday)? {
            tracing::debug!(plan = %plan.display(), "plan already present");
            return Ok(RefreshOutcome::Existing { monday, plan });
        }
    }

    generator.run(options.total_offset())?;
    Ok(RefreshOutcome::Generated { monday })
}
