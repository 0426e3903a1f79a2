//! CLI output formatting for all commands.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Wochenplaene gespeichert unter out/wochenplan_2024-05-10.txt, out/wochenplan_2024-05-10.html sowie Alias out/kw19-2024.html / out/kw19.html (KW 19/2024)
//!     001 Quark-Beeren-Bowl mit Chiasamen
//!     002 Bohnen-Chili mit Paprika und Mais
//!     003 Fenchel-Orangen-Salat mit Edamame
//! Index → out/index.html
//! ```
//!
//! ## Render
//!
//! ```text
//! KW 19/2024 → out/wochenplan_2024-05-10.html
//!     Source: wochenplan_2024-05-10.txt
//!     Alias: kw19-2024.html
//! Index → out/index.html
//! Regenerated 1 plan
//! ```
//!
//! ## Refresh
//!
//! ```text
//! Plan bereits vorhanden: KW 19/2024 (Start 2024-05-06)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use std::path::Path;

use crate::generate::GenerateReport;
use crate::naming::week_label;
use crate::refresh::RefreshOutcome;
use crate::regenerate::RegenerateReport;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let p = &report.paths;
    let mut lines = vec![format!(
        "Wochenplaene gespeichert unter {}, {} sowie Alias {} / {} ({})",
        p.text.display(),
        p.html.display(),
        p.year_html.display(),
        p.legacy_html.display(),
        week_label(report.date),
    )];
    for (idx, meal) in report.meals.iter().enumerate() {
        lines.push(format!("{}{} {}", indent(1), format_index(idx + 1), meal));
    }
    lines.push(format!("Index → {}", report.index.display()));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Render
// ============================================================================

pub fn format_regenerate_output(report: &RegenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    for plan in &report.plans {
        lines.push(format!("{} → {}", week_label(plan.date), plan.html.display()));
        lines.push(format!("{}Source: {}", indent(1), file_name(&plan.source)));
        lines.push(format!("{}Alias: {}", indent(1), file_name(&plan.alias)));
    }
    if let Some(index) = &report.index {
        lines.push(format!("Index → {}", index.display()));
    }
    lines.push(format!(
        "Regenerated {}",
        plural(report.plans.len(), "plan", "plans")
    ));
    lines
}

pub fn print_regenerate_output(report: &RegenerateReport) {
    for line in format_regenerate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Refresh / Index
// ============================================================================

/// Nothing to report after a generator run; the child prints its own summary.
pub fn format_refresh_output(outcome: &RefreshOutcome) -> Vec<String> {
    match outcome {
        RefreshOutcome::Existing { monday, .. } => vec![format!(
            "Plan bereits vorhanden: {} (Start {})",
            week_label(*monday),
            monday.format("%Y-%m-%d")
        )],
        RefreshOutcome::Generated { .. } => Vec::new(),
    }
}

pub fn print_refresh_output(outcome: &RefreshOutcome) {
    for line in format_refresh_output(outcome) {
        println!("{}", line);
    }
}

pub fn format_index_output(path: &Path, plans: usize) -> Vec<String> {
    vec![format!(
        "Index → {} ({})",
        path.display(),
        plural(plans, "plan", "plans")
    )]
}

pub fn print_index_output(path: &Path, plans: usize) {
    for line in format_index_output(path, plans) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::PlanPaths;
    use crate::regenerate::RegeneratedPlan;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn indent_depth() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "plan", "plans"), "1 plan");
        assert_eq!(plural(0, "plan", "plans"), "0 plans");
    }

    // =========================================================================
    // Command output tests
    // =========================================================================

    #[test]
    fn generate_summary_line() {
        let report = GenerateReport {
            date: friday(),
            paths: PlanPaths::new(Path::new("out"), friday()),
            index: PathBuf::from("out/index.html"),
            meals: vec!["A".into(), "B".into(), "C".into()],
        };
        let lines = format_generate_output(&report);
        assert_eq!(
            lines[0],
            "Wochenplaene gespeichert unter out/wochenplan_2024-05-10.txt, \
             out/wochenplan_2024-05-10.html sowie Alias out/kw19-2024.html / out/kw19.html \
             (KW 19/2024)"
        );
        assert_eq!(lines[1], "    001 A");
        assert_eq!(lines[3], "    003 C");
        assert_eq!(lines[4], "Index → out/index.html");
    }

    #[test]
    fn regenerate_lists_plans() {
        let report = RegenerateReport {
            plans: vec![RegeneratedPlan {
                date: friday(),
                title: "T".into(),
                source: PathBuf::from("out/wochenplan_2024-05-10.txt"),
                html: PathBuf::from("out/wochenplan_2024-05-10.html"),
                alias: PathBuf::from("out/kw19-2024.html"),
            }],
            index: None,
        };
        assert_eq!(
            format_regenerate_output(&report),
            vec![
                "KW 19/2024 → out/wochenplan_2024-05-10.html",
                "    Source: wochenplan_2024-05-10.txt",
                "    Alias: kw19-2024.html",
                "Regenerated 1 plan",
            ]
        );
    }

    #[test]
    fn refresh_existing_message() {
        let outcome = RefreshOutcome::Existing {
            monday: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            plan: PathBuf::from("out/wochenplan_2024-05-10.txt"),
        };
        assert_eq!(
            format_refresh_output(&outcome),
            vec!["Plan bereits vorhanden: KW 19/2024 (Start 2024-05-06)"]
        );
    }

    #[test]
    fn refresh_generated_is_silent() {
        let outcome = RefreshOutcome::Generated {
            monday: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
        };
        assert!(format_refresh_output(&outcome).is_empty());
    }

    #[test]
    fn index_line() {
        assert_eq!(
            format_index_output(Path::new("out/index.html"), 3),
            vec!["Index → out/index.html (3 plans)"]
        );
    }
}
