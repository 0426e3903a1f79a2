//! # Wochenplan
//!
//! Generates weekly meal plans from a compiled-in recipe catalog. Each plan
//! has three meals (at least one quick, one freezer-friendly and one salad),
//! two snacks, a beverage tip and a fixed list of general hints, and is
//! written as a plain-text file plus a self-contained HTML page.
//!
//! # Pipeline
//!
//! ```text
//! catalog ─► select ─┬─► text ───► wochenplan_<date>.txt   (+ kwWW-YYYY.txt, kwWW.txt)
//!                    └─► render ─► wochenplan_<date>.html  (+ kwWW-YYYY.html, kwWW.html)
//!                                        │
//!                          index ◄───────┘  index.html, grouped by ISO year
//!
//! wochenplan_<date>.txt ─► transduce ─► wochenplan_<date>.html (regenerate)
//! ```
//!
//! The text file is the source of truth. Anyone may edit it by hand; the
//! `render` command then rebuilds the pages from it via [`transduce`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Static meals, snacks, beverage tips and hints |
//! | [`select`] | Random plan selection with the quick/freezer/salad guarantees |
//! | [`text`] | Canonical plain-text encoding of a plan |
//! | [`render`] | HTML page for a freshly selected plan, shared page shell |
//! | [`transduce`] | Line classifier and state machine turning plan text back into HTML |
//! | [`index`] | `index.html` listing of all plans |
//! | [`naming`] | Canonical and week-alias filenames, date labels |
//! | [`schedule`] | Generation-day gate and week arithmetic |
//! | [`generate`] | Writes a plan, its aliases and the index |
//! | [`regenerate`] | Rebuilds pages from edited text files |
//! | [`refresh`] | Runs the generator only when a week has no plan yet |
//! | [`config`] | `wochenplan.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Injected Randomness and Time
//!
//! Selection takes any `rand::Rng`, and generation takes today's date and the
//! current timestamp as arguments. Tests pin both with a seeded `StdRng` and
//! fixed dates; only `main` reads the clock or the thread-local generator.
//!
//! ## Byte-Identical Aliases
//!
//! A plan is rendered once, in memory, and the same bytes go to the canonical
//! file and both aliases. Plan pages carry no timestamp, so two runs with the
//! same selection produce identical files.
//!
//! ## Maud for HTML
//!
//! All markup comes from [Maud](https://maud.lambda.xyz/) `html!` templates.
//! Every interpolation is escaped, which matters here because the text files
//! are user-editable input to the regenerator.

pub mod catalog;
pub mod config;
pub mod generate;
pub mod index;
pub mod naming;
pub mod output;
pub mod refresh;
pub mod regenerate;
pub mod render;
pub mod schedule;
pub mod select;
pub mod text;
pub mod transduce;

#[cfg(test)]
pub(crate) mod test_helpers;
