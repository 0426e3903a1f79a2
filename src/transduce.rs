//! Plan text → HTML.
//!
//! Reads a plan text file (see [`crate::text`]) back into a small document
//! tree so a hand-edited text file can be turned into a page again. This is a
//! reverse mapping for one fixed vocabulary, not a general markup language:
//! the structure is driven entirely by line prefixes and the [`Label`] table.
//!
//! ## Line classes
//!
//! Every trimmed line is classified once by [`classify`]:
//!
//! | Line                         | Class                 |
//! |------------------------------|-----------------------|
//! | empty                        | [`LineKind::Blank`]   |
//! | `Gericht …`                  | [`LineKind::MealHeading`] |
//! | `- …`                        | [`LineKind::ListItem`] |
//! | contains `:`                 | [`LineKind::Labeled`] (split on the first `:`) |
//! | anything else                | [`LineKind::Plain`]   |
//!
//! ## States
//!
//! The transducer is either outside any section, inside a section, or inside
//! a list within a section. Orthogonally it may be collecting ingredients:
//! list items after a `Zutaten:` line are remembered until the section's
//! `Thermomix:` line, which is followed by a synthesized `Einkaufsliste`
//! paragraph joining them. That happens at most once per ingredient block.
//!
//! - A blank line closes an open list and stops collecting. It never closes
//!   the section.
//! - A meal heading or one of the three top-level labels always closes the
//!   current section and opens a new one.
//! - Any other content outside a section implicitly opens an untitled one.
//!
//! The first non-empty line is the document title and is not part of the body.

use chrono::{Datelike, NaiveDate};
use maud::{Markup, html};
use thiserror::Error;

use crate::text::{LIST_ITEM_PREFIX, MEAL_HEADING_PREFIX};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransduceError {
    #[error("Plan text must contain a title on the first non-empty line")]
    MissingTitle,
}

/// Label of the synthesized shopping-list paragraph.
pub const SHOPPING_LIST_LABEL: &str = "Einkaufsliste";

/// Every field label the plan format knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    PrepTime,
    Ingredients,
    Instructions,
    NutritionFocus,
    BatchTip,
    Thermomix,
    Snacks,
    Beverage,
    Hints,
}

/// What a known label does to the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    /// Closes the current section and heads a new one.
    Section,
    /// Opens an ingredient sub-block and starts collecting.
    Ingredients,
    /// Rendered as a bold-label paragraph.
    Emphasis,
}

impl Label {
    pub const ALL: [Label; 9] = [
        Label::PrepTime,
        Label::Ingredients,
        Label::Instructions,
        Label::NutritionFocus,
        Label::BatchTip,
        Label::Thermomix,
        Label::Snacks,
        Label::Beverage,
        Label::Hints,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::PrepTime => "Zubereitungszeit",
            Label::Ingredients => "Zutaten",
            Label::Instructions => "Zubereitung",
            Label::NutritionFocus => "Naehrwertfokus",
            Label::BatchTip => "Batch-Tipp",
            Label::Thermomix => "Thermomix",
            Label::Snacks => "Zwischenmahlzeiten-Empfehlung",
            Label::Beverage => "Getraenke-Tipp",
            Label::Hints => "Allgemeine Hinweise",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn parse(s: &str) -> Option<Label> {
        Label::ALL.into_iter().find(|l| l.as_str() == s)
    }

    pub fn role(self) -> LabelRole {
        match self {
            Label::Snacks | Label::Beverage | Label::Hints => LabelRole::Section,
            Label::Ingredients => LabelRole::Ingredients,
            Label::PrepTime
            | Label::Instructions
            | Label::NutritionFocus
            | Label::BatchTip
            | Label::Thermomix => LabelRole::Emphasis,
        }
    }
}

/// Classification of one trimmed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    MealHeading(&'a str),
    /// Item text with the `- ` prefix removed.
    ListItem(&'a str),
    Labeled {
        line: &'a str,
        label: &'a str,
        known: Option<Label>,
        value: &'a str,
    },
    Plain(&'a str),
}

/// Classify a single line. The input is trimmed first.
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with(MEAL_HEADING_PREFIX) {
        return LineKind::MealHeading(line);
    }
    if let Some(item) = line.strip_prefix(LIST_ITEM_PREFIX) {
        return LineKind::ListItem(item.trim());
    }
    if let Some((label, value)) = line.split_once(':') {
        let label = label.trim();
        return LineKind::Labeled {
            line,
            label,
            known: Label::parse(label),
            value: value.trim(),
        };
    }
    LineKind::Plain(line)
}

// ============================================================================
// Document tree
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDocument {
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    pub heading: Option<String>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `<h3>` inside a section (only `Zutaten`).
    Subheading(String),
    Paragraph(String),
    /// `<p><strong>label:</strong> value</p>`
    Field { label: String, value: String },
    List(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InSection,
    InList,
}

struct Transducer {
    sections: Vec<Section>,
    state: State,
    collecting: bool,
    ingredients: Vec<String>,
}

impl Transducer {
    fn new() -> Self {
        Self {
            sections: Vec::new(),
            state: State::Outside,
            collecting: false,
            ingredients: Vec::new(),
        }
    }

    fn feed(&mut self, kind: LineKind<'_>) {
        match kind {
            LineKind::Blank => {
                self.close_list();
                self.collecting = false;
            }
            LineKind::MealHeading(line) => self.open_section(line),
            LineKind::ListItem(text) => {
                self.ensure_section();
                if self.state != State::InList {
                    self.push(Block::List(Vec::new()));
                    self.state = State::InList;
                }
                if let Some(Block::List(items)) = self.current().blocks.last_mut() {
                    items.push(text.to_string());
                }
                if self.collecting {
                    self.ingredients.push(text.to_string());
                }
            }
            LineKind::Labeled {
                line,
                label,
                known,
                value,
            } => match known.map(|l| (l, l.role())) {
                Some((l, LabelRole::Section)) => {
                    self.open_section(l.as_str());
                    if !value.is_empty() {
                        self.push(Block::Paragraph(value.to_string()));
                    }
                }
                Some((l, LabelRole::Ingredients)) => {
                    self.ensure_section();
                    self.close_list();
                    self.push(Block::Subheading(l.as_str().to_string()));
                    if !value.is_empty() {
                        self.push(Block::Paragraph(value.to_string()));
                    }
                    self.collecting = true;
                    self.ingredients.clear();
                }
                Some((l, LabelRole::Emphasis)) => {
                    self.ensure_section();
                    self.close_list();
                    self.push(field(l.as_str(), value));
                    if l == Label::Thermomix && !self.ingredients.is_empty() {
                        let list = self.ingredients.join(", ");
                        self.ingredients.clear();
                        self.push(field(SHOPPING_LIST_LABEL, &list));
                    }
                }
                None if !value.is_empty() => {
                    self.ensure_section();
                    self.close_list();
                    self.push(field(label, value));
                }
                None => self.paragraph(line),
            },
            LineKind::Plain(line) => self.paragraph(line),
        }
    }

    fn paragraph(&mut self, line: &str) {
        self.ensure_section();
        self.close_list();
        self.push(Block::Paragraph(line.to_string()));
    }

    fn open_section(&mut self, heading: &str) {
        self.sections.push(Section {
            heading: Some(heading.to_string()),
            blocks: Vec::new(),
        });
        self.state = State::InSection;
        self.collecting = false;
        self.ingredients.clear();
    }

    fn ensure_section(&mut self) {
        if self.state == State::Outside {
            self.sections.push(Section::default());
            self.state = State::InSection;
        }
    }

    fn close_list(&mut self) {
        if self.state == State::InList {
            self.state = State::InSection;
        }
    }

    fn current(&mut self) -> &mut Section {
        if self.sections.is_empty() {
            self.sections.push(Section::default());
        }
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    fn push(&mut self, block: Block) {
        self.current().blocks.push(block);
    }
}

fn field(label: &str, value: &str) -> Block {
    Block::Field {
        label: label.to_string(),
        value: value.to_string(),
    }
}

/// Parse plan text into a document tree.
pub fn parse_plan_text(raw: &str) -> Result<PlanDocument, TransduceError> {
    let mut lines = raw.lines().map(str::trim);
    let title = lines
        .by_ref()
        .find(|l| !l.is_empty())
        .ok_or(TransduceError::MissingTitle)?;

    let mut transducer = Transducer::new();
    for line in lines {
        transducer.feed(classify(line));
    }

    Ok(PlanDocument {
        title: title.to_string(),
        sections: transducer.sections,
    })
}

// ============================================================================
// HTML
// ============================================================================

/// Render the page body for a parsed plan dated `date`.
///
/// The week line (`KW 19/2024`) is derived from the date, not from the text.
pub fn render_document_body(doc: &PlanDocument, date: NaiveDate) -> Markup {
    let week = date.iso_week();
    html! {
        h1 { (doc.title) }
        p { "KW " (format!("{:02}", week.week())) "/" (week.year()) }
        @for section in &doc.sections {
            section {
                @if let Some(heading) = &section.heading {
                    h2 { (heading) }
                }
                @for block in &section.blocks {
                    (render_block(block))
                }
            }
        }
    }
}

fn render_block(block: &Block) -> Markup {
    html! {
        @match block {
            Block::Subheading(text) => h3 { (text) },
            Block::Paragraph(text) => p { (text) },
            Block::Field { label, value } => {
                p {
                    strong { (label) ":" }
                    @if !value.is_empty() {
                        " " (value)
                    }
                }
            }
            Block::List(items) => {
                ul {
                    @for item in items {
                        li { (item) }
                    }
                }
            }
        }
    }
}

/// Parse `raw` and render its body in one step.
pub fn transduce(raw: &str, date: NaiveDate) -> Result<(String, Markup), TransduceError> {
    let doc = parse_plan_text(raw)?;
    let body = render_document_body(&doc, date);
    Ok((doc.title, body))
}
