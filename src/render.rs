//! HTML page rendering for a freshly selected plan.
//!
//! Produces the same sections as [`crate::text`], in the same order, as a
//! self-contained page with an inline stylesheet. All free text goes through
//! maud's escaping; nothing is inserted raw except the stylesheet itself.
//!
//! The page shell ([`plan_page`]) is shared with [`crate::regenerate`], which
//! fills it with the body rebuilt from a text file plus an update footer.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::catalog::{Meal, Snack};
use crate::select::{PLAN_TITLE, SelectedPlan};
use crate::transduce::Label;

const PLAN_CSS: &str = include_str!("../static/plan.css");

/// Render the complete page for `plan`. Deterministic for a given plan.
pub fn render_plan_html(plan: &SelectedPlan) -> Markup {
    plan_page(PLAN_TITLE, render_plan_body(plan), None)
}

/// Body content only: title, meal sections, closing sections.
pub fn render_plan_body(plan: &SelectedPlan) -> Markup {
    html! {
        h1 { (PLAN_TITLE) }
        @for (idx, meal) in plan.meals.iter().enumerate() {
            (meal_section(idx + 1, meal))
        }
        section {
            h2 { (Label::Snacks.as_str()) }
            ul {
                @for snack in &plan.snacks {
                    (snack_item(snack))
                }
            }
        }
        section {
            h2 { (Label::Beverage.as_str()) }
            p { (plan.beverage_tip) }
        }
        section {
            h2 { (Label::Hints.as_str()) }
            ul {
                @for hint in plan.hints {
                    li { (hint) }
                }
            }
        }
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Page shell shared by direct and regenerated plan pages.
pub fn plan_page(title: &str, content: Markup, footer: Option<&str>) -> Markup {
    base_document(title, PLAN_CSS, html! {
        (content)
        @if let Some(text) = footer {
            footer { (text) }
        }
    })
}

/// Renders the base HTML document structure
pub(crate) fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="de" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn meal_section(number: usize, meal: &Meal) -> Markup {
    html! {
        section {
            h2 { "Gericht " (number) ": " (meal.name) }
            (field(Label::PrepTime, meal.prep_time))
            h3 { (Label::Ingredients.as_str()) }
            ul {
                @for ingredient in meal.ingredients {
                    li { (ingredient) }
                }
            }
            (field(Label::Instructions, meal.instructions))
            (field(Label::NutritionFocus, meal.benefit))
            @if let Some(tip) = meal.batch_tip() {
                (field(Label::BatchTip, tip))
            }
            @if let Some(tm) = meal.thermomix {
                (field(Label::Thermomix, tm))
            }
        }
    }
}

fn snack_item(snack: &Snack) -> Markup {
    html! {
        li {
            strong { (snack.timing.label()) ":" }
            " " (snack.idea) " (" (snack.reason) ")"
        }
    }
}

fn field(label: Label, value: &str) -> Markup {
    html! {
        p { strong { (label.as_str()) ":" } " " (value) }
    }
}
