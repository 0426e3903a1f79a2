//! Plain-text rendering of a plan.
//!
//! The text file is the canonical artifact: the HTML page can always be
//! rebuilt from it by [`crate::transduce`], so the shape written here is the
//! de facto file format. Every line is one of:
//!
//! ```text
//! Woechentliche Ernaehrung (leberwertfreundlich)   ← title (first line)
//! Gericht 1: <name>                                ← meal section
//! <Label>: <value>                                 ← labeled field
//! - <item>                                         ← list item
//!                                                  ← blank: ends a list
//! ```
//!
//! Field labels come from [`Label`] so the writer and the reader share one
//! vocabulary. Text is written verbatim, never escaped.

use crate::select::{PLAN_TITLE, SelectedPlan};
use crate::transduce::Label;

/// Prefix of every meal heading line.
pub const MEAL_HEADING_PREFIX: &str = "Gericht ";

/// Prefix of every list item line.
pub const LIST_ITEM_PREFIX: &str = "- ";

/// Render `plan` as the canonical plan text. No trailing newline.
pub fn render_plan_text(plan: &SelectedPlan) -> String {
    let mut lines: Vec<String> = vec![PLAN_TITLE.to_string(), String::new()];

    for (idx, meal) in plan.meals.iter().enumerate() {
        lines.push(format!("{}{}: {}", MEAL_HEADING_PREFIX, idx + 1, meal.name));
        lines.push(field(Label::PrepTime, meal.prep_time));
        lines.push(format!("{}:", Label::Ingredients.as_str()));
        for ingredient in meal.ingredients {
            lines.push(item(ingredient));
        }
        lines.push(field(Label::Instructions, meal.instructions));
        lines.push(field(Label::NutritionFocus, meal.benefit));
        if let Some(tip) = meal.batch_tip() {
            lines.push(field(Label::BatchTip, tip));
        }
        if let Some(tm) = meal.thermomix {
            lines.push(field(Label::Thermomix, tm));
        }
        lines.push(String::new());
    }

    lines.push(format!("{}:", Label::Snacks.as_str()));
    for snack in &plan.snacks {
        lines.push(item(&format!(
            "{}: {} ({})",
            snack.timing, snack.idea, snack.reason
        )));
    }
    lines.push(String::new());

    lines.push(format!("{}:", Label::Beverage.as_str()));
    lines.push(item(plan.beverage_tip));
    lines.push(String::new());

    lines.push(format!("{}:", Label::Hints.as_str()));
    for hint in plan.hints {
        lines.push(item(hint));
    }

    lines.join("\n")
}

fn field(label: Label, value: &str) -> String {
    format!("{}: {}", label.as_str(), value)
}

fn item(text: &str) -> String {
    format!("{}{}", LIST_ITEM_PREFIX, text)
}
