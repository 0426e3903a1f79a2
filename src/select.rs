//! Plan selection.
//!
//! Draws one week's plan from a [`Catalog`]: three distinct meals, two
//! distinct snacks and one beverage tip. The meal draw guarantees three roles:
//!
//! 1. **Quick**: ready within `quick_max_minutes` (15 by default).
//! 2. **Freezer-friendly**: a batch-cooking meal.
//! 3. **Salad**.
//!
//! Each role is filled in that order, preferring a meal that isn't already in
//! the plan. If every candidate for a role is already selected the role counts
//! as covered and nothing is added, so one meal may fill two roles. Roles never
//! add more than one meal each, which means the guarantees always fit inside
//! the three slots and padding only ever fills up, never truncates.
//!
//! Missing roles and undersized lists are catalog errors, checked before any
//! randomness is consumed. The random source is injected so tests can seed it.

use crate::catalog::{Catalog, Meal, Snack};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use thiserror::Error;

/// Title line shared by the text and HTML renderings.
pub const PLAN_TITLE: &str = "Woechentliche Ernaehrung (leberwertfreundlich)";

pub const MEALS_PER_PLAN: usize = 3;
pub const SNACKS_PER_PLAN: usize = 2;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectError {
    #[error("No quick meal (at most {0} minutes) in the catalog")]
    NoQuickMeal(u32),
    #[error("No freezer-friendly meal in the catalog")]
    NoFreezerMeal,
    #[error("No salad in the catalog")]
    NoSaladMeal,
    #[error("Catalog has {0} meals, a plan needs {MEALS_PER_PLAN}")]
    TooFewMeals(usize),
    #[error("Catalog has {0} snacks, a plan needs {SNACKS_PER_PLAN}")]
    TooFewSnacks(usize),
    #[error("Catalog has no beverage tips")]
    NoBeverageTips,
}

/// Tunables for the meal draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRules {
    /// Upper bound (inclusive) for a meal to count as quick.
    pub quick_max_minutes: u32,
}

impl Default for SelectionRules {
    fn default() -> Self {
        Self {
            quick_max_minutes: 15,
        }
    }
}

/// One week's selection. Borrowed from the catalog; never persisted.
#[derive(Debug, Clone)]
pub struct SelectedPlan<'a> {
    /// Exactly [`MEALS_PER_PLAN`] distinct meals in display order.
    pub meals: Vec<&'a Meal>,
    /// Exactly [`SNACKS_PER_PLAN`] distinct snacks.
    pub snacks: Vec<&'a Snack>,
    pub beverage_tip: &'a str,
    pub hints: &'a [&'static str],
}

/// Draw a plan from `catalog` using `rng`.
pub fn select_plan<'a, R: Rng + ?Sized>(
    catalog: &Catalog<'a>,
    rules: &SelectionRules,
    rng: &mut R,
) -> Result<SelectedPlan<'a>, SelectError> {
    let meals = catalog.meals;
    let quick = indices_where(meals, |m| m.is_quick(rules.quick_max_minutes));
    let freezer = indices_where(meals, Meal::is_freezer_friendly);
    let salad = indices_where(meals, |m| m.is_salad);

    if quick.is_empty() {
        return Err(SelectError::NoQuickMeal(rules.quick_max_minutes));
    }
    if freezer.is_empty() {
        return Err(SelectError::NoFreezerMeal);
    }
    if salad.is_empty() {
        return Err(SelectError::NoSaladMeal);
    }
    if meals.len() < MEALS_PER_PLAN {
        return Err(SelectError::TooFewMeals(meals.len()));
    }
    if catalog.snacks.len() < SNACKS_PER_PLAN {
        return Err(SelectError::TooFewSnacks(catalog.snacks.len()));
    }
    if catalog.beverage_tips.is_empty() {
        return Err(SelectError::NoBeverageTips);
    }

    let mut selected: Vec<usize> = Vec::with_capacity(MEALS_PER_PLAN);
    for role in [&quick, &freezer, &salad] {
        fill_role(role, &mut selected, rng);
    }

    let remaining: Vec<usize> = (0..meals.len())
        .filter(|i| !selected.contains(i))
        .collect();
    let needed = MEALS_PER_PLAN - selected.len();
    selected.extend(remaining.choose_multiple(rng, needed).copied());
    selected.shuffle(rng);

    let snacks: Vec<&Snack> = catalog
        .snacks
        .choose_multiple(rng, SNACKS_PER_PLAN)
        .collect();
    let beverage_tip = catalog
        .beverage_tips
        .choose(rng)
        .copied()
        .ok_or(SelectError::NoBeverageTips)?;

    Ok(SelectedPlan {
        meals: selected.into_iter().map(|i| &meals[i]).collect(),
        snacks,
        beverage_tip,
        hints: catalog.hints,
    })
}

fn indices_where(meals: &[Meal], pred: impl Fn(&Meal) -> bool) -> Vec<usize> {
    meals
        .iter()
        .enumerate()
        .filter(|(_, m)| pred(*m))
        .map(|(i, _)| i)
        .collect()
}

/// Add one candidate not yet in `selected`. If all candidates are already
/// selected the role is covered and `selected` is left alone.
fn fill_role<R: Rng + ?Sized>(candidates: &[usize], selected: &mut Vec<usize>, rng: &mut R) {
    let fresh: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|i| !selected.contains(i))
        .collect();
    if let Some(&pick) = fresh.choose(rng) {
        selected.push(pick);
    }
}
