//! Shared test utilities for the wochenplan test suite.
//!
//! Provides meal builders for hand-made catalogs, a seeded random source, a
//! fixed sample plan drawn from the built-in catalog, and a few structural
//! helpers for asserting on rendered HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = catalog_of(vec![
//!     meal("Bowl").with_prep("10 Minuten"),
//!     meal("Eintopf").freezer(None),
//!     meal("Salat").salad(),
//! ]);
//! let plan = select_plan(&catalog, &SelectionRules::default(), &mut seeded(1)).unwrap();
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::{self, Catalog, FreezerNote, Meal};
use crate::select::SelectedPlan;

// =========================================================================
// Catalog builders
// =========================================================================

/// A plain 30-minute meal with one ingredient and no optional capabilities.
pub fn meal(name: &'static str) -> Meal {
    Meal {
        name,
        prep_time: "30 Minuten",
        ingredients: &["1 Zutat"],
        instructions: "Alles zusammen garen.",
        benefit: "Liefert Ballaststoffe.",
        is_salad: false,
        freezer: None,
        thermomix: None,
    }
}

/// Chainable tweaks for [`meal`].
pub trait MealExt {
    fn with_prep(self, prep_time: &'static str) -> Self;
    fn salad(self) -> Self;
    fn freezer(self, note: Option<&'static str>) -> Self;
    fn thermomix(self, text: &'static str) -> Self;
    fn ingredients(self, items: &'static [&'static str]) -> Self;
}

impl MealExt for Meal {
    fn with_prep(mut self, prep_time: &'static str) -> Self {
        self.prep_time = prep_time;
        self
    }

    fn salad(mut self) -> Self {
        self.is_salad = true;
        self
    }

    fn freezer(mut self, note: Option<&'static str>) -> Self {
        self.freezer = Some(FreezerNote { note });
        self
    }

    fn thermomix(mut self, text: &'static str) -> Self {
        self.thermomix = Some(text);
        self
    }

    fn ingredients(mut self, items: &'static [&'static str]) -> Self {
        self.ingredients = items;
        self
    }
}

/// A catalog with the given meals and the built-in snacks, tips and hints.
///
/// The meal list is leaked; fine for tests.
pub fn catalog_of(meals: Vec<Meal>) -> Catalog<'static> {
    Catalog {
        meals: Box::leak(meals.into_boxed_slice()),
        ..catalog::builtin()
    }
}

/// Deterministic random source.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// =========================================================================
// Fixed sample plan
// =========================================================================

/// Find a built-in meal by name. Panics if not found.
pub fn builtin_meal(name: &str) -> &'static Meal {
    catalog::MEALS
        .iter()
        .find(|m| m.name == name)
        .unwrap_or_else(|| {
            let names: Vec<&str> = catalog::MEALS.iter().map(|m| m.name).collect();
            panic!("meal '{name}' not found. Available: {names:?}")
        })
}

/// A hand-picked plan: a quick bowl, a freezer chili and a salad.
pub fn sample_plan() -> SelectedPlan<'static> {
    SelectedPlan {
        meals: vec![
            builtin_meal("Quark-Beeren-Bowl mit Chiasamen"),
            builtin_meal("Bohnen-Chili mit Paprika und Mais"),
            builtin_meal("Fenchel-Orangen-Salat mit Edamame"),
        ],
        snacks: vec![&catalog::SNACKS[0], &catalog::SNACKS[4]],
        beverage_tip: catalog::BEVERAGE_TIPS[2],
        hints: catalog::GENERAL_HINTS,
    }
}

/// A plan whose free text is full of markup characters.
pub fn hostile_plan() -> SelectedPlan<'static> {
    let meal: &'static Meal = Box::leak(Box::new(
        meal("Tofu <scharf> & Reis")
            .with_prep("10 Minuten")
            .ingredients(&["200 g Tofu <fest>", "Salz & Pfeffer"])
            .freezer(Some("Nicht > 3 Monate einfrieren"))
            .thermomix("5 Sek/Stufe 5 <Linkslauf>"),
    ));
    let plan = sample_plan();
    SelectedPlan {
        meals: vec![meal, plan.meals[1], plan.meals[2]],
        ..plan
    }
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert that no value appears twice.
pub fn assert_distinct(values: &[&str]) {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), values.len(), "duplicates in {values:?}");
}

/// Count non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
