//! Weekly meal plan: seven fixed days, each an append-only list of recipes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::recipe::Recipe;

/// Day of the week a recipe can be planned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Position in [`Weekday::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Day at `index`, wrapping around the week
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::validation(format!("Unknown weekday: {wanted}")))
    }
}

/// A week of planned recipes
///
/// Appending is the only mutation, so two additions can never overwrite each
/// other. Duplicates are allowed, within a day and across days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    days: [Vec<Recipe>; 7],
}

impl MealPlan {
    /// Create a plan with all seven days empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe to the end of a day's list
    pub fn add(&mut self, day: Weekday, recipe: Recipe) {
        self.days[day.index()].push(recipe);
    }

    /// Recipes planned for a day, in the order they were added
    pub fn day(&self, day: Weekday) -> &[Recipe] {
        &self.days[day.index()]
    }

    /// Iterate days Monday..Sunday with their recipes
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Recipe])> {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day, self.day(day)))
    }

    /// Total number of planned meals across the week
    pub fn total_meals(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_meals() == 0
    }
}
