//! Canonical recipe model and the normalizer that builds it from raw upstream records
//!
//! The upstream API (TheMealDB) returns flat records with twenty numbered
//! ingredient/measure slots and a single instructions blob. [`normalize`] turns one
//! such record into a [`Recipe`], synthesizing the fields upstream does not carry
//! (`ready_in_minutes`, `health_score`) exactly once.

use std::fmt;
use std::ops::Range;

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Number of numbered ingredient/measure slots in an upstream record
pub const INGREDIENT_SLOTS: usize = 20;

/// Range of the synthetic preparation time, in minutes
pub const READY_IN_MINUTES_RANGE: Range<u32> = 20..50;

/// Range of the synthetic health score
pub const HEALTH_SCORE_RANGE: Range<u32> = 60..100;

const FIELD_ID: &str = "idMeal";
const FIELD_TITLE: &str = "strMeal";
const FIELD_INSTRUCTIONS: &str = "strInstructions";
const FIELD_IMAGE: &str = "strMealThumb";
const FIELD_SERVINGS: &str = "strServings";
const FIELD_CATEGORY: &str = "strCategory";
const FIELD_AREA: &str = "strArea";

/// Opaque upstream recipe identifier (`idMeal`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unmodified meal record as returned by the recipe source
///
/// Kept as a JSON object rather than a typed struct: upstream spreads one logical
/// list across forty numbered keys, and values are sometimes `null`, sometimes
/// empty strings, sometimes a single space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMeal(Map<String, Value>);

impl RawMeal {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Read a field as text. Numbers are rendered; `null` and other types are absent.
    pub fn field(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Read a field and treat whitespace-only values as absent
    fn non_blank(&self, name: &str) -> Option<String> {
        self.field(name)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn required(&self, name: &'static str) -> Result<String> {
        self.field(name).ok_or_else(|| Error::malformed(name))
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RawMeal {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// The application's normalized recipe
///
/// Immutable once constructed; the synthetic attributes are plain data and are
/// never re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    /// `"{measure} {ingredient}"` lines in upstream slot order, never blank
    pub ingredients: Vec<String>,
    /// Instruction steps in upstream order, never blank
    pub instructions: Vec<String>,
    pub ready_in_minutes: u32,
    pub health_score: u32,
    pub servings: u32,
}

/// Normalize a raw record using the thread-local random source
pub fn normalize(raw: &RawMeal) -> Result<Recipe> {
    normalize_with(raw, &mut rand::thread_rng())
}

/// Normalize a raw record, drawing the synthetic fields from `rng`
///
/// Fails with [`Error::MalformedRecord`] when `idMeal`, `strMeal` or
/// `strInstructions` is absent or null. An instructions blob with no
/// non-blank lines is valid and yields an empty step list.
pub fn normalize_with<R: Rng>(raw: &RawMeal, rng: &mut R) -> Result<Recipe> {
    let id = raw.required(FIELD_ID)?;
    let title = raw.required(FIELD_TITLE)?;
    let instructions = raw.required(FIELD_INSTRUCTIONS)?;

    Ok(Recipe {
        id: RecipeId::new(id),
        title,
        image: raw.non_blank(FIELD_IMAGE),
        category: raw.non_blank(FIELD_CATEGORY),
        area: raw.non_blank(FIELD_AREA),
        ingredients: collect_ingredients(raw),
        instructions: split_instructions(&instructions),
        ready_in_minutes: rng.gen_range(READY_IN_MINUTES_RANGE),
        health_score: rng.gen_range(HEALTH_SCORE_RANGE),
        servings: parse_servings(raw.field(FIELD_SERVINGS).as_deref()),
    })
}

/// Normalize a batch, failing on the first malformed record
pub fn normalize_batch(raws: &[RawMeal]) -> Result<Vec<Recipe>> {
    let mut rng = rand::thread_rng();
    raws.iter().map(|raw| normalize_with(raw, &mut rng)).collect()
}

/// Split an instructions blob into trimmed, non-blank steps
pub fn split_instructions(blob: &str) -> Vec<String> {
    blob.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scan all ingredient slots; a gap does not end the scan
pub fn collect_ingredients(raw: &RawMeal) -> Vec<String> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|i| {
            let ingredient = raw.non_blank(&format!("strIngredient{i}"))?;
            let measure = raw.field(&format!("strMeasure{i}")).unwrap_or_default();
            Some(format!("{} {}", measure.trim(), ingredient).trim().to_string())
        })
        .collect()
}

fn parse_servings(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(1)
        .max(1)
}
