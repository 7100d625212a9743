use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::ScalingError;
use crate::models::UnitKind::{self, Mass, Volume};
use crate::models::{UnitListing, UnitSystem};

/// Description returned by [`describe_unit`] for unregistered units
pub const UNKNOWN_UNIT: &str = "unknown unit";

/// Registry entry for one unit name
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRate {
    /// Multiplier from one of this unit to the base axis (g / ml)
    pub to_base_factor: f64,
    /// Canonical symbol shared by all synonyms of the unit
    pub symbol: &'static str,
    /// Human-readable name, for display only
    pub description: &'static str,
    pub kind: UnitKind,
    pub system: UnitSystem,
}

impl ConversionRate {
    const fn metric(to_base_factor: f64, kind: UnitKind, symbol: &'static str, description: &'static str) -> Self {
        Self {
            to_base_factor,
            symbol,
            description,
            kind,
            system: UnitSystem::Metric,
        }
    }

    const fn imperial(to_base_factor: f64, kind: UnitKind, symbol: &'static str, description: &'static str) -> Self {
        Self {
            to_base_factor,
            symbol,
            description,
            kind,
            system: UnitSystem::Imperial,
        }
    }
}

const GRAM: ConversionRate = ConversionRate::metric(1.0, Mass, "g", "gram");
const KILOGRAM: ConversionRate = ConversionRate::metric(1000.0, Mass, "kg", "kilogram");
const MILLILITER: ConversionRate = ConversionRate::metric(1.0, Volume, "ml", "milliliter");
const LITER: ConversionRate = ConversionRate::metric(1000.0, Volume, "l", "liter");

const OUNCE: ConversionRate = ConversionRate::imperial(28.35, Mass, "oz", "ounce");
const POUND: ConversionRate = ConversionRate::imperial(453.592, Mass, "lb", "pound");
const TEASPOON: ConversionRate = ConversionRate::imperial(5.0, Volume, "tsp", "teaspoon");
const TABLESPOON: ConversionRate = ConversionRate::imperial(15.0, Volume, "tbsp", "tablespoon");
const CUP: ConversionRate = ConversionRate::imperial(240.0, Volume, "cup", "cup");
const FLUID_OUNCE: ConversionRate = ConversionRate::imperial(30.0, Volume, "fl_oz", "fluid ounce");
const PINT: ConversionRate = ConversionRate::imperial(473.176, Volume, "pint", "pint");
const QUART: ConversionRate = ConversionRate::imperial(946.353, Volume, "quart", "quart");
const GALLON: ConversionRate = ConversionRate::imperial(3785.41, Volume, "gallon", "gallon");

/// Metric unit names, in listing order
const METRIC_UNITS: &[(&str, ConversionRate)] = &[
    ("g", GRAM),
    ("gram", GRAM),
    ("grams", GRAM),
    ("kg", KILOGRAM),
    ("kilogram", KILOGRAM),
    ("kilograms", KILOGRAM),
    ("ml", MILLILITER),
    ("milliliter", MILLILITER),
    ("milliliters", MILLILITER),
    ("millilitre", MILLILITER),
    ("l", LITER),
    ("liter", LITER),
    ("liters", LITER),
    ("litre", LITER),
];

/// Imperial / US customary unit names, in listing order
const IMPERIAL_UNITS: &[(&str, ConversionRate)] = &[
    ("oz", OUNCE),
    ("ounce", OUNCE),
    ("ounces", OUNCE),
    ("lb", POUND),
    ("lbs", POUND),
    ("pound", POUND),
    ("pounds", POUND),
    ("tsp", TEASPOON),
    ("teaspoon", TEASPOON),
    ("teaspoons", TEASPOON),
    ("tbsp", TABLESPOON),
    ("tablespoon", TABLESPOON),
    ("tablespoons", TABLESPOON),
    ("cup", CUP),
    ("cups", CUP),
    ("fl_oz", FLUID_OUNCE),
    ("fl oz", FLUID_OUNCE),
    ("fluid ounce", FLUID_OUNCE),
    ("fluid ounces", FLUID_OUNCE),
    ("pint", PINT),
    ("pints", PINT),
    ("quart", QUART),
    ("quarts", QUART),
    ("gallon", GALLON),
    ("gallons", GALLON),
];

/// Combined lookup table, built once and never mutated
static REGISTRY: LazyLock<HashMap<&'static str, &'static ConversionRate>> = LazyLock::new(|| {
    METRIC_UNITS
        .iter()
        .chain(IMPERIAL_UNITS.iter())
        .map(|(name, rate)| (*name, rate))
        .collect()
});

#[inline]
fn normalize_key(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// Look up the registry entry for a unit name (case-insensitive, trimmed)
pub fn unit_info(unit: &str) -> Option<&'static ConversionRate> {
    REGISTRY.get(normalize_key(unit).as_str()).copied()
}

/// Convert `amount` from one unit to another
///
/// Every unit sits on one base axis, grams for mass and milliliters for
/// volume, treated as the same scalar (1 g == 1 ml). Mass/volume
/// conversions are therefore water-equivalent; see
/// [`crate::core::density`] for ingredient-aware estimates.
///
/// Equal unit names (after normalization) short-circuit and return the
/// amount unchanged, even when the unit is not registered.
///
/// # Errors
/// `UnknownUnit` naming the first unregistered unit, as the caller spelled it.
pub fn convert(amount: f64, from_unit: &str, to_unit: &str) -> Result<f64, ScalingError> {
    let from = normalize_key(from_unit);
    let to = normalize_key(to_unit);

    if from == to {
        return Ok(amount);
    }

    let from_rate = REGISTRY
        .get(from.as_str())
        .ok_or_else(|| ScalingError::UnknownUnit(from_unit.to_string()))?;
    let to_rate = REGISTRY
        .get(to.as_str())
        .ok_or_else(|| ScalingError::UnknownUnit(to_unit.to_string()))?;

    Ok(amount * from_rate.to_base_factor / to_rate.to_base_factor)
}

/// Check if a unit is registered
pub fn is_valid_unit(unit: &str) -> bool {
    unit_info(unit).is_some()
}

/// Human-readable description, or [`UNKNOWN_UNIT`]
pub fn describe_unit(unit: &str) -> &'static str {
    unit_info(unit).map_or(UNKNOWN_UNIT, |rate| rate.description)
}

/// Description for a known unit, the input unchanged otherwise
///
/// Note this yields the description ("gram"), not a symbol ("g"). Use
/// [`canonical_unit`] when a symbol is needed.
pub fn normalize_unit(unit: &str) -> Cow<'_, str> {
    match unit_info(unit) {
        Some(rate) => Cow::Borrowed(rate.description),
        None => Cow::Borrowed(unit),
    }
}

/// Canonical symbol for a known unit ("grams" -> "g")
pub fn canonical_unit(unit: &str) -> Option<&'static str> {
    unit_info(unit).map(|rate| rate.symbol)
}

/// All registered unit names, split by measurement system
pub fn list_units() -> UnitListing {
    UnitListing {
        metric: METRIC_UNITS.iter().map(|(name, _)| *name).collect(),
        imperial: IMPERIAL_UNITS.iter().map(|(name, _)| *name).collect(),
    }
}

/// Re-express an amount in another measurement system
///
/// The target is the system's reference unit of the same kind: `g`/`ml` for
/// metric, `oz`/`cup` for imperial. Amounts already in `system` keep their
/// value and are reported under the canonical symbol.
pub fn to_system(amount: f64, unit: &str, system: UnitSystem) -> Result<(f64, &'static str), ScalingError> {
    let rate = unit_info(unit).ok_or_else(|| ScalingError::UnknownUnit(unit.to_string()))?;

    if rate.system == system {
        return Ok((amount, rate.symbol));
    }

    let target = match (system, rate.kind) {
        (UnitSystem::Metric, Mass) => GRAM,
        (UnitSystem::Metric, Volume) => MILLILITER,
        (UnitSystem::Imperial, Mass) => OUNCE,
        (UnitSystem::Imperial, Volume) => CUP,
    };

    Ok((amount * rate.to_base_factor / target.to_base_factor, target.symbol))
}
