/// Grams per cup when no keyword matches (water)
pub const DEFAULT_GRAMS_PER_CUP: f64 = 240.0;

/// Ordered keyword table, first substring match wins
const DENSITY_KEYWORDS: &[(&str, f64)] = &[
    ("flour", 125.0),
    ("sugar", 200.0),
    ("butter", 227.0),
    ("oil", 240.0),
    ("water", 240.0),
    ("milk", 240.0),
    ("honey", 340.0),
    ("salt", 290.0),
    ("powder", 120.0),
];

/// Estimated grams per cup for an ingredient name
///
/// Rough kitchen averages for display-time cup/gram hints. The scaling
/// engine never uses them.
pub fn grams_per_cup(ingredient: Option<&str>) -> f64 {
    let Some(name) = ingredient else {
        return DEFAULT_GRAMS_PER_CUP;
    };
    let name = name.to_lowercase();

    DENSITY_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map_or(DEFAULT_GRAMS_PER_CUP, |(_, density)| *density)
}

pub fn grams_to_cups(grams: f64, ingredient: Option<&str>) -> f64 {
    grams / grams_per_cup(ingredient)
}

pub fn cups_to_grams(cups: f64, ingredient: Option<&str>) -> f64 {
    cups * grams_per_cup(ingredient)
}
