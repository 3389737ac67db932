//! Named column schema mapping listing attributes to the model's input layout.
//!
//! The fitted scaler and price model consume a positional vector: position IS
//! the schema, and no field names travel past this module. Every column is
//! therefore declared here by name, in training order, so the mapping can be
//! audited and tested without touching the form or the artifacts.
//!
//! Note the visit columns: the training data carried indicators only for
//! `Once`, `Thrice`, and `Twice`. Both `None` and `Four` encode to all-zero
//! visit columns, so the model cannot tell them apart. That collision is
//! inherited from the fitted artifacts and must be preserved as-is; changing
//! it here would silently desynchronize the vector from the trained weights.

use super::domain::{Condition, PropertyDetails, VisitCount, Waterfront};

/// Number of columns the fitted artifacts were trained on.
pub const FEATURE_WIDTH: usize = 22;

/// One column of the model input: a stable name plus its extraction rule.
pub struct FeatureColumn {
    pub name: &'static str,
    extract: fn(&PropertyDetails) -> f64,
}

fn flag(on: bool) -> f64 {
    if on {
        1.0
    } else {
        0.0
    }
}

/// Training-order column layout. Reordering or resizing this table breaks the
/// contract with the fitted scaler and model.
pub const FEATURE_COLUMNS: [FeatureColumn; FEATURE_WIDTH] = [
    FeatureColumn {
        name: "bedrooms",
        extract: |d| f64::from(d.bedrooms),
    },
    FeatureColumn {
        name: "bathrooms",
        extract: |d| d.bathrooms,
    },
    FeatureColumn {
        name: "flat_area",
        extract: |d| d.flat_area,
    },
    FeatureColumn {
        name: "lot_area",
        extract: |d| d.lot_area,
    },
    FeatureColumn {
        name: "floors",
        extract: |d| d.floors,
    },
    FeatureColumn {
        name: "waterfront",
        extract: |d| flag(d.waterfront == Waterfront::Yes),
    },
    FeatureColumn {
        name: "overall_grade",
        extract: |d| f64::from(d.overall_grade),
    },
    FeatureColumn {
        name: "area_from_basement",
        extract: |d| d.area_from_basement,
    },
    FeatureColumn {
        name: "basement_area",
        extract: |d| d.basement_area,
    },
    FeatureColumn {
        name: "age_of_house",
        extract: |d| f64::from(d.age_of_house),
    },
    FeatureColumn {
        name: "renovated_year",
        extract: |d| f64::from(d.renovated_year),
    },
    FeatureColumn {
        name: "latitude",
        extract: |d| d.latitude,
    },
    FeatureColumn {
        name: "longitude",
        extract: |d| d.longitude,
    },
    FeatureColumn {
        name: "living_area_renov",
        extract: |d| d.living_area_renov,
    },
    FeatureColumn {
        name: "lot_area_renov",
        extract: |d| d.lot_area_renov,
    },
    FeatureColumn {
        name: "condition_excellent",
        extract: |d| flag(d.condition == Condition::Excellent),
    },
    FeatureColumn {
        name: "condition_fair",
        extract: |d| flag(d.condition == Condition::Fair),
    },
    FeatureColumn {
        name: "condition_good",
        extract: |d| flag(d.condition == Condition::Good),
    },
    FeatureColumn {
        name: "condition_okay",
        extract: |d| flag(d.condition == Condition::Okay),
    },
    FeatureColumn {
        name: "visited_once",
        extract: |d| flag(d.visited == VisitCount::Once),
    },
    FeatureColumn {
        name: "visited_thrice",
        extract: |d| flag(d.visited == VisitCount::Thrice),
    },
    FeatureColumn {
        name: "visited_twice",
        extract: |d| flag(d.visited == VisitCount::Twice),
    },
];

/// Encode a listing into the fixed-order model input vector.
///
/// Pure pass-through: values are taken as entered, with no normalization
/// (the fitted scaler owns that) and no range checks (the form boundary
/// owns those).
pub fn encode(details: &PropertyDetails) -> Vec<f64> {
    FEATURE_COLUMNS
        .iter()
        .map(|column| (column.extract)(details))
        .collect()
}

/// Column names in training order, for diagnostics.
pub fn column_names() -> Vec<&'static str> {
    FEATURE_COLUMNS.iter().map(|column| column.name).collect()
}
