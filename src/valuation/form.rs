use serde::Serialize;

use super::domain::PropertyDetails;

/// Range violation raised at the form submission boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be at least {min} (found {value})")]
    BelowMinimum {
        field: &'static str,
        min: f64,
        value: f64,
    },
    #[error("{field} must be at most {max} (found {value})")]
    AboveMaximum {
        field: &'static str,
        max: f64,
        value: f64,
    },
}

/// Numeric form field with the widget constraints advertised to the client.
#[derive(Debug, Serialize)]
pub struct NumericField {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub step: f64,
    pub default: f64,
    #[serde(skip)]
    value: fn(&PropertyDetails) -> f64,
}

/// Single-select categorical form field.
#[derive(Debug, Serialize)]
pub struct SelectField {
    pub name: &'static str,
    pub label: &'static str,
    pub options: &'static [&'static str],
    pub default: &'static str,
}

/// The full form contract: declared once, served to the client, and used to
/// validate every submission before it reaches the encoder.
#[derive(Debug, Serialize)]
pub struct FormSchema {
    pub numeric: Vec<NumericField>,
    pub selects: Vec<SelectField>,
}

impl FormSchema {
    pub fn standard() -> Self {
        let numeric = vec![
            NumericField {
                name: "bedrooms",
                label: "No of Bedrooms",
                min: Some(1.0),
                max: Some(30.0),
                step: 1.0,
                default: 3.0,
                value: |d| f64::from(d.bedrooms),
            },
            NumericField {
                name: "bathrooms",
                label: "No of Bathrooms",
                min: Some(0.5),
                max: Some(10.0),
                step: 0.25,
                default: 2.0,
                value: |d| d.bathrooms,
            },
            NumericField {
                name: "floors",
                label: "No of Floors",
                min: Some(1.0),
                max: Some(5.0),
                step: 0.5,
                default: 1.0,
                value: |d| d.floors,
            },
            NumericField {
                name: "flat_area",
                label: "Flat Area (sqft)",
                min: Some(100.0),
                max: None,
                step: 10.0,
                default: 1500.0,
                value: |d| d.flat_area,
            },
            NumericField {
                name: "lot_area",
                label: "Lot Area (sqft)",
                min: Some(100.0),
                max: None,
                step: 10.0,
                default: 5000.0,
                value: |d| d.lot_area,
            },
            NumericField {
                name: "basement_area",
                label: "Basement Area (sqft)",
                min: Some(0.0),
                max: None,
                step: 10.0,
                default: 0.0,
                value: |d| d.basement_area,
            },
            NumericField {
                name: "area_from_basement",
                label: "Area from Basement (sqft)",
                min: Some(100.0),
                max: None,
                step: 10.0,
                default: 1500.0,
                value: |d| d.area_from_basement,
            },
            NumericField {
                name: "latitude",
                label: "Latitude",
                min: None,
                max: None,
                step: 0.0001,
                default: 47.5112,
                value: |d| d.latitude,
            },
            NumericField {
                name: "longitude",
                label: "Longitude",
                min: None,
                max: None,
                step: 0.0001,
                default: -122.257,
                value: |d| d.longitude,
            },
            NumericField {
                name: "age_of_house",
                label: "Age of House (years)",
                min: Some(0.0),
                max: None,
                step: 1.0,
                default: 30.0,
                value: |d| f64::from(d.age_of_house),
            },
            NumericField {
                name: "renovated_year",
                label: "Renovated Year (0 if never)",
                min: Some(0.0),
                max: None,
                step: 1.0,
                default: 0.0,
                value: |d| f64::from(d.renovated_year),
            },
            NumericField {
                name: "living_area_renov",
                label: "Living Area after Renovation (sqft)",
                min: Some(100.0),
                max: None,
                step: 10.0,
                default: 1500.0,
                value: |d| d.living_area_renov,
            },
            NumericField {
                name: "lot_area_renov",
                label: "Lot Area after Renovation (sqft)",
                min: Some(100.0),
                max: None,
                step: 10.0,
                default: 5000.0,
                value: |d| d.lot_area_renov,
            },
            NumericField {
                name: "overall_grade",
                label: "Overall Grade",
                min: Some(1.0),
                max: Some(10.0),
                step: 1.0,
                default: 7.0,
                value: |d| f64::from(d.overall_grade),
            },
        ];

        let selects = vec![
            SelectField {
                name: "waterfront",
                label: "Waterfront View",
                options: &["No", "Yes"],
                default: "No",
            },
            SelectField {
                name: "condition",
                label: "Condition of the House",
                options: &["Bad", "Fair", "Good", "Excellent", "Okay"],
                default: "Bad",
            },
            SelectField {
                name: "visited",
                label: "No of Times Visited",
                options: &["None", "Once", "Twice", "Thrice", "Four"],
                default: "None",
            },
        ];

        Self { numeric, selects }
    }

    /// Enforce the widget ranges on a submission. Categorical fields are
    /// already constrained by their enums and need no further checks.
    pub fn validate(&self, details: &PropertyDetails) -> Result<(), ValidationError> {
        for field in &self.numeric {
            let value = (field.value)(details);
            if let Some(min) = field.min {
                if value < min {
                    return Err(ValidationError::BelowMinimum {
                        field: field.name,
                        min,
                        value,
                    });
                }
            }
            if let Some(max) = field.max {
                if value > max {
                    return Err(ValidationError::AboveMaximum {
                        field: field.name,
                        max,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listing_passes_validation() {
        let schema = FormSchema::standard();
        schema
            .validate(&PropertyDetails::default())
            .expect("widget defaults satisfy their own ranges");
    }

    #[test]
    fn undersized_flat_area_is_rejected_with_field_name() {
        let schema = FormSchema::standard();
        let mut details = PropertyDetails::default();
        details.flat_area = 40.0;

        let err = schema.validate(&details).expect_err("area below minimum");
        assert_eq!(
            err,
            ValidationError::BelowMinimum {
                field: "flat_area",
                min: 100.0,
                value: 40.0,
            }
        );
    }

    #[test]
    fn grade_above_slider_range_is_rejected() {
        let schema = FormSchema::standard();
        let mut details = PropertyDetails::default();
        details.overall_grade = 11;

        let err = schema.validate(&details).expect_err("grade above maximum");
        assert!(matches!(
            err,
            ValidationError::AboveMaximum {
                field: "overall_grade",
                ..
            }
        ));
    }

    #[test]
    fn schema_advertises_every_form_field() {
        let schema = FormSchema::standard();
        assert_eq!(schema.numeric.len(), 14);
        assert_eq!(schema.selects.len(), 3);
        let condition = schema
            .selects
            .iter()
            .find(|field| field.name == "condition")
            .expect("condition select present");
        assert_eq!(condition.options.len(), 5);
    }
}
