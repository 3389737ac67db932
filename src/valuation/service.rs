use std::path::Path;

use serde::Serialize;

use super::artifacts::{
    ArtifactError, PredictionError, PriceModelArtifact, ScalerArtifact, MODEL_FILE, SCALER_FILE,
};
use super::domain::PropertyDetails;
use super::schema;

/// Read-only prediction context: the fitted scaler and price model, loaded
/// once at startup and shared by every submission. There is no reload path;
/// replacing artifacts means restarting the process.
#[derive(Debug)]
pub struct ValuationEngine {
    scaler: ScalerArtifact,
    model: PriceModelArtifact,
}

impl ValuationEngine {
    pub fn new(scaler: ScalerArtifact, model: PriceModelArtifact) -> Self {
        Self { scaler, model }
    }

    /// Load both fitted artifacts from the configured directory.
    pub fn load(directory: &Path) -> Result<Self, ArtifactError> {
        let scaler = ScalerArtifact::load(&directory.join(SCALER_FILE))?;
        let model = PriceModelArtifact::load(&directory.join(MODEL_FILE))?;
        Ok(Self::new(scaler, model))
    }

    /// Column width the loaded scaler was fitted for.
    pub fn expected_width(&self) -> usize {
        self.scaler.width()
    }

    /// Single deterministic encode -> transform -> predict attempt. No
    /// retries and no fallback: any failure is surfaced to the caller.
    pub fn estimate(&self, details: &PropertyDetails) -> Result<Valuation, PredictionError> {
        let features = schema::encode(details);
        let scaled = self.scaler.transform(&features)?;
        let price = self.model.predict(&scaled)?;
        Ok(Valuation {
            estimated_value: price,
        })
    }
}

/// Predicted market value for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Valuation {
    pub estimated_value: f64,
}

impl Valuation {
    /// Currency rendering shown to the user, e.g. `$531,250.00`.
    pub fn display_price(&self) -> String {
        format_currency(self.estimated_value)
    }
}

/// Format a dollar amount with thousands separators and two decimals.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let remainder = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (index, digit) in dollars.chars().enumerate() {
        if index > 0 && (dollars.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{remainder:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::domain::{Condition, VisitCount};

    /// Identity artifacts: zero means, unit scales, unit weights. The
    /// estimate is then just the sum of the encoded columns, which makes
    /// vector-level expectations easy to read.
    fn identity_engine() -> ValuationEngine {
        ValuationEngine::new(
            ScalerArtifact {
                means: vec![0.0; schema::FEATURE_WIDTH],
                scales: vec![1.0; schema::FEATURE_WIDTH],
            },
            PriceModelArtifact {
                intercept: 0.0,
                coefficients: vec![1.0; schema::FEATURE_WIDTH],
            },
        )
    }

    #[test]
    fn estimate_is_deterministic_per_submission() {
        let engine = identity_engine();
        let details = PropertyDetails::default();
        let first = engine.estimate(&details).expect("estimate succeeds");
        let second = engine.estimate(&details).expect("estimate succeeds");
        assert_eq!(first, second);
    }

    #[test]
    fn estimate_sums_encoded_columns_under_identity_artifacts() {
        let engine = identity_engine();
        let mut details = PropertyDetails::default();
        details.condition = Condition::Good;
        details.visited = VisitCount::None;

        let valuation = engine.estimate(&details).expect("estimate succeeds");
        let expected: f64 = schema::encode(&details).iter().sum();
        assert_eq!(valuation.estimated_value, expected);
    }

    #[test]
    fn narrower_scaler_surfaces_shape_mismatch() {
        let engine = ValuationEngine::new(
            ScalerArtifact {
                means: vec![0.0; 20],
                scales: vec![1.0; 20],
            },
            PriceModelArtifact {
                intercept: 0.0,
                coefficients: vec![1.0; 20],
            },
        );

        let err = engine
            .estimate(&PropertyDetails::default())
            .expect_err("widths drifted");
        assert_eq!(
            err,
            PredictionError::ShapeMismatch {
                expected: 20,
                found: schema::FEATURE_WIDTH,
            }
        );
    }

    #[test]
    fn currency_formatting_groups_thousands() {
        assert_eq!(format_currency(531250.0), "$531,250.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(999.9), "$999.90");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-45000.5), "-$45,000.50");
    }
}
