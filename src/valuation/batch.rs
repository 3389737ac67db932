use std::io::Read;
use std::path::Path;

use super::artifacts::PredictionError;
use super::domain::PropertyDetails;
use super::form::{FormSchema, ValidationError};
use super::service::{Valuation, ValuationEngine};

/// Failure while scoring a CSV export of listings.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read listings csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ValidationError,
    },
    #[error("row {row}: {source}")]
    Prediction {
        row: usize,
        #[source]
        source: PredictionError,
    },
}

/// One scored row from a CSV export.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEstimate {
    pub row: usize,
    pub details: PropertyDetails,
    pub valuation: Valuation,
}

/// Score every listing row in a CSV file. Headers use the form field names;
/// omitted columns fall back to the form defaults.
pub fn estimates_from_path(
    path: &Path,
    engine: &ValuationEngine,
) -> Result<Vec<BatchEstimate>, BatchError> {
    let reader = csv::Reader::from_path(path)?;
    estimates_from_csv(reader, engine)
}

/// Score listings from an in-memory CSV export.
pub fn estimates_from_reader<R: Read>(
    reader: R,
    engine: &ValuationEngine,
) -> Result<Vec<BatchEstimate>, BatchError> {
    estimates_from_csv(csv::Reader::from_reader(reader), engine)
}

fn estimates_from_csv<R: Read>(
    mut reader: csv::Reader<R>,
    engine: &ValuationEngine,
) -> Result<Vec<BatchEstimate>, BatchError> {
    let schema = FormSchema::standard();
    let mut estimates = Vec::new();

    for (index, record) in reader.deserialize::<PropertyDetails>().enumerate() {
        let row = index + 1;
        let details = record?;
        schema
            .validate(&details)
            .map_err(|source| BatchError::InvalidRow { row, source })?;
        let valuation = engine
            .estimate(&details)
            .map_err(|source| BatchError::Prediction { row, source })?;
        estimates.push(BatchEstimate {
            row,
            details,
            valuation,
        });
    }

    Ok(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::artifacts::{PriceModelArtifact, ScalerArtifact};
    use crate::valuation::domain::Condition;
    use crate::valuation::schema::FEATURE_WIDTH;
    use std::io::Cursor;

    fn identity_engine() -> ValuationEngine {
        ValuationEngine::new(
            ScalerArtifact {
                means: vec![0.0; FEATURE_WIDTH],
                scales: vec![1.0; FEATURE_WIDTH],
            },
            PriceModelArtifact {
                intercept: 0.0,
                coefficients: vec![1.0; FEATURE_WIDTH],
            },
        )
    }

    #[test]
    fn scores_each_row_with_defaults_for_omitted_columns() {
        let csv = "bedrooms,flat_area,condition\n4,2000,Good\n2,900,Fair\n";
        let engine = identity_engine();

        let estimates =
            estimates_from_reader(Cursor::new(csv), &engine).expect("rows score cleanly");

        assert_eq!(estimates.len(), 2);
        assert_eq!(estimates[0].row, 1);
        assert_eq!(estimates[0].details.bedrooms, 4);
        assert_eq!(estimates[0].details.condition, Condition::Good);
        assert_eq!(estimates[0].details.lot_area, 5000.0);
        assert_eq!(estimates[1].details.condition, Condition::Fair);
    }

    #[test]
    fn out_of_range_row_aborts_with_row_number() {
        let csv = "bedrooms,flat_area\n3,1500\n3,12\n";
        let engine = identity_engine();

        let err = estimates_from_reader(Cursor::new(csv), &engine).expect_err("row 2 invalid");
        match err {
            BatchError::InvalidRow { row, .. } => assert_eq!(row, 2),
            other => panic!("expected InvalidRow, got {other:?}"),
        }
    }

    #[test]
    fn unknown_categorical_value_is_a_csv_error() {
        let csv = "condition\nPristine\n";
        let engine = identity_engine();

        let err = estimates_from_reader(Cursor::new(csv), &engine).expect_err("bad level");
        assert!(matches!(err, BatchError::Csv(_)));
    }
}
