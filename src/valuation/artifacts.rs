use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File names expected inside the artifact directory.
pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "price_model.json";

/// Failure while locating or decoding a fitted artifact. Fatal at startup:
/// the service refuses to serve without both artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact {path} is malformed: {detail}")]
    Malformed { path: PathBuf, detail: String },
}

/// Failure during a single transform/predict attempt. The shape-mismatch
/// kind is kept distinct because schema drift between the form and the
/// trained artifacts is the likeliest real-world failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    #[error(
        "feature vector carries {found} columns but the fitted artifacts expect {expected}; \
         the encoding schema and the trained artifacts have likely drifted apart"
    )]
    ShapeMismatch { expected: usize, found: usize },
    #[error("prediction produced a non-finite value")]
    NonFinite,
}

/// Pre-fitted standardizing scaler: per-column center and spread.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerArtifact {
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
}

impl ScalerArtifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let scaler: Self = read_json(path)?;
        if scaler.means.len() != scaler.scales.len() {
            return Err(ArtifactError::Malformed {
                path: path.to_path_buf(),
                detail: format!(
                    "means and scales disagree on width ({} vs {})",
                    scaler.means.len(),
                    scaler.scales.len()
                ),
            });
        }
        if scaler
            .scales
            .iter()
            .any(|scale| !scale.is_finite() || *scale == 0.0)
        {
            return Err(ArtifactError::Malformed {
                path: path.to_path_buf(),
                detail: "scales must be finite and non-zero".to_string(),
            });
        }
        Ok(scaler)
    }

    /// Column width the scaler was fitted for.
    pub fn width(&self) -> usize {
        self.means.len()
    }

    /// Standardize a raw feature vector against the fitted statistics.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, PredictionError> {
        if features.len() != self.width() {
            return Err(PredictionError::ShapeMismatch {
                expected: self.width(),
                found: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.means.iter().zip(&self.scales))
            .map(|(value, (mean, scale))| (value - mean) / scale)
            .collect())
    }
}

/// Pre-fitted regression weights applied to a scaled feature vector.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceModelArtifact {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl PriceModelArtifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        read_json(path)
    }

    pub fn predict(&self, scaled: &[f64]) -> Result<f64, PredictionError> {
        if scaled.len() != self.coefficients.len() {
            return Err(PredictionError::ShapeMismatch {
                expected: self.coefficients.len(),
                found: scaled.len(),
            });
        }

        let price = self.intercept
            + scaled
                .iter()
                .zip(&self.coefficients)
                .map(|(value, weight)| value * weight)
                .sum::<f64>();

        if !price.is_finite() {
            return Err(PredictionError::NonFinite);
        }
        Ok(price)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
