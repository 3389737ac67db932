//! Property valuation pipeline: form contract, feature encoding, and the
//! fitted scaler + price model that turn a submission into a dollar estimate.

pub mod artifacts;
pub mod batch;
pub mod domain;
pub mod form;
pub mod schema;
pub mod service;

pub use artifacts::{ArtifactError, PredictionError, PriceModelArtifact, ScalerArtifact};
pub use batch::{BatchEstimate, BatchError};
pub use domain::{Condition, PropertyDetails, VisitCount, Waterfront};
pub use form::{FormSchema, ValidationError};
pub use service::{format_currency, Valuation, ValuationEngine};
