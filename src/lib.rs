pub mod config;
pub mod error;
pub mod telemetry;
pub mod valuation;

mod cli;
mod routes;
mod server;

pub use routes::{valuation_router, AppState};

pub async fn run() -> Result<(), error::AppError> {
    cli::run().await
}
