use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::server;
use crate::valuation::{
    batch, Condition, FormSchema, PropertyDetails, ValuationEngine, VisitCount, Waterfront,
};

#[derive(Parser, Debug)]
#[command(
    name = "Property Valuation Service",
    about = "Estimate residential property market values from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate the market value of a single listing, or of a CSV export
    Estimate(EstimateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the directory holding the fitted scaler and price model
    #[arg(long)]
    pub(crate) model_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct EstimateArgs {
    /// Score every listing row in this CSV export instead of a single property
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Override the directory holding the fitted scaler and price model
    #[arg(long)]
    model_dir: Option<PathBuf>,
    #[arg(long)]
    bedrooms: Option<u8>,
    #[arg(long)]
    bathrooms: Option<f64>,
    #[arg(long)]
    floors: Option<f64>,
    #[arg(long)]
    flat_area: Option<f64>,
    #[arg(long)]
    lot_area: Option<f64>,
    #[arg(long)]
    basement_area: Option<f64>,
    #[arg(long)]
    area_from_basement: Option<f64>,
    #[arg(long)]
    latitude: Option<f64>,
    #[arg(long)]
    longitude: Option<f64>,
    #[arg(long)]
    age_of_house: Option<u32>,
    #[arg(long)]
    renovated_year: Option<u32>,
    #[arg(long)]
    living_area_renov: Option<f64>,
    #[arg(long)]
    lot_area_renov: Option<f64>,
    #[arg(long)]
    overall_grade: Option<u8>,
    /// Waterfront view: No or Yes
    #[arg(long, value_parser = parse_waterfront)]
    waterfront: Option<Waterfront>,
    /// Condition of the house: Bad, Fair, Good, Excellent, or Okay
    #[arg(long, value_parser = parse_condition)]
    condition: Option<Condition>,
    /// Times visited: None, Once, Twice, Thrice, or Four
    #[arg(long, value_parser = parse_visited)]
    visited: Option<VisitCount>,
}

impl EstimateArgs {
    fn details(&self) -> PropertyDetails {
        let defaults = PropertyDetails::default();
        PropertyDetails {
            bedrooms: self.bedrooms.unwrap_or(defaults.bedrooms),
            bathrooms: self.bathrooms.unwrap_or(defaults.bathrooms),
            floors: self.floors.unwrap_or(defaults.floors),
            flat_area: self.flat_area.unwrap_or(defaults.flat_area),
            lot_area: self.lot_area.unwrap_or(defaults.lot_area),
            basement_area: self.basement_area.unwrap_or(defaults.basement_area),
            area_from_basement: self
                .area_from_basement
                .unwrap_or(defaults.area_from_basement),
            latitude: self.latitude.unwrap_or(defaults.latitude),
            longitude: self.longitude.unwrap_or(defaults.longitude),
            age_of_house: self.age_of_house.unwrap_or(defaults.age_of_house),
            renovated_year: self.renovated_year.unwrap_or(defaults.renovated_year),
            living_area_renov: self.living_area_renov.unwrap_or(defaults.living_area_renov),
            lot_area_renov: self.lot_area_renov.unwrap_or(defaults.lot_area_renov),
            overall_grade: self.overall_grade.unwrap_or(defaults.overall_grade),
            waterfront: self.waterfront.unwrap_or(defaults.waterfront),
            condition: self.condition.unwrap_or(defaults.condition),
            visited: self.visited.unwrap_or(defaults.visited),
        }
    }
}

fn parse_waterfront(raw: &str) -> Result<Waterfront, String> {
    raw.parse()
}

fn parse_condition(raw: &str) -> Result<Condition, String> {
    raw.parse()
}

fn parse_visited(raw: &str) -> Result<VisitCount, String> {
    raw.parse()
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate(args) => run_estimate(args),
    }
}

fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let directory = args
        .model_dir
        .clone()
        .unwrap_or(config.artifacts.directory);
    let engine = ValuationEngine::load(&directory)?;

    if let Some(csv) = &args.csv {
        let estimates = batch::estimates_from_path(csv, &engine)?;
        println!("Scored {} listing(s) from {}", estimates.len(), csv.display());
        for estimate in &estimates {
            println!(
                "- row {}: {} ({} bed, {} bath, {} sqft)",
                estimate.row,
                estimate.valuation.display_price(),
                estimate.details.bedrooms,
                estimate.details.bathrooms,
                estimate.details.flat_area,
            );
        }
        return Ok(());
    }

    let details = args.details();
    FormSchema::standard().validate(&details)?;
    let valuation = engine.estimate(&details)?;

    println!("Property valuation");
    println!(
        "- Bedrooms: {} | Bathrooms: {} | Floors: {}",
        details.bedrooms, details.bathrooms, details.floors
    );
    println!(
        "- Flat area: {} sqft | Lot area: {} sqft | Grade: {}",
        details.flat_area, details.lot_area, details.overall_grade
    );
    println!(
        "- Condition: {} | Waterfront: {} | Visited: {}",
        details.condition.label(),
        details.waterfront.label(),
        details.visited.label()
    );
    println!("Estimated market value: {}", valuation.display_price());

    Ok(())
}
