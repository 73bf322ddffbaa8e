#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the Seoul heat-relief shelter finder.
//!
//! Each subcommand runs one query against the shelter dataset and prints
//! the outcome as pretty JSON. Without a subcommand an interactive menu is
//! shown instead.

mod interactive;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use shelter_map_query::location::parse_manual_coordinates;
use shelter_map_query::{QueryConfig, ShelterQueryEngine, landmarks};
use shelter_map_query_models::{ChosenShelter, FilterCriteria, NearbyOutcome, RecommendOutcome};
use shelter_map_shelter_models::District;

#[derive(Parser)]
#[command(name = "shelter_map", about = "Seoul heat-relief shelter finder")]
struct Cli {
    /// Shelter CSV to query (overrides `SHELTER_MAP_DATASET`)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    /// TOML file overriding query tunables
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

/// The six filter selectors. Each flag may be repeated; `전체` or no value
/// means no constraint.
#[derive(Args)]
struct FilterArgs {
    /// Facility type (level 2)
    #[arg(long = "facility-type")]
    facility_type: Vec<String>,
    /// Area class (e.g. "보통")
    #[arg(long)]
    area: Vec<String>,
    /// Capacity class (e.g. "많음")
    #[arg(long)]
    capacity: Vec<String>,
    /// Fan presence ("있음" / "없음")
    #[arg(long)]
    fan: Vec<String>,
    /// Air-conditioner presence ("있음" / "없음")
    #[arg(long)]
    ac: Vec<String>,
    /// District (e.g. "중구")
    #[arg(long)]
    district: Vec<String>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        Self {
            facility_types: args.facility_type,
            area_classes: args.area,
            capacity_classes: args.capacity,
            fan: args.fan,
            ac: args.ac,
            districts: args.district,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List shelters within 1 km of a point
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Recommend the nearest suitable shelter for a user
    Recommend {
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// User age in years
        #[arg(long)]
        age: Option<String>,
    },
    /// Infer the district containing a point
    District {
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// Process a browser geolocation JSON payload
    Locate {
        /// e.g. '{"latitude": 37.5665, "longitude": 126.978, "accuracy": 20}'
        json: String,
    },
    /// List nearby shelters in the district detected for typed-in coordinates
    Manual {
        #[arg(allow_hyphen_values = true)]
        lat: String,
        #[arg(allow_hyphen_values = true)]
        lon: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List nearby shelters around a named landmark
    Landmark {
        /// Landmark name (see `landmarks`)
        name: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show the choices available for each filter
    Options,
    /// List the built-in landmarks
    Landmarks,
}

/// An outcome together with its user-facing message.
#[derive(Serialize)]
struct Report<'a, T: Serialize> {
    message: Option<&'a str>,
    #[serde(flatten)]
    outcome: &'a T,
}

#[derive(Serialize)]
struct Recommendation {
    message: String,
    shelter: Option<ChosenShelter>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectedNearby<'a> {
    district: District,
    message: Option<&'a str>,
    #[serde(flatten)]
    outcome: &'a NearbyOutcome,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_detected(district: District, outcome: &NearbyOutcome) -> Result<(), serde_json::Error> {
    print_json(&DetectedNearby {
        district,
        message: outcome.message(),
        outcome,
    })
}

fn print_recommendation(outcome: RecommendOutcome) -> Result<(), serde_json::Error> {
    let (message, shelter) = outcome.into_parts();
    print_json(&Recommendation { message, shelter })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = cli
        .config
        .as_deref()
        .map(QueryConfig::load)
        .transpose()?
        .unwrap_or_default();
    let engine = ShelterQueryEngine::from_env(cli.dataset.as_deref()).with_config(config);
    log::debug!(
        "Using shelter dataset {} with {:?}",
        engine.dataset().display(),
        engine.config()
    );

    let Some(command) = cli.command else {
        return interactive::run(&engine);
    };

    match command {
        Commands::Nearby { lat, lon, filters } => {
            let outcome = engine.nearby(lat, lon, &filters.into())?;
            print_json(&Report {
                message: outcome.message(),
                outcome: &outcome,
            })?;
        }
        Commands::Recommend { lat, lon, age } => {
            let outcome = engine.recommend(lat, lon, age.as_deref())?;
            print_recommendation(outcome)?;
        }
        Commands::District { lat, lon } => {
            print_json(&engine.infer_district(lat, lon)?)?;
        }
        Commands::Locate { json } => {
            print_json(&engine.process_location_json(&json))?;
        }
        Commands::Manual { lat, lon, filters } => {
            let (lat, lon) = parse_manual_coordinates(&lat, &lon)
                .ok_or_else(|| format!("Invalid coordinates: {lat}, {lon}"))?;
            let (district, outcome) =
                engine.nearby_in_detected_district(lat, lon, &filters.into())?;
            print_detected(district, &outcome)?;
        }
        Commands::Landmark { name, filters } => {
            let landmark = landmarks::find_landmark(&name)
                .ok_or_else(|| format!("Unknown landmark: {name}"))?;
            let (district, outcome) = engine.nearby_in_detected_district(
                landmark.latitude,
                landmark.longitude,
                &filters.into(),
            )?;
            print_detected(district, &outcome)?;
        }
        Commands::Options => {
            print_json(&engine.filter_options()?)?;
        }
        Commands::Landmarks => {
            print_json(&engine.landmarks())?;
        }
    }

    Ok(())
}
