//! Menu-driven front end, shown when no subcommand is given.

use dialoguer::{Input, MultiSelect, Select};
use shelter_map_query::ShelterQueryEngine;
use shelter_map_query::location::parse_manual_coordinates;
use shelter_map_query_models::{FilterCriteria, NearbyOutcome};

enum Action {
    Nearby,
    Recommend,
    DetectDistrict,
}

impl Action {
    const ALL: &[Self] = &[Self::Nearby, Self::Recommend, Self::DetectDistrict];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Nearby => "Find shelters within 1 km",
            Self::Recommend => "Recommend a shelter",
            Self::DetectDistrict => "Detect my district",
        }
    }
}

/// Runs one interactive query.
///
/// # Errors
///
/// Returns an error if a prompt fails or the dataset cannot be loaded.
pub fn run(engine: &ShelterQueryEngine) -> Result<(), Box<dyn std::error::Error>> {
    println!("Seoul Heat-Relief Shelter Finder");
    println!();

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    let Some((latitude, longitude)) = prompt_location(engine)? else {
        println!("Invalid coordinates.");
        return Ok(());
    };

    match Action::ALL[idx] {
        Action::Nearby => {
            let criteria = prompt_districts(engine)?;
            let outcome = engine.nearby(Some(latitude), Some(longitude), &criteria)?;
            print_nearby(&outcome);
        }
        Action::Recommend => {
            let age: String = Input::new()
                .with_prompt("Age")
                .allow_empty(true)
                .interact_text()?;
            let outcome = engine.recommend(Some(latitude), Some(longitude), Some(&age))?;
            let (message, shelter) = outcome.into_parts();
            println!("{message}");
            if let Some(shelter) = shelter {
                println!("{}", shelter.directions_url);
            }
        }
        Action::DetectDistrict => {
            let district = engine.infer_district(Some(latitude), Some(longitude))?;
            println!("{district}");
        }
    }

    Ok(())
}

/// Asks for a landmark or typed-in coordinates.
fn prompt_location(
    engine: &ShelterQueryEngine,
) -> Result<Option<(f64, f64)>, Box<dyn std::error::Error>> {
    let landmarks = engine.landmarks();
    let mut labels = vec!["Enter coordinates"];
    labels.extend(landmarks.iter().map(|l| l.name.as_str()));

    let idx = Select::new()
        .with_prompt("Location")
        .items(&labels)
        .default(0)
        .max_length(15)
        .interact()?;

    if let Some(landmark) = idx.checked_sub(1).and_then(|i| landmarks.get(i)) {
        return Ok(Some((landmark.latitude, landmark.longitude)));
    }

    let (default_lat, default_lon) = engine.default_location();
    let lat: String = Input::new()
        .with_prompt("Latitude")
        .default(default_lat.to_string())
        .interact_text()?;
    let lon: String = Input::new()
        .with_prompt("Longitude")
        .default(default_lon.to_string())
        .interact_text()?;

    Ok(parse_manual_coordinates(&lat, &lon))
}

fn prompt_districts(
    engine: &ShelterQueryEngine,
) -> Result<FilterCriteria, Box<dyn std::error::Error>> {
    // First entry is the "all" selector.
    let districts: Vec<String> = engine
        .filter_options()?
        .districts
        .into_iter()
        .skip(1)
        .collect();

    let selected = MultiSelect::new()
        .with_prompt("Districts (space=toggle, enter=confirm, none for all)")
        .items(&districts)
        .max_length(15)
        .interact()?;

    Ok(FilterCriteria {
        districts: selected.into_iter().map(|i| districts[i].clone()).collect(),
        ..FilterCriteria::unrestricted()
    })
}

fn print_nearby(outcome: &NearbyOutcome) {
    if let Some(message) = outcome.message() {
        println!("{message}");
        return;
    }

    for shelter in outcome.shelters() {
        let record = &shelter.record;
        println!(
            "{:.2} km  {}  [{}]",
            shelter.distance_km,
            record.name(),
            shelter.status
        );
        println!(
            "    {} | {} | 선풍기 {} | 에어컨 {} | {} / {}",
            shelter.display.area,
            shelter.display.capacity,
            record.classes.fan,
            record.classes.ac,
            shelter.display.temperature,
            shelter.display.occupancy,
        );
        if let Some(address) = &record.shelter.road_address {
            println!("    {address}");
        }
    }
}
