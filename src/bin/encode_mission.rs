use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use flightpath_engine::data::{plan_to_json, write_plan_to_file};
use flightpath_engine::path::plan::FlightPlan;
use flightpath_engine::Waypoint;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let plan = FlightPlan::new(vec![
        Waypoint::new(0.0, 0.0, 100.0),
        Waypoint::new(100.0, 100.0, 150.0),
        Waypoint::new(200.0, 50.0, 120.0),
        Waypoint::new(300.0, 200.0, 150.0),
    ]);

    let output_dir = PathBuf::from("data");
    fs::create_dir_all(&output_dir).context("failed to create data output directory")?;

    let bin_path = output_dir.join("mission.bin");
    write_plan_to_file(&plan, &bin_path)
        .with_context(|| format!("failed to write {}", bin_path.display()))?;

    let json_path = output_dir.join("mission.json");
    let json = plan_to_json(&plan).context("failed to encode mission as JSON")?;
    fs::write(&json_path, json)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    info!(
        "Wrote {} waypoints ({:.3} meters) to {} and {}",
        plan.len(),
        plan.total_distance(),
        bin_path.display(),
        json_path.display()
    );

    Ok(())
}
