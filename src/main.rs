use flightpath_engine::energy::model::EnergyModel;
use flightpath_engine::path::plan::FlightPlan;
use flightpath_engine::Waypoint;
use log::info;
use once_cell::sync::Lazy;

/// Stock survey mission: climb out of the origin, cross the field with a
/// dip over the second marker, finish high over the far corner.
static SURVEY_MISSION: Lazy<FlightPlan> = Lazy::new(|| {
    FlightPlan::new(vec![
        Waypoint::new(0.0, 0.0, 100.0),
        Waypoint::new(100.0, 100.0, 150.0),
        Waypoint::new(200.0, 50.0, 120.0),
        Waypoint::new(300.0, 200.0, 150.0),
    ])
});

fn main() {
    env_logger::init();

    // a: squared impact of velocity, b: linear impact of altitude,
    // c: baseline draw.
    let model = EnergyModel::new(0.1, 0.05, 10.0);

    let plan = &*SURVEY_MISSION;
    for (i, leg) in plan.leg_lengths().iter().enumerate() {
        info!("leg {}: {:.3} meters", i + 1, leg);
    }

    let total_distance = plan.total_distance();
    let operating = model.optimal_operating_point();
    let total_energy = model.total_energy(operating, total_distance);

    println!("Total Distance: {} meters", total_distance);
    println!("Optimal Velocity: {} m/s", operating.velocity);
    println!("Optimal Altitude: {} meters", operating.altitude);
    println!("Estimated Total Energy: {} units", total_energy);
}
