use assert_approx_eq::assert_approx_eq;
use flightpath_engine::data::{deserialize_plan, serialize_plan};
use flightpath_engine::energy::model::EnergyModel;
use flightpath_engine::path::plan::FlightPlan;
use flightpath_engine::Waypoint;

fn survey_mission() -> FlightPlan {
    FlightPlan::new(vec![
        Waypoint::new(0.0, 0.0, 100.0),
        Waypoint::new(100.0, 100.0, 150.0),
        Waypoint::new(200.0, 50.0, 120.0),
        Waypoint::new(300.0, 200.0, 150.0),
    ])
}

#[test]
fn integration_end_to_end_survey_mission() {
    let plan = survey_mission();
    let model = EnergyModel::new(0.1, 0.05, 10.0);

    // 150 + sqrt(13400) + sqrt(33400)
    let total_distance = plan.total_distance();
    assert_approx_eq!(total_distance, 448.515, 1e-3);

    let operating = model.optimal_operating_point();
    assert_approx_eq!(operating.velocity, 0.5, 1e-9);
    assert_approx_eq!(operating.altitude, 100.0, 1e-9);

    // Total energy is a single multiplication of per-meter draw by length.
    let per_meter = model.consumption(operating.velocity, operating.altitude);
    assert_approx_eq!(per_meter, 15.025, 1e-9);
    let total_energy = model.total_energy(operating, total_distance);
    assert_approx_eq!(total_energy, per_meter * total_distance, 1e-9);
}

#[test]
fn integration_mission_survives_persistence() {
    let plan = survey_mission();
    let bytes = serialize_plan(&plan).expect("serialize");
    let restored = deserialize_plan(&bytes).expect("deserialize");
    assert_eq!(restored.waypoints, plan.waypoints);
    assert_approx_eq!(restored.total_distance(), plan.total_distance(), 1e-12);
}
