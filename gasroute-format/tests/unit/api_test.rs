use super::*;
use crate::helpers::*;
use std::io::{BufReader, BufWriter};

#[test]
fn can_plan_route_end_to_end() {
    let request = test_plan_request();
    let environment = test_environment_at(13);

    let summary = plan_route(&request, &environment).unwrap();

    // pinned endpoints plus three ordered customers
    assert_eq!(summary.ordered_stops.len(), 5);
    assert_eq!(summary.ordered_stops.first().unwrap().id, "depot");
    assert_eq!(summary.ordered_stops.last().unwrap().id, "return");
    assert!(summary.ordered_stops.iter().enumerate().all(|(idx, stop)| stop.sequence == idx));

    // no inbound segment for the start
    assert_eq!(summary.ordered_stops[0].distance_km, 0.);
    assert!(summary.ordered_stops[1].distance_km > 0.);

    assert_eq!(summary.weight_profile.len(), 5);
    assert_eq!(summary.traffic_condition, "moderate");
    assert!(summary.cost_estimate.distance > 0.);
    assert!(summary.cost_estimate.total_cost > 0.);
    assert!(summary.trip_travel.distance_km > 0.);
    assert!(summary.trip_travel.duration_min > 0.);
}

#[test]
fn can_reject_invalid_request() {
    let mut request = test_plan_request();
    request.config.fuel_cost_per_liter = 0.;

    let errors = plan_route(&request, &test_environment_at(13)).unwrap_err();

    assert!(errors.has_code("E0003"));
}

#[test]
fn can_report_rush_hour_condition() {
    let mut request = test_plan_request();
    request.params.use_real_time_data = true;

    let summary = plan_route(&request, &test_environment_at(8)).unwrap();

    assert_eq!(summary.traffic_condition, "heavy");
    assert_eq!(summary.cost_estimate.traffic_conditions, "heavy");
}

#[test]
fn can_recompute_on_parameter_change() {
    let request = test_plan_request();
    let mut frugal = test_plan_request();
    frugal.params.prioritize_fuel = true;

    let baseline = plan_route(&request, &test_environment_at(13)).unwrap();
    let adjusted = plan_route(&frugal, &test_environment_at(13)).unwrap();

    assert!(adjusted.cost_estimate.fuel_consumption < baseline.cost_estimate.fuel_consumption);
}

#[test]
fn can_export_rows_per_stop() {
    let summary = plan_route(&test_plan_request(), &test_environment_at(13)).unwrap();

    let rows = export_rows(&summary);

    assert_eq!(rows.len(), summary.ordered_stops.len());
    assert_eq!(rows[0].site_name, "site depot");
    assert_eq!(rows[0].cylinders, 10);
    assert!(rows[1].kms > 0.);
}

#[test]
fn can_analyze_route_against_history() {
    let history = vec![
        test_api_route("r1", 100., 120., 900., 40),
        test_api_route("r2", 80., 100., 700., 60),
    ];

    let report = analyze_route(&test_api_route("new", 80., 100., 700., 60), &history);

    assert_eq!(report.metrics.len(), 4);
    // the route matches the fleet best on every dimension
    assert!(report.metrics.iter().all(|metric| metric.efficiency.label == "Excellent"));
    assert_eq!(report.overall_score, 95.);
    assert_eq!(report.metrics[0].dimension, "distance");
}

#[test]
fn can_degrade_analysis_without_history() {
    let report = analyze_route(&test_api_route("new", 80., 100., 700., 60), &[]);

    assert!(report.metrics.iter().all(|metric| metric.efficiency.label == "Unknown"));
    assert!(report
        .metrics
        .iter()
        .all(|metric| metric.efficiency.recommendation == "insufficient data"));
    assert_eq!(report.overall_score, 50.);
}

#[test]
fn can_deserialize_request_from_reader() {
    let json = serde_json::to_string(&test_plan_request()).unwrap();

    let request = deserialize_plan_request(BufReader::new(json.as_bytes())).unwrap();

    assert_eq!(request.stops.len(), 3);
}

#[test]
fn can_report_code_for_broken_json() {
    let errors = deserialize_plan_request(BufReader::new("{not json".as_bytes())).unwrap_err();

    assert!(errors.has_code("E0000"));
}

#[test]
fn can_serialize_summary_to_writer() {
    let summary = plan_route(&test_plan_request(), &test_environment_at(13)).unwrap();

    let mut buffer = vec![];
    serialize_plan_summary(&summary, BufWriter::new(&mut buffer)).unwrap();

    let json = String::from_utf8(buffer).unwrap();
    assert!(json.contains("orderedStops"));
    assert!(json.contains("costEstimate"));
    assert!(json.contains("weightProfile"));
}
