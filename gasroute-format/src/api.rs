//! Planning and analysis entry points consumed by the dashboard and analytics layers.

#[cfg(test)]
#[path = "../tests/unit/api_test.rs"]
mod api_test;

use crate::model::*;
use crate::validation::ValidationContext;
use crate::{FormatError, MultiFormatError};
use gasroute_core::analysis::efficiency::{Dimension, DimensionStats};
use gasroute_core::construction::estimation::{build_route, RouteEstimate};
use gasroute_core::construction::traffic::TripTravel;
use gasroute_core::construction::weight::WeightProfileEntry;
use gasroute_core::prelude::*;
use rustc_hash::FxHashMap;
use std::io::{BufReader, BufWriter, Read, Write};

/// Plans a route for the dashboard: validates the request, orders the stops, derives the
/// running weight profile and the cost estimate.
///
/// The result is a pure derivation of the request and the injected environment; callers
/// re-plan on every stop list or parameter change instead of mutating a cached summary.
pub fn plan_route(request: &PlanRequest, environment: &Environment) -> Result<PlanSummary, MultiFormatError> {
    ValidationContext::new(request).validate()?;

    let start = request.start.to_core();
    let end = request.end.to_core();
    let stops = request.stops.iter().map(ApiLocation::to_core).collect::<Vec<_>>();
    let params = request.params.to_core();
    let fleet_config = request.config.to_fleet_config();

    let ordered = order_stops(&start, &end, &stops, &params);

    let profile = weight_profile(&ordered, &fleet_config);
    let estimate = estimate_route(
        &ordered,
        &params,
        request.config.fuel_cost_per_liter,
        &fleet_config,
        environment,
    );

    let traffic = traffic_model(&request.config);
    let trip = traffic.estimate_trip(&ordered, environment);

    (environment.logger)(&format!(
        "planned route: {} stops, {:.1} km, {} min, {} traffic",
        ordered.len(),
        estimate.cost.distance_km,
        estimate.cost.duration_min,
        estimate.cost.traffic_conditions,
    ));

    Ok(assemble_summary(&ordered, profile.entries, estimate, trip))
}

/// Compares a route's totals against the supplied historical population, one metric per
/// dimension plus the overall score. An empty history degrades every metric to the
/// `Unknown` sentinel instead of failing.
pub fn analyze_route(route: &ApiRoute, history: &[ApiRoute]) -> ApiEfficiencyReport {
    let records = history.iter().map(ApiRoute::to_totals).collect::<Vec<_>>();

    let stats = FleetStats::from_records(&records).unwrap_or_else(unknown_stats);
    let report = score_route(&route.to_totals(), &stats);

    ApiEfficiencyReport {
        metrics: report
            .metrics
            .iter()
            .map(|metric| ApiEfficiencyMetric {
                dimension: dimension_name(metric.dimension).to_string(),
                value: metric.value,
                average: metric.average,
                best: metric.best,
                efficiency: ApiEfficiency {
                    score: metric.efficiency.score,
                    label: metric.efficiency.label.to_string(),
                    recommendation: metric.recommendation.to_string(),
                },
            })
            .collect(),
        overall_score: report.overall_score,
    }
}

/// Precomputes the rows the reporting sink renders into documents.
pub fn export_rows(summary: &PlanSummary) -> Vec<ExportRow> {
    summary
        .ordered_stops
        .iter()
        .map(|stop| ExportRow {
            site_name: stop.name.clone(),
            cylinders: stop.cylinders,
            kms: stop.distance_km,
            fuel_cost: stop.fuel_cost,
        })
        .collect()
}

/// Reads a planning request from a json reader.
pub fn deserialize_plan_request<R: Read>(reader: BufReader<R>) -> Result<PlanRequest, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        MultiFormatError::from(vec![FormatError::new_with_details(
            "E0000",
            "cannot deserialize plan request",
            "check input json",
            err.to_string(),
        )])
    })
}

/// Writes a plan summary into a json writer.
pub fn serialize_plan_summary<W: Write>(
    summary: &PlanSummary,
    writer: BufWriter<W>,
) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(writer, summary).map_err(|err| err.to_string().into())
}

fn traffic_model(config: &PlanConfig) -> TrafficModel {
    if config.region_factors.is_empty() {
        TrafficModel::default()
    } else {
        TrafficModel::new(config.region_factors.iter().map(|(k, &v)| (k.clone(), v)).collect::<FxHashMap<_, _>>())
    }
}

fn assemble_summary(
    ordered: &[Location],
    profile: Vec<WeightProfileEntry>,
    estimate: RouteEstimate,
    trip: TripTravel,
) -> PlanSummary {
    let route = build_route(ordered, &estimate);

    let ordered_stops = route
        .stops
        .into_iter()
        .map(|stop| ApiRouteStop {
            id: stop.location.id.clone(),
            name: stop.location.name.clone(),
            sequence: stop.sequence,
            distance_km: stop.distance_km,
            duration_min: stop.duration_min,
            fuel_cost: stop.fuel_cost,
            cylinders: stop.location.handled_cylinders(),
        })
        .collect();

    let weight_profile = profile
        .into_iter()
        .map(|entry| ApiWeightEntry {
            location_id: entry.location_id,
            full_cylinders: entry.full_cylinders,
            empty_cylinders: entry.empty_cylinders,
            weight_kg: entry.weight_kg,
        })
        .collect();

    let traffic_condition = estimate.cost.traffic_conditions.to_string();

    PlanSummary {
        ordered_stops,
        weight_profile,
        cost_estimate: ApiCostEstimate::from(&estimate.cost),
        traffic_condition,
        trip_travel: ApiTripTravel { distance_km: trip.distance_km, duration_min: trip.duration_min },
    }
}

fn unknown_stats() -> FleetStats {
    let unknown = DimensionStats { average: f64::NAN, best: f64::NAN };
    FleetStats { distance: unknown, duration: unknown, cost: unknown, cylinders: unknown }
}

fn dimension_name(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Distance => "distance",
        Dimension::Duration => "duration",
        Dimension::Cost => "cost",
        Dimension::Cylinders => "cylinders",
    }
}
