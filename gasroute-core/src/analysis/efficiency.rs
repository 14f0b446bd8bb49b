//! Scores a route's aggregate metrics against the fleet average and best.

#[cfg(test)]
#[path = "../../tests/unit/analysis/efficiency_test.rs"]
mod efficiency_test;

use crate::models::RouteTotals;
use crate::utils::{round_to, Float};
use std::fmt;

/// A qualitative bucket of an efficiency score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EfficiencyLabel {
    /// At or near the fleet best.
    Excellent,
    /// Better than the fleet average.
    Good,
    /// Around the fleet average.
    Average,
    /// Clearly behind the fleet average.
    BelowAverage,
    /// Inputs did not allow a comparison.
    Unknown,
}

impl EfficiencyLabel {
    /// Returns a human readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            EfficiencyLabel::Excellent => "Excellent",
            EfficiencyLabel::Good => "Good",
            EfficiencyLabel::Average => "Average",
            EfficiencyLabel::BelowAverage => "Below Average",
            EfficiencyLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EfficiencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized 0 to 100 comparison outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Efficiency {
    /// Score in [0, 100].
    pub score: Float,
    /// Qualitative bucket of the score.
    pub label: EfficiencyLabel,
}

/// A compared route dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Total route distance, lower is better.
    Distance,
    /// Total route duration, lower is better.
    Duration,
    /// Total route cost, lower is better.
    Cost,
    /// Cylinders moved per route, higher is better.
    Cylinders,
}

impl Dimension {
    /// Tells whether a larger value of the dimension is the desirable direction.
    pub fn higher_is_better(&self) -> bool {
        matches!(self, Dimension::Cylinders)
    }
}

/// A single dimension comparison of a route against the fleet.
#[derive(Clone, Debug)]
pub struct EfficiencyMetric {
    /// Compared dimension.
    pub dimension: Dimension,
    /// The route's own value.
    pub value: Float,
    /// Fleet average of the dimension.
    pub average: Float,
    /// Fleet best of the dimension.
    pub best: Float,
    /// Scoring outcome.
    pub efficiency: Efficiency,
    /// A static, bucket selected advice line.
    pub recommendation: &'static str,
}

/// Average and best of one dimension over the historical population.
#[derive(Clone, Copy, Debug)]
pub struct DimensionStats {
    /// Population mean.
    pub average: Float,
    /// Population best: minimum for lower is better dimensions, maximum for cylinders.
    pub best: Float,
}

/// Fleet wide reference figures derived from historical route records.
#[derive(Clone, Copy, Debug)]
pub struct FleetStats {
    /// Distance reference.
    pub distance: DimensionStats,
    /// Duration reference.
    pub duration: DimensionStats,
    /// Cost reference.
    pub cost: DimensionStats,
    /// Cylinder count reference.
    pub cylinders: DimensionStats,
}

impl FleetStats {
    /// Aggregates historical records into per dimension average and best figures.
    /// An empty history yields nothing: there is no population to compare against.
    pub fn from_records(records: &[RouteTotals]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let count = records.len() as Float;
        let mean = |get: fn(&RouteTotals) -> Float| records.iter().map(get).sum::<Float>() / count;
        let min = |get: fn(&RouteTotals) -> Float| {
            records.iter().map(get).fold(Float::INFINITY, Float::min)
        };
        let max = |get: fn(&RouteTotals) -> Float| {
            records.iter().map(get).fold(Float::NEG_INFINITY, Float::max)
        };

        Some(Self {
            distance: DimensionStats { average: mean(|r| r.distance_km), best: min(|r| r.distance_km) },
            duration: DimensionStats { average: mean(|r| r.duration_min), best: min(|r| r.duration_min) },
            cost: DimensionStats { average: mean(|r| r.cost), best: min(|r| r.cost) },
            cylinders: DimensionStats {
                average: mean(|r| r.cylinders as Float),
                best: max(|r| r.cylinders as Float),
            },
        })
    }
}

/// A full efficiency comparison of one route.
#[derive(Clone, Debug)]
pub struct EfficiencyReport {
    /// Per dimension metrics: distance, duration, cost, cylinders.
    pub metrics: Vec<EfficiencyMetric>,
    /// Equal weighted mean of the four dimension scores.
    pub overall_score: Float,
}

/// Scores a value against the population average and best, producing a 0 to 100 score
/// and its qualitative bucket.
///
/// NaN anywhere short circuits to the `Unknown` sentinel before any formula runs, and
/// zero denominators degrade to the base score of the matched bucket.
pub fn calculate_efficiency_score(
    value: Float,
    average: Float,
    best: Float,
    higher_is_better: bool,
) -> Efficiency {
    if value.is_nan() || average.is_nan() || best.is_nan() {
        return Efficiency { score: 50., label: EfficiencyLabel::Unknown };
    }

    let (score, label) = if higher_is_better {
        score_higher_better(value, average, best)
    } else {
        score_lower_better(value, average, best)
    };

    Efficiency { score: score.clamp(0., 100.), label }
}

fn score_lower_better(value: Float, average: Float, best: Float) -> (Float, EfficiencyLabel) {
    if value <= best * 1.05 {
        (95., EfficiencyLabel::Excellent)
    } else if value <= average {
        let span = average - best;
        let ratio = if span > Float::EPSILON { (average - value) / span } else { 0. };
        (75. + 20. * ratio, EfficiencyLabel::Good)
    } else if value <= average * 1.25 {
        let span = average * 0.25;
        let ratio = if span > Float::EPSILON { (average * 1.25 - value) / span } else { 0. };
        (50. + 25. * ratio, EfficiencyLabel::Average)
    } else if average > Float::EPSILON {
        ((50. - 20. * (value - average * 1.25) / average).max(30.), EfficiencyLabel::BelowAverage)
    } else {
        (30., EfficiencyLabel::BelowAverage)
    }
}

fn score_higher_better(value: Float, average: Float, best: Float) -> (Float, EfficiencyLabel) {
    if value >= best * 0.95 {
        (95., EfficiencyLabel::Excellent)
    } else if value >= average {
        let span = best - average;
        let ratio = if span > Float::EPSILON { (value - average) / span } else { 0. };
        (75. + 20. * ratio, EfficiencyLabel::Good)
    } else if value >= average * 0.75 {
        let span = average * 0.25;
        let ratio = if span > Float::EPSILON { (value - average * 0.75) / span } else { 0. };
        (50. + 25. * ratio, EfficiencyLabel::Average)
    } else if average > Float::EPSILON {
        ((50. - 20. * (average * 0.75 - value) / average).max(30.), EfficiencyLabel::BelowAverage)
    } else {
        (30., EfficiencyLabel::BelowAverage)
    }
}

/// Builds the metric of one dimension, attaching the bucket selected recommendation.
pub fn metric(dimension: Dimension, value: Float, stats: DimensionStats) -> EfficiencyMetric {
    let efficiency =
        calculate_efficiency_score(value, stats.average, stats.best, dimension.higher_is_better());

    EfficiencyMetric {
        dimension,
        value,
        average: stats.average,
        best: stats.best,
        efficiency,
        recommendation: recommendation(dimension, efficiency.label),
    }
}

/// Compares a route's totals to the fleet reference, one metric per dimension plus the
/// equal weighted overall score.
pub fn score_route(totals: &RouteTotals, stats: &FleetStats) -> EfficiencyReport {
    let metrics = vec![
        metric(Dimension::Distance, totals.distance_km, stats.distance),
        metric(Dimension::Duration, totals.duration_min, stats.duration),
        metric(Dimension::Cost, totals.cost, stats.cost),
        metric(Dimension::Cylinders, totals.cylinders as Float, stats.cylinders),
    ];

    let overall_score =
        round_to(metrics.iter().map(|m| m.efficiency.score).sum::<Float>() / metrics.len() as Float, 1);

    EfficiencyReport { metrics, overall_score }
}

/// One static advice line per dimension and bucket.
fn recommendation(dimension: Dimension, label: EfficiencyLabel) -> &'static str {
    use Dimension::*;
    use EfficiencyLabel::*;

    match (dimension, label) {
        (_, Unknown) => "insufficient data",

        (Distance, Excellent) => "Route length is among the fleet best, keep this stop grouping.",
        (Distance, Good) => "Shorter than the fleet average, minor reordering may still help.",
        (Distance, Average) => "Close to the fleet average, review outlying stops.",
        (Distance, BelowAverage) => "Well above the fleet average, split the route or regroup by area.",

        (Duration, Excellent) => "Trip time is among the fleet best, current departure slot works well.",
        (Duration, Good) => "Faster than the fleet average, keep avoiding peak windows.",
        (Duration, Average) => "Around the fleet average, consider an off peak departure.",
        (Duration, BelowAverage) => "Much slower than the fleet average, reschedule outside rush hours.",

        (Cost, Excellent) => "Cost per trip is among the fleet best, no action needed.",
        (Cost, Good) => "Cheaper than the fleet average, fuel settings are paying off.",
        (Cost, Average) => "Near the fleet average, enable fuel priority to trim consumption.",
        (Cost, BelowAverage) => "Costly against the fleet, check load size and route length.",

        (Cylinders, Excellent) => "Truck utilization is among the fleet best.",
        (Cylinders, Good) => "Above average cylinders per trip, keep consolidating stops.",
        (Cylinders, Average) => "Average load, consider merging nearby orders.",
        (Cylinders, BelowAverage) => "Light load for a full trip, merge with a neighboring route.",
    }
}
