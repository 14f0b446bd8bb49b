use super::*;
use crate::helpers::models::*;
use proptest::prelude::*;

fn params() -> OptimizationParams {
    OptimizationParams::default()
}

#[test]
fn can_keep_start_and_end_pinned() {
    let start = test_depot("start", -26.0, 28.0, 10);
    let end = test_depot("end", -26.5, 28.5, 0);
    let stops = vec![
        test_customer("c1", -26.4, 28.4, 5),
        test_customer("c2", -26.1, 28.1, 5),
    ];

    let ordered = order_stops(&start, &end, &stops, &params());

    assert_eq!(ordered.first().unwrap().id, "start");
    assert_eq!(ordered.last().unwrap().id, "end");
    assert_eq!(ordered.len(), 4);
}

#[test]
fn can_pass_through_zero_and_one_intermediates() {
    let start = test_depot("start", -26.0, 28.0, 10);
    let end = test_depot("end", -26.5, 28.5, 0);

    let ordered = order_stops(&start, &end, &[], &params());
    assert_eq!(ordered.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(), vec!["start", "end"]);

    let single = vec![test_customer("c1", -26.2, 28.2, 5)];
    let ordered = order_stops(&start, &end, &single, &params());
    assert_eq!(
        ordered.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(),
        vec!["start", "c1", "end"]
    );
}

#[test]
fn can_visit_nearest_first_without_preferences() {
    let start = test_depot("start", -26.0, 28.0, 10);
    let end = test_depot("end", -26.0, 28.0, 0);
    let stops = vec![
        test_customer("far", -26.4, 28.4, 0),
        test_customer("near", -26.1, 28.1, 0),
        test_customer("mid", -26.2, 28.2, 0),
    ];

    let ordered = order_stops(&start, &end, &stops, &params());

    assert_eq!(
        ordered.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(),
        vec!["start", "near", "mid", "far", "end"]
    );
}

#[test]
fn can_prefer_high_demand_stop_over_slightly_nearer_one() {
    let start = test_depot("start", -26.0, 28.0, 10);
    let end = test_depot("end", -26.0, 28.0, 0);
    // "loaded" sits ~10% further out but carries full pickup priority: 0.8 factor wins
    let stops = vec![
        test_customer("close", -26.10, 28.0, 0),
        test_customer("loaded", -26.11, 28.0, 50),
    ];

    let ordered = order_stops(&start, &end, &stops, &params());

    assert_eq!(ordered[1].id, "loaded");
}

#[test]
fn can_break_score_ties_by_input_order() {
    let start = test_depot("start", -26.0, 28.0, 10);
    let end = test_depot("end", -26.5, 28.5, 0);
    let stops = vec![
        test_customer("first", -26.2, 28.2, 5),
        test_customer("twin", -26.2, 28.2, 5),
    ];

    let ordered = order_stops(&start, &end, &stops, &params());

    assert_eq!(
        ordered.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(),
        vec!["start", "first", "twin", "end"]
    );
}

#[test]
fn can_push_high_latitude_stops_later_with_fuel_priority() {
    let start = test_depot("start", -50.0, 28.0, 10);
    let end = test_depot("end", -50.0, 28.0, 0);
    // equidistant from start, only |latitude| differs
    let stops = vec![
        test_customer("steep", -50.01, 28.0, 0),
        test_customer("flat", -49.99, 28.0, 0),
    ];

    let ordered = order_stops(&start, &end, &stops, &OptimizationParams::default());
    assert_eq!(ordered[1].id, "steep", "ties keep input order without fuel priority");

    let fuel_params = OptimizationParams { prioritize_fuel: true, ..OptimizationParams::default() };
    let ordered = order_stops(&start, &end, &stops, &fuel_params);
    assert_eq!(ordered[1].id, "flat");
}

proptest! {
    #[test]
    fn output_is_permutation_of_input(
        coords in prop::collection::vec((-89.0..89.0, -179.0..179.0, 0u32..60), 2..12)
    ) {
        let start = test_depot("start", -26.0, 28.0, 10);
        let end = test_depot("end", -26.5, 28.5, 0);
        let stops = coords
            .iter()
            .enumerate()
            .map(|(idx, (lat, lng, empties))| test_customer(&format!("c{idx}"), *lat, *lng, *empties))
            .collect::<Vec<_>>();

        let ordered = order_stops(&start, &end, &stops, &params());

        prop_assert_eq!(ordered.len(), stops.len() + 2);
        prop_assert_eq!(ordered.first().unwrap().id.as_str(), "start");
        prop_assert_eq!(ordered.last().unwrap().id.as_str(), "end");

        let mut expected = stops.iter().map(|stop| stop.id.clone()).collect::<Vec<_>>();
        let mut actual =
            ordered[1..ordered.len() - 1].iter().map(|stop| stop.id.clone()).collect::<Vec<_>>();
        expected.sort();
        actual.sort();
        prop_assert_eq!(expected, actual);
    }
}
