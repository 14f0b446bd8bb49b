use super::*;
use crate::helpers::*;
use crate::model::ApiLocationType;

fn validate(request: &crate::model::PlanRequest) -> Result<(), crate::MultiFormatError> {
    ValidationContext::new(request).validate()
}

#[test]
fn can_accept_well_formed_request() {
    assert!(validate(&test_plan_request()).is_ok());
}

#[test]
fn can_reject_request_without_usable_coordinates() {
    let mut request = test_plan_request();
    for location in std::iter::once(&mut request.start)
        .chain(request.stops.iter_mut())
        .chain(std::iter::once(&mut request.end))
    {
        location.latitude = 0.;
        location.longitude = 0.;
    }

    let errors = validate(&request).unwrap_err();

    assert!(errors.has_code("E0001"));
}

#[test]
fn can_accept_partially_usable_coordinates() {
    let mut request = test_plan_request();
    request.stops[0].latitude = 0.;
    request.stops[0].longitude = 0.;

    assert!(validate(&request).is_ok());
}

#[test]
fn can_reject_duplicate_ids() {
    let mut request = test_plan_request();
    request.stops[1].id = request.stops[0].id.clone();

    let errors = validate(&request).unwrap_err();

    assert!(errors.has_code("E0002"));
    assert!(errors.errors[0].details.as_ref().unwrap().contains("c1"));
}

#[test]
fn can_reject_non_positive_fuel_cost() {
    let mut request = test_plan_request();
    request.config.fuel_cost_per_liter = 0.;

    assert!(validate(&request).unwrap_err().has_code("E0003"));

    request.config.fuel_cost_per_liter = f64::NAN;
    assert!(validate(&request).unwrap_err().has_code("E0003"));
}

#[test]
fn can_reject_malformed_date() {
    let mut request = test_plan_request();
    request.date = Some("2026-13-45".to_string());

    assert!(validate(&request).unwrap_err().has_code("E0004"));

    request.date = Some("2026-08-07T08:30:00Z".to_string());
    assert!(validate(&request).is_ok());
}

#[test]
fn can_reject_non_positive_capacity() {
    let mut request = test_plan_request();
    request.config.max_cylinders = 0;

    assert!(validate(&request).unwrap_err().has_code("E0005"));
}

#[test]
fn can_collect_multiple_errors_at_once() {
    let mut request = test_plan_request();
    request.stops[1].id = request.stops[0].id.clone();
    request.config.fuel_cost_per_liter = -1.;

    let errors = validate(&request).unwrap_err();

    assert_eq!(errors.errors.len(), 2);
    assert!(errors.has_code("E0002"));
    assert!(errors.has_code("E0003"));
}

#[test]
fn can_validate_customer_start() {
    let mut request = test_plan_request();
    request.start = test_api_location("cstart", ApiLocationType::Customer, -26.0, 28.0);

    assert!(validate(&request).is_ok());
}
