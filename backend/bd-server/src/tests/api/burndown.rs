use crate::api::burndown::burndown::resolve_sample_request;
use crate::{SampleDefaults, SampleQuery};

use bd_core::Scenario;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};

#[test]
fn given_empty_query_when_resolve_then_uses_defaults() {
    // Given
    let query = SampleQuery::default();
    let defaults = SampleDefaults::default();

    // When
    let request = resolve_sample_request(&query, &defaults).unwrap();

    // Then
    assert_that!(request.total_points, eq(100.0));
    assert_that!(request.duration_days, eq(14));
    assert_that!(request.scenario, eq(Scenario::Ideal));
}

#[test]
fn given_full_query_when_resolve_then_query_wins() {
    // Given
    let query = SampleQuery {
        total_points: Some(40.0),
        duration_days: Some(5),
        scenario: Some("stuck".into()),
        seed: Some(1),
    };

    // When
    let request = resolve_sample_request(&query, &SampleDefaults::default()).unwrap();

    // Then
    assert_that!(request.total_points, eq(40.0));
    assert_that!(request.duration_days, eq(5));
    assert_that!(request.scenario, eq(Scenario::Stuck));
}

#[test]
fn given_unknown_scenario_when_resolve_then_falls_back_to_ideal() {
    let query = SampleQuery {
        scenario: Some("chaotic".into()),
        ..Default::default()
    };

    let request = resolve_sample_request(&query, &SampleDefaults::default()).unwrap();

    assert_that!(request.scenario, eq(Scenario::Ideal));
}

#[test]
fn given_zero_duration_when_resolve_then_error() {
    let query = SampleQuery {
        duration_days: Some(0),
        ..Default::default()
    };

    let result = resolve_sample_request(&query, &SampleDefaults::default());

    assert_that!(result, err(anything()));
}

#[test]
fn given_duration_above_max_when_resolve_then_error() {
    // Given
    let mut defaults = SampleDefaults::default();
    defaults.max_duration_days = 30;
    let query = SampleQuery {
        duration_days: Some(31),
        ..Default::default()
    };

    // When
    let result = resolve_sample_request(&query, &defaults);

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_non_positive_points_when_resolve_then_error() {
    let query = SampleQuery {
        total_points: Some(0.0),
        ..Default::default()
    };

    let result = resolve_sample_request(&query, &SampleDefaults::default());

    assert_that!(result, err(anything()));
}
