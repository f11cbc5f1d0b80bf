use crate::Scenario;

use std::str::FromStr;

#[test]
fn test_scenario_as_str() {
    assert_eq!(Scenario::Ideal.as_str(), "ideal");
    assert_eq!(Scenario::Delayed.as_str(), "delayed");
    assert_eq!(Scenario::Ahead.as_str(), "ahead");
    assert_eq!(Scenario::Stuck.as_str(), "stuck");
}

#[test]
fn test_scenario_from_str() {
    assert_eq!(Scenario::from_str("delayed").unwrap(), Scenario::Delayed);
    assert_eq!(Scenario::from_str("AHEAD").unwrap(), Scenario::Ahead);
    assert_eq!(Scenario::from_str(" stuck ").unwrap(), Scenario::Stuck);
}

#[test]
fn test_unknown_scenario_falls_back_to_ideal() {
    assert_eq!(Scenario::from_str("chaotic").unwrap(), Scenario::Ideal);
    assert_eq!(Scenario::from_str("").unwrap(), Scenario::Ideal);
}

#[test]
fn test_scenario_profiles() {
    let delayed = Scenario::Delayed.profile();
    assert_eq!(delayed.variability, 0.2);
    assert_eq!(delayed.completion, 0.7);

    let stuck = Scenario::Stuck.profile();
    assert_eq!(stuck.variability, 0.05);
    assert_eq!(stuck.completion, 0.3);
}

#[test]
fn test_scenario_serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Scenario::Ahead).unwrap(), "\"ahead\"");

    let parsed: Scenario = serde_json::from_str("\"bogus\"").unwrap();
    assert_eq!(parsed, Scenario::Ideal);
}
