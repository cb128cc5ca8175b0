//! Integration tests for the walkthrough scenarios.

use adtkit_walkthrough::{Scenario, WalkthroughConfig, run};
use rstest::rstest;

fn lines_for(scenario: Scenario) -> Vec<String> {
    run(&WalkthroughConfig {
        scenario,
        lazy_folds: 2,
    })
}

#[rstest]
fn discount_lines() {
    assert_eq!(
        lines_for(Scenario::Discount),
        vec![
            "$100 with 25% off (map2): 75",
            "$100 with 25% off (chain): 75",
            "strict parse of $abc: invalid amount: \"$abc\"",
        ]
    );
}

#[rstest]
fn street_lines() {
    assert_eq!(
        lines_for(Scenario::Street),
        vec![
            "rendering page for Ada",
            "showing login",
            "theme for premium user: dark",
            "theme for regular user: light",
            "Elm Street",
            "no street",
        ]
    );
}

#[rstest]
fn json_lines() {
    let lines = lines_for(Scenario::Json);
    assert_eq!(lines[0], "name is \"adtkit\"");
    assert_eq!(lines[1], "failed: property name not found");
    assert!(lines[2].starts_with("failed: invalid json:"));
}

#[rstest]
fn division_lines() {
    assert_eq!(
        lines_for(Scenario::Division),
        vec!["result is 1", "number is not even", "cannot divide by zero"]
    );
}

#[rstest]
fn temperature_lines() {
    assert_eq!(
        lines_for(Scenario::Temperatures),
        vec![
            "average 55.25 for population 2047",
            "average 5.5 for population 3568",
            "average 75 for population 1000000",
        ]
    );
}

#[rstest]
fn lazy_lines() {
    assert_eq!(
        lines_for(Scenario::Lazy),
        vec![
            "source reads before fold: 0",
            "letter a",
            "letter a",
            "source reads after 2 folds: 2",
        ]
    );
}

#[rstest]
fn matching_lines() {
    assert_eq!(
        lines_for(Scenario::Matching),
        vec![
            "num is 20",
            "no value",
            "result is 1",
            "number is not even",
            "cannot divide by zero",
            "list head is 1",
            "list is empty",
            "list is 1, 2, 3, 4",
        ]
    );
}
