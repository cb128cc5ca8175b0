//! The walkthrough scenarios and their runner.

use std::cell::Cell;
use std::rc::Rc;

use adtkit::control::{Either, Maybe};
use adtkit::matching::{match_either, match_list, match_maybe};
use adtkit::persistent::List;
use clap::ValueEnum;

use crate::account::{self, Address, Preferences, Street, User};
use crate::division::{describe_division, divide_two_if_even};
use crate::error::WalkthroughError;
use crate::json::safe_prop;
use crate::pricing::{apply_discount, apply_discount_chained, parse_money};
use crate::temperatures::{coordinates, sample_cities};
use crate::trimming::counted_next_letter;

/// Which part of the walkthrough to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Every scenario, in order.
    All,
    /// Price and percent parsing with `Boxed`.
    Discount,
    /// Nested optional fields with `Maybe` and `Either`.
    Street,
    /// JSON property lookup with `Either::try_catch`.
    Json,
    /// Even-number division with `Either`.
    Division,
    /// City temperature coordinates with `List`.
    Temperatures,
    /// A deferred pipeline with `LazyBox`.
    Lazy,
    /// The reusable match combinators.
    Matching,
}

impl Scenario {
    const ORDERED: [Self; 7] = [
        Self::Discount,
        Self::Street,
        Self::Json,
        Self::Division,
        Self::Temperatures,
        Self::Lazy,
        Self::Matching,
    ];
}

/// Settings for one walkthrough run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkthroughConfig {
    /// Scenario selection.
    pub scenario: Scenario,
    /// How many times the lazy scenario folds its pipeline.
    pub lazy_folds: usize,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::All,
            lazy_folds: 2,
        }
    }
}

/// Runs the selected scenarios and returns the lines they print.
pub fn run(config: &WalkthroughConfig) -> Vec<String> {
    run_one(config.scenario, config.lazy_folds)
}

fn run_one(scenario: Scenario, lazy_folds: usize) -> Vec<String> {
    tracing::info!(?scenario, "running scenario");
    match scenario {
        Scenario::All => Scenario::ORDERED
            .iter()
            .flat_map(|&scenario| run_one(scenario, lazy_folds))
            .collect(),
        Scenario::Discount => discount(),
        Scenario::Street => street(),
        Scenario::Json => json(),
        Scenario::Division => division(),
        Scenario::Temperatures => temperatures(),
        Scenario::Lazy => lazy(lazy_folds),
        Scenario::Matching => matching(),
    }
}

fn discount() -> Vec<String> {
    let strict = parse_money("$abc").fold(|error| error.to_string(), |amount| amount.to_string());
    vec![
        format!("$100 with 25% off (map2): {}", apply_discount("$100", "25%")),
        format!("$100 with 25% off (chain): {}", apply_discount_chained("$100", "25%")),
        format!("strict parse of $abc: {strict}"),
    ]
}

fn street() -> Vec<String> {
    let with_street = User {
        name: "Ada".to_string(),
        premium: true,
        preferences: Preferences {
            theme: "dark".to_string(),
        },
        address: Some(Address {
            street: Some(Street {
                name: Some("Elm Street".to_string()),
            }),
        }),
    };
    let without_street = User {
        address: Some(Address { street: None }),
        premium: false,
        ..with_street.clone()
    };

    let mut lines = vec![
        account::open_site(Some(&with_street)),
        account::open_site(None),
        format!("theme for premium user: {}", account::preferences(&with_street).theme),
        format!("theme for regular user: {}", account::preferences(&without_street).theme),
    ];
    for user in [&with_street, &without_street] {
        let reason = account::street_name_checked(user).fold(|error| error.to_string(), |name| name);
        tracing::debug!(user = %user.name, %reason, "street lookup");
        lines.push(account::street_name_or_default(user));
    }
    lines
}

fn json() -> Vec<String> {
    [r#"{"name": "adtkit"}"#, r#"{"version": 1}"#, "not json"]
        .into_iter()
        .map(|text| {
            safe_prop(text, "name").fold(
                |error| {
                    tracing::warn!(%error, "property lookup failed");
                    format!("failed: {error}")
                },
                |value| format!("name is {value}"),
            )
        })
        .collect()
}

fn division() -> Vec<String> {
    [2, 3, 0].into_iter().map(describe_division).collect()
}

fn temperatures() -> Vec<String> {
    coordinates(&sample_cities()).fold(
        |error| vec![format!("failed: {error}")],
        |points| {
            points
                .iter()
                .map(|(average, population)| format!("average {average} for population {population}"))
                .collect()
        },
    )
}

fn lazy(folds: usize) -> Vec<String> {
    let reads = Rc::new(Cell::new(0));
    let pipeline = counted_next_letter("  64 ", Rc::clone(&reads));
    let mut lines = vec![format!("source reads before fold: {}", reads.get())];
    for _ in 0..folds {
        let letter = pipeline.fold(|letter| letter.map(|c| c.to_ascii_lowercase()));
        lines.push(letter.fold(|| "no letter".to_string(), |c| format!("letter {c}")));
    }
    lines.push(format!("source reads after {folds} folds: {}", reads.get()));
    lines
}

fn matching() -> Vec<String> {
    let render_maybe = match_maybe(|| "no value".to_string(), |n: i32| format!("num is {n}"));
    let render_either = match_either(|error: WalkthroughError| error.to_string(), |n: i32| format!("result is {n}"));
    let render_list = match_list(|| "list is empty".to_string(), |head: &i32, _| format!("list head is {head}"));

    let list: List<i32> = (1..=4).collect();
    vec![
        render_maybe(Maybe::some(20)),
        render_maybe(Maybe::none()),
        render_either(divide_two_if_even(2)),
        render_either(divide_two_if_even(3)),
        render_either(Either::left(WalkthroughError::DivisionByZero)),
        render_list(&list),
        render_list(&List::nil()),
        format!("list is {list}"),
    ]
}
