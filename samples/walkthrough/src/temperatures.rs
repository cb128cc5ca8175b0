//! Turning city records into chart coordinates with `List`.
//!
//! A chart wants one `(average temperature, population)` point per city.
//! The points are built from small list operations: pluck a field, average
//! a list of readings, zip two lists together.

use adtkit::control::{Either, Maybe};
use adtkit::persistent::List;

use crate::error::WalkthroughError;

/// A city with its temperature readings.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    /// City name.
    pub name: String,
    /// Number of inhabitants.
    pub population: u32,
    /// Temperature readings, in any unit.
    pub temperatures: List<i32>,
}

impl City {
    /// Creates a city from a slice of readings.
    pub fn new(name: &str, population: u32, temperatures: &[i32]) -> Self {
        Self {
            name: name.to_string(),
            population,
            temperatures: List::from_slice(temperatures),
        }
    }
}

/// The three towns used throughout the walkthrough.
pub fn sample_cities() -> List<City> {
    vec![
        City::new("Jamestown", 2047, &[-34, 67, 101, 87]),
        City::new("Awesome Town", 3568, &[-3, 4, 9, 12]),
        City::new("Funky Town", 1_000_000, &[75, 75, 75, 75, 75]),
    ]
    .into_iter()
    .collect()
}

/// Averages a list of readings; an empty list has no average.
pub fn average(readings: &List<i32>) -> Maybe<f64> {
    let (total, count) = readings.fold_left((0_i64, 0_u32), |(total, count), reading| {
        (total + i64::from(*reading), count + 1)
    });
    if count == 0 {
        Maybe::none()
    } else {
        #[allow(clippy::cast_precision_loss)]
        let mean = total as f64 / f64::from(count);
        Maybe::some(mean)
    }
}

/// Pairs each city's average temperature with its population.
///
/// Fails on the first city without readings.
///
/// ```
/// use adtkit_walkthrough::temperatures::{coordinates, sample_cities};
///
/// let points = coordinates(&sample_cities()).fold(|_| Vec::new(), |points| points.to_vec());
/// assert_eq!(points, vec![(55.25, 2047), (5.5, 3568), (75.0, 1_000_000)]);
/// ```
pub fn coordinates(cities: &List<City>) -> Either<WalkthroughError, List<(f64, u32)>> {
    let averages = cities.fold_left(Either::right(Vec::new()), |collected, city| {
        collected.chain(|mut values: Vec<f64>| {
            average(&city.temperatures)
                .to_either(|| WalkthroughError::NoReadings {
                    city: city.name.clone(),
                })
                .map(|value| {
                    values.push(value);
                    values
                })
        })
    });
    let populations = cities.map(|city| city.population);
    averages.map(|values| values.into_iter().collect::<List<f64>>().zip(&populations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[-34, 67, 101, 87], Maybe::some(55.25))]
    #[case(&[-3, 4, 9, 12], Maybe::some(5.5))]
    #[case(&[], Maybe::none())]
    fn averages_readings(#[case] readings: &[i32], #[case] expected: Maybe<f64>) {
        assert_eq!(average(&List::from_slice(readings)), expected);
    }

    #[rstest]
    fn coordinates_follow_city_order() {
        let points = coordinates(&sample_cities()).into_right().unwrap();
        assert_eq!(points.to_vec(), vec![(55.25, 2047), (5.5, 3568), (75.0, 1_000_000)]);
    }

    #[rstest]
    fn city_without_readings_is_reported() {
        let cities: List<City> = vec![
            City::new("Jamestown", 2047, &[1]),
            City::new("Nowhere", 1, &[]),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            coordinates(&cities),
            Either::left(WalkthroughError::NoReadings {
                city: "Nowhere".to_string()
            })
        );
    }
}
