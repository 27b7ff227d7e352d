//! Total orders over computed routes.
//!
//! Each comparator is a plain function usable with `slice::sort_by`, the
//! display sorts in [`crate::sort`], or any other three-way comparison.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::route::Route;

/// Ascending by total price.
pub fn by_price(a: &Route, b: &Route) -> Ordering {
    a.total_price().total_cmp(&b.total_price())
}

/// Ascending by total duration.
pub fn by_duration(a: &Route, b: &Route) -> Ordering {
    a.total_duration().cmp(&b.total_duration())
}

/// Ascending by stopover count.
pub fn by_stopovers(a: &Route, b: &Route) -> Ordering {
    a.stopovers().cmp(&b.stopovers())
}

/// Price, then duration, then stopovers; the first difference decides.
pub fn combined(a: &Route, b: &Route) -> Ordering {
    by_price(a, b)
        .then_with(|| by_duration(a, b))
        .then_with(|| by_stopovers(a, b))
}

/// Named selection of one of the route comparators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    Stopovers,
    Combined,
}

impl SortKey {
    pub fn comparator(self) -> fn(&Route, &Route) -> Ordering {
        match self {
            SortKey::Price => by_price,
            SortKey::Duration => by_duration,
            SortKey::Stopovers => by_stopovers,
            SortKey::Combined => combined,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Price => "price (ascending)",
            SortKey::Duration => "duration (ascending)",
            SortKey::Stopovers => "stopovers (ascending)",
            SortKey::Combined => "combined (price, duration, stopovers)",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SortKey::Price => "price",
            SortKey::Duration => "duration",
            SortKey::Stopovers => "stopovers",
            SortKey::Combined => "combined",
        };
        f.write_str(value)
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "duration" => Ok(SortKey::Duration),
            "stopovers" => Ok(SortKey::Stopovers),
            "combined" | "combination" => Ok(SortKey::Combined),
            _ => Err(Error::UnknownSortKey {
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: u32, price: f64, duration: u32, stopovers: usize) -> Route {
        Route::from_parts(id, Vec::new(), duration, price, stopovers)
    }

    #[test]
    fn single_field_orders() {
        let cheap = route(1, 100.0, 500, 2);
        let dear = route(2, 300.0, 200, 0);

        assert_eq!(by_price(&cheap, &dear), Ordering::Less);
        assert_eq!(by_duration(&cheap, &dear), Ordering::Greater);
        assert_eq!(by_stopovers(&cheap, &dear), Ordering::Greater);
        assert_eq!(by_price(&cheap, &cheap), Ordering::Equal);
    }

    #[test]
    fn combined_falls_through_each_field() {
        let a = route(1, 100.0, 300, 1);
        let b = route(2, 100.0, 300, 2);
        let c = route(3, 100.0, 200, 3);
        let d = route(4, 90.0, 900, 3);

        assert_eq!(combined(&a, &b), Ordering::Less);
        assert_eq!(combined(&a, &c), Ordering::Greater);
        assert_eq!(combined(&d, &a), Ordering::Less);
    }

    #[test]
    fn identical_aggregates_compare_equal() {
        let a = route(1, 250.0, 420, 1);
        let b = route(9, 250.0, 420, 1);
        assert_eq!(combined(&a, &b), Ordering::Equal);
        assert_eq!(combined(&b, &a), Ordering::Equal);
    }

    #[test]
    fn combined_is_transitive_over_a_sample() {
        let routes = [
            route(1, 100.0, 300, 1),
            route(2, 100.0, 300, 2),
            route(3, 100.0, 200, 3),
            route(4, 90.0, 900, 3),
            route(5, 250.0, 100, 0),
            route(6, 100.0, 300, 1),
        ];
        for a in &routes {
            for b in &routes {
                assert_eq!(combined(a, b), combined(b, a).reverse());
                for c in &routes {
                    if combined(a, b).is_le() && combined(b, c).is_le() {
                        assert!(combined(a, c).is_le());
                    }
                }
            }
        }
    }

    #[test]
    fn sort_key_selects_comparator() {
        let a = route(1, 100.0, 500, 2);
        let b = route(2, 300.0, 200, 0);
        assert_eq!(SortKey::Price.comparator()(&a, &b), Ordering::Less);
        assert_eq!(SortKey::Duration.comparator()(&a, &b), Ordering::Greater);
        assert_eq!("Combination".parse::<SortKey>().unwrap(), SortKey::Combined);
        assert!("altitude".parse::<SortKey>().is_err());
    }
}
