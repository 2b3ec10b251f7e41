use core_types::CompanyMetrics;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// The direction of the period-over-period signup movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeDirection {
    Increase,
    Decrease,
    NoChange,
    /// The current period had zero signups; the ratio is undefined.
    Undefined,
}

/// The outcome of weighing the previous period's signup count against the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// `round(previous / current * 100)`; fixed at 0 when the ratio is
    /// undefined.
    pub percentage_change: i64,
    pub direction: ChangeDirection,
}

/// Compares two periods' company signup counts.
///
/// The ratio is previous-over-current: a period that doubled its signups
/// yields `percentage_change = 50`, which reads downstream as "50% more
/// signups than the previous period". A value above 100 means signups shrank,
/// and the renderer reports the excess over 100 as the decrease.
pub fn compare(previous: &CompanyMetrics, current: &CompanyMetrics) -> ComparisonResult {
    if current.count == 0 {
        return ComparisonResult {
            percentage_change: 0,
            direction: ChangeDirection::Undefined,
        };
    }

    let ratio = Decimal::from(previous.count) / Decimal::from(current.count);
    let percentage_change = (ratio * Decimal::from(100))
        .round()
        .to_i64()
        .unwrap_or(i64::MAX);

    let direction = if percentage_change < 100 {
        ChangeDirection::Increase
    } else if percentage_change > 100 {
        ChangeDirection::Decrease
    } else {
        ChangeDirection::NoChange
    };

    ComparisonResult {
        percentage_change,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn companies(count: u64) -> CompanyMetrics {
        CompanyMetrics {
            count,
            big_companies: vec![],
        }
    }

    #[test]
    fn doubled_signups_read_as_a_fifty_percent_increase() {
        let result = compare(&companies(50), &companies(100));

        assert_eq!(result.percentage_change, 50);
        assert_eq!(result.direction, ChangeDirection::Increase);
    }

    #[test]
    fn shrunken_signups_read_as_a_decrease_above_one_hundred() {
        let result = compare(&companies(150), &companies(100));

        assert_eq!(result.percentage_change, 150);
        assert_eq!(result.direction, ChangeDirection::Decrease);
    }

    #[test]
    fn identical_counts_read_as_no_change() {
        let result = compare(&companies(80), &companies(80));

        assert_eq!(result.percentage_change, 100);
        assert_eq!(result.direction, ChangeDirection::NoChange);
    }

    #[test]
    fn a_zero_current_count_is_undefined_not_a_fault() {
        let result = compare(&companies(0), &companies(0));
        assert_eq!(result.direction, ChangeDirection::Undefined);
        assert_eq!(result.percentage_change, 0);

        let result = compare(&companies(10), &companies(0));
        assert_eq!(result.direction, ChangeDirection::Undefined);
    }

    #[test]
    fn a_zero_previous_count_is_a_full_increase() {
        let result = compare(&companies(0), &companies(25));

        assert_eq!(result.percentage_change, 0);
        assert_eq!(result.direction, ChangeDirection::Increase);
    }

    #[test]
    fn the_percentage_is_rounded_to_the_nearest_integer() {
        let result = compare(&companies(2), &companies(3));

        // 2/3 of the current count is 66.67%, rounded to 67.
        assert_eq!(result.percentage_change, 67);
        assert_eq!(result.direction, ChangeDirection::Increase);
    }
}
