use crate::error::AnalyticsError;
use chrono::{Days, NaiveDate, Weekday};
use core_types::{DateRange, Period};

/// Resolves a period into its own half-open date range and the equal-length
/// range immediately before it.
///
/// Returns `(current, previous)`. The two ranges always meet exactly:
/// `previous.to == current.from`, with no gap and no overlap. The calculator
/// treats all three variants alike; it does not know which of them the
/// narrative downstream can already answer.
pub fn resolve(period: &Period) -> Result<(DateRange, DateRange), AnalyticsError> {
    match *period {
        Period::Month { year, month } => {
            let from = first_of_month(year, month)?;
            let (next_year, next_month) = month_after(year, month);
            let to = first_of_month(next_year, next_month)?;
            let (prev_year, prev_month) = month_before(year, month);
            let previous_from = first_of_month(prev_year, prev_month)?;

            Ok((
                DateRange { from, to },
                DateRange {
                    from: previous_from,
                    to: from,
                },
            ))
        }
        Period::Week { year, week } => {
            let from = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
                .ok_or_else(|| unresolvable(period))?;
            let to = from
                .checked_add_days(Days::new(7))
                .ok_or_else(|| unresolvable(period))?;
            let previous_from = from
                .checked_sub_days(Days::new(7))
                .ok_or_else(|| unresolvable(period))?;

            Ok((
                DateRange { from, to },
                DateRange {
                    from: previous_from,
                    to: from,
                },
            ))
        }
        Period::Day(date) => {
            let to = date.succ_opt().ok_or_else(|| unresolvable(period))?;
            let previous_from = date.pred_opt().ok_or_else(|| unresolvable(period))?;

            Ok((
                DateRange { from: date, to },
                DateRange {
                    from: previous_from,
                    to: date,
                },
            ))
        }
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, AnalyticsError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AnalyticsError::UnresolvablePeriod(format!("{year:04}-{month:02}")))
}

/// The calendar month following the given one, wrapping over New Year.
fn month_after(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// The calendar month preceding the given one, wrapping over New Year.
fn month_before(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

fn unresolvable(period: &Period) -> AnalyticsError {
    AnalyticsError::UnresolvablePeriod(format!("{period:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_spans_exactly_one_calendar_month() {
        let (current, previous) = resolve(&Period::Month {
            year: 2024,
            month: 3,
        })
        .unwrap();

        assert_eq!(current.from, date(2024, 3, 1));
        assert_eq!(current.to, date(2024, 4, 1));
        assert_eq!(previous.from, date(2024, 2, 1));
        assert_eq!(previous.to, date(2024, 3, 1));
    }

    #[test]
    fn january_resolves_its_previous_month_into_the_prior_year() {
        let (current, previous) = resolve(&Period::Month {
            year: 2024,
            month: 1,
        })
        .unwrap();

        assert_eq!(current.from, date(2024, 1, 1));
        assert_eq!(current.to, date(2024, 2, 1));
        assert_eq!(previous.from, date(2023, 12, 1));
        assert_eq!(previous.to, date(2024, 1, 1));
    }

    #[test]
    fn december_rolls_its_own_end_into_the_next_year() {
        let (current, _) = resolve(&Period::Month {
            year: 2023,
            month: 12,
        })
        .unwrap();

        assert_eq!(current.from, date(2023, 12, 1));
        assert_eq!(current.to, date(2024, 1, 1));
    }

    #[test]
    fn ranges_always_meet_without_gap_or_overlap() {
        let periods = [
            Period::Month {
                year: 2024,
                month: 6,
            },
            Period::Week {
                year: 2023,
                week: 14,
            },
            Period::Day(date(2024, 3, 5)),
        ];

        for period in &periods {
            let (current, previous) = resolve(period).unwrap();
            assert_eq!(previous.to, current.from, "{period:?}");
            assert!(current.from < current.to, "{period:?}");
            assert!(previous.from < previous.to, "{period:?}");
        }
    }

    #[test]
    fn week_starts_on_iso_monday_and_spans_seven_days() {
        let (current, previous) = resolve(&Period::Week {
            year: 2023,
            week: 14,
        })
        .unwrap();

        assert_eq!(current.from, date(2023, 4, 3));
        assert_eq!(current.to, date(2023, 4, 10));
        assert_eq!(previous.from, date(2023, 3, 27));
    }

    #[test]
    fn day_spans_a_single_day() {
        let (current, previous) = resolve(&Period::Day(date(2024, 3, 1))).unwrap();

        assert_eq!(current.to, date(2024, 3, 2));
        assert_eq!(previous.from, date(2024, 2, 29));
        assert_eq!(previous.to, date(2024, 3, 1));
    }
}
