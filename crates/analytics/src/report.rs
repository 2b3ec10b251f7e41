use crate::comparison::{ChangeDirection, ComparisonResult};
use core_types::MetricsSnapshot;

/// Greeting spoken when the assistant is launched without a question.
pub const WELCOME: &str = "Welcome to Business Insights. Ask for data about a time period.";

/// Apology spoken when the slot value is missing or not a recognized period.
pub const CANNOT_UNDERSTAND: &str = "Sorry, I could not understand that time period.";

/// Stub sentence for the day and week granularities.
pub const NOT_SUPPORTED: &str = "I cannot answer that for single days or weeks yet.";

/// Degraded response when any remote retrieval fails or times out.
pub const DATA_UNAVAILABLE: &str =
    "Sorry, the business data is temporarily unavailable. Please try again later.";

/// Renders the spoken narrative for one period and its comparison against the
/// period before it.
///
/// Pure and deterministic: identical inputs produce the identical string. The
/// template is fixed: headline user counts, the company signup sentence, an
/// enumeration of the larger companies when there are any, and a closing
/// sentence selected by the comparison direction.
pub fn render(current: &MetricsSnapshot, comparison: &ComparisonResult) -> String {
    let mut text = format!(
        "In this period there were {} new JIRA users and {} new Wunderlist users.",
        current.new_jira_users.count, current.new_wunderlist_users.count
    );

    text.push_str(&format!(
        " There were {} new company signups, {} of them with more than 100 users.",
        current.new_companies.count,
        current.new_companies.big_companies.len()
    ));

    if !current.new_companies.big_companies.is_empty() {
        text.push_str(" The larger companies:");
        for company in &current.new_companies.big_companies {
            text.push_str(&format!(
                " {} with {} users.",
                company.name, company.user_count
            ));
        }
    }

    match comparison.direction {
        ChangeDirection::Increase => text.push_str(&format!(
            " There were {}% more signups than in the previous period.",
            comparison.percentage_change
        )),
        ChangeDirection::Decrease => text.push_str(&format!(
            " There were {}% fewer signups than in the previous period.",
            comparison.percentage_change - 100
        )),
        ChangeDirection::NoChange => text.push_str(&format!(
            " The previous period also had {} new signups.",
            current.new_companies.count
        )),
        ChangeDirection::Undefined => text.push_str(
            " With no signups in this period, a comparison with the previous period is not possible.",
        ),
    }

    text
}
