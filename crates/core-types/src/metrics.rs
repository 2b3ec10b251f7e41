use serde::Deserialize;

/// A company whose new-user count in the period exceeded 100.
///
/// Arrives verbatim from the analytics service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigCompany {
    pub name: String,
    pub user_count: u64,
}

/// New company signups for one range, with the big-company breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMetrics {
    pub count: u64,
    pub big_companies: Vec<BigCompany>,
}

/// A plain new-user count, used for both the JIRA and Wunderlist resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UserMetric {
    pub count: u64,
}

/// The full set of three metrics for one date range.
///
/// The snapshots for the current and previous range of a request are
/// independent values; they are never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub new_companies: CompanyMetrics,
    pub new_jira_users: UserMetric,
    pub new_wunderlist_users: UserMetric,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_company_payload() {
        let metrics: CompanyMetrics = serde_json::from_str(
            r#"{"count": 20, "bigCompanies": [{"name": "Acme", "userCount": 150}]}"#,
        )
        .unwrap();

        assert_eq!(metrics.count, 20);
        assert_eq!(metrics.big_companies.len(), 1);
        assert_eq!(metrics.big_companies[0].name, "Acme");
        assert_eq!(metrics.big_companies[0].user_count, 150);
    }

    #[test]
    fn deserializes_user_payload() {
        let metric: UserMetric = serde_json::from_str(r#"{"count": 5}"#).unwrap();
        assert_eq!(metric.count, 5);
    }

    #[test]
    fn rejects_company_payload_without_big_companies() {
        assert!(serde_json::from_str::<CompanyMetrics>(r#"{"count": 20}"#).is_err());
    }
}
