use crate::error::ApiError;
use async_trait::async_trait;
use chrono::NaiveDate;
use configuration::ApiSettings;
use core_types::{CompanyMetrics, DateRange, MetricsSnapshot, UserMetric};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub mod error;

/// The per-product discriminator of the `newUsers/{id}` resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCategory {
    Jira,
    Wunderlist,
}

impl UserCategory {
    /// The numeric resource id the service uses for this product.
    pub fn resource_id(&self) -> u32 {
        match self {
            UserCategory::Jira => 16,
            UserCategory::Wunderlist => 17,
        }
    }
}

/// The generic, abstract interface for the store analytics API.
/// This trait is the contract that the engine works against, allowing the
/// underlying implementation (live or mock) to be swapped out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// Fetches the new company signups for a range, including the breakdown
    /// of companies that brought more than 100 users.
    async fn fetch_new_companies(&self, range: DateRange) -> Result<CompanyMetrics, ApiError>;

    /// Fetches the new-user count of one product category for a range.
    async fn fetch_new_users(
        &self,
        category: UserCategory,
        range: DateRange,
    ) -> Result<UserMetric, ApiError>;
}

/// Retrieves the full metrics snapshot for one date range.
///
/// The three retrievals are independent and issued concurrently; the first
/// failure cancels the ones still in flight and fails the snapshot as a
/// whole. There is no partial result.
pub async fn fetch_snapshot(
    api: &dyn AnalyticsApi,
    range: DateRange,
) -> Result<MetricsSnapshot, ApiError> {
    let (new_companies, new_jira_users, new_wunderlist_users) = tokio::try_join!(
        api.fetch_new_companies(range),
        api.fetch_new_users(UserCategory::Jira, range),
        api.fetch_new_users(UserCategory::Wunderlist, range),
    )?;

    Ok(MetricsSnapshot {
        new_companies,
        new_jira_users,
        new_wunderlist_users,
    })
}

/// A concrete implementation of the `AnalyticsApi` for the store analytics
/// service.
#[derive(Clone)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    /// Builds the client once at startup. The credential travels as a default
    /// header on every request; configuration has already validated it, so a
    /// failure here is a programming error rather than a runtime condition.
    pub fn new(api_config: &ApiSettings) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "userAuthToken",
            HeaderValue::from_str(&api_config.auth_token).expect("Invalid auth token"),
        );

        Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .timeout(Duration::from_secs(api_config.timeout_secs))
                .build()
                .expect("Failed to build reqwest client"),
            base_url: api_config.base_url.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        range: DateRange,
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(&range_query(&range))
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        serde_json::from_str::<T>(&text).map_err(|e| ApiError::Deserialization {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl AnalyticsApi for StoreClient {
    async fn fetch_new_companies(&self, range: DateRange) -> Result<CompanyMetrics, ApiError> {
        self.get_json("newCompanies", range).await
    }

    async fn fetch_new_users(
        &self,
        category: UserCategory,
        range: DateRange,
    ) -> Result<UserMetric, ApiError> {
        let endpoint = format!("newUsers/{}", category.resource_id());
        self.get_json(&endpoint, range).await
    }
}

/// Renders the half-open range as the service's inclusive-from, exclusive-to
/// query pair: sortable ISO 8601 timestamps, UTC, no fractional seconds.
fn range_query(range: &DateRange) -> [(&'static str, String); 2] {
    [
        ("from", timestamp(range.from)),
        ("to", timestamp(range.to)),
    ]
}

fn timestamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%dT00:00:00").to_string()
}
