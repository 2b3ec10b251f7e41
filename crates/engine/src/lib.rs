//! # Insights Engine
//!
//! The per-request orchestrator of the insights pipeline. It takes the raw
//! period slot extracted by the voice envelope, drives period parsing, range
//! resolution, the two concurrent snapshot fetches, the comparison and the
//! narrative, and degrades every failure into a fixed spoken sentence. No
//! error leaves `handle_request`; causes are logged, not spoken.

use analytics::{comparison, range, report};
use api_client::{AnalyticsApi, fetch_snapshot};
use core_types::Period;
use std::sync::Arc;

pub mod error;

pub use error::EngineError;

/// The central orchestrator for a single insights request.
pub struct InsightsEngine {
    api: Arc<dyn AnalyticsApi>,
}

impl InsightsEngine {
    pub fn new(api: Arc<dyn AnalyticsApi>) -> Self {
        Self { api }
    }

    /// Answers one request with a spoken sentence.
    ///
    /// This is a total function over its input: an absent or unintelligible
    /// slot, an unsupported granularity, and a failing remote service all
    /// come back as fixed phrases rather than errors.
    pub async fn handle_request(&self, when: Option<&str>) -> String {
        let raw = match when {
            Some(raw) if !raw.is_empty() => raw,
            _ => return report::CANNOT_UNDERSTAND.to_string(),
        };

        let period = match raw.parse::<Period>() {
            Ok(period) => period,
            Err(e) => {
                tracing::info!("rejected period slot: {e}");
                return report::CANNOT_UNDERSTAND.to_string();
            }
        };

        match period {
            // Day and week granularities stop here, before any remote call
            // is issued.
            Period::Day(_) | Period::Week { .. } => report::NOT_SUPPORTED.to_string(),
            Period::Month { .. } => match self.month_report(&period).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!("insights pipeline failed: {e}");
                    report::DATA_UNAVAILABLE.to_string()
                }
            },
        }
    }

    /// Runs the full month pipeline: range resolution, two concurrent
    /// snapshot fetches, comparison, narrative.
    async fn month_report(&self, period: &Period) -> Result<String, EngineError> {
        let (current_range, previous_range) = range::resolve(period)?;

        // Neither snapshot depends on the other, so both fetches run at
        // once; the comparison only starts after both have resolved.
        let (current, previous) = tokio::try_join!(
            fetch_snapshot(self.api.as_ref(), current_range),
            fetch_snapshot(self.api.as_ref(), previous_range),
        )?;

        let comparison = comparison::compare(&previous.new_companies, &current.new_companies);

        Ok(report::render(&current, &comparison))
    }
}
