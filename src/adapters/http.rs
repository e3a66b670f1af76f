use crate::config::ClientConfig;
use crate::domain::model::{ApiErrorBody, AvailableSlots, Slot};
use crate::domain::ports::SlotSource;
use crate::utils::error::{ClientError, Result, SlotsError};
use reqwest::Client;
use std::fmt::Display;
use std::time::Duration;
use url::Url;

pub const AVAILABLE_SLOTS_PATH: &str = "/appointments/available-slots";

/// HTTP client for the appointment backend's availability route.
#[derive(Debug, Clone)]
pub struct SlotsClient {
    client: Client,
    base_url: Url,
}

impl SlotsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_timeout(
            &config.base_url,
            config.request_timeout_seconds.map(Duration::from_secs),
        )
    }

    fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        crate::utils::validation::validate_url("base_url", base_url)?;
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// `{base}/appointments/available-slots?date=<date>`, with the date
    /// percent-encoded as given.
    pub fn slots_url(&self, date: &(dyn Display + Sync)) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(AVAILABLE_SLOTS_PATH);
        url.query_pairs_mut()
            .clear()
            .append_pair("date", &date.to_string());
        url
    }

    /// See [`crate::core::slots::check_available_slots`].
    pub async fn check_available_slots(&self, date: &(dyn Display + Sync)) -> Vec<Slot> {
        crate::core::slots::check_available_slots(self, date).await
    }
}

#[async_trait::async_trait]
impl SlotSource for SlotsClient {
    async fn fetch(
        &self,
        date: &(dyn Display + Sync),
    ) -> std::result::Result<AvailableSlots, SlotsError> {
        let url = self.slots_url(date);
        tracing::debug!("Requesting available slots: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(SlotsError::Transport)?;
        let status = response.status();
        tracing::debug!("Available slots response status: {}", status);

        let body = response.bytes().await.map_err(SlotsError::Transport)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            return Err(SlotsError::Status { status, message });
        }

        serde_json::from_slice(&body).map_err(SlotsError::Parse)
    }
}
