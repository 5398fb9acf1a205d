use std::collections::HashMap;

use serde::{de::DeserializeOwned, de::IgnoredAny, Deserialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::{self, Avatar, OvertimeEntry, UserRef, WeekdaySpan, WeekdayStats};
use crate::PresenceUrl;

pub struct PresenceClient {
    client: reqwest::Client,
    base_url: PresenceUrl,
}

impl PresenceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: PresenceUrl::new(base_url),
        }
    }

    /// Creates a client from the `PRESENCE_API_URL` environment variable.
    pub fn from_env() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: PresenceUrl::from_env(),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
    ) -> Result<T, PresenceFetchError> {
        tracing::debug!("GET {}", url.as_ref());

        let resp = self
            .client
            .get(url.as_ref())
            .send()
            .await
            .map_err(|e| PresenceFetchError::ResponseError(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PresenceFetchError::ResponseError(format!(
                "{} returned {}",
                url.as_ref(),
                status
            )));
        }

        resp.json::<T>().await.map_err(|e| {
            PresenceFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    /// Fetches a per-user statistics payload, separating the embedded
    /// "not found" marker from the data before decoding.
    async fn fetch_stats<R, T, F>(
        &self,
        url: PresenceUrl,
        convert: F,
    ) -> Result<StatsResponse<T>, PresenceFetchError>
    where
        R: DeserializeOwned,
        F: FnOnce(R) -> Result<T, PresenceFetchError>,
    {
        let value: Value = self.fetch(url).await?;
        if let Some(payload) = ErrorPayload::from_value(&value) {
            tracing::debug!("backend has no data: {}", payload.message);
            return Ok(StatsResponse::NotFound {
                message: payload.message,
            });
        }

        let raw: R = serde_json::from_value(value).map_err(|e| {
            PresenceFetchError::ParsingError(format!("Unexpected payload shape: {}", e))
        })?;
        Ok(StatsResponse::Ok(convert(raw)?))
    }

    /// Users listing for the selector.
    pub async fn fetch_users(&self) -> Result<Vec<UserRef>, PresenceFetchError> {
        self.fetch(self.base_url.append_path("/api/v1/users")).await
    }

    /// Users listing sourced from the XML roster; entries carry avatar URLs.
    pub async fn fetch_users_xml(&self) -> Result<Vec<UserRef>, PresenceFetchError> {
        self.fetch(self.base_url.append_path("/api/v1/users_xml"))
            .await
    }

    pub async fn fetch_avatar(&self, user_id: i64) -> Result<Avatar, PresenceFetchError> {
        self.fetch(
            self.base_url
                .append_path(&format!("/api/v1/get_avatar/{}", user_id)),
        )
        .await
    }

    /// Total presence seconds per weekday. The backend prepends a header row
    /// with column labels; it is split off into `WeekdayStats`.
    pub async fn fetch_presence_weekday(
        &self,
        user_id: i64,
    ) -> Result<StatsResponse<WeekdayStats>, PresenceFetchError> {
        let url = self
            .base_url
            .append_path(&format!("/api/v1/presence_weekday/{}", user_id));
        self.fetch_stats(url, |raw: Vec<(String, Value)>| {
            WeekdayStats::from_rows(raw).map_err(PresenceFetchError::ParsingError)
        })
        .await
    }

    /// Mean presence seconds per weekday.
    pub async fn fetch_mean_time_weekday(
        &self,
        user_id: i64,
    ) -> Result<StatsResponse<WeekdayStats>, PresenceFetchError> {
        let url = self
            .base_url
            .append_path(&format!("/api/v1/mean_time_weekday/{}", user_id));
        self.fetch_stats(url, |raw: Vec<(String, Value)>| {
            WeekdayStats::from_rows(raw).map_err(PresenceFetchError::ParsingError)
        })
        .await
    }

    /// Average start/end of presence per weekday, in canonical Mon..Sun order.
    pub async fn fetch_presence_start_end(
        &self,
        user_id: i64,
    ) -> Result<StatsResponse<Vec<WeekdaySpan>>, PresenceFetchError> {
        let url = self
            .base_url
            .append_path(&format!("/api/v1/presence_start_end/{}", user_id));
        self.fetch_stats(url, |raw: HashMap<String, domain::RawSpan>| {
            Ok(domain::spans_in_weekday_order(raw))
        })
        .await
    }

    /// Ranked per-employee overtime, company-wide.
    pub async fn fetch_overtime(
        &self,
    ) -> Result<StatsResponse<Vec<OvertimeEntry>>, PresenceFetchError> {
        let url = self.base_url.append_path("/api/v1/overtime/");
        self.fetch_stats(url, |raw: Vec<(IgnoredAny, domain::RawOvertime)>| {
            Ok(raw.into_iter().map(|(_, entry)| entry.into()).collect())
        })
        .await
    }
}

#[derive(Error, Debug)]
pub enum PresenceFetchError {
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

/// A per-user statistics payload: the data, or the "not found" marker the
/// backend embeds in place of it.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsResponse<T> {
    Ok(T),
    NotFound { message: String },
}

/// `{status: 404, message}` body the backend returns in place of statistics
/// when it has no data for the requested user.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    #[serde(alias = "statusCode")]
    pub status: u16,
    pub message: String,
}

impl ErrorPayload {
    fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value::<Self>(value.clone())
            .ok()
            .filter(|payload| payload.status == 404)
    }
}
