//! HTTP client for the booking API.

use super::converter::{BookingDto, BookingStatusPatch, DataConverter, Envelope, EventDto};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::state::{Event, EventId, Order, OrderId};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const BOOKINGS_PATH: &str = "api/events/venue-booking/";
const EVENTS_PATH: &str = "api/events/event/";

/// Remote operations the orders page relies on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// List the caller's event-venue bookings.
    async fn list_bookings(&self) -> Result<Vec<Order>>;

    /// Fetch a single event by ID.
    async fn get_event(&self, id: EventId) -> Result<Event>;

    /// Mark a booking unconfirmed.
    async fn cancel_booking(&self, id: OrderId) -> Result<()>;

    /// Remove a booking.
    async fn delete_booking(&self, id: OrderId) -> Result<()>;
}

/// Builder for creating an API client.
pub struct ApiClientBuilder {
    config: ApiConfig,
}

impl ApiClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the bearer token sent with each request.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.config.auth_token = Some(token.into());
        self
    }

    /// Build the API client.
    pub fn build(self) -> Result<ApiClient> {
        ApiClient::new(self.config)
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// reqwest-backed implementation of [`BookingApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let mut headers = HeaderMap::new();
        if let Some(token) = config.auth_token.as_deref().filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| Error::config(format!("invalid auth token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The normalized base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn bookings_url(&self) -> Result<Url> {
        Ok(self.base_url.join(BOOKINGS_PATH)?)
    }

    fn booking_url(&self, id: OrderId) -> Result<Url> {
        Ok(self.base_url.join(&format!("{BOOKINGS_PATH}{id}/"))?)
    }

    fn event_url(&self, id: EventId) -> Result<Url> {
        Ok(self.base_url.join(&format!("{EVENTS_PATH}{id}/"))?)
    }

    /// Decode an enveloped JSON response.
    ///
    /// Error statuses still carry an envelope on this API; its `code`/`msg`
    /// win over the bare HTTP status when present.
    async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return match serde_json::from_slice::<Envelope<serde_json::Value>>(&body) {
                Ok(envelope) => Err(Error::api(envelope.code, envelope.msg)),
                Err(_) => Err(Error::Status(status)),
            };
        }

        serde_json::from_slice::<Envelope<T>>(&body)?.into_result()
    }
}

#[async_trait]
impl BookingApi for ApiClient {
    async fn list_bookings(&self) -> Result<Vec<Order>> {
        let url = self.bookings_url()?;
        tracing::debug!(%url, "listing bookings");

        let response = self.http.get(url).send().await?;
        let bookings: Vec<BookingDto> = Self::read_envelope(response).await?;
        DataConverter::convert_orders(bookings)
    }

    async fn get_event(&self, id: EventId) -> Result<Event> {
        let url = self.event_url(id)?;
        tracing::debug!(%url, "fetching event");

        let response = self.http.get(url).send().await?;
        let event: EventDto = Self::read_envelope(response).await?;
        Ok(DataConverter::convert_event(event))
    }

    async fn cancel_booking(&self, id: OrderId) -> Result<()> {
        let url = self.booking_url(id)?;
        tracing::debug!(%url, "cancelling booking");

        let response = self
            .http
            .patch(url)
            .json(&BookingStatusPatch {
                booking_status: false,
            })
            .send()
            .await?;
        let _: serde_json::Value = Self::read_envelope(response).await?;
        Ok(())
    }

    async fn delete_booking(&self, id: OrderId) -> Result<()> {
        let url = self.booking_url(id)?;
        tracing::debug!(%url, "deleting booking");

        let response = self.http.delete(url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Status(status))
        }
    }
}
