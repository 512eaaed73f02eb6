//! HTTP client for the ChainStream backend

use crate::config::{ClientConfig, CONNECT_TIMEOUT, REQUEST_TIMEOUT};
use crate::error::{ClientError, Result};
use async_trait::async_trait;
use chainstream_core::{Artist, ArtistId, SearchResults, Track, Transaction};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Body of `POST /api/artists/:id/pay`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    pub amount: f64,
    pub from_address: String,
}

/// Successful payment response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub message: String,
    pub transaction: Transaction,
}

/// Error body returned by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Where payments are recorded
#[async_trait]
pub trait PaymentBackend: Send + Sync {
    async fn pay_artist(&self, artist_id: ArtistId, request: &PayRequest)
        -> Result<PaymentReceipt>;
}

/// `PaymentBackend` talking to the REST API over reqwest
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_tracks(&self) -> Result<Vec<Track>> {
        self.get_json("/api/tracks").await
    }

    pub async fn get_artist(&self, artist_id: ArtistId) -> Result<Artist> {
        self.get_json(&format!("/api/artists/{artist_id}")).await
    }

    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        let url = format!("{}/api/search", self.base_url);
        debug!(url = %url, query, "Searching catalog");

        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(map_send_error)?;

        parse_response(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "GET");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;
        parse_response(response).await
    }
}

#[async_trait]
impl PaymentBackend for HttpBackend {
    async fn pay_artist(
        &self,
        artist_id: ArtistId,
        request: &PayRequest,
    ) -> Result<PaymentReceipt> {
        let url = format!("{}/api/artists/{artist_id}/pay", self.base_url);
        debug!(url = %url, amount = request.amount, "Submitting payment");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(map_send_error)?;

        parse_response(response).await
    }
}

fn map_send_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse response: {e}")))
    } else {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);

        Err(ClientError::ServerError {
            status: status.as_u16(),
            message,
        })
    }
}
