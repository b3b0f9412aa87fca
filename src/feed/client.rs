//! HTTP clients for the stats API and the liquidity indexer.
//!
//! Both clients are constructed explicitly by the caller and own their
//! `reqwest` client; nothing is cached between calls.

use super::types::{Feed, GraphQlRequest, GraphQlResponse, LiquidityData, QueryParams};
use crate::parser::schema::RawLiquiditySample;
use crate::utils::config::{DEFAULT_REQUEST_TIMEOUT, GRAPH_PAGE_SIZE};
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::{Client, Response};
use reqwest::Url;

/// Client for the REST stats API
pub struct RestClient {
    client: Client,
    base_url: Url,
}

impl RestClient {
    /// Create a new client for the API rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client()?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Full request URL for a feed
    pub fn series_url(&self, feed: Feed, params: &QueryParams) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join(feed.path())
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", feed.path(), e)))?;

        url.query_pairs_mut().extend_pairs(params.to_pairs());

        Ok(url)
    }

    /// Fetch a feed as a raw JSON payload
    ///
    /// # Arguments
    /// * `feed` - Feed to request
    /// * `params` - Period and range sent as query parameters
    ///
    /// # Returns
    /// The response body, unparsed
    ///
    /// # Errors
    /// * `FetchError::InvalidUrl` - Feed URL cannot be built
    /// * `FetchError::RequestFailed` - Transport error or a body that is not JSON
    /// * `FetchError::InvalidResponse` - Non-success status or a body that is not an array
    ///
    /// # Example
    /// ```ignore
    /// let client = RestClient::new("https://stats.example.com")?;
    /// let payload = client.fetch(Feed::Fees, &QueryParams::new(from, to))?;
    /// ```
    pub fn fetch(&self, feed: Feed, params: &QueryParams) -> Result<serde_json::Value, FetchError> {
        let url = self.series_url(feed, params)?;

        info!("Fetching {} feed: {}", feed, url);

        let response = self.client.get(url).send()?;
        let payload: serde_json::Value = check_status(response)?.json()?;

        if !payload.is_array() {
            return Err(FetchError::InvalidResponse(format!(
                "Expected a JSON array from the {} feed",
                feed
            )));
        }

        Ok(payload)
    }
}

/// Client for the GraphQL liquidity indexer
pub struct GraphClient {
    client: Client,
    url: Url,
}

impl GraphClient {
    /// Create a new client for the indexer endpoint
    pub fn new(url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client()?,
            url: Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?,
        })
    }

    /// Fetch liquidity samples ordered by timestamp
    pub fn fetch_liquidity(&self) -> Result<Vec<RawLiquiditySample>, FetchError> {
        let request = GraphQlRequest::liquidity(GRAPH_PAGE_SIZE);

        info!("Querying liquidity samples from {}", self.url);
        debug!("GraphQL query: {}", request.query);

        let response = self.client.post(self.url.clone()).json(&request).send()?;
        let body: GraphQlResponse<LiquidityData> = check_status(response)?.json()?;

        let data = extract_data(body)?;
        debug!("Indexer returned {} samples", data.add_liquidities.len());

        Ok(data.add_liquidities)
    }
}

fn build_client() -> Result<Client, FetchError> {
    Client::builder()
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .build()
        .map_err(FetchError::RequestFailed)
}

/// Parse the API base URL, making sure feed paths join below it
fn parse_base_url(base_url: &str) -> Result<Url, FetchError> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    Url::parse(&normalized).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))
}

fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(FetchError::InvalidResponse(format!(
        "HTTP {}: {}",
        status,
        response.text().unwrap_or_default()
    )))
}

/// Unwrap a GraphQL envelope, surfacing reported errors
fn extract_data<T>(response: GraphQlResponse<T>) -> Result<T, FetchError> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(FetchError::GraphQl(messages.join("; ")));
    }

    response
        .data
        .ok_or_else(|| FetchError::InvalidResponse("Missing data field".to_string()))
}
