//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! One request, no pagination, no retries. A non-200 status is reported and
//! treated as "no data"; transport and decoding failures are returned as errors.
//!
//! Typical usage:
//! ```no_run
//! # use restcountries_etl::Client;
//! let client = Client::default();
//! let records = client.extract_data()?;
//! println!("{} countries", records.len());
//! # Ok::<(), restcountries_etl::EtlError>(())
//! ```
use crate::error::{EtlError, Result};
use crate::models::RawCountryRecord;
use log::{debug, info, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Endpoint listing every country.
pub const DEFAULT_URL: &str = "https://restcountries.com/v3.1/all";

#[derive(Debug, Clone)]
pub struct Client {
    pub url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_URL)
    }
}

impl Client {
    /// Build a client that fetches from `url` instead of the public endpoint.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(None::<Duration>) // block until the server answers
            .redirect(Policy::limited(5))
            .user_agent(concat!("restcountries_etl/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            url: url.into(),
            http,
        }
    }

    /// Fetch all country records.
    ///
    /// ### Returns
    /// The parsed JSON array on HTTP 200. Any other status is printed to stdout
    /// (`Error fetching data: <code>`) and yields an empty `Vec`.
    ///
    /// ### Errors
    /// - `EtlError::Transport` when no response was received
    /// - `EtlError::Decode` when a 200 body is not JSON
    /// - `EtlError::UnexpectedShape` when a 200 body is JSON but not an array
    pub fn extract_data(&self) -> Result<Vec<RawCountryRecord>> {
        debug!("GET {}", self.url);
        let resp = self
            .http
            .get(&self.url)
            .send()
            .map_err(|source| EtlError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            warn!("GET {} returned HTTP {}", self.url, status);
            println!("Error fetching data: {}", status.as_u16());
            return Ok(Vec::new());
        }

        let body: Value = resp.json().map_err(|source| EtlError::Decode {
            url: self.url.clone(),
            source,
        })?;

        match body {
            Value::Array(records) => {
                info!("fetched {} records from {}", records.len(), self.url);
                Ok(records)
            }
            other => Err(EtlError::UnexpectedShape {
                url: self.url.clone(),
                found: json_kind(&other),
            }),
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
