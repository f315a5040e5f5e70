//! Generic HTTP fetching with status classification and body-shape errors

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Issues one GET to `url` with `query` and parses the JSON body into `T`.
///
/// There is no retry: a failed request is reported to the caller once.
/// The query is kept out of logs because it carries the API key.
///
/// # Errors
/// * Transport: `NetworkTimeout`, `NetworkConnection`, `ApiFetch`
/// * Status: `ApiNotFound` (404), `ApiRateLimit` (429), `ApiClientError` (other 4xx),
///   `ApiServiceUnavailable` (502/503), `ApiServerError` (other 5xx)
/// * Body: `ApiNoData` (empty), `ApiMalformedJson` (not JSON),
///   `ApiUnexpectedStructure` (JSON of the wrong shape)
#[instrument(skip(client, query))]
pub async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).query(query).send().await {
        Ok(resp) => resp,
        Err(e) => {
            let e = e.without_url();
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            let e = e.without_url();
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    parse_body(&response_text, url)
}

/// Parses a response body, telling empty, non-JSON and wrongly-shaped bodies apart.
pub fn parse_body<T: DeserializeOwned>(response_text: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
