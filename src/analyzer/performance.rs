// src/analyzer/performance.rs
// =============================================================================
// Simple download timing for the target URL.
//
// time to first byte = until the response headers arrive
// total download     = until the body has been read completely
// Both are in seconds, rounded to milliseconds.
// =============================================================================

use std::time::{Duration, Instant};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::client::HttpClient;
use crate::error::NetworkError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub time_to_first_byte: Option<f64>,
    pub total_download: Option<f64>,
    pub status_code: Option<u16>,
    pub error: Option<String>,
}

pub async fn analyze_performance(client: &HttpClient, url: &str) -> PerformanceReport {
    match time_download(client, url).await {
        Ok((first_byte, total, status_code)) => PerformanceReport {
            time_to_first_byte: Some(round_secs(first_byte)),
            total_download: Some(round_secs(total)),
            status_code: Some(status_code),
            error: None,
        },
        Err(e) => {
            warn!("performance check of {} failed: {}", url, e);
            PerformanceReport {
                error: Some(e.to_string()),
                ..PerformanceReport::default()
            }
        }
    }
}

async fn time_download(
    client: &HttpClient,
    url: &str,
) -> Result<(Duration, Duration, u16), NetworkError> {
    let start = Instant::now();
    let response = client.get(url, client.config().performance_timeout).await?;
    let first_byte = start.elapsed();

    let status_code = response.status().as_u16();
    response
        .bytes()
        .await
        .map_err(|e| NetworkError::Body(e.to_string()))?;
    let total = start.elapsed();

    Ok((first_byte, total, status_code))
}

fn round_secs(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1000.0).round() / 1000.0
}
