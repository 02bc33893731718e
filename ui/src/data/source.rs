//! HTTP access to the published documents.

use serde::de::DeserializeOwned;

use super::SkyData;
use crate::core::config::DataSource;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode {url}: {message}")]
    Decode { url: String, message: String },
}

pub async fn fetch_current(source: &DataSource) -> Result<SkyData, DataError> {
    fetch_json(&source.current_url).await
}

/// Historical snapshots, oldest first as published.
pub async fn fetch_history(source: &DataSource) -> Result<Vec<SkyData>, DataError> {
    fetch_json(&source.history_url).await
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, DataError> {
    tracing::debug!(%url, "fetching sky data");

    let response = reqwest::get(url).await.map_err(|err| DataError::Request {
        url: url.to_string(),
        message: err.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|err| DataError::Request {
        url: url.to_string(),
        message: err.to_string(),
    })?;

    decode(url, &body)
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, DataError> {
    serde_json::from_str(body).map_err(|err| DataError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SAMPLE_JSON;

    #[test]
    fn decodes_current_document() {
        let data: SkyData = decode("current.json", SAMPLE_JSON).unwrap();
        assert_eq!(data.stats.dominant_color, "gray");
    }

    #[test]
    fn decode_errors_name_the_document() {
        let err = decode::<SkyData>("history.json", "{\"timestamp\": 3}").unwrap_err();
        assert!(matches!(err, DataError::Decode { ref url, .. } if url == "history.json"));
        assert!(err.to_string().starts_with("could not decode history.json"));
    }

    #[test]
    fn status_error_message() {
        let err = DataError::Status {
            url: "current.json".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "current.json answered with HTTP 404");
    }
}
