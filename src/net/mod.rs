// src/net/mod.rs
use std::path::Path;

use reqwest::blocking::{multipart, Client};
use thiserror::Error;

use crate::model::{AnalysisResult, HistoryRecord};

/// Errors from the backend API boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection-level failure (DNS, refused, reset).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body could not be decoded as the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The selected dataset file could not be read for upload.
    #[error("could not read dataset file: {0}")]
    File(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Blocking client for the analysis backend. Calls are made from background
/// threads; see the controllers in `state`.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// POST the dataset as a multipart form and decode the returned
    /// statistics. The server answers 201 on success; any 2xx is accepted.
    pub fn upload_dataset(&self, path: &Path) -> Result<AnalysisResult, ApiError> {
        let form = multipart::Form::new()
            .file("file", path)
            .map_err(|e| ApiError::File(e.to_string()))?;

        let response = self.http.post(self.endpoint("upload/")).multipart(form).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json::<AnalysisResult>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET the most recent upload records, in the order the server returns
    /// them (most recent first by convention).
    pub fn fetch_history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        let response = self.http.get(self.endpoint("history/")).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json::<Vec<HistoryRecord>>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_fixture() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,type,flowrate,pressure,temperature").unwrap();
        writeln!(file, "P-101,Pump,120.5,3.2,75.0").unwrap();
        file
    }

    #[test]
    fn upload_decodes_analysis_result() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/upload/")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "total_equipment_count": 1,
                    "average_flowrate": 120.5,
                    "average_pressure": 3.2,
                    "average_temperature": 75.0,
                    "equipment_type_distribution": {"Pump": 1}
                }"#,
            )
            .create();

        let client = ApiClient::new(server.url());
        let file = csv_fixture();
        let result = client.upload_dataset(file.path()).unwrap();
        assert_eq!(result.total_equipment_count, 1);
        assert_eq!(result.average_flowrate, 120.5);
        mock.assert();
    }

    #[test]
    fn upload_maps_non_2xx_to_status_error() {
        let mut server = mockito::Server::new();
        server.mock("POST", "/upload/").with_status(400).with_body("bad csv").create();

        let client = ApiClient::new(server.url());
        let file = csv_fixture();
        match client.upload_dataset(file.path()) {
            Err(ApiError::Status(400)) => {}
            other => panic!("expected Status(400), got {:?}", other.err()),
        }
    }

    #[test]
    fn upload_maps_bad_body_to_decode_error() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/upload/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create();

        let client = ApiClient::new(server.url());
        let file = csv_fixture();
        assert!(matches!(client.upload_dataset(file.path()), Err(ApiError::Decode(_))));
    }

    #[test]
    fn history_decodes_record_list() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/history/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id": 5, "dataset_name": "run5.csv", "uploaded_at": "2024-05-02T09:00:00Z"}]"#,
            )
            .create();

        let client = ApiClient::new(server.url());
        let records = client.fetch_history().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].dataset_name, "run5.csv");
    }

    #[test]
    fn history_maps_server_error_to_status() {
        let mut server = mockito::Server::new();
        server.mock("GET", "/history/").with_status(500).create();

        let client = ApiClient::new(server.url());
        assert!(matches!(client.fetch_history(), Err(ApiError::Status(500))));
    }

    #[test]
    fn unreachable_server_is_a_transport_error() {
        // Port 1 is never listening.
        let client = ApiClient::new("http://127.0.0.1:1/api");
        assert!(matches!(client.fetch_history(), Err(ApiError::Transport(_))));
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = ApiClient::new("http://127.0.0.1:8000/api/");
        assert_eq!(client.endpoint("upload/"), "http://127.0.0.1:8000/api/upload/");
    }
}
