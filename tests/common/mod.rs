//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use pardot_api::{
    AccessToken, BusinessUnitId, HostUrl, HttpError, HttpRequest, HttpResponse, PardotConfig,
    Transport,
};
use serde_json::json;
use tracing_subscriber::fmt::MakeWriter;

pub const BUSINESS_UNIT_ID: &str = "0Uv000000000001AAA";
pub const ACCESS_TOKEN: &str = "test-access-token";

/// A transport that records every request and answers `200 {}`.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Transport for RecordingTransport {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse::new(200, HashMap::new(), json!({})))
    }
}

/// Creates a config pointing at `host`.
pub fn create_test_config(host: &str) -> PardotConfig {
    PardotConfig::builder()
        .access_token(AccessToken::new(ACCESS_TOKEN).unwrap())
        .business_unit_id(BusinessUnitId::new(BUSINESS_UNIT_ID).unwrap())
        .host(HostUrl::new(host).unwrap())
        .build()
        .unwrap()
}

/// Writes `contents` to `name` inside `dir` and returns the path.
pub fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

/// Collects formatted `tracing` output written while a guard is held.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Installs a subscriber writing into this capture for the current thread.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
