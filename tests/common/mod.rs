#![allow(dead_code)]

use std::sync::Mutex;

use hh_api::{ClientConfig, HhClient, HttpExecutor, HttpRequest, HttpResponse, TransportError};
use serde_json::Value;

pub fn fixture(name: &str) -> Value {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{path}: {e}"));
    serde_json::from_str(&raw).unwrap()
}

/// Answers every request with the same response and remembers what it was asked.
pub struct ScriptedExecutor {
    response: HttpResponse,
    seen: Mutex<Vec<HttpRequest>>,
}

impl ScriptedExecutor {
    pub fn new(status: u16, reason: &str, body: Value) -> Self {
        Self {
            response: HttpResponse {
                status,
                reason: reason.to_string(),
                body,
            },
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(200, "OK", body)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl HttpExecutor for ScriptedExecutor {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

impl HttpExecutor for &ScriptedExecutor {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request).await
    }
}

pub fn client(executor: &ScriptedExecutor) -> HhClient<&ScriptedExecutor> {
    HhClient::new(ClientConfig::new("test-token"), executor)
}
