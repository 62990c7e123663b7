//! テスト用のメモリ上トランスポート

use async_trait::async_trait;
use mirqab::transport::{ApiRequest, Endpoint, RawResponse, Transport};
use mirqab::{ApiClient, BaseUrl, MirqabError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct StubTransport {
    responses: Arc<Mutex<HashMap<Endpoint, RawResponse>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

#[allow(dead_code)]
impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// エンドポイントの応答を登録（未登録は接続エラー）
    pub fn respond(self, endpoint: Endpoint, response: RawResponse) -> Self {
        self.responses.lock().unwrap().insert(endpoint, response);
        self
    }

    pub fn respond_json(self, endpoint: Endpoint, status: u16, body: serde_json::Value) -> Self {
        self.respond(endpoint, RawResponse::json(status, &body))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("リクエストが送信されていない")
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(BaseUrl::default(), self.clone())
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, _base: &BaseUrl, request: ApiRequest) -> Result<RawResponse> {
        let endpoint = request.endpoint;
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .get(&endpoint)
            .cloned()
            .ok_or_else(|| MirqabError::Connection("connection refused".into()))
    }
}
