use super::{ApiRequest, FormPart, Method, RawResponse, Transport};
use crate::config::BaseUrl;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// reqwestによる実通信
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { client })
    }

    fn build_form(parts: Vec<FormPart>) -> Result<Form> {
        let mut form = Form::new();
        for part in parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name, value),
                FormPart::File { name, file } => {
                    let part = Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime_type)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, base: &BaseUrl, request: ApiRequest) -> Result<RawResponse> {
        let url = base.join(request.endpoint.path());
        let method = request.method();
        tracing::debug!(?method, url = %url, "APIリクエスト送信");

        let builder = match method {
            Method::Get => self.client.get(&url).query(&request.query),
            Method::Post => {
                let form = Self::build_form(request.form)?;
                self.client.post(&url).multipart(form)
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        tracing::debug!(status, bytes = body.len(), url = %url, "APIレスポンス受信");

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}
