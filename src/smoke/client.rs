use crate::settings;
use anyhow::{Context, Result};
use reqwest::{RequestBuilder, StatusCode, multipart};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Thin wrapper over the transcription/user API for manual smoke checks.
/// It never interprets responses beyond status + body; the operator reads
/// the output.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &settings::Api) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_token(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }

    pub async fn health(&self) -> Result<ApiResponse> {
        Self::send(self.http.get(self.url("/health"))).await
    }

    pub async fn signup(&self, email: &str, password: &str) -> Result<ApiResponse> {
        let request = self
            .http
            .post(self.url("/api/v1/users"))
            .json(&SignupRequest { email, password });
        Self::send(request).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<ApiResponse> {
        let request = self
            .http
            .post(self.url("/api/v1/auth/login"))
            .json(&LoginRequest { email, password });
        Self::send(request).await
    }

    pub async fn submit_transcription(
        &self,
        file: &Path,
        language: Option<&str>,
        token: Option<&str>,
    ) -> Result<ApiResponse> {
        let bytes = tokio::fs::read(file)
            .await
            .with_context(|| format!("read {}", file.display()))?;
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        let mut form =
            multipart::Form::new().part("file", multipart::Part::bytes(bytes).file_name(file_name));
        if let Some(language) = language {
            form = form.text("language", language.to_string());
        }

        let request = Self::with_token(
            self.http.post(self.url("/api/v1/transcriptions")),
            token,
        )
        .multipart(form);
        Self::send(request).await
    }

    pub async fn get_transcription(&self, id: &str, token: Option<&str>) -> Result<ApiResponse> {
        let request = Self::with_token(
            self.http.get(self.url(&format!("/api/v1/transcriptions/{id}"))),
            token,
        );
        Self::send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&settings::Api {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn url_joining_tolerates_trailing_slash() {
        assert_eq!(
            client("http://localhost:8000").url("/health"),
            "http://localhost:8000/health"
        );
        assert_eq!(
            client("http://localhost:8000/").url("/health"),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn login_request_shape() {
        let body = serde_json::to_value(LoginRequest {
            email: "ops@example.com",
            password: "pw",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "ops@example.com", "password": "pw"})
        );
    }
}
