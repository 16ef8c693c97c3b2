use super::{ApiClient, ApiResponse};
use anyhow::{Result, bail};
use std::path::Path;

fn print_response(label: &str, response: &ApiResponse) {
    println!("{label}: {}", response.status);
    match serde_json::from_str::<serde_json::Value>(&response.body) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default()),
        Err(_) if response.body.is_empty() => {}
        Err(_) => println!("{}", response.body),
    }
}

fn ensure_success(label: &str, response: &ApiResponse) -> Result<()> {
    if !response.status.is_success() {
        bail!("{label} failed with {}", response.status);
    }
    Ok(())
}

fn json_field(response: &ApiResponse, field: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()?
        .get(field)?
        .as_str()
        .map(str::to_string)
}

pub async fn health(client: &ApiClient) -> Result<()> {
    let response = client.health().await?;
    print_response("GET /health", &response);
    ensure_success("health check", &response)
}

pub async fn signup(client: &ApiClient, email: &str, password: &str) -> Result<()> {
    let response = client.signup(email, password).await?;
    print_response("POST /api/v1/users", &response);
    ensure_success("signup", &response)
}

pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<()> {
    let response = client.login(email, password).await?;
    // Only a token prefix; full tokens don't belong in terminal scrollback.
    match json_field(&response, "access_token") {
        Some(token) => {
            let prefix: String = token.chars().take(12).collect();
            println!("POST /api/v1/auth/login: {}", response.status);
            println!("access_token: {prefix}...");
        }
        None => print_response("POST /api/v1/auth/login", &response),
    }
    ensure_success("login", &response)
}

pub async fn transcribe(
    client: &ApiClient,
    file: &Path,
    language: Option<&str>,
    token: Option<&str>,
) -> Result<()> {
    let response = client.submit_transcription(file, language, token).await?;
    print_response("POST /api/v1/transcriptions", &response);
    if let Some(id) = json_field(&response, "id") {
        println!("fetch with: parlance api transcription --id {id}");
    }
    ensure_success("transcription submit", &response)
}

pub async fn transcription(client: &ApiClient, id: &str, token: Option<&str>) -> Result<()> {
    let response = client.get_transcription(id, token).await?;
    print_response(&format!("GET /api/v1/transcriptions/{id}"), &response);
    ensure_success("transcription fetch", &response)
}
