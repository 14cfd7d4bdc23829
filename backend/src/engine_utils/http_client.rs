use std::sync::OnceLock;

use anyhow::Context;

use crate::config::{SearchBackendConfig, get_config};

pub fn build_http_client(config: &SearchBackendConfig) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()
        .context("failed to build search http client")
}

/// Client for the process-wide config, built once.
pub fn get_http_client() -> anyhow::Result<reqwest::Client> {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    if let Some(client) = CLIENT.get() {
        return Ok(client.clone());
    }
    let client = build_http_client(get_config())?;
    Ok(CLIENT.get_or_init(|| client).clone())
}

/// Sends the request and returns the body, failing on non-2xx status and timeouts.
pub async fn fetch_text(request: reqwest::RequestBuilder, engine: &str) -> anyhow::Result<String> {
    let t0 = std::time::Instant::now();
    let response = request.send().await.map_err(|e| describe_send_error(e, engine))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| describe_send_error(e, engine))?;
    tracing::debug!("{engine} answered {status} in {:?} ({} bytes)", t0.elapsed(), body.len());
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("{engine} error: {}: {}", status, body);
    }
    Ok(body)
}

fn describe_send_error(e: reqwest::Error, engine: &str) -> anyhow::Error {
    if e.is_timeout() {
        anyhow::anyhow!("{engine} request timed out: {e}")
    } else {
        anyhow::anyhow!("{engine} request failed: {e}")
    }
}
