use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;

use crate::http_client::{ClientConfig, HttpClient};
use crate::{Request, Response, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct ReqwestHttpClient {
    client: Client,
}

impl HttpClient for ReqwestHttpClient {
    fn create(config: ClientConfig) -> Result<ReqwestHttpClient>
    where
        Self: Sized,
    {
        // reqwest's blocking client gives up after 30s unless told otherwise
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.ssl_check)
            .timeout(None::<Duration>)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed building http client")?;

        Ok(ReqwestHttpClient { client })
    }

    fn execute(&self, request: &Request) -> Result<Response> {
        // reqwest errors carry the full url, query string and all
        let response = self
            .client
            .get(&request.url)
            .send()
            .map_err(|err| anyhow::Error::new(err.without_url()))
            .with_context(|| format!("Failed requesting {}", request.target()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| anyhow::Error::new(err.without_url()))
            .with_context(|| format!("Failed reading response from {}", request.target()))?;

        Ok(Response {
            status_code: status.as_u16(),
            status: match status.canonical_reason() {
                Some(reason) => format!("{} {}", status.as_u16(), reason),
                None => status.as_u16().to_string(),
            },
            body,
        })
    }
}
