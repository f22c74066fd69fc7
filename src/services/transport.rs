use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};

use crate::error::ReaderSyncError;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Non-2xx statuses come back as replies, only transport failures are errors.
#[async_trait]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpReply, ReaderSyncError>;

    async fn post_form(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: String,
    ) -> Result<HttpReply, ReaderSyncError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ReaderSyncError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(HttpTransport { client })
    }
}

pub fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, ReaderSyncError> {
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ReaderSyncError::Config(format!("header name '{}': {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ReaderSyncError::Config(format!("header value for '{}': {}", name, e)))?;
        if map.insert(name.clone(), value).is_some() {
            return Err(ReaderSyncError::Config(format!(
                "header '{}' is configured more than once",
                name
            )));
        }
    }

    Ok(map)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, ReaderSyncError> {
        let res = self.client.get(url).send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(HttpReply { status, body })
    }

    async fn post_form(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: String,
    ) -> Result<HttpReply, ReaderSyncError> {
        let res = self
            .client
            .post(url)
            .headers(to_header_map(headers)?)
            .body(body)
            .send()
            .await?;
        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(HttpReply { status, body })
    }
}
