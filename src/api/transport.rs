use std::future::Future;

use derive_getters::Getters;
use derive_new::new;
use reqwest::{Client, StatusCode, header::HeaderMap};

use crate::config::Config;

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct RawResponse {
    status: StatusCode,
    body: String,
}

impl RawResponse {
    pub fn into_body(self) -> String {
        self.body
    }
}

pub trait Transport {
    fn get(
        &self,
        url: &str,
        headers: HeaderMap,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(*timeout);
        }

        Ok(Self::new(builder.build()?))
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<RawResponse, TransportError> {
        let res = self.client.get(url).headers(headers).send().await?;
        let status = res.status();
        let body = res.text().await?;

        Ok(RawResponse::new(status, body))
    }
}
