use super::{Client, CONTENT_TYPE};
use crate::Error;
use reqwest::header::{HeaderMap, HeaderValue};
use std::{env, sync::Arc};
use tracing::instrument;

pub const ELASTICSEARCH_HOSTNAME_ENV: &str = "ELASTICSEARCH_HOSTNAME";
pub const JSON_CONTENT_TYPE: HeaderValue = HeaderValue::from_static("application/json");

#[derive(Debug)]
pub struct ClientBuilder {
    hostname: Option<String>,
    reqwest_builder: Option<reqwest::ClientBuilder>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            reqwest_builder: None,
            hostname: env::var(ELASTICSEARCH_HOSTNAME_ENV).ok(),
        }
    }

    pub fn hostname(mut self, hostname: impl ToString) -> Self {
        self.hostname.replace(hostname.to_string());
        self
    }

    pub fn reqwest_builder(mut self, builder: reqwest::ClientBuilder) -> Self {
        self.reqwest_builder.replace(builder);
        self
    }

    #[instrument]
    pub fn build(self) -> Result<Client, Error> {
        let hostname = self.hostname.ok_or(Error::HostnameNotFound)?;
        let hostname = hostname.trim_end_matches('/').to_owned();

        let mut builder = self.reqwest_builder.unwrap_or_default();

        let mut header_map = HeaderMap::new();
        header_map.insert(CONTENT_TYPE, JSON_CONTENT_TYPE);
        builder = builder.default_headers(header_map);

        let reqwest = builder.build().map_err(Error::ReqwestBuilderFailed)?;

        Ok(Client {
            reqwest,
            hostname: Arc::new(hostname),
        })
    }
}
