use crate::{api::alias::Aliases, error::*, Error};
use bytes::Bytes;
use reqwest::{header::CONTENT_TYPE, Client as Reqwest, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::{future::Future, sync::Arc};
use tracing::{debug, instrument};

pub mod builder;
use builder::*;

/// Executes a single command against the search service.
///
/// `path` is a list of url segments appended to the service host, joined by `/`.
/// Implementations return the raw response body on success and report a missing
/// resource with an error for which [`Error::is_not_found`] is `true`.
pub trait Transport {
    fn execute(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, &str)],
        body: Option<Bytes>,
    ) -> impl Future<Output = Result<Bytes, Error>> + Send;

    fn aliases(&self) -> Aliases<'_, Self>
    where
        Self: Sized,
    {
        Aliases::new(self)
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    pub reqwest: Reqwest,
    hostname: Arc<String>,
}

impl Client {
    pub fn new(hostname: &str) -> Self {
        Self::builder()
            .hostname(hostname)
            .build()
            .expect("Default Reqwest Client should build successfully")
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub(crate) fn url(&self, path: &[&str]) -> String {
        let hostname = self.hostname.as_str();
        let len = path.iter().map(|p| p.len() + 1).sum::<usize>();

        let mut url = String::with_capacity(hostname.len() + len);
        url.push_str(hostname);
        for p in path {
            url.push('/');
            url.push_str(p);
        }

        url
    }
}

impl Transport for Client {
    #[instrument(skip(self, body))]
    async fn execute(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, &str)],
        body: Option<Bytes>,
    ) -> Result<Bytes, Error> {
        let url = self.url(path);
        debug!(%method, %url, "sending request");

        let mut req = self.reqwest.request(method, &url).query(query);
        if let Some(body) = body {
            req = req.body(body);
        }

        let res = req.send().await.map_err(Error::ActionFailed)?;
        let status = res.status();
        debug!(%status, "received response");

        let bytes = res.bytes().await.map_err(Error::ReadBody)?;

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                path: path.join("/"),
            });
        }

        if !status.is_success() {
            return Err(Error::ElasticsearchError {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes)
    }
}

pub(crate) fn from_json<R: DeserializeOwned>(bytes: &[u8]) -> Result<R, Error> {
    serde_json::from_slice(bytes)
        .toss_deserialize_text_with(|| String::from_utf8_lossy(bytes).into_owned())
}
