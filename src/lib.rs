mod client;

pub mod api;

pub use api::alias::{AliasAction, AliasActions, AliasIndexMap, AliasTarget, Aliases};
pub use api::BaseResponse;
pub use client::*;
pub use error::Error;
pub use reqwest::{Client as Reqwest, ClientBuilder as ReqwestBuilder, Method};

mod error {
    use thiserror::Error;
    use tosserror::Toss;

    #[derive(Debug, Error, Toss)]
    #[visibility(pub(crate))]
    pub enum Error {
        #[error("An index name is required for an alias action")]
        MissingIndex,
        #[error("Failed to serialize request body {body} to json")]
        SerializeBody {
            body: String,
            source: serde_json::Error,
        },
        #[error("Request failed to Elasticsearch")]
        ActionFailed(#[source] reqwest::Error),
        #[error("Failed to read response body")]
        ReadBody(#[source] reqwest::Error),
        #[error("Resource at `{path}` not found")]
        NotFound { path: String },
        #[error("Elasticsearch responded with status {status}: {body}")]
        ElasticsearchError { status: u16, body: String },
        #[error("Failed to deserialize text {text} as json")]
        DeserializeText {
            text: String,
            source: serde_json::Error,
        },
        #[error("No alias {alias} found")]
        AliasNotFound { alias: String },
        #[error("Hostname not found")]
        HostnameNotFound,
        #[error("ReqwestBuilder failed to build")]
        ReqwestBuilderFailed(#[source] reqwest::Error),
    }

    impl Error {
        /// Whether the service reported the requested resource as missing.
        pub fn is_not_found(&self) -> bool {
            matches!(self, Error::NotFound { .. } | Error::AliasNotFound { .. })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_is_not_found() {
            assert!(Error::NotFound {
                path: "_alias/logs".to_owned()
            }
            .is_not_found());
            assert!(Error::AliasNotFound {
                alias: "logs".to_owned()
            }
            .is_not_found());

            assert!(!Error::MissingIndex.is_not_found());
            assert!(!Error::ElasticsearchError {
                status: 500,
                body: String::new()
            }
            .is_not_found());
        }

        #[test]
        fn test_display() {
            let err = Error::ElasticsearchError {
                status: 400,
                body: "bad request".to_owned(),
            };
            assert_eq!(
                err.to_string(),
                "Elasticsearch responded with status 400: bad request"
            );
        }
    }
}
