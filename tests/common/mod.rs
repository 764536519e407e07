#![allow(dead_code)]

use bytes::Bytes;
use elastisei::{Error, Method, Transport};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

type Reply = Box<dyn Fn() -> Result<Bytes, Error> + Send + Sync>;

/// Transport that records every request and answers with a fixed reply.
pub struct Recorder {
    requests: Mutex<Vec<Request>>,
    reply: Reply,
}

impl Recorder {
    pub fn new(reply: impl Fn() -> Result<Bytes, Error> + Send + Sync + 'static) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reply: Box::new(reply),
        }
    }

    pub fn json(value: serde_json::Value) -> Self {
        let body = Bytes::from(value.to_string());
        Self::new(move || Ok(body.clone()))
    }

    pub fn not_found() -> Self {
        Self::new(|| {
            Err(Error::NotFound {
                path: "_alias/missing".to_owned(),
            })
        })
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for Recorder {
    async fn execute(
        &self,
        method: Method,
        path: &[&str],
        _query: &[(&str, &str)],
        body: Option<Bytes>,
    ) -> Result<Bytes, Error> {
        let body = body.map(|b| serde_json::from_slice(&b).unwrap());

        self.requests.lock().unwrap().push(Request {
            method,
            path: path.join("/"),
            body,
        });

        (self.reply)()
    }
}
