use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

pub mod alias;

/// Acknowledgement envelope returned by write requests.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse {
    pub acknowledged: Option<bool>,
    pub ok: Option<bool>,
    pub error: Option<Value>,
    pub status: Option<u16>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BaseResponse {
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged.or(self.ok).unwrap_or(false)
    }
}
