use crate::{
    client::{from_json, Transport},
    error::*,
    BaseResponse, Error,
};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

const ALIASES_PATH: &'static str = "_aliases";
const ALIAS_PATH: &'static str = "_alias";

/// Indices backing an alias, keyed by index name.
pub type AliasIndexMap = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasTarget {
    pub index: String,
    pub alias: String,
}

impl AliasTarget {
    pub fn new(index: impl ToString, alias: impl ToString) -> Self {
        Self {
            index: index.to_string(),
            alias: alias.to_string(),
        }
    }
}

/// A single entry of an alias batch.
///
/// When both `remove` and `add` are set, the service detaches and attaches in one step.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasAction {
    pub add: Option<AliasTarget>,
    pub remove: Option<AliasTarget>,
}

impl AliasAction {
    pub fn add(index: impl ToString, alias: impl ToString) -> Self {
        Self {
            add: Some(AliasTarget::new(index, alias)),
            remove: None,
        }
    }

    pub fn remove(index: impl ToString, alias: impl ToString) -> Self {
        Self {
            add: None,
            remove: Some(AliasTarget::new(index, alias)),
        }
    }

    /// Moves `alias` from `old_index` to `new_index`; an empty index leaves that side out.
    pub fn swap(old_index: &str, new_index: &str, alias: &str) -> Self {
        let mut action = Self::default();

        if !old_index.is_empty() {
            action.remove.replace(AliasTarget::new(old_index, alias));
        }

        if !new_index.is_empty() {
            action.add.replace(AliasTarget::new(new_index, alias));
        }

        action
    }
}

/// Ordered batch of alias actions applied atomically by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasActions {
    pub actions: Vec<AliasAction>,
}

impl AliasActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, action: AliasAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn add(self, index: impl ToString, alias: impl ToString) -> Self {
        self.push(AliasAction::add(index, alias))
    }

    pub fn remove(self, index: impl ToString, alias: impl ToString) -> Self {
        self.push(AliasAction::remove(index, alias))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl From<AliasAction> for AliasActions {
    fn from(action: AliasAction) -> Self {
        Self {
            actions: vec![action],
        }
    }
}

#[derive(Debug)]
pub struct Aliases<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> Aliases<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Aliases<'a, T> {
        Self { transport }
    }

    /// Submits `actions` to the service as one request.
    #[instrument(skip(self))]
    pub async fn update(&self, actions: &AliasActions) -> Result<BaseResponse, Error> {
        let body =
            serde_json::to_vec(actions).toss_serialize_body_with(|| format!("{actions:?}"))?;

        let res = self
            .transport
            .execute(Method::POST, &[ALIASES_PATH], &[], Some(body.into()))
            .await?;

        from_json(&res)
    }

    #[instrument(skip(self))]
    pub async fn add(&self, index: &str, alias: &str) -> Result<BaseResponse, Error> {
        if index.is_empty() {
            return Err(Error::MissingIndex);
        }

        self.update(&AliasAction::add(index, alias).into()).await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, index: &str, alias: &str) -> Result<BaseResponse, Error> {
        if index.is_empty() {
            return Err(Error::MissingIndex);
        }

        self.update(&AliasAction::remove(index, alias).into()).await
    }

    #[instrument(skip(self))]
    pub async fn swap(
        &self,
        old_index: &str,
        new_index: &str,
        alias: &str,
    ) -> Result<BaseResponse, Error> {
        self.update(&AliasAction::swap(old_index, new_index, alias).into())
            .await
    }

    #[instrument(skip(self))]
    pub async fn exists(&self, alias: &str) -> Result<bool, Error> {
        match self
            .transport
            .execute(Method::GET, &[ALIAS_PATH, alias], &[], None)
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => {
                debug!("alias does not exist");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Returns the first index, by name, that `alias` points to.
    #[instrument(skip(self))]
    pub async fn resolve_index(&self, alias: &str) -> Result<String, Error> {
        self.retrieve(alias)
            .await?
            .into_keys()
            .next()
            .ok_or_else(|| Error::AliasNotFound {
                alias: alias.to_owned(),
            })
    }

    #[instrument(skip(self))]
    pub async fn resolve_indices(&self, alias: &str) -> Result<Vec<String>, Error> {
        let indices: Vec<String> = self.retrieve(alias).await?.into_keys().collect();

        if indices.is_empty() {
            return Err(Error::AliasNotFound {
                alias: alias.to_owned(),
            });
        }

        Ok(indices)
    }

    async fn retrieve(&self, alias: &str) -> Result<AliasIndexMap, Error> {
        let res = self
            .transport
            .execute(Method::GET, &[ALIAS_PATH, alias], &[], None)
            .await?;

        from_json(&res)
    }
}
