//! Content store access: the store trait, query model and its implementations

pub mod content;
mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::common::StoreError;

pub type Row = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Column equals the value; `Null` matches missing values.
    Eq(String, Value),
}

/// Read query against one table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub columns: Option<String>,
    pub filters: Vec<Filter>,
    /// Column the rows are sorted on, newest or largest first.
    pub order: Option<String>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: &str) -> Self {
        self.columns = Some(columns.to_string());
        self
    }

    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq(column.to_string(), value.into()));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(column.to_string());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Hosted table store. Every error carries a human-readable message.
///
/// Writes are independent; concurrent edits to one record resolve as
/// last-write-wins on the store side.
#[allow(async_fn_in_trait)]
pub trait ContentStore: Clone + 'static {
    async fn select<R: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> Result<Vec<R>, StoreError>;

    async fn select_one<R: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> Result<Option<R>, StoreError> {
        let query = query.clone().limit(1);
        Ok(self.select(table, &query).await?.into_iter().next())
    }

    async fn insert(&self, table: &str, row: &Row) -> Result<(), StoreError>;

    /// Updating an id that no longer exists is not an error.
    async fn update(&self, table: &str, id: Uuid, patch: &Row) -> Result<(), StoreError>;

    /// Deleting an id that no longer exists is not an error.
    async fn delete(&self, table: &str, id: Uuid) -> Result<(), StoreError>;
}
