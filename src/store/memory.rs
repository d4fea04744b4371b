use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use super::{ContentStore, Filter, Query, Row};
use crate::common::StoreError;

/// In-process [`ContentStore`] with the same observable semantics as the
/// hosted one: ids and timestamps are assigned on insert, missing ids are
/// no-ops for update and delete, `DESC` orders nulls first.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Tables>>,
}

#[derive(Default)]
struct Tables {
    rows: HashMap<String, Vec<Row>>,
    pending_failure: Option<StoreError>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Inserts rows as-is (ids and timestamps included).
    pub fn seed(&self, table: &str, rows: impl IntoIterator<Item = Value>) {
        let mut tables = self.lock();
        let entries = tables.rows.entry(table.to_string()).or_default();
        for row in rows {
            if let Value::Object(row) = row {
                entries.push(row);
            }
        }
    }

    /// Makes the next call fail with `error`.
    pub fn fail_next(&self, error: StoreError) {
        self.lock().pending_failure = Some(error);
    }

    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.lock().rows.get(table).cloned().unwrap_or_default()
    }

    pub fn find(&self, table: &str, id: Uuid) -> Option<Row> {
        self.lock()
            .rows
            .get(table)
            .and_then(|rows| rows.iter().find(|r| has_id(r, id)).cloned())
    }

    fn take_failure(tables: &mut Tables) -> Result<(), StoreError> {
        match tables.pending_failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ContentStore for MemoryStore {
    async fn select<R: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> Result<Vec<R>, StoreError> {
        let mut rows = {
            let mut tables = self.lock();
            Self::take_failure(&mut tables)?;
            tables.rows.get(table).cloned().unwrap_or_default()
        };

        rows.retain(|row| query.filters.iter().all(|f| matches(row, f)));

        if let Some(column) = &query.order {
            rows.sort_by(|a, b| compare(a.get(column), b.get(column)).reverse());
        }

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        rows.into_iter()
            .map(|row| serde_json::from_value(Value::Object(row)).map_err(StoreError::from))
            .collect()
    }

    async fn insert(&self, table: &str, row: &Row) -> Result<(), StoreError> {
        let mut tables = self.lock();
        Self::take_failure(&mut tables)?;

        let now = Value::String(Utc::now().to_rfc3339());
        let mut row = row.clone();
        row.entry("id")
            .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        row.entry("created_at").or_insert_with(|| now.clone());
        row.entry("updated_at").or_insert(now);

        tables.rows.entry(table.to_string()).or_default().push(row);
        Ok(())
    }

    async fn update(&self, table: &str, id: Uuid, patch: &Row) -> Result<(), StoreError> {
        let mut tables = self.lock();
        Self::take_failure(&mut tables)?;

        let now = Value::String(Utc::now().to_rfc3339());
        if let Some(row) = tables
            .rows
            .get_mut(table)
            .and_then(|rows| rows.iter_mut().find(|r| has_id(r, id)))
        {
            for (key, value) in patch {
                row.insert(key.clone(), value.clone());
            }
            row.insert("updated_at".to_string(), now);
        }
        Ok(())
    }

    async fn delete(&self, table: &str, id: Uuid) -> Result<(), StoreError> {
        let mut tables = self.lock();
        Self::take_failure(&mut tables)?;

        if let Some(rows) = tables.rows.get_mut(table) {
            rows.retain(|r| !has_id(r, id));
        }
        Ok(())
    }
}

fn has_id(row: &Row, id: Uuid) -> bool {
    row.get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        == Some(id)
}

fn matches(row: &Row, filter: &Filter) -> bool {
    match filter {
        Filter::Eq(column, expected) => row.get(column).unwrap_or(&Value::Null) == expected,
    }
}

/// Ascending order with nulls last, like Postgres.
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match (a, b) {
            (Value::Number(x), Value::Number(y)) => {
                let x = x.as_f64().unwrap_or_default();
                let y = y.as_f64().unwrap_or_default();
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
            (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
            (Value::String(x), Value::String(y)) => x.cmp(y),
            _ => Ordering::Equal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_desc_order_puts_nulls_first() {
        let store = MemoryStore::new();
        store.seed(
            "posts",
            vec![
                json!({"id": Uuid::new_v4(), "title": "a", "published_at": "2024-01-01T00:00:00Z"}),
                json!({"id": Uuid::new_v4(), "title": "b", "published_at": null}),
                json!({"id": Uuid::new_v4(), "title": "c", "published_at": "2024-06-01T00:00:00Z"}),
            ],
        );

        let rows: Vec<Value> = store
            .select("posts", &Query::new().order_desc("published_at"))
            .await
            .unwrap();
        let titles: Vec<&str> = rows.iter().map(|r| r["title"].as_str().unwrap()).collect();
        assert_eq!(titles, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_insert_assigns_identity() {
        let store = MemoryStore::new();
        let mut row = Row::new();
        row.insert("name".into(), json!("Rust"));
        store.insert("skills", &row).await.unwrap();

        let rows = store.rows("skills");
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains_key("id"));
        assert!(rows[0].contains_key("created_at"));
        assert!(rows[0].contains_key("updated_at"));
    }

    #[tokio::test]
    async fn test_null_filter_matches_missing_values() {
        let store = MemoryStore::new();
        store.seed(
            "certifications",
            vec![
                json!({"id": Uuid::new_v4(), "expiry_date": null}),
                json!({"id": Uuid::new_v4()}),
                json!({"id": Uuid::new_v4(), "expiry_date": "2030-01-01"}),
            ],
        );

        let rows: Vec<Value> = store
            .select("certifications", &Query::new().eq("expiry_date", Value::Null))
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_injected_failure_is_consumed_once() {
        let store = MemoryStore::new();
        store.fail_next(StoreError::Transport("connection reset".into()));

        let first = store.select::<Value>("posts", &Query::new()).await;
        assert_eq!(first, Err(StoreError::Transport("connection reset".into())));

        let second = store.select::<Value>("posts", &Query::new()).await;
        assert_eq!(second, Ok(vec![]));
    }
}
