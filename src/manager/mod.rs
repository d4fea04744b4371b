//! Generic create/edit/delete management shared by every admin content kind

mod entities;
pub mod form;

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::common::{FormError, StoreError};
use crate::store::{ContentStore, Query, Row};
use form::{FieldSpec, FormValues, build_payload};

/// Card text for one record in a manager list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub subtitle: String,
    pub badges: Vec<String>,
    pub detail: String,
}

/// A content kind the dashboard can manage.
pub trait Entity: Clone + PartialEq + DeserializeOwned + 'static {
    const TABLE: &'static str;
    /// Listing order, newest/highest first.
    const SORT_KEY: &'static str;
    const NOUN: &'static str;
    const TITLE: &'static str;
    const EMPTY_MESSAGE: &'static str;
    const FAILURE_MESSAGE: &'static str;
    const SHOW_FILTER_COUNTS: bool = false;

    fn id(&self) -> Uuid;

    fn fields() -> &'static [FieldSpec];

    /// Filter options as `(value, label)`; the first is always `all`.
    fn filters() -> &'static [(&'static str, &'static str)];

    fn matches_filter(&self, filter: &str) -> bool;

    /// Form prefilled from this record.
    fn to_form(&self) -> FormValues;

    fn summary(&self) -> Summary;

    /// Derived-field updates after `field` was edited.
    fn on_field_change(_values: &mut FormValues, _field: &str, _creating: bool) {}

    /// Last touch on a validated payload before it is written.
    fn finalize(_row: &mut Row, _now: DateTime<Utc>) {}
}

/// Entities with a published flag that can be flipped from the list.
pub trait Publishable: Entity {
    fn is_published(&self) -> bool;

    fn publish_patch(&self, now: DateTime<Utc>) -> Row {
        let publish = !self.is_published();
        let mut patch = Row::new();
        patch.insert("is_published".to_string(), Value::Bool(publish));
        patch.insert(
            "published_at".to_string(),
            if publish {
                Value::String(now.to_rfc3339())
            } else {
                Value::Null
            },
        );
        patch
    }
}

/// Store operations for one entity kind.
pub struct ContentManager<E, S> {
    store: S,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S: Clone> Clone for ContentManager<E, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, S: ContentStore> ContentManager<E, S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Every record, drafts included, ordered by the entity's sort key.
    pub async fn list(&self) -> Result<Vec<E>, StoreError> {
        self.store
            .select(E::TABLE, &Query::new().order_desc(E::SORT_KEY))
            .await
    }

    /// Creates when `editing` is `None`, otherwise updates that record.
    pub async fn save(&self, editing: Option<Uuid>, values: &FormValues) -> Result<(), FormError> {
        let row = build_payload::<E>(values, Utc::now())?;
        match editing {
            Some(id) => {
                self.store.update(E::TABLE, id, &row).await?;
                tracing::info!(table = E::TABLE, %id, "record updated");
            }
            None => {
                self.store.insert(E::TABLE, &row).await?;
                tracing::info!(table = E::TABLE, "record created");
            }
        }
        Ok(())
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete(E::TABLE, id).await?;
        tracing::info!(table = E::TABLE, %id, "record deleted");
        Ok(())
    }
}

impl<E: Publishable, S: ContentStore> ContentManager<E, S> {
    pub async fn toggle_publish(&self, item: &E) -> Result<(), StoreError> {
        let patch = item.publish_patch(Utc::now());
        self.store.update(E::TABLE, item.id(), &patch).await
    }
}

/// What a manager panel shows: the list or the form over it.
#[derive(Debug, Clone, PartialEq)]
pub enum ManagerView<E> {
    List,
    Create,
    Edit(E),
}

impl<E: Entity> ManagerView<E> {
    pub fn is_form(&self) -> bool {
        !matches!(self, ManagerView::List)
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        match self {
            ManagerView::Edit(item) => Some(item.id()),
            _ => None,
        }
    }

    pub fn initial_values(&self) -> FormValues {
        match self {
            ManagerView::Edit(item) => item.to_form(),
            _ => FormValues::blank::<E>(),
        }
    }

    pub fn heading(&self) -> String {
        match self {
            ManagerView::Edit(_) => format!("Edit {}", E::NOUN),
            _ => format!("Create New {}", E::NOUN),
        }
    }
}
