//! DataSource Trait
//!
//! Abstraction over where table records come from: the REST backend or an
//! in-memory set (fixtures, tests).

use std::cmp::Ordering;
use std::collections::HashMap;

use futures::future::{self, BoxFuture};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

use crate::domain::record::Record;
use crate::domain::resource::ResourceKind;
use crate::error::Result;

/// Query parameters of a collection request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub skip: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_desc: Option<bool>,
}

impl PageQuery {
    /// Unsorted window
    pub fn window(skip: usize, limit: usize) -> Self {
        Self {
            skip,
            limit,
            sort_by: None,
            sort_desc: None,
        }
    }

    /// Add server-side ordering
    pub fn sorted(mut self, column: impl Into<String>, descending: bool) -> Self {
        self.sort_by = Some(column.into());
        self.sort_desc = Some(descending);
        self
    }
}

/// Trait for providing records to a table
pub trait DataSource: Send + Sync {
    /// Fetch one window of a collection in server order
    fn fetch_page(&self, kind: ResourceKind, query: PageQuery)
    -> BoxFuture<'_, Result<Vec<Record>>>;
}

/// Simple in-memory data source.
///
/// Applies `sort_by`/`sort_desc` and `skip`/`limit` the way the backend does.
#[derive(Debug, Default)]
pub struct VecDataSource {
    collections: RwLock<HashMap<ResourceKind, Vec<Record>>>,
}

impl VecDataSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style collection setup
    pub fn with_records(self, kind: ResourceKind, records: Vec<Record>) -> Self {
        self.set_records(kind, records);
        self
    }

    /// Replace a collection
    pub fn set_records(&self, kind: ResourceKind, records: Vec<Record>) {
        self.collections.write().insert(kind, records);
    }

    /// Number of records held for a collection
    pub fn len(&self, kind: ResourceKind) -> usize {
        self.collections.read().get(&kind).map_or(0, Vec::len)
    }

    /// Run a query synchronously
    pub fn query(&self, kind: ResourceKind, query: &PageQuery) -> Vec<Record> {
        let collections = self.collections.read();
        let Some(records) = collections.get(&kind) else {
            return Vec::new();
        };

        let mut rows: Vec<&Record> = records.iter().collect();
        if let Some(column) = &query.sort_by {
            rows.sort_by(|a, b| compare_values(a.get(column), b.get(column)));
            if query.sort_desc.unwrap_or(false) {
                rows.reverse();
            }
        }

        rows.into_iter()
            .skip(query.skip)
            .take(query.limit)
            .cloned()
            .collect()
    }
}

impl DataSource for VecDataSource {
    fn fetch_page(
        &self,
        kind: ResourceKind,
        query: PageQuery,
    ) -> BoxFuture<'_, Result<Vec<Record>>> {
        Box::pin(future::ready(Ok(self.query(kind, &query))))
    }
}

/// Ordering used for in-memory sorting: missing and null first, then
/// booleans, numbers, strings, and compound values as JSON text.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(_) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => match rank(a).cmp(&rank(b)) {
            Ordering::Equal if rank(a) == 0 => Ordering::Equal,
            Ordering::Equal => {
                let text = |v: Option<&Value>| v.map(Value::to_string).unwrap_or_default();
                text(a).cmp(&text(b))
            }
            other => other,
        },
    }
}
