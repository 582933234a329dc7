use crate::constants::TOTAL_FIELD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What a data provider resolves with: a `data` field plus whatever
/// metadata the provider puts next to it (totals, paging views, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse<T = Value> {
    #[serde(default)]
    pub data: T,
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl<T> ProviderResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Map::new(),
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    /// Replace `data` with a derived value, keeping every other field as is
    pub fn map_data<U, F>(self, f: F) -> ProviderResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ProviderResponse {
            data: f(self.data),
            meta: self.meta,
        }
    }

    /// Collection size reported by the backend, if any
    pub fn total(&self) -> Option<u64> {
        self.meta.get(TOTAL_FIELD).and_then(Value::as_u64)
    }
}
