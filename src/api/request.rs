// Request descriptors handed to a data provider
use crate::constants::ITEMS_PER_PAGE_PARAM;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Field name -> value filter for list requests, kept ordered so query strings are stable
pub type Filter = BTreeMap<String, String>;

/// Kind of data provider call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchAction {
    Create,
    Delete,
    GetManyReference,
}

/// Paging for list requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// Ask the backend for the whole collection (`pagination: false`)
    Disabled,
    Paged { items_per_page: u32 },
}

impl Serialize for Pagination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Pagination::Disabled => serializer.serialize_bool(false),
            Pagination::Paged { items_per_page } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(ITEMS_PER_PAGE_PARAM, items_per_page)?;
                map.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequestParams {
    Delete {
        id: String,
    },
    /// `data` is already JSON text; providers send it as is
    Create {
        data: String,
    },
    GetManyReference {
        pagination: Pagination,
        filter: Filter,
    },
}

/// One call to a data provider: `{ type, resource?, params }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderRequest {
    #[serde(rename = "type")]
    pub kind: FetchAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    pub params: RequestParams,
}

impl ProviderRequest {
    /// Delete by identifier. No collection name; the id addresses the record directly.
    pub fn delete(id: impl Into<String>) -> Self {
        Self {
            kind: FetchAction::Delete,
            resource: None,
            params: RequestParams::Delete { id: id.into() },
        }
    }

    pub fn create(resource: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            kind: FetchAction::Create,
            resource: Some(resource.into()),
            params: RequestParams::Create { data: data.into() },
        }
    }

    pub fn get_many_reference(
        resource: impl Into<String>,
        pagination: Pagination,
        filter: Filter,
    ) -> Self {
        Self {
            kind: FetchAction::GetManyReference,
            resource: Some(resource.into()),
            params: RequestParams::GetManyReference { pagination, filter },
        }
    }
}
