// Hydra (API Platform) implementation of the data provider
use super::{
    DataProvider, FetchAction, Filter, HydraError, Pagination, ProviderRequest, ProviderResponse,
    RequestParams,
};
use crate::config::Config;
use crate::constants::{
    HYDRA_DESCRIPTION, HYDRA_ID_KEY, HYDRA_MEMBER, HYDRA_MEMBER_PLAIN, HYDRA_TOTAL_ITEMS,
    HYDRA_TOTAL_ITEMS_PLAIN, HYDRA_VIEW, ITEMS_PER_PAGE_PARAM, JSON_LD_MIME, PAGINATION_PARAM,
    PROBLEM_DETAIL, TOTAL_FIELD, VIEW_FIELD,
};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};
use serde_json::{json, Value};
use std::time::Duration;

/// Talks JSON-LD to an API Platform entrypoint over HTTP
#[derive(Debug, Clone)]
pub struct HydraProvider {
    client: Client,
    entrypoint: Url,
    token: Option<String>,
}

impl HydraProvider {
    pub fn new(config: &Config) -> Result<Self, HydraError> {
        let entrypoint = Url::parse(&config.entrypoint)
            .map_err(|e| HydraError::Url(format!("{}: {}", config.entrypoint, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        log::debug!("[Hydra] Using entrypoint {}", entrypoint);

        Ok(Self {
            client,
            entrypoint,
            token: config.token.clone(),
        })
    }

    /// `{entrypoint}/{resource}`
    pub fn collection_url(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.entrypoint.as_str().trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }

    /// Resolve an identifier to a URL.
    ///
    /// Rooted IRIs (`/api/likes/42`) and absolute URLs resolve against the host;
    /// relative ones (`likes/42`) are appended to the entrypoint like a collection.
    pub fn item_url(&self, id: &str) -> Result<Url, HydraError> {
        let resolved = if id.starts_with('/') || Url::parse(id).is_ok() {
            self.entrypoint.join(id)
        } else {
            Url::parse(&self.collection_url(id))
        };
        resolved.map_err(|e| HydraError::Url(format!("{}: {}", id, e)))
    }

    pub fn list_url(&self, resource: &str, pagination: Pagination, filter: &Filter) -> String {
        format!(
            "{}?{}",
            self.collection_url(resource),
            build_query(pagination, filter)
        )
    }

    async fn send(&self, builder: RequestBuilder) -> Result<String, HydraError> {
        let mut builder = builder.header(ACCEPT, JSON_LD_MIME);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("[Hydra] Request failed with status {}", status);
            return Err(HydraError::Status {
                status,
                description: error_description(&body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl DataProvider for HydraProvider {
    type Error = HydraError;

    async fn call(&self, request: ProviderRequest) -> Result<ProviderResponse, HydraError> {
        match request.params {
            RequestParams::Create { data } => {
                let resource = request
                    .resource
                    .ok_or(HydraError::MissingResource(FetchAction::Create))?;
                let url = self.collection_url(&resource);
                log::debug!("[Hydra] POST {}", url);

                let body = self
                    .send(
                        self.client
                            .post(&url)
                            .header(CONTENT_TYPE, JSON_LD_MIME)
                            .body(data),
                    )
                    .await?;

                Ok(created_response(serde_json::from_str(&body)?))
            }
            RequestParams::Delete { id } => {
                let url = self.item_url(&id)?;
                log::debug!("[Hydra] DELETE {}", url);

                self.send(self.client.delete(url)).await?;

                Ok(ProviderResponse::new(json!({ "id": id })))
            }
            RequestParams::GetManyReference { pagination, filter } => {
                let resource = request
                    .resource
                    .ok_or(HydraError::MissingResource(FetchAction::GetManyReference))?;
                let url = self.list_url(&resource, pagination, &filter);
                log::debug!("[Hydra] GET {}", url);

                let body = self.send(self.client.get(&url)).await?;

                Ok(collection_response(serde_json::from_str(&body)?))
            }
        }
    }
}

/// Filters first (key order), then the paging switch
pub fn build_query(pagination: Pagination, filter: &Filter) -> String {
    let mut pairs: Vec<String> = filter
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect();

    match pagination {
        Pagination::Disabled => pairs.push(format!("{}=false", PAGINATION_PARAM)),
        Pagination::Paged { items_per_page } => {
            pairs.push(format!("{}={}", ITEMS_PER_PAGE_PARAM, items_per_page))
        }
    }

    pairs.join("&")
}

/// `hydra:Collection` -> `{ data: members, total, view }`
pub fn collection_response(body: Value) -> ProviderResponse {
    let mut collection = match body {
        Value::Object(map) => map,
        other => return ProviderResponse::new(other),
    };

    let members = collection
        .remove(HYDRA_MEMBER)
        .or_else(|| collection.remove(HYDRA_MEMBER_PLAIN))
        .unwrap_or_else(|| Value::Array(Vec::new()));
    let mut response = ProviderResponse::new(members);

    if let Some(total) = collection
        .remove(HYDRA_TOTAL_ITEMS)
        .or_else(|| collection.remove(HYDRA_TOTAL_ITEMS_PLAIN))
    {
        response = response.with_meta(TOTAL_FIELD, total);
    }
    if let Some(view) = collection
        .remove(HYDRA_VIEW)
        .or_else(|| collection.remove(VIEW_FIELD))
    {
        response = response.with_meta(VIEW_FIELD, view);
    }

    response
}

/// Created JSON-LD object, with `id` mirrored from `@id` when the backend left it out
pub fn created_response(mut body: Value) -> ProviderResponse {
    if let Value::Object(record) = &mut body {
        if !record.contains_key("id") {
            if let Some(iri) = record.get(HYDRA_ID_KEY).cloned() {
                record.insert("id".to_string(), iri);
            }
        }
    }
    ProviderResponse::new(body)
}

/// Best human-readable message from an error body (hydra error or RFC 7807 problem)
pub fn error_description(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get(HYDRA_DESCRIPTION)
                .or_else(|| value.get(PROBLEM_DETAIL))
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
