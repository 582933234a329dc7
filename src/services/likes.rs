//! Like service: like / unlike arbitrary resources through a data provider
//!
//! Each call is one stateless round-trip. Provider errors come back unchanged.

use crate::api::{DataProvider, Filter, Pagination, ProviderRequest, ProviderResponse};
use crate::constants::{HYDRA_ID_KEY, OWNER_USERNAME_FILTER, TARGET_FILTER};
use serde_json::{json, Value};

/// Outcome of a toggle (for UI updates)
#[derive(Debug, Clone, PartialEq)]
pub enum LikeToggle {
    /// A like was created; carries the created record
    Liked(ProviderResponse),
    /// The existing like was deleted; carries its identifier and the delete response
    Unliked {
        like_id: String,
        response: ProviderResponse,
    },
}

impl LikeToggle {
    pub fn is_liked(&self) -> bool {
        matches!(self, LikeToggle::Liked(_))
    }
}

#[derive(Debug, Clone)]
pub struct LikeService<P> {
    provider: P,
}

impl<P: DataProvider> LikeService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Unlike: delete the like record `like_id` (as returned by
    /// [`Self::get_like_id_owned_by_current_user`])
    pub async fn delete_like(&self, like_id: &str) -> Result<ProviderResponse, P::Error> {
        log::debug!("[Likes] Deleting like {}", like_id);
        self.provider.call(ProviderRequest::delete(like_id)).await
    }

    /// Like `target_id` in the `resource` collection
    pub async fn create_like(
        &self,
        resource: &str,
        target_id: &str,
    ) -> Result<ProviderResponse, P::Error> {
        log::debug!("[Likes] Liking {} in {}", target_id, resource);
        let payload = json!({ "target": target_id }).to_string();
        self.provider
            .call(ProviderRequest::create(resource, payload))
            .await
    }

    /// First page (one record) of likes pointing at `target_id`.
    /// The envelope's `total` is the like count.
    pub async fn get_likes(
        &self,
        resource: &str,
        target_id: &str,
    ) -> Result<ProviderResponse, P::Error> {
        let mut filter = Filter::new();
        filter.insert(TARGET_FILTER.to_string(), target_id.to_string());

        self.provider
            .call(ProviderRequest::get_many_reference(
                resource,
                Pagination::Paged { items_per_page: 1 },
                filter,
            ))
            .await
    }

    /// Identifier of the like `username` put on `target_id`, if any.
    ///
    /// The provider answers with a collection; `data` is replaced by the
    /// `@id` of its first record (or `None`), all other fields are kept.
    pub async fn get_like_id_owned_by_current_user(
        &self,
        resource: &str,
        target_id: &str,
        username: &str,
    ) -> Result<ProviderResponse<Option<String>>, P::Error> {
        let mut filter = Filter::new();
        filter.insert(TARGET_FILTER.to_string(), target_id.to_string());
        filter.insert(OWNER_USERNAME_FILTER.to_string(), username.to_string());

        let response = self
            .provider
            .call(ProviderRequest::get_many_reference(
                resource,
                Pagination::Disabled,
                filter,
            ))
            .await?;

        Ok(response.map_data(|data| first_id(&data)))
    }

    /// Like if `username` has not liked `target_id` yet, unlike otherwise
    pub async fn toggle_like(
        &self,
        resource: &str,
        target_id: &str,
        username: &str,
    ) -> Result<LikeToggle, P::Error> {
        let own = self
            .get_like_id_owned_by_current_user(resource, target_id, username)
            .await?;

        match own.data {
            Some(like_id) => {
                log::info!("[Likes] Unliking {} ({})", target_id, like_id);
                let response = self.delete_like(&like_id).await?;
                Ok(LikeToggle::Unliked { like_id, response })
            }
            None => {
                log::info!("[Likes] Liking {}", target_id);
                let response = self.create_like(resource, target_id).await?;
                Ok(LikeToggle::Liked(response))
            }
        }
    }
}

/// `data[0]["@id"]` when `data` is a non-empty array.
/// A non-string `@id` counts as no like, same as an empty collection.
fn first_id(data: &Value) -> Option<String> {
    data.as_array()
        .and_then(|records| records.first())
        .and_then(|record| record.get(HYDRA_ID_KEY))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FetchAction, RequestParams};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::fmt;
    use std::sync::Mutex;

    /// Records every request and answers with queued responses
    #[derive(Default)]
    struct RecordingProvider {
        requests: Mutex<Vec<ProviderRequest>>,
        responses: Mutex<VecDeque<ProviderResponse>>,
    }

    impl RecordingProvider {
        fn answering(responses: Vec<ProviderResponse>) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                responses: Mutex::new(responses.into()),
            }
        }

        fn requests(&self) -> Vec<ProviderRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct ProviderFailure(&'static str);

    impl fmt::Display for ProviderFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl std::error::Error for ProviderFailure {}

    #[async_trait]
    impl DataProvider for RecordingProvider {
        type Error = ProviderFailure;

        async fn call(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderFailure> {
            self.requests.lock().unwrap().push(request);
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| ProviderResponse::new(Value::Null)))
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl DataProvider for FailingProvider {
        type Error = ProviderFailure;

        async fn call(&self, _request: ProviderRequest) -> Result<ProviderResponse, ProviderFailure> {
            Err(ProviderFailure("403 Forbidden"))
        }
    }

    fn filter_of(request: &ProviderRequest) -> (&Pagination, &Filter) {
        match &request.params {
            RequestParams::GetManyReference { pagination, filter } => (pagination, filter),
            other => panic!("expected a list request, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_like_sends_id_without_resource() {
        let provider = RecordingProvider::answering(vec![ProviderResponse::new(json!({ "id": "likes/42" }))]);
        let service = LikeService::new(&provider);

        let response = service.delete_like("likes/42").await.unwrap();

        assert_eq!(response.data, json!({ "id": "likes/42" }));
        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, FetchAction::Delete);
        assert_eq!(requests[0].resource, None);
        assert_eq!(requests[0].params, RequestParams::Delete { id: "likes/42".to_string() });
    }

    #[tokio::test]
    async fn create_like_sends_encoded_payload() {
        let created = ProviderResponse::new(json!({ "@id": "/likes/7", "target": "target/123" }));
        let provider = RecordingProvider::answering(vec![created.clone()]);
        let service = LikeService::new(&provider);

        let response = service.create_like("post_likes", "target/123").await.unwrap();

        assert_eq!(response, created);
        let requests = provider.requests();
        assert_eq!(requests[0].kind, FetchAction::Create);
        assert_eq!(requests[0].resource.as_deref(), Some("post_likes"));
        assert_eq!(
            requests[0].params,
            RequestParams::Create { data: r#"{"target":"target/123"}"#.to_string() }
        );
    }

    #[tokio::test]
    async fn get_likes_asks_for_one_item_filtered_by_target() {
        let page = ProviderResponse::new(json!([{ "@id": "/likes/1" }])).with_meta("total", json!(5));
        let provider = RecordingProvider::answering(vec![page.clone()]);
        let service = LikeService::new(&provider);

        let response = service.get_likes("post_likes", "/posts/1").await.unwrap();

        assert_eq!(response, page);
        assert_eq!(response.total(), Some(5));
        let requests = provider.requests();
        assert_eq!(requests[0].kind, FetchAction::GetManyReference);
        assert_eq!(requests[0].resource.as_deref(), Some("post_likes"));
        let (pagination, filter) = filter_of(&requests[0]);
        assert_eq!(*pagination, Pagination::Paged { items_per_page: 1 });
        assert_eq!(filter.len(), 1);
        assert_eq!(filter["target"], "/posts/1");
    }

    #[tokio::test]
    async fn own_like_lookup_filters_by_target_and_owner_without_paging() {
        let provider = RecordingProvider::answering(vec![ProviderResponse::new(json!([]))]);
        let service = LikeService::new(&provider);

        service
            .get_like_id_owned_by_current_user("post_likes", "/posts/1", "jane")
            .await
            .unwrap();

        let requests = provider.requests();
        let (pagination, filter) = filter_of(&requests[0]);
        assert_eq!(*pagination, Pagination::Disabled);
        assert_eq!(filter["target"], "/posts/1");
        assert_eq!(filter["owner.username"], "jane");
    }

    #[tokio::test]
    async fn own_like_lookup_takes_first_id_and_keeps_meta() {
        let provider = RecordingProvider::answering(vec![ProviderResponse::new(json!([
            { "@id": "X" },
            { "@id": "Y" }
        ]))
        .with_meta("total", json!(2))]);
        let service = LikeService::new(&provider);

        let response = service
            .get_like_id_owned_by_current_user("post_likes", "/posts/1", "jane")
            .await
            .unwrap();

        assert_eq!(response.data.as_deref(), Some("X"));
        assert_eq!(response.total(), Some(2));
    }

    #[tokio::test]
    async fn own_like_lookup_is_none_for_empty_or_non_array_data() {
        let shapes = [
            json!([]),
            json!({ "@id": "X" }),
            Value::Null,
            json!("X"),
            json!([{ "target": "t" }]),
            json!([{ "@id": 42 }]),
        ];
        for data in shapes {
            let provider = RecordingProvider::answering(vec![ProviderResponse::new(data.clone())]);
            let service = LikeService::new(&provider);

            let response = service
                .get_like_id_owned_by_current_user("post_likes", "/posts/1", "jane")
                .await
                .unwrap();

            assert_eq!(response.data, None, "data was {}", data);
        }
    }

    #[tokio::test]
    async fn toggle_unlikes_an_existing_like() {
        let provider = RecordingProvider::answering(vec![
            ProviderResponse::new(json!([{ "@id": "/likes/9" }])),
            ProviderResponse::new(json!({ "id": "/likes/9" })),
        ]);
        let service = LikeService::new(&provider);

        let toggle = service.toggle_like("post_likes", "/posts/1", "jane").await.unwrap();

        assert!(!toggle.is_liked());
        assert!(matches!(&toggle, LikeToggle::Unliked { like_id, .. } if like_id == "/likes/9"));
        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1], ProviderRequest::delete("/likes/9"));
    }

    #[tokio::test]
    async fn toggle_likes_when_none_exists() {
        let provider = RecordingProvider::answering(vec![
            ProviderResponse::new(json!([])),
            ProviderResponse::new(json!({ "@id": "/likes/10" })),
        ]);
        let service = LikeService::new(&provider);

        let toggle = service.toggle_like("post_likes", "/posts/1", "jane").await.unwrap();

        assert!(toggle.is_liked());
        let requests = provider.requests();
        assert_eq!(
            requests[1],
            ProviderRequest::create("post_likes", r#"{"target":"/posts/1"}"#)
        );

    }

    #[tokio::test]
    async fn provider_errors_pass_through_unchanged() {
        let service = LikeService::new(FailingProvider);
        let expected = ProviderFailure("403 Forbidden");

        assert_eq!(service.delete_like("likes/42").await.unwrap_err(), expected);
        assert_eq!(service.create_like("post_likes", "/posts/1").await.unwrap_err(), expected);
        assert_eq!(service.get_likes("post_likes", "/posts/1").await.unwrap_err(), expected);
        assert_eq!(
            service
                .get_like_id_owned_by_current_user("post_likes", "/posts/1", "jane")
                .await
                .unwrap_err(),
            expected
        );
        assert_eq!(
            service.toggle_like("post_likes", "/posts/1", "jane").await.unwrap_err(),
            expected
        );
    }
}
