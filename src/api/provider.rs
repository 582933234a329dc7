use super::{ProviderRequest, ProviderResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Anything that can turn a request descriptor into a response.
///
/// Errors are whatever the implementation produces; callers above this
/// trait pass them through untouched.
#[async_trait]
pub trait DataProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn call(&self, request: ProviderRequest) -> Result<ProviderResponse, Self::Error>;
}

#[async_trait]
impl<P: DataProvider + ?Sized> DataProvider for Arc<P> {
    type Error = P::Error;

    async fn call(&self, request: ProviderRequest) -> Result<ProviderResponse, Self::Error> {
        (**self).call(request).await
    }
}

#[async_trait]
impl<'a, P: DataProvider + ?Sized> DataProvider for &'a P {
    type Error = P::Error;

    async fn call(&self, request: ProviderRequest) -> Result<ProviderResponse, Self::Error> {
        (**self).call(request).await
    }
}
