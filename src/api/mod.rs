// Data provider layer: request descriptors, response envelope, HTTP backend

pub mod errors;
pub mod hydra;
pub mod provider;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use errors::HydraError;
pub use hydra::HydraProvider;
pub use provider::DataProvider;
pub use request::{FetchAction, Filter, Pagination, ProviderRequest, RequestParams};
pub use response::ProviderResponse;
