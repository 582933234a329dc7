//! Like / unlike helpers for hydra (JSON-LD) REST backends.
//!
//! [`services::LikeService`] shapes the requests; any [`api::DataProvider`]
//! carries them. [`api::HydraProvider`] is the HTTP one.

pub mod api;
pub mod config;
pub mod constants;
pub mod services;
pub mod utils;

pub use api::{DataProvider, HydraError, HydraProvider, ProviderRequest, ProviderResponse};
pub use config::Config;
pub use services::{LikeService, LikeToggle};
