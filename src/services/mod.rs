/// Services module - like / unlike logic on top of a data provider
///
/// Services hold no state of their own; everything goes through the injected provider.

pub mod likes;

// Re-export commonly used types
pub use likes::{LikeService, LikeToggle};
