//! HTTP client for the analysis API.
//!
//! Keep the public surface small: the client, its builder and the retry
//! policy. Status mapping and endpoint tables stay internal.

pub mod builder;
pub mod core;
mod endpoint;
mod error_classification;
pub mod policy;

pub use builder::AnalysisClientBuilder;
pub use self::core::AnalysisClient;
pub use endpoint::{NETWORK_ERROR_MESSAGE, SERVER_UNREACHABLE_MESSAGE};
pub use policy::RetryPolicy;
