/// Shared infrastructure concerns
///
/// Implementations used by the adapters of several modules.
pub mod http_client;

pub use http_client::RateLimitClient;
